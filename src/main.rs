// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Wavesculpt command-line tool

fn main() -> anyhow::Result<()> {
    wavesculpt::run()
}
