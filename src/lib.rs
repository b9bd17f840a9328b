// Copyright 2025 the Wavesculpt Authors
// SPDX-License-Identifier: Apache-2.0

//! Wavesculpt: an anchor-based force waveform editor engine
//!
//! Users place anchors (time, value) with optional tangent angles; the
//! engine turns them into a fixed-rate sample sequence through piecewise
//! cubic Hermite interpolation, and drives pointer interaction (create,
//! drag, rotate handles, pan, delete) over a pixel-space plot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod curve;
pub mod data;
pub mod editing;
pub mod error;
pub mod model;
pub mod settings;

pub use curve::{sample, sample_curve};
pub use data::{AnchorPreset, BakedMotion};
pub use editing::{CurveSession, EditCommand, MouseEvent};
pub use error::CurveError;
pub use model::{Anchor, AnchorId, AnchorStore, CurveParams, Direction, Side};
pub use settings::EditorConfig;

/// Command line of the `wavesculpt` tool
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CliCommand {
    /// Sample a preset and print (or write) the baked motion JSON
    Bake {
        /// Anchor preset JSON
        preset: PathBuf,
        /// Editor config TOML
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the baked motion here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the four actuator waveforms of a preset or baked motion
    Channels {
        /// Anchor preset or baked motion JSON
        input: PathBuf,
    },
}

/// Entry point for the command-line tool
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wavesculpt=info".parse()?),
        )
        .init();

    tracing::debug!("[run] {:?}", cli.command);
    match cli.command {
        CliCommand::Bake {
            preset,
            config,
            out,
        } => bake(&preset, config.as_deref(), out.as_deref()),
        CliCommand::Channels { input } => channels(&input),
    }
}

/// Sample a preset and emit the playback payload
fn bake(preset_path: &Path, config_path: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let config = config_path
        .map(EditorConfig::load_from_file)
        .unwrap_or_default();
    let preset = data::load_preset(preset_path)?;

    let mut session = CurveSession::new(preset.curve_params(), config);
    session
        .load_preset(&preset)
        .with_context(|| format!("Invalid preset {}", preset_path.display()))?;
    let baked = session.bake();
    tracing::info!(
        "Baked '{}': {} samples over {:.2}s",
        baked.name,
        baked.parameters.data.len(),
        baked.parameters.duration
    );

    match out {
        Some(path) => data::save_json(path, &baked),
        None => {
            println!("{}", serde_json::to_string_pretty(&baked)?);
            Ok(())
        }
    }
}

/// Print the four actuator waveforms of a preset or baked motion
fn channels(input: &Path) -> Result<()> {
    let baked = match data::load_preset(input) {
        Ok(preset) => preset.bake(),
        Err(preset_err) => {
            tracing::debug!("[channels] not a preset: {:#}", preset_err);
            data::load_baked(input).with_context(|| {
                format!("{} is neither a preset nor a baked motion", input.display())
            })?
        }
    };
    let [fl, fr, rl, rr] = baked.channels();
    let output = serde_json::json!({ "fl": fl, "fr": fr, "rl": rl, "rr": rr });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, clap::Error> {
        Cli::try_parse_from(std::iter::once("wavesculpt").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn parse_bake() {
        let cmd = parse(&["bake", "p.json", "--config", "e.toml"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Bake {
                preset: PathBuf::from("p.json"),
                config: Some(PathBuf::from("e.toml")),
                out: None,
            }
        );
    }

    #[test]
    fn parse_bake_with_out_first() {
        let cmd = parse(&["bake", "-o", "m.json", "p.json"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Bake {
                preset: PathBuf::from("p.json"),
                config: None,
                out: Some(PathBuf::from("m.json")),
            }
        );
    }

    #[test]
    fn parse_channels() {
        let cmd = parse(&["channels", "m.json"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Channels {
                input: PathBuf::from("m.json")
            }
        );
    }

    #[test]
    fn parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["bake"]).is_err());
        assert!(parse(&["bake", "a", "b"]).is_err());
        assert!(parse(&["bake", "a", "--config"]).is_err());
        assert!(parse(&["channels"]).is_err());
        assert!(parse(&["draw"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
