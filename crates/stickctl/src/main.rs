//! stickctl - Extreme 3D Pro report decoder
//!
//! Decodes raw HID input reports given as hex on the command line, on stdin,
//! or in `hid-capture` JSON files. Talking to the device is left to the host
//! HID stack.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod capture;
mod config;
mod error;
mod output;
mod session;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flightstick_hid_common::{hid_traits::replay::ReplaySource, parse_hex_bytes};
use flightstick_hid_extreme3d_protocol::{EXTREME_3D_PRO, report::LAYOUT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::capture::CaptureFile;
use crate::config::{Overrides, StickctlConfig};

#[derive(Parser)]
#[command(name = "stickctl")]
#[command(about = "Decode Logitech Extreme 3D Pro HID input reports")]
#[command(version)]
struct Cli {
    /// Emit one JSON object per report
    #[arg(long, global = true)]
    json: bool,

    /// Reports carry a leading report ID byte
    #[arg(long, global = true)]
    report_id: bool,

    /// Show axes scaled to unit ranges
    #[arg(long, global = true)]
    normalized: bool,

    /// Warn and continue on short reports instead of failing
    #[arg(long, global = true)]
    skip_malformed: bool,

    /// YAML config file
    #[arg(long, global = true, env = "STICKCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode reports given as hex, one per argument (stdin lines if none)
    Decode {
        /// Report bytes, e.g. "0x00 0x02 0x88 0x80 0x00 0x80 0x00" or 00028880008000
        reports: Vec<String>,
    },
    /// Decode every report in a hid-capture JSON file
    Replay {
        /// Capture file written by `hid-capture capture --output`
        file: PathBuf,
    },
    /// Print the input report field layout
    Layout,
}

fn read_stdin_reports() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut reports = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        reports.push(line.to_string());
    }
    Ok(reports)
}

fn decode_command(reports: Vec<String>, config: &StickctlConfig) -> Result<()> {
    let reports = if reports.is_empty() {
        read_stdin_reports()?
    } else {
        reports
    };
    let raw = reports
        .iter()
        .map(|r| parse_hex_bytes(r).with_context(|| format!("Invalid report '{r}'")))
        .collect::<Result<Vec<_>>>()?;

    let mut source = ReplaySource::from_reports(EXTREME_3D_PRO, raw);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    session::run(&mut source, &[], config, &mut out)?;
    Ok(())
}

fn replay_command(file: &Path, config: &StickctlConfig) -> Result<()> {
    let capture = CaptureFile::load(file)
        .with_context(|| format!("Failed to load capture file '{}'", file.display()))?;
    let timestamps = capture.timestamps();
    let mut source = capture
        .into_source()
        .with_context(|| format!("Failed to read captures from '{}'", file.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = session::run(&mut source, &timestamps, config, &mut out)?;
    if summary.skipped > 0 {
        eprintln!(
            "Decoded {} report(s), skipped {} malformed.",
            summary.decoded, summary.skipped
        );
    }
    Ok(())
}

fn layout_command(config: &StickctlConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let offset = config.framing.offset();
    writeln!(
        out,
        "{:<14} {:>5} {:>4} {:>6}",
        "field", "byte", "bit", "width"
    )?;
    writeln!(out, "{}", "-".repeat(32))?;
    for (name, field) in LAYOUT {
        writeln!(
            out,
            "{:<14} {:>5} {:>4} {:>6}",
            name,
            field.byte + offset,
            field.bit,
            field.width
        )?;
    }
    writeln!(out, "report length: {} bytes", config.framing.required_len())?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("stickctl={log_level},flightstick_hid_common={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = StickctlConfig::resolve(
        cli.config.as_deref(),
        Overrides {
            json: cli.json,
            report_id: cli.report_id,
            normalized: cli.normalized,
            skip_malformed: cli.skip_malformed,
        },
    )
    .context("Failed to load configuration")?;
    tracing::debug!(?config, "effective configuration");

    match cli.command {
        Commands::Decode { reports } => decode_command(reports, &config),
        Commands::Replay { file } => replay_command(&file, &config),
        Commands::Layout => layout_command(&config),
    }
}
