//! Command-line parsing for the ROSA posture assessor.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the rule and geometry code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ViewPoint;
use crate::logging::DEFAULT_LOG_LEVEL;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rosa", version, about = "ROSA office posture assessment from pose keypoints")]
pub struct Cli {
    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assess every frame in a frames JSON file and print the reports.
    Assess(AssessArgs),
    /// Generate synthetic frames around an upright template pose.
    Sample(SampleArgs),
    /// Print the active thresholds as JSON.
    Thresholds(ThresholdArgs),
}

/// Options for `rosa assess`.
#[derive(Debug, Parser, Clone)]
pub struct AssessArgs {
    /// Frames JSON produced by the pose detector (or `rosa sample`).
    #[arg(short = 'i', long, value_name = "JSON")]
    pub input: PathBuf,

    /// Viewpoint for frames that do not declare one.
    #[arg(long, value_enum, default_value_t = ViewPoint::Side)]
    pub view: ViewPoint,

    /// Thresholds JSON; missing fields keep their defaults.
    #[arg(long, value_name = "JSON")]
    pub thresholds: Option<PathBuf>,

    /// Print only the batch summary.
    #[arg(long)]
    pub summary: bool,

    /// Export per-frame scores to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export full frame reports (findings, draw intents, measurements) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Append the description of each frame to a text log.
    #[arg(long, value_name = "TXT")]
    pub log: Option<PathBuf>,

    /// Write a markdown debug bundle under `debug/`.
    #[arg(long)]
    pub debug: bool,
}

/// Options for `rosa sample`.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// Template viewpoint.
    #[arg(long, value_enum, default_value_t = ViewPoint::Side)]
    pub view: ViewPoint,

    /// Number of frames to generate.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Jitter standard deviation in pixels.
    #[arg(long, default_value_t = 2.0)]
    pub noise: f64,

    /// Probability that a joint goes undetected.
    #[arg(long, default_value_t = 0.0)]
    pub drop: f64,

    /// Output frames JSON.
    #[arg(short = 'o', long, value_name = "JSON")]
    pub output: PathBuf,
}

/// Options for `rosa thresholds`.
#[derive(Debug, Parser, Clone)]
pub struct ThresholdArgs {
    /// Thresholds JSON to merge over the defaults before printing.
    #[arg(long, value_name = "JSON")]
    pub thresholds: Option<PathBuf>,
}
