//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and initialises logging
//! - resolves thresholds (file, environment, defaults)
//! - runs the assessment pipeline and prints reports
//! - writes optional exports

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::cli::{AssessArgs, Command, SampleArgs, ThresholdArgs};
use crate::data::{SampleSpec, generate_frames};
use crate::domain::{RunConfig, Thresholds};
use crate::error::AppError;

pub mod pipeline;

/// Environment variable naming a thresholds JSON file.
pub const THRESHOLDS_ENV: &str = "ROSA_THRESHOLDS";

/// Entry point for the `rosa` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init_tracing(&cli.log_level)?;

    match cli.command {
        Command::Assess(args) => handle_assess(args),
        Command::Sample(args) => handle_sample(args),
        Command::Thresholds(args) => handle_thresholds(args),
    }
}

fn handle_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let run = pipeline::run_assess(&config)?;

    if !config.summary_only {
        for report in &run.reports {
            println!("{}", crate::report::format_frame_report(report));
        }
    }
    println!("{}", crate::report::format_batch_summary(&run.summary));

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_scores_csv(path, &run.reports)?;
        info!(path = %path.display(), "wrote scores CSV");
    }
    if let Some(path) = &config.export_json {
        crate::io::assessment::write_reports_json(path, &run.reports)?;
        info!(path = %path.display(), "wrote report JSON");
    }
    if let Some(path) = &config.log_path {
        crate::io::export::append_description_log(path, &run.reports)?;
        info!(path = %path.display(), "appended description log");
    }
    if config.debug {
        let path = crate::debug::write_debug_bundle(&config.input, &config.thresholds, &run.reports)?;
        eprintln!("Debug bundle written to {}", path.display());
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let frames = generate_frames(&SampleSpec {
        view: args.view,
        count: args.count,
        seed: args.seed,
        noise: args.noise,
        drop_prob: args.drop,
    })?;
    crate::io::ingest::write_frames(&args.output, &frames)?;
    info!(path = %args.output.display(), frames = frames.len(), "wrote sample frames");
    Ok(())
}

fn handle_thresholds(args: ThresholdArgs) -> Result<(), AppError> {
    let thresholds = resolve_thresholds(args.thresholds.as_deref())?;
    let json = serde_json::to_string_pretty(&thresholds)
        .map_err(|e| AppError::new(4, format!("Failed to serialize thresholds: {e}")))?;
    println!("{json}");
    Ok(())
}

pub fn run_config_from_args(args: &AssessArgs) -> Result<RunConfig, AppError> {
    Ok(RunConfig {
        input: args.input.clone(),
        default_view: args.view,
        thresholds: resolve_thresholds(args.thresholds.as_deref())?,
        summary_only: args.summary,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
        log_path: args.log.clone(),
        debug: args.debug,
    })
}

/// Resolve thresholds: explicit file, then `ROSA_THRESHOLDS` (a `.env` file is
/// honoured), then defaults.
pub fn resolve_thresholds(explicit: Option<&Path>) -> Result<Thresholds, AppError> {
    dotenvy::dotenv().ok();
    let from_env = std::env::var_os(THRESHOLDS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    thresholds_from_sources(explicit, from_env.as_deref())
}

fn thresholds_from_sources(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Thresholds, AppError> {
    match explicit.or(from_env) {
        Some(path) => crate::io::assessment::read_thresholds(path),
        None => Ok(Thresholds::default()),
    }
}
