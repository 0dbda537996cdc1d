//! cutlist-export - CLI tool to export a CSV cut list from a scene selection.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cutlist_export::config::default_output_path;
use cutlist_export::{
    build_cut_list, export_cut_list, parse_scene_file, validate_selection, ExportConfig, Scene,
};

/// Export a woodworking cut list (CSV) from the selected objects of a scene.
#[derive(Parser, Debug)]
#[command(name = "cutlist-export")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input scene file (JSON export of the host scene)
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file path [default: ~/Desktop/CutList.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Print the cut list rows as JSON instead of writing the CSV
    #[arg(long)]
    debug: bool,

    /// Write the CSV even if validation reports errors
    #[arg(long)]
    force: bool,

    /// Save the scene with millimeter units and viewport settings applied
    #[arg(long, value_name = "PATH", conflicts_with_all = ["validate", "debug"])]
    save_scene: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    let mut scene = parse_scene_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let output_path = match args.output {
        Some(path) => path,
        None => default_output_path().context("Cannot determine the home directory")?,
    };
    let config = ExportConfig::new(output_path);

    // Validate
    let selection = scene.selected_objects()?;
    info!("Selected {} object(s)", selection.len());

    let validation = validate_selection(&selection, &config.comment_property)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed && !args.force {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Debug output
    if args.debug {
        let rows = build_cut_list(&scene, &config.comment_property)?;
        let json = serde_json::to_string_pretty(&rows)?;
        println!("{}", json);
        return Ok(());
    }

    let summary = export_cut_list(&mut scene, &config)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    info!(
        "Generated: {} ({} rows, {} pieces)",
        summary.path.display(),
        summary.rows,
        summary.pieces
    );

    if let Some(path) = args.save_scene {
        let json = serde_json::to_string_pretty(&scene)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved scene: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["cutlist-export", "-i", "scene.json"]).unwrap();
        assert_eq!(args.input, PathBuf::from("scene.json"));
        assert!(args.output.is_none());
        assert!(args.save_scene.is_none());
    }

    #[test]
    fn test_save_scene_with_export() {
        let args = Args::try_parse_from([
            "cutlist-export",
            "-i",
            "scene.json",
            "--save-scene",
            "configured.json",
        ])
        .unwrap();
        assert_eq!(args.save_scene, Some(PathBuf::from("configured.json")));
    }

    #[test]
    fn test_save_scene_conflicts_with_validate_and_debug() {
        for mode in ["--validate", "--debug"] {
            let err = Args::try_parse_from([
                "cutlist-export",
                "-i",
                "scene.json",
                mode,
                "--save-scene",
                "configured.json",
            ])
            .unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        }
    }
}
