//! cutlist-export - Cut list export for sheet-material woodworking.
//!
//! Reads the objects selected in a 3D scene, infers each piece's dimensions,
//! sheet material and edge banding from the host's naming conventions, folds
//! `.001`-style copies into a quantity and writes one CSV row per unique piece.
//!
//! # Example
//!
//! ```no_run
//! use cutlist_export::{export_scene_file, ExportConfig};
//! use std::path::Path;
//!
//! let config = ExportConfig::new("CutList.csv");
//! let summary = export_scene_file(Path::new("kitchen.json"), &config).unwrap();
//! println!("{} rows", summary.rows);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::{ExportConfig, SceneSettings};
pub use error::{ExportError, Result};
pub use export::collect_rows;
pub use generator::{generate_csv, write_cut_list};
pub use model::{CutListRow, EdgeTapes, Scene, SceneDocument, SceneObject, WoodenPiece};
pub use parser::{parse_scene, parse_scene_file};
pub use validation::{validate_selection, ValidationResult};

use std::path::{Path, PathBuf};

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of CSV rows (unique pieces).
    pub rows: usize,
    /// Total number of pieces, quantities included.
    pub pieces: u32,
    /// File that was written.
    pub path: PathBuf,
}

/// Build the cut list rows for the scene's current selection.
pub fn build_cut_list<S: Scene + ?Sized>(
    scene: &S,
    comment_property: &str,
) -> Result<Vec<CutListRow>> {
    let selection = scene.selected_objects()?;
    Ok(collect_rows(&selection, comment_property))
}

/// Export the scene's selection as a CSV cut list.
///
/// This performs the full pipeline:
/// 1. Apply millimeter units and viewport settings to the scene
/// 2. Scan the selection, folding duplicates
/// 3. Generate the CSV document
/// 4. Write it to `config.output_path` in a single write
pub fn export_cut_list<S: Scene + ?Sized>(
    scene: &mut S,
    config: &ExportConfig,
) -> Result<ExportSummary> {
    scene.configure(&SceneSettings::default());

    let rows = build_cut_list(&*scene, &config.comment_property)?;
    let csv = generate_csv(&rows);
    write_cut_list(&config.output_path, &csv)?;

    let summary = ExportSummary {
        rows: rows.len(),
        pieces: rows.iter().map(|r| r.quantity).sum(),
        path: config.output_path.clone(),
    };
    tracing::info!(
        rows = summary.rows,
        pieces = summary.pieces,
        "Cut list written to {}",
        summary.path.display()
    );

    Ok(summary)
}

/// Load a JSON scene export and write its cut list.
pub fn export_scene_file(input_path: &Path, config: &ExportConfig) -> Result<ExportSummary> {
    let mut scene = parse_scene_file(input_path)?;
    export_cut_list(&mut scene, config)
}
