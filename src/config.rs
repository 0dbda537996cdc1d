//! Configuration constants and settings for the exporter.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Edge tape markers, in CSV column order.
pub const TAPE_MARKERS: [&str; 4] = ["C1", "C2", "L1", "L2"];

/// Substrings that disqualify a material from being the main (sheet) material.
pub const NON_MAIN_MATERIAL_MARKERS: [&str; 5] = ["C1", "C2", "L1", "L2", "Fita"];

/// Number of digits in the host's duplicate suffix (`Shelf.001`).
pub const DUPLICATE_SUFFIX_DIGITS: usize = 3;

/// Custom property holding the free-text comment of a piece.
pub const COMMENT_PROPERTY: &str = "comments";

/// CSV cell delimiter.
pub const CSV_DELIMITER: &str = ";";

/// CSV header row (without line terminator).
pub const CSV_HEADER: &str =
    "Quantidade;Comprimento;Largura;Função;Fita C1;Fita C2;Fita L1;Fita L2;Material;Complemento";

/// Output file location, relative to the user's home directory.
pub const DEFAULT_OUTPUT_FILE: &str = "Desktop/CutList.csv";

/// Clip distance applied to viewports and the active camera.
pub const CLIP_END: f64 = 1_000_000.0;

/// Scene length scale: one scene unit is one millimeter.
pub const MILLIMETER_SCALE: f64 = 0.001;

/// Unit system of the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitSystem {
    #[default]
    None,
    Metric,
    Imperial,
}

/// Length unit used for display in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    #[default]
    Adaptive,
    Kilometers,
    Meters,
    Centimeters,
    Millimeters,
    Micrometers,
    Inches,
    Feet,
}

/// Rotation unit used for display in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationUnit {
    #[default]
    Degrees,
    Radians,
}

/// Viewport shading mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShadingType {
    Wireframe,
    #[default]
    Solid,
    Material,
    Rendered,
}

/// Scene unit settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSettings {
    pub system: UnitSystem,
    pub scale_length: f64,
    pub length_unit: LengthUnit,
    pub system_rotation: RotationUnit,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            system: UnitSystem::Metric,
            scale_length: 1.0,
            length_unit: LengthUnit::Meters,
            system_rotation: RotationUnit::Degrees,
        }
    }
}

impl UnitSettings {
    /// Metric millimeters, one scene unit per millimeter.
    pub fn millimeters() -> Self {
        Self {
            system: UnitSystem::Metric,
            scale_length: MILLIMETER_SCALE,
            length_unit: LengthUnit::Millimeters,
            system_rotation: RotationUnit::Degrees,
        }
    }

    /// Check if the scene is already set up for millimeter modelling.
    pub fn is_millimeters(&self) -> bool {
        self.system == UnitSystem::Metric && self.length_unit == LengthUnit::Millimeters
    }
}

/// Display settings of one 3D viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub shading: ShadingType,
    pub show_xray: bool,
    pub grid_scale: f64,
    pub clip_end: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            shading: ShadingType::Solid,
            show_xray: false,
            grid_scale: 1.0,
            clip_end: 1000.0,
        }
    }
}

impl ViewportSettings {
    /// Viewport tuned for furniture work: x-ray solid shading and a far clip plane.
    pub fn furniture() -> Self {
        Self {
            shading: ShadingType::Solid,
            show_xray: true,
            grid_scale: MILLIMETER_SCALE,
            clip_end: CLIP_END,
        }
    }
}

/// Host scene settings applied before export.
///
/// Purely a convenience for the modeller; nothing in the exported
/// cut list depends on them.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub units: UnitSettings,
    pub viewport: ViewportSettings,
    pub camera_clip_end: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            units: UnitSettings::millimeters(),
            viewport: ViewportSettings::furniture(),
            camera_clip_end: CLIP_END,
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Where the CSV file is written.
    pub output_path: PathBuf,
    /// Custom property read as the piece comment.
    pub comment_property: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            comment_property: COMMENT_PROPERTY.to_string(),
        }
    }
}

impl ExportConfig {
    /// Create a configuration writing to the given path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            comment_property: COMMENT_PROPERTY.to_string(),
        }
    }
}

/// `~/Desktop/CutList.csv`, if a home directory can be determined.
pub fn default_output_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(DEFAULT_OUTPUT_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_settings_use_millimeters() {
        let settings = SceneSettings::default();
        assert!(settings.units.is_millimeters());
        assert!((settings.units.scale_length - 0.001).abs() < f64::EPSILON);
        assert_eq!(settings.units.system_rotation, RotationUnit::Degrees);
    }

    #[test]
    fn test_furniture_viewport() {
        let viewport = ViewportSettings::furniture();
        assert_eq!(viewport.shading, ShadingType::Solid);
        assert!(viewport.show_xray);
        assert!((viewport.clip_end - CLIP_END).abs() < f64::EPSILON);
    }

    #[test]
    fn test_header_has_ten_columns() {
        assert_eq!(CSV_HEADER.split(CSV_DELIMITER).count(), 10);
    }

    #[test]
    fn test_default_output_path_ends_with_cutlist() {
        if let Some(path) = default_output_path() {
            assert!(path.ends_with("Desktop/CutList.csv"));
        }
    }

    #[test]
    fn test_unit_enums_use_host_spelling() {
        let json = serde_json::to_string(&UnitSettings::millimeters()).unwrap();
        assert!(json.contains("\"METRIC\""));
        assert!(json.contains("\"MILLIMETERS\""));
        assert!(json.contains("\"DEGREES\""));
    }
}
