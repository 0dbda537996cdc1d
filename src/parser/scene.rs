//! JSON scene export parser.

use crate::error::{ExportError, Result};
use crate::model::SceneDocument;
use std::fs;
use std::path::Path;

/// Parse a scene document from JSON text.
pub fn parse_scene(content: &str) -> Result<SceneDocument> {
    serde_json::from_str(content).map_err(|e| ExportError::ParseError {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

/// Parse a scene document from a path.
pub fn parse_scene_file(path: &Path) -> Result<SceneDocument> {
    if !path.exists() {
        return Err(ExportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(ExportError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let scene = parse_scene(&content)?;
    tracing::debug!(
        objects = scene.objects.len(),
        "Loaded scene from {}",
        path.display()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LengthUnit, ShadingType};

    #[test]
    fn test_parse_scene_minimal() {
        let scene = parse_scene(r#"{"objects": []}"#).unwrap();
        assert!(scene.objects.is_empty());
        assert!(scene.selection.is_none());
        assert!(scene.camera.is_none());
    }

    #[test]
    fn test_parse_scene_complete() {
        let json = r#"{
            "unit_settings": {"system": "METRIC", "scale_length": 0.001,
                              "length_unit": "MILLIMETERS", "system_rotation": "DEGREES"},
            "viewports": [{"shading": "WIREFRAME", "show_xray": false,
                           "grid_scale": 1.0, "clip_end": 1000.0}],
            "camera": {"clip_end": 100.0},
            "objects": [
                {"name": "Side", "dimensions": [15.2, 500.9, 700.0],
                 "material_slots": ["MDF Branco", "C1 Branco"],
                 "properties": {"comments": "Left"}},
                {"name": "Back", "dimensions": [3.0, 500.0, 700.0]}
            ],
            "selection": ["Back", "Side"]
        }"#;
        let scene = parse_scene(json).unwrap();
        assert_eq!(scene.unit_settings.length_unit, LengthUnit::Millimeters);
        assert_eq!(scene.viewports[0].shading, ShadingType::Wireframe);
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[0].material_slots.len(), 2);
        assert_eq!(scene.objects[0].property_text("comments").as_deref(), Some("Left"));
        assert!(scene.objects[1].material_slots.is_empty());
        assert_eq!(
            scene.selection,
            Some(vec!["Back".to_string(), "Side".to_string()])
        );
    }

    #[test]
    fn test_parse_scene_invalid_json() {
        let result = parse_scene("{\n  \"objects\": [\n    {\"name\": }\n  ]\n}");
        match result {
            Err(ExportError::ParseError { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_scene_missing_objects() {
        assert!(matches!(
            parse_scene("{}"),
            Err(ExportError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_scene_file_not_found() {
        let result = parse_scene_file(Path::new("/nonexistent/scene.json"));
        assert!(matches!(result, Err(ExportError::FileNotFound { .. })));
    }
}
