//! Scene - Read-only view of the host application's scene graph.

use crate::config::{SceneSettings, UnitSettings, ViewportSettings};
use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An object in the host scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Object name, unique within the scene.
    pub name: String,
    /// Axis-aligned bounding box size (x, y, z) in scene units.
    pub dimensions: [f64; 3],
    /// Names of the assigned material slots, in slot order.
    #[serde(default)]
    pub material_slots: Vec<String>,
    /// Custom properties.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl SceneObject {
    /// Create a new object with the given name and dimensions.
    pub fn new(name: impl Into<String>, dimensions: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            dimensions,
            ..Default::default()
        }
    }

    /// Builder: assign material slots.
    pub fn with_materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.material_slots = materials.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set a custom property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Dimensions in whole millimeters, truncated toward zero.
    pub fn dimensions_mm(&self) -> [i64; 3] {
        self.dimensions.map(|d| d.trunc() as i64)
    }

    /// Text of a custom property.
    ///
    /// Strings are returned as-is; any other value is rendered as JSON.
    pub fn property_text(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Clip settings of the active camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub clip_end: f64,
}

/// The host's scene as seen by the exporter.
pub trait Scene {
    /// Currently selected objects, in selection order.
    fn selected_objects(&self) -> Result<Vec<&SceneObject>>;

    /// Apply unit and viewport settings.
    fn configure(&mut self, settings: &SceneSettings);
}

/// A scene exported from the host as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    pub unit_settings: UnitSettings,
    #[serde(default)]
    pub viewports: Vec<ViewportSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
    pub objects: Vec<SceneObject>,
    /// Selected object names in selection order. `None` selects everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Vec<String>>,
}

impl SceneDocument {
    /// Create a document in which every object is selected.
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            ..Default::default()
        }
    }

    /// Builder: set the selection explicitly.
    pub fn with_selection<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Find an object by name.
    pub fn find_object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }
}

impl Scene for SceneDocument {
    fn selected_objects(&self) -> Result<Vec<&SceneObject>> {
        match &self.selection {
            None => Ok(self.objects.iter().collect()),
            Some(names) => names
                .iter()
                .map(|name| {
                    self.find_object(name)
                        .ok_or_else(|| ExportError::ObjectNotFound { name: name.clone() })
                })
                .collect(),
        }
    }

    fn configure(&mut self, settings: &SceneSettings) {
        self.unit_settings = settings.units.clone();
        for viewport in &mut self.viewports {
            *viewport = settings.viewport.clone();
        }
        if let Some(camera) = &mut self.camera {
            camera.clip_end = settings.camera_clip_end;
        }
        tracing::debug!(
            viewports = self.viewports.len(),
            camera = self.camera.is_some(),
            "Scene configured for millimeter modelling"
        );
    }
}
