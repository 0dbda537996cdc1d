//! Pre-export checks over the selected objects.
//!
//! Nothing here changes the exported rows; findings are reported so the
//! modeller can fix names and materials before sending the list out.

use crate::config::CSV_DELIMITER;
use crate::error::{ExportError, Result};
use crate::export::{base_name, is_duplicate_name};
use crate::model::{is_sheet_material, SceneObject};
use std::collections::HashSet;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate the whole selection.
pub fn validate_selection(
    selection: &[&SceneObject],
    comment_property: &str,
) -> Result<ValidationResult> {
    if selection.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let mut result = ValidationResult::ok();
    let names: HashSet<&str> = selection.iter().map(|o| o.name.as_str()).collect();

    for obj in selection {
        if is_duplicate_name(&obj.name) {
            // Copies are exported through their base object only.
            if let Some(base) = base_name(&obj.name) {
                if !names.contains(base) {
                    result.add_warning(format!(
                        "'{}': base object '{}' is not selected, duplicate will not be exported",
                        obj.name, base
                    ));
                }
            }
            continue;
        }

        result.merge(validate_object(obj, comment_property));
    }

    Ok(result)
}

/// Validate a single object.
pub fn validate_object(obj: &SceneObject, comment_property: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if let Some(&value) = obj
        .dimensions
        .iter()
        .find(|d| !d.is_finite() || **d < 0.0)
    {
        result.add_error(
            ExportError::InvalidDimension {
                object: obj.name.clone(),
                value,
            }
            .to_string(),
        );
        return result;
    }

    let [x, y, z] = obj.dimensions_mm();
    if x == 0 || y == 0 || z == 0 {
        result.add_warning(format!(
            "'{}': Degenerate piece ({} x {} x {} mm)",
            obj.name, x, y, z
        ));
    }

    let min = x.min(y).min(z);
    if [x, y, z].iter().filter(|&&d| d == min).count() > 1 {
        result.add_warning(format!(
            "'{}': Ambiguous thickness, {} mm appears more than once",
            obj.name, min
        ));
    }

    if !obj.material_slots.iter().any(|m| is_sheet_material(m)) {
        result.add_warning(format!("'{}': No sheet material assigned", obj.name));
    }

    let mut cells = vec![obj.name.as_str()];
    cells.extend(obj.material_slots.iter().map(String::as_str));
    if cells.iter().any(|c| c.contains(CSV_DELIMITER))
        || obj
            .property_text(comment_property)
            .is_some_and(|c| c.contains(CSV_DELIMITER))
    {
        result.add_warning(format!(
            "'{}': Contains '{}', the CSV columns will shift",
            obj.name, CSV_DELIMITER
        ));
    }

    result
}
