//! WoodenPiece - One manufactured sheet-material cut.

use super::edge_tape::EdgeTapes;
use crate::config::NON_MAIN_MATERIAL_MARKERS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single piece of the cut list.
///
/// Built once from an object's bounding box and material slots and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoodenPiece {
    /// Host object name.
    pub name: String,
    /// Free-text comment from the host custom property.
    pub comments: Option<String>,
    /// Smallest of the three dimensions (mm).
    pub thickness: i64,
    /// First remaining dimension (mm).
    pub width: i64,
    /// Second remaining dimension (mm).
    pub height: i64,
    /// Sheet material with thickness suffix, e.g. `"MDF Branco 15mm"`.
    pub material: Option<String>,
    /// Edge banding.
    pub edge_tapes: EdgeTapes,
}

impl WoodenPiece {
    /// Build a piece from truncated millimeter dimensions.
    ///
    /// The minimum dimension becomes the thickness; the other two keep their
    /// relative order as width and height. Width and height therefore follow
    /// the object's axes and swap when the object is rotated.
    pub fn new<S: AsRef<str>>(
        dimensions: [i64; 3],
        material_names: &[S],
        name: impl Into<String>,
        comments: Option<String>,
    ) -> Self {
        let (thickness, [width, height]) = split_thickness(dimensions);

        Self {
            name: name.into(),
            comments,
            thickness,
            width,
            height,
            material: main_material(material_names, thickness),
            edge_tapes: EdgeTapes::from_materials(material_names),
        }
    }
}

/// Remove the first occurrence of the minimum, keeping the rest in order.
fn split_thickness(dimensions: [i64; 3]) -> (i64, [i64; 2]) {
    let mut min_idx = 0;
    for (i, &d) in dimensions.iter().enumerate().skip(1) {
        if d < dimensions[min_idx] {
            min_idx = i;
        }
    }

    let mut rest = [0; 2];
    let mut j = 0;
    for (i, &d) in dimensions.iter().enumerate() {
        if i != min_idx {
            rest[j] = d;
            j += 1;
        }
    }

    (dimensions[min_idx], rest)
}

/// First material that is neither an edge tape nor a "Fita" (tape) material.
fn main_material<S: AsRef<str>>(material_names: &[S], thickness: i64) -> Option<String> {
    material_names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| is_sheet_material(name))
        .map(|name| format!("{} {}mm", name, thickness))
}

/// Check if a material name carries none of the tape markers.
pub fn is_sheet_material(name: &str) -> bool {
    !NON_MAIN_MATERIAL_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

impl fmt::Display for WoodenPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Corte de MDF \"{}\" - {} ({})",
            self.name,
            self.comments.as_deref().unwrap_or("-"),
            self.material.as_deref().unwrap_or("sem material")
        )?;
        writeln!(
            f,
            "Dimensões (mm) {}mm x {}mm Espessura {}mm",
            self.width, self.height, self.thickness
        )?;
        write!(f, "Fitas: {}", self.edge_tapes)
    }
}
