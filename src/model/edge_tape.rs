//! EdgeTapes - Edge banding labels derived from material names.

use crate::config::TAPE_MARKERS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge banding of a piece, one optional label per edge.
///
/// C1/C2 are the short edges, L1/L2 the long ones. A material named
/// `"C1 Branco"` assigns the label `"Branco"` to edge C1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTapes {
    pub c1: Option<String>,
    pub c2: Option<String>,
    pub l1: Option<String>,
    pub l2: Option<String>,
}

impl EdgeTapes {
    /// Resolve the four edge labels from an ordered list of material names.
    pub fn from_materials<S: AsRef<str>>(material_names: &[S]) -> Self {
        let [c1, c2, l1, l2] = TAPE_MARKERS.map(|marker| tape_material(material_names, marker));
        Self { c1, c2, l1, l2 }
    }

    /// Labels in CSV column order (C1, C2, L1, L2).
    pub fn labels(&self) -> [Option<&str>; 4] {
        [
            self.c1.as_deref(),
            self.c2.as_deref(),
            self.l1.as_deref(),
            self.l2.as_deref(),
        ]
    }

    /// Check if no edge is banded.
    pub fn is_empty(&self) -> bool {
        self.labels().iter().all(Option::is_none)
    }
}

/// First material containing `marker`, with the marker stripped.
///
/// Later matches are ignored.
fn tape_material<S: AsRef<str>>(material_names: &[S], marker: &str) -> Option<String> {
    material_names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| name.contains(marker))
        .map(|name| name.replace(marker, "").trim().to_string())
}

impl fmt::Display for EdgeTapes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = [
            ("C1", &self.c1),
            ("C2", &self.c2),
            ("L1", &self.l1),
            ("L2", &self.l2),
        ];
        for (edge, label) in edges {
            // An empty label counts as unbanded here, as in the CSV.
            if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
                write!(f, "{}: {} ", edge, label)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_materials_mixed() {
        let tapes = EdgeTapes::from_materials(&["MDF Branco", "C1 Branco", "L2 Preto"]);
        assert_eq!(tapes.c1.as_deref(), Some("Branco"));
        assert_eq!(tapes.c2, None);
        assert_eq!(tapes.l1, None);
        assert_eq!(tapes.l2.as_deref(), Some("Preto"));
    }

    #[test]
    fn test_from_materials_empty() {
        let names: Vec<String> = vec![];
        let tapes = EdgeTapes::from_materials(&names);
        assert!(tapes.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let tapes = EdgeTapes::from_materials(&["C1 Branco", "C1 Preto"]);
        assert_eq!(tapes.c1.as_deref(), Some("Branco"));
    }

    #[test]
    fn test_marker_anywhere_in_name() {
        let tapes = EdgeTapes::from_materials(&["Fita Carvalho L1"]);
        assert_eq!(tapes.l1.as_deref(), Some("Fita Carvalho"));
    }

    #[test]
    fn test_one_material_can_band_several_edges() {
        let tapes = EdgeTapes::from_materials(&["C1 C2 Branco"]);
        assert_eq!(tapes.c1.as_deref(), Some("C2 Branco"));
        assert_eq!(tapes.c2.as_deref(), Some("C1  Branco"));
    }

    #[test]
    fn test_marker_only_gives_empty_label() {
        let tapes = EdgeTapes::from_materials(&["L2"]);
        assert_eq!(tapes.l2.as_deref(), Some(""));
    }

    #[test]
    fn test_display() {
        let tapes = EdgeTapes::from_materials(&["C1 Branco", "L2 Preto"]);
        assert_eq!(tapes.to_string(), "C1: Branco L2: Preto ");
        assert_eq!(EdgeTapes::default().to_string(), "");
    }

    #[test]
    fn test_labels_order() {
        let tapes = EdgeTapes::from_materials(&["L1 A", "C2 B"]);
        assert_eq!(tapes.labels(), [None, Some("B"), Some("A"), None]);
    }
}
