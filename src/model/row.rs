//! CutListRow - One line of the exported cut list.

use super::piece::WoodenPiece;
use crate::config::CSV_DELIMITER;
use serde::{Deserialize, Serialize};

/// A unique piece together with the number of copies selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutListRow {
    pub quantity: u32,
    pub piece: WoodenPiece,
}

impl CutListRow {
    /// Create a new row.
    pub fn new(quantity: u32, piece: WoodenPiece) -> Self {
        Self { quantity, piece }
    }

    /// CSV cells in header order. Absent values are empty strings.
    pub fn cells(&self) -> [String; 10] {
        let piece = &self.piece;
        let [c1, c2, l1, l2] = piece.edge_tapes.labels().map(|l| l.unwrap_or("").to_string());
        [
            self.quantity.to_string(),
            piece.width.to_string(),
            piece.height.to_string(),
            piece.name.clone(),
            c1,
            c2,
            l1,
            l2,
            piece.material.clone().unwrap_or_default(),
            piece.comments.clone().unwrap_or_default(),
        ]
    }

    /// Render as one CSV line, without line terminator.
    pub fn to_csv_line(&self) -> String {
        self.cells().join(CSV_DELIMITER)
    }
}
