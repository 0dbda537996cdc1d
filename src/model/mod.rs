//! Data model types for cut list export.

mod edge_tape;
mod piece;
mod row;
mod scene;

pub use edge_tape::EdgeTapes;
pub use piece::{is_sheet_material, WoodenPiece};
pub use row::CutListRow;
pub use scene::{Camera, Scene, SceneDocument, SceneObject};
