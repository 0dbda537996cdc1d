//! Scene file parser module.

mod scene;

pub use scene::{parse_scene, parse_scene_file};
