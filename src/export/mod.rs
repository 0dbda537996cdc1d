//! Selection scan: turns selected scene objects into cut list rows.

mod scan;

pub use scan::{base_name, collect_rows, is_duplicate_name, is_duplicate_of};
