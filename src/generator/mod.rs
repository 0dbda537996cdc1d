//! Output generators for cut lists.

mod csv;

pub use csv::{generate_csv, write_cut_list};
