//! Duplicate folding over the host selection.
//!
//! The host names copies of an object `Shelf.001`, `Shelf.002`, ... Every
//! copy is counted into the row of its base object instead of producing a
//! row of its own.

use crate::config::DUPLICATE_SUFFIX_DIGITS;
use crate::model::{CutListRow, SceneObject, WoodenPiece};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

/// `.NNN` (ASCII digits) at the end of a name.
fn duplicate_suffix() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    SUFFIX.get_or_init(|| {
        Regex::new(&format!(r"\.[0-9]{{{}}}$", DUPLICATE_SUFFIX_DIGITS))
            .expect("duplicate suffix pattern is valid")
    })
}

/// `.NNN` and nothing else.
fn bare_duplicate_suffix() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    SUFFIX.get_or_init(|| {
        Regex::new(&format!(r"^\.[0-9]{{{}}}$", DUPLICATE_SUFFIX_DIGITS))
            .expect("duplicate suffix pattern is valid")
    })
}

/// Check if a name carries the host's duplicate suffix.
pub fn is_duplicate_name(name: &str) -> bool {
    duplicate_suffix().is_match(name)
}

/// Check if `candidate` is `base` followed by a duplicate suffix.
pub fn is_duplicate_of(base: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(base)
        .is_some_and(|rest| bare_duplicate_suffix().is_match(rest))
}

/// Name with the duplicate suffix removed, if it has one.
pub fn base_name(name: &str) -> Option<&str> {
    duplicate_suffix()
        .find(name)
        .map(|suffix| &name[..suffix.start()])
}

/// Scan the selection and build one row per unique piece.
///
/// Objects named with a duplicate suffix never produce a row; they add to the
/// quantity of their base object. A duplicate whose base object is not
/// selected is dropped.
pub fn collect_rows(selection: &[&SceneObject], comment_property: &str) -> Vec<CutListRow> {
    let mut blacklist: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();

    for obj in selection {
        if is_duplicate_name(&obj.name) {
            continue;
        }
        if blacklist.contains(obj.name.as_str()) {
            continue;
        }

        let piece = WoodenPiece::new(
            obj.dimensions_mm(),
            &obj.material_slots,
            obj.name.clone(),
            obj.property_text(comment_property),
        );

        let mut quantity = 1;
        for other in selection {
            if is_duplicate_of(&obj.name, &other.name) {
                blacklist.insert(other.name.as_str());
                quantity += 1;
            }
        }

        debug!("{} (x{})", piece, quantity);
        rows.push(CutListRow::new(quantity, piece));
    }

    rows
}
