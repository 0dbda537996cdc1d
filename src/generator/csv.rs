//! Semicolon-delimited CSV cut list generator.

use crate::config::CSV_HEADER;
use crate::error::{ExportError, Result};
use crate::model::CutListRow;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Generate the CSV document: header then one line per row.
pub fn generate_csv(rows: &[CutListRow]) -> String {
    let mut output = String::new();

    writeln!(output, "{}", CSV_HEADER).unwrap();
    for row in rows {
        writeln!(output, "{}", row.to_csv_line()).unwrap();
    }

    output
}

/// Write a generated cut list, creating the parent directory if needed.
///
/// An existing file is overwritten.
pub fn write_cut_list(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| ExportError::NoOutputDirectory {
            path: path.to_path_buf(),
        })?;

    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WoodenPiece;

    #[test]
    fn test_generate_csv_header_only() {
        let csv = generate_csv(&[]);
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_generate_csv_rows() {
        let rows = vec![
            CutListRow::new(
                1,
                WoodenPiece::new([15, 500, 700], &["MDF Branco"], "Side", None),
            ),
            CutListRow::new(
                3,
                WoodenPiece::new([18, 400, 300], &["MDP Cinza", "C1 Cinza"], "Shelf", None),
            ),
        ];
        let csv = generate_csv(&rows);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1;500;700;Side;;;;;MDF Branco 15mm;");
        assert_eq!(lines[2], "3;400;300;Shelf;Cinza;;;;MDP Cinza 18mm;");
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_write_cut_list_root_has_no_parent() {
        let result = write_cut_list(Path::new("/"), "x");
        assert!(matches!(
            result,
            Err(ExportError::NoOutputDirectory { .. })
        ));
    }
}
