use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DashboardError, Result};

use super::model::{CellValue, TabularDataset};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file with a header row into a [`TabularDataset`].
///
/// A missing file is reported as [`DashboardError::NotFound`] so panels can
/// tell it apart from a malformed file.
pub fn load_csv_path(path: &Path) -> Result<TabularDataset> {
    if !path.exists() {
        return Err(DashboardError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let dataset = load_csv_reader(file)?;
    log::debug!(
        "Loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.columns.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV from any reader. Cell types are guessed per value.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<TabularDataset> {
    let mut reader = csv::Reader::from_reader(reader);
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(DashboardError::invalid_schema("CSV has no header row"));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(CellValue::guess).collect());
    }

    TabularDataset::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let text = "latitude,longitude,pH\n25.91,-80.13,8.02\n25.92,-80.14,\n";
        let ds = load_csv_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.columns, vec!["latitude", "longitude", "pH"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[1][2], CellValue::Null);
    }

    #[test]
    fn test_short_record_is_csv_error() {
        let text = "a,b\n1,2\n3\n";
        assert!(matches!(
            load_csv_reader(text.as_bytes()),
            Err(DashboardError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("bay-dashboard-missing.csv");
        assert!(matches!(
            load_csv_path(&path),
            Err(DashboardError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join("bay-dashboard-loader-test.csv");
        std::fs::write(&path, "x,y\n1,2\n").unwrap();
        let ds = load_csv_path(&path).unwrap();
        assert_eq!(ds.rows, vec![vec![CellValue::Integer(1), CellValue::Integer(2)]]);
        let _ = std::fs::remove_file(&path);
    }
}
