use std::path::Path;

use crate::error::{DashboardError, Result};

use super::loader::load_csv_path;
use super::model::{CellValue, TabularDataset};

/// One row of the bundled US capitals file.
#[derive(Debug, Clone, PartialEq)]
pub struct Capital {
    pub state: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Capital {
    /// Map marker position, `[x, y]` = `[longitude, latitude]`.
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Read a `state, city, latitude, longitude` CSV once, returning the raw table
/// for display together with the typed records for the map.
pub fn load_capitals(path: &Path) -> Result<(TabularDataset, Vec<Capital>)> {
    let table = load_csv_path(path)?;
    let capitals = capitals_from_table(&table)?;
    log::debug!("Loaded {} capitals from {}", capitals.len(), path.display());
    Ok((table, capitals))
}

/// Typed records from an already loaded capitals table.
pub fn capitals_from_table(table: &TabularDataset) -> Result<Vec<Capital>> {
    let state = table.column_index("state")?;
    let city = table.column_index("city")?;
    let latitude = table.column_index("latitude")?;
    let longitude = table.column_index("longitude")?;

    let coordinate = |row_no: usize, cell: &CellValue, idx: usize| {
        cell.as_f64().ok_or_else(|| {
            DashboardError::invalid_schema(format!(
                "row {row_no}, column '{}': '{cell}' is not a coordinate",
                table.columns[idx]
            ))
        })
    };

    table
        .rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            Ok(Capital {
                state: row[state].to_string(),
                city: row[city].to_string(),
                latitude: coordinate(row_no, &row[latitude], latitude)?,
                longitude: coordinate(row_no, &row[longitude], longitude)?,
            })
        })
        .collect()
}
