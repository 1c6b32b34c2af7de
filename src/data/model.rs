use std::fmt;

use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a tabular dataset
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, guessed from the CSV text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell; `None` for text, bools and nulls.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Parse raw CSV text into the narrowest matching variant.
    pub fn guess(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// TabularDataset – ordered named columns over rows of cells
// ---------------------------------------------------------------------------

/// Column-named rows as read from a CSV file. Rows keep file order and every
/// row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TabularDataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(DashboardError::invalid_schema(format!(
                "row {i} has {} cells but there are {} columns",
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, or [`DashboardError::MissingColumn`].
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DashboardError::MissingColumn(name.to_string()))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Values of a numeric column, one entry per row (`None` for empty cells).
    ///
    /// Fails when the column is missing or holds a non-numeric, non-empty cell.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row_no, row)| match &row[idx] {
                CellValue::Null => Ok(None),
                cell => cell.as_f64().map(Some).ok_or_else(|| {
                    DashboardError::invalid_schema(format!(
                        "row {row_no}, column '{name}': '{cell}' is not a number"
                    ))
                }),
            })
            .collect()
    }

    /// Mean of the non-empty cells of a numeric column.
    pub fn mean(&self, name: &str) -> Result<f64> {
        let values: Vec<f64> = self.numeric_column(name)?.into_iter().flatten().collect();
        super::stats::mean(&values).ok_or_else(|| {
            DashboardError::invalid_schema(format!("column '{name}' has no numeric values"))
        })
    }

    /// Columns whose non-empty cells are all numeric (and with at least one value).
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| {
                let mut seen = false;
                for row in &self.rows {
                    match &row[*idx] {
                        CellValue::Null => {}
                        CellValue::Integer(_) | CellValue::Float(_) => seen = true,
                        _ => return false,
                    }
                }
                seen
            })
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Projection onto the named columns, in the order given.
    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Result<TabularDataset> {
        let indices = columns
            .iter()
            .map(|c| self.column_index(c.as_ref()))
            .collect::<Result<Vec<usize>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(TabularDataset {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabularDataset {
        TabularDataset::new(
            vec!["site".into(), "latitude".into(), "pH".into()],
            vec![
                vec![CellValue::guess("A"), CellValue::guess("25.5"), CellValue::guess("8")],
                vec![CellValue::guess("B"), CellValue::guess("26.5"), CellValue::guess("")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_guess_cell_types() {
        assert_eq!(CellValue::guess("42"), CellValue::Integer(42));
        assert_eq!(CellValue::guess("-80.13"), CellValue::Float(-80.13));
        assert_eq!(CellValue::guess("true"), CellValue::Bool(true));
        assert_eq!(CellValue::guess(" "), CellValue::Null);
        assert_eq!(CellValue::guess("MMC"), CellValue::Text("MMC".into()));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = TabularDataset::new(vec!["a".into()], vec![vec![]]).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidSchema(_)));
    }

    #[test]
    fn test_numeric_column_and_mean() {
        let ds = sample();
        assert_eq!(ds.numeric_column("pH").unwrap(), vec![Some(8.0), None]);
        assert!((ds.mean("latitude").unwrap() - 26.0).abs() < 1e-12);
        assert!(matches!(
            ds.numeric_column("site"),
            Err(DashboardError::InvalidSchema(_))
        ));
        assert!(matches!(
            ds.mean("depth"),
            Err(DashboardError::MissingColumn(c)) if c == "depth"
        ));
    }

    #[test]
    fn test_numeric_columns_skip_text() {
        assert_eq!(sample().numeric_columns(), vec!["latitude", "pH"]);
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let ds = sample().select(&["pH", "site"]).unwrap();
        assert_eq!(ds.columns, vec!["pH", "site"]);
        assert_eq!(ds.rows[0], vec![CellValue::Integer(8), CellValue::Text("A".into())]);
        assert!(sample().select(&["nope"]).is_err());
    }
}
