use super::model::{CellValue, TabularDataset};

/// (period, millions of years ago) for the geological periods panel.
pub const GEOLOGICAL_PERIODS: [(&str, f64); 6] = [
    ("Quaternary", 2.588),
    ("Neogene", 23.03),
    ("Paleogene", 66.0),
    ("Cretaceous", 145.5),
    ("Jurassic", 201.3),
    ("Triassic", 252.17),
];

pub fn periods_table() -> TabularDataset {
    TabularDataset {
        columns: vec!["Geological Period".into(), "Millions of Years".into()],
        rows: GEOLOGICAL_PERIODS
            .iter()
            .map(|(name, age)| vec![CellValue::Text((*name).to_string()), CellValue::Float(*age)])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_are_oldest_last() {
        let table = periods_table();
        assert_eq!(table.len(), 6);
        let ages: Vec<f64> = table
            .numeric_column("Millions of Years")
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert!(ages.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table.rows[0][0], CellValue::Text("Quaternary".into()));
    }
}
