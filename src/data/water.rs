use std::fmt;

use crate::error::{DashboardError, Result};

use super::model::TabularDataset;
use super::stats::{self, ColumnSummary};

pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

/// Hover text for a survey sample; `{column}` placeholders take the row's cell.
pub const TOOLTIP_TEMPLATE: &str = "Lat: {latitude}\nLong: {longitude}\nODO(mg/L): {ODO (mg/L)}\n\
                                    Temp(C): {Temperature (C)}\npH: {pH}\nTWC(m): {Total Water Column (m)}";

// ---------------------------------------------------------------------------
// WaterParameter – the four measured fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterParameter {
    DissolvedOxygen,
    Temperature,
    Ph,
    TotalWaterColumn,
}

impl WaterParameter {
    pub const ALL: [WaterParameter; 4] = [
        WaterParameter::DissolvedOxygen,
        WaterParameter::Temperature,
        WaterParameter::Ph,
        WaterParameter::TotalWaterColumn,
    ];

    /// Column header in the survey CSV.
    pub fn column(self) -> &'static str {
        match self {
            WaterParameter::DissolvedOxygen => "ODO (mg/L)",
            WaterParameter::Temperature => "Temperature (C)",
            WaterParameter::Ph => "pH",
            WaterParameter::TotalWaterColumn => "Total Water Column (m)",
        }
    }

    pub fn definition(self) -> &'static str {
        match self {
            WaterParameter::TotalWaterColumn => {
                "measure of depth from the surface to the bottom of the ocean."
            }
            WaterParameter::Temperature => {
                "physical property that expresses how hot or cold (average thermal energy) the water is."
            }
            WaterParameter::Ph => {
                "measure of how acidic or basic the water is, ranging from 0 to 14, with 7 being neutral. \
                 <7 indicates acidity, whereas >7 indicates a base."
            }
            WaterParameter::DissolvedOxygen => {
                "concentration of molecular oxygen (O2) dissolved in water."
            }
        }
    }

    fn index(self) -> usize {
        match self {
            WaterParameter::DissolvedOxygen => 0,
            WaterParameter::Temperature => 1,
            WaterParameter::Ph => 2,
            WaterParameter::TotalWaterColumn => 3,
        }
    }
}

impl fmt::Display for WaterParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Every column a survey file must carry.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    [LATITUDE, LONGITUDE]
        .into_iter()
        .chain(WaterParameter::ALL.into_iter().map(WaterParameter::column))
}

// ---------------------------------------------------------------------------
// WaterSurvey – validated Biscayne Bay samples
// ---------------------------------------------------------------------------

/// A survey dataset whose required columns were checked when it was built.
#[derive(Debug, Clone)]
pub struct WaterSurvey {
    dataset: TabularDataset,
    latitude: Vec<Option<f64>>,
    longitude: Vec<Option<f64>>,
    parameters: [Vec<Option<f64>>; 4],
    center: (f64, f64),
}

impl WaterSurvey {
    /// Validate `dataset` against the survey schema.
    ///
    /// Fails with [`DashboardError::MissingColumn`] for the first absent
    /// column and with [`DashboardError::InvalidSchema`] for non-numeric data.
    pub fn from_dataset(dataset: TabularDataset) -> Result<Self> {
        for column in required_columns() {
            dataset.column_index(column)?;
        }
        if dataset.is_empty() {
            return Err(DashboardError::invalid_schema("survey has no samples"));
        }

        let latitude = dataset.numeric_column(LATITUDE)?;
        let longitude = dataset.numeric_column(LONGITUDE)?;
        let parameters = [
            dataset.numeric_column(WaterParameter::DissolvedOxygen.column())?,
            dataset.numeric_column(WaterParameter::Temperature.column())?,
            dataset.numeric_column(WaterParameter::Ph.column())?,
            dataset.numeric_column(WaterParameter::TotalWaterColumn.column())?,
        ];
        let center = (dataset.mean(LATITUDE)?, dataset.mean(LONGITUDE)?);

        Ok(Self {
            dataset,
            latitude,
            longitude,
            parameters,
            center,
        })
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Map center as (latitude, longitude): the mean of each column.
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// `(row, [longitude, latitude])` for every sample with both coordinates.
    pub fn positions(&self) -> Vec<(usize, [f64; 2])> {
        self.latitude
            .iter()
            .zip(&self.longitude)
            .enumerate()
            .filter_map(|(row, (lat, lon))| Some((row, [(*lon)?, (*lat)?])))
            .collect()
    }

    /// `[row index, value]` pairs for a line plot of one parameter.
    pub fn series(&self, parameter: WaterParameter) -> Vec<[f64; 2]> {
        self.parameters[parameter.index()]
            .iter()
            .enumerate()
            .filter_map(|(row, v)| v.map(|v| [row as f64, v]))
            .collect()
    }

    /// `[longitude, latitude, total water column]` for the 3D scatter.
    pub fn depth_points(&self) -> Vec<[f64; 3]> {
        let depth = &self.parameters[WaterParameter::TotalWaterColumn.index()];
        self.longitude
            .iter()
            .zip(&self.latitude)
            .zip(depth)
            .filter_map(|((lon, lat), z)| Some([(*lon)?, (*lat)?, (*z)?]))
            .collect()
    }

    /// Latitude, longitude and the chosen parameters, in selection order.
    pub fn table(&self, parameters: &[WaterParameter]) -> Result<TabularDataset> {
        let columns: Vec<&str> = [LATITUDE, LONGITUDE]
            .into_iter()
            .chain(parameters.iter().map(|p| p.column()))
            .collect();
        self.dataset.select(&columns)
    }

    pub fn summary(&self) -> Vec<ColumnSummary> {
        stats::describe(&self.dataset)
    }

    pub fn tooltip(&self, row: usize) -> String {
        render_template(TOOLTIP_TEMPLATE, &self.dataset, row)
    }
}

/// Substitute `{column}` placeholders with the cells of `row`. Unknown
/// placeholders are left as written.
pub fn render_template(template: &str, dataset: &TabularDataset, row: usize) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match dataset
            .column_index(name)
            .ok()
            .and_then(|col| dataset.cell(row, col))
        {
            Some(cell) => out.push_str(&cell.to_string()),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load_csv_path, load_csv_reader};
    use std::path::PathBuf;

    const HEADER: &str = "latitude,longitude,ODO (mg/L),Temperature (C),pH,Total Water Column (m)";

    fn survey(body: &str) -> Result<WaterSurvey> {
        let text = format!("{HEADER}\n{body}");
        WaterSurvey::from_dataset(load_csv_reader(text.as_bytes())?)
    }

    #[test]
    fn test_center_is_column_mean() {
        let s = survey("25.0,-80.0,5.0,24.0,8.0,1.0\n26.0,-81.0,6.0,25.0,8.1,2.0\n25.5,-80.6,5.5,24.5,8.05,1.5\n")
            .unwrap();
        let (lat, lon) = s.center();
        assert!((lat - 25.5).abs() < 1e-12);
        assert!((lon - (-80.0 - 81.0 - 80.6) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bundled_survey_center_matches_mean() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("csv/biscayne_bay_dataset_dec_2021.csv");
        let ds = load_csv_path(&path).unwrap();
        let lats: Vec<f64> = ds.numeric_column(LATITUDE).unwrap().into_iter().flatten().collect();
        let expected = lats.iter().sum::<f64>() / lats.len() as f64;

        let s = WaterSurvey::from_dataset(ds).unwrap();
        assert!((s.center().0 - expected).abs() < 1e-9);
        assert_eq!(s.positions().len(), s.len());
    }

    #[test]
    fn test_missing_ph_column_fails() {
        let text = "latitude,longitude,ODO (mg/L),Temperature (C),Total Water Column (m)\n25,-80,5,24,1\n";
        let err = WaterSurvey::from_dataset(load_csv_reader(text.as_bytes()).unwrap()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn(c) if c == "pH"));
    }

    #[test]
    fn test_text_in_numeric_column_fails() {
        let err = survey("25,-80,high,24,8,1\n").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidSchema(_)));
    }

    #[test]
    fn test_empty_survey_fails() {
        assert!(matches!(survey(""), Err(DashboardError::InvalidSchema(_))));
    }

    #[test]
    fn test_series_skips_gaps() {
        let s = survey("25,-80,5.0,24,8,1\n25,-80,,24,8,1\n25,-80,6.5,24,8,1\n").unwrap();
        assert_eq!(
            s.series(WaterParameter::DissolvedOxygen),
            vec![[0.0, 5.0], [2.0, 6.5]]
        );
    }

    #[test]
    fn test_table_projection_order() {
        let s = survey("25,-80,5,24,8.1,1.2\n").unwrap();
        let t = s
            .table(&[WaterParameter::TotalWaterColumn, WaterParameter::Ph])
            .unwrap();
        assert_eq!(
            t.columns,
            vec!["latitude", "longitude", "Total Water Column (m)", "pH"]
        );
        assert_eq!(t.rows[0][3].as_f64(), Some(8.1));
    }

    #[test]
    fn test_tooltip_fills_every_field() {
        let s = survey("25.5,-80.1,5.2,24.3,8.05,1.75\n").unwrap();
        let tip = s.tooltip(0);
        assert!(tip.starts_with("Lat: 25.5\nLong: -80.1"));
        assert!(tip.contains("pH: 8.05"));
        assert!(tip.ends_with("TWC(m): 1.75"));
        assert!(!tip.contains('{'));
    }

    #[test]
    fn test_template_keeps_unknown_placeholders() {
        let ds = load_csv_reader("a\n1\n".as_bytes()).unwrap();
        assert_eq!(render_template("{a} {b} {", &ds, 0), "1 {b} {");
    }

    #[test]
    fn test_depth_points() {
        let s = survey("25.0,-80.0,5,24,8,1.0\n26.0,-81.0,5,24,8,3.0\n").unwrap();
        assert_eq!(s.depth_points()[1], [-81.0, 26.0, 3.0]);
    }
}
