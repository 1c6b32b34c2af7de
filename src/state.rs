use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use eframe::egui::Color32;

use crate::config::DashboardConfig;
use crate::data::capitals::{load_capitals, Capital};
use crate::data::geology::periods_table;
use crate::data::loader::load_csv_path;
use crate::data::model::TabularDataset;
use crate::data::stats::ColumnSummary;
use crate::data::water::{WaterParameter, WaterSurvey};
use crate::error::Result;
use crate::panel::Panel;
use crate::quotes::exchange::{run_conversion, Conversion, TargetCurrency};
use crate::quotes::fetch::JsonFetcher;
use crate::quotes::price::{fetch_price, CryptoSymbol, PriceQuote};
use crate::showcase::{Balloon, FloatRange, PersonalInfo, TimeRange};
use crate::ui::projection::Projection;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,
    panel: Panel,
    /// Inputs and loaded data of the selected panel only.
    pub panel_state: PanelState,
    pub show_about: bool,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let panel = Panel::default();
        let panel_state = PanelState::for_panel(panel, &config);
        Self {
            config,
            panel,
            panel_state,
            show_about: false,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Switch panels. The previous panel's state is dropped so nothing
    /// carries over between visits.
    pub fn select(&mut self, panel: Panel) {
        if panel == self.panel {
            return;
        }
        log::info!("Switching panel: {} -> {}", self.panel, panel);
        self.panel = panel;
        self.panel_state = PanelState::for_panel(panel, &self.config);
    }
}

/// One variant per panel, each holding that panel's explicit inputs.
pub enum PanelState {
    Homepage(HomepageState),
    Geology(GeologyState),
    Capitals(CapitalsState),
    Biscayne(BiscayneState),
    Crypto(CryptoState),
}

impl PanelState {
    pub fn for_panel(panel: Panel, config: &DashboardConfig) -> Self {
        match panel {
            Panel::Homepage => PanelState::Homepage(HomepageState::new(Local::now().date_naive())),
            Panel::GeologicalPeriods => PanelState::Geology(GeologyState::new(config)),
            Panel::UsCapitals => PanelState::Capitals(CapitalsState::load(config)),
            Panel::BiscayneBay => {
                PanelState::Biscayne(BiscayneState::load(DataSource::Bundled(
                    config.data.biscayne_csv.clone(),
                )))
            }
            Panel::Crypto => PanelState::Crypto(CryptoState::default()),
        }
    }

    pub fn panel(&self) -> Panel {
        match self {
            PanelState::Homepage(_) => Panel::Homepage,
            PanelState::Geology(_) => Panel::GeologicalPeriods,
            PanelState::Capitals(_) => Panel::UsCapitals,
            PanelState::Biscayne(_) => Panel::BiscayneBay,
            PanelState::Crypto(_) => Panel::Crypto,
        }
    }
}

/// Log a panel failure at the point it is stored for display.
fn logged<T>(what: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        log::error!("{what}: {e}");
    }
    result
}

// ---------------------------------------------------------------------------
// Homepage
// ---------------------------------------------------------------------------

pub struct HomepageState {
    pub info: PersonalInfo,
    pub show_campus_map: bool,
    pub show_plots: bool,
    /// Regenerated each time the plots checkbox is turned on.
    pub chart: Option<[Vec<f64>; 4]>,
    pub show_sliders: bool,
    pub age: u32,
    pub appointment: TimeRange,
    pub values: FloatRange,
    pub show_audio: bool,
    pub show_boxes: bool,
    pub balloons: Option<(Instant, Vec<Balloon>)>,
    pub show_progress: bool,
    pub progress_started: Option<Instant>,
}

impl HomepageState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            info: PersonalInfo::new(today),
            show_campus_map: false,
            show_plots: false,
            chart: None,
            show_sliders: false,
            age: 21,
            appointment: TimeRange::default(),
            values: FloatRange::default(),
            show_audio: false,
            show_boxes: false,
            balloons: None,
            show_progress: false,
            progress_started: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Geological periods
// ---------------------------------------------------------------------------

pub struct GeologyState {
    pub table: TabularDataset,
    pub image: PathBuf,
    pub video: PathBuf,
}

impl GeologyState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            table: periods_table(),
            image: config.data.media("sedona_usa.jpeg"),
            video: config.data.media("volcano.mp4"),
        }
    }
}

// ---------------------------------------------------------------------------
// US capitals
// ---------------------------------------------------------------------------

pub struct CapitalsState {
    pub loaded: Result<(TabularDataset, Vec<Capital>)>,
}

impl CapitalsState {
    pub fn load(config: &DashboardConfig) -> Self {
        let loaded = load_capitals(&config.data.capitals_csv);
        if let Ok((_, capitals)) = &loaded {
            log::info!("Loaded {} capitals", capitals.len());
        }
        Self {
            loaded: logged("Loading capitals", loaded),
        }
    }
}

// ---------------------------------------------------------------------------
// Biscayne Bay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Bundled(PathBuf),
    Picked(PathBuf),
}

impl DataSource {
    pub fn path(&self) -> &PathBuf {
        match self {
            DataSource::Bundled(p) | DataSource::Picked(p) => p,
        }
    }
}

pub struct BiscayneState {
    pub source: DataSource,
    pub survey: Result<WaterSurvey>,
    pub parameter: WaterParameter,
    pub line_color: Color32,
    pub table_parameters: ParameterSelection,
    pub projection: Option<Projection>,
    /// Derived once per load; empty when the survey failed.
    pub depth_points: Vec<[f64; 3]>,
    pub summary: Vec<ColumnSummary>,
}

impl BiscayneState {
    pub const DEFAULT_LINE_COLOR: Color32 = Color32::from_rgb(0x00, 0xf9, 0x00);

    pub fn load(source: DataSource) -> Self {
        let survey = load_csv_path(source.path()).and_then(WaterSurvey::from_dataset);
        if let Ok(s) = &survey {
            log::info!("Loaded {} samples from {}", s.len(), source.path().display());
        }
        let (depth_points, summary) = match &survey {
            Ok(s) => (s.depth_points(), s.summary()),
            Err(_) => (Vec::new(), Vec::new()),
        };
        let projection = survey
            .is_ok()
            .then(|| Projection::fit(&depth_points, [true, true, true]));
        Self {
            source,
            survey: logged("Loading water survey", survey),
            parameter: WaterParameter::DissolvedOxygen,
            line_color: Self::DEFAULT_LINE_COLOR,
            table_parameters: ParameterSelection::default(),
            projection,
            depth_points,
            summary,
        }
    }

    /// Replace the dataset with a user-picked file, keeping the plot inputs.
    pub fn pick(&mut self, path: PathBuf) {
        let fresh = Self::load(DataSource::Picked(path));
        self.source = fresh.source;
        self.survey = fresh.survey;
        self.projection = fresh.projection;
        self.depth_points = fresh.depth_points;
        self.summary = fresh.summary;
    }
}

/// Parameters picked for the table projection, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSelection(Vec<WaterParameter>);

impl ParameterSelection {
    pub fn toggle(&mut self, parameter: WaterParameter) {
        if let Some(pos) = self.0.iter().position(|p| *p == parameter) {
            self.0.remove(pos);
        } else {
            self.0.push(parameter);
        }
    }

    pub fn contains(&self, parameter: WaterParameter) -> bool {
        self.0.contains(&parameter)
    }

    pub fn as_slice(&self) -> &[WaterParameter] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Crypto
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CryptoState {
    pub symbol: CryptoSymbol,
    /// Symbol the current `price` was fetched for.
    fetched_symbol: Option<CryptoSymbol>,
    pub price: Option<Result<PriceQuote>>,
    pub currency: TargetCurrency,
    /// Amount as shown in the input widget, possibly mid-edit.
    pub value: f64,
    /// Amount the conversion uses, set by `commit_value`.
    committed: f64,
    /// Inputs the current `conversion` was computed from.
    converted_for: Option<(f64, TargetCurrency)>,
    pub conversion: Option<Result<Conversion>>,
}

impl CryptoState {
    /// Fetch the price when entering the panel or after the symbol changed.
    pub fn refresh_price<F: JsonFetcher + ?Sized>(&mut self, fetcher: &F, config: &DashboardConfig) {
        if self.fetched_symbol == Some(self.symbol) {
            return;
        }
        self.fetched_symbol = Some(self.symbol);
        self.price = Some(logged(
            "Price lookup",
            fetch_price(fetcher, &config.crypto.price_url, self.symbol),
        ));
    }

    /// Take the edited amount as the one to convert.
    pub fn commit_value(&mut self) {
        self.committed = self.value;
    }

    /// Convert after the committed amount or the currency changed. A zero
    /// amount clears the result.
    pub fn refresh_conversion<F: JsonFetcher + ?Sized>(
        &mut self,
        fetcher: &F,
        config: &DashboardConfig,
    ) {
        let inputs = (self.committed, self.currency);
        if self.converted_for == Some(inputs) {
            return;
        }
        self.converted_for = Some(inputs);
        if self.committed == 0.0 {
            self.conversion = None;
            return;
        }
        self.conversion = Some(logged(
            "Currency conversion",
            run_conversion(
                fetcher,
                &config.crypto.exchange_url,
                &config.crypto.credentials,
                self.committed,
                self.currency,
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::quotes::exchange::exchange_url;
    use crate::quotes::fetch::testing::CannedFetcher;
    use crate::quotes::price::price_url;
    use serde_json::json;

    fn bundled_config() -> DashboardConfig {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let mut config = DashboardConfig::default();
        config.data.capitals_csv = root.join("csv/capitals_usa.csv");
        config.data.biscayne_csv = root.join("csv/biscayne_bay_dataset_dec_2021.csv");
        config
    }

    #[test]
    fn test_starts_on_homepage() {
        let state = AppState::new(bundled_config());
        assert_eq!(state.panel(), Panel::Homepage);
        assert!(matches!(state.panel_state, PanelState::Homepage(_)));
    }

    #[test]
    fn test_select_builds_matching_state() {
        let mut state = AppState::new(bundled_config());
        for panel in Panel::ALL {
            state.select(panel);
            assert_eq!(state.panel(), panel);
            assert_eq!(state.panel_state.panel(), panel);
        }
    }

    #[test]
    fn test_switching_away_discards_inputs() {
        let mut state = AppState::new(bundled_config());
        if let PanelState::Homepage(home) = &mut state.panel_state {
            home.info.first_name = "Ana".into();
            home.age = 40;
        }
        // reselecting the current panel keeps the inputs
        state.select(Panel::Homepage);
        assert!(matches!(&state.panel_state, PanelState::Homepage(h) if h.age == 40));

        state.select(Panel::Crypto);
        state.select(Panel::Homepage);
        match &state.panel_state {
            PanelState::Homepage(h) => {
                assert_eq!(h.age, 21);
                assert!(h.info.first_name.is_empty());
            }
            _ => panic!("expected homepage state"),
        }
    }

    #[test]
    fn test_capitals_panel_loads_bundled_file() {
        let mut state = AppState::new(bundled_config());
        state.select(Panel::UsCapitals);
        match &state.panel_state {
            PanelState::Capitals(c) => {
                let (table, capitals) = c.loaded.as_ref().unwrap();
                assert_eq!(table.len(), 50);
                assert_eq!(capitals.len(), 50);
            }
            _ => panic!("expected capitals state"),
        }
    }

    #[test]
    fn test_missing_capitals_file_is_reported() {
        let mut config = DashboardConfig::default();
        config.data.capitals_csv = std::env::temp_dir().join("bay-dashboard-none.csv");
        let c = CapitalsState::load(&config);
        assert!(matches!(c.loaded, Err(DashboardError::NotFound(_))));
    }

    #[test]
    fn test_biscayne_pick_replaces_dataset() {
        let config = bundled_config();
        let mut b = BiscayneState::load(DataSource::Bundled(config.data.biscayne_csv.clone()));
        assert!(b.survey.is_ok());
        b.parameter = WaterParameter::Ph;

        let upload = std::env::temp_dir().join("bay-dashboard-upload-no-ph.csv");
        std::fs::write(
            &upload,
            "latitude,longitude,ODO (mg/L),Temperature (C),Total Water Column (m)\n25,-80,5,24,1\n",
        )
        .unwrap();
        b.pick(upload.clone());

        assert_eq!(b.source, DataSource::Picked(upload.clone()));
        assert!(matches!(&b.survey, Err(DashboardError::MissingColumn(c)) if c == "pH"));
        assert!(b.projection.is_none());
        assert!(b.depth_points.is_empty() && b.summary.is_empty());
        assert_eq!(b.parameter, WaterParameter::Ph);
        let _ = std::fs::remove_file(&upload);
    }

    #[test]
    fn test_biscayne_views_computed_on_load() {
        let config = bundled_config();
        let b = BiscayneState::load(DataSource::Bundled(config.data.biscayne_csv.clone()));
        let survey = b.survey.as_ref().unwrap();
        assert_eq!(b.depth_points, survey.depth_points());
        assert_eq!(b.depth_points.len(), survey.len());
        assert_eq!(b.summary.len(), survey.summary().len());
        assert_eq!(b.summary[0].column, survey.summary()[0].column);
        assert!(b.projection.is_some());
    }

    #[test]
    fn test_table_parameter_toggle_keeps_order() {
        let mut selection = ParameterSelection::default();
        selection.toggle(WaterParameter::Ph);
        selection.toggle(WaterParameter::DissolvedOxygen);
        selection.toggle(WaterParameter::Temperature);
        selection.toggle(WaterParameter::DissolvedOxygen);
        assert_eq!(
            selection.as_slice(),
            &[WaterParameter::Ph, WaterParameter::Temperature]
        );
        assert!(!selection.contains(WaterParameter::DissolvedOxygen));
    }

    #[test]
    fn test_price_refetched_only_on_symbol_change() {
        let config = DashboardConfig::default();
        let mut fetcher = CannedFetcher::with(
            &price_url(&config.crypto.price_url, CryptoSymbol::Bitcoin),
            json!({"USD": 65000.12}),
        );
        fetcher.responses.insert(
            price_url(&config.crypto.price_url, CryptoSymbol::Ethereum),
            json!({"USD": 3100.5}),
        );

        let mut crypto = CryptoState::default();
        crypto.refresh_price(&fetcher, &config);
        crypto.refresh_price(&fetcher, &config);
        assert_eq!(fetcher.requests.borrow().len(), 1);
        assert_eq!(crypto.price.as_ref().unwrap().as_ref().unwrap().usd, 65000.12);

        crypto.symbol = CryptoSymbol::Ethereum;
        crypto.refresh_price(&fetcher, &config);
        assert_eq!(fetcher.requests.borrow().len(), 2);
        assert_eq!(crypto.price.as_ref().unwrap().as_ref().unwrap().usd, 3100.5);
    }

    #[test]
    fn test_conversion_follows_inputs() {
        let keys = std::env::temp_dir().join("bay-dashboard-state-keys.json");
        std::fs::write(&keys, r#"{"currency_api": "abc"}"#).unwrap();
        let mut config = DashboardConfig::default();
        config.crypto.credentials = keys.clone();

        let fetcher = CannedFetcher::with(
            &exchange_url(&config.crypto.exchange_url, "abc"),
            json!({"quotes": {"USDBRL": 5.0, "USDEUR": 0.5}}),
        );

        let mut crypto = CryptoState::default();
        crypto.refresh_conversion(&fetcher, &config);
        assert!(crypto.conversion.is_none(), "zero amount converts nothing");
        assert!(fetcher.requests.borrow().is_empty());

        crypto.value = 100.0;
        crypto.commit_value();
        crypto.refresh_conversion(&fetcher, &config);
        assert_eq!(crypto.conversion.as_ref().unwrap().as_ref().unwrap().usd, 20.0);

        crypto.currency = TargetCurrency::Eur;
        crypto.refresh_conversion(&fetcher, &config);
        crypto.refresh_conversion(&fetcher, &config);
        assert_eq!(crypto.conversion.as_ref().unwrap().as_ref().unwrap().usd, 200.0);
        assert_eq!(fetcher.requests.borrow().len(), 2);
        let _ = std::fs::remove_file(&keys);
    }

    #[test]
    fn test_editing_amount_waits_for_commit() {
        let keys = std::env::temp_dir().join("bay-dashboard-commit-keys.json");
        std::fs::write(&keys, r#"{"currency_api": "abc"}"#).unwrap();
        let mut config = DashboardConfig::default();
        config.crypto.credentials = keys.clone();

        let fetcher = CannedFetcher::with(
            &exchange_url(&config.crypto.exchange_url, "abc"),
            json!({"quotes": {"USDBRL": 5.0}}),
        );

        let mut crypto = CryptoState::default();
        for step in 1..=50 {
            crypto.value = step as f64;
            crypto.refresh_conversion(&fetcher, &config);
        }
        assert!(fetcher.requests.borrow().is_empty());
        assert!(crypto.conversion.is_none());

        crypto.commit_value();
        crypto.refresh_conversion(&fetcher, &config);
        crypto.refresh_conversion(&fetcher, &config);
        assert_eq!(fetcher.requests.borrow().len(), 1);
        assert_eq!(crypto.conversion.as_ref().unwrap().as_ref().unwrap().usd, 10.0);
        let _ = std::fs::remove_file(&keys);
    }
}
