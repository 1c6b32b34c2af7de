/// Data layer: core types, loading, and statistics.
///
/// Architecture:
/// ```text
///   .csv (bundled or picked)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TabularDataset
///   └──────────┘
///        │
///        ├──────────────► capitals   typed rows for the marker map
///        ▼
///   ┌──────────────┐
///   │  WaterSurvey  │  schema check, center, series, projections
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean, quantiles, describe()
///   └──────────┘
/// ```

pub mod capitals;
pub mod geology;
pub mod loader;
pub mod model;
pub mod stats;
pub mod water;
