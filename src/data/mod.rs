/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (fatal LoadError on bad input)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, payload bounds, category index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (site, payload range) → pie rows/counts, scatter rows, label
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
