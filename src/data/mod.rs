/// Data layer: core types, loading, and grouping.
///
/// Architecture:
/// ```text
///  resultats.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → BenchmarkDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ BenchmarkDataset │  Vec<BenchmarkRow>, header names
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group   │  partition by `domain` → Vec<DomainGroup>
///   └──────────┘
/// ```

pub mod group;
pub mod loader;
pub mod model;
