/// Data layer: core types, loading, filtering, and writing.
///
/// Architecture:
/// ```text
///  idioms_1543.csv     idioms_with_3yo_explanations.csv
///        │                        │
///        ▼                        ▼
///   ┌──────────┐            ┌──────────┐
///   │  loader   │            │  loader   │
///   └──────────┘            └──────────┘
///        │                        │
///        ▼                        ▼
///     KeySet ──────────▶   ┌──────────┐
///                          │  filter   │  matching row indices
///                          └──────────┘
///                                │
///                                ▼
///                          ┌──────────┐
///                          │  writer   │  header + retained rows
///                          └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod filter;
pub mod writer;
