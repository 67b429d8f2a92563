pub mod analyzer;
pub mod area;
pub mod bounds;
pub mod classifier;
pub mod config;
pub mod decomposer;
pub mod distance;
pub mod framing;
pub mod neighbors;
pub mod source;

// Re-exports für einfache Verwendung
pub use analyzer::{TerritoryAnalysisResult, TerritoryAnalyzer, analyze};
pub use area::{AreaAnalysis, Territory, analyze_areas};
pub use bounds::{BoundsRegion, calculate_bounds, union_bounds};
pub use classifier::{Classification, classify, classify_distribution};
pub use config::{AnalysisConfig, CoordinateSystem, SeparationMethod, validate_threshold};
pub use decomposer::{Decomposer, Decomposition, DroppedPart};
pub use distance::{DistanceAnalyzer, DistanceReport};
pub use framing::frame_view;
pub use neighbors::{NeighborCandidate, filter_relevant_neighbors, tag_named_neighbor, tag_neighbor};
pub use source::{CountryGeometry, GeometrySource, InMemorySource};
