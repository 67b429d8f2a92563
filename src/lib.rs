// ./src/lib.rs

// Eigene Module deklarieren
pub mod debug;
pub mod math;
pub mod territory;

// Öffentliche API
pub mod prelude {
    pub use crate::math::prelude::*;
    pub use crate::territory::{
        AnalysisConfig, BoundsRegion, Classification, CoordinateSystem, CountryGeometry,
        DistanceReport, GeometrySource, InMemorySource, NeighborCandidate, SeparationMethod,
        Territory, TerritoryAnalysisResult, TerritoryAnalyzer, analyze, calculate_bounds, classify,
        filter_relevant_neighbors, frame_view,
    };
}
