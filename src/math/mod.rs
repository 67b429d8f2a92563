pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{TerritoryError, TerritoryResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{TerritoryError, TerritoryResult},
        geometry::{
            polygon::{PartDefect, PartValidator, PolygonPart, RingProperties},
            sphere::{GeographicCoordinates, GreatCircle},
        },
        types::*,
    };
}
