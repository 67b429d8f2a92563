// src/territory/bounds.rs

use super::area::Territory;
use super::classifier::Classification;
use crate::math::{
    error::{TerritoryError, TerritoryResult},
    types::Bounds2D,
};
use serde::Serialize;
use tracing::debug;

/// Render-fertige Bounding-Region eines Landes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundsRegion {
    pub bounds: Bounds2D,
    /// Ob Exklaven bei der Berechnung ausgelassen wurden
    pub exclaves_excluded: bool,
}

/// Leitet die Bounding-Region aus den Territorien ab.
///
/// Nur bei `HasExclaves` mit `exclude_exclaves` wird auf den Hauptteil (Rang 0)
/// reduziert. Inselstaaten haben keinen Hauptteil, um den isoliert werden könnte;
/// sie erhalten wie zusammenhängende Länder die Hülle aller Teile.
pub fn calculate_bounds(
    territories: &[Territory],
    classification: Classification,
    exclude_exclaves: bool,
) -> TerritoryResult<BoundsRegion> {
    let main = territories
        .iter()
        .find(|t| t.rank == 0)
        .ok_or_else(|| TerritoryError::EmptyGeometry {
            country: String::new(),
        })?;

    let main_only = match classification {
        Classification::HasExclaves => exclude_exclaves,
        Classification::Continuous | Classification::IslandNation => false,
    };

    let region = if main_only {
        BoundsRegion {
            bounds: main.bounds,
            exclaves_excluded: true,
        }
    } else {
        BoundsRegion {
            bounds: union_bounds(territories),
            exclaves_excluded: false,
        }
    };

    debug!(
        %classification,
        exclude_exclaves,
        bounds = %region.bounds,
        "derived bounds region"
    );
    Ok(region)
}

/// Vereinigte Hülle aller Territorien
pub fn union_bounds(territories: &[Territory]) -> Bounds2D {
    territories
        .iter()
        .fold(Bounds2D::empty(), |acc, t| acc.union(&t.bounds))
}
