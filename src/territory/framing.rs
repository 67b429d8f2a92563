// src/territory/framing.rs

use super::bounds::BoundsRegion;
use crate::math::{
    error::{TerritoryError, TerritoryResult},
    types::*,
};

/// Quadratischer Ausschnitt um die Bounding-Region.
///
/// Die Seitenlänge ist `max(breite, höhe) / sqrt(target_fraction)`, die Region
/// nimmt also etwa `target_fraction` der Fläche ein.
pub fn frame_view(region: &BoundsRegion, target_fraction: f64) -> TerritoryResult<Bounds2D> {
    if !(target_fraction > 0.0 && target_fraction <= 1.0) {
        return Err(TerritoryError::InvalidConfiguration {
            message: format!("target_fraction must be in (0, 1], got {target_fraction}"),
        });
    }
    if region.bounds.is_empty() {
        return Err(TerritoryError::InvalidConfiguration {
            message: "cannot frame an empty bounds region".to_string(),
        });
    }

    let extent = region.bounds.width().max(region.bounds.height());
    let side = extent / target_fraction.sqrt();
    Ok(Bounds2D::from_center_size(
        region.bounds.center(),
        Point2D { x: side, y: side },
    ))
}
