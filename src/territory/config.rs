// src/territory/config.rs

use crate::math::error::{TerritoryError, TerritoryResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.8;
pub const DEFAULT_TARGET_FRACTION: f64 = 0.3;
/// Etwa 1 km in Grad am Äquator
pub const DEFAULT_NEIGHBOR_TOLERANCE: f64 = 0.01;

/// Wie die Eingabe-Koordinaten zu lesen sind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// (Länge, Breite) in Grad; Abstände als Großkreis in Kilometern
    #[default]
    Geodetic,
    /// Ebene Koordinaten; Abstände euklidisch in Eingabe-Einheiten
    Planar,
}

impl CoordinateSystem {
    /// Einheit der berechneten Abstände
    pub fn distance_unit(&self) -> &'static str {
        match self {
            CoordinateSystem::Geodetic => "km",
            CoordinateSystem::Planar => "coordinate_units",
        }
    }
}

/// Wie der Abstand zwischen zwei Teilen gemessen wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationMethod {
    /// Kürzester Abstand Rand-zu-Rand (exakt)
    #[default]
    Boundary,
    /// Abstand der Schwerpunkte; Näherung mit dokumentierter Fehlerschranke
    Centroid,
}

/// Konfiguration für eine Territorium-Analyse.
///
/// Wird pro Aufruf übergeben; es gibt keinen globalen Zustand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Dominanz-Schwelle in (0, 1]: Anteil der Gesamtfläche, ab dem der größte Teil dominiert.
    pub threshold: f64,
    /// Ob Exklaven bei der Bounding-Region ausgeschlossen werden.
    pub exclude_exclaves: bool,
    pub coordinate_system: CoordinateSystem,
    pub separation_method: SeparationMethod,
    /// Anteil der Ansicht, den die Bounding-Region einnehmen soll (Framing), in (0, 1].
    pub target_fraction: f64,
    /// Maximaler Randabstand, bei dem ein Nachbar als angrenzend gilt (Koordinaten-Einheiten).
    pub neighbor_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            exclude_exclaves: true,
            coordinate_system: CoordinateSystem::default(),
            separation_method: SeparationMethod::default(),
            target_fraction: DEFAULT_TARGET_FRACTION,
            neighbor_tolerance: DEFAULT_NEIGHBOR_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_exclude_exclaves(mut self, exclude: bool) -> Self {
        self.exclude_exclaves = exclude;
        self
    }

    pub fn with_coordinate_system(mut self, system: CoordinateSystem) -> Self {
        self.coordinate_system = system;
        self
    }

    pub fn with_separation_method(mut self, method: SeparationMethod) -> Self {
        self.separation_method = method;
        self
    }

    pub fn with_target_fraction(mut self, fraction: f64) -> Self {
        self.target_fraction = fraction;
        self
    }

    pub fn with_neighbor_tolerance(mut self, tolerance: f64) -> Self {
        self.neighbor_tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> TerritoryResult<()> {
        validate_threshold(self.threshold)?;
        if !(self.target_fraction > 0.0 && self.target_fraction <= 1.0) {
            return Err(TerritoryError::InvalidConfiguration {
                message: format!(
                    "target_fraction must be in (0, 1], got {}",
                    self.target_fraction
                ),
            });
        }
        if !(self.neighbor_tolerance >= 0.0 && self.neighbor_tolerance.is_finite()) {
            return Err(TerritoryError::InvalidConfiguration {
                message: format!(
                    "neighbor_tolerance must be a finite, non-negative value, got {}",
                    self.neighbor_tolerance
                ),
            });
        }
        Ok(())
    }
}

/// Prüft, dass die Schwelle in (0, 1] liegt. NaN ist ungültig.
pub fn validate_threshold(threshold: f64) -> TerritoryResult<f64> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(threshold)
    } else {
        Err(TerritoryError::InvalidThreshold { value: threshold })
    }
}
