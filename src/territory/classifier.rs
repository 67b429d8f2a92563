// src/territory/classifier.rs

use super::area::Territory;
use super::config::validate_threshold;
use crate::math::error::{TerritoryError, TerritoryResult};
use crate::math::utils::comparison;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Territoriale Struktur eines Landes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Eine zusammenhängende Landmasse
    Continuous,
    /// Eine dominante Landmasse mit abgetrennten Teilen
    HasExclaves,
    /// Mehrere Teile, keiner dominiert
    IslandNation,
}

impl Classification {
    /// Name wie in der JSON-Ausgabe
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Continuous => "continuous",
            Classification::HasExclaves => "has_exclaves",
            Classification::IslandNation => "island_nation",
        }
    }

    /// Zusatz für Kartentitel
    pub fn title_suffix(&self) -> &'static str {
        match self {
            Classification::Continuous => "Continuous Territory",
            Classification::HasExclaves => "With Exclaves",
            Classification::IslandNation => "Island Nation",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Klassifiziert die Flächenverteilung.
///
/// `territories` muss absteigend nach Fläche sortiert sein (Rang 0 zuerst).
/// Ein Teil ist immer `Continuous`. Bei mehreren Teilen entscheidet allein der
/// Anteil des größten Teils: `>= threshold * 100` ergibt `HasExclaves`
/// (Gleichstand zählt als Dominanz, auch bei Rundungsfehlern), darunter `IslandNation`.
pub fn classify(territories: &[Territory], threshold: f64) -> TerritoryResult<Classification> {
    let threshold = validate_threshold(threshold)?;
    let main_percentage = territories
        .first()
        .map(|t| t.percentage_of_total)
        .ok_or_else(|| TerritoryError::EmptyGeometry {
            country: String::new(),
        })?;

    Ok(classify_distribution(
        main_percentage,
        territories.len(),
        threshold,
    ))
}

/// Kern der Klassifikation auf der reinen Prozentverteilung
pub fn classify_distribution(
    main_percentage: f64,
    part_count: usize,
    threshold: f64,
) -> Classification {
    if part_count <= 1 {
        Classification::Continuous
    } else if main_percentage >= threshold * 100.0
        || comparison::nearly_equal(main_percentage, threshold * 100.0)
    {
        Classification::HasExclaves
    } else {
        Classification::IslandNation
    }
}
