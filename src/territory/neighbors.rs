// src/territory/neighbors.rs

use super::area::Territory;
use super::config::{CoordinateSystem, SeparationMethod};
use super::decomposer::Decomposer;
use super::distance::DistanceAnalyzer;
use crate::math::{
    error::TerritoryResult,
    geometry::sphere::GreatCircle,
    types::*,
    utils::angles,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Platzhalter der Quelldaten für fehlende ISO-Codes
const MISSING_ISO_CODE: &str = "-99";
const NEIGHBOR_LABEL: &str = "neighbor";

/// Ein Nachbarland mit den Rängen der Territorien, an die es grenzt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborCandidate {
    pub name: String,
    pub iso_code: String,
    /// Ränge der angrenzenden Territorien; leer, wenn unbekannt
    #[serde(default)]
    pub bordered_ranks: Vec<usize>,
}

impl NeighborCandidate {
    pub fn new(name: impl Into<String>, iso_code: impl Into<String>, bordered_ranks: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            iso_code: iso_code.into(),
            bordered_ranks,
        }
    }

    /// ISO-Code für die Anzeige, `N/A` wenn er fehlt
    pub fn display_iso(&self) -> &str {
        if self.iso_code.is_empty() || self.iso_code == MISSING_ISO_CODE {
            "N/A"
        } else {
            &self.iso_code
        }
    }

    /// Grenzt an den Hauptteil (Rang 0)
    pub fn borders_main(&self) -> bool {
        self.bordered_ranks.contains(&0)
    }
}

/// Filtert Nachbarn für die Darstellung.
///
/// Beim Ausschluss von Exklaven fallen Nachbarn weg, die nur an Teile mit
/// Rang > 0 grenzen. Nachbarn ohne Rang-Angabe bleiben erhalten.
pub fn filter_relevant_neighbors(
    candidates: &[NeighborCandidate],
    exclude_exclaves: bool,
) -> Vec<NeighborCandidate> {
    if !exclude_exclaves {
        return candidates.to_vec();
    }

    let kept: Vec<NeighborCandidate> = candidates
        .iter()
        .filter(|c| c.bordered_ranks.is_empty() || c.borders_main())
        .cloned()
        .collect();

    debug!(
        candidates = candidates.len(),
        kept = kept.len(),
        "filtered neighbors bordering only exclaves"
    );
    kept
}

/// Bestimmt, an welche Territorien (Ränge) die Geometrie eines Nachbarn grenzt.
///
/// Ein Territorium gilt als angrenzend, wenn der Randabstand höchstens
/// `tolerance` beträgt (gepufferter Berührungstest für ungenau gemeinsame Grenzen).
/// `tolerance` ist in Koordinaten-Einheiten angegeben; bei geodätischen Eingaben
/// also in Grad, gemessen als Bogenlänge auf dem Großkreis.
pub fn tag_neighbor(
    territories: &[Territory],
    neighbor_geometry: &Geometry<f64>,
    tolerance: f64,
    coordinate_system: CoordinateSystem,
) -> TerritoryResult<Vec<usize>> {
    tag_named_neighbor(
        NEIGHBOR_LABEL,
        territories,
        neighbor_geometry,
        tolerance,
        coordinate_system,
    )
}

/// Wie [`tag_neighbor`]; Fehler beim Zerlegen nennen `neighbor_name`.
pub fn tag_named_neighbor(
    neighbor_name: &str,
    territories: &[Territory],
    neighbor_geometry: &Geometry<f64>,
    tolerance: f64,
    coordinate_system: CoordinateSystem,
) -> TerritoryResult<Vec<usize>> {
    let neighbor_parts = Decomposer::new()
        .decompose(neighbor_name, neighbor_geometry)?
        .parts;
    let analyzer = DistanceAnalyzer::new(coordinate_system, SeparationMethod::Boundary);
    let limit = match coordinate_system {
        CoordinateSystem::Planar => tolerance,
        CoordinateSystem::Geodetic => GreatCircle::default().radius * angles::deg_to_rad(tolerance),
    };

    let mut ranks: Vec<usize> = territories
        .iter()
        .filter(|t| {
            neighbor_parts.iter().any(|n| {
                analyzer.lower_bound(&t.bounds, &n.bounds()) <= limit
                    && analyzer.boundary_distance(&t.part, n) <= limit
            })
        })
        .map(|t| t.rank)
        .collect();
    ranks.sort_unstable();

    debug!(neighbor = neighbor_name, ?ranks, "tagged neighbor");
    Ok(ranks)
}
