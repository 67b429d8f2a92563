//! Property-basierte Tests für die Territorium-Analyse.

use geo::{Geometry, LineString, Polygon};
use proptest::prelude::*;
use territory_bounds::territory::{
    AnalysisConfig, Classification, CoordinateSystem, CountryGeometry, TerritoryAnalyzer,
    classify_distribution, union_bounds,
};

fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(x0, y0), (x0 + w, y0), (x0 + w, y0 + h), (x0, y0 + h)]),
        vec![],
    )
}

/// Disjunkte Rechtecke von links nach rechts, jeweils 1 Einheit Abstand.
fn country_from_sizes(sizes: &[(f64, f64)]) -> CountryGeometry {
    let mut x = 0.0;
    let polygons = sizes
        .iter()
        .map(|&(w, h)| {
            let polygon = rect(x, 0.0, w, h);
            x += w + 1.0;
            polygon
        })
        .collect();
    CountryGeometry::from_polygons("XPR", "Proptestia", polygons)
}

fn planar() -> TerritoryAnalyzer {
    TerritoryAnalyzer::new(AnalysisConfig::default().with_coordinate_system(CoordinateSystem::Planar))
}

fn sizes() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.1f64..50.0, 0.1f64..50.0), 1..24)
}

proptest! {
    // ========================
    // Area Distribution Properties
    // ========================

    #[test]
    fn percentages_sum_to_hundred(sizes in sizes()) {
        let result = planar().analyze(&country_from_sizes(&sizes)).unwrap();
        let sum: f64 = result.territories.iter().map(|t| t.percentage_of_total).sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "sum = {}", sum);
        for t in &result.territories {
            prop_assert!(t.percentage_of_total >= 0.0 && t.percentage_of_total <= 100.0);
        }
    }

    #[test]
    fn ranks_are_contiguous_and_descending(sizes in sizes()) {
        let result = planar().analyze(&country_from_sizes(&sizes)).unwrap();
        prop_assert_eq!(result.polygon_count, sizes.len());
        for (index, t) in result.territories.iter().enumerate() {
            prop_assert_eq!(t.rank, index);
        }
        for pair in result.territories.windows(2) {
            prop_assert!(pair[0].area >= pair[1].area);
            if pair[0].area == pair[1].area {
                prop_assert!(pair[0].source_index < pair[1].source_index);
            }
        }
    }

    // ========================
    // Classification Properties
    // ========================

    #[test]
    fn classification_matches_distribution(sizes in sizes(), threshold in 0.01f64..=1.0) {
        let analyzer = TerritoryAnalyzer::new(
            AnalysisConfig::default()
                .with_coordinate_system(CoordinateSystem::Planar)
                .with_threshold(threshold),
        );
        let result = analyzer.analyze(&country_from_sizes(&sizes)).unwrap();
        let expected = classify_distribution(result.main_area_percentage, result.polygon_count, threshold);
        prop_assert_eq!(result.classification, expected);

        match result.classification {
            Classification::Continuous => prop_assert_eq!(result.polygon_count, 1),
            Classification::HasExclaves | Classification::IslandNation => {
                prop_assert!(result.polygon_count > 1)
            }
        }
    }

    #[test]
    fn lower_threshold_keeps_dominance(main in 0.0f64..=100.0, parts in 2usize..300, t in 0.01f64..=1.0, lower in 0.01f64..=1.0) {
        let lower = lower.min(t);
        if classify_distribution(main, parts, t) == Classification::HasExclaves {
            prop_assert_eq!(classify_distribution(main, parts, lower), Classification::HasExclaves);
        }
    }

    #[test]
    fn main_part_alone_is_continuous(sizes in sizes()) {
        let analyzer = planar();
        let result = analyzer.analyze(&country_from_sizes(&sizes)).unwrap();
        let main = result.main_territory().unwrap();
        let alone = CountryGeometry::new(
            "XPR",
            "Proptestia",
            Geometry::Polygon(main.part.polygon().clone()),
        );
        let again = analyzer.analyze(&alone).unwrap();
        prop_assert_eq!(again.classification, Classification::Continuous);
        prop_assert!((again.main_area_percentage - 100.0).abs() < 1e-9);
        prop_assert_eq!(again.max_distance, None);
    }

    // ========================
    // Bounds Properties
    // ========================

    #[test]
    fn bounds_region_lies_within_union(sizes in sizes(), exclude in any::<bool>()) {
        let analyzer = TerritoryAnalyzer::new(
            AnalysisConfig::default()
                .with_coordinate_system(CoordinateSystem::Planar)
                .with_exclude_exclaves(exclude),
        );
        let result = analyzer.analyze(&country_from_sizes(&sizes)).unwrap();
        let region = analyzer.bounds(&result).unwrap();
        let union = union_bounds(&result.territories);
        prop_assert!(union.contains_bounds(&region.bounds));
        prop_assert_eq!(region.exclaves_excluded, exclude && result.has_exclaves());
        if !region.exclaves_excluded {
            prop_assert_eq!(region.bounds, union);
        }
    }

    #[test]
    fn max_distance_present_iff_multiple_parts(sizes in sizes()) {
        let result = planar().analyze(&country_from_sizes(&sizes)).unwrap();
        prop_assert_eq!(result.max_distance.is_some(), sizes.len() > 1);
        if let Some(d) = result.max_distance {
            // Nachbarn liegen genau 1 Einheit auseinander
            prop_assert!(d >= 1.0 - 1e-9);
        }
    }
}
