// src/math/geometry/polygon/core/properties.rs

use crate::math::types::*;

/// Trait für Ring-Eigenschaften
pub trait RingProperties {
    /// Vorzeichenbehaftete Fläche (Shoelace-Formel), positiv gegen den Uhrzeigersinn
    fn signed_area(&self) -> f64;

    /// Betrag der Fläche
    fn ring_area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Erste Flächenmomente (Σ Fläche·Schwerpunkt), auf positive Orientierung normiert
    fn first_moments(&self) -> (f64, f64);

    /// Arithmetisches Mittel der Vertices (ohne schließenden Duplikat-Punkt)
    fn vertex_mean(&self) -> Option<Point2D>;

    /// Vertices ohne schließenden Duplikat-Punkt
    fn open_vertices(&self) -> &[Point2D];
}

impl RingProperties for LineString<f64> {
    fn open_vertices(&self) -> &[Point2D] {
        let coords = self.0.as_slice();
        if coords.len() > 1 && coords.first() == coords.last() {
            &coords[..coords.len() - 1]
        } else {
            coords
        }
    }

    fn signed_area(&self) -> f64 {
        let vertices = self.open_vertices();
        let n = vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += vertices[i].x * vertices[j].y;
            area -= vertices[j].x * vertices[i].y;
        }

        area * 0.5
    }

    fn first_moments(&self) -> (f64, f64) {
        let vertices = self.open_vertices();
        let n = vertices.len();
        if n < 3 {
            return (0.0, 0.0);
        }

        let mut mx = 0.0;
        let mut my = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let factor = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
            mx += (vertices[i].x + vertices[j].x) * factor;
            my += (vertices[i].y + vertices[j].y) * factor;
        }

        let sign = if self.signed_area() < 0.0 { -1.0 } else { 1.0 };
        (sign * mx / 6.0, sign * my / 6.0)
    }

    fn vertex_mean(&self) -> Option<Point2D> {
        let vertices = self.open_vertices();
        if vertices.is_empty() {
            return None;
        }

        let sum = vertices
            .iter()
            .fold(Point2D { x: 0.0, y: 0.0 }, |acc, v| acc + *v);
        Some(sum / vertices.len() as f64)
    }
}
