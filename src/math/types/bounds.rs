// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> TerritoryResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(TerritoryError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus Zentrum und Größe
    pub fn from_center_size(center: Point2D, size: Point2D) -> Self {
        let half_size = size * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Leere Bounding Box (ungültig)
    pub fn empty() -> Self {
        Self {
            min: Point2D {
                x: f64::INFINITY,
                y: f64::INFINITY,
            },
            max: Point2D {
                x: f64::NEG_INFINITY,
                y: f64::NEG_INFINITY,
            },
        }
    }

    /// Prüft ob die Bounding Box leer ist
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Prüft ob eine andere Bounding Box vollständig enthalten ist
    pub fn contains_bounds(&self, other: &Bounds2D) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }

        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }

    /// Vereinigt zwei Bounding Boxes
    pub fn union(&self, other: &Bounds2D) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        Self {
            min: Point2D {
                x: self.min.x.min(other.min.x),
                y: self.min.y.min(other.min.y),
            },
            max: Point2D {
                x: self.max.x.max(other.max.x),
                y: self.max.y.max(other.max.y),
            },
        }
    }

    /// Abstand zwischen zwei Bounding Boxes (0 bei Überschneidung)
    ///
    /// Untere Schranke für den Abstand aller enthaltenen Geometrien.
    pub fn distance_to_bounds(&self, other: &Bounds2D) -> f64 {
        if self.is_empty() || other.is_empty() {
            return f64::INFINITY;
        }
        let dx = (other.min.x - self.max.x).max(self.min.x - other.max.x).max(0.0);
        let dy = (other.min.y - self.max.y).max(self.min.y - other.max.y).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Bounds2D(empty)")
        } else {
            write!(
                f,
                "Bounds2D(({}, {}) to ({}, {}))",
                self.min.x, self.min.y, self.max.x, self.max.y
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(Bounds2D::new(p(1.0, 0.0), p(0.0, 1.0)).is_err());
        assert!(Bounds2D::new(p(0.0, 0.0), p(1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_from_points_iter() {
        let bounds = Bounds2D::from_points_iter(vec![p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)])
            .unwrap();
        assert_eq!(bounds.min, p(-2.0, -1.0));
        assert_eq!(bounds.max, p(4.0, 5.0));
        assert!(Bounds2D::from_points_iter(Vec::new()).is_none());
    }

    #[test]
    fn test_union_with_empty() {
        let a = Bounds2D::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
        assert_eq!(a.union(&Bounds2D::empty()), a);
        assert_eq!(Bounds2D::empty().union(&a), a);

        let b = Bounds2D::new(p(5.0, -1.0), p(6.0, 0.5)).unwrap();
        let u = a.union(&b);
        assert_eq!(u.min, p(0.0, -1.0));
        assert_eq!(u.max, p(6.0, 1.0));
        assert!(u.contains_bounds(&a) && u.contains_bounds(&b));
    }

    #[test]
    fn test_distance_to_bounds() {
        let a = Bounds2D::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
        let b = Bounds2D::new(p(4.0, 5.0), p(6.0, 6.0)).unwrap();
        assert_relative_eq!(a.distance_to_bounds(&b), 5.0);
        assert_eq!(a.distance_to_bounds(&a), 0.0);
    }

    #[test]
    fn test_metrics() {
        let a = Bounds2D::from_center_size(p(2.0, 3.0), p(4.0, 2.0));
        assert_relative_eq!(a.width(), 4.0);
        assert_relative_eq!(a.height(), 2.0);
        assert_eq!(a.center(), p(2.0, 3.0));
        assert!(Bounds2D::empty().is_empty());
    }
}
