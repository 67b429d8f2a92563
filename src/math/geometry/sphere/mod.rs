// src/math/geometry/sphere/mod.rs

pub mod coordinates;

pub use self::coordinates::{GeographicCoordinates, GreatCircle};
