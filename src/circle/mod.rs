//! Circle point generation
//!
//! This module handles:
//! - The 2D point data model (`Point`, `PointSet`)
//! - Circle parameters (`CircleSpec`) and boundary validation
//! - Deterministic generation of evenly-spaced points on a circle

use crate::constants::limits;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A 2D point (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An ordered sequence of 2D points
///
/// Order is insertion order (generation order or file row order).
/// Duplicate coordinates are allowed and the set may be empty.
pub type PointSet = Vec<Point>;

/// Parameters fully determining a generated point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    /// Circle center x coordinate
    pub center_x: f64,

    /// Circle center y coordinate
    pub center_y: f64,

    /// Circle radius (>= 0)
    pub radius: f64,

    /// Number of points to generate (>= 1)
    pub count: usize,
}

impl CircleSpec {
    /// Create a new circle spec
    pub fn new(center_x: f64, center_y: f64, radius: f64, count: usize) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            count,
        }
    }

    /// Center of the circle as a point
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Validate the spec at the input boundary
    ///
    /// Center must be finite, radius finite and non-negative, and count
    /// within `[MIN_POINTS, MAX_POINTS]`. `generate` assumes a validated
    /// spec and performs no checks of its own.
    pub fn validate(&self) -> Result<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(Error::InvalidSpec(format!(
                "Center ({}, {}) must be finite",
                self.center_x, self.center_y
            )));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::InvalidSpec(format!(
                "Radius {} must be finite and >= 0",
                self.radius
            )));
        }
        if self.count < limits::MIN_POINTS || self.count > limits::MAX_POINTS {
            return Err(Error::InvalidSpec(format!(
                "Point count {} is out of range [{}, {}]",
                self.count,
                limits::MIN_POINTS,
                limits::MAX_POINTS
            )));
        }
        Ok(())
    }
}

/// Generate `count` evenly-spaced points on the circle
///
/// Angles sweep the half-open interval `[0, 2*PI)`: `theta_i = 2*PI*i/count`
/// for `i = 0..count-1`, so the last point never coincides with the first.
/// The same spec always yields the same sequence. A zero radius yields
/// `count` coincident points at the center.
pub fn generate(spec: &CircleSpec) -> PointSet {
    let mut points = Vec::with_capacity(spec.count);

    for i in 0..spec.count {
        let theta = 2.0 * PI * (i as f64) / (spec.count as f64);
        points.push(Point::new(
            spec.center_x + spec.radius * theta.cos(),
            spec.center_y + spec.radius * theta.sin(),
        ));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generate_count_and_radius() {
        let spec = CircleSpec::new(2.5, -1.0, 4.0, 360);
        let points = generate(&spec);

        assert_eq!(points.len(), 360);
        for point in &points {
            assert_relative_eq!(point.distance_to(spec.center()), 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_generate_unit_circle_quarters() {
        let spec = CircleSpec::new(0.0, 0.0, 1.0, 4);
        let points = generate(&spec);

        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        assert_eq!(points.len(), 4);
        for (point, (x, y)) in points.iter().zip(expected) {
            assert_relative_eq!(point.x, x, epsilon = 1e-12);
            assert_relative_eq!(point.y, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_generate_single_point() {
        let spec = CircleSpec::new(0.0, 0.0, 5.0, 1);
        let points = generate(&spec);

        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 5.0);
        assert_relative_eq!(points[0].y, 0.0);
    }

    #[test]
    fn test_generate_angle_spacing() {
        let spec = CircleSpec::new(0.0, 0.0, 1.0, 12);
        let points = generate(&spec);
        let step = 2.0 * PI / 12.0;

        for (i, point) in points.iter().enumerate() {
            let theta = point.y.atan2(point.x).rem_euclid(2.0 * PI);
            assert_relative_eq!(theta, step * i as f64, epsilon = 1e-9);
        }

        // The sweep is half-open: no point lands back on angle 2*PI
        let last = points.last().unwrap();
        assert!(last.distance_to(points[0]) > 1e-6);
    }

    #[test]
    fn test_generate_zero_radius() {
        let spec = CircleSpec::new(3.0, 4.0, 0.0, 10);
        let points = generate(&spec);

        assert_eq!(points.len(), 10);
        for point in &points {
            assert_relative_eq!(point.x, 3.0);
            assert_relative_eq!(point.y, 4.0);
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let spec = CircleSpec::new(1.0, 2.0, 3.0, 100);
        assert_eq!(generate(&spec), generate(&spec));
    }

    #[test]
    fn test_validate_accepts_zero_radius() {
        assert!(CircleSpec::new(0.0, 0.0, 0.0, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        assert!(CircleSpec::new(0.0, 0.0, -1.0, 10).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(CircleSpec::new(f64::NAN, 0.0, 1.0, 10).validate().is_err());
        assert!(CircleSpec::new(0.0, 0.0, f64::INFINITY, 10).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_count_out_of_range() {
        assert!(CircleSpec::new(0.0, 0.0, 1.0, 0).validate().is_err());
        assert!(CircleSpec::new(0.0, 0.0, 1.0, limits::MAX_POINTS + 1)
            .validate()
            .is_err());
    }
}
