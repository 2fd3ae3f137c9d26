//! Face geometry for a given surface size
//!
//! Pure function of the surface dimensions and style: recomputed every frame,
//! identical results for identical inputs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::style::ClockStyle;

/// Drawing surface size plus the externally configured face constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    /// Stroke width of the progress arc
    pub arc_width: f32,
    pub hands_length_multiplier: f32,
}

impl SurfaceMetrics {
    pub fn new(width: f32, height: f32, padding: f32, arc_width: f32) -> Self {
        Self {
            width,
            height,
            padding,
            arc_width,
            hands_length_multiplier: 1.0,
        }
    }

    /// Surface of the given size using the face constants from a style
    pub fn for_style(width: f32, height: f32, style: &ClockStyle) -> Self {
        Self {
            width,
            height,
            padding: style.padding,
            arc_width: style.arc_width,
            hands_length_multiplier: style.hands_length_multiplier,
        }
    }

    /// True when the face radius would be zero or negative.
    /// Hosts check this before rendering; the engine does not.
    pub fn is_degenerate(&self) -> bool {
        let positive = self.width > 0.0 && self.height > 0.0;
        !positive || self.width.min(self.height) / 2.0 <= self.padding
    }
}

/// Resolved face geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceGeometry {
    pub center: Vec2,
    /// Outer face radius (surface half-extent minus padding)
    pub radius: f32,
    /// Radius the progress arc is stroked on
    pub arc_radius: f32,
    pub hour_len: f32,
    pub minute_len: f32,
    pub second_len: f32,
}

impl FaceGeometry {
    /// Resolve center, radius and hand lengths for a surface
    pub fn resolve(surface: &SurfaceMetrics) -> Self {
        let center = Vec2::new(surface.width / 2.0, surface.height / 2.0);
        let radius = surface.width.min(surface.height) / 2.0 - surface.padding;

        Self {
            center,
            radius,
            arc_radius: radius - radius / 4.0,
            hour_len: radius - radius / 2.0,
            // Shortened by half the arc stroke so the tip stays clear of the arc
            minute_len: radius - radius / 4.0 - surface.arc_width / 2.0,
            second_len: radius - radius / 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_resolve_square_surface() {
        let g = FaceGeometry::resolve(&SurfaceMetrics::new(400.0, 400.0, 50.0, 40.0));
        assert_eq!(g.center, Vec2::new(200.0, 200.0));
        assert!(approx(g.radius, 150.0));
        assert!(approx(g.hour_len, 75.0));
        assert!(approx(g.second_len, 125.0));
        assert!(approx(g.minute_len, 112.5 - 20.0));
        assert!(approx(g.arc_radius, 112.5));
    }

    #[test]
    fn test_resolve_uses_min_dimension() {
        let g = FaceGeometry::resolve(&SurfaceMetrics::new(800.0, 300.0, 0.0, 0.0));
        assert_eq!(g.center, Vec2::new(400.0, 150.0));
        assert!(approx(g.radius, 150.0));
    }

    #[test]
    fn test_doubling_surface_doubles_lengths() {
        let small = FaceGeometry::resolve(&SurfaceMetrics::new(300.0, 200.0, 0.0, 0.0));
        let large = FaceGeometry::resolve(&SurfaceMetrics::new(600.0, 400.0, 0.0, 0.0));
        assert!(approx(large.radius, small.radius * 2.0));
        assert!(approx(large.hour_len, small.hour_len * 2.0));
        assert!(approx(large.minute_len, small.minute_len * 2.0));
        assert!(approx(large.second_len, small.second_len * 2.0));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let surface = SurfaceMetrics::new(321.0, 654.0, 12.5, 7.0);
        let first = FaceGeometry::resolve(&surface);
        assert_eq!(FaceGeometry::resolve(&surface), first);
    }

    #[test]
    fn test_degenerate_surfaces() {
        assert!(SurfaceMetrics::new(0.0, 100.0, 0.0, 0.0).is_degenerate());
        assert!(SurfaceMetrics::new(100.0, 100.0, 50.0, 0.0).is_degenerate());
        assert!(SurfaceMetrics::new(f32::NAN, 100.0, 0.0, 0.0).is_degenerate());
        assert!(!SurfaceMetrics::new(100.0, 100.0, 49.0, 0.0).is_degenerate());
    }
}
