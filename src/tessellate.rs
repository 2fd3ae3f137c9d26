//! Triangle lists for hosts that paint frames on the GPU
//!
//! Lines become quads, arcs become thick bands, circles become fans. Text is
//! left to the host's glyph renderer.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::TAU;

use crate::frame::{ArcPrimitive, CirclePrimitive, Frame, LinePrimitive, Primitive};
use crate::polar_to_cartesian;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Segment count bounds for any curved primitive
const MIN_SEGMENTS: u32 = 4;
const MAX_SEGMENTS: u32 = 4096;

/// Segments needed to cover `angle` radians at the requested density
fn segment_count(angle: f32, segments_per_radian: f32) -> u32 {
    let wanted = (angle.abs() * segments_per_radian).ceil();
    if wanted.is_nan() {
        return MIN_SEGMENTS;
    }
    (wanted as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Tessellate every non-text primitive in paint order
pub fn tessellate(frame: &Frame, segments_per_radian: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for primitive in frame.iter() {
        match primitive {
            Primitive::Arc(arc) => vertices.extend(arc_band(arc, segments_per_radian)),
            Primitive::Line(line) => vertices.extend(line_quad(line)),
            Primitive::Circle(circle) => vertices.extend(circle_fan(circle, segments_per_radian)),
            Primitive::Text(_) => {}
        }
    }
    vertices
}

/// Two triangles covering a stroked segment
pub fn line_quad(line: &LinePrimitive) -> Vec<Vertex> {
    let dir = (line.to - line.from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (line.stroke_width / 2.0);
    let color = line.color.to_array();

    let a1 = line.from + perp;
    let b1 = line.from - perp;
    let a2 = line.to + perp;
    let b2 = line.to - perp;

    vec![
        Vertex::at(a1, color),
        Vertex::at(b1, color),
        Vertex::at(a2, color),
        Vertex::at(a2, color),
        Vertex::at(b1, color),
        Vertex::at(b2, color),
    ]
}

/// Thick band following the signed sweep from the arc's start angle
pub fn arc_band(arc: &ArcPrimitive, segments_per_radian: f32) -> Vec<Vertex> {
    let sweep = arc.sweep_angle_deg.to_radians();
    if sweep == 0.0 {
        return Vec::new();
    }
    let start = arc.start_angle_deg.to_radians();
    let num_segments = segment_count(sweep, segments_per_radian);
    let inner_r = arc.radius - arc.stroke_width / 2.0;
    let outer_r = arc.radius + arc.stroke_width / 2.0;
    let color = arc.color.to_array();

    let mut vertices = Vec::with_capacity(num_segments as usize * 6);

    for i in 0..num_segments {
        let theta1 = start + sweep * (i as f32 / num_segments as f32);
        let theta2 = start + sweep * ((i + 1) as f32 / num_segments as f32);

        let inner1 = arc.center + polar_to_cartesian(inner_r, theta1);
        let outer1 = arc.center + polar_to_cartesian(outer_r, theta1);
        let inner2 = arc.center + polar_to_cartesian(inner_r, theta2);
        let outer2 = arc.center + polar_to_cartesian(outer_r, theta2);

        // Two triangles per segment
        vertices.push(Vertex::at(inner1, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(inner2, color));

        vertices.push(Vertex::at(inner2, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(outer2, color));
    }

    vertices
}

/// Filled circle as a triangle fan around the center
pub fn circle_fan(circle: &CirclePrimitive, segments_per_radian: f32) -> Vec<Vertex> {
    let segments = segment_count(TAU, segments_per_radian);
    let color = circle.color.to_array();
    let mut vertices = Vec::with_capacity(segments as usize * 3);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let edge1 = circle.center + polar_to_cartesian(circle.radius, theta1);
        let edge2 = circle.center + polar_to_cartesian(circle.radius, theta2);

        vertices.push(Vertex::at(circle.center, color));
        vertices.push(Vertex::at(edge1, color));
        vertices.push(Vertex::at(edge2, color));
    }

    vertices
}
