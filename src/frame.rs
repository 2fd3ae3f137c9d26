//! Renderer-agnostic drawing primitives
//!
//! Every primitive carries its own style, so painting a frame needs no shared
//! brush state. Primitives are painted in list order; later ones cover earlier ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::style::Color;

/// Stroked circular arc. Angles in surface degrees (0° = 3 o'clock, clockwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle_deg: f32,
    /// Signed sweep, positive = clockwise
    pub sweep_angle_deg: f32,
    /// Direction flag the sweep was derived from
    pub clockwise: bool,
    pub stroke_width: f32,
    pub color: Color,
}

/// Straight stroked segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke_width: f32,
    pub color: Color,
}

impl LinePrimitive {
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }
}

/// Text drawn with its baseline-left corner at `origin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub content: String,
    pub origin: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Filled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Arc(ArcPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
    Circle(CirclePrimitive),
}

/// One frame's ordered primitives, owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            primitives: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn push_line(&mut self, from: Vec2, to: Vec2, stroke_width: f32, color: Color) {
        self.push(Primitive::Line(LinePrimitive {
            from,
            to,
            stroke_width,
            color,
        }));
    }

    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(Primitive::Circle(CirclePrimitive {
            center,
            radius,
            color,
        }));
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// The progress arc, if present
    pub fn arc(&self) -> Option<&ArcPrimitive> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Serialize for hosts that paint out of process
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
