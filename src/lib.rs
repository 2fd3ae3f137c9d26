//! Sweep Clock - geometry and state engine for an analog clock face
//!
//! Core modules:
//! - `time`: Time samples and wall-clock sources
//! - `geometry`: Face center, radius and hand lengths for a surface size
//! - `angles`: Time-to-angle mapping for hands and the progress arc
//! - `oscillation`: Arc sweep direction that flips once per minute
//! - `layout`: Tick ring and numeral placement
//! - `frame`: Renderer-agnostic drawing primitives
//! - `engine`: Per-frame assembly and save/restore boundary
//! - `tessellate`: Triangle lists for GPU upload
//! - `style`: Externally supplied lengths and colors

pub mod angles;
pub mod engine;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod oscillation;
pub mod style;
pub mod tessellate;
pub mod text;
pub mod time;

pub use angles::HandAngles;
pub use engine::ClockEngine;
pub use frame::{Frame, Primitive};
pub use geometry::{FaceGeometry, SurfaceMetrics};
pub use oscillation::{ArcDirection, ArcState, SavedState};
pub use style::{ClockStyle, Color};
pub use time::{SystemClock, TimeSample, TimeSource};

use glam::Vec2;

/// Clock face constants
pub mod consts {
    /// Arc start angle in surface degrees (0° = 3 o'clock, clockwise), i.e. 12 o'clock
    pub const ARC_START_DEG: f32 = 270.0;
    /// Degrees per full turn
    pub const FULL_TURN_DEG: f32 = 360.0;

    /// Second hand: 6° per second
    pub const DEG_PER_SECOND: f32 = 6.0;
    /// Minute hand: 6° per minute, plus 0.1° per second of creep
    pub const DEG_PER_MINUTE: f32 = 6.0;
    pub const MINUTE_CREEP_PER_SECOND: f32 = 0.1;
    /// Hour hand: 30° per hour, 0.5° per minute, 0.008° per second of creep
    pub const DEG_PER_HOUR: f32 = 30.0;
    pub const HOUR_CREEP_PER_MINUTE: f32 = 0.5;
    pub const HOUR_CREEP_PER_SECOND: f32 = 0.008;

    /// Tick ring
    pub const TICK_COUNT: usize = 60;
    /// Every fifth tick is an hour mark
    pub const TICKS_PER_HOUR_MARK: usize = 5;

    /// Numerals on the dial
    pub const NUMERAL_COUNT: u32 = 12;
    /// Numeral ring sits at radius - radius / NUMERAL_RADIUS_DIVISOR
    pub const NUMERAL_RADIUS_DIVISOR: f32 = 2.5;
}

/// Convert polar (r, theta) to cartesian (x, y)
///
/// Unit-circle convention: theta = 0 points right, positive theta turns
/// clockwise on a y-down surface.
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit direction for a dial angle (radians, 0 = 12 o'clock, clockwise, y down)
#[inline]
pub fn dial_direction(theta: f32) -> Vec2 {
    Vec2::new(theta.sin(), -theta.cos())
}

/// Point at distance `r` from `center` along a dial angle (radians)
#[inline]
pub fn dial_point(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + dial_direction(theta) * r
}
