//! Clock style: lengths and colors supplied once by the host
//!
//! The engine treats every value here as already validated. Lengths are in
//! surface units; use `ClockStyle::scaled` to apply a density factor.

use serde::{Deserialize, Serialize};

/// Straight RGBA color, opaque to the engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// From a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self([
            ((argb >> 16) & 0xFF) as f32 / 255.0,
            ((argb >> 8) & 0xFF) as f32 / 255.0,
            (argb & 0xFF) as f32 / 255.0,
            (argb >> 24) as f32 / 255.0,
        ])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }
}

/// Default palette
pub mod colors {
    use super::Color;

    /// Accent red used for the arc, numerals, hour hand and pin
    pub const TESTAROSSA_RED: Color = Color::from_argb(0xFFCD212A);
    pub const TICK_GREY: Color = Color::from_argb(0xFF888888);
    pub const BLACK: Color = Color::from_argb(0xFF000000);
}

/// Lengths, widths and colors for one clock instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockStyle {
    // === Face ===
    /// Margin between the surface edge and the face radius
    pub padding: f32,
    /// Stroke width of the progress arc
    pub arc_width: f32,

    // === Hands ===
    /// Scales the forward length of every hand (tails are unaffected)
    pub hands_length_multiplier: f32,
    /// How far each hand extends behind the center
    pub tail_length: f32,
    pub second_hand_width: f32,
    pub minute_hand_width: f32,
    pub hour_hand_width: f32,
    /// Radius of the filled center pin
    pub pin_radius: f32,

    // === Dial ===
    pub tick_width: f32,
    /// Distance hour ticks reach inward past the inner ring
    pub tick_inset: f32,
    /// How much shorter minute ticks are than hour ticks
    pub minor_tick_offset: f32,
    pub numeral_size: f32,

    // === Colors ===
    pub accent_color: Color,
    pub tick_color: Color,
    pub hand_color: Color,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            padding: 50.0,
            arc_width: 70.0,

            hands_length_multiplier: 1.0,
            tail_length: 130.0,
            second_hand_width: 18.0,
            minute_hand_width: 30.0,
            hour_hand_width: 45.0,
            pin_radius: 50.0,

            tick_width: 15.0,
            tick_inset: 70.0,
            minor_tick_offset: 40.0,
            numeral_size: 18.0,

            accent_color: colors::TESTAROSSA_RED,
            tick_color: colors::TICK_GREY,
            hand_color: colors::BLACK,
        }
    }
}

impl ClockStyle {
    /// Multiply every length by `factor` (screen density). Multiplier and colors are kept.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            padding: self.padding * factor,
            arc_width: self.arc_width * factor,
            hands_length_multiplier: self.hands_length_multiplier,
            tail_length: self.tail_length * factor,
            second_hand_width: self.second_hand_width * factor,
            minute_hand_width: self.minute_hand_width * factor,
            hour_hand_width: self.hour_hand_width * factor,
            pin_radius: self.pin_radius * factor,
            tick_width: self.tick_width * factor,
            tick_inset: self.tick_inset * factor,
            minor_tick_offset: self.minor_tick_offset * factor,
            numeral_size: self.numeral_size * factor,
            accent_color: self.accent_color,
            tick_color: self.tick_color,
            hand_color: self.hand_color,
        }
    }

    /// Parse a (possibly partial) JSON style, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(style) => {
                log::info!("Loaded clock style");
                style
            }
            Err(err) => {
                log::warn!("Invalid clock style ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
