//! Tick ring and numeral placement
//!
//! Independent of the current time, but recomputed every frame because the
//! radius follows the surface size.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use crate::consts::*;
use crate::frame::{LinePrimitive, TextPrimitive};
use crate::style::ClockStyle;
use crate::text::TextMeasure;
use crate::{dial_point, polar_to_cartesian};

/// A tick mark on the dial
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position on the ring, 0 = 12 o'clock
    pub index: usize,
    /// Hour marks reach further inward
    pub major: bool,
    pub line: LinePrimitive,
}

/// The 60 ticks, hour marks on every fifth index
///
/// The outer end sits on half the face radius. Hour ticks reach `tick_inset`
/// inward from there; minute ticks stop `minor_tick_offset` short of that.
pub fn ticks(center: Vec2, radius: f32, style: &ClockStyle) -> Vec<Tick> {
    let outer = radius - radius / 2.0;
    let major_inner = outer - style.tick_inset;
    let minor_inner = major_inner + style.minor_tick_offset;

    (0..TICK_COUNT)
        .map(|index| {
            let theta = index as f32 * TAU / TICK_COUNT as f32;
            let major = index % TICKS_PER_HOUR_MARK == 0;
            let inner = if major { major_inner } else { minor_inner };
            Tick {
                index,
                major,
                line: LinePrimitive {
                    from: dial_point(center, inner, theta),
                    to: dial_point(center, outer, theta),
                    stroke_width: style.tick_width,
                    color: style.tick_color,
                },
            }
        })
        .collect()
}

/// Radius of the numeral ring
#[inline]
pub fn numeral_radius(radius: f32) -> f32 {
    radius - radius / NUMERAL_RADIUS_DIVISOR
}

/// Where a numeral's glyph center goes, before text centering
///
/// Unit-circle angle shifted by three hours so that 12 lands on top.
pub fn numeral_anchor(label: u32, center: Vec2, radius: f32) -> Vec2 {
    let theta = PI / 6.0 * (label as f32 - 3.0);
    center + polar_to_cartesian(numeral_radius(radius), theta)
}

/// Labels 1 through 12, centered on their anchors
pub fn numerals(
    center: Vec2,
    radius: f32,
    style: &ClockStyle,
    measure: &dyn TextMeasure,
) -> Vec<TextPrimitive> {
    (1..=NUMERAL_COUNT)
        .map(|label| {
            let content = label.to_string();
            let bounds = measure.bounds(&content, style.numeral_size);
            let anchor = numeral_anchor(label, center, radius);
            // Text is drawn from its baseline-left corner
            let origin = anchor + Vec2::new(-bounds.x / 2.0, bounds.y / 2.0);
            TextPrimitive {
                content,
                origin,
                size: style.numeral_size,
                color: style.accent_color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::ApproxTextMetrics;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_sixty_ticks_twelve_major() {
        let ticks = ticks(Vec2::ZERO, 400.0, &ClockStyle::default());
        assert_eq!(ticks.len(), 60);
        assert_eq!(ticks.iter().filter(|t| t.major).count(), 12);
        assert!(ticks.iter().filter(|t| t.major).all(|t| t.index % 5 == 0));
    }

    #[test]
    fn test_major_ticks_are_longer() {
        let style = ClockStyle::default();
        let ticks = ticks(Vec2::ZERO, 400.0, &style);
        let major = ticks[0].line.length();
        let minor = ticks[1].line.length();
        assert!((major - style.tick_inset).abs() < 1e-3);
        assert!((minor - (style.tick_inset - style.minor_tick_offset)).abs() < 1e-3);
    }

    #[test]
    fn test_first_tick_points_up_and_ends_at_half_radius() {
        let center = Vec2::new(100.0, 100.0);
        let ticks = ticks(center, 200.0, &ClockStyle::default());
        assert!(close(ticks[0].line.to, Vec2::new(100.0, 0.0)));
        // Quarter past: pointing right
        assert!(close(ticks[15].line.to, Vec2::new(200.0, 100.0)));
    }

    #[test]
    fn test_twelve_sits_above_center() {
        let anchor = numeral_anchor(12, Vec2::ZERO, 100.0);
        assert!(close(anchor, Vec2::new(0.0, -60.0)));
    }

    #[test]
    fn test_three_sits_right_of_center() {
        let anchor = numeral_anchor(3, Vec2::new(10.0, 10.0), 100.0);
        assert!(close(anchor, Vec2::new(70.0, 10.0)));
    }

    #[test]
    fn test_numerals_are_centered_on_anchor() {
        let style = ClockStyle::default();
        let measure = |text: &str, _: f32| Vec2::new(8.0 * text.len() as f32, 10.0);
        let labels = numerals(Vec2::ZERO, 100.0, &style, &measure);

        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0].content, "1");
        assert_eq!(labels[11].content, "12");
        // "12" is two glyphs wide: 16 x 10 box
        assert!(close(labels[11].origin, Vec2::new(-8.0, -55.0)));
        assert!(labels.iter().all(|l| l.size == style.numeral_size));
    }

    #[test]
    fn test_numerals_with_approx_metrics() {
        let labels = numerals(
            Vec2::ZERO,
            100.0,
            &ClockStyle::default(),
            &ApproxTextMetrics::default(),
        );
        // 6 o'clock label sits below center
        assert!(labels[5].origin.y > 0.0);
    }
}
