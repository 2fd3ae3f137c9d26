//! Text measurement seam
//!
//! Numerals are centered on their anchor using the glyph bounds, which only the
//! host's font stack knows. Hosts plug in their own `TextMeasure`; the crate
//! ships a metric estimate good enough for previews and tests.

use glam::Vec2;

/// Measures the tight bounding box of a string at a given text size
pub trait TextMeasure {
    /// Width and height of the ink bounds, in surface units
    fn bounds(&self, text: &str, size: f32) -> Vec2;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f32) -> Vec2,
{
    fn bounds(&self, text: &str, size: f32) -> Vec2 {
        self(text, size)
    }
}

/// Fixed-ratio estimate for lining digits
#[derive(Debug, Clone, Copy)]
pub struct ApproxTextMetrics {
    /// Glyph advance as a fraction of text size
    pub advance: f32,
    /// Cap height as a fraction of text size
    pub cap_height: f32,
}

impl Default for ApproxTextMetrics {
    fn default() -> Self {
        Self {
            advance: 0.55,
            cap_height: 0.72,
        }
    }
}

impl TextMeasure for ApproxTextMetrics {
    fn bounds(&self, text: &str, size: f32) -> Vec2 {
        let glyphs = text.chars().count() as f32;
        Vec2::new(glyphs * self.advance * size, self.cap_height * size)
    }
}
