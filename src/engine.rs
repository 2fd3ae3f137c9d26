//! Frame assembly and the state persistence boundary
//!
//! One `ClockEngine` per clock on screen. The host calls `render` at whatever
//! cadence it likes; once per second is enough since nothing moves faster.
//! Paint order is fixed: arc, numerals, ticks, second, minute and hour hands, pin.

use crate::angles::HandAngles;
use crate::consts::ARC_START_DEG;
use crate::frame::{ArcPrimitive, Frame, Primitive};
use crate::geometry::{FaceGeometry, SurfaceMetrics};
use crate::layout;
use crate::oscillation::{ArcDirection, ArcState, SavedState};
use crate::style::ClockStyle;
use crate::text::{ApproxTextMetrics, TextMeasure};
use crate::time::{TimeSample, TimeSource};
use crate::{consts, dial_direction};

/// Arc + 12 numerals + 60 ticks + 3 hands + pin
const PRIMITIVES_PER_FRAME: usize =
    1 + consts::NUMERAL_COUNT as usize + consts::TICK_COUNT + 3 + 1;

pub struct ClockEngine {
    style: ClockStyle,
    arc: ArcState,
    measure: Box<dyn TextMeasure>,
    last_size: Option<(f32, f32)>,
}

impl ClockEngine {
    /// Create an engine seeded with the current time (no flip on the first frame)
    pub fn new(style: ClockStyle, now: TimeSample) -> Self {
        Self {
            style,
            arc: ArcState::new(now.minute),
            measure: Box::new(ApproxTextMetrics::default()),
            last_size: None,
        }
    }

    /// Replace the numeral measurement with the host's font metrics
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// Surface of the given size carrying this engine's padding, arc width and multiplier
    pub fn surface(&self, width: f32, height: f32) -> SurfaceMetrics {
        SurfaceMetrics::for_style(width, height, &self.style)
    }

    pub fn arc_direction(&self) -> ArcDirection {
        self.arc.direction()
    }

    /// Compute one frame, flipping the arc direction if the minute changed
    ///
    /// Padding, arc width and the hands length multiplier are read from `surface`,
    /// not from the engine's style. Build it with `ClockEngine::surface` or
    /// `SurfaceMetrics::for_style` to keep the two in step.
    pub fn render(&mut self, now: TimeSample, surface: &SurfaceMetrics) -> Frame {
        if self.arc.observe(now.minute) {
            log::debug!("Arc direction now {:?} at {}", self.arc.direction(), now);
        }
        if self.last_size != Some((surface.width, surface.height)) {
            log::debug!("Surface resized to {}x{}", surface.width, surface.height);
            self.last_size = Some((surface.width, surface.height));
        }

        let geometry = FaceGeometry::resolve(surface);
        let angles = HandAngles::for_time(&now);
        let direction = self.arc.direction();
        let style = &self.style;

        let mut frame = Frame::with_capacity(PRIMITIVES_PER_FRAME);

        frame.push(Primitive::Arc(ArcPrimitive {
            center: geometry.center,
            radius: geometry.arc_radius,
            start_angle_deg: ARC_START_DEG,
            sweep_angle_deg: direction.signed_sweep(angles.arc_sweep),
            clockwise: direction.is_increasing(),
            stroke_width: surface.arc_width,
            color: style.accent_color,
        }));

        let center = geometry.center;
        let measure = self.measure.as_ref();
        for numeral in layout::numerals(center, geometry.radius, style, measure) {
            frame.push(Primitive::Text(numeral));
        }

        for tick in layout::ticks(center, geometry.radius, style) {
            frame.push(Primitive::Line(tick.line));
        }

        let scale = surface.hands_length_multiplier;
        let hands = [
            (angles.second, geometry.second_len, style.second_hand_width),
            (angles.minute, geometry.minute_len, style.minute_hand_width),
            (angles.hour, geometry.hour_len, style.hour_hand_width),
        ];
        let colors = [style.hand_color, style.hand_color, style.accent_color];
        for ((angle, length, width), color) in hands.into_iter().zip(colors) {
            let dir = dial_direction(angle.to_radians());
            let from = center - dir * style.tail_length;
            frame.push_line(from, center + dir * length * scale, width, color);
        }

        frame.push_circle(center, style.pin_radius, style.accent_color);

        frame
    }

    /// Render using a time source instead of an explicit sample
    pub fn render_now(&mut self, source: &dyn TimeSource, surface: &SurfaceMetrics) -> Frame {
        self.render(source.now(), surface)
    }

    /// Snapshot the persisted part of the state
    pub fn save_state(&self) -> SavedState {
        self.arc.save()
    }

    pub fn save_state_json(&self) -> String {
        serde_json::to_string(&self.save_state()).unwrap_or_default()
    }

    /// Restore the direction flag; the minute tracker restarts from `now`
    pub fn restore_state(&mut self, saved: SavedState, now: TimeSample) {
        self.arc = ArcState::restore(saved, now.minute);
        log::info!("Restored arc direction {:?}", self.arc.direction());
    }

    /// Restore from a serialized payload. Malformed payloads reset to `Increasing`.
    pub fn restore_state_json(&mut self, json: &str, now: TimeSample) {
        let saved = match serde_json::from_str::<SavedState>(json) {
            Ok(saved) => saved,
            Err(err) => {
                log::warn!("Discarding saved clock state ({err}), starting fresh");
                SavedState::default()
            }
        };
        self.restore_state(saved, now);
    }
}
