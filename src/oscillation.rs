//! Arc sweep direction that flips once per minute
//!
//! Only the direction survives surface re-creation. The last-seen minute is
//! re-seeded from the current time on restore, so a teardown that straddles a
//! minute boundary skips that one flip.

use serde::{Deserialize, Serialize};

use crate::consts::FULL_TURN_DEG;

/// Which way the progress arc grows during the current minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArcDirection {
    /// Arc grows clockwise from 12 o'clock
    #[default]
    Increasing,
    /// Arc is drawn with the signed complement sweep
    Decreasing,
}

impl ArcDirection {
    pub fn flipped(self) -> Self {
        match self {
            ArcDirection::Increasing => ArcDirection::Decreasing,
            ArcDirection::Decreasing => ArcDirection::Increasing,
        }
    }

    pub fn is_increasing(self) -> bool {
        self == ArcDirection::Increasing
    }

    /// Signed sweep for an unsigned arc magnitude in degrees
    pub fn signed_sweep(self, arc_sweep: f32) -> f32 {
        match self {
            ArcDirection::Increasing => arc_sweep,
            ArcDirection::Decreasing => arc_sweep - FULL_TURN_DEG,
        }
    }
}

/// Persisted payload: the direction flag only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub is_increasing: bool,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            is_increasing: true,
        }
    }
}

/// Minute tracker plus sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcState {
    last_minute: u8,
    direction: ArcDirection,
}

impl ArcState {
    /// Seed with the current minute so the first frame does not flip
    pub fn new(current_minute: u8) -> Self {
        Self {
            last_minute: current_minute,
            direction: ArcDirection::Increasing,
        }
    }

    pub fn direction(&self) -> ArcDirection {
        self.direction
    }

    pub fn last_minute(&self) -> u8 {
        self.last_minute
    }

    /// Feed the current minute. Returns true if the direction flipped.
    pub fn observe(&mut self, minute: u8) -> bool {
        if minute == self.last_minute {
            return false;
        }
        self.last_minute = minute;
        self.direction = self.direction.flipped();
        true
    }

    pub fn save(&self) -> SavedState {
        SavedState {
            is_increasing: self.direction.is_increasing(),
        }
    }

    /// Rebuild from a saved flag; `last_minute` comes from the current time
    pub fn restore(saved: SavedState, current_minute: u8) -> Self {
        Self {
            last_minute: current_minute,
            direction: if saved.is_increasing {
                ArcDirection::Increasing
            } else {
                ArcDirection::Decreasing
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flip_on_first_observation() {
        let mut state = ArcState::new(42);
        assert!(!state.observe(42));
        assert_eq!(state.direction(), ArcDirection::Increasing);
    }

    #[test]
    fn test_flips_exactly_once_per_minute() {
        let mut state = ArcState::new(10);
        let mut expected = ArcDirection::Increasing;
        for minute in 11..=14u8 {
            // Many frames within the same minute
            for _ in 0..60 {
                state.observe(minute - 1);
                assert_eq!(state.direction(), expected);
            }
            assert!(state.observe(minute));
            expected = expected.flipped();
            assert_eq!(state.direction(), expected);
            assert!(!state.observe(minute));
        }
        assert_eq!(state.direction(), ArcDirection::Increasing);
    }

    #[test]
    fn test_hour_rollover_counts_as_transition() {
        let mut state = ArcState::new(59);
        assert!(state.observe(0));
        assert_eq!(state.last_minute(), 0);
    }

    #[test]
    fn test_signed_sweep() {
        assert_eq!(ArcDirection::Increasing.signed_sweep(90.0), 90.0);
        assert_eq!(ArcDirection::Decreasing.signed_sweep(90.0), -270.0);
        assert_eq!(ArcDirection::Decreasing.signed_sweep(0.0), -360.0);
    }

    #[test]
    fn test_restore_reseeds_minute() {
        let mut state = ArcState::new(5);
        state.observe(6);
        let saved = state.save();
        assert!(!saved.is_increasing);

        let restored = ArcState::restore(saved, 30);
        assert_eq!(restored.direction(), ArcDirection::Decreasing);
        assert_eq!(restored.last_minute(), 30);
    }

    #[test]
    fn test_saved_state_wire_form() {
        let saved = SavedState {
            is_increasing: false,
        };
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(json, r#"{"is_increasing":false}"#);
    }
}
