//! Time-to-angle mapping
//!
//! All angles are degrees, clockwise-positive, 0° at 12 o'clock. Every base
//! term stays under one full turn because second and minute are at most 59.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::time::TimeSample;

/// Rotation of each hand plus the magnitude of the arc sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
    /// Unsigned sweep; direction comes from `ArcState`
    pub arc_sweep: f32,
}

impl HandAngles {
    pub fn for_time(time: &TimeSample) -> Self {
        let second = time.second as f32;
        let minute = time.minute as f32;
        let hour = (time.hour % 12) as f32;

        let second_angle = second * DEG_PER_SECOND;
        Self {
            second: second_angle,
            minute: second * MINUTE_CREEP_PER_SECOND + minute * DEG_PER_MINUTE,
            hour: second * HOUR_CREEP_PER_SECOND
                + minute * HOUR_CREEP_PER_MINUTE
                + hour * DEG_PER_HOUR,
            arc_sweep: second_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(h: u8, m: u8, s: u8) -> TimeSample {
        TimeSample::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_half_past_ten() {
        let a = HandAngles::for_time(&sample(10, 30, 0));
        assert!((a.hour - 315.0).abs() < 1e-4);
        assert!((a.minute - 180.0).abs() < 1e-4);
        assert_eq!(a.second, 0.0);
        assert_eq!(a.arc_sweep, 0.0);
    }

    #[test]
    fn test_creep_terms() {
        let a = HandAngles::for_time(&sample(3, 0, 30));
        assert_eq!(a.second, 180.0);
        assert!((a.minute - 3.0).abs() < 1e-4);
        assert!((a.hour - (90.0 + 0.24)).abs() < 1e-4);
    }

    #[test]
    fn test_afternoon_matches_morning() {
        assert_eq!(
            HandAngles::for_time(&sample(15, 20, 10)),
            HandAngles::for_time(&sample(3, 20, 10))
        );
    }

    #[test]
    fn test_last_second_before_noon_stays_under_full_turn() {
        let a = HandAngles::for_time(&sample(11, 59, 59));
        assert!(a.second < 360.0);
        assert!(a.minute < 360.0);
        assert!(a.hour < 360.0);
    }

    proptest! {
        #[test]
        fn second_angle_is_six_per_second(s in 0u8..60, m in 0u8..60, h in 0u8..24) {
            let a = HandAngles::for_time(&sample(h, m, s));
            prop_assert_eq!(a.second, s as f32 * 6.0);
            prop_assert!(a.second >= 0.0 && a.second < 360.0);
            prop_assert_eq!(a.arc_sweep, a.second);
        }

        #[test]
        fn minute_and_hour_never_run_backwards(start in 0u32..(12 * 3600 - 1)) {
            // Stay inside one 12-hour cycle
            let t0 = TimeSample::from_seconds_of_day(start);
            let t1 = t0.advanced_by(1);
            let a0 = HandAngles::for_time(&t0);
            let a1 = HandAngles::for_time(&t1);
            prop_assert!(a1.minute >= a0.minute || (t1.minute == 0 && t1.second == 0));
            prop_assert!(a1.hour >= a0.hour);
        }

        #[test]
        fn angles_stay_within_one_turn(s in 0u8..60, m in 0u8..60, h in 0u8..24) {
            let a = HandAngles::for_time(&sample(h, m, s));
            prop_assert!(a.minute >= 0.0 && a.minute < 360.0);
            prop_assert!(a.hour >= 0.0 && a.hour < 360.0);
        }
    }
}
