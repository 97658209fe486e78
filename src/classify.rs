/// Severity classification for a single station.
///
/// Pure function of the previous and current level plus the configured
/// thresholds — no clock, no I/O, no state. The update cycle runs it once
/// per station per cycle; tests exercise it directly.

use crate::config::Thresholds;
use crate::model::StationStatus;

/// Classifies a station's severity from its previous and current level.
///
/// Rules, in order of precedence:
/// 1. `Alert` when `current >= alert_level_m`, regardless of delta.
/// 2. `Watch` when `current - previous >= surge_watch_m()` — a rapid rise
///    that has not yet reached the alert level.
/// 3. `Ok` otherwise. A falling level is always `Ok` unless rule 1 holds.
///
/// Both boundary comparisons are inclusive: a level exactly at the alert
/// threshold is `Alert`, a rise exactly at the surge threshold is `Watch`.
pub fn classify(previous_m: f64, current_m: f64, thresholds: &Thresholds) -> StationStatus {
    if current_m >= thresholds.alert_level_m {
        StationStatus::Alert
    } else if current_m - previous_m >= thresholds.surge_watch_m() {
        StationStatus::Watch
    } else {
        StationStatus::Ok
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> Thresholds {
        // Defaults: alert at 1.20 m, surge watch at 0.15 * 0.75 = 0.1125 m.
        Thresholds::default()
    }

    // --- Alert rule ---------------------------------------------------------

    #[test]
    fn test_level_above_alert_threshold_is_alert() {
        assert_eq!(classify(1.00, 1.50, &thresholds()), StationStatus::Alert);
    }

    #[test]
    fn test_level_exactly_at_alert_threshold_is_alert() {
        assert_eq!(classify(1.19, 1.20, &thresholds()), StationStatus::Alert);
    }

    #[test]
    fn test_alert_takes_precedence_over_delta() {
        // Falling, but still above the absolute threshold.
        assert_eq!(classify(1.80, 1.30, &thresholds()), StationStatus::Alert);
        // Flat at an elevated level.
        assert_eq!(classify(1.25, 1.25, &thresholds()), StationStatus::Alert);
    }

    // --- Watch rule ---------------------------------------------------------

    #[test]
    fn test_surge_below_alert_level_is_watch() {
        assert_eq!(classify(0.50, 0.70, &thresholds()), StationStatus::Watch);
    }

    #[test]
    fn test_rise_exactly_at_surge_threshold_is_watch() {
        assert_eq!(classify(0.50, 0.6125, &thresholds()), StationStatus::Watch);
    }

    #[test]
    fn test_rise_just_under_surge_threshold_is_ok() {
        assert_eq!(classify(0.50, 0.61, &thresholds()), StationStatus::Ok);
    }

    // --- Ok rule ------------------------------------------------------------

    #[test]
    fn test_stable_low_level_is_ok() {
        assert_eq!(classify(0.80, 0.80, &thresholds()), StationStatus::Ok);
    }

    #[test]
    fn test_falling_level_is_ok_not_a_distinct_status() {
        // No "falling" severity exists, however fast the drop.
        assert_eq!(classify(1.10, 0.40, &thresholds()), StationStatus::Ok);
    }

    #[test]
    fn test_drop_back_below_alert_threshold_is_ok() {
        assert_eq!(classify(1.30, 1.19, &thresholds()), StationStatus::Ok);
    }

    // --- Custom thresholds --------------------------------------------------

    #[test]
    fn test_custom_thresholds_are_honored() {
        let custom = Thresholds {
            alert_level_m: 5.0,
            surge_per_tick_m: 1.0,
        };
        assert_eq!(classify(0.0, 5.0, &custom), StationStatus::Alert);
        assert_eq!(classify(4.0, 4.99, &custom), StationStatus::Watch);
        assert_eq!(classify(4.5, 4.99, &custom), StationStatus::Ok);
    }
}
