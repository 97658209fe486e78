/// Cross-station trend aggregation.
///
/// Produces the basin-wide average level at each history position: for each
/// index across all stations' series (aligned by position, not timestamp),
/// the mean of every station's level at that index. Stations whose history
/// is shorter than the index contribute nothing there; an index where no
/// station has a sample yields no point at all.
///
/// With an empty series set the sequence is simply empty — "no data yet"
/// degrades to a no-op render, never an error.

use crate::series::SeriesSet;

/// Lazily yields the aligned average level per history position, oldest
/// first. Consumed once per render.
pub fn aligned_average(series: &SeriesSet) -> impl Iterator<Item = f64> + '_ {
    (0..series.max_len()).filter_map(|index| {
        let mut sum = 0.0;
        let mut count = 0usize;
        for s in series.iter() {
            if let Some(point) = s.get(index) {
                sum += point.level_m;
                count += 1;
            }
        }
        (count > 0).then(|| sum / count as f64)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SeriesPoint, StationStatus};
    use chrono::{TimeZone, Utc};

    fn point(level_m: f64) -> SeriesPoint {
        SeriesPoint {
            ts: Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap(),
            level_m,
            status: StationStatus::Ok,
        }
    }

    #[test]
    fn test_empty_series_set_yields_empty_trend() {
        let set = SeriesSet::default();
        assert_eq!(aligned_average(&set).count(), 0);
    }

    #[test]
    fn test_average_across_equal_length_series() {
        let mut set = SeriesSet::initialize(vec!["ST001", "ST002"]);
        set.append("ST001", point(1.0));
        set.append("ST001", point(2.0));
        set.append("ST002", point(3.0));
        set.append("ST002", point(4.0));

        let trend: Vec<f64> = aligned_average(&set).collect();
        assert_eq!(trend, vec![2.0, 3.0]);
    }

    #[test]
    fn test_short_series_drops_out_of_later_indices() {
        let mut set = SeriesSet::initialize(vec!["ST001", "ST002"]);
        set.append("ST001", point(1.0));
        set.append("ST001", point(2.0));
        set.append("ST001", point(3.0));
        // ST002 has only one sample; indices 1 and 2 average ST001 alone.
        set.append("ST002", point(5.0));

        let trend: Vec<f64> = aligned_average(&set).collect();
        assert_eq!(trend, vec![3.0, 2.0, 3.0]);
    }

    #[test]
    fn test_single_station_trend_is_its_own_series() {
        let mut set = SeriesSet::initialize(vec!["ST001"]);
        set.append("ST001", point(0.5));
        set.append("ST001", point(0.7));

        let trend: Vec<f64> = aligned_average(&set).collect();
        assert_eq!(trend, vec![0.5, 0.7]);
    }
}
