// Nearest sample lookup by playback time
use super::sample::Sample;
use std::cmp::Ordering;

/// Finds the sample interval that contains `query`.
///
/// Returns `Some(i)` when `samples[i].time < query < samples[i + 1].time`, or
/// when `samples[i].time == query` for some `i` below the last index. Returns
/// `None` for an empty or single-sample slice, for queries before the first
/// sample, at or after the last sample, and for NaN.
///
/// Assumes strictly increasing times. With duplicates it still terminates and
/// returns one of the candidate indices (or `None`).
///
/// O(log n) time, O(1) space.
pub fn locate(samples: &[Sample], query: f64) -> Option<usize> {
    if query.is_nan() || samples.len() < 2 {
        return None;
    }

    // The window never reaches the last index, so `mid + 1` is always in range.
    let mut min = 0;
    let mut max = samples.len() - 2;

    while min <= max {
        let mid = min + (max - min) / 2;
        let current = samples[mid].time;
        let next = samples[mid + 1].time;

        if current < query && query < next {
            return Some(mid);
        }

        match current.partial_cmp(&query) {
            Some(Ordering::Less) => min = mid + 1,
            Some(Ordering::Greater) => {
                if mid == 0 {
                    return None;
                }
                max = mid - 1;
            }
            Some(Ordering::Equal) => return Some(mid),
            None => return None,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(times: &[f64]) -> Vec<Sample> {
        times
            .iter()
            .enumerate()
            .map(|(i, &t)| Sample::new(i as f64, t, 0.0, 0.0, 0.0))
            .collect()
    }

    fn linear_scan(samples: &[Sample], query: f64) -> Option<usize> {
        samples
            .windows(2)
            .position(|w| w[0].time <= query && query < w[1].time)
    }

    #[test]
    fn test_query_inside_interval() {
        let samples = series(&[0.0, 5.0, 10.0, 15.0]);

        assert_eq!(locate(&samples, 7.0), Some(1));
        assert_eq!(locate(&samples, 0.1), Some(0));
        assert_eq!(locate(&samples, 14.9), Some(2));
    }

    #[test]
    fn test_exact_match_returns_that_sample() {
        let samples = series(&[0.0, 5.0, 10.0, 15.0]);

        assert_eq!(locate(&samples, 0.0), Some(0));
        assert_eq!(locate(&samples, 5.0), Some(1));
        assert_eq!(locate(&samples, 10.0), Some(2));
    }

    #[test]
    fn test_last_sample_time_is_not_found() {
        let samples = series(&[0.0, 5.0, 10.0, 15.0]);

        assert_eq!(locate(&samples, 15.0), None);
        assert_eq!(locate(&samples, 99.0), None);
    }

    #[test]
    fn test_before_first_sample_is_not_found() {
        let samples = series(&[2.0, 5.0, 10.0]);

        assert_eq!(locate(&samples, 1.0), None);
        assert_eq!(locate(&samples, -3.0), None);
    }

    #[test]
    fn test_short_series() {
        assert_eq!(locate(&[], 0.0), None);
        assert_eq!(locate(&series(&[1.0]), 1.0), None);
        assert_eq!(locate(&series(&[1.0]), 0.5), None);
        assert_eq!(locate(&series(&[1.0, 2.0]), 1.5), Some(0));
        assert_eq!(locate(&series(&[1.0, 2.0]), 2.0), None);
    }

    #[test]
    fn test_nan_query() {
        let samples = series(&[0.0, 5.0, 10.0]);

        assert_eq!(locate(&samples, f64::NAN), None);
    }

    #[test]
    fn test_infinite_query() {
        let samples = series(&[0.0, 5.0, 10.0]);

        assert_eq!(locate(&samples, f64::INFINITY), None);
        assert_eq!(locate(&samples, f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_duplicates_do_not_panic() {
        let samples = series(&[0.0, 1.0, 1.0, 1.0, 2.0]);

        let found = locate(&samples, 1.0).unwrap();
        assert_eq!(samples[found].time, 1.0);
        assert_eq!(locate(&samples, 1.5), Some(3));

        let flat = series(&[3.0, 3.0, 3.0]);
        assert!(matches!(locate(&flat, 3.0), Some(0) | Some(1)));
        assert_eq!(locate(&flat, 4.0), None);
    }

    #[test]
    fn test_is_idempotent() {
        let samples = series(&[0.0, 0.04, 0.08, 0.12, 0.16]);

        assert_eq!(locate(&samples, 0.1), locate(&samples, 0.1));
        assert_eq!(locate(&samples, 0.1), Some(2));
    }

    #[test]
    fn test_matches_linear_scan() {
        // 25 fps with a little jitter, like a real frame log
        let times: Vec<f64> = (0..1000)
            .map(|i| i as f64 * 0.04 + if i % 7 == 0 { 0.003 } else { 0.0 })
            .collect();
        let samples = series(&times);
        let last = *times.last().unwrap();

        let mut query = times[0];
        while query < last {
            assert_eq!(
                locate(&samples, query),
                linear_scan(&samples, query),
                "query {query}"
            );
            query += 0.013;
        }
    }

    #[test]
    fn test_interior_queries_land_in_open_interval() {
        let samples = series(&[0.0, 1.0, 3.0, 6.0, 10.0, 15.0, 21.0]);

        for pair in samples.windows(2) {
            let query = (pair[0].time + pair[1].time) / 2.0;
            let index = locate(&samples, query).unwrap();
            assert!(samples[index].time < query && query < samples[index + 1].time);
        }
    }
}
