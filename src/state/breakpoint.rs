// Release-time breakpoint resolution.

/// Returns the breakpoint closest to `target` by absolute distance.
///
/// Linear scan keeping the running best; the comparison is strict, so an
/// exact tie keeps the earlier element, which for the ascending sequences
/// the item component supplies means the smaller breakpoint wins. An empty
/// slice degrades to 0 (callers treat that as "snap home").
pub fn closest(breakpoints: &[i32], target: i32) -> i32 {
    let mut best = breakpoints.first().copied().unwrap_or(0);
    for &candidate in breakpoints {
        if (candidate - target).abs() < (best - target).abs() {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_nearest_breakpoint() {
        assert_eq!(closest(&[0, 50, 250], 80), 50);
        assert_eq!(closest(&[0, 50, 250], 240), 250);
        assert_eq!(closest(&[0, 50, 250], 10), 0);
    }

    #[test]
    fn exact_tie_keeps_the_earlier_element() {
        assert_eq!(closest(&[0, 50], 25), 0);
        assert_eq!(closest(&[0, 50, 100], 75), 50);
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(closest(&[0, 72, 240], 72), 72);
    }

    #[test]
    fn singleton_always_wins() {
        assert_eq!(closest(&[0], 9000), 0);
        assert_eq!(closest(&[120], 3), 120);
    }

    #[test]
    fn minimizes_distance_over_the_whole_sequence() {
        let breakpoints = [0, 10, 25, 60, 130, 300];
        for target in 0..=320 {
            let got = closest(&breakpoints, target);
            let best = breakpoints
                .iter()
                .map(|b| (b - target).abs())
                .min()
                .unwrap();
            assert_eq!((got - target).abs(), best, "target {target}");
        }
    }

    #[test]
    fn empty_sequence_degrades_to_zero() {
        assert_eq!(closest(&[], 42), 0);
    }
}
