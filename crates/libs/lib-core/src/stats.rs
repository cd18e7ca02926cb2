//! # Stat Counters
//!
//! Count-up animation for the home page platform totals.

use std::time::Duration;

use shared::PlatformStats;

/// Length of the count-up animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(2000);

/// Interval between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Fraction of the animation completed after `elapsed`, clamped to `[0, 1]`.
pub fn progress(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() / ANIMATION_DURATION.as_secs_f64()).clamp(0.0, 1.0)
}

/// Values displayed at `progress` of the way to `target`.
///
/// Counts are floored. The average score is rounded to one decimal.
pub fn animate_stats(target: &PlatformStats, progress: f64) -> PlatformStats {
    let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let scale = |n: u64| (p * n as f64).floor() as u64;

    PlatformStats {
        total_creators: scale(target.total_creators),
        total_nfts: scale(target.total_nfts),
        total_collaborations: scale(target.total_collaborations),
        credit_score_avg: (p * target.credit_score_avg * 10.0).round() / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StatsStore;

    #[test]
    fn test_start_and_end() {
        let target = StatsStore::platform();
        assert_eq!(animate_stats(&target, 0.0), PlatformStats::default());
        assert_eq!(animate_stats(&target, 1.0), target);
    }

    #[test]
    fn test_midway_values_floor_and_round() {
        let target = StatsStore::platform();
        let half = animate_stats(&target, 0.5);
        assert_eq!(half.total_creators, 6241);
        assert_eq!(half.total_nfts, 17845);
        assert_eq!(half.total_collaborations, 4377);
        assert_eq!(half.credit_score_avg, 3.9);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(progress(Duration::ZERO), 0.0);
        assert_eq!(progress(Duration::from_millis(1000)), 0.5);
        assert_eq!(progress(Duration::from_secs(10)), 1.0);

        let target = StatsStore::platform();
        assert_eq!(animate_stats(&target, 7.0), target);
    }
}
