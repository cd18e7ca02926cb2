//! Platform totals and the connected creator's analytics.

use std::sync::OnceLock;

use shared::{AnalyticsPoint, PlatformStats, ScoreComponent};

use crate::leaderboard::Timeframe;

pub struct StatsStore;

impl StatsStore {
    pub fn platform() -> PlatformStats {
        PlatformStats {
            total_creators: 12_482,
            total_nfts: 35_691,
            total_collaborations: 8_754,
            credit_score_avg: 7.8,
        }
    }

    /// Score, collaboration and mention series for the analytics charts.
    ///
    /// Weekly points are days, monthly points are months. All-time uses the
    /// monthly series.
    pub fn analytics(timeframe: Timeframe) -> &'static [AnalyticsPoint] {
        static WEEKLY: OnceLock<Vec<AnalyticsPoint>> = OnceLock::new();
        static MONTHLY: OnceLock<Vec<AnalyticsPoint>> = OnceLock::new();

        match timeframe {
            Timeframe::Weekly => WEEKLY.get_or_init(|| {
                points(&[
                    ("Mon", 9.3, 2, 15),
                    ("Tue", 9.4, 0, 18),
                    ("Wed", 9.5, 1, 12),
                    ("Thu", 9.6, 0, 22),
                    ("Fri", 9.7, 1, 25),
                    ("Sat", 9.8, 0, 20),
                    ("Sun", 9.8, 0, 17),
                ])
            })
            .as_slice(),
            Timeframe::Monthly | Timeframe::AllTime => MONTHLY.get_or_init(|| {
                points(&[
                    ("Jan", 7.2, 4, 45),
                    ("Feb", 7.8, 5, 58),
                    ("Mar", 8.1, 6, 75),
                    ("Apr", 8.5, 3, 84),
                    ("May", 8.9, 7, 95),
                    ("Jun", 9.2, 8, 120),
                    ("Jul", 9.5, 10, 145),
                    ("Aug", 9.8, 12, 160),
                ])
            })
            .as_slice(),
        }
    }

    /// Breakdown of the credit score.
    pub fn score_breakdown() -> &'static [ScoreComponent] {
        static BREAKDOWN: OnceLock<Vec<ScoreComponent>> = OnceLock::new();
        BREAKDOWN.get_or_init(|| {
            [
                ("Engagement", 9.7),
                ("Quality", 9.5),
                ("Consistency", 9.8),
                ("Collaboration", 9.9),
                ("Innovation", 9.6),
            ]
            .into_iter()
            .map(|(name, score)| ScoreComponent {
                name: name.into(),
                score,
            })
            .collect()
        })
    }
}

fn points(rows: &[(&str, f64, u32, u32)]) -> Vec<AnalyticsPoint> {
    rows.iter()
        .map(|&(label, score, collaborations, mentions)| AnalyticsPoint {
            label: label.into(),
            score,
            collaborations,
            mentions,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_series() {
        assert_eq!(StatsStore::analytics(Timeframe::Weekly).len(), 7);
        assert_eq!(StatsStore::analytics(Timeframe::Monthly).len(), 8);
        assert_eq!(StatsStore::analytics(Timeframe::Monthly)[7].mentions, 160);
    }

    #[test]
    fn test_score_breakdown_within_range() {
        assert!(StatsStore::score_breakdown()
            .iter()
            .all(|c| (0.0..=10.0).contains(&c.score)));
    }
}
