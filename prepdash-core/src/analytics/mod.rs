//! Analytics over daily logs.
//!
//! Every function here is a pure computation over a slice of logs and an
//! injected `today`, so results are deterministic and testable without a
//! clock or a store.

pub mod prediction;
pub mod problems;
pub mod score;
pub mod streak;
pub mod time_stats;
pub mod totals;
pub mod trend;
pub mod window;

pub use prediction::{predict, CategoryPrediction, PaceStatus, PredictionReport, Recommendation};
pub use problems::{analyze_problems, DifficultyStats, ProblemAnalysis, TopicCount};
pub use score::{activity_score, compute_heatmap, HeatCell, HeatLevel, Heatmap};
pub use streak::current_streak;
pub use time_stats::{time_distribution, week_time_stats, DistributionRange, WeekTimeStats};
pub use totals::{compute_totals, Totals};
pub use trend::{velocity_trend, VelocityTrend, WeekVelocity};
pub use window::{
    compare_periods, week_number, weekly_progress, ChartRow, Comparison, MetricChange, Period,
    PeriodStats, WeeklyProgress,
};

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::Document;

/// Everything the dashboard header shows at once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub week_number: u32,
    pub current_streak: u32,
    pub totals: Totals,
    pub weekly_progress: WeeklyProgress,
}

/// Compute the dashboard summary for a document.
pub fn dashboard_summary(document: &Document, today: NaiveDate) -> DashboardSummary {
    let logs = &document.daily_logs;
    DashboardSummary {
        week_number: week_number(document.start_date, today),
        current_streak: current_streak(logs, today),
        totals: compute_totals(logs),
        weekly_progress: weekly_progress(
            logs,
            &document.settings.weekly_goals,
            document.start_date,
            today,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DailyLog;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_dashboard_summary_combines_views() {
        let mut doc = Document::new(date("2024-01-01"));
        let mut log = DailyLog::new(date("2024-01-10"));
        log.leetcode_easy = 2;
        doc.upsert_daily_log(log);

        let summary = dashboard_summary(&doc, date("2024-01-10"));
        assert_eq!(summary.week_number, 2);
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.totals.leetcode, 2);
        assert_eq!(summary.weekly_progress.leetcode, 2);
    }
}
