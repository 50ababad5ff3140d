//! Week-over-week velocity trend.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::DailyLog;

/// How many trailing weeks the trend covers.
const TREND_WEEKS: usize = 12;

/// Width of the trailing moving-average window.
const MOVING_AVG_WINDOW: usize = 3;

/// Aggregates for one ISO week.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekVelocity {
    /// ISO week label, e.g. "2024-W05"
    pub label: String,
    pub leetcode: u32,
    pub system_design: u32,
    pub ml_theory: u32,
    /// Problems plus sessions, the unit velocity is measured in
    pub total_problems: u32,
    /// Trailing moving average of `total_problems`
    pub moving_avg: f64,
}

/// Velocity trend over the most recent weeks with any logs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityTrend {
    pub weeks: Vec<WeekVelocity>,
    /// Mean `total_problems` across the covered weeks
    pub avg_velocity: f64,
    /// Percent change from the prior week to the latest (absent with fewer
    /// than two weeks of data)
    pub velocity_change: Option<f64>,
}

/// Bucket logs into ISO weeks and compute the trailing trend.
///
/// Only weeks that contain at least one log appear; the trend keeps the most
/// recent twelve of them.
pub fn velocity_trend(logs: &[DailyLog]) -> VelocityTrend {
    let mut buckets: std::collections::BTreeMap<(i32, u32), (u32, u32, u32)> =
        std::collections::BTreeMap::new();
    for log in logs {
        let iso = log.date.iso_week();
        let entry = buckets.entry((iso.year(), iso.week())).or_default();
        entry.0 += log.leetcode_total();
        entry.1 += log.system_design;
        entry.2 += log.ml_theory;
    }

    let recent: Vec<((i32, u32), (u32, u32, u32))> = buckets
        .into_iter()
        .rev()
        .take(TREND_WEEKS)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let totals: Vec<u32> = recent
        .iter()
        .map(|(_, (lc, sd, ml))| lc + sd + ml)
        .collect();

    let weeks: Vec<WeekVelocity> = recent
        .iter()
        .enumerate()
        .map(|(i, ((year, week), (lc, sd, ml)))| {
            let window_start = i.saturating_sub(MOVING_AVG_WINDOW - 1);
            let window = &totals[window_start..=i];
            let moving_avg = window.iter().sum::<u32>() as f64 / window.len() as f64;
            WeekVelocity {
                label: format!("{}-W{:02}", year, week),
                leetcode: *lc,
                system_design: *sd,
                ml_theory: *ml,
                total_problems: totals[i],
                moving_avg,
            }
        })
        .collect();

    let avg_velocity = if totals.is_empty() {
        0.0
    } else {
        totals.iter().sum::<u32>() as f64 / totals.len() as f64
    };

    let velocity_change = if totals.len() >= 2 {
        let current = totals[totals.len() - 1] as f64;
        let previous = totals[totals.len() - 2] as f64;
        Some(if previous > 0.0 {
            (current - previous) / previous * 100.0
        } else if current > 0.0 {
            100.0
        } else {
            0.0
        })
    } else {
        None
    };

    VelocityTrend {
        weeks,
        avg_velocity,
        velocity_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(s: &str, easy: u32, sd: u32) -> DailyLog {
        let date: NaiveDate = s.parse().unwrap();
        let mut log = DailyLog::new(date);
        log.leetcode_easy = easy;
        log.system_design = sd;
        log
    }

    #[test]
    fn test_empty_history() {
        let trend = velocity_trend(&[]);
        assert!(trend.weeks.is_empty());
        assert_eq!(trend.avg_velocity, 0.0);
        assert_eq!(trend.velocity_change, None);
    }

    #[test]
    fn test_buckets_by_iso_week() {
        // Mon 2024-01-08 and Sun 2024-01-14 share ISO week 2024-W02;
        // Mon 2024-01-15 starts W03.
        let logs = vec![
            log("2024-01-08", 3, 1),
            log("2024-01-14", 2, 0),
            log("2024-01-15", 4, 0),
        ];
        let trend = velocity_trend(&logs);
        assert_eq!(trend.weeks.len(), 2);
        assert_eq!(trend.weeks[0].label, "2024-W02");
        assert_eq!(trend.weeks[0].leetcode, 5);
        assert_eq!(trend.weeks[0].system_design, 1);
        assert_eq!(trend.weeks[0].total_problems, 6);
        assert_eq!(trend.weeks[1].label, "2024-W03");
        assert_eq!(trend.weeks[1].total_problems, 4);
    }

    #[test]
    fn test_moving_average_is_trailing() {
        let logs = vec![
            log("2024-01-01", 3, 0),
            log("2024-01-08", 6, 0),
            log("2024-01-15", 9, 0),
            log("2024-01-22", 12, 0),
        ];
        let trend = velocity_trend(&logs);
        let avgs: Vec<f64> = trend.weeks.iter().map(|w| w.moving_avg).collect();
        assert_eq!(avgs, vec![3.0, 4.5, 6.0, 9.0]);
    }

    #[test]
    fn test_velocity_change_between_last_two_weeks() {
        let logs = vec![log("2024-01-08", 4, 0), log("2024-01-15", 6, 0)];
        let trend = velocity_trend(&logs);
        assert_eq!(trend.velocity_change, Some(50.0));
        assert_eq!(trend.avg_velocity, 5.0);
    }

    #[test]
    fn test_keeps_last_twelve_weeks() {
        // 14 consecutive Mondays
        let mut logs = Vec::new();
        let mut date: NaiveDate = "2024-01-01".parse().unwrap();
        for i in 0..14u32 {
            logs.push(log(&date.to_string(), i + 1, 0));
            date = date + chrono::Days::new(7);
        }
        let trend = velocity_trend(&logs);
        assert_eq!(trend.weeks.len(), 12);
        // First two weeks fall off
        assert_eq!(trend.weeks[0].total_problems, 3);
        assert_eq!(trend.weeks[11].total_problems, 14);
    }
}
