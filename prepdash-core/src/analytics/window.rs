//! Calendar windows: week numbering, weekly progress, and period comparison.
//!
//! Two week conventions coexist on purpose. Weekly progress uses
//! Monday-aligned weeks; period comparison uses Sunday-aligned weeks. Both
//! match the dashboard views they back.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::types::{DailyLog, WeeklyGoals};

/// 1-based week number within the 12-week plan, clamped to [1, 12].
///
/// Day 0 through day 7 are week 1; day 8 starts week 2.
pub fn week_number(start_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - start_date).num_days().abs();
    let week = (days + 6) / 7;
    week.clamp(1, 12) as u32
}

/// First day (Monday) of the calendar week containing `date`.
pub fn monday_week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as u64;
    date - Days::new(days_from_monday)
}

/// First day (Sunday) of the calendar week containing `date`.
pub fn sunday_week_start(date: NaiveDate) -> NaiveDate {
    let days_from_sunday = date.weekday().num_days_from_sunday() as u64;
    date - Days::new(days_from_sunday)
}

// ============================================
// Weekly progress
// ============================================

/// Counts for the current Monday-aligned week, against the weekly goals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    /// 1-based week number within the plan
    pub week_number: u32,
    pub leetcode: u32,
    pub system_design: u32,
    pub ml_theory: u32,
    pub projects: u32,
    pub goals: WeeklyGoals,
}

/// Sum the primary categories over the current Monday-aligned week.
pub fn weekly_progress(
    logs: &[DailyLog],
    goals: &WeeklyGoals,
    start_date: NaiveDate,
    today: NaiveDate,
) -> WeeklyProgress {
    let week_start = monday_week_start(today);
    let mut progress = WeeklyProgress {
        week_number: week_number(start_date, today),
        leetcode: 0,
        system_design: 0,
        ml_theory: 0,
        projects: 0,
        goals: goals.clone(),
    };
    for log in logs {
        if log.date >= week_start && log.date <= today {
            progress.leetcode += log.leetcode_total();
            progress.system_design += log.system_design;
            progress.ml_theory += log.ml_theory;
            progress.projects += log.project_count();
        }
    }
    progress
}

// ============================================
// Period comparison
// ============================================

/// Comparison window granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    Week,
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            _ => Err(format!("unknown period: {}", s)),
        }
    }
}

/// Aggregates for one comparison window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub leetcode: u32,
    pub system_design: u32,
    pub ml_theory: u32,
    pub projects: u32,
    /// Content/achievement flags summed across days
    pub content: u32,
    /// Days with problem activity. Project-only days do not count here,
    /// unlike in streaks.
    pub active_days: u32,
}

/// Difference between the current and previous window for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricChange {
    /// Current minus previous
    pub diff: i64,
    /// Percent change relative to the previous window. When the previous
    /// window is zero: 100 if the current is nonzero, otherwise 0.
    pub percent_change: f64,
}

fn metric_change(current: u32, previous: u32) -> MetricChange {
    let diff = current as i64 - previous as i64;
    let percent_change = if previous > 0 {
        diff as f64 / previous as f64 * 100.0
    } else if current > 0 {
        100.0
    } else {
        0.0
    };
    MetricChange {
        diff,
        percent_change,
    }
}

/// Per-metric changes between the two windows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodChanges {
    pub leetcode: MetricChange,
    pub system_design: MetricChange,
    pub ml_theory: MetricChange,
    pub projects: MetricChange,
    pub content: MetricChange,
    pub active_days: MetricChange,
}

/// One labeled row of the comparison chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub label: &'static str,
    pub current: u32,
    pub previous: u32,
}

/// Current-vs-previous comparison for a week or month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub period: Period,
    pub current: PeriodStats,
    pub previous: PeriodStats,
    pub changes: PeriodChanges,
    pub chart_data: Vec<ChartRow>,
}

fn stats_for_range(logs: &[DailyLog], start: NaiveDate, end: NaiveDate) -> PeriodStats {
    let mut stats = PeriodStats::default();
    for log in logs {
        if log.date < start || log.date > end {
            continue;
        }
        let leetcode = log.leetcode_total();
        stats.leetcode += leetcode;
        stats.system_design += log.system_design;
        stats.ml_theory += log.ml_theory;
        stats.projects += log.project_count();
        stats.content += log.content_count();
        if leetcode > 0 || log.system_design > 0 || log.ml_theory > 0 {
            stats.active_days += 1;
        }
    }
    stats
}

/// Compare the current period against the immediately preceding one.
///
/// Weeks are Sunday-aligned: the current window runs from the most recent
/// Sunday through today, the previous window covers the seven days before it.
/// Months compare month-to-date against the full prior calendar month.
pub fn compare_periods(logs: &[DailyLog], period: Period, today: NaiveDate) -> Comparison {
    let (current_start, previous_start, previous_end) = match period {
        Period::Week => {
            let current_start = sunday_week_start(today);
            (
                current_start,
                current_start - Days::new(7),
                current_start - Days::new(1),
            )
        }
        Period::Month => {
            // First day of the current month; unwrap is safe for day 1.
            let current_start = today.with_day(1).unwrap_or(today);
            let previous_end = current_start - Days::new(1);
            let previous_start = previous_end.with_day(1).unwrap_or(previous_end);
            (current_start, previous_start, previous_end)
        }
    };

    let current = stats_for_range(logs, current_start, today);
    let previous = stats_for_range(logs, previous_start, previous_end);
    let changes = PeriodChanges {
        leetcode: metric_change(current.leetcode, previous.leetcode),
        system_design: metric_change(current.system_design, previous.system_design),
        ml_theory: metric_change(current.ml_theory, previous.ml_theory),
        projects: metric_change(current.projects, previous.projects),
        content: metric_change(current.content, previous.content),
        active_days: metric_change(current.active_days, previous.active_days),
    };
    let chart_data = vec![
        ChartRow {
            label: "LeetCode",
            current: current.leetcode,
            previous: previous.leetcode,
        },
        ChartRow {
            label: "System Design",
            current: current.system_design,
            previous: previous.system_design,
        },
        ChartRow {
            label: "ML Theory",
            current: current.ml_theory,
            previous: previous.ml_theory,
        },
        ChartRow {
            label: "Projects",
            current: current.projects,
            previous: previous.projects,
        },
        ChartRow {
            label: "Content",
            current: current.content,
            previous: previous.content,
        },
    ];

    Comparison {
        period,
        current,
        previous,
        changes,
        chart_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn lc_log(s: &str, easy: u32) -> DailyLog {
        let mut log = DailyLog::new(date(s));
        log.leetcode_easy = easy;
        log
    }

    #[test]
    fn test_week_number_clamps() {
        let start = date("2024-01-01");
        assert_eq!(week_number(start, start), 1);
        assert_eq!(week_number(start, date("2024-01-08")), 1);
        assert_eq!(week_number(start, date("2024-01-09")), 2);
        // Far past the horizon it pins at 12
        assert_eq!(week_number(start, date("2025-01-01")), 12);
    }

    #[test]
    fn test_week_boundaries() {
        // 2024-01-10 is a Wednesday
        assert_eq!(monday_week_start(date("2024-01-10")), date("2024-01-08"));
        assert_eq!(sunday_week_start(date("2024-01-10")), date("2024-01-07"));
        // Sunday belongs to the week it starts
        assert_eq!(sunday_week_start(date("2024-01-07")), date("2024-01-07"));
        // ...but Monday-aligned weeks put Sunday at the end
        assert_eq!(monday_week_start(date("2024-01-07")), date("2024-01-01"));
    }

    #[test]
    fn test_weekly_progress_window() {
        // Week of Monday 2024-01-08; the log on Sunday the 7th is outside.
        let logs = vec![lc_log("2024-01-07", 10), lc_log("2024-01-08", 3), lc_log("2024-01-10", 2)];
        let progress = weekly_progress(
            &logs,
            &WeeklyGoals::default(),
            date("2024-01-01"),
            date("2024-01-10"),
        );
        assert_eq!(progress.leetcode, 5);
        assert_eq!(progress.week_number, 2);
        assert_eq!(progress.goals.leetcode, 13);
    }

    #[test]
    fn test_percent_change_rules() {
        assert_eq!(metric_change(5, 0).percent_change, 100.0);
        assert_eq!(metric_change(0, 0).percent_change, 0.0);
        assert_eq!(metric_change(10, 10).percent_change, 0.0);
        assert_eq!(metric_change(15, 10).percent_change, 50.0);
        assert_eq!(metric_change(5, 10).percent_change, -50.0);
        assert_eq!(metric_change(5, 10).diff, -5);
    }

    #[test]
    fn test_week_comparison_is_sunday_aligned() {
        // Today: Wednesday 2024-01-10. Current window: Sun 7th..Wed 10th.
        // Previous window: Sun 2023-12-31..Sat 2024-01-06.
        let logs = vec![
            lc_log("2024-01-06", 4), // previous
            lc_log("2024-01-07", 2), // current
            lc_log("2024-01-10", 1), // current
        ];
        let cmp = compare_periods(&logs, Period::Week, date("2024-01-10"));
        assert_eq!(cmp.current.leetcode, 3);
        assert_eq!(cmp.previous.leetcode, 4);
        assert_eq!(cmp.changes.leetcode.diff, -1);

        assert_eq!(cmp.chart_data.len(), 5);
        assert_eq!(cmp.chart_data[0].label, "LeetCode");
        assert_eq!(cmp.chart_data[0].current, 3);
        assert_eq!(cmp.chart_data[0].previous, 4);
    }

    #[test]
    fn test_month_comparison_uses_full_prior_month() {
        let logs = vec![
            lc_log("2024-02-01", 7),  // previous month start
            lc_log("2024-02-29", 2),  // previous month end (leap day)
            lc_log("2024-03-01", 5),  // current month-to-date
            lc_log("2024-03-20", 1),  // after today, excluded
        ];
        let cmp = compare_periods(&logs, Period::Month, date("2024-03-10"));
        assert_eq!(cmp.previous.leetcode, 9);
        assert_eq!(cmp.current.leetcode, 5);
    }

    #[test]
    fn test_active_days_ignore_project_only_days() {
        let mut project_only = DailyLog::new(date("2024-01-08"));
        project_only.project_ml = true;
        let logs = vec![project_only, lc_log("2024-01-09", 1)];
        let cmp = compare_periods(&logs, Period::Week, date("2024-01-10"));
        assert_eq!(cmp.current.active_days, 1);
        // The project flag still counts in the projects metric
        assert_eq!(cmp.current.projects, 1);
    }
}
