//! Time-spent summaries: current-week hours and category distribution.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::analytics::window::sunday_week_start;
use crate::types::{DailyLog, TimeSpent};

/// Hours summary for the current Sunday-aligned week.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekTimeStats {
    /// Total hours logged this week
    pub total_hours: f64,
    /// Days this week with any hours logged
    pub active_days: u32,
    /// Hours per active day (0 when no day has hours)
    pub avg_hours_per_day: f64,
    /// Date with the most hours this week
    pub most_productive_day: Option<NaiveDate>,
    /// Hours on that day
    pub max_hours: f64,
    /// Percent change against last week's total (0 when last week had none)
    pub week_change: f64,
}

/// Compare this week's logged hours against last week's.
pub fn week_time_stats(logs: &[DailyLog], today: NaiveDate) -> WeekTimeStats {
    let week_start = sunday_week_start(today);
    let last_week_start = week_start - Days::new(7);
    let last_week_end = week_start - Days::new(1);

    let mut total_hours = 0.0;
    let mut active_days = 0;
    let mut most_productive_day = None;
    let mut max_hours = 0.0;
    let mut last_week_hours = 0.0;

    for log in logs {
        let hours = log.total_hours();
        if log.date >= week_start && log.date <= today {
            total_hours += hours;
            if hours > 0.0 {
                active_days += 1;
            }
            if hours > max_hours {
                max_hours = hours;
                most_productive_day = Some(log.date);
            }
        } else if log.date >= last_week_start && log.date <= last_week_end {
            last_week_hours += hours;
        }
    }

    let avg_hours_per_day = if active_days > 0 {
        total_hours / active_days as f64
    } else {
        0.0
    };
    let week_change = if last_week_hours > 0.0 {
        (total_hours - last_week_hours) / last_week_hours * 100.0
    } else {
        0.0
    };

    WeekTimeStats {
        total_hours,
        active_days,
        avg_hours_per_day,
        most_productive_day,
        max_hours,
        week_change,
    }
}

/// Trailing range for the time distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DistributionRange {
    /// Trailing 7 days
    Week,
    /// Trailing 30 days
    Month,
    /// Trailing 365 days
    All,
}

impl DistributionRange {
    fn days(&self) -> u64 {
        match self {
            DistributionRange::Week => 7,
            DistributionRange::Month => 30,
            DistributionRange::All => 365,
        }
    }
}

impl std::str::FromStr for DistributionRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(DistributionRange::Week),
            "month" => Ok(DistributionRange::Month),
            "all" => Ok(DistributionRange::All),
            _ => Err(format!("unknown range: {}", s)),
        }
    }
}

/// Sum hours per activity category over a trailing range.
pub fn time_distribution(
    logs: &[DailyLog],
    range: DistributionRange,
    today: NaiveDate,
) -> TimeSpent {
    let cutoff = today - Days::new(range.days());
    let mut dist = TimeSpent::default();
    for log in logs {
        if log.date < cutoff || log.date > today {
            continue;
        }
        dist.leetcode += log.time_spent.leetcode;
        dist.system_design += log.time_spent.system_design;
        dist.ml_theory += log.time_spent.ml_theory;
        dist.projects += log.time_spent.projects;
        dist.reading += log.time_spent.reading;
        dist.other += log.time_spent.other;
    }
    dist
}
