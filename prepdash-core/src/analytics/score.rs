//! Daily activity scoring for the heatmap view.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::DailyLog;

/// Heatmap intensity bucket derived from a day's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeatLevel {
    /// Score 0
    Empty,
    /// Score below 5
    Light,
    /// Score below 10
    Medium,
    /// Score below 15
    Heavy,
    /// Score 15 or more
    Intense,
}

impl HeatLevel {
    /// Bucket index, 0 through 4.
    pub fn rank(&self) -> u8 {
        match self {
            HeatLevel::Empty => 0,
            HeatLevel::Light => 1,
            HeatLevel::Medium => 2,
            HeatLevel::Heavy => 3,
            HeatLevel::Intense => 4,
        }
    }

    fn from_score(score: f64) -> Self {
        if score <= 0.0 {
            HeatLevel::Empty
        } else if score < 5.0 {
            HeatLevel::Light
        } else if score < 10.0 {
            HeatLevel::Medium
        } else if score < 15.0 {
            HeatLevel::Heavy
        } else {
            HeatLevel::Intense
        }
    }
}

/// One scored day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatCell {
    pub date: NaiveDate,
    pub score: f64,
    pub level: HeatLevel,
}

/// Heatmap summary: all scored days plus header statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub days: Vec<HeatCell>,
    /// Days with a nonzero score
    pub total_active_days: u32,
    /// Consecutive scored days ending at today (or yesterday)
    pub current_streak: u32,
}

/// Weighted activity score for one day.
///
/// Problems weigh 2, system design 3, content flags 2, and each logged hour
/// adds 1. A nonzero pre-summed problem count from the v1 format takes
/// precedence over the per-tier breakdown.
pub fn activity_score(log: &DailyLog) -> f64 {
    let leetcode = match log.leetcode {
        Some(n) if n > 0 => n,
        _ => log.leetcode_total(),
    };
    2.0 * leetcode as f64
        + 3.0 * log.system_design as f64
        + 2.0 * log.content_count() as f64
        + log.total_hours()
}

/// Score every log and derive the heatmap header stats.
pub fn compute_heatmap(logs: &[DailyLog], today: NaiveDate) -> Heatmap {
    let mut days: Vec<HeatCell> = logs
        .iter()
        .map(|log| {
            let score = activity_score(log);
            HeatCell {
                date: log.date,
                score,
                level: HeatLevel::from_score(score),
            }
        })
        .collect();
    days.sort_by_key(|d| d.date);

    let total_active_days = days.iter().filter(|d| d.score > 0.0).count() as u32;

    // Streak over scored days: walk newest-first, tolerating a one-day step.
    let mut active: Vec<NaiveDate> = days
        .iter()
        .filter(|d| d.score > 0.0)
        .map(|d| d.date)
        .collect();
    active.sort_by(|a, b| b.cmp(a));
    let mut current_streak = 0;
    let mut cursor = today;
    for day in active {
        if (cursor - day).num_days() > 1 {
            break;
        }
        current_streak += 1;
        cursor = day;
    }

    Heatmap {
        days,
        total_active_days,
        current_streak,
    }
}
