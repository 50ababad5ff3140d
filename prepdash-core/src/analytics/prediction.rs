//! Velocity-based target predictions over the 12-week horizon.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::analytics::totals::compute_totals;
use crate::types::{DailyLog, GoalCategory, Targets, HORIZON_DAYS};

/// Pace classification for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaceStatus {
    /// Target already reached
    Completed,
    /// Projected to finish with at least a 20% time buffer
    Ahead,
    /// Projected to finish within the remaining time
    OnTrack,
    /// Projected to finish after the horizon ends
    Behind,
    /// No progress yet, so no projection is possible
    NoProgress,
}

impl PaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaceStatus::Completed => "completed",
            PaceStatus::Ahead => "ahead",
            PaceStatus::OnTrack => "onTrack",
            PaceStatus::Behind => "behind",
            PaceStatus::NoProgress => "noProgress",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaceStatus::Completed => "Completed",
            PaceStatus::Ahead => "Ahead",
            PaceStatus::OnTrack => "On Track",
            PaceStatus::Behind => "Behind",
            PaceStatus::NoProgress => "No Progress",
        }
    }
}

impl std::fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Projection for one goal category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPrediction {
    pub category: GoalCategory,
    pub current: u32,
    pub target: u32,
    /// Work left, floored at zero
    pub remaining: u32,
    /// Items per week since the start date
    pub velocity: f64,
    /// Weeks needed at the current velocity (absent when done or stalled)
    pub weeks_needed: Option<f64>,
    /// Projected completion date at the current velocity
    pub estimated_date: Option<NaiveDate>,
    pub status: PaceStatus,
}

/// Suggested weekly rate for a category that is behind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: GoalCategory,
    pub remaining: u32,
    /// Items per week needed to finish inside the horizon
    pub required_per_week: f64,
}

/// Full prediction report across all categories.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    /// Whole days since the start date
    pub days_elapsed: i64,
    /// Days left in the horizon, floored at zero
    pub days_remaining: i64,
    /// End of the 12-week horizon
    pub target_date: NaiveDate,
    pub categories: Vec<CategoryPrediction>,
    pub recommendations: Vec<Recommendation>,
}

fn predict_category(
    category: GoalCategory,
    current: u32,
    target: u32,
    days_elapsed: i64,
    today: NaiveDate,
) -> CategoryPrediction {
    let weeks_elapsed = days_elapsed as f64 / 7.0;
    let velocity = if weeks_elapsed > 0.0 {
        current as f64 / weeks_elapsed
    } else {
        0.0
    };
    let remaining = target.saturating_sub(current);

    if remaining == 0 {
        return CategoryPrediction {
            category,
            current,
            target,
            remaining,
            velocity,
            weeks_needed: None,
            estimated_date: None,
            status: PaceStatus::Completed,
        };
    }

    if velocity > 0.0 {
        let weeks_needed = remaining as f64 / velocity;
        let weeks_remaining = (HORIZON_DAYS - days_elapsed) as f64 / 7.0;
        let status = if weeks_needed > weeks_remaining {
            PaceStatus::Behind
        } else if weeks_needed < 0.8 * weeks_remaining {
            PaceStatus::Ahead
        } else {
            PaceStatus::OnTrack
        };
        let days_needed = (weeks_needed * 7.0).ceil() as u64;
        CategoryPrediction {
            category,
            current,
            target,
            remaining,
            velocity,
            weeks_needed: Some(weeks_needed),
            estimated_date: today.checked_add_days(Days::new(days_needed)),
            status,
        }
    } else {
        CategoryPrediction {
            category,
            current,
            target,
            remaining,
            velocity,
            weeks_needed: None,
            estimated_date: None,
            status: PaceStatus::NoProgress,
        }
    }
}

/// Project every category's completion at its historical velocity.
pub fn predict(
    logs: &[DailyLog],
    targets: &Targets,
    start_date: NaiveDate,
    today: NaiveDate,
) -> PredictionReport {
    let totals = compute_totals(logs);
    let days_elapsed = (today - start_date).num_days();
    let days_remaining = (HORIZON_DAYS - days_elapsed).max(0);
    let target_date = start_date + Days::new(HORIZON_DAYS as u64);

    let categories: Vec<CategoryPrediction> = GoalCategory::ALL
        .iter()
        .map(|&category| {
            predict_category(
                category,
                totals.get(category),
                targets.get(category),
                days_elapsed,
                today,
            )
        })
        .collect();

    // Behind categories get a catch-up rate while time remains.
    let weeks_remaining = days_remaining as f64 / 7.0;
    let recommendations: Vec<Recommendation> = if weeks_remaining > 0.0 {
        categories
            .iter()
            .filter(|p| p.status == PaceStatus::Behind)
            .map(|p| Recommendation {
                category: p.category,
                remaining: p.remaining,
                required_per_week: p.remaining as f64 / weeks_remaining,
            })
            .collect()
    } else {
        Vec::new()
    };

    PredictionReport {
        days_elapsed,
        days_remaining,
        target_date,
        categories,
        recommendations,
    }
}
