//! Consecutive-day activity streaks.

use chrono::NaiveDate;

use crate::types::DailyLog;

/// Length of the current run of consecutive active days ending at `today`
/// (or yesterday, which still counts as unbroken).
///
/// A day is active when it has any problem activity or any project flag set.
/// The walk goes newest-first and stops at the first gap of more than one day
/// or the first inactive log inside the run.
pub fn current_streak(logs: &[DailyLog], today: NaiveDate) -> u32 {
    let mut sorted: Vec<&DailyLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = 0;
    let mut cursor = today;
    for log in sorted {
        let gap = (cursor - log.date).num_days();
        if gap > 1 {
            break;
        }
        if !log.is_active() {
            break;
        }
        streak += 1;
        cursor = log.date;
    }
    streak
}
