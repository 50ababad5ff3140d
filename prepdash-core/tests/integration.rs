//! End-to-end tests over the store and analytics together.

use chrono::NaiveDate;
use prepdash_core::analytics;
use prepdash_core::{DailyLog, Store};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn logs_persisted_through_the_store_feed_analytics() {
    let store = Store::open_in_memory().unwrap();
    store.migrate().unwrap();
    let start = date("2024-01-01");
    store.load_or_init("alice", start).unwrap();

    let mut day1 = DailyLog::new(date("2024-01-01"));
    day1.leetcode_easy = 2;
    day1.leetcode_medium = 1;
    day1.system_design = 1;
    store.upsert_daily_log("alice", day1).unwrap();

    let mut day2 = DailyLog::new(date("2024-01-02"));
    day2.leetcode_hard = 1;
    day2.project_ml = true;
    store.upsert_daily_log("alice", day2).unwrap();

    let document = store.load_required("alice").unwrap();
    let today = date("2024-01-02");

    let totals = analytics::compute_totals(&document.daily_logs);
    assert_eq!(totals.leetcode, 4);
    assert_eq!(totals.leetcode_easy, 2);
    assert_eq!(totals.leetcode_medium, 1);
    assert_eq!(totals.leetcode_hard, 1);
    assert_eq!(totals.system_design, 1);
    assert_eq!(totals.ml_theory, 0);
    assert_eq!(totals.projects, 1);

    assert_eq!(analytics::current_streak(&document.daily_logs, today), 2);

    let summary = analytics::dashboard_summary(&document, today);
    assert_eq!(summary.week_number, 1);
    assert_eq!(summary.totals, totals);
}

#[test]
fn store_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prepdash.db");

    {
        let store = Store::open(&path).unwrap();
        store.migrate().unwrap();
        store.load_or_init("alice", date("2024-01-01")).unwrap();
        let mut log = DailyLog::new(date("2024-01-03"));
        log.ml_theory = 2;
        store.upsert_daily_log("alice", log).unwrap();
    }

    let store = Store::open(&path).unwrap();
    store.migrate().unwrap();
    let document = store.load_required("alice").unwrap();
    assert_eq!(document.start_date, date("2024-01-01"));
    assert_eq!(document.daily_logs.len(), 1);
    assert_eq!(document.daily_logs[0].ml_theory, 2);
}

#[test]
fn document_wire_format_matches_the_export_contract() {
    let store = Store::open_in_memory().unwrap();
    store.migrate().unwrap();
    store.load_or_init("alice", date("2024-01-01")).unwrap();
    let mut log = DailyLog::new(date("2024-01-02"));
    log.leetcode_easy = 1;
    log.mock_interview = true;
    log.time_spent.system_design = 2.0;
    store.upsert_daily_log("alice", log).unwrap();

    let raw = store.load_raw("alice").unwrap().unwrap();
    assert_eq!(raw["startDate"], serde_json::json!("2024-01-01"));
    assert_eq!(raw["version"], serde_json::json!(3));
    assert_eq!(raw["settings"]["weeklyGoals"]["leetcode"], 13);
    let log_json = &raw["dailyLogs"][0];
    assert_eq!(log_json["date"], serde_json::json!("2024-01-02"));
    assert_eq!(log_json["leetcodeEasy"], 1);
    assert_eq!(log_json["mockInterview"], true);
    assert_eq!(log_json["timeSpent"]["systemDesign"], 2.0);
}
