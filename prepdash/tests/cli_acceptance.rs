use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

struct CliTestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    xdg_data: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
    work_dir: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_data = base.join("xdg-data");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");
        let work_dir = base.join("work");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_data).expect("failed to create XDG_DATA_HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");
        fs::create_dir_all(&work_dir).expect("failed to create work dir");

        Self {
            _temp_dir: temp_dir,
            home,
            xdg_data,
            xdg_config,
            xdg_state,
            work_dir,
        }
    }
}

fn run(env: &CliTestEnv, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("prepdash"));
    Command::new(bin_path)
        .args(args)
        .current_dir(&env.work_dir)
        .env("HOME", &env.home)
        .env("XDG_DATA_HOME", &env.xdg_data)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env_remove("PREPDASH_OWNER")
        .output()
        .unwrap_or_else(|e| panic!("failed to execute prepdash: {e}"))
}

fn assert_success(args: &[&str], output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "prepdash {} failed with {:?}\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
    stdout
}

#[test]
fn log_then_dashboard_reports_totals_and_streak() {
    let env = CliTestEnv::new();

    let args = [
        "--today",
        "2024-01-02",
        "log",
        "--date",
        "2024-01-01",
        "--easy",
        "2",
        "--medium",
        "1",
        "--system-design",
        "1",
    ];
    assert_success(&args, &run(&env, &args));

    let args = [
        "--today",
        "2024-01-02",
        "log",
        "--hard",
        "1",
        "--project",
        "ml",
    ];
    assert_success(&args, &run(&env, &args));

    let args = ["--today", "2024-01-02", "--format", "json", "dashboard"];
    let stdout = assert_success(&args, &run(&env, &args));
    let summary: serde_json::Value =
        serde_json::from_str(&stdout).expect("dashboard should emit JSON");

    assert_eq!(summary["totals"]["leetcode"], 4);
    assert_eq!(summary["totals"]["leetcodeEasy"], 2);
    assert_eq!(summary["totals"]["leetcodeMedium"], 1);
    assert_eq!(summary["totals"]["leetcodeHard"], 1);
    assert_eq!(summary["totals"]["systemDesign"], 1);
    assert_eq!(summary["totals"]["mlTheory"], 0);
    assert_eq!(summary["totals"]["projects"], 1);
    assert_eq!(summary["currentStreak"], 2);
    assert_eq!(summary["weekNumber"], 1);
}

#[test]
fn logging_twice_for_one_date_keeps_a_single_entry() {
    let env = CliTestEnv::new();

    let args = ["--today", "2024-01-05", "log", "--easy", "1"];
    assert_success(&args, &run(&env, &args));
    let args = ["--today", "2024-01-05", "log", "--easy", "3"];
    let stdout = assert_success(&args, &run(&env, &args));
    assert!(stdout.contains("1 entries total"), "stdout: {stdout}");

    let args = ["--today", "2024-01-05", "--format", "json", "dashboard"];
    let stdout = assert_success(&args, &run(&env, &args));
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["totals"]["leetcode"], 3);
}

#[test]
fn predict_shows_every_category() {
    let env = CliTestEnv::new();

    let args = ["--today", "2024-01-08", "log", "--easy", "5"];
    assert_success(&args, &run(&env, &args));

    let args = ["--today", "2024-01-15", "--format", "json", "predict"];
    let stdout = assert_success(&args, &run(&env, &args));
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["categories"].as_array().unwrap().len(), 8);
    // Start date was initialized at the first run (2024-01-08)
    assert_eq!(report["daysElapsed"], 7);
}

#[test]
fn compare_rejects_unknown_period() {
    let env = CliTestEnv::new();
    let output = run(&env, &["compare", "--period", "fortnight"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown period"), "stderr: {stderr}");
}

#[test]
fn export_writes_the_document_contract() {
    let env = CliTestEnv::new();

    let args = [
        "--today",
        "2024-01-03",
        "log",
        "--easy",
        "1",
        "--mock-interview",
        "--hours",
        "leetcode=1.5",
    ];
    assert_success(&args, &run(&env, &args));

    let args = ["--today", "2024-01-03", "export"];
    assert_success(&args, &run(&env, &args));

    let exported = env.work_dir.join("prepdash-export-2024-01-03.json");
    let body = fs::read_to_string(&exported).expect("export file should exist");
    let document: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(document["startDate"], "2024-01-03");
    assert_eq!(document["dailyLogs"][0]["leetcodeEasy"], 1);
    assert_eq!(document["dailyLogs"][0]["mockInterview"], true);
    assert_eq!(document["dailyLogs"][0]["timeSpent"]["leetcode"], 1.5);
    assert_eq!(document["version"], 3);
}

#[test]
fn time_range_selects_the_distribution_window() {
    let env = CliTestEnv::new();

    let args = [
        "--today", "2024-01-10", "log", "--date", "2024-01-09", "--hours", "leetcode=2.0",
    ];
    assert_success(&args, &run(&env, &args));
    let args = [
        "--today", "2024-01-10", "log", "--date", "2023-12-20", "--hours", "leetcode=4.0",
    ];
    assert_success(&args, &run(&env, &args));

    // The trailing 7-day window excludes the December entry
    let args = ["--today", "2024-01-10", "--format", "json", "time", "--range", "week"];
    let stdout = assert_success(&args, &run(&env, &args));
    let distribution: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(distribution["leetcode"], 2.0);

    let args = ["--today", "2024-01-10", "--format", "json", "time", "--range", "month"];
    let stdout = assert_success(&args, &run(&env, &args));
    let distribution: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(distribution["leetcode"], 6.0);

    let output = run(&env, &["time", "--range", "fortnight"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown range"), "stderr: {stderr}");
}

#[test]
fn owner_flag_isolates_documents() {
    let env = CliTestEnv::new();

    let args = ["--owner", "alice", "--today", "2024-01-02", "log", "--easy", "9"];
    assert_success(&args, &run(&env, &args));

    let args = ["--owner", "bob", "--today", "2024-01-02", "--format", "json", "dashboard"];
    let stdout = assert_success(&args, &run(&env, &args));
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["totals"]["leetcode"], 0);
}

#[test]
fn env_owner_override_works_without_a_config_file() {
    let env = CliTestEnv::new();

    // No config.toml exists; PREPDASH_OWNER alone must select the document.
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("prepdash"));
    let args = ["--today", "2024-01-02", "log", "--easy", "6"];
    let output = Command::new(bin_path)
        .args(args)
        .current_dir(&env.work_dir)
        .env("HOME", &env.home)
        .env("XDG_DATA_HOME", &env.xdg_data)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env("PREPDASH_OWNER", "alice")
        .output()
        .unwrap_or_else(|e| panic!("failed to execute prepdash: {e}"));
    assert_success(&args, &output);

    let args = ["--owner", "alice", "--today", "2024-01-02", "--format", "json", "dashboard"];
    let stdout = assert_success(&args, &run(&env, &args));
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["totals"]["leetcode"], 6);

    // The default owner's document was never touched
    let args = ["--today", "2024-01-02", "--format", "json", "dashboard"];
    let stdout = assert_success(&args, &run(&env, &args));
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["totals"]["leetcode"], 0);
}
