//! prepdash - 12-week interview prep progress tracker
//!
//! Logs daily study activity into a per-owner document and renders the
//! analytics views: dashboard, period comparison, predictions, heatmap,
//! velocity trend, time stats, and JSON export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use prepdash_core::analytics::{
    self, analyze_problems, compare_periods, compute_heatmap, predict, time_distribution,
    velocity_trend, week_time_stats, DistributionRange, Period,
};
use prepdash_core::format::{format_hours, format_percent_change, format_progress};
use prepdash_core::{Config, DailyLog, Store, Targets, TimeSpent};

#[derive(Parser)]
#[command(name = "prepdash")]
#[command(about = "12-week interview prep progress tracker")]
#[command(version)]
struct Cli {
    /// Owner whose document to operate on (defaults to config)
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Treat this date as today (YYYY-MM-DD), mainly for scripting
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Output format: text (default) or json
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record or update the log for a date
    Log {
        /// Date to log (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Easy problems solved
        #[arg(long, default_value_t = 0)]
        easy: u32,
        /// Medium problems solved
        #[arg(long, default_value_t = 0)]
        medium: u32,
        /// Hard problems solved
        #[arg(long, default_value_t = 0)]
        hard: u32,
        /// System design sessions
        #[arg(long, default_value_t = 0)]
        system_design: u32,
        /// ML theory sessions
        #[arg(long, default_value_t = 0)]
        ml_theory: u32,

        /// Project category worked on (ml, dl, rag, agents, fine-tuning, llm);
        /// repeatable
        #[arg(long = "project")]
        projects: Vec<String>,

        /// Did a mock interview
        #[arg(long)]
        mock_interview: bool,
        /// Read a research paper
        #[arg(long)]
        research_paper: bool,
        /// Published a blog post
        #[arg(long)]
        blog_post: bool,
        /// Posted on LinkedIn
        #[arg(long)]
        linkedin_post: bool,

        /// Hours spent, as CATEGORY=HOURS (e.g. leetcode=1.5); repeatable
        #[arg(long = "hours")]
        hours: Vec<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show totals, streak, and weekly progress
    Dashboard,

    /// Compare this week or month against the previous one
    Compare {
        /// Comparison period: week or month
        #[arg(long, default_value = "week")]
        period: String,
    },

    /// Project target completion at the current pace
    Predict,

    /// Show recent daily activity scores
    Heatmap {
        /// How many trailing days to show
        #[arg(long, default_value_t = 28)]
        days: u32,
    },

    /// Show week-over-week velocity
    Trend,

    /// Show hours logged this week
    Time {
        /// Show hours per category over a trailing range instead
        /// (week, month, all)
        #[arg(long)]
        range: Option<String>,
    },

    /// Show per-difficulty problem stats and top topics
    Problems,

    /// Write the full document to a JSON file
    Export {
        /// Output path (defaults to prepdash-export-YYYY-MM-DD.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging
    let _log_guard = prepdash_core::logging::init(&config.logging)
        .context("failed to initialize logging")?;

    let owner = cli.owner.clone().unwrap_or(config.tracker.owner.clone());
    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    let json = cli.format == "json";

    // Open the document store
    let db_path = Config::database_path().context("failed to resolve database path")?;
    let store = Store::open(&db_path).context("failed to open document store")?;
    store.migrate().context("failed to run store migrations")?;
    let mut document = store
        .load_or_init(&owner, today)
        .context("failed to load document")?;
    if let Some(start_date) = config.tracker.start_date {
        document.start_date = start_date;
    }

    match cli.command {
        Command::Log {
            date,
            easy,
            medium,
            hard,
            system_design,
            ml_theory,
            projects,
            mock_interview,
            research_paper,
            blog_post,
            linkedin_post,
            hours,
            notes,
        } => {
            let date = date.unwrap_or(today);
            let mut log = document
                .log_for(date)
                .cloned()
                .unwrap_or_else(|| DailyLog::new(date));

            if easy > 0 {
                log.leetcode_easy = easy;
            }
            if medium > 0 {
                log.leetcode_medium = medium;
            }
            if hard > 0 {
                log.leetcode_hard = hard;
            }
            if system_design > 0 {
                log.system_design = system_design;
            }
            if ml_theory > 0 {
                log.ml_theory = ml_theory;
            }
            for project in &projects {
                set_project_flag(&mut log, project)?;
            }
            log.mock_interview |= mock_interview;
            log.research_paper |= research_paper;
            log.blog_post |= blog_post;
            log.linkedin_post |= linkedin_post;
            for entry in &hours {
                let (category, value) = parse_hours(entry)?;
                set_hours(&mut log, &category, value)?;
            }
            if notes.is_some() {
                log.notes = notes;
            }

            let document = store
                .upsert_daily_log(&owner, log)
                .context("failed to save daily log")?;
            tracing::info!(owner = %owner, %date, "Daily log saved");
            println!(
                "Logged {} ({} entries total)",
                date,
                document.daily_logs.len()
            );
        }

        Command::Dashboard => {
            let summary = analytics::dashboard_summary(&document, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_dashboard(&summary);
            }
        }

        Command::Compare { period } => {
            let period: Period = period.parse().map_err(anyhow::Error::msg)?;
            let comparison = compare_periods(&document.daily_logs, period, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print_comparison(&comparison);
            }
        }

        Command::Predict => {
            let report = predict(
                &document.daily_logs,
                &Targets::default(),
                document.start_date,
                today,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_predictions(&report);
            }
        }

        Command::Heatmap { days } => {
            let heatmap = compute_heatmap(&document.daily_logs, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&heatmap)?);
            } else {
                print_heatmap(&heatmap, today, days);
            }
        }

        Command::Trend => {
            let trend = velocity_trend(&document.daily_logs);
            if json {
                println!("{}", serde_json::to_string_pretty(&trend)?);
            } else {
                print_trend(&trend);
            }
        }

        Command::Time { range } => match range {
            Some(range) => {
                let range: DistributionRange = range.parse().map_err(anyhow::Error::msg)?;
                let distribution = time_distribution(&document.daily_logs, range, today);
                if json {
                    println!("{}", serde_json::to_string_pretty(&distribution)?);
                } else {
                    print_distribution(&distribution);
                }
            }
            None => {
                let stats = week_time_stats(&document.daily_logs, today);
                if json {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                } else {
                    print_time_stats(&stats);
                }
            }
        },

        Command::Problems => {
            let analysis = analyze_problems(&document.daily_logs);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_problems(&analysis);
            }
        }

        Command::Export { output } => {
            let path = output
                .unwrap_or_else(|| PathBuf::from(format!("prepdash-export-{}.json", today)));
            let body = serde_json::to_string_pretty(&document)?;
            std::fs::write(&path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(owner = %owner, path = %path.display(), "Document exported");
            println!("Exported to {}", path.display());
        }
    }

    Ok(())
}

fn set_project_flag(log: &mut DailyLog, name: &str) -> Result<()> {
    match name {
        "ml" => log.project_ml = true,
        "dl" => log.project_dl = true,
        "rag" => log.project_rag = true,
        "agents" => log.project_agents = true,
        "fine-tuning" => log.project_fine_tuning = true,
        "llm" => log.project_llm = true,
        other => anyhow::bail!(
            "unknown project category '{}' (expected ml, dl, rag, agents, fine-tuning, llm)",
            other
        ),
    }
    Ok(())
}

fn parse_hours(entry: &str) -> Result<(String, f64)> {
    let (category, value) = entry
        .split_once('=')
        .with_context(|| format!("expected CATEGORY=HOURS, got '{}'", entry))?;
    let value: f64 = value
        .parse()
        .with_context(|| format!("invalid hours value in '{}'", entry))?;
    Ok((category.to_string(), value))
}

fn set_hours(log: &mut DailyLog, category: &str, value: f64) -> Result<()> {
    match category {
        "leetcode" => log.time_spent.leetcode = value,
        "system-design" => log.time_spent.system_design = value,
        "ml-theory" => log.time_spent.ml_theory = value,
        "projects" => log.time_spent.projects = value,
        "reading" => log.time_spent.reading = value,
        "other" => log.time_spent.other = value,
        other => anyhow::bail!(
            "unknown hours category '{}' (expected leetcode, system-design, ml-theory, projects, reading, other)",
            other
        ),
    }
    Ok(())
}

// ============================================
// Text rendering
// ============================================

fn print_dashboard(summary: &analytics::DashboardSummary) {
    println!("Week {}/12  |  Streak: {} days", summary.week_number, summary.current_streak);
    println!();
    println!("Totals");
    let totals = &summary.totals;
    println!(
        "  LeetCode         {} (E {} / M {} / H {})",
        totals.leetcode, totals.leetcode_easy, totals.leetcode_medium, totals.leetcode_hard
    );
    println!("  System Design    {}", totals.system_design);
    println!("  ML Theory        {}", totals.ml_theory);
    println!("  Projects         {}", totals.projects);
    println!("  Mock Interviews  {}", totals.mock_interviews);
    println!("  Research Papers  {}", totals.research_papers);
    println!("  Blog Posts       {}", totals.blog_posts);
    println!("  LinkedIn Posts   {}", totals.linkedin_posts);
    println!();
    println!("This week");
    let progress = &summary.weekly_progress;
    println!(
        "  LeetCode         {}",
        format_progress(progress.leetcode, progress.goals.leetcode)
    );
    println!(
        "  System Design    {}",
        format_progress(progress.system_design, progress.goals.system_design)
    );
    println!(
        "  ML Theory        {}",
        format_progress(progress.ml_theory, progress.goals.ml_theory)
    );
    println!(
        "  Projects         {}",
        format_progress(progress.projects, progress.goals.projects)
    );
}

fn print_comparison(comparison: &analytics::Comparison) {
    println!(
        "This {} vs last {}",
        comparison.period, comparison.period
    );
    println!("{:<16} {:>8} {:>8} {:>8}", "", "current", "previous", "change");
    let rows = [
        ("LeetCode", comparison.current.leetcode, comparison.previous.leetcode, comparison.changes.leetcode),
        ("System Design", comparison.current.system_design, comparison.previous.system_design, comparison.changes.system_design),
        ("ML Theory", comparison.current.ml_theory, comparison.previous.ml_theory, comparison.changes.ml_theory),
        ("Projects", comparison.current.projects, comparison.previous.projects, comparison.changes.projects),
        ("Content", comparison.current.content, comparison.previous.content, comparison.changes.content),
        ("Active Days", comparison.current.active_days, comparison.previous.active_days, comparison.changes.active_days),
    ];
    for (name, current, previous, change) in rows {
        println!(
            "{:<16} {:>8} {:>8} {:>8}",
            name,
            current,
            previous,
            format_percent_change(change.percent_change)
        );
    }
}

fn print_predictions(report: &analytics::PredictionReport) {
    println!(
        "Day {} of 84  |  {} days remaining  |  target date {}",
        report.days_elapsed, report.days_remaining, report.target_date
    );
    println!();
    println!(
        "{:<16} {:>9} {:>9} {:>10}  {}",
        "", "progress", "per week", "est. done", "status"
    );
    for p in &report.categories {
        let estimated = p
            .estimated_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:>9} {:>9.1} {:>10}  {}",
            p.category.display_name(),
            format_progress(p.current, p.target),
            p.velocity,
            estimated,
            p.status
        );
    }
    if !report.recommendations.is_empty() {
        println!();
        println!("To catch up:");
        for rec in &report.recommendations {
            println!(
                "  {} needs {:.1}/week ({} remaining)",
                rec.category.display_name(),
                rec.required_per_week,
                rec.remaining
            );
        }
    }
}

fn print_heatmap(heatmap: &analytics::Heatmap, today: NaiveDate, days: u32) {
    println!(
        "Active days: {}  |  Score streak: {}",
        heatmap.total_active_days, heatmap.current_streak
    );
    let cutoff = today - chrono::Days::new(days as u64);
    for day in heatmap.days.iter().filter(|d| d.date > cutoff) {
        let bar = "#".repeat(day.level.rank() as usize);
        println!("  {}  {:>5.1}  {}", day.date, day.score, bar);
    }
}

fn print_trend(trend: &analytics::VelocityTrend) {
    match trend.velocity_change {
        Some(change) => println!(
            "Average velocity: {:.1}/week  |  last week {}",
            trend.avg_velocity,
            format_percent_change(change)
        ),
        None => println!("Average velocity: {:.1}/week", trend.avg_velocity),
    }
    println!(
        "{:<10} {:>4} {:>4} {:>4} {:>6} {:>8}",
        "week", "lc", "sd", "ml", "total", "avg(3w)"
    );
    for week in &trend.weeks {
        println!(
            "{:<10} {:>4} {:>4} {:>4} {:>6} {:>8.1}",
            week.label,
            week.leetcode,
            week.system_design,
            week.ml_theory,
            week.total_problems,
            week.moving_avg
        );
    }
}

fn print_time_stats(stats: &analytics::WeekTimeStats) {
    println!(
        "This week: {} over {} active days ({}/day)",
        format_hours(stats.total_hours),
        stats.active_days,
        format_hours(stats.avg_hours_per_day)
    );
    if let Some(day) = stats.most_productive_day {
        println!(
            "Most productive: {} ({})",
            day,
            format_hours(stats.max_hours)
        );
    }
    println!("vs last week: {}", format_percent_change(stats.week_change));
}

fn print_distribution(distribution: &TimeSpent) {
    let rows = [
        ("LeetCode", distribution.leetcode),
        ("System Design", distribution.system_design),
        ("ML Theory", distribution.ml_theory),
        ("Projects", distribution.projects),
        ("Reading", distribution.reading),
        ("Other", distribution.other),
    ];
    for (name, hours) in rows {
        println!("  {:<16} {}", name, format_hours(hours));
    }
    println!("  {:<16} {}", "Total", format_hours(distribution.total()));
}

fn print_problems(analysis: &analytics::ProblemAnalysis) {
    println!(
        "{:<8} {:>6} {:>7} {:>9} {:>10} {:>9}",
        "", "total", "solved", "success", "attempts", "avg min"
    );
    for stats in &analysis.by_difficulty {
        println!(
            "{:<8} {:>6} {:>7} {:>8.1}% {:>10.1} {:>9.1}",
            stats.difficulty, stats.total, stats.solved, stats.success_rate, stats.avg_attempts,
            stats.avg_time
        );
    }
    if !analysis.top_topics.is_empty() {
        println!();
        println!("Top topics:");
        for topic in &analysis.top_topics {
            println!("  {:<24} {}", topic.topic, topic.count);
        }
    }
}
