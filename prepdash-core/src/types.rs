//! Core domain types for prepdash
//!
//! These types model the per-owner tracking document: one [`DailyLog`] per
//! calendar date, fixed 12-week [`Targets`], and mutable per-week goals.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Owner** | The single signed-in identity a document belongs to |
//! | **Document** | The full persisted state for an owner (logs + settings + aux data) |
//! | **DailyLog** | One day's logged activity, keyed by date (`YYYY-MM-DD`) |
//! | **GoalCategory** | One of the eight tracked goal categories |
//! | **Target** | Fixed lifetime goal count for a category over the 12-week horizon |
//! | **WeeklyGoals** | Per-calendar-week targets (Monday-aligned) for a subset of categories |
//!
//! All serialized field names are camelCase to stay wire-compatible with the
//! document contract described in [`Document`].

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Length of the goal horizon in days (12 weeks).
pub const HORIZON_DAYS: i64 = 84;

// ============================================
// Problem details
// ============================================

/// Difficulty tier of a coding problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" | "easy" => Ok(Difficulty::Easy),
            "Medium" | "medium" => Ok(Difficulty::Medium),
            "Hard" | "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty: {}", s)),
        }
    }
}

/// Per-problem record attached to a daily log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    /// Problem identifier (e.g., "LC-217")
    pub id: String,
    /// Problem name
    pub name: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Topic tags (e.g., "arrays", "dynamic-programming")
    #[serde(default)]
    pub topics: Vec<String>,
    /// Whether the problem was solved
    #[serde(default)]
    pub success: bool,
    /// Number of attempts (at least 1)
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    /// Minutes spent on this problem
    #[serde(default)]
    pub time_spent: f64,
}

fn default_attempts() -> u32 {
    1
}

// ============================================
// Time tracking
// ============================================

/// Hours logged per activity category for a single day.
///
/// Categories are fixed; absent sub-fields default to 0 so partially filled
/// documents stay readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpent {
    #[serde(default)]
    pub leetcode: f64,
    #[serde(default)]
    pub system_design: f64,
    #[serde(default)]
    pub ml_theory: f64,
    #[serde(default)]
    pub projects: f64,
    #[serde(default)]
    pub reading: f64,
    #[serde(default)]
    pub other: f64,
}

impl TimeSpent {
    /// Total hours across all categories.
    pub fn total(&self) -> f64 {
        self.leetcode
            + self.system_design
            + self.ml_theory
            + self.projects
            + self.reading
            + self.other
    }

    /// Hours for a named category, if one of the fixed six.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "leetcode" => Some(self.leetcode),
            "systemDesign" => Some(self.system_design),
            "mlTheory" => Some(self.ml_theory),
            "projects" => Some(self.projects),
            "reading" => Some(self.reading),
            "other" => Some(self.other),
            _ => None,
        }
    }
}

// ============================================
// Daily log
// ============================================

/// One day's logged activity.
///
/// Upserted by date: the document holds at most one log per calendar date.
/// Every numeric/boolean field defaults so records written by older document
/// versions deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Calendar date this log covers (unique key, no timezone component)
    pub date: NaiveDate,

    // Problem counters
    #[serde(default)]
    pub leetcode_easy: u32,
    #[serde(default)]
    pub leetcode_medium: u32,
    #[serde(default)]
    pub leetcode_hard: u32,
    /// Pre-summed problem count from the v1 document format. When nonzero it
    /// takes precedence over the three-tier breakdown in the activity scorer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode: Option<u32>,
    #[serde(default)]
    pub system_design: u32,
    #[serde(default)]
    pub ml_theory: u32,

    // Project-category flags (each contributes independently to totals)
    #[serde(default, rename = "projectML")]
    pub project_ml: bool,
    #[serde(default, rename = "projectDL")]
    pub project_dl: bool,
    #[serde(default, rename = "projectRAG")]
    pub project_rag: bool,
    #[serde(default)]
    pub project_agents: bool,
    #[serde(default)]
    pub project_fine_tuning: bool,
    #[serde(default, rename = "projectLLM")]
    pub project_llm: bool,

    // Achievement flags
    #[serde(default)]
    pub mock_interview: bool,
    #[serde(default)]
    pub research_paper: bool,
    #[serde(default)]
    pub blog_post: bool,
    #[serde(default)]
    pub linkedin_post: bool,

    // Logged by the form but outside the goal categories
    #[serde(default)]
    pub kaggle_competition: bool,
    #[serde(default)]
    pub mlops_deployment: bool,

    /// Hours per activity category
    #[serde(default)]
    pub time_spent: TimeSpent,

    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Per-problem records for difficulty/topic analysis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub problem_details: Vec<ProblemDetail>,

    /// Latent field from older documents; persisted but never populated or
    /// read by analytics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_hours: Option<f64>,
}

impl DailyLog {
    /// Create an empty log for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            leetcode_easy: 0,
            leetcode_medium: 0,
            leetcode_hard: 0,
            leetcode: None,
            system_design: 0,
            ml_theory: 0,
            project_ml: false,
            project_dl: false,
            project_rag: false,
            project_agents: false,
            project_fine_tuning: false,
            project_llm: false,
            mock_interview: false,
            research_paper: false,
            blog_post: false,
            linkedin_post: false,
            kaggle_competition: false,
            mlops_deployment: false,
            time_spent: TimeSpent::default(),
            notes: None,
            problem_details: Vec::new(),
            project_hours: None,
        }
    }

    /// Problems solved across all three difficulty tiers.
    pub fn leetcode_total(&self) -> u32 {
        self.leetcode_easy + self.leetcode_medium + self.leetcode_hard
    }

    /// Number of project-category flags set (each counts independently).
    pub fn project_count(&self) -> u32 {
        [
            self.project_ml,
            self.project_dl,
            self.project_rag,
            self.project_agents,
            self.project_fine_tuning,
            self.project_llm,
        ]
        .iter()
        .filter(|&&f| f)
        .count() as u32
    }

    /// Number of content/achievement flags set.
    pub fn content_count(&self) -> u32 {
        [
            self.mock_interview,
            self.research_paper,
            self.blog_post,
            self.linkedin_post,
        ]
        .iter()
        .filter(|&&f| f)
        .count() as u32
    }

    /// Total hours logged for the day.
    pub fn total_hours(&self) -> f64 {
        self.time_spent.total()
    }

    /// Whether the day counts toward a streak: any problem activity or any
    /// project flag.
    pub fn is_active(&self) -> bool {
        self.leetcode_total() > 0
            || self.system_design > 0
            || self.ml_theory > 0
            || self.project_count() > 0
    }
}

// ============================================
// Goal categories and targets
// ============================================

/// The eight tracked goal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalCategory {
    Leetcode,
    SystemDesign,
    MlTheory,
    Projects,
    MockInterviews,
    ResearchPapers,
    BlogPosts,
    LinkedinPosts,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 8] = [
        GoalCategory::Leetcode,
        GoalCategory::SystemDesign,
        GoalCategory::MlTheory,
        GoalCategory::Projects,
        GoalCategory::MockInterviews,
        GoalCategory::ResearchPapers,
        GoalCategory::BlogPosts,
        GoalCategory::LinkedinPosts,
    ];

    /// The four categories shown as primary goals on the dashboard.
    pub const PRIMARY: [GoalCategory; 4] = [
        GoalCategory::Leetcode,
        GoalCategory::SystemDesign,
        GoalCategory::MlTheory,
        GoalCategory::Projects,
    ];

    /// Identifier used in the document and for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Leetcode => "leetcode",
            GoalCategory::SystemDesign => "systemDesign",
            GoalCategory::MlTheory => "mlTheory",
            GoalCategory::Projects => "projects",
            GoalCategory::MockInterviews => "mockInterviews",
            GoalCategory::ResearchPapers => "researchPapers",
            GoalCategory::BlogPosts => "blogPosts",
            GoalCategory::LinkedinPosts => "linkedinPosts",
        }
    }

    /// Human-friendly name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalCategory::Leetcode => "LeetCode",
            GoalCategory::SystemDesign => "System Design",
            GoalCategory::MlTheory => "ML Theory",
            GoalCategory::Projects => "Projects",
            GoalCategory::MockInterviews => "Mock Interviews",
            GoalCategory::ResearchPapers => "Research Papers",
            GoalCategory::BlogPosts => "Blog Posts",
            GoalCategory::LinkedinPosts => "LinkedIn Posts",
        }
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leetcode" => Ok(GoalCategory::Leetcode),
            "systemDesign" | "system-design" => Ok(GoalCategory::SystemDesign),
            "mlTheory" | "ml-theory" => Ok(GoalCategory::MlTheory),
            "projects" => Ok(GoalCategory::Projects),
            "mockInterviews" | "mock-interviews" => Ok(GoalCategory::MockInterviews),
            "researchPapers" | "research-papers" => Ok(GoalCategory::ResearchPapers),
            "blogPosts" | "blog-posts" => Ok(GoalCategory::BlogPosts),
            "linkedinPosts" | "linkedin-posts" => Ok(GoalCategory::LinkedinPosts),
            _ => Err(format!("unknown goal category: {}", s)),
        }
    }
}

/// Fixed lifetime targets over the 12-week horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
    pub leetcode: u32,
    pub system_design: u32,
    pub ml_theory: u32,
    pub projects: u32,
    pub mock_interviews: u32,
    pub research_papers: u32,
    pub blog_posts: u32,
    pub linkedin_posts: u32,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            leetcode: 150,
            system_design: 15,
            ml_theory: 12,
            projects: 6,
            mock_interviews: 12,
            research_papers: 10,
            blog_posts: 6,
            linkedin_posts: 48,
        }
    }
}

impl Targets {
    pub fn get(&self, category: GoalCategory) -> u32 {
        match category {
            GoalCategory::Leetcode => self.leetcode,
            GoalCategory::SystemDesign => self.system_design,
            GoalCategory::MlTheory => self.ml_theory,
            GoalCategory::Projects => self.projects,
            GoalCategory::MockInterviews => self.mock_interviews,
            GoalCategory::ResearchPapers => self.research_papers,
            GoalCategory::BlogPosts => self.blog_posts,
            GoalCategory::LinkedinPosts => self.linkedin_posts,
        }
    }
}

/// Per-calendar-week targets (Monday-aligned), used only for weekly progress
/// views. Loaded from document settings; the analytics core never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoals {
    #[serde(default = "default_weekly_leetcode")]
    pub leetcode: u32,
    #[serde(default = "default_weekly_system_design")]
    pub system_design: u32,
    #[serde(default = "default_weekly_ml_theory")]
    pub ml_theory: u32,
    #[serde(default = "default_weekly_projects")]
    pub projects: u32,
}

impl Default for WeeklyGoals {
    fn default() -> Self {
        Self {
            leetcode: default_weekly_leetcode(),
            system_design: default_weekly_system_design(),
            ml_theory: default_weekly_ml_theory(),
            projects: default_weekly_projects(),
        }
    }
}

impl WeeklyGoals {
    /// Weekly target for a category, if one is tracked weekly.
    pub fn get(&self, category: GoalCategory) -> Option<u32> {
        match category {
            GoalCategory::Leetcode => Some(self.leetcode),
            GoalCategory::SystemDesign => Some(self.system_design),
            GoalCategory::MlTheory => Some(self.ml_theory),
            GoalCategory::Projects => Some(self.projects),
            _ => None,
        }
    }
}

fn default_weekly_leetcode() -> u32 {
    13
}

fn default_weekly_system_design() -> u32 {
    2
}

fn default_weekly_ml_theory() -> u32 {
    1
}

fn default_weekly_projects() -> u32 {
    1
}

/// Owner settings embedded in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub weekly_goals: WeeklyGoals,
}

// ============================================
// Document
// ============================================

/// Current document schema version.
pub const DOCUMENT_VERSION: u32 = 3;

/// The full persisted state for one owner.
///
/// The store reads and writes this as a single JSON document; concurrent
/// writers resolve at document granularity by last-write-wins. Auxiliary
/// collections (`skills`, `resources`, ...) sit outside the analytics core and
/// are carried as opaque JSON so round-trips are lossless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,
    /// Set once at account initialization; immutable afterwards.
    pub start_date: NaiveDate,
    #[serde(default)]
    pub settings: Settings,

    // Auxiliary data outside the analytics core
    #[serde(default)]
    pub skills: Vec<serde_json::Value>,
    #[serde(default)]
    pub resources: Vec<serde_json::Value>,
    #[serde(default = "empty_object")]
    pub problem_notes: serde_json::Value,
    #[serde(default)]
    pub projects: Vec<serde_json::Value>,
    #[serde(default)]
    pub research_papers: Vec<serde_json::Value>,
    #[serde(default)]
    pub achievements: Vec<serde_json::Value>,
    #[serde(default)]
    pub study_groups: Vec<serde_json::Value>,
    #[serde(default)]
    pub training_logs: Vec<serde_json::Value>,

    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_document_version")]
    pub version: u32,
}

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_document_version() -> u32 {
    DOCUMENT_VERSION
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl Document {
    /// Create an empty document anchored at a start date.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            daily_logs: Vec::new(),
            start_date,
            settings: Settings::default(),
            skills: Vec::new(),
            resources: Vec::new(),
            problem_notes: empty_object(),
            projects: Vec::new(),
            research_papers: Vec::new(),
            achievements: Vec::new(),
            study_groups: Vec::new(),
            training_logs: Vec::new(),
            theme: default_theme(),
            version: DOCUMENT_VERSION,
        }
    }

    /// Insert or replace the log for the given date.
    ///
    /// Idempotent: upserting the same log twice leaves one record per date.
    pub fn upsert_daily_log(&mut self, log: DailyLog) {
        match self.daily_logs.iter_mut().find(|l| l.date == log.date) {
            Some(existing) => *existing = log,
            None => self.daily_logs.push(log),
        }
    }

    /// Look up the log for a date.
    pub fn log_for(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.daily_logs.iter().find(|l| l.date == date)
    }
}
