//! # prepdash-core
//!
//! Core library for prepdash - a 12-week interview prep progress tracker.
//!
//! This library provides:
//! - Domain types for daily logs, goal categories, and targets
//! - A SQLite-backed per-owner document store with snapshot subscriptions
//! - Pure analytics: totals, streaks, calendar windows, predictions, scoring
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! State lives in one JSON document per owner. Analytics never touch the
//! store: each function takes the logs and an explicit `today`, so results
//! are deterministic and the store stays a dumb persistence layer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use prepdash_core::{analytics, Config, Store};
//!
//! let config = Config::load().expect("failed to load config");
//! let store = Store::open(&Config::database_path().unwrap()).expect("failed to open store");
//! store.migrate().expect("failed to run migrations");
//! let today = Utc::now().date_naive();
//! let document = store
//!     .load_or_init(&config.tracker.owner, today)
//!     .expect("failed to load document");
//! let summary = analytics::dashboard_summary(&document, today);
//! println!("week {} streak {}", summary.week_number, summary.current_streak);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use store::{Store, SubscriptionId};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod store;
pub mod types;
