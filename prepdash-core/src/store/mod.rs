//! SQLite-backed document store.

pub mod repo;
pub mod schema;

pub use repo::{SnapshotListener, Store, SubscriptionId};
pub use schema::SCHEMA_VERSION;
