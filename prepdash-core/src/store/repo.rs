//! Document repository
//!
//! One JSON document per owner, stored in SQLite. Saves replace the whole
//! document (last write wins); merges patch top-level keys only. Subscribers
//! receive the full document snapshot after every successful write.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::store::schema;
use crate::types::{DailyLog, Document};

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked with the full document snapshot after each write.
pub type SnapshotListener = Box<dyn Fn(&Document) + Send>;

struct Subscriber {
    owner: String,
    listener: SnapshotListener,
}

/// Document store handle (single connection)
pub struct Store {
    conn: Mutex<Connection>,
    subscribers: Mutex<HashMap<SubscriptionId, Subscriber>>,
    next_subscription: Mutex<u64>,
}

impl Store {
    /// Open or create a store at the given path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // WAL for better concurrency with a reader open
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            subscribers: Mutex::new(HashMap::new()),
            next_subscription: Mutex::new(0),
        })
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
            subscribers: Mutex::new(HashMap::new()),
            next_subscription: Mutex::new(0),
        })
    }

    /// Run any pending schema migrations
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        schema::run_migrations(&conn)
    }

    // ============================================
    // Reads
    // ============================================

    /// Load the document for an owner, if one exists.
    pub fn load(&self, owner: &str) -> Result<Option<Document>> {
        match self.load_raw(owner)? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    /// Load the document for an owner, or fail if absent.
    pub fn load_required(&self, owner: &str) -> Result<Document> {
        self.load(owner)?
            .ok_or_else(|| Error::DocumentNotFound(owner.to_string()))
    }

    /// Load the document, creating and persisting a default one (anchored at
    /// `today`) when the owner has none yet.
    pub fn load_or_init(&self, owner: &str, today: NaiveDate) -> Result<Document> {
        match self.load(owner)? {
            Some(document) => Ok(document),
            None => {
                let document = Document::new(today);
                tracing::info!(owner, start_date = %today, "Initializing document");
                self.save(owner, &document)?;
                Ok(document)
            }
        }
    }

    /// Raw JSON body for an owner. Used by merge and export.
    pub fn load_raw(&self, owner: &str) -> Result<Option<serde_json::Value>> {
        let conn = self.conn.lock().unwrap();
        let body: Option<String> = conn
            .query_row(
                "SELECT data FROM documents WHERE owner = ?1",
                params![owner],
                |r| r.get(0),
            )
            .optional()?;
        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    // ============================================
    // Writes
    // ============================================

    /// Replace the owner's document wholesale (last write wins), then notify
    /// subscribers with the new snapshot.
    pub fn save(&self, owner: &str, document: &Document) -> Result<()> {
        let body = serde_json::to_string(document)?;
        {
            let conn = self.conn.lock().unwrap();
            conn.execute(
                "INSERT INTO documents (owner, data, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(owner) DO UPDATE SET data = excluded.data,
                                                  updated_at = excluded.updated_at",
                params![owner, body, Utc::now().to_rfc3339()],
            )?;
        }
        tracing::debug!(owner, logs = document.daily_logs.len(), "Document saved");
        self.notify(owner, document);
        Ok(())
    }

    /// Merge top-level keys of `patch` into the stored document. Keys present
    /// in the patch replace the stored value entirely; nested objects are not
    /// merged recursively. Merging into a missing document creates one from
    /// the patch alone.
    pub fn merge(&self, owner: &str, patch: serde_json::Value) -> Result<Document> {
        let patch = match patch {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(Error::Config(format!(
                    "merge patch must be a JSON object, got {}",
                    other
                )))
            }
        };

        let mut body = match self.load_raw(owner)? {
            Some(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        for (key, value) in patch {
            body.insert(key, value);
        }

        let document: Document = serde_json::from_value(serde_json::Value::Object(body))?;
        self.save(owner, &document)?;
        Ok(document)
    }

    /// Insert or replace one daily log inside the owner's document.
    pub fn upsert_daily_log(&self, owner: &str, log: DailyLog) -> Result<Document> {
        let mut document = self.load_required(owner)?;
        document.upsert_daily_log(log);
        self.save(owner, &document)?;
        Ok(document)
    }

    // ============================================
    // Subscriptions
    // ============================================

    /// Register a listener for an owner's document. The listener fires
    /// immediately with the current snapshot when one exists, then again
    /// after every write.
    pub fn subscribe(&self, owner: &str, listener: SnapshotListener) -> Result<SubscriptionId> {
        if let Some(document) = self.load(owner)? {
            listener(&document);
        }
        let id = {
            let mut next = self.next_subscription.lock().unwrap();
            *next += 1;
            SubscriptionId(*next)
        };
        self.subscribers.lock().unwrap().insert(
            id,
            Subscriber {
                owner: owner.to_string(),
                listener,
            },
        );
        Ok(id)
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().unwrap().remove(&id);
    }

    fn notify(&self, owner: &str, document: &Document) {
        let subscribers = self.subscribers.lock().unwrap();
        for subscriber in subscribers.values() {
            if subscriber.owner == owner {
                (subscriber.listener)(document);
            }
        }
    }
}
