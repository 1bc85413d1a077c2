use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use uuid::Uuid;

pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub action: String,
    pub context: Value,
    pub created_at: DateTime<Utc>,
}

/// Bounded, in-memory trail of administrative actions. Oldest entries are
/// dropped once `capacity` is reached.
pub struct AuditLog {
    capacity: usize,
    entries: Mutex<VecDeque<AuditLogEntry>>,
}

impl AuditLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::new()),
        }
    }

    pub fn record(&self, action: &str, context: Value) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(AuditLogEntry {
            id: Uuid::new_v4(),
            action: action.to_string(),
            context,
            created_at: Utc::now(),
        });
    }

    /// Newest first.
    pub fn list(&self, limit: usize, offset: usize) -> Vec<AuditLogEntry> {
        self.entries
            .lock()
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
