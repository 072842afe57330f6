//! In-memory audit log
//!
//! Records administrative actions in a bounded ring. Writes are
//! fire-and-forget: handlers never wait on the log and a failed write
//! never rolls back the action it describes.

use crate::config::AuditConfig;
use crate::core::models::{AuditEntry, RequestOrigin};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Bounded in-memory audit log
pub struct AuditLog {
    entries: Arc<RwLock<VecDeque<AuditEntry>>>,
    capacity: usize,
}

impl AuditLog {
    /// Create an empty audit log from configuration
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(config.capacity))),
            capacity: config.capacity,
        }
    }

    /// Record an action without blocking the caller
    ///
    /// The write happens on a spawned task; failures are logged and
    /// swallowed.
    pub fn log_action(
        &self,
        actor_id: Uuid,
        action: &str,
        target: Option<String>,
        details: serde_json::Value,
        origin: RequestOrigin,
    ) {
        let entry = AuditEntry::new(actor_id, action.to_string(), target)
            .with_details(details)
            .with_origin(origin);
        let entries = Arc::clone(&self.entries);
        let capacity = self.capacity;

        tokio::spawn(async move {
            if let Err(e) = record(&entries, capacity, entry) {
                warn!("Failed to record audit entry: {}", e);
            }
        });
    }

    /// Most recent entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<AuditEntry> {
        self.entries
            .read()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

fn record(
    entries: &RwLock<VecDeque<AuditEntry>>,
    capacity: usize,
    entry: AuditEntry,
) -> Result<()> {
    let mut entries = entries.write();
    if entries.len() == capacity {
        entries.pop_front();
    }
    debug!("📋 Audit: {} on {}", entry.action, entry.target);
    entries.push_back(entry);
    Ok(())
}
