use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};

use crate::ui::BookingWizard;

struct WizardEntry {
    wizard: BookingWizard,
    expires_at: DateTime<Utc>,
}

/// Per-visitor booking wizards, keyed by the id in the visitor's cookie.
/// Entries idle for longer than the TTL are dropped. Once `capacity` live
/// entries exist, starting a new wizard evicts the one idle the longest.
pub struct WizardStore {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<String, WizardEntry>>,
}

impl WizardStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, WizardEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn purge_expired(entries: &mut HashMap<String, WizardEntry>, now: DateTime<Utc>) {
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        let purged = before - entries.len();
        if purged > 0 {
            tracing::debug!(purged, "expired booking wizards dropped");
        }
    }

    fn evict_oldest(entries: &mut HashMap<String, WizardEntry>) {
        let oldest = entries
            .iter()
            .min_by_key(|(_, entry)| entry.expires_at)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            entries.remove(&id);
            tracing::debug!(wizard_id = %id, "wizard store full, oldest wizard evicted");
        }
    }

    /// Store a new wizard and return its id.
    pub fn insert(&self, wizard: BookingWizard) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let mut entries = self.lock();
        Self::purge_expired(&mut entries, now);
        while entries.len() >= self.capacity {
            Self::evict_oldest(&mut entries);
        }
        entries.insert(
            id.clone(),
            WizardEntry {
                wizard,
                expires_at: now + self.ttl,
            },
        );
        id
    }

    /// Snapshot of a live wizard.
    pub fn get(&self, id: &str) -> Option<BookingWizard> {
        let mut entries = self.lock();
        Self::purge_expired(&mut entries, Utc::now());
        entries.get(id).map(|entry| entry.wizard.clone())
    }

    /// Write back a snapshot taken with `get`. Does nothing and returns
    /// `None` when the wizard was removed or expired in the meantime.
    pub fn replace(&self, id: &str, wizard: BookingWizard) -> Option<()> {
        self.update(id, |stored| *stored = wizard)
    }

    /// Mutate a stored wizard in place. The lock is held for the duration
    /// of `f`, so `f` must not block.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut BookingWizard) -> R) -> Option<R> {
        let now = Utc::now();
        let mut entries = self.lock();
        Self::purge_expired(&mut entries, now);
        let entry = entries.get_mut(id)?;
        entry.expires_at = now + self.ttl;
        Some(f(&mut entry.wizard))
    }

    pub fn remove(&self, id: &str) {
        self.lock().remove(id);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
