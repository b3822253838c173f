//! In-memory edit sessions.
//!
//! A session owns one `ResumeRecord` and is the unit of collaboration: all
//! edits for a resume flow through its session, one at a time, and each
//! committed edit produces a new complete record. Subscribers (export
//! caches, change feeds) are notified after every successful commit with
//! the full updated record, never a partial one.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::layout::contract;
use crate::models::resume::ResumeRecord;
use crate::models::update::{self, PathSegment, UpdateError};

type Subscriber = Box<dyn Fn(&ResumeRecord) + Send + Sync>;

pub struct EditSession {
    pub id: Uuid,
    pub record: ResumeRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    subscribers: Vec<Subscriber>,
}

impl EditSession {
    pub fn new(record: ResumeRecord) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            record,
            created_at: now,
            updated_at: now,
            subscribers: Vec::new(),
        }
    }

    /// Registers a commit listener. Listeners see the record after the
    /// commit has fully applied.
    pub fn subscribe(&mut self, listener: Subscriber) {
        self.subscribers.push(listener);
    }

    /// Applies one text edit and notifies subscribers.
    ///
    /// An edit addressed at the skills list arrives as the joined display
    /// line and is re-split into items before applying; every other path
    /// commits the text verbatim.
    pub fn commit(&mut self, path: &[PathSegment], value: &str) -> Result<&ResumeRecord, UpdateError> {
        let updated = if is_skills_path(path) {
            update::apply_items(&self.record, path, contract::split_skills(value))?
        } else {
            update::apply(&self.record, path, value)?
        };
        self.record = updated;
        self.updated_at = Utc::now();
        for listener in &self.subscribers {
            listener(&self.record);
        }
        Ok(&self.record)
    }
}

fn is_skills_path(path: &[PathSegment]) -> bool {
    matches!(path, [PathSegment::Key(k)] if k == "skills")
}

/// Shared, thread-safe session registry.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, EditSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for a record and returns its id and creation time.
    pub fn create(&self, record: ResumeRecord) -> (Uuid, DateTime<Utc>) {
        let session = EditSession::new(record);
        let (id, created_at) = (session.id, session.created_at);
        self.write().insert(id, session);
        (id, created_at)
    }

    /// Snapshot of a session's current record and timestamps.
    pub fn snapshot(&self, id: Uuid) -> Option<SessionSnapshot> {
        self.read().get(&id).map(SessionSnapshot::of)
    }

    /// Commits an edit into a session. Outer `None` means no such session.
    pub fn commit(
        &self,
        id: Uuid,
        path: &[PathSegment],
        value: &str,
    ) -> Option<Result<SessionSnapshot, UpdateError>> {
        let mut sessions = self.write();
        let session = sessions.get_mut(&id)?;
        // Drop the commit's record borrow before snapshotting the session.
        let outcome = session.commit(path, value).map(|_| ());
        Some(outcome.map(|()| SessionSnapshot::of(session)))
    }

    /// Attaches a commit listener to a session.
    pub fn subscribe(&self, id: Uuid, listener: Subscriber) -> bool {
        match self.write().get_mut(&id) {
            Some(session) => {
                session.subscribe(listener);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, EditSession>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, EditSession>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owned view of a session, safe to hand out past the lock.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub record: ResumeRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionSnapshot {
    fn of(session: &EditSession) -> Self {
        Self {
            id: session.id,
            record: session.record.clone(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn key(k: &str) -> PathSegment {
        PathSegment::Key(k.to_string())
    }

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            full_name: "Jane Doe".to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_create_then_snapshot_round_trips_the_record() {
        let store = SessionStore::new();
        let (id, _) = store.create(sample_record());
        let snap = store.snapshot(id).expect("session exists");
        assert_eq!(snap.record.full_name, "Jane Doe");
        assert_eq!(snap.created_at, snap.updated_at);
    }

    #[test]
    fn test_unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.snapshot(Uuid::new_v4()).is_none());
        assert!(store.commit(Uuid::new_v4(), &[key("summary")], "x").is_none());
    }

    #[test]
    fn test_commit_updates_record_and_timestamp() {
        let store = SessionStore::new();
        let (id, created_at) = store.create(sample_record());
        let snap = store
            .commit(id, &[key("fullName")], "Janet Doe")
            .expect("session exists")
            .expect("edit applies");
        assert_eq!(snap.record.full_name, "Janet Doe");
        assert!(snap.updated_at >= created_at);
    }

    #[test]
    fn test_skills_commit_resplits_the_joined_line() {
        let store = SessionStore::new();
        let (id, _) = store.create(sample_record());
        let snap = store
            .commit(id, &[key("skills")], "Go  •  Rust  •  Kubernetes")
            .expect("session exists")
            .expect("edit applies");
        assert_eq!(snap.record.skills, vec!["Go", "Rust", "Kubernetes"]);
    }

    #[test]
    fn test_failed_commit_leaves_record_untouched() {
        let store = SessionStore::new();
        let (id, _) = store.create(sample_record());
        let result = store
            .commit(id, &[key("nonsense"), key("deeper")], "x")
            .expect("session exists");
        assert!(result.is_err());
        let snap = store.snapshot(id).expect("session exists");
        assert_eq!(snap.record, sample_record());
    }

    #[test]
    fn test_subscribers_see_each_committed_record() {
        let store = SessionStore::new();
        let (id, _) = store.create(sample_record());
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        assert!(store.subscribe(
            id,
            Box::new(move |record| sink.lock().expect("lock").push(record.full_name.clone()))
        ));
        store
            .commit(id, &[key("fullName")], "Janet Doe")
            .expect("session exists")
            .expect("edit applies");
        store
            .commit(id, &[key("fullName")], "J. Doe")
            .expect("session exists")
            .expect("edit applies");
        assert_eq!(*seen.lock().expect("lock"), vec!["Janet Doe", "J. Doe"]);
    }
}
