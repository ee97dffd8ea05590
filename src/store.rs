// src/store.rs

use std::{collections::HashMap, fmt};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::error::AppError;

/// Opaque per-client session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-session score storage.
///
/// Implementations must apply `increment` as a single atomic update so concurrent
/// correct answers from one session are never lost.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Current score, 0 for unknown sessions.
    async fn get(&self, session: &SessionId) -> Result<u64, AppError>;

    async fn set(&self, session: &SessionId, score: u64) -> Result<(), AppError>;

    /// Adds one point and returns the new score.
    async fn increment(&self, session: &SessionId) -> Result<u64, AppError>;

    /// Drops idle sessions. Returns how many were removed.
    async fn purge_expired(&self) -> Result<usize, AppError> {
        Ok(0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    score: u64,
    last_seen: DateTime<Utc>,
}

/// Process-local store. Sessions idle for longer than `ttl` read as fresh.
pub struct InMemoryScoreStore {
    sessions: Mutex<HashMap<SessionId, Entry>>,
    ttl: Duration,
}

impl InMemoryScoreStore {
    pub fn new(ttl_secs: u64) -> Self {
        let ttl_secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    fn is_live(&self, entry: &Entry, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.last_seen) <= self.ttl
    }

    #[cfg(test)]
    async fn backdate(&self, session: &SessionId, by: Duration) {
        if let Some(entry) = self.sessions.lock().await.get_mut(session) {
            entry.last_seen -= by;
        }
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn get(&self, session: &SessionId) -> Result<u64, AppError> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        let Some(entry) = sessions.get_mut(session) else {
            return Ok(0);
        };
        if !self.is_live(entry, now) {
            return Ok(0);
        }
        // Reads count as activity.
        entry.last_seen = now;
        Ok(entry.score)
    }

    async fn set(&self, session: &SessionId, score: u64) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(
            session.clone(),
            Entry {
                score,
                last_seen: Utc::now(),
            },
        );
        Ok(())
    }

    async fn increment(&self, session: &SessionId) -> Result<u64, AppError> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.entry(session.clone()).or_insert(Entry {
            score: 0,
            last_seen: now,
        });
        if !self.is_live(entry, now) {
            entry.score = 0;
        }
        entry.score = entry.score.saturating_add(1);
        entry.last_seen = now;
        Ok(entry.score)
    }

    async fn purge_expired(&self) -> Result<usize, AppError> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.signed_duration_since(entry.last_seen) <= self.ttl);
        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn unknown_session_scores_zero() {
        let store = InMemoryScoreStore::new(60);
        assert_eq!(store.get(&SessionId::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn increment_and_reset() {
        let store = InMemoryScoreStore::new(60);
        let session = SessionId::new();

        assert_eq!(store.increment(&session).await.unwrap(), 1);
        assert_eq!(store.increment(&session).await.unwrap(), 2);
        assert_eq!(store.get(&session).await.unwrap(), 2);

        store.set(&session, 0).await.unwrap();
        assert_eq!(store.get(&session).await.unwrap(), 0);
        assert_eq!(store.increment(&session).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemoryScoreStore::new(60);
        let alice = SessionId::new();
        let bob = SessionId::new();

        store.increment(&alice).await.unwrap();
        store.increment(&alice).await.unwrap();
        store.increment(&bob).await.unwrap();

        assert_eq!(store.get(&alice).await.unwrap(), 2);
        assert_eq!(store.get(&bob).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_are_not_lost() {
        let store = Arc::new(InMemoryScoreStore::new(60));
        let session = SessionId::new();

        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let store = store.clone();
                let session = session.clone();
                tokio::spawn(async move { store.increment(&session).await.unwrap() })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.get(&session).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn expired_sessions_read_as_fresh_and_get_purged() {
        let store = InMemoryScoreStore::new(0);
        let session = SessionId::new();
        store.set(&session, 5).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert_eq!(store.get(&session).await.unwrap(), 0);
        assert_eq!(store.purge_expired().await.unwrap(), 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn purge_keeps_live_sessions() {
        let store = InMemoryScoreStore::new(3600);
        store.set(&SessionId::new(), 3).await.unwrap();
        assert_eq!(store.purge_expired().await.unwrap(), 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn reading_the_score_keeps_a_session_alive() {
        let store = InMemoryScoreStore::new(60);
        let session = SessionId::new();
        store.set(&session, 4).await.unwrap();

        store.backdate(&session, Duration::seconds(50)).await;
        assert_eq!(store.get(&session).await.unwrap(), 4);
        store.backdate(&session, Duration::seconds(50)).await;

        // 100s since the last write, but only 50s since the last read.
        assert_eq!(store.purge_expired().await.unwrap(), 0);
        assert_eq!(store.get(&session).await.unwrap(), 4);
    }
}
