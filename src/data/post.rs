//! Append-only post log. Each post is an id plus the Unix second it was created.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: i64,
    pub timestamp: i64,
}

// Placeholder seed content; the timestamps are not meaningful times.
const SEED_POSTS: [PostRecord; 2] = [
    PostRecord { id: 0, timestamp: 12 },
    PostRecord { id: 1, timestamp: 10 },
];

#[derive(Debug)]
pub struct PostLog {
    posts: Mutex<Vec<PostRecord>>,
}

impl Default for PostLog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl PostLog {
    pub fn seeded() -> Self {
        Self {
            posts: Mutex::new(SEED_POSTS.to_vec()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<PostRecord>>, StoreError> {
        self.posts
            .lock()
            .map_err(|_| StoreError::Poisoned { store: "post log" })
    }

    /// Appends a post stamped with the current UTC time.
    pub fn create(&self) -> Result<PostRecord, StoreError> {
        self.create_at(Utc::now())
    }

    pub fn create_at(&self, now: DateTime<Utc>) -> Result<PostRecord, StoreError> {
        let mut posts = self.lock()?;
        let id = posts.iter().map(|post| post.id).max().map_or(0, |max| max + 1);
        let post = PostRecord {
            id,
            timestamp: unix_seconds_rounded(now),
        };
        posts.push(post);
        tracing::debug!(id, timestamp = post.timestamp, "post created");
        Ok(post)
    }

    /// Every post in append order.
    pub fn list(&self) -> Result<Vec<PostRecord>, StoreError> {
        Ok(self.lock()?.clone())
    }
}

fn unix_seconds_rounded(now: DateTime<Utc>) -> i64 {
    now.timestamp() + i64::from(now.timestamp_subsec_millis() >= 500)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn ids_continue_from_seeded_max() {
        let log = PostLog::seeded();
        let first = log.create().unwrap();
        let second = log.create().unwrap();
        assert_eq!(first.id, 2);
        assert_eq!(second.id, 3);
        assert!(second.timestamp >= first.timestamp);
        assert_eq!(log.list().unwrap().len(), 4);
    }

    #[test]
    fn timestamp_rounds_to_nearest_second() {
        let log = PostLog::seeded();
        let base = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let down = log
            .create_at(base + chrono::Duration::milliseconds(499))
            .unwrap();
        assert_eq!(down.timestamp, 1_700_000_000);

        let up = log
            .create_at(base + chrono::Duration::milliseconds(500))
            .unwrap();
        assert_eq!(up.timestamp, 1_700_000_001);
    }

    #[test]
    fn seed_posts_are_kept_in_order() {
        let log = PostLog::seeded();
        let posts = log.list().unwrap();
        assert_eq!(posts, SEED_POSTS.to_vec());
    }
}
