//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{InsertOutcome, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    by_short_id: HashMap<String, Link>,
    /// original_url -> short_id
    by_url: HashMap<String, String>,
}

/// Link repository backed by two hash maps.
///
/// Both indexes sit behind one mutex so the check-and-insert is a single
/// critical section, which gives the same first-writer-wins behaviour as
/// the PostgreSQL unique constraints. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    tables: Mutex<Tables>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::StoreUnavailable("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut tables = self.lock()?;

        if let Some(short_id) = tables.by_url.get(&new_link.original_url)
            && let Some(existing) = tables.by_short_id.get(short_id)
        {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }

        if tables.by_short_id.contains_key(&new_link.short_id) {
            return Ok(InsertOutcome::ShortIdTaken);
        }

        tables.next_id += 1;
        let link = Link::new(
            tables.next_id,
            new_link.original_url,
            new_link.short_id,
            Utc::now(),
        );

        tables
            .by_url
            .insert(link.original_url.clone(), link.short_id.clone());
        tables.by_short_id.insert(link.short_id.clone(), link.clone());

        Ok(InsertOutcome::Created(link))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.lock()?.by_short_id.get(short_id).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let len = self.lock()?.by_short_id.len();
        i64::try_from(len).map_err(|e| AppError::Internal(e.to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(url: &str, code: &str) -> NewLink {
        NewLink {
            original_url: url.to_string(),
            short_id: code.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_creates_link() {
        let repo = InMemoryLinkRepository::new();

        let outcome = repo
            .insert_if_absent(new_link("https://example.com/", "abc1234"))
            .await
            .unwrap();

        let InsertOutcome::Created(link) = outcome else {
            panic!("expected Created, got {outcome:?}");
        };
        assert_eq!(link.id, 1);
        assert_eq!(link.short_id, "abc1234");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_same_url_returns_existing() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("https://example.com/", "first01"))
            .await
            .unwrap();

        let outcome = repo
            .insert_if_absent(new_link("https://example.com/", "second2"))
            .await
            .unwrap();

        let InsertOutcome::Existing(link) = outcome else {
            panic!("expected Existing, got {outcome:?}");
        };
        assert_eq!(link.short_id, "first01");
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.find_by_short_id("second2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_taken_short_id() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("https://one.example/", "same123"))
            .await
            .unwrap();

        let outcome = repo
            .insert_if_absent(new_link("https://two.example/", "same123"))
            .await
            .unwrap();

        assert_eq!(outcome, InsertOutcome::ShortIdTaken);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_short_id() {
        let repo = InMemoryLinkRepository::new();
        repo.insert_if_absent(new_link("https://example.com/page", "aZ3x9Qm"))
            .await
            .unwrap();

        let found = repo.find_by_short_id("aZ3x9Qm").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/page");

        assert!(repo.find_by_short_id("az3x9qm").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_keep_one_record() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let code = format!("code{i:03}");
                    match repo
                        .insert_if_absent(new_link("https://race.example/", &code))
                        .await
                        .unwrap()
                    {
                        InsertOutcome::Created(link) | InsertOutcome::Existing(link) => {
                            link.short_id
                        }
                        InsertOutcome::ShortIdTaken => panic!("unexpected short id conflict"),
                    }
                })
            })
            .collect();

        let mut codes = Vec::new();
        for handle in handles {
            codes.push(handle.await.unwrap());
        }

        codes.dedup();
        assert_eq!(codes.len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(InMemoryLinkRepository::new().ping().await.is_ok());
    }
}
