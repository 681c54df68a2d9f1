use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ContentStore;
use crate::{error::Error, models::ContentItem};

/// Transient backend: a single process-wide map, created at startup and
/// cleared only by a process restart. Concurrent writes to the same id are
/// last-writer-wins; there is no cross-request ordering guarantee.
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, ContentItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn put(&self, item: &ContentItem) -> Result<(), Error> {
        self.items
            .write()
            .await
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ContentItem>, Error> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, Error> {
        Ok(self.items.write().await.remove(id).is_some())
    }

    async fn list(&self) -> Result<Vec<ContentItem>, Error> {
        let mut items: Vec<ContentItem> = self.items.read().await.values().cloned().collect();
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::models::ContentKind;

    fn item(id: &str, updated_at_secs: i64) -> ContentItem {
        let ts: DateTime<Utc> = DateTime::from_timestamp(updated_at_secs, 0).unwrap();
        ContentItem {
            id: id.to_string(),
            title: format!("title-{id}"),
            content: format!("content-{id}"),
            kind: ContentKind::Note,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_a_copy() {
        let store = MemoryStore::new();
        let stored = item("a", 100);

        store.put(&stored).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(stored));
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_the_item_with_the_same_id() {
        let store = MemoryStore::new();
        store.put(&item("a", 100)).await.unwrap();

        let mut replacement = item("a", 200);
        replacement.title = "replaced".to_string();
        store.put(&replacement).await.unwrap();

        let stored = store.get("a").await.unwrap().unwrap();
        assert_eq!(stored.title, "replaced");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_whether_the_item_existed() {
        let store = MemoryStore::new();
        store.put(&item("a", 100)).await.unwrap();

        assert!(store.delete("a").await.unwrap());
        assert!(!store.delete("a").await.unwrap());
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_orders_by_most_recent_update() {
        let store = MemoryStore::new();
        store.put(&item("old", 100)).await.unwrap();
        store.put(&item("newest", 300)).await.unwrap();
        store.put(&item("mid", 200)).await.unwrap();

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["newest", "mid", "old"]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }
}
