use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::{CreateContentRequest, UpdateContentRequest},
    error::Error,
    models::ContentItem,
    repository::ContentStore,
};

/// Content lifecycle on top of whichever store is configured: id and
/// timestamp assignment, the partial-update merge rule, and not-found
/// mapping. Handlers never touch the store directly.
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<ContentItem>, Error> {
        self.store.list().await
    }

    pub async fn create(&self, request: CreateContentRequest) -> Result<ContentItem, Error> {
        let Some(title) = non_empty(request.title) else {
            return Err(Error::Validation("Title and content are required".to_string()));
        };
        let Some(content) = non_empty(request.content) else {
            return Err(Error::Validation("Title and content are required".to_string()));
        };

        let now = Utc::now();
        let item = ContentItem {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            kind: request.kind.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.store.put(&item).await?;

        Ok(item)
    }

    /// Partial overwrite: a field is replaced only when the caller supplied a
    /// non-empty value, so an empty string keeps the stored value and a field
    /// cannot be cleared. `updated_at` is refreshed unconditionally.
    pub async fn update(&self, id: &str, request: UpdateContentRequest) -> Result<ContentItem, Error> {
        let existing = self.store.get(id).await?.ok_or(Error::NotFound)?;

        let item = ContentItem {
            id: existing.id,
            title: non_empty(request.title).unwrap_or(existing.title),
            content: non_empty(request.content).unwrap_or(existing.content),
            kind: request.kind.unwrap_or(existing.kind),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.store.put(&item).await?;

        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
