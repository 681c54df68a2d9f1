mod embedded;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{error::Error, models::ContentItem};

/// Persistence seam for content items, backed either by the transient
/// in-process map or by Postgres. Both backends hand out owned copies;
/// nothing outside the store keeps a durable reference to a stored item.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert a new item or replace the stored one with the same id.
    async fn put(&self, item: &ContentItem) -> Result<(), Error>;

    async fn get(&self, id: &str) -> Result<Option<ContentItem>, Error>;

    /// Returns false when no item with the given id exists.
    async fn delete(&self, id: &str) -> Result<bool, Error>;

    /// All items, most recently updated first.
    async fn list(&self) -> Result<Vec<ContentItem>, Error>;
}
