use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use super::{ContentStore, embedded::migrations};
use crate::{
    error::Error,
    models::{ContentItem, ContentKind},
};

/// Durable backend: one `tokio-postgres` client with a refinery-managed
/// schema. Each operation is a single statement; a read-modify-write update
/// is not atomic against concurrent updates to the same row.
pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied - Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    fn item_from_row(row: &Row) -> Result<ContentItem, Error> {
        let kind: String = row.get("kind");
        let kind = ContentKind::parse(&kind)
            .ok_or_else(|| Error::Storage(format!("unknown content kind in row: {kind}")))?;

        Ok(ContentItem {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            kind,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl ContentStore for PostgresStore {
    async fn put(&self, item: &ContentItem) -> Result<(), Error> {
        let kind = item.kind.as_str();
        self.client
            .execute(
                "INSERT INTO content_items (id, title, content, kind, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (id) DO UPDATE SET \
                 title = EXCLUDED.title, \
                 content = EXCLUDED.content, \
                 kind = EXCLUDED.kind, \
                 updated_at = EXCLUDED.updated_at",
                &[
                    &item.id,
                    &item.title,
                    &item.content,
                    &kind,
                    &item.created_at,
                    &item.updated_at,
                ],
            )
            .await?;

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ContentItem>, Error> {
        let row = self
            .client
            .query_opt(
                "SELECT id, title, content, kind, created_at, updated_at \
                 FROM content_items WHERE id = $1",
                &[&id],
            )
            .await?;

        row.map(|row| Self::item_from_row(&row)).transpose()
    }

    async fn delete(&self, id: &str) -> Result<bool, Error> {
        let rows = self
            .client
            .execute("DELETE FROM content_items WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }

    async fn list(&self) -> Result<Vec<ContentItem>, Error> {
        let rows = self
            .client
            .query(
                "SELECT id, title, content, kind, created_at, updated_at \
                 FROM content_items ORDER BY updated_at DESC",
                &[],
            )
            .await?;

        let mut items: Vec<ContentItem> = Vec::new();

        for row in rows {
            items.push(Self::item_from_row(&row)?);
        }

        Ok(items)
    }
}
