use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use super::connection::DbConnection;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::records::{LinkRecord, StoredParent};
use crate::storage::traits::LinkStore;

/// Repository for parent-child link rows
#[derive(Clone)]
pub struct LinkRepository {
    db: DbConnection,
}

impl LinkRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn decode(row: &SqliteRow) -> StorageResult<LinkRecord> {
        let parent: String = row.try_get("parent")?;

        Ok(LinkRecord {
            id: Some(Self::uuid_column(row, "id")?),
            source: Self::uuid_column(row, "source")?,
            target: Self::uuid_column(row, "target")?,
            parent: parent.parse::<StoredParent>()?,
        })
    }

    fn uuid_column(row: &SqliteRow, column: &'static str) -> StorageResult<Uuid> {
        let text: String = row.try_get(column)?;
        Uuid::parse_str(&text).map_err(|e| StorageError::Decode {
            table: "links",
            detail: format!("invalid {} {}: {}", column, text, e),
        })
    }
}

#[async_trait]
impl LinkStore for LinkRepository {
    async fn save_link(&self, mut record: LinkRecord) -> StorageResult<LinkRecord> {
        let id = *record.id.get_or_insert_with(Uuid::new_v4);

        sqlx::query(
            r#"
            INSERT INTO links (id, source, target, parent)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                source = excluded.source,
                target = excluded.target,
                parent = excluded.parent
            "#,
        )
        .bind(id.to_string())
        .bind(record.source.to_string())
        .bind(record.target.to_string())
        .bind(record.parent.as_str())
        .execute(self.db.pool())
        .await?;

        debug!("Saved link row {}", id);
        Ok(record)
    }

    async fn list_links(&self) -> StorageResult<Vec<LinkRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, source, target, parent
            FROM links
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::decode).collect()
    }
}
