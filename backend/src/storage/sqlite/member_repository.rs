use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use super::connection::DbConnection;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::records::{MemberRecord, StoredGender};
use crate::storage::traits::MemberStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository for member rows
#[derive(Clone)]
pub struct MemberRepository {
    db: DbConnection,
}

impl MemberRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn decode(row: &SqliteRow) -> StorageResult<MemberRecord> {
        let id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id).map_err(|e| StorageError::Decode {
            table: "members",
            detail: format!("invalid id {}: {}", id, e),
        })?;

        let gender: Option<String> = row.try_get("gender")?;
        let gender = gender
            .map(|g| g.parse::<StoredGender>())
            .transpose()?;

        let dob: String = row.try_get("dob")?;
        let dob = NaiveDate::parse_from_str(&dob, DATE_FORMAT).map_err(|e| {
            StorageError::Decode {
                table: "members",
                detail: format!("invalid dob {} for {}: {}", dob, id, e),
            }
        })?;

        Ok(MemberRecord {
            id: Some(id),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            description: row.try_get("description")?,
            gender,
            dob,
        })
    }
}

#[async_trait]
impl MemberStore for MemberRepository {
    async fn save_member(&self, mut record: MemberRecord) -> StorageResult<MemberRecord> {
        let id = *record.id.get_or_insert_with(Uuid::new_v4);

        sqlx::query(
            r#"
            INSERT INTO members (id, first_name, last_name, description, gender, dob)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                description = excluded.description,
                gender = excluded.gender,
                dob = excluded.dob
            "#,
        )
        .bind(id.to_string())
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(record.description.as_deref())
        .bind(record.gender.map(StoredGender::as_str))
        .bind(record.dob.format(DATE_FORMAT).to_string())
        .execute(self.db.pool())
        .await?;

        debug!("Saved member row {}", id);
        Ok(record)
    }

    async fn find_member(&self, id: Uuid) -> StorageResult<Option<MemberRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, description, gender, dob
            FROM members
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::decode).transpose()
    }

    async fn list_members(&self) -> StorageResult<Vec<MemberRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, description, gender, dob
            FROM members
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::decode).collect()
    }
}
