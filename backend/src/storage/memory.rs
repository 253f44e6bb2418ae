//! In-process keyed store.
//!
//! Records live in maps behind a tokio `RwLock`; insertion order is kept so
//! listing is stable. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::error::StorageResult;
use super::records::{LinkRecord, MemberRecord};
use super::traits::{LinkStore, MemberStore};

/// Rows keyed by id, listed in first-insertion order
struct Table<T> {
    rows: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T: Clone> Table<T> {
    fn upsert(&mut self, id: Uuid, row: T) {
        if self.rows.insert(id, row).is_none() {
            self.order.push(id);
        }
    }

    fn get(&self, id: &Uuid) -> Option<T> {
        self.rows.get(id).cloned()
    }

    fn list(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id).cloned())
            .collect()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

#[derive(Default)]
struct Tables {
    members: Table<MemberRecord>,
    links: Table<LinkRecord>,
}

/// Keyed store for members and links held in memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for MemoryStore {
    async fn save_member(&self, mut record: MemberRecord) -> StorageResult<MemberRecord> {
        let id = *record.id.get_or_insert_with(Uuid::new_v4);
        self.tables.write().await.members.upsert(id, record.clone());
        debug!("Saved member {} in memory", id);
        Ok(record)
    }

    async fn find_member(&self, id: Uuid) -> StorageResult<Option<MemberRecord>> {
        Ok(self.tables.read().await.members.get(&id))
    }

    async fn list_members(&self) -> StorageResult<Vec<MemberRecord>> {
        Ok(self.tables.read().await.members.list())
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn save_link(&self, mut record: LinkRecord) -> StorageResult<LinkRecord> {
        let id = *record.id.get_or_insert_with(Uuid::new_v4);
        self.tables.write().await.links.upsert(id, record.clone());
        debug!("Saved link {} in memory", id);
        Ok(record)
    }

    async fn list_links(&self) -> StorageResult<Vec<LinkRecord>> {
        Ok(self.tables.read().await.links.list())
    }
}
