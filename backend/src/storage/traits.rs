//! # Storage Traits
//!
//! Contract for the keyed record store consumed by the domain layer. Every
//! operation is asynchronous and may fail; failures are returned unchanged.

use async_trait::async_trait;
use uuid::Uuid;

use super::error::StorageResult;
use super::records::{LinkRecord, MemberRecord};

/// Member persistence
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Create or overwrite the record keyed by `record.id`.
    ///
    /// A record without an id is created under a freshly generated one. The
    /// stored record, id included, is returned.
    async fn save_member(&self, record: MemberRecord) -> StorageResult<MemberRecord>;

    /// Retrieve a member by id
    async fn find_member(&self, id: Uuid) -> StorageResult<Option<MemberRecord>>;

    /// List every member in the backend's native order
    async fn list_members(&self) -> StorageResult<Vec<MemberRecord>>;
}

/// Link persistence
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Create or overwrite the link keyed by `record.id`
    async fn save_link(&self, record: LinkRecord) -> StorageResult<LinkRecord>;

    /// List every link in the backend's native order
    async fn list_links(&self) -> StorageResult<Vec<LinkRecord>>;
}
