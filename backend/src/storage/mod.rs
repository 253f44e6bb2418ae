//! # Storage Module
//!
//! The storage collaborator behind the member service.
//!
//! The domain layer only sees the [`MemberStore`] and [`LinkStore`] traits and
//! the storage record shapes in [`records`]. Two implementations exist:
//!
//! - [`MemoryStore`]: process-local maps, used for tests and throwaway runs
//! - [`sqlite`]: durable SQLite tables via SQLx
//!
//! Both offer create-or-update by key, get by key and list-all. A record saved
//! without an identifier gets a fresh UUID.

pub mod error;
pub mod memory;
pub mod records;
pub mod sqlite;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use records::{LinkRecord, MemberRecord, StoredGender, StoredParent};
pub use sqlite::{DbConnection, LinkRepository, MemberRepository};
pub use traits::{LinkStore, MemberStore};
