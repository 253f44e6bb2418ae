//! SQLite-backed storage using SQLx.
//!
//! One table per record shape, keyed by the UUID text. Saves are upserts
//! (`INSERT .. ON CONFLICT(id) DO UPDATE`), and listings follow `rowid`, which
//! is the order rows were first inserted.

pub mod connection;
pub mod link_repository;
pub mod member_repository;

pub use connection::DbConnection;
pub use link_repository::LinkRepository;
pub use member_repository::MemberRepository;
