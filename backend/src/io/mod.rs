//! # IO Module
//!
//! Interface layer between callers and the domain. Requests arrive as
//! GraphQL documents over HTTP; wire DTOs from the `shared` crate are
//! validated, mapped to canonical records, handed to the member service, and
//! the results mapped back.

pub mod graphql;

pub use graphql::{build_schema, RegistrySchema};
