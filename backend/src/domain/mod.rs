//! # Domain Module
//!
//! Canonical member and link records plus the rules that guard them.
//!
//! - **models**: the canonical `Member`, `NewMember` and `Link` records
//! - **validation**: required-field rules for create and edit requests
//! - **enum_table**: verified translation tables between enumerations
//! - **member_service**: create/read/update/list orchestration over storage
//! - **error**: the error taxonomy shared by every layer

pub mod enum_table;
pub mod error;
pub mod member_service;
pub mod models;
pub mod validation;

pub use error::{FieldViolation, MappingError, RegistryError, RegistryResult, ValidationError};
pub use member_service::{EditPolicy, MemberService};
pub use validation::{DescriptionPolicy, MemberRules};
