//! Error taxonomy for registry operations.
use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::storage::StorageError;

/// One rejected field of an inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the field, e.g. `firstName`
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A create or edit request failed validation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", describe(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Wire names of every rejected field, in check order
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure translating between the wire, canonical and storage shapes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("unrecognized {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{kind} mapping table is not a bijection: {detail}")]
    TableMismatch { kind: &'static str, detail: String },
}

/// Everything a registry operation can fail with
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// Passed through from the storage collaborator as-is
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("member not found: {0}")]
    NotFound(Uuid),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
