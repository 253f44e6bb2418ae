//! Translation of registry failures into GraphQL errors.
//!
//! Every error carries an `extensions.code`. Validation failures also list
//! the rejected `fields` and one `"<field>: <message>"` entry per violation.

use async_graphql::{Error, ErrorExtensions, Value};
use tracing::{error, warn};

use crate::domain::error::{MappingError, RegistryError};
use crate::storage::StorageError;

impl ErrorExtensions for RegistryError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| match self {
            RegistryError::Validation(validation) => {
                e.set("code", "VALIDATION_FAILED");
                e.set(
                    "fields",
                    Value::List(
                        validation
                            .fields()
                            .into_iter()
                            .map(|f| Value::String(f.to_string()))
                            .collect(),
                    ),
                );
                e.set(
                    "violations",
                    Value::List(
                        validation
                            .violations()
                            .iter()
                            .map(|v| Value::String(v.to_string()))
                            .collect(),
                    ),
                );
            }
            RegistryError::NotFound(_) => e.set("code", "NOT_FOUND"),
            RegistryError::Mapping(MappingError::MissingField(_)) => {
                e.set("code", "INVALID_RECORD")
            }
            RegistryError::Mapping(_) | RegistryError::Storage(StorageError::Mapping(_)) => {
                e.set("code", "ENUM_MISMATCH")
            }
            RegistryError::Storage(_) => e.set("code", "STORAGE_FAILURE"),
        })
    }
}

/// Log a failed operation and convert it for the caller
pub(crate) fn report(operation: &str, err: RegistryError) -> Error {
    match &err {
        RegistryError::Validation(validation) => {
            warn!("{} rejected: {}", operation, validation)
        }
        RegistryError::NotFound(id) => warn!("{} found no member {}", operation, id),
        other => error!("{} failed: {}", operation, other),
    }
    err.extend()
}
