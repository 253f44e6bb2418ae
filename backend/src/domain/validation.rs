//! Required-field rules for inbound create and edit requests.
//!
//! Rules run before any translation or storage call. They only inspect the
//! request; accepted requests pass through unchanged (no trimming or casing).

use chrono::NaiveDate;
use shared::{AddMemberRequest, EditMemberRequest};

use super::error::{FieldViolation, ValidationError};

pub const ID_REQUIRED: &str = "ID is required for editing";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const DOB_REQUIRED: &str = "Date of birth is required";

/// Which requests must carry a non-blank `description`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DescriptionPolicy {
    /// Add requests only; an edit may leave it out
    #[default]
    OnCreate,
    /// Add and edit requests
    Always,
    Optional,
}

impl DescriptionPolicy {
    fn on_create(self) -> bool {
        self != DescriptionPolicy::Optional
    }

    fn on_edit(self) -> bool {
        self == DescriptionPolicy::Always
    }
}

/// Field checks shared by the create and edit paths
struct MemberFields<'a> {
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
    description: Option<&'a str>,
    dob: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MemberRules {
    description: DescriptionPolicy,
}

impl MemberRules {
    pub fn new(description: DescriptionPolicy) -> Self {
        Self { description }
    }

    pub fn description_policy(&self) -> DescriptionPolicy {
        self.description
    }

    /// Validate an add-member request
    pub fn check_new(&self, request: &AddMemberRequest) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        check_fields(
            &mut violations,
            self.description.on_create(),
            MemberFields {
                first_name: request.first_name.as_deref(),
                last_name: request.last_name.as_deref(),
                description: request.description.as_deref(),
                dob: request.dob,
            },
        );
        finish(violations)
    }

    /// Validate an edit-member request; the id must be supplied
    pub fn check_edit(&self, request: &EditMemberRequest) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        if request.id.is_none() {
            violations.push(FieldViolation {
                field: "id",
                message: ID_REQUIRED,
            });
        }
        check_fields(
            &mut violations,
            self.description.on_edit(),
            MemberFields {
                first_name: request.first_name.as_deref(),
                last_name: request.last_name.as_deref(),
                description: request.description.as_deref(),
                dob: request.dob,
            },
        );
        finish(violations)
    }
}

fn check_fields(
    violations: &mut Vec<FieldViolation>,
    require_description: bool,
    fields: MemberFields<'_>,
) {
    if is_blank(fields.first_name) {
        violations.push(FieldViolation {
            field: "firstName",
            message: FIRST_NAME_REQUIRED,
        });
    }
    if is_blank(fields.last_name) {
        violations.push(FieldViolation {
            field: "lastName",
            message: LAST_NAME_REQUIRED,
        });
    }
    if require_description && is_blank(fields.description) {
        violations.push(FieldViolation {
            field: "description",
            message: DESCRIPTION_REQUIRED,
        });
    }
    if fields.dob.is_none() {
        violations.push(FieldViolation {
            field: "dob",
            message: DOB_REQUIRED,
        });
    }
}

/// Null, empty, or whitespace only
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}
