//! Wire-level types exchanged with callers of the family registry.
//!
//! Everything in this crate is exactly what crosses the query protocol: the
//! GraphQL objects returned to callers, the input objects they send, and the
//! wire vocabulary of the two closed enumerations. The backend maps these to
//! its own canonical records and never stores them directly.

use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender as exposed to API callers
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Every wire gender, in declaration order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

/// Which parent the source member of a link is to its target
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Parent {
    Father,
    Mother,
}

impl Parent {
    /// Every wire parent kind, in declaration order
    pub const ALL: [Parent; 2] = [Parent::Father, Parent::Mother];
}

/// A family member as returned by the API
#[derive(SimpleObject, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[graphql(name = "Member")]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub gender: Option<Gender>,
    /// Date of birth (YYYY-MM-DD)
    pub dob: NaiveDate,
}

/// A parent-child relationship as returned by the API
#[derive(SimpleObject, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[graphql(name = "Link")]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: Uuid,
    /// The parent member
    pub source: Uuid,
    /// The child member
    pub target: Uuid,
    pub parent: Parent,
}

/// Request for adding a new family member.
///
/// Fields are nullable on the wire so that missing values are reported by the
/// registry's own validation with a field-level message.
#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[graphql(name = "AddMemberInput")]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
}

/// Request for overwriting an existing family member.
///
/// Edits are never partial: every field is resupplied together with the id.
#[derive(InputObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[graphql(name = "EditMemberInput")]
#[serde(rename_all = "camelCase")]
pub struct EditMemberRequest {
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
}
