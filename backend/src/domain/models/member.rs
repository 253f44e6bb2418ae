//! Domain model for a family member.
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

/// Input for creating a member. Carries no identifier; storage assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub gender: Option<Gender>,
    pub dob: NaiveDate,
}

/// A stored member. `id` never changes once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub gender: Option<Gender>,
    pub dob: NaiveDate,
}

impl Member {
    /// Attach an identifier to creation input
    pub fn from_new(id: Uuid, input: NewMember) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            description: input.description,
            gender: input.gender,
            dob: input.dob,
        }
    }
}
