//! Storage record shapes and their canonical conversions.
//!
//! Records use the storage vocabulary for enumerations (`"MALE"`,
//! `"FATHER"`, ...). An identifier is absent until the store assigns one.

use std::str::FromStr;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::domain::enum_table::EnumTable;
use crate::domain::error::MappingError;
use crate::domain::models::{Gender, Link, Member, NewMember, Parent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoredGender {
    Male,
    Female,
}

impl StoredGender {
    pub const ALL: [StoredGender; 2] = [StoredGender::Male, StoredGender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            StoredGender::Male => "MALE",
            StoredGender::Female => "FEMALE",
        }
    }
}

impl FromStr for StoredGender {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| MappingError::UnknownVariant {
                kind: "gender",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoredParent {
    Father,
    Mother,
}

impl StoredParent {
    pub const ALL: [StoredParent; 2] = [StoredParent::Father, StoredParent::Mother];

    pub fn as_str(self) -> &'static str {
        match self {
            StoredParent::Father => "FATHER",
            StoredParent::Mother => "MOTHER",
        }
    }
}

impl FromStr for StoredParent {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| MappingError::UnknownVariant {
                kind: "parent",
                value: s.to_string(),
            })
    }
}

pub static STORED_GENDERS: EnumTable<Gender, StoredGender> = EnumTable::new(
    "gender",
    &[
        (Gender::Male, StoredGender::Male),
        (Gender::Female, StoredGender::Female),
    ],
);

pub static STORED_PARENTS: EnumTable<Parent, StoredParent> = EnumTable::new(
    "parent",
    &[
        (Parent::Father, StoredParent::Father),
        (Parent::Mother, StoredParent::Mother),
    ],
);

/// Check the storage-side tables against every variant on both sides
pub fn verify_storage_tables() -> Result<(), MappingError> {
    STORED_GENDERS.verify(&Gender::ALL, &StoredGender::ALL)?;
    STORED_PARENTS.verify(&Parent::ALL, &StoredParent::ALL)?;
    debug!(
        "Verified {} and {} storage tables",
        STORED_GENDERS.kind(),
        STORED_PARENTS.kind()
    );
    Ok(())
}

/// A member as persisted
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRecord {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub gender: Option<StoredGender>,
    pub dob: NaiveDate,
}

impl MemberRecord {
    /// Creation input to a record with no identifier
    pub fn from_new(input: NewMember) -> Result<Self, MappingError> {
        Ok(Self {
            id: None,
            first_name: input.first_name,
            last_name: input.last_name,
            description: input.description,
            gender: input.gender.map(|g| STORED_GENDERS.forward(g)).transpose()?,
            dob: input.dob,
        })
    }

    pub fn from_domain(member: Member) -> Result<Self, MappingError> {
        Ok(Self {
            id: Some(member.id),
            first_name: member.first_name,
            last_name: member.last_name,
            description: member.description,
            gender: member.gender.map(|g| STORED_GENDERS.forward(g)).transpose()?,
            dob: member.dob,
        })
    }

    /// Fails if the record was never assigned an identifier
    pub fn into_domain(self) -> Result<Member, MappingError> {
        Ok(Member {
            id: self.id.ok_or(MappingError::MissingField("id"))?,
            first_name: self.first_name,
            last_name: self.last_name,
            description: self.description,
            gender: self.gender.map(|g| STORED_GENDERS.backward(g)).transpose()?,
            dob: self.dob,
        })
    }
}

/// A parent-child link as persisted
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub id: Option<Uuid>,
    pub source: Uuid,
    pub target: Uuid,
    pub parent: StoredParent,
}

impl LinkRecord {
    pub fn from_domain(link: Link) -> Result<Self, MappingError> {
        Ok(Self {
            id: Some(link.id),
            source: link.source,
            target: link.target,
            parent: STORED_PARENTS.forward(link.parent)?,
        })
    }

    pub fn into_domain(self) -> Result<Link, MappingError> {
        Ok(Link {
            id: self.id.ok_or(MappingError::MissingField("id"))?,
            source: self.source,
            target: self.target,
            parent: STORED_PARENTS.backward(self.parent)?,
        })
    }
}
