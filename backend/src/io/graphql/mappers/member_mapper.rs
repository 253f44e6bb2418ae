//! backend/src/io/graphql/mappers/member_mapper.rs

use shared::{
    AddMemberRequest, EditMemberRequest, Gender as SharedGender, Member as SharedMember,
};

use crate::domain::enum_table::EnumTable;
use crate::domain::error::MappingError;
use crate::domain::models::{Gender, Member, NewMember};

pub static WIRE_GENDERS: EnumTable<SharedGender, Gender> = EnumTable::new(
    "gender",
    &[
        (SharedGender::Male, Gender::Male),
        (SharedGender::Female, Gender::Female),
    ],
);

/// Mapper to convert between shared member DTOs and domain member models.
///
/// Requests are expected to have passed `MemberRules` first; a required value
/// that is still missing here surfaces as `MappingError::MissingField`.
pub struct MemberMapper;

impl MemberMapper {
    /// Converts an add-member request to domain creation input (no id).
    pub fn to_new_member(request: AddMemberRequest) -> Result<NewMember, MappingError> {
        Ok(NewMember {
            first_name: required("firstName", request.first_name)?,
            last_name: required("lastName", request.last_name)?,
            description: request.description,
            gender: Self::gender_to_domain(request.gender)?,
            dob: required("dob", request.dob)?,
        })
    }

    /// Converts an edit-member request to a domain member, id carried through.
    pub fn to_domain(request: EditMemberRequest) -> Result<Member, MappingError> {
        Ok(Member {
            id: required("id", request.id)?,
            first_name: required("firstName", request.first_name)?,
            last_name: required("lastName", request.last_name)?,
            description: request.description,
            gender: Self::gender_to_domain(request.gender)?,
            dob: required("dob", request.dob)?,
        })
    }

    /// Converts a domain member to the shared DTO.
    pub fn to_dto(member: Member) -> Result<SharedMember, MappingError> {
        Ok(SharedMember {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            description: member.description,
            gender: member
                .gender
                .map(|g| WIRE_GENDERS.backward(g))
                .transpose()?,
            dob: member.dob,
        })
    }

    pub fn to_dto_list(members: Vec<Member>) -> Result<Vec<SharedMember>, MappingError> {
        members.into_iter().map(Self::to_dto).collect()
    }

    fn gender_to_domain(gender: Option<SharedGender>) -> Result<Option<Gender>, MappingError> {
        gender.map(|g| WIRE_GENDERS.forward(g)).transpose()
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, MappingError> {
    value.ok_or(MappingError::MissingField(field))
}
