//! backend/src/io/graphql/mappers/link_mapper.rs

use shared::{Link as SharedLink, Parent as SharedParent};

use crate::domain::enum_table::EnumTable;
use crate::domain::error::MappingError;
use crate::domain::models::{Link, Parent};

pub static WIRE_PARENTS: EnumTable<SharedParent, Parent> = EnumTable::new(
    "parent",
    &[
        (SharedParent::Father, Parent::Father),
        (SharedParent::Mother, Parent::Mother),
    ],
);

/// Mapper from domain links to shared link DTOs. Links are read-only on the
/// wire, so there is no inbound direction.
pub struct LinkMapper;

impl LinkMapper {
    pub fn to_dto(link: Link) -> Result<SharedLink, MappingError> {
        Ok(SharedLink {
            id: link.id,
            source: link.source,
            target: link.target,
            parent: WIRE_PARENTS.backward(link.parent)?,
        })
    }

    pub fn to_dto_list(links: Vec<Link>) -> Result<Vec<SharedLink>, MappingError> {
        links.into_iter().map(Self::to_dto).collect()
    }
}
