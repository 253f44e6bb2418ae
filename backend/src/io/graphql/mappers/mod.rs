//! Wire ↔ canonical translation.

pub mod link_mapper;
pub mod member_mapper;

use shared::{Gender as SharedGender, Parent as SharedParent};
use tracing::debug;

use crate::domain::error::MappingError;
use crate::domain::models::{Gender, Parent};

pub use link_mapper::{LinkMapper, WIRE_PARENTS};
pub use member_mapper::{MemberMapper, WIRE_GENDERS};

/// Check the wire-side tables against every variant on both sides
pub fn verify_wire_tables() -> Result<(), MappingError> {
    WIRE_GENDERS.verify(&SharedGender::ALL, &Gender::ALL)?;
    WIRE_PARENTS.verify(&SharedParent::ALL, &Parent::ALL)?;
    debug!(
        "Verified {} and {} wire tables",
        WIRE_GENDERS.kind(),
        WIRE_PARENTS.kind()
    );
    Ok(())
}
