//! Canonical records used by the service layer.
//!
//! These types are independent of both the wire vocabulary (`shared`) and the
//! storage vocabulary (`storage::records`).

pub mod link;
pub mod member;

pub use link::{Link, Parent};
pub use member::{Gender, Member, NewMember};
