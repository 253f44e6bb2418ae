//! Domain model for a parent-child link between two members.
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    Father,
    Mother,
}

impl Parent {
    pub const ALL: [Parent; 2] = [Parent::Father, Parent::Mother];
}

/// `source` is the parent, `target` the child. Both may name the same member;
/// nothing here forbids it.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: Uuid,
    pub source: Uuid,
    pub target: Uuid,
    pub parent: Parent,
}
