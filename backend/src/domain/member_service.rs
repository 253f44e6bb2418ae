use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::error::{RegistryError, RegistryResult};
use super::models::{Link, Member, NewMember};
use crate::storage::{LinkRecord, LinkStore, MemberRecord, MemberStore};

/// What `edit_member` does when the id is not stored yet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditPolicy {
    /// Write the record under the supplied id whether or not it exists
    #[default]
    Upsert,
    /// Fail with `NotFound` and write nothing
    RequireExisting,
}

/// Service for managing family members and reading their links.
///
/// Holds no mutable state of its own; every call is forwarded to the stores
/// with the canonical ↔ storage translation applied on the way in and out.
#[derive(Clone)]
pub struct MemberService {
    members: Arc<dyn MemberStore>,
    links: Arc<dyn LinkStore>,
    edit_policy: EditPolicy,
}

impl MemberService {
    /// Create a new MemberService
    pub fn new(members: Arc<dyn MemberStore>, links: Arc<dyn LinkStore>) -> Self {
        Self {
            members,
            links,
            edit_policy: EditPolicy::default(),
        }
    }

    pub fn with_edit_policy(mut self, edit_policy: EditPolicy) -> Self {
        self.edit_policy = edit_policy;
        self
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }

    /// Create a member; storage assigns the id
    pub async fn add_member(&self, input: NewMember) -> RegistryResult<Member> {
        info!("Adding member: {} {}", input.first_name, input.last_name);

        let record = MemberRecord::from_new(input)?;
        let stored = self.members.save_member(record).await?;
        let member = stored.into_domain()?;

        info!("Added member with ID: {}", member.id);
        Ok(member)
    }

    /// Get a member by ID; `None` when no such member exists
    pub async fn get_member(&self, id: Uuid) -> RegistryResult<Option<Member>> {
        info!("Getting member: {}", id);

        let member = self
            .members
            .find_member(id)
            .await?
            .map(MemberRecord::into_domain)
            .transpose()?;

        if member.is_none() {
            warn!("Member not found: {}", id);
        }

        Ok(member)
    }

    /// List all members in storage order
    pub async fn get_all_members(&self) -> RegistryResult<Vec<Member>> {
        info!("Listing all members");

        let members = self
            .members
            .list_members()
            .await?
            .into_iter()
            .map(MemberRecord::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        info!("Found {} members", members.len());
        Ok(members)
    }

    /// Overwrite the member sharing `member.id` with the supplied fields
    pub async fn edit_member(&self, member: Member) -> RegistryResult<Member> {
        info!("Editing member: {}", member.id);

        if self.edit_policy == EditPolicy::RequireExisting
            && self.members.find_member(member.id).await?.is_none()
        {
            warn!("Refusing to edit unknown member: {}", member.id);
            return Err(RegistryError::NotFound(member.id));
        }

        let record = MemberRecord::from_domain(member)?;
        let stored = self.members.save_member(record).await?;
        let member = stored.into_domain()?;

        info!("Edited member with ID: {}", member.id);
        Ok(member)
    }

    /// List all parent-child links in storage order
    pub async fn get_all_links(&self) -> RegistryResult<Vec<Link>> {
        info!("Listing all links");

        let links = self
            .links
            .list_links()
            .await?
            .into_iter()
            .map(LinkRecord::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        info!("Found {} links", links.len());
        Ok(links)
    }
}
