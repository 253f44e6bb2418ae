//! # GraphQL API for Member Management
//!
//! Queries and mutations for listing, fetching, adding and editing members.

use async_graphql::{Context, Object, Result};
use shared::{AddMemberRequest, EditMemberRequest, Member as SharedMember};
use tracing::info;
use uuid::Uuid;

use super::errors::report;
use super::mappers::MemberMapper;
use crate::domain::{MemberRules, MemberService, RegistryResult};

#[derive(Default)]
pub struct MemberQuery;

#[Object]
impl MemberQuery {
    /// Every stored member, in storage order
    async fn get_all_members(&self, ctx: &Context<'_>) -> Result<Vec<SharedMember>> {
        list_members(ctx, "getAllMembers").await
    }

    /// Same as `getAllMembers`; the name graph views use for members
    async fn nodes(&self, ctx: &Context<'_>) -> Result<Vec<SharedMember>> {
        list_members(ctx, "nodes").await
    }

    /// The member with this id, or null when there is none
    async fn get_family_member(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
    ) -> Result<Option<SharedMember>> {
        info!("query getFamilyMember({})", id);
        let service = ctx.data::<MemberService>()?;

        get_member(service, id)
            .await
            .map_err(|e| report("getFamilyMember", e))
    }
}

#[derive(Default)]
pub struct MemberMutation;

#[Object]
impl MemberMutation {
    /// Create a member; the registry assigns its id
    async fn add_member(&self, ctx: &Context<'_>, input: AddMemberRequest) -> Result<SharedMember> {
        info!("mutation addMember - request: {:?}", input);
        let rules = ctx.data::<MemberRules>()?;
        let service = ctx.data::<MemberService>()?;

        add_member(service, rules, input)
            .await
            .map_err(|e| report("addMember", e))
    }

    /// Overwrite every field of the member with the given id
    async fn edit_member(
        &self,
        ctx: &Context<'_>,
        input: EditMemberRequest,
    ) -> Result<SharedMember> {
        info!("mutation editMember - request: {:?}", input);
        let rules = ctx.data::<MemberRules>()?;
        let service = ctx.data::<MemberService>()?;

        edit_member(service, rules, input)
            .await
            .map_err(|e| report("editMember", e))
    }
}

async fn list_members(ctx: &Context<'_>, operation: &str) -> Result<Vec<SharedMember>> {
    info!("query {}", operation);
    let service = ctx.data::<MemberService>()?;

    all_members(service)
        .await
        .map_err(|e| report(operation, e))
}

async fn all_members(service: &MemberService) -> RegistryResult<Vec<SharedMember>> {
    let members = service.get_all_members().await?;
    Ok(MemberMapper::to_dto_list(members)?)
}

async fn get_member(service: &MemberService, id: Uuid) -> RegistryResult<Option<SharedMember>> {
    let member = service.get_member(id).await?;
    Ok(member.map(MemberMapper::to_dto).transpose()?)
}

async fn add_member(
    service: &MemberService,
    rules: &MemberRules,
    request: AddMemberRequest,
) -> RegistryResult<SharedMember> {
    rules.check_new(&request)?;
    let input = MemberMapper::to_new_member(request)?;
    let member = service.add_member(input).await?;
    Ok(MemberMapper::to_dto(member)?)
}

async fn edit_member(
    service: &MemberService,
    rules: &MemberRules,
    request: EditMemberRequest,
) -> RegistryResult<SharedMember> {
    rules.check_edit(&request)?;
    let member = MemberMapper::to_domain(request)?;
    let member = service.edit_member(member).await?;
    Ok(MemberMapper::to_dto(member)?)
}
