//! # GraphQL API for Links
//!
//! Links are read-only through the API.

use async_graphql::{Context, Object, Result};
use shared::Link as SharedLink;
use tracing::info;

use super::errors::report;
use super::mappers::LinkMapper;
use crate::domain::{MemberService, RegistryResult};

#[derive(Default)]
pub struct LinkQuery;

#[Object]
impl LinkQuery {
    /// Every stored parent-child link
    async fn links(&self, ctx: &Context<'_>) -> Result<Vec<SharedLink>> {
        list_links(ctx, "links").await
    }

    /// Same as `links`
    async fn get_all_links(&self, ctx: &Context<'_>) -> Result<Vec<SharedLink>> {
        list_links(ctx, "getAllLinks").await
    }
}

async fn list_links(ctx: &Context<'_>, operation: &str) -> Result<Vec<SharedLink>> {
    info!("query {}", operation);
    let service = ctx.data::<MemberService>()?;

    all_links(service)
        .await
        .map_err(|e| report(operation, e))
}

async fn all_links(service: &MemberService) -> RegistryResult<Vec<SharedLink>> {
    let links = service.get_all_links().await?;
    Ok(LinkMapper::to_dto_list(links)?)
}
