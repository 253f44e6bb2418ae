//! # Family Registry Backend
//!
//! Stores family members and the parent-child links between them, and serves
//! them over a GraphQL endpoint.
//!
//! ## Architecture
//!
//! - **io**: GraphQL resolvers, wire ↔ canonical mappers and HTTP handlers
//! - **domain**: canonical records, request rules and the member service
//! - **storage**: the keyed store contract with in-memory and SQLite backends
//! - **config**: command-line and environment configuration
//!
//! Enumerations cross two translation tables (wire ↔ canonical and
//! canonical ↔ storage). Both are checked by [`verify_enum_tables`] before the
//! server accepts requests.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use config::{Config, StoreKind};
use domain::{MappingError, MemberRules, MemberService};
use io::graphql::{self, mappers::verify_wire_tables, RegistrySchema};
use storage::records::verify_storage_tables;
use storage::{DbConnection, LinkRepository, LinkStore, MemberRepository, MemberStore, MemoryStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: RegistrySchema,
}

/// Check every enumeration table for missing or duplicated variants
pub fn verify_enum_tables() -> Result<(), MappingError> {
    verify_wire_tables()?;
    verify_storage_tables()?;
    Ok(())
}

/// Build the stores, service and schema described by `config`
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    verify_enum_tables().context("Enumeration tables are inconsistent")?;

    let (members, links): (Arc<dyn MemberStore>, Arc<dyn LinkStore>) = match config.store {
        StoreKind::Memory => {
            info!("Using in-memory store");
            let store = Arc::new(MemoryStore::new());
            (store.clone() as Arc<dyn MemberStore>, store as Arc<dyn LinkStore>)
        }
        StoreKind::Sqlite => {
            let db = DbConnection::new(&config.database_url)
                .await
                .with_context(|| format!("Failed to open database {}", config.database_url))?;
            (
                Arc::new(MemberRepository::new(db.clone())) as Arc<dyn MemberStore>,
                Arc::new(LinkRepository::new(db)) as Arc<dyn LinkStore>,
            )
        }
    };

    let service = MemberService::new(members, links).with_edit_policy(config.edit_policy.into());
    let rules = MemberRules::new(config.description_policy.into());
    info!(
        "Description policy: {:?}, edit policy: {:?}",
        rules.description_policy(),
        service.edit_policy()
    );

    Ok(AppState {
        schema: graphql::build_schema(service, rules),
    })
}

/// Routes for the GraphQL endpoint, the GraphiQL page and the health check
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    let cors = match cors_origin {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin {}", origin))?,
        ),
        None => cors.allow_origin(Any),
    };

    Ok(Router::new()
        .route(
            graphql::GRAPHQL_PATH,
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .route("/health", get(graphql::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
