//! # GraphQL Query Surface
//!
//! Binds the five external operations to `MemberService`:
//!
//! - `getAllMembers` / `nodes`, `getFamilyMember(id)`: member reads
//! - `addMember(input)`, `editMember(input)`: member writes
//! - `links` / `getAllLinks`: link reads
//!
//! Each write runs `MemberRules` first, then the wire → canonical mapper,
//! then the service; results go back through the canonical → wire mapper.

pub mod errors;
pub mod link_apis;
pub mod mappers;
pub mod member_apis;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};
use serde_json::json;

use crate::domain::{MemberRules, MemberService};
use crate::AppState;
use link_apis::LinkQuery;
use member_apis::{MemberMutation, MemberQuery};

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(MemberQuery, LinkQuery);

pub type RegistrySchema = Schema<QueryRoot, MemberMutation, EmptySubscription>;

/// Build the schema with the service and rules as shared context data
pub fn build_schema(service: MemberService, rules: MemberRules) -> RegistrySchema {
    Schema::build(QueryRoot::default(), MemberMutation, EmptySubscription)
        .data(service)
        .data(rules)
        .finish()
}

/// POST /graphql
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// GET /graphql - GraphiQL explorer
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_graphql::{Request, Variables};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request as HttpRequest, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::domain::{DescriptionPolicy, EditPolicy};
    use crate::storage::{
        DbConnection, LinkRecord, LinkStore, MemberRecord, MemberRepository, MemberStore,
        MemoryStore, StorageError, StorageResult, StoredParent,
    };
    use crate::{create_router, initialize_backend};

    const ADD_MEMBER: &str = r#"
        mutation Add($input: AddMemberInput!) {
            addMember(input: $input) { id firstName lastName description gender dob }
        }
    "#;

    const EDIT_MEMBER: &str = r#"
        mutation Edit($input: EditMemberInput!) {
            editMember(input: $input) { id firstName lastName description gender dob }
        }
    "#;

    const GET_MEMBER: &str = r#"
        query Get($id: UUID!) {
            getFamilyMember(id: $id) { id firstName lastName description gender dob }
        }
    "#;

    /// Member store that counts writes before delegating to memory
    #[derive(Clone, Default)]
    struct CountingStore {
        inner: MemoryStore,
        saves: Arc<AtomicUsize>,
    }

    impl CountingStore {
        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MemberStore for CountingStore {
        async fn save_member(&self, record: MemberRecord) -> StorageResult<MemberRecord> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save_member(record).await
        }

        async fn find_member(&self, id: Uuid) -> StorageResult<Option<MemberRecord>> {
            self.inner.find_member(id).await
        }

        async fn list_members(&self) -> StorageResult<Vec<MemberRecord>> {
            self.inner.list_members().await
        }
    }

    /// Member store that fails every call the way an unreachable database does
    struct UnavailableStore;

    #[async_trait]
    impl MemberStore for UnavailableStore {
        async fn save_member(&self, _record: MemberRecord) -> StorageResult<MemberRecord> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find_member(&self, _id: Uuid) -> StorageResult<Option<MemberRecord>> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn list_members(&self) -> StorageResult<Vec<MemberRecord>> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn setup_schema(store: &CountingStore, policy: EditPolicy) -> RegistrySchema {
        let service = MemberService::new(Arc::new(store.clone()), Arc::new(store.inner.clone()))
            .with_edit_policy(policy);
        build_schema(service, MemberRules::default())
    }

    async fn execute(schema: &RegistrySchema, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = schema.execute(request).await;
        serde_json::to_value(&response).unwrap()
    }

    fn john() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "description": "Test",
            "gender": "MALE",
            "dob": "1990-01-15"
        })
    }

    async fn add_john(schema: &RegistrySchema) -> String {
        let added = execute(schema, ADD_MEMBER, json!({ "input": john() })).await;
        added["data"]["addMember"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_add_then_get_member() {
        let store = CountingStore::default();
        let schema = setup_schema(&store, EditPolicy::Upsert);

        let added = execute(&schema, ADD_MEMBER, json!({ "input": john() })).await;
        assert!(added.get("errors").is_none(), "unexpected errors: {}", added);

        let member = &added["data"]["addMember"];
        let id = member["id"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(member["firstName"], "John");
        assert_eq!(member["gender"], "MALE");
        assert_eq!(member["dob"], "1990-01-15");

        let fetched = execute(&schema, GET_MEMBER, json!({ "id": id })).await;
        assert_eq!(&fetched["data"]["getFamilyMember"], member);

        let listed = execute(&schema, "{ getAllMembers { id } nodes { id } }", json!({})).await;
        assert_eq!(listed["data"]["getAllMembers"], json!([{ "id": id }]));
        assert_eq!(listed["data"]["nodes"], listed["data"]["getAllMembers"]);
    }

    #[tokio::test]
    async fn test_edit_member_overwrites_fields() {
        let store = CountingStore::default();
        let schema = setup_schema(&store, EditPolicy::Upsert);
        let id = add_john(&schema).await;

        let edited = execute(
            &schema,
            EDIT_MEMBER,
            json!({
                "input": {
                    "id": id,
                    "firstName": "John",
                    "lastName": "Smith",
                    "description": "Updated",
                    "dob": "1990-01-15"
                }
            }),
        )
        .await;
        assert!(edited.get("errors").is_none(), "unexpected errors: {}", edited);

        let fetched = execute(&schema, GET_MEMBER, json!({ "id": id })).await;
        let member = &fetched["data"]["getFamilyMember"];
        assert_eq!(member["lastName"], "Smith");
        assert_eq!(member["description"], "Updated");
        assert_eq!(member["gender"], Value::Null);
    }

    #[tokio::test]
    async fn test_blank_first_name_is_rejected_before_storage() {
        let store = CountingStore::default();
        let schema = setup_schema(&store, EditPolicy::Upsert);

        let mut input = john();
        input["firstName"] = json!("   ");
        let response = execute(&schema, ADD_MEMBER, json!({ "input": input })).await;

        assert_eq!(response["data"], Value::Null);
        let extensions = &response["errors"][0]["extensions"];
        assert_eq!(extensions["code"], "VALIDATION_FAILED");
        assert_eq!(extensions["fields"], json!(["firstName"]));
        assert_eq!(
            extensions["violations"],
            json!(["firstName: First name is required"])
        );
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_every_missing_field_is_reported_in_order() {
        let store = CountingStore::default();
        let service = MemberService::new(Arc::new(store.clone()), Arc::new(store.inner.clone()));
        let schema = build_schema(service, MemberRules::new(DescriptionPolicy::Always));

        let response = execute(&schema, EDIT_MEMBER, json!({ "input": {} })).await;

        let extensions = &response["errors"][0]["extensions"];
        assert_eq!(
            extensions["fields"],
            json!(["id", "firstName", "lastName", "description", "dob"])
        );
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_edit_without_description_is_accepted_by_default() {
        let store = CountingStore::default();
        let schema = setup_schema(&store, EditPolicy::Upsert);
        let id = add_john(&schema).await;

        let response = execute(
            &schema,
            EDIT_MEMBER,
            json!({
                "input": {
                    "id": id,
                    "firstName": "John",
                    "lastName": "Doe",
                    "dob": "1990-01-15"
                }
            }),
        )
        .await;

        assert!(response.get("errors").is_none(), "unexpected errors: {}", response);
        assert_eq!(response["data"]["editMember"]["description"], Value::Null);
        assert_eq!(store.saves(), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported_with_its_message() {
        let service = MemberService::new(Arc::new(UnavailableStore), Arc::new(MemoryStore::new()));
        let schema = build_schema(service, MemberRules::default());
        let expected = StorageError::Database(sqlx::Error::PoolTimedOut).to_string();

        for response in [
            execute(&schema, "{ getAllMembers { id } }", json!({})).await,
            execute(&schema, ADD_MEMBER, json!({ "input": john() })).await,
        ] {
            assert_eq!(response["errors"][0]["extensions"]["code"], "STORAGE_FAILURE");
            assert_eq!(response["errors"][0]["message"], expected);
        }
    }

    #[tokio::test]
    async fn test_unknown_stored_gender_is_an_enum_mismatch() {
        let db = DbConnection::in_memory().await.unwrap();
        sqlx::query(
            "INSERT INTO members (id, first_name, last_name, description, gender, dob) VALUES (?, 'Pat', 'Lee', NULL, 'OTHER', '2001-02-03')",
        )
        .bind(Uuid::new_v4().to_string())
        .execute(db.pool())
        .await
        .unwrap();

        let service = MemberService::new(
            Arc::new(MemberRepository::new(db)),
            Arc::new(MemoryStore::new()),
        );
        let schema = build_schema(service, MemberRules::default());

        let response = execute(&schema, "{ getAllMembers { id gender } }", json!({})).await;
        assert_eq!(response["data"], Value::Null);
        assert_eq!(response["errors"][0]["extensions"]["code"], "ENUM_MISMATCH");
        assert_eq!(
            response["errors"][0]["message"],
            "unrecognized gender value: OTHER"
        );
    }

    #[tokio::test]
    async fn test_optional_description_policy_accepts_missing_description() {
        let store = CountingStore::default();
        let service = MemberService::new(Arc::new(store.clone()), Arc::new(store.inner.clone()));
        let schema = build_schema(service, MemberRules::new(DescriptionPolicy::Optional));

        let mut input = john();
        input["description"] = Value::Null;
        let response = execute(&schema, ADD_MEMBER, json!({ "input": input })).await;

        assert!(response.get("errors").is_none(), "unexpected errors: {}", response);
        assert_eq!(response["data"]["addMember"]["description"], Value::Null);
        assert_eq!(store.saves(), 1);
    }

    #[tokio::test]
    async fn test_unknown_member_is_null() {
        let store = CountingStore::default();
        let schema = setup_schema(&store, EditPolicy::Upsert);

        let response = execute(&schema, GET_MEMBER, json!({ "id": Uuid::new_v4() })).await;

        assert!(response.get("errors").is_none());
        assert_eq!(response["data"]["getFamilyMember"], Value::Null);
    }

    #[tokio::test]
    async fn test_edit_unknown_member_when_existence_required() {
        let store = CountingStore::default();
        let schema = setup_schema(&store, EditPolicy::RequireExisting);
        let id = Uuid::new_v4();

        let mut input = john();
        input["id"] = json!(id);
        let response = execute(&schema, EDIT_MEMBER, json!({ "input": input })).await;

        assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_links_are_listed_under_both_names() {
        let store = CountingStore::default();
        let schema = setup_schema(&store, EditPolicy::Upsert);
        let father = add_john(&schema).await;
        let child = add_john(&schema).await;

        store
            .inner
            .save_link(LinkRecord {
                id: None,
                source: Uuid::parse_str(&father).unwrap(),
                target: Uuid::parse_str(&child).unwrap(),
                parent: StoredParent::Father,
            })
            .await
            .unwrap();

        let response = execute(
            &schema,
            "{ links { source target parent } getAllLinks { source target parent } }",
            json!({}),
        )
        .await;

        let expected = json!([{ "source": father, "target": child, "parent": "FATHER" }]);
        assert_eq!(response["data"]["links"], expected);
        assert_eq!(response["data"]["getAllLinks"], expected);
    }

    #[tokio::test]
    async fn test_router_serves_health_and_graphql() {
        let store = CountingStore::default();
        let state = AppState {
            schema: setup_schema(&store, EditPolicy::Upsert),
        };
        let app = create_router(state, None).unwrap();

        let health = app
            .clone()
            .oneshot(
                HttpRequest::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
        let body = to_bytes(health.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "status": "ok" })
        );

        let query = json!({ "query": "{ getAllMembers { id } }" });
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(query.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "data": { "getAllMembers": [] } })
        );
    }

    #[tokio::test]
    async fn test_initialized_backend_serves_added_members() {
        let state = initialize_backend(&Config::in_memory()).await.unwrap();

        let id = add_john(&state.schema).await;
        let listed = execute(&state.schema, "{ getAllMembers { id } }", json!({})).await;
        assert_eq!(listed["data"]["getAllMembers"], json!([{ "id": id }]));

        let edited = execute(
            &state.schema,
            EDIT_MEMBER,
            json!({ "input": { "id": Uuid::new_v4() } }),
        )
        .await;
        assert_eq!(
            edited["errors"][0]["extensions"]["fields"],
            json!(["firstName", "lastName", "dob"])
        );
    }

    #[tokio::test]
    async fn test_invalid_cors_origin_is_rejected() {
        let store = CountingStore::default();
        let state = AppState {
            schema: setup_schema(&store, EditPolicy::Upsert),
        };
        assert!(create_router(state, Some("bad\norigin")).is_err());
    }
}
