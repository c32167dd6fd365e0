//! HTTP-level integration tests for company endpoints, tenant isolation,
//! and the authentication paths.

mod common;

use axum::http::{Method, StatusCode};
use common::{bearer_for, body_json, get, post_json, send};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Tree and search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_companies_tree_groups_by_type(pool: PgPool) {
    for (name, company_type) in [
        ("M1", "masonry"),
        ("M2", "masonry"),
        ("A1", "architect"),
    ] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": name, "company_type": company_type}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/companies/tree").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["masonry"].as_array().unwrap().len(), 2);
    assert_eq!(json["architect"].as_array().unwrap().len(), 1);
    // Types with zero companies are absent, not empty lists.
    assert!(json.get("engineer").is_none());
    assert!(json.get("client").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_search_filters_by_substring(pool: PgPool) {
    for name in ["Mason Bros", "ACME"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": name, "company_type": "masonry"}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/companies/search?q=mas").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Mason Bros");
}

// ---------------------------------------------------------------------------
// Tenant isolation and auth paths
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_default_tenant_is_invisible_to_others(pool: PgPool) {
    // No Authorization header: operates on the "default" tenant.
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/companies",
            serde_json::json!({"name": "Mason Bros", "company_type": "masonry"}),
        )
        .await,
    )
    .await;
    assert_eq!(created["tenant_id"], "default");

    // A different tenant sees nothing.
    let app = common::build_test_app(pool.clone());
    let auth = bearer_for("tenant-b");
    let response = send(app, Method::GET, "/api/v1/companies", None, Some(&auth)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());

    // The default tenant still sees its company.
    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/api/v1/companies").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_bearer_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = send(
        app,
        Method::GET,
        "/api/v1/companies",
        None,
        Some("Bearer not-a-token"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_authorization_header_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = send(
        app,
        Method::GET,
        "/api/v1/companies",
        None,
        Some("Basic dXNlcjpwdw=="),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_company_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/companies",
        serde_json::json!({"name": "Plumb Co", "company_type": "plumber"}),
    )
    .await;
    // Serde rejects the unknown enum variant before any write happens.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
