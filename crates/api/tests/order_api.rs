//! HTTP-level integration tests for order endpoints, line items, the PDF
//! stub, and the navigation tree.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

async fn setup_project(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"name": "Bridge", "number": "P-1"}),
        )
        .await,
    )
    .await;
    project["id"].as_i64().unwrap()
}

async fn setup_order(pool: &PgPool, project_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let order = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{project_id}/orders"),
            serde_json::json!({
                "draft_name": "Rebar draft",
                "draft_number": "D-1",
                "order_number": "O-1",
                "manufacturer_id": "mfr-7",
                "template_name": "standard",
                "designer_initials": "ab",
                "engineer_initials": "cd",
            }),
        )
        .await,
    )
    .await;
    order["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_order_snapshots_project_metadata(pool: PgPool) {
    let project_id = setup_project(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/orders"),
        serde_json::json!({
            "draft_name": "Rebar draft",
            "draft_number": "D-1",
            "order_number": "O-1",
            "manufacturer_id": "mfr-7",
            "template_name": "standard",
            "designer_initials": "ab",
            "engineer_initials": "cd",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let order = body_json(response).await;
    assert_eq!(order["status"], "draft");
    assert_eq!(order["metadata"]["project_name"], "Bridge");
    assert_eq!(order["metadata"]["project_number"], "P-1");
    assert_eq!(order["metadata"]["designer_initials"], "ab");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_order_under_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects/999999/orders",
        serde_json::json!({
            "draft_name": "x",
            "draft_number": "x",
            "order_number": "x",
            "manufacturer_id": "x",
            "template_name": "x",
            "designer_initials": "x",
            "engineer_initials": "x",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pdf_stub_returns_the_order(pool: PgPool) {
    let project_id = setup_project(&pool).await;
    let order_id = setup_order(&pool, project_id).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/orders/{order_id}/pdf"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], order_id);
    assert_eq!(json["draft_name"], "Rebar draft");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_items_listed_in_position_order(pool: PgPool) {
    let project_id = setup_project(&pool).await;
    let order_id = setup_order(&pool, project_id).await;

    for (position, article) in [(1, "A-2"), (0, "A-1")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/orders/{order_id}/items"),
            serde_json::json!({
                "position": position,
                "article_number": article,
                "description": "Anchor bolt",
                "quantity": 12.0,
                "dimensions": {"diameter": 16.0, "length": 250.0},
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let items = body_json(get(app, &format!("/api/v1/orders/{order_id}/items")).await).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["article_number"], "A-1");
    assert_eq!(items[1]["article_number"], "A-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_navigation_tree_nests_orders(pool: PgPool) {
    let project_id = setup_project(&pool).await;
    setup_order(&pool, project_id).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/navigation/tree").await;
    assert_eq!(response.status(), StatusCode::OK);

    let tree = body_json(response).await;
    let nodes = tree.as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["project"]["id"], project_id);
    assert_eq!(nodes[0]["orders"].as_array().unwrap().len(), 1);
    assert!(nodes[0]["companies"]["masonry"].is_null());
}
