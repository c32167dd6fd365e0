//! Integration tests for orders and line items.

use bauorder_db::models::order::{CreateOrder, UpdateOrder};
use bauorder_db::models::order_item::{CreateOrderItem, Dimensions};
use bauorder_db::models::project::{CreateProject, UpdateProject};
use bauorder_db::repositories::{OrderItemRepo, OrderRepo, ProjectRepo};
use sqlx::PgPool;

fn new_project(name: &str, number: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        number: number.to_string(),
        description: None,
        masonry_company_id: None,
        architect_company_id: None,
        engineer_company_id: None,
        client_company_id: None,
        start_date: None,
        end_date: None,
        status: None,
    }
}

fn new_order() -> CreateOrder {
    CreateOrder {
        draft_name: "Rebar draft".to_string(),
        draft_number: "D-1".to_string(),
        order_number: "O-1".to_string(),
        manufacturer_id: "mfr-7".to_string(),
        template_name: "standard".to_string(),
        designer_initials: "ab".to_string(),
        engineer_initials: "cd".to_string(),
        status: None,
    }
}

fn new_item(position: i32, article: &str) -> CreateOrderItem {
    CreateOrderItem {
        position,
        article_number: article.to_string(),
        description: "Anchor bolt".to_string(),
        quantity: 12.0,
        dimensions: Dimensions {
            diameter: Some(16.0),
            length: Some(250.0),
            ..Default::default()
        },
        manufacturer_data: None,
    }
}

// ---------------------------------------------------------------------------
// Test: metadata snapshot (immutable once written)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metadata_snapshots_project_fields(pool: PgPool) {
    let project = ProjectRepo::create(&pool, "t1", &new_project("Bridge", "P-1"))
        .await
        .unwrap();
    let order = OrderRepo::create(&pool, &project, &new_order())
        .await
        .unwrap();

    assert_eq!(order.metadata.project_name, "Bridge");
    assert_eq!(order.metadata.project_number, "P-1");
    assert_eq!(order.status, "draft");

    // Renaming the project leaves the snapshot untouched.
    ProjectRepo::update(
        &pool,
        "t1",
        project.id,
        &UpdateProject {
            name: Some("Bridge (renamed)".to_string()),
            number: Some("P-999".to_string()),
            description: None,
            masonry_company_id: None,
            architect_company_id: None,
            engineer_company_id: None,
            client_company_id: None,
            start_date: None,
            end_date: None,
            status: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    let reread = OrderRepo::find_by_id(&pool, "t1", order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.metadata.project_name, "Bridge");
    assert_eq!(reread.metadata.project_number, "P-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_changes_status_not_metadata(pool: PgPool) {
    let project = ProjectRepo::create(&pool, "t1", &new_project("Bridge", "P-1"))
        .await
        .unwrap();
    let order = OrderRepo::create(&pool, &project, &new_order())
        .await
        .unwrap();

    let updated = OrderRepo::update(
        &pool,
        "t1",
        order.id,
        &UpdateOrder {
            draft_name: None,
            draft_number: None,
            order_number: None,
            manufacturer_id: None,
            template_name: None,
            status: Some(bauorder_core::order::OrderStatus::Submitted),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status, "submitted");
    assert_eq!(updated.metadata.0, order.metadata.0);
}

// ---------------------------------------------------------------------------
// Test: line items list in position order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_items_ordered_by_position(pool: PgPool) {
    let project = ProjectRepo::create(&pool, "t1", &new_project("Bridge", "P-1"))
        .await
        .unwrap();
    let order = OrderRepo::create(&pool, &project, &new_order())
        .await
        .unwrap();

    // Insert out of order.
    OrderItemRepo::create(&pool, "t1", order.id, &new_item(2, "A-3"))
        .await
        .unwrap();
    OrderItemRepo::create(&pool, "t1", order.id, &new_item(0, "A-1"))
        .await
        .unwrap();
    OrderItemRepo::create(&pool, "t1", order.id, &new_item(1, "A-2"))
        .await
        .unwrap();

    let items = OrderItemRepo::list_by_order(&pool, "t1", order.id)
        .await
        .unwrap();
    assert_eq!(items.len(), 3);
    let positions: Vec<_> = items.iter().map(|i| i.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    assert_eq!(items[0].article_number, "A-1");
    assert_eq!(items[0].dimensions.diameter, Some(16.0));
}

// ---------------------------------------------------------------------------
// Test: orders scoped to their project and tenant
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_orders_scoped_to_project(pool: PgPool) {
    let p1 = ProjectRepo::create(&pool, "t1", &new_project("P1", "1"))
        .await
        .unwrap();
    let p2 = ProjectRepo::create(&pool, "t1", &new_project("P2", "2"))
        .await
        .unwrap();

    OrderRepo::create(&pool, &p1, &new_order()).await.unwrap();
    OrderRepo::create(&pool, &p1, &new_order()).await.unwrap();
    OrderRepo::create(&pool, &p2, &new_order()).await.unwrap();

    assert_eq!(
        OrderRepo::list_by_project(&pool, "t1", p1.id)
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        OrderRepo::list_by_project(&pool, "t1", p2.id)
            .await
            .unwrap()
            .len(),
        1
    );
    // Another tenant sees nothing.
    assert!(OrderRepo::list_by_project(&pool, "t2", p1.id)
        .await
        .unwrap()
        .is_empty());
}
