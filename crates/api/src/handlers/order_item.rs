//! Handlers for order line items under `/orders/{order_id}/items`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauorder_core::error::CoreError;
use bauorder_core::types::DbId;
use bauorder_db::models::order_item::{CreateOrderItem, OrderItem, UpdateOrderItem};
use bauorder_db::repositories::{OrderItemRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthTenant;
use crate::state::AppState;

/// POST /api/v1/orders/{order_id}/items
pub async fn create(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(order_id): Path<DbId>,
    Json(input): Json<CreateOrderItem>,
) -> AppResult<(StatusCode, Json<OrderItem>)> {
    // The store enforces no references; check the parent here.
    OrderRepo::find_by_id(&state.pool, &tenant.tenant_id, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;
    let item = OrderItemRepo::create(&state.pool, &tenant.tenant_id, order_id, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/orders/{order_id}/items
pub async fn list_by_order(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(order_id): Path<DbId>,
) -> AppResult<Json<Vec<OrderItem>>> {
    let items = OrderItemRepo::list_by_order(&state.pool, &tenant.tenant_id, order_id).await?;
    Ok(Json(items))
}

/// PUT /api/v1/orders/{order_id}/items/{id}
pub async fn update(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path((order_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateOrderItem>,
) -> AppResult<Json<OrderItem>> {
    ensure_item_in_order(&state, &tenant, order_id, id).await?;
    let item = OrderItemRepo::update(&state.pool, &tenant.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OrderItem",
            id,
        }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/orders/{order_id}/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path((order_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_item_in_order(&state, &tenant, order_id, id).await?;
    let deleted = OrderItemRepo::delete(&state.pool, &tenant.tenant_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "OrderItem",
            id,
        }))
    }
}

/// 404 unless the item exists and belongs to the order in the path.
async fn ensure_item_in_order(
    state: &AppState,
    tenant: &AuthTenant,
    order_id: DbId,
    id: DbId,
) -> AppResult<()> {
    OrderItemRepo::find_by_id(&state.pool, &tenant.tenant_id, id)
        .await?
        .filter(|item| item.order_id == order_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OrderItem",
            id,
        }))?;
    Ok(())
}
