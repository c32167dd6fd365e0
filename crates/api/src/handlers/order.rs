//! Handlers for orders, nested under `/projects/{project_id}/orders` and
//! addressable at `/orders/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauorder_core::error::CoreError;
use bauorder_core::types::DbId;
use bauorder_db::models::order::{CreateOrder, Order, UpdateOrder};
use bauorder_db::repositories::{OrderRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthTenant;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/orders
///
/// Loads the project first so the metadata snapshot reflects its current
/// name and number.
pub async fn create(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let project = ProjectRepo::find_by_id(&state.pool, &tenant.tenant_id, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    let order = OrderRepo::create(&state.pool, &project, &input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/v1/projects/{project_id}/orders
pub async fn list_by_project(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = OrderRepo::list_by_project(&state.pool, &tenant.tenant_id, project_id).await?;
    Ok(Json(orders))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::find_by_id(&state.pool, &tenant.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(order))
}

/// PUT /api/v1/orders/{id}
pub async fn update(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrder>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::update(&state.pool, &tenant.tenant_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(order))
}

/// DELETE /api/v1/orders/{id}
pub async fn delete(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OrderRepo::delete(&state.pool, &tenant.tenant_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))
    }
}

/// POST /api/v1/orders/{id}/pdf
///
/// Rendering is a stub: fetches the order and returns it unchanged so the
/// client contract is in place before a renderer exists.
pub async fn generate_pdf(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<DbId>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::find_by_id(&state.pool, &tenant.tenant_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    tracing::info!(order_id = order.id, "generating PDF for order");
    Ok(Json(order))
}
