//! Handler for the navigation tree projection.

use axum::extract::State;
use axum::Json;
use bauorder_db::models::navigation::ProjectTreeNode;
use bauorder_db::repositories::NavigationRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthTenant;
use crate::state::AppState;

/// GET /api/v1/navigation/tree
pub async fn tree(
    State(state): State<AppState>,
    tenant: AuthTenant,
) -> AppResult<Json<Vec<ProjectTreeNode>>> {
    let tree = NavigationRepo::get_navigation_tree(&state.pool, &tenant.tenant_id).await?;
    Ok(Json(tree))
}
