//! Route definitions for the `/projects` resource.
//!
//! Also nests part and order routes under `/projects/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{order, part, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// POST   /with-companies                    -> create_with_companies
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /{id}/with-companies               -> get_with_companies
/// GET    /{id}/pending-companies            -> list_pending_companies
///
/// GET    /{project_id}/parts                -> part list_by_project
/// POST   /{project_id}/parts                -> part create
///
/// GET    /{project_id}/orders               -> order list_by_project
/// POST   /{project_id}/orders               -> order create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/with-companies", post(project::create_with_companies))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/with-companies", get(project::get_with_companies))
        .route(
            "/{id}/pending-companies",
            get(project::list_pending_companies),
        )
        .route(
            "/{project_id}/parts",
            get(part::list_by_project).post(part::create),
        )
        .route(
            "/{project_id}/orders",
            get(order::list_by_project).post(order::create),
        )
}
