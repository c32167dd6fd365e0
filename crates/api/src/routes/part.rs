//! Route definitions for the `/parts` resource.
//!
//! Part creation lives under `/projects/{project_id}/parts`; this router
//! covers single-part operations.

use axum::routing::get;
use axum::Router;

use crate::handlers::part;
use crate::state::AppState;

/// Routes mounted at `/parts`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(part::get_by_id).put(part::update).delete(part::delete),
    )
}
