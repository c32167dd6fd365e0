//! Route definitions for the `/pending-companies` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::pending_company;
use crate::state::AppState;

/// Routes mounted at `/pending-companies`.
///
/// ```text
/// GET    /               -> list
/// POST   /{id}/complete  -> complete (resolve into a company)
/// DELETE /{id}           -> remove (explicit discard)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pending_company::list))
        .route("/{id}/complete", post(pending_company::complete))
        .route("/{id}", delete(pending_company::remove))
}
