//! Route definitions for the `/companies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /tree        -> tree
/// GET    /search      -> search
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(company::list).post(company::create))
        .route("/tree", get(company::tree))
        .route("/search", get(company::search))
        .route(
            "/{id}",
            get(company::get_by_id)
                .put(company::update)
                .delete(company::delete),
        )
}
