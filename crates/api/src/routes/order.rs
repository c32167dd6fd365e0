//! Route definitions for the `/orders` resource.
//!
//! Order creation lives under `/projects/{project_id}/orders`; this
//! router covers single-order operations and nested line items.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{order, order_item};
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /{id}                       -> get_by_id
/// PUT    /{id}                       -> update
/// DELETE /{id}                       -> delete
/// POST   /{id}/pdf                   -> generate_pdf (stub)
///
/// GET    /{order_id}/items           -> item list_by_order
/// POST   /{order_id}/items           -> item create
/// PUT    /{order_id}/items/{id}      -> item update
/// DELETE /{order_id}/items/{id}      -> item delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(order::get_by_id)
                .put(order::update)
                .delete(order::delete),
        )
        .route("/{id}/pdf", post(order::generate_pdf))
        .route(
            "/{order_id}/items",
            get(order_item::list_by_order).post(order_item::create),
        )
        .route(
            "/{order_id}/items/{id}",
            put(order_item::update).delete(order_item::delete),
        )
}
