//! Route definitions for the `/navigation` projections.

use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Routes mounted at `/navigation`.
///
/// ```text
/// GET /tree  -> tree
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/tree", get(navigation::tree))
}
