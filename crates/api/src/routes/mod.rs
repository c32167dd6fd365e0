//! Route definitions, one module per resource.

pub mod company;
pub mod health;
pub mod navigation;
pub mod order;
pub mod part;
pub mod pending_company;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /companies                                  list, create
/// /companies/tree                             grouped by type
/// /companies/search                           substring search
/// /companies/{id}                             get, update, delete
///
/// /projects                                   list, create
/// /projects/with-companies                    two-phase create
/// /projects/{id}                              get, update, delete
/// /projects/{id}/with-companies               resolved role references
/// /projects/{id}/pending-companies            placeholders for one project
/// /projects/{project_id}/parts                list, create
/// /projects/{project_id}/orders               list, create
///
/// /pending-companies                          list for tenant
/// /pending-companies/{id}/complete            resolve into a company
/// /pending-companies/{id}                     discard
///
/// /orders/{id}                                get, update, delete
/// /orders/{id}/pdf                            pass-through draft stub
/// /orders/{order_id}/items                    list, create
/// /orders/{order_id}/items/{id}               update, delete
///
/// /parts/{id}                                 get, update, delete
///
/// /navigation/tree                            denormalized project tree
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", company::router())
        .nest("/projects", project::router())
        .nest("/pending-companies", pending_company::router())
        .nest("/orders", order::router())
        .nest("/parts", part::router())
        .nest("/navigation", navigation::router())
}
