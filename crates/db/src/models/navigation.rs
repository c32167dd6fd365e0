//! Read-side projection payloads.

use serde::Serialize;

use crate::models::company::Company;
use crate::models::order::Order;
use crate::models::project::Project;

/// A project's four role references, resolved to company rows.
///
/// Unset and dangling references both resolve to `None`; resolution never
/// fails the projection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvedCompanies {
    pub masonry: Option<Company>,
    pub architect: Option<Company>,
    pub engineer: Option<Company>,
    pub client: Option<Company>,
}

/// A project enriched with its resolved company references.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithCompanies {
    pub project: Project,
    pub companies: ResolvedCompanies,
}

/// One node of the denormalized navigation tree: a project with its
/// resolved companies and its orders.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectTreeNode {
    pub project: Project,
    pub companies: ResolvedCompanies,
    pub orders: Vec<Order>,
}
