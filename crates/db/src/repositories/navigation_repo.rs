//! Read-side projection: the denormalized navigation tree.

use sqlx::PgPool;

use crate::models::navigation::ProjectTreeNode;
use crate::repositories::{OrderRepo, ProjectRepo};

/// Assembles tree projections for display.
pub struct NavigationRepo;

impl NavigationRepo {
    /// Every project of the tenant, in tenant index order, with its
    /// orders and all four role references resolved.
    ///
    /// Role resolution runs the four lookups concurrently per project and
    /// tolerates unset or dangling ids (they resolve to null) without
    /// failing the projection.
    pub async fn get_navigation_tree(
        pool: &PgPool,
        tenant_id: &str,
    ) -> Result<Vec<ProjectTreeNode>, sqlx::Error> {
        let projects = ProjectRepo::list_by_tenant(pool, tenant_id).await?;
        let mut tree = Vec::with_capacity(projects.len());

        for project in projects {
            let companies = ProjectRepo::resolve_companies(pool, &project).await?;
            let orders = OrderRepo::list_by_project(pool, tenant_id, project.id).await?;
            tree.push(ProjectTreeNode {
                project,
                companies,
                orders,
            });
        }

        Ok(tree)
    }
}
