//! Errors raised by the multi-step workflows.

use bauorder_core::types::DbId;

/// Error type for repository operations that span multiple writes.
///
/// Project creation persists the project first and the pending-company
/// batch second, deliberately without a transaction. A failure between the
/// two leaves the project in place with fewer pending rows than the role
/// assignments implied; that state is reported, never retried or rolled
/// back.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),

    #[error("project {project_id} was created with {created} of {expected} pending companies")]
    PartialCompletion {
        project_id: DbId,
        created: usize,
        expected: usize,
        #[source]
        source: sqlx::Error,
    },
}
