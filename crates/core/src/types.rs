/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Tenant used when no identity is present (unauthenticated/dev paths).
pub const DEFAULT_TENANT: &str = "default";
