//! Company roles.
//!
//! A company participates in a project in exactly one capacity. The role
//! doubles as the company's own type (a masonry company stays a masonry
//! company across projects), so the same enum backs both the
//! `companies.company_type` and `pending_companies.company_type` columns.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The capacity in which a company participates in a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyRole {
    Masonry,
    Architect,
    Engineer,
    Client,
}

/// All roles, in the order the project columns are declared.
pub const ALL_ROLES: [CompanyRole; 4] = [
    CompanyRole::Masonry,
    CompanyRole::Architect,
    CompanyRole::Engineer,
    CompanyRole::Client,
];

impl CompanyRole {
    /// Parse a role string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "masonry" => Ok(Self::Masonry),
            "architect" => Ok(Self::Architect),
            "engineer" => Ok(Self::Engineer),
            "client" => Ok(Self::Client),
            _ => Err(CoreError::Validation(format!(
                "Invalid company role '{s}'. Must be one of: masonry, architect, engineer, client"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masonry => "masonry",
            Self::Architect => "architect",
            Self::Engineer => "engineer",
            Self::Client => "client",
        }
    }

    /// The `projects` column holding the reference for this role.
    pub fn fk_column(&self) -> &'static str {
        match self {
            Self::Masonry => "masonry_company_id",
            Self::Architect => "architect_company_id",
            Self::Engineer => "engineer_company_id",
            Self::Client => "client_company_id",
        }
    }
}
