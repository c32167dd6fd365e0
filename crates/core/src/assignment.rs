//! Role assignments for project creation.
//!
//! A project-creation request carries, per role, either an existing
//! company id, a free-text name for a company that does not exist yet, or
//! nothing. The tagged enum replaces string-shape sniffing at the call
//! boundary: callers state which case they mean.

use serde::{Deserialize, Serialize};

use crate::company::{CompanyRole, ALL_ROLES};
use crate::types::DbId;

/// One role slot in a project-creation request.
///
/// Serialized externally tagged: `"unassigned"`, `{"existing": 42}`, or
/// `{"new": "Mason Bros"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAssignment {
    /// No company for this role.
    #[default]
    Unassigned,
    /// Reference an existing company by id.
    Existing(DbId),
    /// Queue a placeholder company with this name.
    New(String),
}

/// The four role slots of a project-creation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignments {
    #[serde(default)]
    pub masonry: RoleAssignment,
    #[serde(default)]
    pub architect: RoleAssignment,
    #[serde(default)]
    pub engineer: RoleAssignment,
    #[serde(default)]
    pub client: RoleAssignment,
}

impl RoleAssignments {
    /// Borrow the slot for a role.
    pub fn get(&self, role: CompanyRole) -> &RoleAssignment {
        match role {
            CompanyRole::Masonry => &self.masonry,
            CompanyRole::Architect => &self.architect,
            CompanyRole::Engineer => &self.engineer,
            CompanyRole::Client => &self.client,
        }
    }

    /// Roles assigned to an existing company id.
    pub fn existing(&self) -> Vec<(CompanyRole, DbId)> {
        ALL_ROLES
            .iter()
            .filter_map(|&role| match self.get(role) {
                RoleAssignment::Existing(id) => Some((role, *id)),
                _ => None,
            })
            .collect()
    }

    /// Roles given a free-text name, in declaration order.
    ///
    /// Names are trimmed; blank names count as unassigned.
    pub fn new_names(&self) -> Vec<(CompanyRole, String)> {
        ALL_ROLES
            .iter()
            .filter_map(|&role| match self.get(role) {
                RoleAssignment::New(name) if !name.trim().is_empty() => {
                    Some((role, name.trim().to_string()))
                }
                _ => None,
            })
            .collect()
    }

    /// The existing id assigned to a role, if any.
    pub fn existing_id(&self, role: CompanyRole) -> Option<DbId> {
        match self.get(role) {
            RoleAssignment::Existing(id) => Some(*id),
            _ => None,
        }
    }
}
