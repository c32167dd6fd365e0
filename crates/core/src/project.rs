//! Project lifecycle status.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status values for a project, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "planning" => Ok(Self::Planning),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "on_hold" => Ok(Self::OnHold),
            _ => Err(CoreError::Validation(format!(
                "Invalid project status '{s}'. Must be one of: planning, active, completed, on_hold"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_db_string() {
        for status in [
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::Completed,
            ProjectStatus::OnHold,
        ] {
            assert_eq!(ProjectStatus::from_str_db(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn on_hold_uses_snake_case() {
        assert_eq!(ProjectStatus::OnHold.as_str(), "on_hold");
        let parsed: ProjectStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(parsed, ProjectStatus::OnHold);
    }
}
