//! Order status.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status values for a manufacturer order, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Submitted,
}

impl OrderStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            _ => Err(CoreError::Validation(format!(
                "Invalid order status '{s}'. Must be one of: draft, submitted"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_db_string() {
        for status in [OrderStatus::Draft, OrderStatus::Submitted] {
            assert_eq!(OrderStatus::from_str_db(status.as_str()).unwrap(), status);
        }
    }
}
