//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! `navigation` holds the read-side projection payloads.

pub mod company;
pub mod navigation;
pub mod order;
pub mod order_item;
pub mod part;
pub mod pending_company;
pub mod project;
