//! Domain types shared by the db and api crates.
//!
//! Pure logic only: enums backing TEXT columns, role-assignment
//! partitioning, the company-name matcher, and the common error type.
//! Nothing in here touches the database.

pub mod assignment;
pub mod company;
pub mod error;
pub mod order;
pub mod project;
pub mod search;
pub mod types;
