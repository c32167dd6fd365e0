//! Identity handling: JWT configuration and token validation.

pub mod jwt;
