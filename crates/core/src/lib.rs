//! Shared types for the sales summary service: identifiers, the domain
//! error type and the pagination model used by every layer.

pub mod error;
pub mod pagination;
pub mod types;
