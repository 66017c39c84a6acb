//! Sales summary API server library.
//!
//! Exposes the building blocks (config, state, error handling, DTOs, header
//! builders, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod headers;
pub mod mapper;
pub mod pagination;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
