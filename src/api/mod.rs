//! HTTP layer translating requests into core operations.
//!
//! # Modules
//!
//! - [`dto`] - Request/response shapes and query parameter parsing
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table
//! - [`session`] - Owner session cookie

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
