//! Utility helpers shared across layers.
//!
//! - [`slug_generator`] - Random candidate slug generation
//! - [`db_error`] - SQLx error classification

pub mod db_error;
pub mod slug_generator;
