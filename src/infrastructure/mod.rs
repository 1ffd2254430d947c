//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP client for the registration backend
//! and other system-level operations.

pub mod api;

pub use api::*;
