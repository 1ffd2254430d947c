//! Application layer managing state and the signup workflow.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing application state, page routing, and the submission flow.

pub mod state;

pub use state::*;