//! Onyx Signup - Terminal Registration Client
//!
//! A terminal client for the Onyx Salamander CMS signup form, with
//! client-side validation and JSON submission, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
