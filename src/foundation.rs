//! Shared foundation types (errors).

pub mod error;
