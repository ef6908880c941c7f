//! Shared domain models and port traits for the neighmap workspace.
//!
//! Everything here is free of IO: address syntax and normalization rules,
//! the neighbor-entry value object, the error type, and the trait boundaries
//! that `neighmap-core` services depend on.

pub mod error;
pub mod exec;
pub mod network;
pub mod platform;
