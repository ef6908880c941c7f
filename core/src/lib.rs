//! Neighbor-cache lookups backed by the OS `arp` utility.
//!
//! The service layer ([`resolver`]) depends only on the port traits in
//! `neighmap-common`; the concrete shell adapter lives in [`exec`] and the
//! pure per-platform output parsers in [`table`].

pub mod exec;
pub mod resolver;
pub mod table;
