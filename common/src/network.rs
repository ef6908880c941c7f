//! Network-address domain types and syntax rules.

pub mod mac;
pub mod neighbor;
