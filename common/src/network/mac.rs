//! # Hardware Address Syntax
//!
//! Validation and normalization rules for link-layer addresses as callers
//! and the OS tables spell them:
//! * **Callers**: six two-digit hex groups, `:` or `-` separated, any case.
//! * **BSD `arp`**: like the above but with leading zeros dropped per group.
//!
//! The canonical text form is the [`MacAddr`] `Display` output: lowercase,
//! zero-padded, colon-separated.

use std::str::FromStr;

use once_cell::sync::Lazy;
use pnet::datalink::MacAddr;
use regex::Regex;

use crate::error::ResolveError;

static HW_ADDR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$")
        .expect("invalid hardware address pattern")
});

/// Whether `s` has valid hardware-address syntax.
pub fn is_hardware_addr(s: &str) -> bool {
    HW_ADDR_RE.is_match(s)
}

/// Rewrites separators to colons and letters to lowercase.
pub fn normalize(s: &str) -> String {
    s.replace('-', ":").to_ascii_lowercase()
}

/// Zero-pads octet groups shorter than two characters, normalizing along
/// the way. BSD `arp` prints `a:b:c:d:e:f` for `0a:0b:0c:0d:0e:0f`.
pub fn pad_short_octets(s: &str) -> String {
    normalize(s)
        .split(':')
        .map(|octet| {
            if octet.len() == 1 {
                format!("0{octet}")
            } else {
                octet.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}

/// Parses a caller- or table-supplied hardware address into a [`MacAddr`],
/// rejecting anything that fails the syntax check first.
pub fn parse_hardware_addr(s: &str) -> Result<MacAddr, ResolveError> {
    if !is_hardware_addr(s) {
        return Err(ResolveError::InvalidHardwareAddress(s.to_string()));
    }
    MacAddr::from_str(&normalize(s))
        .map_err(|_| ResolveError::InvalidHardwareAddress(s.to_string()))
}
