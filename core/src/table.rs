//! Per-platform parsers for neighbor-cache listings.
//!
//! Each parser is a pure function from raw command output to entries, so row
//! handling can be tested against fixture text without spawning a process.
//! Rows that do not fit the expected shape are skipped, never errors:
//! headers, blank lines, and incomplete entries are normal output.

use std::net::IpAddr;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use neighmap_common::network::mac;
use neighmap_common::network::neighbor::{BindingKind, NeighborEntry};
use neighmap_common::platform::Platform;

/// BSD/Linux `arp -an` row: IP inside parentheses, then a hardware-address
/// token directly followed by `[ether]` (Linux) or `on` (BSD). Octet groups
/// may be a single digit. Rows with extra tokens between address and marker
/// are intentionally left unmatched.
static POSIX_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((.*?)\) \w+ (.{0,17}) (?:\[ether\]|on)").expect("invalid posix row pattern")
});

/// Parses a full table dump, keeping admissible rows in encounter order.
pub fn parse(platform: Platform, raw: &str) -> Vec<NeighborEntry> {
    let parse_row = match platform {
        Platform::Windows => parse_windows_row,
        Platform::Posix => parse_posix_row,
    };
    raw.lines()
        .filter_map(|line| {
            let entry = parse_row(line);
            if entry.is_none() && !line.trim().is_empty() {
                trace!(line, "skipping unparseable neighbor row");
            }
            entry
        })
        .collect()
}

/// Windows `arp -a` row: three whitespace-separated columns,
/// `<ip> <mac> <kind>`. Any other column count is a header or noise.
fn parse_windows_row(line: &str) -> Option<NeighborEntry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [ip, hw, kind] = tokens.as_slice() else {
        return None;
    };
    entry(ip, hw, BindingKind::from_token(kind))
}

fn parse_posix_row(line: &str) -> Option<NeighborEntry> {
    let caps = POSIX_ROW_RE.captures(line)?;
    let ip = caps.get(1)?.as_str();
    let hw = mac::pad_short_octets(caps.get(2)?.as_str());
    // Plain `arp -an` output carries no binding-kind column.
    entry(ip, &hw, BindingKind::Unknown)
}

/// Admission gate shared by both formats: a row survives only when the IP
/// token is a valid literal and the hardware token has canonical syntax.
fn entry(ip: &str, hw: &str, kind: BindingKind) -> Option<NeighborEntry> {
    if IpAddr::from_str(ip).is_err() {
        return None;
    }
    let mac = mac::parse_hardware_addr(hw).ok()?;
    Some(NeighborEntry {
        ip: ip.to_string(),
        mac,
        kind,
    })
}
