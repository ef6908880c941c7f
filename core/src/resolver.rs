//! # Neighbor Resolution Service
//!
//! Implements the two point lookups against the OS neighbor cache: hardware
//! address to network address and back.
//!
//! The service owns a [`CommandRunner`] collaborator and delegates process
//! execution to it, keeping this layer testable with canned table output.

use std::net::IpAddr;
use std::str::FromStr;

use tracing::debug;

use neighmap_common::error::ResolveError;
use neighmap_common::exec::CommandRunner;
use neighmap_common::network::mac;
use neighmap_common::network::neighbor::NeighborEntry;
use neighmap_common::platform::Platform;

use crate::exec::SystemCommandRunner;
use crate::table;

/// Resolves neighbor-cache bindings in either direction.
///
/// Every lookup shells out for a fresh copy of the OS table; nothing is
/// memoized between calls, so concurrent lookups stay independent. No
/// timeout is imposed here; callers needing bounded latency wrap the call.
pub struct NeighborResolver {
    runner: Box<dyn CommandRunner>,
    pinned_platform: Option<Platform>,
}

impl NeighborResolver {
    /// Resolver backed by the real system shell.
    pub fn system() -> Self {
        Self::new(Box::new(SystemCommandRunner))
    }

    /// Resolver with an injected command runner; the platform is still
    /// re-detected from the running host on every lookup.
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            pinned_platform: None,
        }
    }

    /// Resolver pinned to a fixed platform format, for driving fixture
    /// output from a fake runner through a specific parser.
    pub fn with_platform(runner: Box<dyn CommandRunner>, platform: Platform) -> Self {
        Self {
            runner,
            pinned_platform: Some(platform),
        }
    }

    /// Finds the entry bound to the hardware address `addr` (six two-digit
    /// hex groups separated by `:` or `-`, any case). Returns the first
    /// match in table order, or `Ok(None)` when the table holds no such
    /// binding.
    pub async fn resolve_by_mac(
        &self,
        addr: &str,
    ) -> Result<Option<NeighborEntry>, ResolveError> {
        let wanted = mac::parse_hardware_addr(addr)?;
        let table = self.fetch_table().await?;
        Ok(table.into_iter().find(|entry| entry.mac == wanted))
    }

    /// Finds the entry whose network address equals `addr` exactly as the
    /// OS printed it. No canonicalization is applied to either side, so
    /// IPv6 spellings must match the table verbatim.
    pub async fn resolve_by_ip(
        &self,
        addr: &str,
    ) -> Result<Option<NeighborEntry>, ResolveError> {
        if IpAddr::from_str(addr).is_err() {
            return Err(ResolveError::InvalidNetworkAddress(addr.to_string()));
        }
        let table = self.fetch_table().await?;
        Ok(table.into_iter().find(|entry| entry.ip == addr))
    }

    fn platform(&self) -> Platform {
        self.pinned_platform.unwrap_or_else(Platform::current)
    }

    async fn fetch_table(&self) -> Result<Vec<NeighborEntry>, ResolveError> {
        let platform = self.platform();
        let command = platform.neighbor_command();
        let raw = self
            .runner
            .run(command)
            .await
            .map_err(|source| ResolveError::CommandFailed {
                command: command.to_string(),
                source,
            })?;
        let entries = table::parse(platform, &raw);
        debug!(command, entries = entries.len(), "fetched neighbor table");
        Ok(entries)
    }
}
