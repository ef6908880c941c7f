/// OS family, used to pick the neighbor-table command and its row format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Family of the running host.
    pub fn current() -> Self {
        if cfg!(target_family = "windows") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Neighbor-cache listing command for this family.
    ///
    /// `-n` on POSIX keeps the tool from stalling on reverse DNS lookups.
    pub fn neighbor_command(self) -> &'static str {
        match self {
            Platform::Windows => "arp -a",
            Platform::Posix => "arp -an",
        }
    }
}
