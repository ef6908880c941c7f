use pnet::datalink::MacAddr;

/// How the OS reports a neighbor binding was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Manually configured.
    Static,
    /// Learned by the kernel's resolution protocol.
    Dynamic,
    /// The source platform does not report kind information.
    Unknown,
}

impl BindingKind {
    /// Maps the Windows table's `Type` column. Tokens outside the known set
    /// (localized output, future values) land on `Unknown` rather than
    /// invalidating the row.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "static" => BindingKind::Static,
            "dynamic" => BindingKind::Dynamic,
            _ => BindingKind::Unknown,
        }
    }
}

/// One row of the OS neighbor cache.
///
/// Built only by the table parsers and never mutated; a fresh set is
/// produced for every lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborEntry {
    /// Network-layer address exactly as the table printed it. Lookups match
    /// on this text verbatim, with no IPv6 canonicalization.
    pub ip: String,
    pub mac: MacAddr,
    pub kind: BindingKind,
}
