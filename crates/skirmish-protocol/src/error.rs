//! Error types for the protocol layer.
//!
//! Each crate in Skirmish defines its own error enum. A `ProtocolError`
//! always means a raw value failed to convert into one of the shared
//! vocabulary types.

/// Errors that can occur when building protocol values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A team index outside `0..4`.
    ///
    /// Team slots are fixed at four, so any other index is a caller bug
    /// (or a malicious client) and is rejected before it reaches a room.
    #[error("invalid team index {0} (expected 0..{max})", max = crate::Team::COUNT)]
    InvalidTeam(usize),
}
