//! Name hashing and identifier newtypes
//!
//! The authoring tool derives every runtime ID from the authored name with
//! a 32-bit FNV-1 hash over the lowercased name. IDs checked into generated
//! artifacts are exactly this hash, so the same function lets us verify an
//! export and recompute IDs for authoring-side tooling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// FNV-1 32-bit offset basis
pub const FNV_OFFSET: u32 = 2_166_136_261;

/// FNV-1 32-bit prime
pub const FNV_PRIME: u32 = 16_777_619;

/// Unique 32-bit identifier for an authored audio object.
///
/// Equal to `sound_id(name)` for the object's authored name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SoundId(pub u32);

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SoundId {
    fn from(raw: u32) -> Self {
        SoundId(raw)
    }
}

/// Handle for one posted event instance.
///
/// Allocated by the engine when an event is posted; never reused within a
/// session. Zero is the middleware's reserved invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayingId(pub u32);

impl PlayingId {
    /// The reserved "no instance" value.
    pub const INVALID: PlayingId = PlayingId(0);

    /// Whether this handle refers to a real instance.
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for PlayingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the ID for an authored name.
///
/// FNV-1 (multiply, then xor) over the ASCII-lowercased bytes of the name,
/// matching the authoring tool's export. Hashing is case-insensitive:
/// `Play_MX` and `play_mx` yield the same ID.
pub fn sound_id(name: &str) -> SoundId {
    let mut hash = FNV_OFFSET;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(FNV_PRIME);
        hash ^= byte.to_ascii_lowercase() as u32;
    }
    SoundId(hash)
}
