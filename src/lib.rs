//! Cuebank - Soundbank Identifier Toolkit
//!
//! Cuebank manages the identifier tables that sit between an audio authoring
//! tool and a game's runtime: every event, game parameter, sound bank, bus,
//! and output device is addressed by a 32-bit ID derived from its authored
//! name.
//!
//! # Architecture
//!
//! The crate follows the lifecycle of an identifier table:
//! - `hash`: the name-to-ID function the authoring tool applies on export
//! - `manifest`: the exported table as structured data, with validation
//! - `codegen`: deterministic rendering into checked-in constants files
//! - `ids`: the generated constants for the current project export
//! - `engine`: runtime resolution of IDs (post events, set parameters,
//!   load banks), where stale IDs surface as errors

pub mod cli;
pub mod codegen;
pub mod engine;
pub mod error;
pub mod hash;
pub mod ids;
pub mod manifest;

pub use error::{CuebankError, Result};
pub use hash::{sound_id, PlayingId, SoundId};
pub use manifest::{Binding, Category, Manifest};
