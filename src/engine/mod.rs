//! Runtime Resolution Engine
//!
//! In-process facade over one manifest, modeling what a game does with the
//! generated IDs at runtime: load banks, post events (receiving playing-ID
//! handles), drive game parameters, and select an output device. This layer
//! resolves and bookkeeps identifiers only; decoding and mixing live in the
//! external middleware.
//!
//! Every ID handed in is resolved against the manifest first, so a stale ID
//! (an asset removed from the authoring project after the consumer compiled)
//! fails here with a typed error instead of silently doing nothing.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::error::{CuebankError, Result};
use crate::hash::{PlayingId, SoundId};
use crate::manifest::{Category, Manifest};

/// Scale applied by [`SoundEngine::set_parameter_normalized`]: a [0, 1]
/// gameplay ratio drives a 0..100 authored parameter range.
pub const NORMALIZED_PARAMETER_SCALE: f32 = 100.0;

/// Resolution and bookkeeping engine for one export.
pub struct SoundEngine {
    manifest: Manifest,
    loaded_banks: HashSet<SoundId>,
    parameters: HashMap<SoundId, f32>,
    active: HashMap<PlayingId, SoundId>,
    next_playing: u32,
    device: Option<SoundId>,
}

impl SoundEngine {
    /// Create an engine over a manifest.
    ///
    /// The output device defaults to the export's `System` device when one
    /// exists; otherwise no device is selected until [`select_device`].
    ///
    /// [`select_device`]: SoundEngine::select_device
    pub fn new(manifest: Manifest) -> Self {
        let device = manifest
            .find_by_name(Category::AudioDevices, "System")
            .map(|b| b.id);

        SoundEngine {
            manifest,
            loaded_banks: HashSet::new(),
            parameters: HashMap::new(),
            active: HashMap::new(),
            next_playing: 0,
            device,
        }
    }

    /// The manifest this engine resolves against.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Load a bank. Loading an already-loaded bank is a no-op.
    pub fn load_bank(&mut self, bank: SoundId) -> Result<()> {
        let binding = self.manifest.resolve(Category::Banks, bank)?;
        if self.loaded_banks.insert(bank) {
            debug!("Loaded bank {} ({})", binding.name, bank);
        }
        Ok(())
    }

    /// Unload a loaded bank.
    pub fn unload_bank(&mut self, bank: SoundId) -> Result<()> {
        self.manifest.resolve(Category::Banks, bank)?;
        if !self.loaded_banks.remove(&bank) {
            return Err(CuebankError::BankNotLoaded { bank });
        }
        Ok(())
    }

    /// Whether a bank is currently loaded.
    pub fn bank_loaded(&self, bank: SoundId) -> bool {
        self.loaded_banks.contains(&bank)
    }

    /// Number of loaded banks.
    pub fn loaded_bank_count(&self) -> usize {
        self.loaded_banks.len()
    }

    /// Post an event, returning a handle for the new instance.
    ///
    /// Fails when the ID is not an event in this export (the stale-ID case).
    /// Posting with no banks loaded is allowed but logged: whether the event
    /// can actually sound depends on bank contents this layer does not see.
    pub fn post_event(&mut self, event: SoundId) -> Result<PlayingId> {
        let name = self.manifest.resolve(Category::Events, event)?.name.clone();

        if self.loaded_banks.is_empty() {
            warn!("Posting {name} with no banks loaded");
        }

        self.next_playing += 1;
        let playing = PlayingId(self.next_playing);
        self.active.insert(playing, event);
        debug!("Posted {name}: playing ID {playing}");
        Ok(playing)
    }

    /// Stop one instance, returning the event it belonged to.
    pub fn stop(&mut self, playing: PlayingId) -> Result<SoundId> {
        self.active
            .remove(&playing)
            .ok_or(CuebankError::InstanceNotFound { playing })
    }

    /// Stop every instance of one event, returning how many were stopped.
    pub fn stop_event(&mut self, event: SoundId) -> Result<usize> {
        self.manifest.resolve(Category::Events, event)?;
        let before = self.active.len();
        self.active.retain(|_, e| *e != event);
        Ok(before - self.active.len())
    }

    /// Stop all instances.
    pub fn stop_all(&mut self) {
        self.active.clear();
    }

    /// Whether an instance handle is still active.
    pub fn is_active(&self, playing: PlayingId) -> bool {
        self.active.contains_key(&playing)
    }

    /// Number of active instances.
    pub fn active_instances(&self) -> usize {
        self.active.len()
    }

    /// Set a game parameter to a raw value.
    pub fn set_parameter(&mut self, parameter: SoundId, value: f32) -> Result<()> {
        self.manifest.resolve(Category::GameParameters, parameter)?;
        self.parameters.insert(parameter, value);
        Ok(())
    }

    /// Set a game parameter from a [0, 1] gameplay ratio.
    ///
    /// The ratio is clamped and scaled by [`NORMALIZED_PARAMETER_SCALE`],
    /// the convention the game uses for score-driven music intensity.
    pub fn set_parameter_normalized(&mut self, parameter: SoundId, ratio: f32) -> Result<()> {
        let clamped = ratio.clamp(0.0, 1.0);
        self.set_parameter(parameter, clamped * NORMALIZED_PARAMETER_SCALE)
    }

    /// Current value of a game parameter, if it has been set.
    pub fn parameter(&self, parameter: SoundId) -> Option<f32> {
        self.parameters.get(&parameter).copied()
    }

    /// Select the output device.
    pub fn select_device(&mut self, device: SoundId) -> Result<()> {
        self.manifest.resolve(Category::AudioDevices, device)?;
        self.device = Some(device);
        Ok(())
    }

    /// Currently selected output device.
    pub fn device(&self) -> Option<SoundId> {
        self.device
    }
}
