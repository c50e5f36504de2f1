//! Soundbank Manifest Module
//!
//! Structured form of an authoring export: the project's events, game
//! parameters, banks, busses, and audio devices with their IDs, including:
//! - JSON load/save
//! - Structural validation (uniqueness, ID-matches-hash)
//! - Diffing two exports
//!
//! A manifest is produced wholesale by an export step and never patched
//! incrementally; the next export replaces it entirely.

pub mod diff;
pub mod validate;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CuebankError, Result};
use crate::hash::{sound_id, SoundId};

pub use diff::{DiffEntry, ManifestDiff};
pub use validate::Violation;

/// Current manifest schema version
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// The five disjoint namespaces an export partitions its bindings into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Events,
    GameParameters,
    Banks,
    Busses,
    AudioDevices,
}

impl Category {
    /// All categories, in the order the authoring tool writes them.
    pub const ALL: [Category; 5] = [
        Category::Events,
        Category::GameParameters,
        Category::Banks,
        Category::Busses,
        Category::AudioDevices,
    ];

    /// Namespace name used in the middleware's generated header.
    pub fn namespace(&self) -> &'static str {
        match self {
            Category::Events => "EVENTS",
            Category::GameParameters => "GAME_PARAMETERS",
            Category::Banks => "BANKS",
            Category::Busses => "BUSSES",
            Category::AudioDevices => "AUDIO_DEVICES",
        }
    }

    /// Module name used in the generated Rust constants file.
    pub fn module_name(&self) -> &'static str {
        match self {
            Category::Events => "events",
            Category::GameParameters => "game_parameters",
            Category::Banks => "banks",
            Category::Busses => "busses",
            Category::AudioDevices => "audio_devices",
        }
    }

    /// Human-readable category name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Events => "Events",
            Category::GameParameters => "Game Parameters",
            Category::Banks => "Banks",
            Category::Busses => "Busses",
            Category::AudioDevices => "Audio Devices",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = CuebankError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "events" | "event" => Ok(Category::Events),
            "game_parameters" | "game_parameter" | "parameters" | "rtpc" => {
                Ok(Category::GameParameters)
            }
            "banks" | "bank" => Ok(Category::Banks),
            "busses" | "bus" | "buses" => Ok(Category::Busses),
            "audio_devices" | "audio_device" | "devices" => Ok(Category::AudioDevices),
            _ => Err(CuebankError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}

/// One identifier binding: an authored name and its exported ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// The name as authored (case preserved).
    pub name: String,
    /// The 32-bit ID written into generated artifacts.
    pub id: SoundId,
}

impl Binding {
    /// Create a binding with the ID computed from the name.
    pub fn from_name(name: &str) -> Self {
        Binding {
            name: name.to_string(),
            id: sound_id(name),
        }
    }
}

/// A full authoring export: five binding lists plus export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Authoring project name.
    pub project: String,
    /// When the export was produced.
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub events: Vec<Binding>,
    #[serde(default)]
    pub game_parameters: Vec<Binding>,
    #[serde(default)]
    pub banks: Vec<Binding>,
    #[serde(default)]
    pub busses: Vec<Binding>,
    #[serde(default)]
    pub audio_devices: Vec<Binding>,
}

impl Manifest {
    /// Create an empty manifest for a project.
    pub fn new(project: &str) -> Self {
        Manifest {
            schema_version: CURRENT_SCHEMA_VERSION,
            project: project.to_string(),
            generated_at: Utc::now(),
            events: Vec::new(),
            game_parameters: Vec::new(),
            banks: Vec::new(),
            busses: Vec::new(),
            audio_devices: Vec::new(),
        }
    }

    /// Build a manifest from authored names, computing every ID.
    pub fn from_names(project: &str, entries: &[(Category, &str)]) -> Self {
        let mut manifest = Manifest::new(project);
        for (category, name) in entries {
            manifest.push_name(*category, name);
        }
        manifest
    }

    /// Append a binding with its ID computed from the name.
    ///
    /// Returns the computed ID.
    pub fn push_name(&mut self, category: Category, name: &str) -> SoundId {
        let binding = Binding::from_name(name);
        let id = binding.id;
        self.bindings_mut(category).push(binding);
        id
    }

    /// Append an already-identified binding (as read from an export).
    pub fn push_binding(&mut self, category: Category, binding: Binding) {
        self.bindings_mut(category).push(binding);
    }

    /// Bindings of one category.
    pub fn bindings(&self, category: Category) -> &[Binding] {
        match category {
            Category::Events => &self.events,
            Category::GameParameters => &self.game_parameters,
            Category::Banks => &self.banks,
            Category::Busses => &self.busses,
            Category::AudioDevices => &self.audio_devices,
        }
    }

    fn bindings_mut(&mut self, category: Category) -> &mut Vec<Binding> {
        match category {
            Category::Events => &mut self.events,
            Category::GameParameters => &mut self.game_parameters,
            Category::Banks => &mut self.banks,
            Category::Busses => &mut self.busses,
            Category::AudioDevices => &mut self.audio_devices,
        }
    }

    /// Iterate over all bindings with their categories.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Binding)> {
        Category::ALL
            .iter()
            .flat_map(move |c| self.bindings(*c).iter().map(move |b| (*c, b)))
    }

    /// Total number of bindings across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.bindings(*c).len()).sum()
    }

    /// Whether the manifest has no bindings at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a binding by authored name, case-insensitively.
    ///
    /// Case-insensitive because the ID hash is computed over the lowercased
    /// name; two names differing only in case cannot coexist in an export.
    pub fn find_by_name(&self, category: Category, name: &str) -> Option<&Binding> {
        self.bindings(category)
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Look up a binding by ID.
    pub fn find_by_id(&self, category: Category, id: SoundId) -> Option<&Binding> {
        self.bindings(category).iter().find(|b| b.id == id)
    }

    /// Resolve an ID, failing with a stale-ID error when absent.
    pub fn resolve(&self, category: Category, id: SoundId) -> Result<&Binding> {
        self.find_by_id(category, id)
            .ok_or(CuebankError::UnknownId { category, id })
    }

    /// Resolve a name, failing when absent.
    pub fn resolve_name(&self, category: Category, name: &str) -> Result<&Binding> {
        self.find_by_name(category, name)
            .ok_or_else(|| CuebankError::UnknownName {
                category,
                name: name.to_string(),
            })
    }

    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Manifest> {
        let content = fs::read_to_string(path).map_err(|e| CuebankError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let manifest: Manifest = serde_json::from_str(&content)?;

        if manifest.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(CuebankError::UnsupportedSchema {
                found: manifest.schema_version,
                current: CURRENT_SCHEMA_VERSION,
            });
        }

        Ok(manifest)
    }

    /// Save the manifest as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CuebankError::FileWrite {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| CuebankError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
