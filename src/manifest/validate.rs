//! Manifest validation
//!
//! Structural checks on an export: within each category names are unique
//! (case-insensitively, since IDs hash the lowercased name), IDs are unique,
//! and every ID equals the hash of its name. Violations mean the export is
//! corrupt or was edited by hand, and the fix is always to re-export.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{CuebankError, Result};
use crate::hash::{sound_id, SoundId};
use crate::manifest::{Category, Manifest};

/// One structural violation found in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two bindings in a category share a name (ignoring case).
    DuplicateName { category: Category, name: String },
    /// Two differently-named bindings in a category share an ID.
    DuplicateId {
        category: Category,
        id: SoundId,
        first: String,
        second: String,
    },
    /// A binding's ID is not the hash of its name.
    IdMismatch {
        category: Category,
        name: String,
        expected: SoundId,
        found: SoundId,
    },
    /// A binding has an empty name.
    EmptyName { category: Category },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateName { category, name } => {
                write!(f, "{category}: duplicate name {name:?}")
            }
            Violation::DuplicateId {
                category,
                id,
                first,
                second,
            } => write!(
                f,
                "{category}: {first:?} and {second:?} share ID {id}"
            ),
            Violation::IdMismatch {
                category,
                name,
                expected,
                found,
            } => write!(
                f,
                "{category}: {name:?} carries ID {found}, hash of name is {expected}"
            ),
            Violation::EmptyName { category } => {
                write!(f, "{category}: binding with empty name")
            }
        }
    }
}

impl Manifest {
    /// Run all structural checks, returning every violation found.
    ///
    /// An empty result means the manifest upholds the export invariants.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        for category in Category::ALL {
            let bindings = self.bindings(category);

            let mut seen_names: HashSet<String> = HashSet::new();
            let mut seen_ids: HashMap<SoundId, &str> = HashMap::new();

            for binding in bindings {
                if binding.name.is_empty() {
                    violations.push(Violation::EmptyName { category });
                    continue;
                }

                let lowered = binding.name.to_ascii_lowercase();
                if !seen_names.insert(lowered) {
                    violations.push(Violation::DuplicateName {
                        category,
                        name: binding.name.clone(),
                    });
                }

                if let Some(first) = seen_ids.insert(binding.id, &binding.name) {
                    // A duplicate name already reports the shared ID
                    if !first.eq_ignore_ascii_case(&binding.name) {
                        violations.push(Violation::DuplicateId {
                            category,
                            id: binding.id,
                            first: first.to_string(),
                            second: binding.name.clone(),
                        });
                    }
                }

                let expected = sound_id(&binding.name);
                if binding.id != expected {
                    violations.push(Violation::IdMismatch {
                        category,
                        name: binding.name.clone(),
                        expected,
                        found: binding.id,
                    });
                }
            }
        }

        violations
    }

    /// Validate, converting any violations into an error.
    pub fn ensure_valid(&self) -> Result<()> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CuebankError::InvalidManifest { violations })
        }
    }
}
