//! Manifest diffing
//!
//! Compares two exports and reports which bindings appeared, disappeared,
//! or changed ID. A changed ID means the asset was renamed in the authoring
//! project, so every consumer holding the old ID now holds a stale one.

use crate::hash::SoundId;
use crate::manifest::{Category, Manifest};

/// One changed binding between two exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    /// Present in the new export only.
    Added {
        category: Category,
        name: String,
        id: SoundId,
    },
    /// Present in the old export only; its ID is now stale.
    Removed {
        category: Category,
        name: String,
        id: SoundId,
    },
    /// Same name, different ID (the authoring tool recomputed it).
    Reidentified {
        category: Category,
        name: String,
        old_id: SoundId,
        new_id: SoundId,
    },
}

/// All differences between two exports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    pub entries: Vec<DiffEntry>,
}

impl ManifestDiff {
    /// Whether the two exports carried identical binding tables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bindings that exist only in the old export.
    pub fn removed(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Removed { .. }))
    }

    /// Bindings that exist only in the new export.
    pub fn added(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Added { .. }))
    }
}

impl Manifest {
    /// Diff this export (old) against a newer one.
    pub fn diff(&self, newer: &Manifest) -> ManifestDiff {
        let mut entries = Vec::new();

        for category in Category::ALL {
            for old in self.bindings(category) {
                match newer.find_by_name(category, &old.name) {
                    None => entries.push(DiffEntry::Removed {
                        category,
                        name: old.name.clone(),
                        id: old.id,
                    }),
                    Some(new) if new.id != old.id => entries.push(DiffEntry::Reidentified {
                        category,
                        name: old.name.clone(),
                        old_id: old.id,
                        new_id: new.id,
                    }),
                    Some(_) => {}
                }
            }

            for new in newer.bindings(category) {
                if self.find_by_name(category, &new.name).is_none() {
                    entries.push(DiffEntry::Added {
                        category,
                        name: new.name.clone(),
                        id: new.id,
                    });
                }
            }
        }

        ManifestDiff { entries }
    }
}
