//! Artifact Generation Module
//!
//! Renders a manifest into the constants files consumers compile against:
//! - a Rust module of `SoundId` constants (checked in as `src/ids.rs`)
//! - the middleware-style C++ header, byte-identical to the authoring
//!   tool's own export for the same data
//!
//! Rendering is deterministic: categories in export order, bindings sorted
//! by constant name. Regenerating from an unchanged manifest reproduces the
//! artifact byte-for-byte, which is what `check_artifact` verifies.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{CuebankError, Result};
use crate::manifest::{Binding, Category, Manifest};

/// Which artifact flavor to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Rust constants module.
    Rust,
    /// Middleware C++ header.
    Header,
}

impl ArtifactFormat {
    /// Conventional file name for this artifact.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ArtifactFormat::Rust => "ids.rs",
            ArtifactFormat::Header => "Wwise_IDs.h",
        }
    }
}

/// Constant name for an authored name: uppercased, with every
/// non-alphanumeric character mapped to an underscore.
pub fn constant_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Bindings of a category paired with their constant names, sorted by
/// constant name. Fails when two bindings collapse to the same constant.
fn sorted_bindings(manifest: &Manifest, category: Category) -> Result<Vec<(String, &Binding)>> {
    let mut named: Vec<(String, &Binding)> = manifest
        .bindings(category)
        .iter()
        .map(|b| (constant_name(&b.name), b))
        .collect();
    named.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));

    for pair in named.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(CuebankError::ConstantCollision {
                first: pair[0].1.name.clone(),
                second: pair[1].1.name.clone(),
                constant: pair[0].0.clone(),
            });
        }
    }

    Ok(named)
}

/// Render the manifest in the requested format.
pub fn render(manifest: &Manifest, format: ArtifactFormat) -> Result<String> {
    match format {
        ArtifactFormat::Rust => render_rust(manifest),
        ArtifactFormat::Header => render_cpp_header(manifest),
    }
}

/// Render the Rust constants module.
///
/// Empty categories are omitted, matching the authoring tool's header.
pub fn render_rust(manifest: &Manifest) -> Result<String> {
    let mut out = String::new();
    out.push_str("//! Generated sound identifiers. Do not edit.\n");
    out.push_str("//!\n");
    out.push_str("//! Mechanically produced from a soundbank manifest. Regenerate with\n");
    out.push_str("//! `cuebank generate` after the next authoring export.\n");

    for category in Category::ALL {
        let bindings = sorted_bindings(manifest, category)?;
        if bindings.is_empty() {
            continue;
        }

        out.push('\n');
        out.push_str(&format!("pub mod {} {{\n", category.module_name()));
        out.push_str("    use crate::hash::SoundId;\n\n");
        for (constant, binding) in &bindings {
            out.push_str(&format!("    /// \"{}\"\n", binding.name));
            out.push_str(&format!(
                "    pub const {}: SoundId = SoundId({});\n",
                constant, binding.id
            ));
        }
        out.push_str("}\n");
    }

    Ok(out)
}

/// Render the middleware's C++ header.
///
/// Reproduces the authoring tool's layout exactly, down to its unspaced
/// closing `}// namespace AK`.
pub fn render_cpp_header(manifest: &Manifest) -> Result<String> {
    let rule = "/".repeat(101);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str("//\n");
    out.push_str("// Audiokinetic Wwise generated include file. Do not edit.\n");
    out.push_str("//\n");
    out.push_str(&rule);
    out.push('\n');
    out.push('\n');
    out.push_str("#ifndef __WWISE_IDS_H__\n");
    out.push_str("#define __WWISE_IDS_H__\n");
    out.push('\n');
    out.push_str("#include <AK/SoundEngine/Common/AkTypes.h>\n");
    out.push('\n');
    out.push_str("namespace AK\n");
    out.push_str("{\n");

    let mut first = true;
    for category in Category::ALL {
        let bindings = sorted_bindings(manifest, category)?;
        if bindings.is_empty() {
            continue;
        }

        if !first {
            out.push('\n');
        }
        first = false;

        out.push_str(&format!("    namespace {}\n", category.namespace()));
        out.push_str("    {\n");
        for (constant, binding) in &bindings {
            out.push_str(&format!(
                "        static const AkUniqueID {} = {}U;\n",
                constant, binding.id
            ));
        }
        out.push_str(&format!("    }} // namespace {}\n", category.namespace()));
    }

    out.push('\n');
    out.push_str("}// namespace AK\n");
    out.push('\n');
    out.push_str("#endif // __WWISE_IDS_H__\n");

    Ok(out)
}

/// SHA-256 digest of artifact bytes, as lowercase hex.
pub fn artifact_digest(bytes: &[u8]) -> String {
    let hash = Sha256::digest(bytes);
    format!("{:x}", hash)
}

/// Render and write the artifact, skipping the write when the file already
/// holds exactly the rendered bytes.
///
/// Returns `true` when the file was (re)written.
pub fn write_artifact(manifest: &Manifest, format: ArtifactFormat, path: &Path) -> Result<bool> {
    let rendered = render(manifest, format)?;

    if let Ok(existing) = fs::read_to_string(path) {
        if existing == rendered {
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CuebankError::FileWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(path, rendered).map_err(|e| CuebankError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(true)
}

/// Verify that the artifact on disk is byte-identical to a fresh render.
pub fn check_artifact(manifest: &Manifest, format: ArtifactFormat, path: &Path) -> Result<()> {
    let rendered = render(manifest, format)?;

    let existing = fs::read_to_string(path).map_err(|e| CuebankError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if existing != rendered {
        return Err(CuebankError::ArtifactStale {
            path: path.to_path_buf(),
            expected_digest: artifact_digest(rendered.as_bytes()),
            actual_digest: artifact_digest(existing.as_bytes()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_manifest() -> Manifest {
        Manifest::from_names(
            "Test Project",
            &[
                (Category::Events, "Stop_MX"),
                (Category::Events, "Play_MX"),
                (Category::Busses, "Master Audio Bus"),
            ],
        )
    }

    #[test]
    fn test_constant_name_mapping() {
        assert_eq!(constant_name("Play_MX"), "PLAY_MX");
        assert_eq!(constant_name("Master Audio Bus"), "MASTER_AUDIO_BUS");
        assert_eq!(constant_name("ScoreRatio"), "SCORERATIO");
    }

    #[test]
    fn test_render_rust_sorts_and_omits_empty_categories() {
        let rendered = render_rust(&sample_manifest()).unwrap();

        // Authored order was Stop before Play; output sorts by constant
        let play = rendered.find("PLAY_MX").unwrap();
        let stop = rendered.find("STOP_MX").unwrap();
        assert!(play < stop);

        assert!(rendered.contains("pub mod events {"));
        assert!(rendered.contains("pub mod busses {"));
        assert!(!rendered.contains("pub mod banks"));
        assert!(!rendered.contains("pub mod game_parameters"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let manifest = sample_manifest();
        assert_eq!(
            render_rust(&manifest).unwrap(),
            render_rust(&manifest).unwrap()
        );
        assert_eq!(
            render_cpp_header(&manifest).unwrap(),
            render_cpp_header(&manifest).unwrap()
        );
    }

    #[test]
    fn test_header_structure() {
        let rendered = render_cpp_header(&sample_manifest()).unwrap();
        assert!(rendered.starts_with(&"/".repeat(101)));
        assert!(rendered.contains("    namespace EVENTS\n    {\n"));
        assert!(rendered.contains("        static const AkUniqueID PLAY_MX = 2447410425U;\n"));
        assert!(rendered.contains("    } // namespace BUSSES\n"));
        assert!(rendered.ends_with("}// namespace AK\n\n#endif // __WWISE_IDS_H__\n"));
    }

    #[test]
    fn test_constant_collision_rejected() {
        let manifest = Manifest::from_names(
            "Test Project",
            &[(Category::Events, "Play MX"), (Category::Events, "Play_MX")],
        );

        let err = render_rust(&manifest).unwrap_err();
        assert_eq!(err.error_code(), "CONSTANT_COLLISION");
    }

    #[test]
    fn test_write_artifact_skips_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("generated").join("ids.rs");
        let manifest = sample_manifest();

        assert!(write_artifact(&manifest, ArtifactFormat::Rust, &path).unwrap());
        assert!(!write_artifact(&manifest, ArtifactFormat::Rust, &path).unwrap());

        check_artifact(&manifest, ArtifactFormat::Rust, &path).unwrap();
    }

    #[test]
    fn test_check_artifact_detects_drift() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ids.rs");
        let manifest = sample_manifest();

        write_artifact(&manifest, ArtifactFormat::Rust, &path).unwrap();

        // Simulate a hand edit
        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str("// tweaked\n");
        std::fs::write(&path, content).unwrap();

        let err = check_artifact(&manifest, ArtifactFormat::Rust, &path).unwrap_err();
        assert_eq!(err.error_code(), "ARTIFACT_STALE");
    }

    #[test]
    fn test_check_artifact_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = check_artifact(
            &sample_manifest(),
            ArtifactFormat::Header,
            &temp_dir.path().join("Wwise_IDs.h"),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "FILE_READ");
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let a = artifact_digest(b"abc");
        assert_eq!(a.len(), 64);
        assert_eq!(a, artifact_digest(b"abc"));
        assert_ne!(a, artifact_digest(b"abd"));
    }
}
