//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;
use std::str::FromStr;

use log::{debug, info};
use walkdir::WalkDir;

use crate::codegen::{self, ArtifactFormat};
use crate::error::Result;
use crate::hash::sound_id;
use crate::manifest::{Category, DiffEntry, Manifest};

/// Print the ID for an authored name.
pub fn hash(name: &str) -> Result<()> {
    println!("{}", sound_id(name));
    Ok(())
}

/// Validate a manifest, printing every violation.
pub fn check(path: &Path) -> Result<()> {
    info!("Validating manifest: {}", path.display());

    let manifest = Manifest::load(path)?;
    let violations = manifest.validate();

    if violations.is_empty() {
        println!(
            "{}: OK ({} bindings, project {:?})",
            path.display(),
            manifest.len(),
            manifest.project
        );
        return Ok(());
    }

    for violation in &violations {
        println!("{violation}");
    }

    manifest.ensure_valid()
}

/// Render a manifest into an artifact, or verify an existing one.
pub fn generate(
    manifest_path: &Path,
    out: &Path,
    format: ArtifactFormat,
    check_only: bool,
) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    manifest.ensure_valid()?;

    if check_only {
        info!("Checking artifact: {}", out.display());
        codegen::check_artifact(&manifest, format, out)?;
        println!("{}: up to date", out.display());
        return Ok(());
    }

    info!("Generating artifact: {}", out.display());
    if codegen::write_artifact(&manifest, format, out)? {
        println!("{}: written", out.display());
    } else {
        println!("{}: unchanged", out.display());
    }

    Ok(())
}

/// List bindings, optionally restricted to one category.
pub fn list(path: &Path, category: Option<&str>) -> Result<()> {
    let manifest = Manifest::load(path)?;

    let categories: Vec<Category> = match category {
        Some(raw) => vec![Category::from_str(raw)?],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let bindings = manifest.bindings(category);
        if bindings.is_empty() {
            continue;
        }

        println!("{category}:");
        for binding in bindings {
            println!("  {:>10}  {}", binding.id, binding.name);
        }
    }

    Ok(())
}

/// Print the differences between two exports.
pub fn diff(old_path: &Path, new_path: &Path) -> Result<()> {
    let old = Manifest::load(old_path)?;
    let new = Manifest::load(new_path)?;

    let diff = old.diff(&new);
    if diff.is_empty() {
        println!("No binding changes.");
        return Ok(());
    }

    for entry in &diff.entries {
        match entry {
            DiffEntry::Added { category, name, id } => {
                println!("+ {category}: {name} ({id})");
            }
            DiffEntry::Removed { category, name, id } => {
                println!("- {category}: {name} ({id}, now stale)");
            }
            DiffEntry::Reidentified {
                category,
                name,
                old_id,
                new_id,
            } => {
                println!("~ {category}: {name} ({old_id} -> {new_id})");
            }
        }
    }

    Ok(())
}

/// Walk a directory tree, reporting every manifest and the freshness of any
/// generated artifacts sitting next to it.
pub fn scan(dir: &Path) -> Result<()> {
    info!("Scanning: {}", dir.display());

    let mut found = 0usize;
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().map(|e| e != "json").unwrap_or(true) {
            continue;
        }

        let manifest = match Manifest::load(path) {
            Ok(m) => m,
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        found += 1;
        println!(
            "{}: project {:?}, {} bindings",
            path.display(),
            manifest.project,
            manifest.len()
        );

        let parent = path.parent().unwrap_or(dir);
        for format in [ArtifactFormat::Rust, ArtifactFormat::Header] {
            let artifact = parent.join(format.default_file_name());
            if !artifact.exists() {
                continue;
            }
            match codegen::check_artifact(&manifest, format, &artifact) {
                Ok(()) => println!("  {}: up to date", artifact.display()),
                Err(e) => println!("  {}: {}", artifact.display(), e),
            }
        }
    }

    if found == 0 {
        println!("No manifests found under {}", dir.display());
    }

    Ok(())
}
