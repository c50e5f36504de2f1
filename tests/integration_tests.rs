//! Integration Tests
//!
//! End-to-end tests across the export lifecycle: author, validate, generate
//! artifacts, detect drift, diff exports, and resolve IDs at runtime.

mod common;

use cuebank::cli::commands;
use cuebank::codegen::{self, ArtifactFormat};
use cuebank::engine::SoundEngine;
use cuebank::hash::sound_id;
use cuebank::manifest::{Category, Manifest};
use tempfile::TempDir;

use common::project_manifest;

#[test]
fn test_export_generate_check_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("soundbanks.json");
    let artifact_path = temp_dir.path().join("ids.rs");

    let manifest = project_manifest();
    manifest.save(&manifest_path).unwrap();

    let loaded = Manifest::load(&manifest_path).unwrap();
    loaded.ensure_valid().unwrap();

    // First generation writes, second is a no-op
    assert!(codegen::write_artifact(&loaded, ArtifactFormat::Rust, &artifact_path).unwrap());
    assert!(!codegen::write_artifact(&loaded, ArtifactFormat::Rust, &artifact_path).unwrap());
    codegen::check_artifact(&loaded, ArtifactFormat::Rust, &artifact_path).unwrap();
}

#[test]
fn test_next_export_invalidates_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let artifact_path = temp_dir.path().join("Wwise_IDs.h");

    let old = project_manifest();
    codegen::write_artifact(&old, ArtifactFormat::Header, &artifact_path).unwrap();

    // The next export drops an event; the artifact on disk goes stale
    let mut new = project_manifest();
    new.events.retain(|b| b.name != "Play_Countdown");

    let err = codegen::check_artifact(&new, ArtifactFormat::Header, &artifact_path).unwrap_err();
    assert_eq!(err.error_code(), "ARTIFACT_STALE");

    // Regenerating wholesale brings it back in sync
    assert!(codegen::write_artifact(&new, ArtifactFormat::Header, &artifact_path).unwrap());
    codegen::check_artifact(&new, ArtifactFormat::Header, &artifact_path).unwrap();
}

#[test]
fn test_diff_between_exports() {
    let old = project_manifest();
    let mut new = project_manifest();
    new.events.retain(|b| b.name != "Play_Countdown");
    new.push_name(Category::Events, "Play_SFX_Splash");

    let diff = old.diff(&new);
    assert_eq!(diff.removed().count(), 1);
    assert_eq!(diff.added().count(), 1);
}

#[test]
fn test_runtime_session_against_export() {
    let mut engine = SoundEngine::new(project_manifest());

    engine.load_bank(sound_id("Init")).unwrap();
    engine.load_bank(sound_id("New_SoundBank")).unwrap();

    // Game startup: start music, zero the score parameter
    let music = engine.post_event(sound_id("Play_MX")).unwrap();
    engine
        .set_parameter_normalized(sound_id("ScoreRatio"), 0.0)
        .unwrap();

    // Gameplay: one-shot effects and a rising score
    engine.post_event(sound_id("Play_SFX_Cast")).unwrap();
    engine.post_event(sound_id("Play_SFX_Catch")).unwrap();
    engine
        .set_parameter_normalized(sound_id("ScoreRatio"), 0.6)
        .unwrap();
    assert_eq!(engine.parameter(sound_id("ScoreRatio")), Some(60.0));

    // Pause: apply the music filter without stopping playback
    engine.post_event(sound_id("PauseFilter_MX")).unwrap();
    assert!(engine.is_active(music));
    engine.post_event(sound_id("ResetPauseFilter_MX")).unwrap();

    // Shutdown
    engine.post_event(sound_id("Stop_MX")).unwrap();
    engine.stop_all();
    assert_eq!(engine.active_instances(), 0);
}

#[test]
fn test_stale_id_from_previous_export_fails_at_resolution() {
    // Consumer compiled against the old export; the asset was then removed
    let mut new = project_manifest();
    new.events.retain(|b| b.name != "Play_Countdown");

    let mut engine = SoundEngine::new(new);
    engine.load_bank(sound_id("Init")).unwrap();

    let err = engine.post_event(sound_id("Play_Countdown")).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_ID");
}

#[test]
fn test_check_command_accepts_valid_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("soundbanks.json");
    project_manifest().save(&manifest_path).unwrap();

    commands::check(&manifest_path).unwrap();
}

#[test]
fn test_check_command_rejects_corrupt_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("soundbanks.json");

    let mut manifest = project_manifest();
    manifest.push_name(Category::Events, "play_mx");
    manifest.save(&manifest_path).unwrap();

    let err = commands::check(&manifest_path).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_MANIFEST");
}

#[test]
fn test_generate_command_write_and_check_modes() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("soundbanks.json");
    let artifact_path = temp_dir.path().join("ids.rs");
    project_manifest().save(&manifest_path).unwrap();

    // --check before any artifact exists fails
    let err = commands::generate(&manifest_path, &artifact_path, ArtifactFormat::Rust, true)
        .unwrap_err();
    assert_eq!(err.error_code(), "FILE_READ");

    commands::generate(&manifest_path, &artifact_path, ArtifactFormat::Rust, false).unwrap();
    commands::generate(&manifest_path, &artifact_path, ArtifactFormat::Rust, true).unwrap();
}

#[test]
fn test_list_command_category_filter() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("soundbanks.json");
    project_manifest().save(&manifest_path).unwrap();

    commands::list(&manifest_path, None).unwrap();
    commands::list(&manifest_path, Some("banks")).unwrap();

    let err = commands::list(&manifest_path, Some("textures")).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
}

#[test]
fn test_scan_command_walks_soundbank_tree() {
    let temp_dir = TempDir::new().unwrap();
    let bank_dir = temp_dir.path().join("GeneratedSoundBanks");
    let manifest_path = bank_dir.join("soundbanks.json");

    let manifest = project_manifest();
    manifest.save(&manifest_path).unwrap();
    codegen::write_artifact(&manifest, ArtifactFormat::Header, &bank_dir.join("Wwise_IDs.h"))
        .unwrap();

    // Unrelated JSON must be skipped, not fail the scan
    std::fs::write(temp_dir.path().join("settings.json"), "{\"volume\": 3}").unwrap();

    commands::scan(temp_dir.path()).unwrap();
}
