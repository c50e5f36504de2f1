//! Shared test fixtures

use cuebank::{Category, Manifest};

/// The full current project export, as authored.
pub fn project_manifest() -> Manifest {
    Manifest::from_names(
        "Odyssea Beyond the Stars",
        &[
            (Category::Events, "PauseFilter_MX"),
            (Category::Events, "Play_Countdown"),
            (Category::Events, "Play_MX"),
            (Category::Events, "Play_SFX_Cast"),
            (Category::Events, "Play_SFX_Catch"),
            (Category::Events, "ResetPauseFilter_MX"),
            (Category::Events, "Stop_MX"),
            (Category::GameParameters, "ScoreRatio"),
            (Category::Banks, "Init"),
            (Category::Banks, "New_SoundBank"),
            (Category::Busses, "Master Audio Bus"),
            (Category::AudioDevices, "No_Output"),
            (Category::AudioDevices, "System"),
        ],
    )
}
