//! Generated sound identifiers. Do not edit.
//!
//! Mechanically produced from a soundbank manifest. Regenerate with
//! `cuebank generate` after the next authoring export.

pub mod events {
    use crate::hash::SoundId;

    /// "PauseFilter_MX"
    pub const PAUSEFILTER_MX: SoundId = SoundId(278830005);
    /// "Play_Countdown"
    pub const PLAY_COUNTDOWN: SoundId = SoundId(2175797879);
    /// "Play_MX"
    pub const PLAY_MX: SoundId = SoundId(2447410425);
    /// "Play_SFX_Cast"
    pub const PLAY_SFX_CAST: SoundId = SoundId(3999698555);
    /// "Play_SFX_Catch"
    pub const PLAY_SFX_CATCH: SoundId = SoundId(3345612295);
    /// "ResetPauseFilter_MX"
    pub const RESETPAUSEFILTER_MX: SoundId = SoundId(3752503534);
    /// "Stop_MX"
    pub const STOP_MX: SoundId = SoundId(2507504359);
}

pub mod game_parameters {
    use crate::hash::SoundId;

    /// "ScoreRatio"
    pub const SCORERATIO: SoundId = SoundId(2086263314);
}

pub mod banks {
    use crate::hash::SoundId;

    /// "Init"
    pub const INIT: SoundId = SoundId(1355168291);
    /// "New_SoundBank"
    pub const NEW_SOUNDBANK: SoundId = SoundId(4072029455);
}

pub mod busses {
    use crate::hash::SoundId;

    /// "Master Audio Bus"
    pub const MASTER_AUDIO_BUS: SoundId = SoundId(3803692087);
}

pub mod audio_devices {
    use crate::hash::SoundId;

    /// "No_Output"
    pub const NO_OUTPUT: SoundId = SoundId(2317455096);
    /// "System"
    pub const SYSTEM: SoundId = SoundId(3859886410);
}
