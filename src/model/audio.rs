//! Audio Model
//!
//! This sub-model holds the verse-synchronised player: reciters, the
//! active reciter/edition, playback state and the timing table for the
//! surah being played.

use crate::api::{AyahTiming, Reciter};

/// Player state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    /// No reciter chosen, no track
    Idle,
    /// Track set and timings fetched, not yet started
    Loaded,
    Playing,
    Paused,
}

#[derive(Clone, Debug)]
pub struct AudioModel {
    /// Reciter/edition pairs for the active narration, de-duplicated
    pub reciters: Vec<Reciter>,

    pub current_reciter: Option<Reciter>,

    pub state: PlayerState,

    /// Surah whose track is loaded (1..=114)
    pub current_sura: u16,

    /// Verse being recited
    pub current_ayah: u16,

    /// Timing table for `current_sura`, ascending by verse
    pub timings: Vec<AyahTiming>,

    /// Track metadata (duration) has arrived
    pub audio_loaded: bool,

    pub source_url: Option<String>,

    /// Generation of the last track handed to the media engine; events
    /// stamped with any other generation are stale
    pub load_generation: u64,

    pub position_secs: f64,

    pub duration_secs: Option<f64>,

    /// 0..=100
    pub progress: f64,
}

impl AudioModel {
    pub fn new() -> Self {
        Self {
            reciters: Vec::new(),
            current_reciter: None,
            state: PlayerState::Idle,
            current_sura: 1,
            current_ayah: 1,
            timings: Vec::new(),
            audio_loaded: false,
            source_url: None,
            load_generation: 0,
            position_secs: 0.0,
            duration_secs: None,
            progress: 0.0,
        }
    }

    /// Whether a track has been set on the media engine
    pub fn has_source(&self) -> bool {
        self.source_url.is_some()
    }

    /// Verse tracking is only meaningful with a timing table
    pub fn tracks_verses(&self) -> bool {
        !self.timings.is_empty()
    }

    /// Reset position and progress for a freshly loaded track
    pub fn reset_position(&mut self) {
        self.position_secs = 0.0;
        self.duration_secs = None;
        self.progress = 0.0;
        self.audio_loaded = false;
    }
}

impl Default for AudioModel {
    fn default() -> Self {
        Self::new()
    }
}
