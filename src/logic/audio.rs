//! Audio Sync Logic
//!
//! Pure functions behind the verse-synchronised player: reciter
//! de-duplication, track URLs, time→verse lookup and the decisions taken by
//! next/previous verse and end-of-track.

use std::collections::HashSet;

use crate::api::{AyahTiming, Reciter};

/// Number of surahs in the corpus
pub const LAST_SURAH: u16 = 114;

/// What to do once a surah's timings and track have been loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterLoad {
    /// Leave the player in the loaded state
    Stay,
    /// Jump to this verse and play
    Play(u16),
    /// Jump to the last verse listed in the timing table and play
    PlayLast,
}

/// Outcome of a next/previous verse request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseStep {
    /// Seek within the current track
    Jump(u16),
    /// Load another surah first
    LoadSurah { sura: u16, then: AfterLoad },
    /// Nothing further in that direction
    NoOp,
}

/// Remove duplicate reciter/edition pairs, keeping first occurrences in order
pub fn dedupe_reciters(reciters: &[Reciter]) -> Vec<Reciter> {
    let mut seen = HashSet::new();
    reciters
        .iter()
        .filter(|r| seen.insert(r.key()))
        .cloned()
        .collect()
}

/// Track URL for a surah: `<server><sura padded to 3 digits>.mp3`
///
/// # Examples
/// ```
/// use mushaftui::logic::audio::audio_url;
///
/// assert_eq!(audio_url("https://server8.mp3quran.net/afs/", 1), "https://server8.mp3quran.net/afs/001.mp3");
/// assert_eq!(audio_url("https://x/", 114), "https://x/114.mp3");
/// ```
pub fn audio_url(server_url: &str, sura: u16) -> String {
    format!("{}{:03}.mp3", server_url, sura)
}

/// Timing entry for a verse, if the table lists it
pub fn timing_for(timings: &[AyahTiming], aya: u16) -> Option<&AyahTiming> {
    timings.iter().find(|t| t.aya_no == aya)
}

/// Seek offset in seconds for a timing entry
pub fn seek_seconds(timing: &AyahTiming) -> f64 {
    timing.start_time as f64 / 1000.0
}

/// Verse being recited at `position_ms`
///
/// Scans from the end for the last entry whose start is at or before the
/// position.
///
/// # Examples
/// ```
/// use mushaftui::api::AyahTiming;
/// use mushaftui::logic::audio::ayah_at;
///
/// let table = [
///     AyahTiming { aya_no: 1, start_time: 0, end_time: None },
///     AyahTiming { aya_no: 2, start_time: 5000, end_time: None },
///     AyahTiming { aya_no: 3, start_time: 12000, end_time: None },
/// ];
/// assert_eq!(ayah_at(&table, 7000.0), Some(2));
/// ```
pub fn ayah_at(timings: &[AyahTiming], position_ms: f64) -> Option<u16> {
    timings
        .iter()
        .rev()
        .find(|t| position_ms >= t.start_time as f64)
        .map(|t| t.aya_no)
}

/// Decide where "next verse" goes
pub fn next_verse_step(timings: &[AyahTiming], sura: u16, aya: u16) -> VerseStep {
    let next = aya.saturating_add(1);
    if timing_for(timings, next).is_some() {
        VerseStep::Jump(next)
    } else if sura < LAST_SURAH {
        VerseStep::LoadSurah {
            sura: sura + 1,
            then: AfterLoad::Play(1),
        }
    } else {
        VerseStep::NoOp
    }
}

/// Decide where "previous verse" goes
pub fn prev_verse_step(sura: u16, aya: u16) -> VerseStep {
    if aya > 1 {
        VerseStep::Jump(aya - 1)
    } else if sura > 1 {
        VerseStep::LoadSurah {
            sura: sura - 1,
            then: AfterLoad::PlayLast,
        }
    } else {
        VerseStep::NoOp
    }
}

/// Surah to continue with when a track finishes naturally
pub fn next_surah_after_end(sura: u16) -> Option<u16> {
    (sura < LAST_SURAH).then_some(sura + 1)
}

/// Playback progress as a percentage (0 when the duration is unknown)
pub fn progress_percent(position_secs: f64, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 || !duration_secs.is_finite() {
        return 0.0;
    }
    (position_secs / duration_secs * 100.0).clamp(0.0, 100.0)
}

/// Map a seek-bar percentage onto the track
pub fn seek_position(percent: f64, duration_secs: f64) -> f64 {
    (percent.clamp(0.0, 100.0) / 100.0) * duration_secs
}
