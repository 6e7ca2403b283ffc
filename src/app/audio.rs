//! Verse-synchronised player
//!
//! State machine: `Idle -> Loaded -> Playing <-> Paused`. Loading a surah
//! always goes through its timing table first; the `AfterLoad` carried by
//! the timings request says what happens once the track is set.

use crate::api::{AyahTiming, Reciter};
use crate::logic;
use crate::logic::audio::{AfterLoad, VerseStep};
use crate::model::{PlayerState, RequestSlot};
use crate::services::api::ApiRequest;
use crate::services::player::MediaCommand;
use crate::App;

impl App {
    /// Fetch reciter/edition pairs for the active narration
    pub fn load_reciters(&mut self) {
        let seq = self.model.requests.issue(RequestSlot::Reciters);
        self.send_request(ApiRequest::GetReciters {
            seq,
            riwayah: self.model.reader.riwayah.clone(),
        });
    }

    pub fn apply_reciters(&mut self, reciters: Option<Vec<Reciter>>) {
        match reciters {
            Some(list) => {
                self.model.audio.reciters = logic::audio::dedupe_reciters(&list);
                crate::log_debug(&format!(
                    "DEBUG [Audio]: {} reciters ({} unique)",
                    list.len(),
                    self.model.audio.reciters.len()
                ));
                self.refresh_reciter_panel();
            }
            None => {
                self.model.audio.reciters.clear();
                self.fill_panel(crate::model::PanelKind::Reciters, None);
            }
        }
    }

    /// Choose a reciter/edition and load the current surah with it
    pub fn select_reciter(&mut self, reciter_id: u32, moshaf_id: Option<u32>) {
        let Some(reciter) = self
            .model
            .audio
            .reciters
            .iter()
            .find(|r| r.key() == (reciter_id, moshaf_id))
            .cloned()
        else {
            crate::log_debug(&format!(
                "DEBUG [Audio]: unknown reciter {}/{:?}",
                reciter_id, moshaf_id
            ));
            return;
        };

        if reciter.server_url.is_none() {
            self.model.show_toast("Error: reciter has no audio server".to_string());
            return;
        }

        self.model.show_toast(format!("Reciter: {}", reciter.name_ar));
        self.model.audio.current_reciter = Some(reciter);
        self.load_surah_audio(self.model.audio.current_sura, AfterLoad::Stay);
    }

    /// Request the timing table for `sura`; the track is set when it arrives
    pub fn load_surah_audio(&mut self, sura: u16, after: AfterLoad) {
        let Some(reciter) = self.model.audio.current_reciter.as_ref() else {
            return;
        };
        let (reciter_id, moshaf_id) = reciter.key();

        self.model.audio.current_sura = sura;
        self.model.audio.current_ayah = 1;

        let seq = self.model.requests.issue(RequestSlot::Timings);
        self.send_request(ApiRequest::GetTimings {
            seq,
            reciter_id,
            moshaf_id,
            sura,
            after,
        });
    }

    /// Set the track once the timing table (or its failure) is in
    pub fn on_timings_loaded(&mut self, sura: u16, after: AfterLoad, timings: Option<Vec<AyahTiming>>) {
        let Some(server_url) = self
            .model
            .audio
            .current_reciter
            .as_ref()
            .and_then(|r| r.server_url.clone())
        else {
            self.model.show_toast("Error: reciter has no audio server".to_string());
            return;
        };

        let mut timings = timings.unwrap_or_default();
        timings.sort_by_key(|t| t.aya_no);

        let url = logic::audio::audio_url(&server_url, sura);
        crate::log_debug(&format!(
            "DEBUG [Audio]: loading {} ({} timings, then {:?})",
            url,
            timings.len(),
            after
        ));
        self.load_track(url);

        let audio = &mut self.model.audio;
        audio.current_sura = sura;
        audio.current_ayah = 1;
        audio.timings = timings;
        audio.state = PlayerState::Loaded;

        match after {
            AfterLoad::Stay => self.model.refresh_highlight(),
            AfterLoad::Play(aya) => self.play_ayah(aya),
            AfterLoad::PlayLast => match self.model.audio.timings.last().map(|t| t.aya_no) {
                Some(last) => self.play_ayah(last),
                None => self.model.refresh_highlight(),
            },
        }
    }

    /// Hand `url` to the media engine under a fresh generation, paused at 0
    fn load_track(&mut self, url: String) {
        let audio = &mut self.model.audio;
        audio.load_generation += 1;
        audio.source_url = Some(url.clone());
        audio.reset_position();
        let generation = audio.load_generation;
        self.send_media(MediaCommand::Load { generation, url });
    }

    pub fn toggle_play(&mut self) {
        if !self.model.audio.has_source() {
            return;
        }
        match self.model.audio.state {
            PlayerState::Idle => {}
            PlayerState::Loaded | PlayerState::Paused => {
                self.send_media(MediaCommand::Play);
                self.model.audio.state = PlayerState::Playing;
                self.model.refresh_highlight();
            }
            PlayerState::Playing => {
                self.send_media(MediaCommand::Pause);
                self.model.audio.state = PlayerState::Paused;
            }
        }
    }

    /// Seek to a verse of the loaded surah and play
    ///
    /// Without a timing table the track restarts from zero; a verse missing
    /// from the table is ignored.
    pub fn play_ayah(&mut self, aya: u16) {
        if !self.model.audio.has_source() {
            return;
        }

        let seconds = if self.model.audio.tracks_verses() {
            let Some(timing) = logic::audio::timing_for(&self.model.audio.timings, aya) else {
                return;
            };
            self.model.audio.current_ayah = aya;
            logic::audio::seek_seconds(timing)
        } else {
            0.0
        };

        self.send_media(MediaCommand::Seek { seconds });
        self.send_media(MediaCommand::Play);
        self.model.audio.state = PlayerState::Playing;
        self.model.refresh_highlight();
    }

    pub fn next_ayah(&mut self) {
        if !self.model.audio.has_source() {
            return;
        }
        let audio = &self.model.audio;
        let step = logic::audio::next_verse_step(&audio.timings, audio.current_sura, audio.current_ayah);
        self.run_verse_step(step);
    }

    pub fn prev_ayah(&mut self) {
        if !self.model.audio.has_source() {
            return;
        }
        let step =
            logic::audio::prev_verse_step(self.model.audio.current_sura, self.model.audio.current_ayah);
        self.run_verse_step(step);
    }

    fn run_verse_step(&mut self, step: VerseStep) {
        match step {
            VerseStep::Jump(aya) => self.play_ayah(aya),
            VerseStep::LoadSurah { sura, then } => self.load_surah_audio(sura, then),
            VerseStep::NoOp => {}
        }
    }

    /// Play the verse under the line cursor, loading its surah if needed
    pub fn play_from_cursor(&mut self) {
        let Some(ayah) = self
            .model
            .reader
            .cursor_line()
            .and_then(|l| logic::page::selection_for_line(&l.line))
        else {
            return;
        };

        if self.model.audio.current_reciter.is_none() {
            self.model.show_toast("Choose a reciter first (r)".to_string());
            return;
        }

        if ayah.sura != self.model.audio.current_sura || !self.model.audio.has_source() {
            self.load_surah_audio(ayah.sura, AfterLoad::Play(ayah.aya));
        } else {
            self.play_ayah(ayah.aya);
        }
    }

    pub fn on_time_update(&mut self, position: f64, duration: Option<f64>) {
        let Some(duration) = duration.or(self.model.audio.duration_secs).filter(|d| *d > 0.0) else {
            return;
        };

        let audio = &mut self.model.audio;
        audio.position_secs = position;
        audio.duration_secs = Some(duration);
        audio.progress = logic::audio::progress_percent(position, duration);

        if !audio.tracks_verses() {
            return;
        }
        if let Some(aya) = logic::audio::ayah_at(&audio.timings, position * 1000.0) {
            if aya != audio.current_ayah {
                audio.current_ayah = aya;
                self.model.refresh_highlight();
            }
        }
    }

    pub fn on_metadata(&mut self, duration: f64) {
        self.model.audio.audio_loaded = true;
        self.model.audio.duration_secs = Some(duration);
    }

    /// Track finished: continue with the next surah, or stop after the last
    ///
    /// The engine drops a file once it has played to the end, so stopping
    /// re-loads the same track paused at its start to keep it playable.
    pub fn on_track_end(&mut self) {
        self.model.audio.state = PlayerState::Paused;
        match logic::audio::next_surah_after_end(self.model.audio.current_sura) {
            Some(next) => self.load_surah_audio(next, AfterLoad::Play(1)),
            None => {
                if let Some(url) = self.model.audio.source_url.clone() {
                    self.load_track(url);
                }
                self.model.audio.current_ayah = 1;
                self.model.refresh_highlight();
            }
        }
    }

    pub fn on_media_error(&mut self, message: &str) {
        crate::log_debug(&format!("DEBUG [Audio]: media error: {}", message));
        if self.model.audio.state != PlayerState::Idle {
            self.model.audio.state = PlayerState::Paused;
        }
        self.model.show_toast("Error: audio failed to load".to_string());
    }

    /// Seek to `percent` of the track; ignored until the duration is known
    pub fn seek_percent(&mut self, percent: f64) {
        let Some(duration) = self.model.audio.duration_secs.filter(|d| *d > 0.0) else {
            return;
        };
        let seconds = logic::audio::seek_position(percent, duration);
        self.send_media(MediaCommand::Seek { seconds });
        self.model.audio.position_secs = seconds;
        self.model.audio.progress = logic::audio::progress_percent(seconds, duration);
    }
}
