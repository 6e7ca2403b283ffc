//! Media Event Handler
//!
//! Applies events from the media engine to the player state.

use crate::services::player::MediaEvent;
use crate::App;

pub fn handle_media_event(app: &mut App, event: MediaEvent) {
    // Left behind by a track that has since been replaced
    if event.generation() != app.model.audio.load_generation {
        crate::log_debug(&format!(
            "DEBUG [Player Event]: dropping stale event {:?} (current generation {})",
            event, app.model.audio.load_generation
        ));
        return;
    }

    match event {
        MediaEvent::TimeUpdate {
            position, duration, ..
        } => app.on_time_update(position, duration),
        MediaEvent::Metadata { duration, .. } => app.on_metadata(duration),
        MediaEvent::Ended { .. } => {
            crate::log_debug(&format!(
                "DEBUG [Player Event]: surah {} finished",
                app.model.audio.current_sura
            ));
            app.on_track_end();
        }
        MediaEvent::Error { message, .. } => app.on_media_error(&message),
    }
}
