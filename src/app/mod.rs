//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - Services (API worker, media engine)
//! - Logic (pure business logic in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

use tokio::sync::mpsc::UnboundedSender;

use crate::model::{Model, RequestSlot};
use crate::services::api::ApiRequest;
use crate::services::player::MediaCommand;

pub(crate) mod audio;
pub(crate) mod detail;
pub(crate) mod index;
pub(crate) mod navigation;
pub(crate) mod search;

pub struct App {
    pub model: Model,

    api_tx: UnboundedSender<ApiRequest>,
    media_tx: UnboundedSender<MediaCommand>,
}

impl App {
    pub fn new(
        model: Model,
        api_tx: UnboundedSender<ApiRequest>,
        media_tx: UnboundedSender<MediaCommand>,
    ) -> Self {
        Self {
            model,
            api_tx,
            media_tx,
        }
    }

    /// Initial fetches: stats, narrations, the start page and reciters
    pub fn start(&mut self) {
        let seq = self.model.requests.issue(RequestSlot::Stats);
        self.send_request(ApiRequest::GetStats { seq });

        let seq = self.model.requests.issue(RequestSlot::Riwayat);
        self.send_request(ApiRequest::GetRiwayat { seq });

        self.go_to_page(self.model.reader.current_page as i64);
        self.load_reciters();
    }

    pub(crate) fn send_request(&self, request: ApiRequest) {
        if self.api_tx.send(request).is_err() {
            crate::log_debug("DEBUG [App]: API worker is gone, request dropped");
        }
    }

    pub(crate) fn send_media(&self, command: MediaCommand) {
        if self.media_tx.send(command).is_err() {
            crate::log_debug("DEBUG [App]: player task is gone, command dropped");
        }
    }
}
