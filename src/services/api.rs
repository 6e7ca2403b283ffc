use tokio::sync::mpsc;

use crate::api::{
    AyahTiming, Hizb, Juz, PagePayload, QuranClient, Reciter, Riwayah, SearchResponse, Stats,
    Surah, Tafseer, Translation,
};
use crate::log_debug;
use crate::logic::audio::AfterLoad;
use crate::logic::errors::describe_failure;

/// API request types
///
/// Every request carries the sequence number the UI issued for its slot;
/// the matching response echoes it back.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// List narrations
    GetRiwayat { seq: u64 },

    /// Fetch one mushaf page
    GetPage { seq: u64, page: u16, riwayah: String },

    /// Surah index
    GetSurahs { seq: u64, riwayah: String },

    /// Part (juz) index
    GetJuzs { seq: u64, riwayah: String },

    /// Section (hizb) index
    GetAhzab { seq: u64, riwayah: String },

    GetTafseer { seq: u64, sura: u16, aya: u16 },

    GetTranslation { seq: u64, sura: u16, aya: u16, lang: String },

    /// Reciter/edition pairs for a narration
    GetReciters { seq: u64, riwayah: String },

    Search { seq: u64, query: String, riwayah: String },

    GetStats { seq: u64 },

    /// Verse timing table for one surah; `after` says what the player does
    /// once the track is loaded
    GetTimings {
        seq: u64,
        reciter_id: u32,
        moshaf_id: Option<u32>,
        sura: u16,
        after: AfterLoad,
    },
}

impl ApiRequest {
    pub fn seq(&self) -> u64 {
        match self {
            ApiRequest::GetRiwayat { seq }
            | ApiRequest::GetPage { seq, .. }
            | ApiRequest::GetSurahs { seq, .. }
            | ApiRequest::GetJuzs { seq, .. }
            | ApiRequest::GetAhzab { seq, .. }
            | ApiRequest::GetTafseer { seq, .. }
            | ApiRequest::GetTranslation { seq, .. }
            | ApiRequest::GetReciters { seq, .. }
            | ApiRequest::Search { seq, .. }
            | ApiRequest::GetStats { seq }
            | ApiRequest::GetTimings { seq, .. } => *seq,
        }
    }
}

/// API response types
///
/// A `None` payload means the call failed (transport, status or decode);
/// the failure has already been logged by the worker.
#[derive(Debug)]
pub enum ApiResponse {
    RiwayatResult {
        seq: u64,
        riwayat: Option<Vec<Riwayah>>,
    },

    PageResult {
        seq: u64,
        page: u16,
        payload: Option<PagePayload>,
    },

    SurahsResult {
        seq: u64,
        surahs: Option<Vec<Surah>>,
    },

    JuzsResult {
        seq: u64,
        juzs: Option<Vec<Juz>>,
    },

    AhzabResult {
        seq: u64,
        ahzab: Option<Vec<Hizb>>,
    },

    TafseerResult {
        seq: u64,
        sura: u16,
        aya: u16,
        tafseer: Option<Tafseer>,
    },

    TranslationResult {
        seq: u64,
        sura: u16,
        aya: u16,
        translation: Option<Translation>,
    },

    RecitersResult {
        seq: u64,
        reciters: Option<Vec<Reciter>>,
    },

    SearchResult {
        seq: u64,
        query: String,
        response: Option<SearchResponse>,
    },

    StatsResult {
        seq: u64,
        stats: Option<Stats>,
    },

    TimingsResult {
        seq: u64,
        sura: u16,
        after: AfterLoad,
        timings: Option<Vec<AyahTiming>>,
    },
}

/// Collapse a client result into the "no data" sentinel, logging failures
fn or_log<T>(operation: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log_debug(&format!("DEBUG [API Service]: {}", describe_failure(operation, &e)));
            None
        }
    }
}

/// API service worker that executes requests in the background
pub struct ApiService {
    client: QuranClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: QuranClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            response_tx,
        }
    }

    /// Spawn a task for one request; no queueing, no retries
    fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            let seq = request.seq();
            let response = Self::execute_request(&client, request).await;
            if response_tx.send(response).is_err() {
                log_debug(&format!(
                    "DEBUG [API Service]: UI gone, dropping response seq={}",
                    seq
                ));
            }
        });
    }

    /// Execute an API request and return the response
    pub async fn execute_request(client: &QuranClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::GetRiwayat { seq } => ApiResponse::RiwayatResult {
                seq,
                riwayat: or_log("riwayat", client.get_riwayat().await),
            },

            ApiRequest::GetPage { seq, page, riwayah } => {
                log_debug(&format!(
                    "DEBUG [API Service GetPage]: START page={} riwayah={} seq={}",
                    page, riwayah, seq
                ));
                let payload = or_log(&format!("page {}", page), client.get_page(page, &riwayah).await);
                log_debug(&format!(
                    "DEBUG [API Service GetPage]: END page={} success={}",
                    page,
                    payload.is_some()
                ));
                ApiResponse::PageResult { seq, page, payload }
            }

            ApiRequest::GetSurahs { seq, riwayah } => ApiResponse::SurahsResult {
                seq,
                surahs: or_log("surahs", client.get_surahs(&riwayah).await),
            },

            ApiRequest::GetJuzs { seq, riwayah } => ApiResponse::JuzsResult {
                seq,
                juzs: or_log("juzs", client.get_juzs(&riwayah).await),
            },

            ApiRequest::GetAhzab { seq, riwayah } => ApiResponse::AhzabResult {
                seq,
                ahzab: or_log("ahzab", client.get_ahzab(&riwayah).await),
            },

            ApiRequest::GetTafseer { seq, sura, aya } => ApiResponse::TafseerResult {
                seq,
                sura,
                aya,
                tafseer: or_log(
                    &format!("tafseer {}:{}", sura, aya),
                    client.get_tafseer(sura, aya).await,
                ),
            },

            ApiRequest::GetTranslation {
                seq,
                sura,
                aya,
                lang,
            } => ApiResponse::TranslationResult {
                seq,
                sura,
                aya,
                translation: or_log(
                    &format!("translation {}:{} ({})", sura, aya, lang),
                    client.get_translation(sura, aya, &lang).await,
                ),
            },

            ApiRequest::GetReciters { seq, riwayah } => ApiResponse::RecitersResult {
                seq,
                reciters: or_log("reciters", client.get_reciters(&riwayah).await),
            },

            ApiRequest::Search {
                seq,
                query,
                riwayah,
            } => {
                let response = or_log("search", client.search(&query, &riwayah).await);
                ApiResponse::SearchResult {
                    seq,
                    query,
                    response,
                }
            }

            ApiRequest::GetStats { seq } => ApiResponse::StatsResult {
                seq,
                stats: or_log("stats", client.get_stats().await),
            },

            ApiRequest::GetTimings {
                seq,
                reciter_id,
                moshaf_id,
                sura,
                after,
            } => ApiResponse::TimingsResult {
                seq,
                sura,
                after,
                timings: or_log(
                    &format!("timings {}/{}", reciter_id, sura),
                    client.get_timings(reciter_id, sura, moshaf_id).await,
                ),
            },
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: QuranClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(client, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        log_debug("DEBUG [API Service]: request channel closed, worker exiting");
    });

    (request_tx, response_rx)
}
