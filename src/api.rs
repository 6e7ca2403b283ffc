use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// A narration (riwayah) offered by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct Riwayah {
    pub key: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name_ar: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name_en: String,
    #[serde(default)]
    pub total_pages: Option<u16>,
}

/// Kind of a printed mushaf line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineKind {
    Header,
    Basmala,
    #[default]
    Ayat,
    Empty,
}

impl LineKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "header" => LineKind::Header,
            "basmala" => LineKind::Basmala,
            "empty" => LineKind::Empty,
            // Unknown or missing tags render as verse text
            _ => LineKind::Ayat,
        }
    }
}

/// One printed line of a page as delivered by `/page/{n}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageLine {
    #[serde(rename = "type", default, deserialize_with = "deserialize_line_kind")]
    pub kind: LineKind,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub text: String,
    #[serde(default)]
    pub line_number: Option<u16>,
    #[serde(default)]
    pub sura_no: Option<u16>,
    #[serde(default)]
    pub sura_name: Option<String>,
    /// Verses touched by this line. Parsed once here; downstream code never re-parses.
    #[serde(default, deserialize_with = "deserialize_aya_numbers")]
    pub aya_numbers: Option<Vec<u16>>,
}

impl PageLine {
    /// Placeholder used to pad a page to its fixed line count
    pub fn empty() -> Self {
        Self {
            kind: LineKind::Empty,
            ..Default::default()
        }
    }

    pub fn first_aya(&self) -> Option<u16> {
        self.aya_numbers.as_ref().and_then(|n| n.first().copied())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagePayload {
    #[serde(default)]
    pub page: Option<u16>,
    #[serde(default)]
    pub riwayah: Option<String>,
    pub lines: Vec<PageLine>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub suras: Vec<u16>,
    #[serde(default)]
    pub juz: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Surah {
    pub number: u16,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub ayat_count: Option<u16>,
    #[serde(default)]
    pub start_page: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Juz {
    pub number: u8,
    #[serde(default)]
    pub start_sura: Option<u16>,
    #[serde(default)]
    pub start_aya: Option<u16>,
    #[serde(default)]
    pub start_page: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hizb {
    pub hizb_num: u8,
    #[serde(default)]
    pub juz: Option<u8>,
    #[serde(default)]
    pub start_sura_name: Option<String>,
    #[serde(default)]
    pub start_aya: Option<u16>,
    #[serde(default)]
    pub start_page: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tafseer {
    #[serde(default)]
    pub tafseer_text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub footnotes: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// A reciter together with one of their recorded editions (moshaf)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reciter {
    pub reciter_id: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name_ar: String,
    #[serde(default)]
    pub moshaf_id: Option<u32>,
    #[serde(default)]
    pub moshaf_name: Option<String>,
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub riwayah_key: Option<String>,
}

impl Reciter {
    /// Composite identity used for de-duplication and selection
    pub fn key(&self) -> (u32, Option<u32>) {
        (self.reciter_id, self.moshaf_id)
    }
}

/// Start offset of one verse inside a surah's audio track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AyahTiming {
    pub aya_no: u16,
    /// Milliseconds from the start of the track; a missing value counts as 0
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub start_time: u64,
    #[serde(default)]
    pub end_time: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub query: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub sura_no: u16,
    #[serde(default)]
    pub sura_name: Option<String>,
    pub aya_no: u16,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub text: String,
    pub page: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub riwayat_count: u64,
    #[serde(default)]
    pub total_ayat: u64,
    #[serde(default)]
    pub total_lines: u64,
    #[serde(default)]
    pub tafseer_count: u64,
    #[serde(default)]
    pub translations_count: u64,
    #[serde(default)]
    pub reciters_count: u64,
    #[serde(default)]
    pub timings_count: u64,
}

/// Helper function to deserialize null as the type's default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

fn deserialize_line_kind<'de, D>(deserializer: D) -> Result<LineKind, D::Error>
where
    D: Deserializer<'de>,
{
    let tag: Option<String> = Option::deserialize(deserializer)?;
    Ok(tag.as_deref().map(LineKind::from_tag).unwrap_or_default())
}

/// Accepts a JSON array of numbers or a string holding one.
/// Anything malformed (or an empty list) yields `None`.
fn deserialize_aya_numbers<'de, D>(deserializer: D) -> Result<Option<Vec<u16>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_aya_numbers(&value))
}

pub fn parse_aya_numbers(value: &serde_json::Value) -> Option<Vec<u16>> {
    use serde_json::Value;

    let numbers = match value {
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_u64().and_then(|n| u16::try_from(n).ok()))
            .collect::<Option<Vec<u16>>>()?,
        Value::String(raw) => serde_json::from_str::<Vec<u16>>(raw).ok()?,
        _ => return None,
    };

    if numbers.is_empty() {
        None
    } else {
        Some(numbers)
    }
}

/// Client for the read-only Quran JSON API
#[derive(Clone)]
pub struct QuranClient {
    base_url: String,
    client: Client,
}

impl QuranClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` under the base URL and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", path))?
            .error_for_status()?;

        let body = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", path))?;

        Ok(body)
    }

    pub async fn get_riwayat(&self) -> Result<Vec<Riwayah>> {
        self.get_json("/riwayat").await
    }

    pub async fn get_page(&self, page: u16, riwayah: &str) -> Result<PagePayload> {
        self.get_json(&format!("/page/{}?riwayah={}", page, urlencoding::encode(riwayah)))
            .await
    }

    pub async fn get_surahs(&self, riwayah: &str) -> Result<Vec<Surah>> {
        self.get_json(&format!("/surahs?riwayah={}", urlencoding::encode(riwayah)))
            .await
    }

    pub async fn get_juzs(&self, riwayah: &str) -> Result<Vec<Juz>> {
        self.get_json(&format!("/juzs?riwayah={}", urlencoding::encode(riwayah)))
            .await
    }

    pub async fn get_ahzab(&self, riwayah: &str) -> Result<Vec<Hizb>> {
        self.get_json(&format!("/ahzab?riwayah={}", urlencoding::encode(riwayah)))
            .await
    }

    pub async fn get_tafseer(&self, sura: u16, aya: u16) -> Result<Tafseer> {
        self.get_json(&format!("/tafseer/{}/{}", sura, aya)).await
    }

    pub async fn get_translation(&self, sura: u16, aya: u16, lang: &str) -> Result<Translation> {
        self.get_json(&format!(
            "/translation/{}/{}?lang={}",
            sura,
            aya,
            urlencoding::encode(lang)
        ))
        .await
    }

    pub async fn get_reciters(&self, riwayah: &str) -> Result<Vec<Reciter>> {
        self.get_json(&format!("/reciters?riwayah={}", urlencoding::encode(riwayah)))
            .await
    }

    pub async fn search(&self, query: &str, riwayah: &str) -> Result<SearchResponse> {
        self.get_json(&format!(
            "/search?q={}&riwayah={}",
            urlencoding::encode(query),
            urlencoding::encode(riwayah)
        ))
        .await
    }

    pub async fn get_stats(&self) -> Result<Stats> {
        self.get_json("/stats").await
    }

    pub async fn get_timings(
        &self,
        reciter_id: u32,
        sura: u16,
        moshaf_id: Option<u32>,
    ) -> Result<Vec<AyahTiming>> {
        let mut path = format!("/timings/{}/{}", reciter_id, sura);
        if let Some(moshaf_id) = moshaf_id {
            path.push_str(&format!("?moshaf_id={}", moshaf_id));
        }
        self.get_json(&path).await
    }
}
