//! Index list building
//!
//! Turns index payloads into side-panel rows. Each row carries the action
//! its activation performs; rows with no usable target get no action.

use crate::api::{Hizb, Juz, Reciter, Riwayah, Surah};
use crate::model::types::{EntryAction, ListEntry};

fn page_label(page: Option<u16>) -> Option<String> {
    page.map(|p| format!("p. {}", p))
}

pub fn surah_entries(surahs: &[Surah]) -> Vec<ListEntry> {
    surahs
        .iter()
        .map(|s| ListEntry {
            number: s.number.to_string(),
            title: s.name_ar.clone(),
            subtitle: Some(match (&s.name_en, s.ayat_count) {
                (Some(en), Some(count)) => format!("{} · {} ayat", en, count),
                (Some(en), None) => en.clone(),
                (None, Some(count)) => format!("{} ayat", count),
                (None, None) => String::new(),
            })
            .filter(|sub| !sub.is_empty()),
            trailing: page_label(s.start_page),
            action: s.start_page.map(EntryAction::GoToPage),
        })
        .collect()
}

pub fn juz_entries(juzs: &[Juz]) -> Vec<ListEntry> {
    juzs.iter()
        .map(|j| ListEntry {
            number: j.number.to_string(),
            title: format!("Juz {}", j.number),
            subtitle: j
                .start_sura
                .map(|sura| format!("from {}:{}", sura, j.start_aya.unwrap_or(1))),
            trailing: page_label(j.start_page),
            action: j.start_page.map(EntryAction::GoToPage),
        })
        .collect()
}

pub fn hizb_entries(ahzab: &[Hizb]) -> Vec<ListEntry> {
    ahzab
        .iter()
        .map(|h| ListEntry {
            number: h.hizb_num.to_string(),
            title: format!("Hizb {}", h.hizb_num),
            subtitle: Some(format!(
                "{} - aya {}",
                h.start_sura_name.as_deref().unwrap_or(""),
                h.start_aya.unwrap_or(1)
            )),
            trailing: page_label(h.start_page),
            action: h.start_page.map(EntryAction::GoToPage),
        })
        .collect()
}

/// Reciter picker rows; `current` is marked in the trailing column
pub fn reciter_entries(reciters: &[Reciter], current: Option<&Reciter>) -> Vec<ListEntry> {
    reciters
        .iter()
        .enumerate()
        .map(|(idx, r)| ListEntry {
            number: (idx + 1).to_string(),
            title: r.name_ar.clone(),
            subtitle: r.moshaf_name.clone(),
            trailing: current
                .filter(|c| c.key() == r.key())
                .map(|_| "●".to_string()),
            action: Some(EntryAction::SelectReciter {
                reciter_id: r.reciter_id,
                moshaf_id: r.moshaf_id,
            }),
        })
        .collect()
}

pub fn riwayah_entries(riwayat: &[Riwayah], active: &str) -> Vec<ListEntry> {
    riwayat
        .iter()
        .enumerate()
        .map(|(idx, r)| ListEntry {
            number: (idx + 1).to_string(),
            title: if r.name_en.is_empty() {
                r.name_ar.clone()
            } else {
                format!("{} ({})", r.name_en, r.name_ar)
            },
            subtitle: r.total_pages.map(|p| format!("{} pages", p)),
            trailing: (r.key == active).then(|| "●".to_string()),
            action: Some(EntryAction::SelectRiwayah(r.key.clone())),
        })
        .collect()
}
