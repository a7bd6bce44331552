//! Persisted best-score record.
//!
//! One `localStorage` entry holds the best run ever observed, as the JSON
//! record the original page already used. A missing or malformed entry is a
//! zero score, never an error.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::{Storage, window};

pub const STORAGE_KEY: &str = "snake_highscore";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub date: String,
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            score: 0,
            date: "N/A".to_string(),
        }
    }
}

impl HighScore {
    /// A record is only replaced on strict improvement.
    pub fn beaten_by(&self, score: u32) -> bool {
        score > self.score
    }
}

/// Decodes a stored record, tolerating absence and malformed JSON.
pub fn decode(raw: Option<&str>) -> HighScore {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

pub fn encode(record: &HighScore) -> String {
    serde_json::to_string(record).unwrap_or_default()
}

fn storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Loads the persisted record, defaulting when storage is unavailable.
pub fn load() -> HighScore {
    decode(
        storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .as_deref(),
    )
}

/// Persists a record. Storage failures (quota, disabled storage) are
/// swallowed; the in-page labels still show the new best.
pub fn store(record: &HighScore) {
    if let Some(s) = storage() {
        let _ = s.set_item(STORAGE_KEY, &encode(record));
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Date)]
    type JsDate;

    #[wasm_bindgen(constructor, js_class = "Date")]
    fn new_now() -> JsDate;

    #[wasm_bindgen(method, js_name = toLocaleString)]
    fn to_locale_string(this: &JsDate) -> String;
}

/// Host-locale timestamp used to stamp a freshly beaten record.
pub fn now_label() -> String {
    JsDate::new_now().to_locale_string()
}
