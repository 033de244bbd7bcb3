use std::time::Duration;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_URL: &str =
    "https://mate-academy.github.io/react_people-table/api/people.json";
pub const DEFAULT_FETCH_DELAY_MS: u64 = 500;

const API_URL_KEY: &str = "people_api_url";
const FETCH_DELAY_KEY: &str = "people_fetch_delay_ms";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    /// Pause before each request so the loader is visible.
    pub fetch_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("PEOPLE_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with whatever `lookup` returns for the override keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_KEY).filter(|u| !u.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(FETCH_DELAY_KEY) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.fetch_delay = Duration::from_millis(ms),
                Err(e) => tracing::warn!("ignoring {FETCH_DELAY_KEY}={raw:?}: {e}"),
            }
        }
        config
    }

    /// Reads overrides from `localStorage`, falling back to defaults when
    /// storage is unavailable.
    pub fn load() -> Self {
        let storage = web_sys::window()
            .map(|w| w.local_storage())
            .transpose()
            .unwrap_or_else(|e: JsValue| {
                tracing::warn!("localStorage unavailable: {e:?}");
                None
            })
            .flatten();

        match storage {
            Some(storage) => Self::from_lookup(|key| storage.get_item(key).ok().flatten()),
            None => Self::default(),
        }
    }
}
