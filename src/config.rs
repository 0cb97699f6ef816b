//! Frontend Configuration
//!
//! Optional overrides from `<meta name="summit:config" content="{...}">`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

const META_SELECTOR: &str = "meta[name=\"summit:config\"]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummitConfig {
    /// Page numbers shown around the current page
    pub page_window: u32,
    /// Build job refresh period
    pub poll_interval_ms: u32,
    /// Tasks shown on the home timeline
    pub timeline_limit: usize,
    pub log_level: String,
}

impl Default for SummitConfig {
    fn default() -> Self {
        Self {
            page_window: 10,
            poll_interval_ms: 500,
            timeline_limit: 10,
            log_level: "info".to_string(),
        }
    }
}

impl SummitConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the page's config meta tag.
    ///
    /// Returns the config plus the parse error, if any, so the caller can
    /// report it once logging is installed.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        let content = crate::dom::document()
            .ok()
            .and_then(|d| d.query_selector(META_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());
        match content {
            None => (Self::default(), None),
            Some(json) => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummitConfig::default();
        assert_eq!(config.page_window, 10);
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.timeline_limit, 10);
    }

    #[test]
    fn test_partial_override() {
        let config = SummitConfig::from_json(r#"{"pageWindow": 4, "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.page_window, 4);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.poll_interval_ms, 500);
    }

    #[test]
    fn test_invalid_json() {
        assert!(SummitConfig::from_json("{pageWindow").is_err());
    }
}
