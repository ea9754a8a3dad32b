//! Page configuration. Every field has a default matching the platform's markup, so
//! `init_page()` works without any configuration from the host page.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Cookie holding the CSRF token.
    pub csrf_cookie: String,
    /// Class toggled on pulsing buttons and selected stars.
    pub active_class: String,
    pub pulse_ms: u32,
    /// Play count label; `{count}` is replaced with the new value.
    pub play_count_label: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: "csrftoken".to_string(),
            active_class: "active".to_string(),
            pulse_ms: 300,
            play_count_label: "Запусков: {count}".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn play_count_text(&self, count: u64) -> String {
        self.play_count_label.replace("{count}", &count.to_string())
    }
}
