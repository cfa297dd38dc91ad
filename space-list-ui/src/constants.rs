// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Prefix used for generated ids when the caller does not pass an `id`.
pub const DEFAULT_ID_PREFIX: &str = "cui-space-list-meeting-";

pub const SPACE_MEETING_CLASS: &str = "cui-list-item--space-meeting";
pub const UNREAD_CLASS: &str = "cui-list-item--unread";
pub const ATTENDEES_TRIGGER_CLASS: &str = "cui-list-item--space-meeting--attendees";
pub const HEADER_CLASS: &str = "cui-list-item__header";
pub const SUBHEADER_CLASS: &str = "cui-list-item__subheader";

/// Vertical gap between the attendee trigger and its popover.
pub const ATTENDEES_POPOVER_OFFSET: i32 = 3;

pub const PEOPLE_ICON: &str = "people_12";
pub const DEVICE_ICON: &str = "spark-board_16";
pub const MENTION_ICON: &str = "mention_12";

/// Optional runtime settings injected by the host page as `window.__APP_CONFIG`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
    /// JSON roster rendered by the gallery's attendee row.
    #[serde(rename = "attendeesJson")]
    #[serde(default)]
    pub attendees_json: Option<String>,
}

impl RuntimeConfig {
    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info)
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "no global window".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}
