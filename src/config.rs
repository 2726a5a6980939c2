use gloo::console::warn;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use web_sys::window;

pub const DEFAULT_ENDPOINT: &str = "https://api2.bmsamay.com/latest_articles";
pub const DEFAULT_TITLE: &str = "Chess News";

/// `<script id="chess-news-config" type="application/json">` in index.html
const CONFIG_SCRIPT_ID: &str = "chess-news-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub endpoint: String,
    pub title: String,
    pub show_chessbase: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            show_chessbase: true,
        }
    }
}

impl PageConfig {
    /// Only a JSON object is accepted, never an array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(json)? {
            obj @ Value::Object(_) => serde_json::from_value(obj),
            _ => Err(serde_json::Error::custom("config must be a JSON object")),
        }
    }

    /// Embedded config block if present and valid, defaults otherwise.
    pub fn from_dom() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        if json.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(format!("Ignoring malformed #{CONFIG_SCRIPT_ID}: {e}"));
                Self::default()
            }
        }
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content()
}
