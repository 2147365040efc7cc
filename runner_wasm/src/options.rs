//! Options object passed to `start_game` from JavaScript

use runner_core::Config;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ClientError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartOptions {
    pub canvas_id: String,
    pub score_id: String,
    pub music_id: String,
    pub jump_button_id: String,
    pub log_level: String,
    /// Fixed seed for reproducible runs; random when absent
    pub seed: Option<u64>,
    pub config: Config,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            canvas_id: "game".to_string(),
            score_id: "score".to_string(),
            music_id: "music".to_string(),
            jump_button_id: "jump-button".to_string(),
            log_level: "info".to_string(),
            seed: None,
            config: Config::default(),
        }
    }
}

impl StartOptions {
    /// Parse the JS value; `undefined` and `null` give the defaults
    pub fn from_js(value: JsValue) -> Result<Self, ClientError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let options: Self =
            serde_wasm_bindgen::from_value(value).map_err(|e| ClientError::Options(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        self.config
            .validate()
            .map_err(|e| ClientError::Options(e.to_string()))
    }

    /// Unknown names fall back to Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
