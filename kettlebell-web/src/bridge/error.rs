//! Errors surfaced to JavaScript

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while decoding input or configuring an analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("invalid landmark data length: {0} (expected 99 or 132)")]
    InvalidLandmarkCount(usize),

    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config could not be decoded: {0}")]
    ConfigDecode(String),
}

impl From<AnalyzerError> for JsValue {
    fn from(err: AnalyzerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
