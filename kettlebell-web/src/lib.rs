//! Kettlebell Web - swing rep counter and hinge form checker
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! ```javascript
//! import init, { SwingAnalyzer, initLogging } from './kettlebell_web.js';
//!
//! await init();
//! initLogging('info');
//! const analyzer = new SwingAnalyzer();
//!
//! pose.onResults((results) => {
//!     if (!results.poseLandmarks) return;
//!     const flat = new Float32Array(results.poseLandmarks.flatMap(
//!         (l) => [l.x, l.y, l.z, l.visibility ?? 1]));
//!     const r = analyzer.processLandmarks(flat, 1280, 720, performance.now());
//!     if (r) draw(r.repCount, r.feedback, r.feedbackColor);
//! });
//! ```

pub mod geometry;
pub mod analyzer;
pub mod bridge;

use wasm_bindgen::prelude::*;

pub use analyzer::{AnalysisResult, Feedback, FeedbackStyle, HingeThresholds, Phase, RepSession};
pub use bridge::{AnalyzerConfig, AnalyzerError, BodySide, LandmarkFrame, SwingAnalyzer};
pub use geometry::{angle_at, Point2D};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// Level is one of "trace", "debug", "info", "warn", "error" (default "info")
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("✅ kettlebell-web {} logging at {}", env!("CARGO_PKG_VERSION"), log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
