//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points for analysis live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod landmarks;
mod config;
mod swing;

pub use error::AnalyzerError;
pub use landmarks::{
    BodySide,
    HingeJoints,
    Landmark,
    LandmarkFrame,
    // Constants
    LANDMARK_COUNT, XYZ_LEN, XYZV_LEN,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
};
pub use config::{AnalyzerConfig, DEFAULT_MIN_VISIBILITY};
pub use crate::analyzer::SmoothingConfig;
pub use swing::SwingAnalyzer;
