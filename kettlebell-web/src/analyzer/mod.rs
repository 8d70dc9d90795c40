//! Analyzer module - rep detection state machine and form feedback
//!
//! Re-exports only. All logic in submodules.

mod phase;
mod feedback;
mod thresholds;
mod result;
mod session;
mod smoothing;

pub use phase::Phase;
pub use feedback::{Feedback, FeedbackStyle};
pub use thresholds::{HingeThresholds, HINGE_KNEE_MIN, TOP_HIP_MAX, BOTTOM_HIP_MIN};
pub use result::AnalysisResult;
pub use session::RepSession;
pub use smoothing::{AngleSmoother, SmoothingConfig};
