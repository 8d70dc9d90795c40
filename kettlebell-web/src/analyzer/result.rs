//! Per-frame analysis snapshot handed to the renderer

use serde::Serialize;
use super::{FeedbackStyle, Phase};

/// Result of one `update` call
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Valid reps so far
    pub rep_count: u32,
    /// Completed cycles rejected for bad form
    pub rejected_count: u32,
    pub phase: Phase,
    pub feedback: String,
    pub feedback_style: FeedbackStyle,
    /// CSS color matching `feedback_style`
    pub feedback_color: String,
    /// Hip angle, truncated toward zero
    pub hip_angle_degrees: i32,
    /// Knee angle, truncated toward zero
    pub knee_angle_degrees: i32,
    pub form_invalid: bool,
}
