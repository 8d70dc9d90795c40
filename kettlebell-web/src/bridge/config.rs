//! Analyzer configuration, as passed from JavaScript

use serde::{Deserialize, Serialize};
use crate::analyzer::{HingeThresholds, SmoothingConfig};
use super::{AnalyzerError, BodySide};

/// Default minimum landmark visibility (MediaPipe's detection confidence)
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;

/// Everything a [`SwingAnalyzer`](super::SwingAnalyzer) can be tuned with
///
/// Every field is optional on the JS side:
///
/// ```javascript
/// const analyzer = SwingAnalyzer.withConfig({ side: "right", thresholds: { hingeKneeMin: 145 } })
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    pub thresholds: HingeThresholds,
    pub side: BodySide,
    /// Frames whose hinge joints fall below this visibility are skipped
    pub min_visibility: f32,
    /// Off unless set
    pub smoothing: Option<SmoothingConfig>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            thresholds: HingeThresholds::default(),
            side: BodySide::Left,
            min_visibility: DEFAULT_MIN_VISIBILITY,
            smoothing: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        let t = &self.thresholds;
        for (name, value) in [
            ("hingeKneeMin", t.hinge_knee_min),
            ("topHipMax", t.top_hip_max),
            ("bottomHipMin", t.bottom_hip_min),
        ] {
            if !(0.0..=180.0).contains(&value) {
                return Err(AnalyzerError::InvalidConfig(format!(
                    "{} must be within 0-180 degrees, got {}",
                    name, value
                )));
            }
        }

        if t.bottom_hip_min >= t.top_hip_max {
            return Err(AnalyzerError::InvalidConfig(format!(
                "bottomHipMin ({}) must be below topHipMax ({})",
                t.bottom_hip_min, t.top_hip_max
            )));
        }

        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(AnalyzerError::InvalidConfig(format!(
                "minVisibility must be within 0-1, got {}",
                self.min_visibility
            )));
        }

        if let Some(s) = &self.smoothing {
            let positive = |v: f32| v.is_finite() && v > 0.0;
            let beta_ok = s.beta.is_finite() && s.beta >= 0.0;
            if !positive(s.min_cutoff) || !positive(s.d_cutoff) || !beta_ok {
                return Err(AnalyzerError::InvalidConfig(
                    "smoothing needs minCutoff > 0, dCutoff > 0 and beta >= 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
