//! Angle thresholds for hinge detection (degrees)

use serde::{Deserialize, Serialize};

/// Minimum knee angle during the bottom phase for the rep to count as a hinge
pub const HINGE_KNEE_MIN: f32 = 140.0;

/// Hip angle above which the athlete is back at the top
pub const TOP_HIP_MAX: f32 = 165.0;

/// Hip angle below which the athlete is in the bottom phase
pub const BOTTOM_HIP_MIN: f32 = 130.0;

/// Threshold set used by [`RepSession`](super::RepSession)
///
/// The gap between `bottom_hip_min` and `top_hip_max` is the hysteresis
/// band: hip angles inside it never change the phase.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HingeThresholds {
    pub hinge_knee_min: f32,
    pub top_hip_max: f32,
    pub bottom_hip_min: f32,
}

impl Default for HingeThresholds {
    fn default() -> Self {
        Self {
            hinge_knee_min: HINGE_KNEE_MIN,
            top_hip_max: TOP_HIP_MAX,
            bottom_hip_min: BOTTOM_HIP_MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = HingeThresholds::default();
        assert_eq!(t.hinge_knee_min, 140.0);
        assert_eq!(t.top_hip_max, 165.0);
        assert_eq!(t.bottom_hip_min, 130.0);
        assert!(t.bottom_hip_min < t.top_hip_max);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t: HingeThresholds = serde_json::from_str(r#"{"hingeKneeMin": 150}"#).unwrap();
        assert_eq!(t.hinge_knee_min, 150.0);
        assert_eq!(t.top_hip_max, TOP_HIP_MAX);
        assert_eq!(t.bottom_hip_min, BOTTOM_HIP_MIN);
    }
}
