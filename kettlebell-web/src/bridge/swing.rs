//! SwingAnalyzer - the JS-facing handle for one counting session
//!
//! Each instance owns its own `RepSession`, so two camera streams on the
//! same page never share state. JavaScript calls `processLandmarks` once per
//! MediaPipe result and renders whatever comes back.

use wasm_bindgen::prelude::*;
use crate::analyzer::{AnalysisResult, AngleSmoother, RepSession};
use crate::geometry::checked_angle_at;
use super::{AnalyzerConfig, AnalyzerError, LandmarkFrame};

#[wasm_bindgen]
pub struct SwingAnalyzer {
    config: AnalyzerConfig,
    session: RepSession,
    smoother: Option<AngleSmoother>,
    last_result: Option<AnalysisResult>,
}

// ============================================================================
// RUST API
// ============================================================================

impl SwingAnalyzer {
    pub fn from_config(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        let smoother = config.smoothing.map(AngleSmoother::new);

        Ok(Self {
            session: RepSession::with_thresholds(config.thresholds),
            smoother,
            last_result: None,
            config,
        })
    }

    /// Run one decoded frame through the session
    ///
    /// Returns `None` (state untouched) when the hinge joints are not
    /// visible enough, the joint geometry is degenerate, or smoothing is on
    /// and the timestamp is not finite.
    pub fn process_frame(
        &mut self,
        frame: &LandmarkFrame,
        timestamp_ms: f64,
    ) -> Option<AnalysisResult> {
        let side = self.config.side;

        let visibility = frame.min_visibility(side);
        if visibility < self.config.min_visibility {
            log::trace!("skipping frame: {} side visibility {:.2}", side.as_str(), visibility);
            return None;
        }

        let j = frame.joints(side);
        let (hip_angle, knee_angle) = match (
            checked_angle_at(j.shoulder, j.hip, j.knee),
            checked_angle_at(j.hip, j.knee, j.ankle),
        ) {
            (Some(hip), Some(knee)) => (hip, knee),
            _ => {
                log::trace!("skipping frame: degenerate joint geometry");
                return None;
            }
        };

        let (hip_angle, knee_angle) = match self.smoother.as_mut() {
            Some(smoother) => match smoother.smooth(timestamp_ms, hip_angle, knee_angle) {
                Some(angles) => angles,
                None => {
                    log::warn!("skipping frame: timestamp {} is not finite", timestamp_ms);
                    return None;
                }
            },
            None => (hip_angle, knee_angle),
        };

        let in_range = |a: f32| a.is_finite() && (0.0..=180.0).contains(&a);
        if !in_range(hip_angle) || !in_range(knee_angle) {
            log::warn!("skipping frame: angles out of range ({}, {})", hip_angle, knee_angle);
            return None;
        }

        let result = self.session.update_angles(hip_angle, knee_angle);
        self.last_result = Some(result.clone());
        Some(result)
    }

    pub fn session(&self) -> &RepSession {
        &self.session
    }

    /// Most recent result, if any frame has been analyzed since the last reset
    pub fn last(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }
}

impl Default for SwingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

#[wasm_bindgen]
impl SwingAnalyzer {
    /// Analyzer with default thresholds, left side, no smoothing
    #[wasm_bindgen(constructor)]
    pub fn new() -> SwingAnalyzer {
        let config = AnalyzerConfig::default();
        SwingAnalyzer {
            session: RepSession::with_thresholds(config.thresholds),
            smoother: None,
            last_result: None,
            config,
        }
    }

    /// Analyzer from a partial config object (missing keys use defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<SwingAnalyzer, JsValue> {
        let config: AnalyzerConfig = if config.is_undefined() || config.is_null() {
            AnalyzerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| AnalyzerError::ConfigDecode(e.to_string()))?
        };

        log::info!(
            "swing analyzer configured: {} side, thresholds {:?}",
            config.side.as_str(),
            config.thresholds
        );
        Ok(Self::from_config(config)?)
    }

    /// Called from JavaScript with a flat Float32Array of 99 (x,y,z) or
    /// 132 (x,y,z,visibility) values. An empty array means no pose was
    /// detected.
    ///
    /// Returns the analysis object, or `undefined` if the frame was skipped.
    #[wasm_bindgen(js_name = processLandmarks)]
    pub fn process_landmarks(
        &mut self,
        data: &[f32],
        width: u32,
        height: u32,
        timestamp_ms: f64,
    ) -> Result<JsValue, JsValue> {
        if data.is_empty() {
            log::trace!("no pose in frame");
            return Ok(JsValue::UNDEFINED);
        }

        let frame = LandmarkFrame::from_flat(data, width, height).map_err(|e| {
            log::warn!("{}", e);
            e
        })?;

        match self.process_frame(&frame, timestamp_ms) {
            Some(result) => serde_wasm_bindgen::to_value(&result)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Last analysis object, or `undefined` before the first analyzed frame
    #[wasm_bindgen(js_name = lastResult)]
    pub fn last_result(&self) -> Result<JsValue, JsValue> {
        match &self.last_result {
            Some(result) => serde_wasm_bindgen::to_value(result)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Start a new session with the same configuration
    pub fn reset(&mut self) {
        self.session.reset();
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.reset();
        }
        self.last_result = None;
        log::info!("swing session reset");
    }

    #[wasm_bindgen(getter, js_name = repCount)]
    pub fn rep_count(&self) -> u32 {
        self.session.rep_count()
    }

    #[wasm_bindgen(getter, js_name = rejectedCount)]
    pub fn rejected_count(&self) -> u32 {
        self.session.rejected_count()
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.session.phase().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn feedback(&self) -> String {
        self.session.feedback().message().to_string()
    }

    #[wasm_bindgen(getter, js_name = formInvalid)]
    pub fn form_invalid(&self) -> bool {
        self.session.form_invalid()
    }

    #[wasm_bindgen(getter)]
    pub fn side(&self) -> String {
        self.config.side.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Phase;
    use crate::bridge::{BodySide, SmoothingConfig, LANDMARK_COUNT, XYZV_LEN};

    const WIDTH: u32 = 1280;
    const HEIGHT: u32 = 720;

    /// Side-on pose: shoulder, hip, knee, ankle (normalized) written to
    /// `side`, everything else left at the frame center
    fn pose(side: BodySide, joints: [(f32, f32); 4], visibility: f32) -> LandmarkFrame {
        let mut data = vec![0.0; XYZV_LEN];
        for i in 0..LANDMARK_COUNT {
            data[i * 4..i * 4 + 4].copy_from_slice(&[0.5, 0.5, 0.0, 1.0]);
        }
        for (idx, (x, y)) in side.indices().into_iter().zip(joints) {
            data[idx * 4..idx * 4 + 4].copy_from_slice(&[x, y, 0.0, visibility]);
        }
        LandmarkFrame::from_flat(&data, WIDTH, HEIGHT).unwrap()
    }

    /// Upright, legs straight
    fn standing(side: BodySide) -> LandmarkFrame {
        pose(side, [(0.5, 0.2), (0.5, 0.5), (0.5, 0.7), (0.5, 0.9)], 0.9)
    }

    /// Torso pitched forward, legs straight
    fn hinged(side: BodySide) -> LandmarkFrame {
        pose(side, [(0.75, 0.45), (0.5, 0.5), (0.5, 0.7), (0.5, 0.9)], 0.9)
    }

    /// Torso pitched forward, knees pushed far forward
    fn squatting(side: BodySide) -> LandmarkFrame {
        pose(side, [(0.75, 0.45), (0.5, 0.5), (0.7, 0.6), (0.5, 0.9)], 0.9)
    }

    #[test]
    fn test_good_rep_through_frames() {
        let mut analyzer = SwingAnalyzer::new();
        analyzer.process_frame(&standing(BodySide::Left), 0.0).unwrap();
        let r = analyzer.process_frame(&hinged(BodySide::Left), 33.0).unwrap();
        assert_eq!(r.phase, Phase::Down);
        assert_eq!(r.feedback, "good hinge");

        let r = analyzer.process_frame(&standing(BodySide::Left), 66.0).unwrap();
        assert_eq!(r.phase, Phase::Up);
        assert_eq!(r.rep_count, 1);
        assert_eq!(analyzer.rep_count(), 1);
    }

    #[test]
    fn test_squat_rep_rejected() {
        let mut analyzer = SwingAnalyzer::new();
        analyzer.process_frame(&squatting(BodySide::Left), 0.0).unwrap();
        let r = analyzer.process_frame(&standing(BodySide::Left), 33.0).unwrap();
        assert_eq!(r.rep_count, 0);
        assert_eq!(r.rejected_count, 1);
        assert_eq!(r.feedback, "rep invalid (squatted)");
        assert!(analyzer.form_invalid());
    }

    #[test]
    fn test_low_visibility_skipped() {
        let mut analyzer = SwingAnalyzer::new();
        let dim = pose(BodySide::Left, [(0.75, 0.45), (0.5, 0.5), (0.5, 0.7), (0.5, 0.9)], 0.2);
        assert!(analyzer.process_frame(&dim, 0.0).is_none());
        assert_eq!(analyzer.session().phase(), Phase::Standing);
        assert!(analyzer.last().is_none());
    }

    #[test]
    fn test_degenerate_geometry_skipped() {
        let mut analyzer = SwingAnalyzer::new();
        analyzer.process_frame(&hinged(BodySide::Left), 0.0).unwrap();
        let before = analyzer.last().cloned();

        // Hip and knee on the same pixel
        let collapsed = pose(BodySide::Left, [(0.5, 0.2), (0.5, 0.5), (0.5, 0.5), (0.5, 0.9)], 0.9);
        assert!(analyzer.process_frame(&collapsed, 33.0).is_none());
        assert_eq!(analyzer.last().cloned(), before);
        assert_eq!(analyzer.session().phase(), Phase::Down);
    }

    #[test]
    fn test_right_side_config() {
        let config = AnalyzerConfig { side: BodySide::Right, ..AnalyzerConfig::default() };
        let mut analyzer = SwingAnalyzer::from_config(config).unwrap();
        assert_eq!(analyzer.side(), "right");

        // Left-side hinge is ignored: right joints sit at the frame center
        assert!(analyzer.process_frame(&hinged(BodySide::Left), 0.0).is_none());

        analyzer.process_frame(&hinged(BodySide::Right), 33.0).unwrap();
        let r = analyzer.process_frame(&standing(BodySide::Right), 66.0).unwrap();
        assert_eq!(r.rep_count, 1);
    }

    #[test]
    fn test_smoothing_delays_phase_change() {
        let config = AnalyzerConfig {
            smoothing: Some(SmoothingConfig { beta: 0.0, ..SmoothingConfig::default() }),
            ..AnalyzerConfig::default()
        };
        let mut raw = SwingAnalyzer::new();
        let mut smooth = SwingAnalyzer::from_config(config).unwrap();

        for analyzer in [&mut raw, &mut smooth] {
            analyzer.process_frame(&standing(BodySide::Left), 0.0).unwrap();
        }
        let r = raw.process_frame(&hinged(BodySide::Left), 33.0).unwrap();
        let s = smooth.process_frame(&hinged(BodySide::Left), 33.0).unwrap();
        assert_eq!(r.phase, Phase::Down);
        assert_eq!(s.phase, Phase::Standing);
        assert!(s.hip_angle_degrees > r.hip_angle_degrees);
    }

    #[test]
    fn test_nan_timestamp_does_not_stall_smoothing() {
        let config = AnalyzerConfig {
            smoothing: Some(SmoothingConfig::default()),
            ..AnalyzerConfig::default()
        };
        let mut analyzer = SwingAnalyzer::from_config(config).unwrap();
        analyzer.process_frame(&standing(BodySide::Left), 0.0).unwrap();

        assert!(analyzer.process_frame(&hinged(BodySide::Left), f64::NAN).is_none());
        assert!(analyzer.process_frame(&hinged(BodySide::Left), f64::INFINITY).is_none());
        assert_eq!(analyzer.session().phase(), Phase::Standing);

        let mut last = None;
        for i in 1..=90 {
            last = analyzer.process_frame(&hinged(BodySide::Left), i as f64 * 33.0);
        }
        let r = last.unwrap();
        assert_eq!(r.phase, Phase::Down);
        assert!((0..=180).contains(&r.hip_angle_degrees));
        assert_eq!(analyzer.session().phase(), Phase::Down);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalyzerConfig::default();
        config.thresholds.top_hip_max = 120.0;
        assert!(SwingAnalyzer::from_config(config).is_err());
    }

    #[test]
    fn test_reset() {
        let mut analyzer = SwingAnalyzer::new();
        analyzer.process_frame(&hinged(BodySide::Left), 0.0).unwrap();
        analyzer.process_frame(&standing(BodySide::Left), 33.0).unwrap();
        analyzer.reset();
        assert_eq!(analyzer.rep_count(), 0);
        assert_eq!(analyzer.phase(), "standing");
        assert_eq!(analyzer.feedback(), "Stand sideways to camera");
        assert!(analyzer.last().is_none());
    }
}
