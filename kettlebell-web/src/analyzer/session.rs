//! Rep session - the swing state machine
//!
//! One session per camera stream. Each frame feeds the hip and knee angle
//! through a three-phase machine (Standing → Down → Up → Down ...). A rep is
//! counted on the Down→Up edge unless the knees collapsed at any point of
//! that Down phase.

use crate::geometry::{angle_at, Point2D};
use super::{AnalysisResult, Feedback, FeedbackStyle, HingeThresholds, Phase};

/// Mutable state of one counting session
#[derive(Clone, Debug)]
pub struct RepSession {
    thresholds: HingeThresholds,
    phase: Phase,
    rep_count: u32,
    rejected_count: u32,
    feedback: Feedback,
    /// Set by any squatty frame of the current Down phase, cleared on Down entry
    form_invalid: bool,
}

impl RepSession {
    pub fn new() -> Self {
        Self::with_thresholds(HingeThresholds::default())
    }

    pub fn with_thresholds(thresholds: HingeThresholds) -> Self {
        Self {
            thresholds,
            phase: Phase::Standing,
            rep_count: 0,
            rejected_count: 0,
            feedback: Feedback::StandSideways,
            form_invalid: false,
        }
    }

    /// Feed one frame of pixel joint positions (one body side)
    pub fn update(
        &mut self,
        shoulder: Point2D,
        hip: Point2D,
        knee: Point2D,
        ankle: Point2D,
    ) -> AnalysisResult {
        let hip_angle = angle_at(shoulder, hip, knee);
        let knee_angle = angle_at(hip, knee, ankle);
        self.update_angles(hip_angle, knee_angle)
    }

    /// Advance the state machine with already computed angles (degrees)
    ///
    /// The rules run in order against the phase as left by the previous
    /// rule, so the frame that enters Down is also checked for knee form.
    pub fn update_angles(&mut self, hip_angle: f32, knee_angle: f32) -> AnalysisResult {
        let t = self.thresholds;

        if matches!(self.phase, Phase::Standing | Phase::Up) && hip_angle < t.bottom_hip_min {
            log::debug!("phase {} -> down (hip {:.1})", self.phase.as_str(), hip_angle);
            self.phase = Phase::Down;
            self.form_invalid = false;
        }

        if self.phase == Phase::Down {
            if knee_angle < t.hinge_knee_min {
                self.form_invalid = true;
                self.feedback = Feedback::TooSquatty;
            } else {
                self.feedback = Feedback::GoodHinge;
            }

            // Completion message overrides the hinge message of this frame
            if hip_angle > t.top_hip_max {
                self.phase = Phase::Up;
                if self.form_invalid {
                    self.rejected_count += 1;
                    self.feedback = Feedback::RepInvalid;
                    log::info!("rep rejected (squatted), {} rejected so far", self.rejected_count);
                } else {
                    self.rep_count += 1;
                    self.feedback = Feedback::GoodRep;
                    log::info!("rep {} counted", self.rep_count);
                }
            }
        }

        self.snapshot(hip_angle, knee_angle)
    }

    /// Back to the initial state, keeping the thresholds
    pub fn reset(&mut self) {
        *self = Self::with_thresholds(self.thresholds);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn rejected_count(&self) -> u32 {
        self.rejected_count
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn form_invalid(&self) -> bool {
        self.form_invalid
    }

    fn snapshot(&self, hip_angle: f32, knee_angle: f32) -> AnalysisResult {
        let style = FeedbackStyle::for_form(self.form_invalid);
        AnalysisResult {
            rep_count: self.rep_count,
            rejected_count: self.rejected_count,
            phase: self.phase,
            feedback: self.feedback.message().to_string(),
            feedback_style: style,
            feedback_color: style.color().to_string(),
            // `as` truncates toward zero
            hip_angle_degrees: hip_angle as i32,
            knee_angle_degrees: knee_angle as i32,
            form_invalid: self.form_invalid,
        }
    }
}

impl Default for RepSession {
    fn default() -> Self {
        Self::new()
    }
}
