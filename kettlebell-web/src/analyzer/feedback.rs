//! Feedback messages shown to the athlete

use serde::{Deserialize, Serialize};

/// Status message for the current frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing analyzed yet
    #[default]
    StandSideways,
    /// Knees bent past the hinge limit during the bottom phase
    TooSquatty,
    /// Bottom phase with straight enough legs
    GoodHinge,
    /// Cycle completed and counted
    GoodRep,
    /// Cycle completed but not counted (squatted at some point)
    RepInvalid,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::StandSideways => "Stand sideways to camera",
            Feedback::TooSquatty => "too-squatty, straighten legs",
            Feedback::GoodHinge => "good hinge",
            Feedback::GoodRep => "good rep",
            Feedback::RepInvalid => "rep invalid (squatted)",
        }
    }
}

/// How the renderer should style the feedback text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStyle {
    Affirmative,
    Warning,
}

impl FeedbackStyle {
    /// Style follows the form flag, not the message
    pub fn for_form(form_invalid: bool) -> Self {
        if form_invalid {
            FeedbackStyle::Warning
        } else {
            FeedbackStyle::Affirmative
        }
    }

    /// CSS color for the overlay text
    pub fn color(&self) -> &'static str {
        match self {
            FeedbackStyle::Affirmative => "#00FF00",
            FeedbackStyle::Warning => "#FF0000",
        }
    }
}
