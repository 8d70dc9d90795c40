//! Landmark decoding
//!
//! Receives MediaPipe Pose landmarks from JavaScript as a flat array and
//! picks out the four joints one side of the body needs for hinge analysis.

use serde::{Deserialize, Serialize};
use crate::geometry::Point2D;
use super::AnalyzerError;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Flat length with x, y, z per landmark
pub const XYZ_LEN: usize = LANDMARK_COUNT * 3;
/// Flat length with x, y, z, visibility per landmark
pub const XYZV_LEN: usize = LANDMARK_COUNT * 4;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized
    pub z: f32,          // Relative depth
    pub visibility: f32, // 0-1, 1.0 when not supplied
}

impl Default for Landmark {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0, visibility: 1.0 }
    }
}

/// Which side of the body faces the camera
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySide {
    #[default]
    Left,
    Right,
}

impl BodySide {
    /// (shoulder, hip, knee, ankle) indices
    pub fn indices(&self) -> [usize; 4] {
        match self {
            BodySide::Left => [LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE, LEFT_ANKLE],
            BodySide::Right => [RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodySide::Left => "left",
            BodySide::Right => "right",
        }
    }
}

/// The joints the hinge analysis needs, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HingeJoints {
    pub shoulder: Point2D,
    pub hip: Point2D,
    pub knee: Point2D,
    pub ankle: Point2D,
}

/// One frame of pose landmarks plus the frame size in pixels
#[derive(Clone, Debug)]
pub struct LandmarkFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
    width: u32,
    height: u32,
}

impl LandmarkFrame {
    pub fn new(
        landmarks: [Landmark; LANDMARK_COUNT],
        width: u32,
        height: u32,
    ) -> Result<Self, AnalyzerError> {
        if width == 0 || height == 0 {
            return Err(AnalyzerError::InvalidFrameSize { width, height });
        }
        Ok(Self { landmarks, width, height })
    }

    /// Decode a flat array of 99 (x,y,z) or 132 (x,y,z,visibility) values
    pub fn from_flat(data: &[f32], width: u32, height: u32) -> Result<Self, AnalyzerError> {
        let stride = match data.len() {
            XYZ_LEN => 3,
            XYZV_LEN => 4,
            n => return Err(AnalyzerError::InvalidLandmarkCount(n)),
        };

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (lm, chunk) in landmarks.iter_mut().zip(data.chunks_exact(stride)) {
            *lm = Landmark {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: if stride == 4 { chunk[3] } else { 1.0 },
            };
        }

        Self::new(landmarks, width, height)
    }

    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied()
    }

    /// Lowest visibility among the side's four joints
    pub fn min_visibility(&self, side: BodySide) -> f32 {
        side.indices()
            .iter()
            .map(|&i| self.landmarks[i].visibility)
            .fold(f32::INFINITY, f32::min)
    }

    /// Pixel positions of shoulder, hip, knee and ankle for `side`
    pub fn joints(&self, side: BodySide) -> HingeJoints {
        let [shoulder, hip, knee, ankle] = side.indices().map(|i| self.to_pixels(i));
        HingeJoints { shoulder, hip, knee, ankle }
    }

    fn to_pixels(&self, index: usize) -> Point2D {
        let lm = self.landmarks[index];
        Point2D::from_normalized(lm.x, lm.y, self.width, self.height)
    }
}
