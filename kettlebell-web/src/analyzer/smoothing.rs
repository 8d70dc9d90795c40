//! Angle smoothing - One Euro low-pass on the hip and knee angle
//!
//! Both angles come from the same MediaPipe result, so they share one clock.
//! The cutoff rises with angular speed: a held lockout stays steady while
//! the hip snap at the top of a swing still comes through within a frame
//! or two.

use std::f32::consts::PI;
use serde::{Deserialize, Serialize};

/// Parameters of the angle filter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmoothingConfig {
    /// Cutoff (Hz) while the joint is still - lower = steadier lockout
    pub min_cutoff: f32,
    /// Cutoff gain per degree/second of angular speed
    pub beta: f32,
    /// Cutoff (Hz) for the angular speed estimate itself
    pub d_cutoff: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { min_cutoff: 1.0, beta: 0.05, d_cutoff: 1.0 }
    }
}

/// Weight of the new sample for a first-order low-pass at `cutoff` Hz
fn alpha(dt: f32, cutoff: f32) -> f32 {
    let r = 2.0 * PI * cutoff * dt;
    r / (r + 1.0)
}

/// Filtered angle and angular speed for one joint
#[derive(Clone, Copy, Debug, Default)]
struct AngleTrack {
    angle: f32,
    /// Degrees per second
    rate: f32,
}

impl AngleTrack {
    fn step(&mut self, raw: f32, dt: f32, config: &SmoothingConfig) -> f32 {
        let raw_rate = (raw - self.angle) / dt;
        let a_d = alpha(dt, config.d_cutoff);
        self.rate += a_d * (raw_rate - self.rate);

        let cutoff = config.min_cutoff + config.beta * self.rate.abs();
        let a = alpha(dt, cutoff);
        self.angle = (self.angle + a * (raw - self.angle)).clamp(0.0, 180.0);
        self.angle
    }
}

/// One Euro filter over the (hip, knee) angle pair
#[derive(Clone, Debug)]
pub struct AngleSmoother {
    config: SmoothingConfig,
    hip: AngleTrack,
    knee: AngleTrack,
    /// Timestamp of the last accepted sample (ms); `None` until seeded
    last_ms: Option<f64>,
}

impl AngleSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            config,
            hip: AngleTrack::default(),
            knee: AngleTrack::default(),
            last_ms: None,
        }
    }

    /// Smoothed (hip, knee) in degrees, always within [0, 180]
    ///
    /// `timestamp_ms` as from `performance.now()`. Returns `None`, leaving
    /// the filter untouched, for a non-finite timestamp or angle. A
    /// timestamp that does not advance returns the previous output.
    pub fn smooth(
        &mut self,
        timestamp_ms: f64,
        hip_angle: f32,
        knee_angle: f32,
    ) -> Option<(f32, f32)> {
        if !timestamp_ms.is_finite() || !hip_angle.is_finite() || !knee_angle.is_finite() {
            return None;
        }

        let Some(last_ms) = self.last_ms else {
            self.hip = AngleTrack { angle: hip_angle.clamp(0.0, 180.0), rate: 0.0 };
            self.knee = AngleTrack { angle: knee_angle.clamp(0.0, 180.0), rate: 0.0 };
            self.last_ms = Some(timestamp_ms);
            return Some((self.hip.angle, self.knee.angle));
        };

        let dt = ((timestamp_ms - last_ms) / 1000.0) as f32;
        if dt <= 0.0 {
            return Some((self.hip.angle, self.knee.angle));
        }

        self.last_ms = Some(timestamp_ms);
        Some((
            self.hip.step(hip_angle, dt, &self.config),
            self.knee.step(knee_angle, dt, &self.config),
        ))
    }

    pub fn reset(&mut self) {
        self.hip = AngleTrack::default();
        self.knee = AngleTrack::default();
        self.last_ms = None;
    }
}
