//! Movement phase of one swing cycle

use serde::{Deserialize, Serialize};

/// Where the athlete is in the swing cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Session start, before the first hinge
    #[default]
    Standing,
    /// Hips flexed past the bottom threshold
    Down,
    /// Hips extended past the top threshold after a Down
    Up,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Standing => "standing",
            Phase::Down => "down",
            Phase::Up => "up",
        }
    }
}
