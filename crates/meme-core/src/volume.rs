use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_VOLUME, MAX_VOLUME};
use crate::error::{MemeError, Result};

/// Volume slider position, 0 to 100 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Volume(u8);

impl Volume {
    pub fn new(value: u32) -> Result<Self> {
        if value > MAX_VOLUME as u32 {
            return Err(MemeError::VolumeOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Volume handed to the speech service, in [0.0, 1.0].
    pub fn fraction(self) -> f32 {
        self.0 as f32 / MAX_VOLUME as f32
    }

    pub fn tier(self) -> VolumeTier {
        match self.0 {
            0 => VolumeTier::Muted,
            1..=33 => VolumeTier::Low,
            34..=66 => VolumeTier::Medium,
            _ => VolumeTier::High,
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

impl TryFrom<u32> for Volume {
    type Error = MemeError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Volume> for u32 {
    fn from(v: Volume) -> u32 {
        v.0 as u32
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Discrete volume icon level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VolumeTier {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeTier {
    /// Tier number 0..=3, used to index icon sources.
    pub fn index(self) -> usize {
        match self {
            VolumeTier::Muted => 0,
            VolumeTier::Low => 1,
            VolumeTier::Medium => 2,
            VolumeTier::High => 3,
        }
    }
}

impl fmt::Display for VolumeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeTier::Muted => write!(f, "Muted"),
            VolumeTier::Low => write!(f, "Low"),
            VolumeTier::Medium => write!(f, "Medium"),
            VolumeTier::High => write!(f, "High"),
        }
    }
}
