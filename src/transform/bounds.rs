use serde::{Deserialize, Serialize};

use super::{Result, TransformError};

pub const DEFAULT_SCALE: f32 = 1.0;
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScaleBounds")]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

/// Unvalidated mirror used to funnel deserialization through `new()`.
#[derive(Deserialize)]
struct RawScaleBounds {
    min: f32,
    max: f32,
}

impl TryFrom<RawScaleBounds> for ScaleBounds {
    type Error = TransformError;

    fn try_from(raw: RawScaleBounds) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ScaleBounds {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if min <= 0.0 {
            return Err(TransformError::NonPositiveMinScale { min });
        }
        if min > max {
            return Err(TransformError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds for a freshly fitted image: the minimum is lowered to the
    /// fit scale when fitting shrank the image below the configured
    /// floor, and the maximum is raised when the fit scale exceeds the
    /// configured ceiling. The configured bounds themselves are left
    /// alone, so the next image load starts from them again.
    pub fn for_fit_scale(&self, fit: f32) -> Self {
        Self {
            min: self.min.min(fit),
            max: self.max.max(fit),
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn contains(&self, scale: f32) -> bool {
        self.min <= scale && scale <= self.max
    }
}
