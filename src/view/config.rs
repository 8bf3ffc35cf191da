use serde::{Deserialize, Serialize};

use crate::gesture::MIN_POINTER_DISTANCE;
use crate::transform::{DEFAULT_MAX_SCALE, DEFAULT_SCALE, ScaleBounds};

use super::{Result, ViewError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub min_pointer_distance: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            min_pointer_distance: MIN_POINTER_DISTANCE,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        self.scale_bounds()?;
        if self.min_pointer_distance <= 0.0 {
            return Err(ViewError::NonPositiveThreshold {
                distance: self.min_pointer_distance,
            });
        }
        Ok(())
    }

    pub fn scale_bounds(&self) -> Result<ScaleBounds> {
        Ok(ScaleBounds::new(self.min_scale, self.max_scale)?)
    }
}
