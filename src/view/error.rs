use thiserror::Error;

use crate::transform::TransformError;

pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("non-positive pointer-distance threshold: {distance}")]
    NonPositiveThreshold { distance: f32 },

    #[error("invalid scale bounds: {0}")]
    Transform(#[from] TransformError),
}
