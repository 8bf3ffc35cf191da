use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("inverted scale bounds: min {min} > max {max}")]
    InvertedBounds { min: f32, max: f32 },

    #[error("non-positive minimum scale: {min}")]
    NonPositiveMinScale { min: f32 },
}
