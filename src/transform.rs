mod affine;
mod bounds;
mod error;
mod fit;

#[cfg(test)]
mod tests;

pub use affine::AffineTransform;
pub use bounds::{DEFAULT_MAX_SCALE, DEFAULT_SCALE, ScaleBounds};
pub use error::{Result, TransformError};
pub use fit::{centering_translation, fit_scale};
