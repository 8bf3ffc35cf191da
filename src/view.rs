mod binding;
mod config;
mod error;
mod widget;


pub use binding::ViewportBinding;
pub use config::ViewConfig;
pub use error::{Result, ViewError};
pub use widget::PinchZoomView;
