pub mod gesture;
pub mod transform;
pub mod view;
