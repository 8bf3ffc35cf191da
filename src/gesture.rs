mod engine;
mod events;


pub use engine::{GestureEngine, GestureState, MIN_POINTER_DISTANCE};
pub use events::{PointerEvent, PointerPhase, PointerSample};
