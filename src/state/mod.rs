pub mod breakpoint;
pub mod gesture;
pub mod offset;

pub use breakpoint::closest;
pub use gesture::{GestureState, MoveAction, ReleaseOutcome};
pub use offset::parse_offset;
