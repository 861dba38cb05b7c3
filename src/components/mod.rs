pub mod app;
pub mod swipe_group;
pub mod swipe_item;

pub use swipe_group::{SwipeGroup, SwipeGroupContext};
pub use swipe_item::SwipeItem;
