// DOM access for a swipeable element: transform projection, transition
// arming, and contact-point extraction. Everything degrades to a no-op when
// the element is not mounted yet.

use web_sys::{HtmlElement, TouchEvent};
use yew::NodeRef;

use crate::state::parse_offset;

pub const SNAP_DURATION_MS: u32 = 200;
pub const SNAP_EASING: &str = "cubic-bezier(0.33, 1, 0.68, 1)";

pub struct SwipeSurface {
    el: HtmlElement,
}

impl SwipeSurface {
    pub fn from_node_ref(node: &NodeRef) -> Option<Self> {
        node.cast::<HtmlElement>().map(|el| Self { el })
    }

    /// Project an offset while the finger is down. Clears any pending
    /// transition first so the element tracks the finger 1:1.
    pub fn write_offset(&self, px: i32) {
        let style = self.el.style();
        let _ = style.set_property("transition", "none");
        let _ = style.set_property("transform", &format!("translateX({px}px)"));
    }

    /// Eased write for release snaps and retractions.
    pub fn snap_to(&self, px: i32) {
        let style = self.el.style();
        let _ = style.set_property(
            "transition",
            &format!("transform {SNAP_DURATION_MS}ms {SNAP_EASING} 0s"),
        );
        let _ = style.set_property("transform", &format!("translateX({px}px)"));
    }

    /// Current offset as read back from the inline style. `None` until the
    /// first write (or after the style was replaced wholesale).
    pub fn read_offset(&self) -> Option<i32> {
        let value = self.el.style().get_property_value("transform").ok()?;
        parse_offset(&value)
    }

    /// Compositor hint at touch-start: motion is coming.
    pub fn prepare_motion(&self) {
        let _ = self.el.style().set_property("will-change", "transform");
    }

    /// Compositor hint after the gesture settles.
    pub fn settle(&self) {
        let _ = self.el.style().set_property("will-change", "auto");
    }
}

/// Primary contact point of a touch event in client coordinates.
///
/// `touchend` delivers its final point through `changed_touches`, so that
/// list is the fallback. Returns `None` for a malformed event with neither.
pub fn primary_touch(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event
        .touches()
        .item(0)
        .or_else(|| event.changed_touches().item(0))?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}
