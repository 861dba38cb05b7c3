use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent};
use yew::prelude::*;

use super::swipe_group::SwipeGroupContext;
use crate::binding::{SwipeSurface, primary_touch};
use crate::model::{SwipeConfig, SwipeDirection, Variant};
use crate::state::{GestureState, MoveAction};

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeItemProps {
    /// Unique within the surrounding group.
    pub id: AttrValue,
    pub direction: SwipeDirection,
    /// Ascending non-negative offsets to settle at; empty means the item
    /// always springs back home.
    #[prop_or_default]
    pub breakpoints_to_keep: Vec<i32>,
    /// Invoked when a gesture reaches the maximum configured offset. May
    /// fire twice for a single gesture (mid-drag and again at release when
    /// the snap lands on the last breakpoint).
    #[prop_or_default]
    pub on_max_offset_reach: Option<Callback<()>>,
    /// Content revealed underneath the swipeable element.
    #[prop_or_default]
    pub bottom: Html,
    pub children: Html,
}

/// One swipeable row. Touch samples drive the [`GestureState`] machine and
/// the component performs whatever effect comes back; the element's
/// transform is only ever a projection of the machine's offset.
#[function_component(SwipeItem)]
pub fn swipe_item(props: &SwipeItemProps) -> Html {
    let surface_ref = use_node_ref();
    let gesture = use_mut_ref(GestureState::default);
    // Latest config, readable from the statically attached touchmove closure.
    let config_ref = use_mut_ref(|| {
        SwipeConfig::new(props.direction, props.breakpoints_to_keep.clone())
    });
    let group = use_context::<SwipeGroupContext>();
    let mounted = use_mut_ref(|| false);

    {
        let config_ref = config_ref.clone();
        let config = SwipeConfig::new(props.direction, props.breakpoints_to_keep.clone());
        use_effect_with(
            (props.direction, props.breakpoints_to_keep.clone()),
            move |_| {
                *config_ref.borrow_mut() = config;
                || ()
            },
        );
    }

    // touchmove needs a non-passive listener so prevent_default can suppress
    // native scrolling; Yew's delegated handlers are passive, hence the
    // manual subscription with cleanup on unmount.
    {
        let surface_ref = surface_ref.clone();
        let gesture = gesture.clone();
        let config_ref = config_ref.clone();
        use_effect_with((), move |_| {
            let element = surface_ref.cast::<HtmlElement>();
            let touch_move_cb = {
                let surface_ref = surface_ref.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let Some(surface) = SwipeSurface::from_node_ref(&surface_ref) else {
                        return;
                    };
                    let Some((x, y)) = primary_touch(&e) else {
                        return;
                    };
                    let action = gesture.borrow_mut().advance(x, y, &config_ref.borrow());
                    match action {
                        MoveAction::CedeToScroll => {}
                        MoveAction::SnapHome => {
                            e.prevent_default();
                            surface.snap_to(0);
                            surface.settle();
                        }
                        MoveAction::Pin => {
                            e.prevent_default();
                        }
                        MoveAction::Write(px) => {
                            e.prevent_default();
                            surface.write_offset(px);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(el) = &element {
                let options = AddEventListenerOptions::new();
                options.set_passive(false);
                let _ = el.add_event_listener_with_callback_and_add_event_listener_options(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                    &options,
                );
            }
            move || {
                if let Some(el) = &element {
                    let _ = el.remove_event_listener_with_callback(
                        "touchmove",
                        touch_move_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_touch_start = {
        let surface_ref = surface_ref.clone();
        let gesture = gesture.clone();
        let group = group.clone();
        let id = props.id.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(surface) = SwipeSurface::from_node_ref(&surface_ref) else {
                return;
            };
            if let Some(group) = &group {
                group.set_active.emit(id.clone());
            }
            let Some((x, y)) = primary_touch(&e) else {
                return;
            };
            let mut g = gesture.borrow_mut();
            // Re-sync in case the inline style was replaced externally.
            g.offset = surface.read_offset().unwrap_or(0);
            g.begin(x, y);
            surface.prepare_motion();
        })
    };

    let on_touch_end = {
        let surface_ref = surface_ref.clone();
        let gesture = gesture.clone();
        let config_ref = config_ref.clone();
        let on_max = props.on_max_offset_reach.clone();
        Callback::from(move |_e: TouchEvent| {
            let Some(surface) = SwipeSurface::from_node_ref(&surface_ref) else {
                return;
            };
            let outcome = gesture.borrow_mut().release(&config_ref.borrow());
            if outcome.max_reached_early {
                if let Some(cb) = &on_max {
                    cb.emit(());
                }
            }
            surface.settle();
            if let Some(px) = outcome.settle {
                surface.snap_to(px);
            }
            if outcome.max_reached_on_snap {
                if let Some(cb) = &on_max {
                    cb.emit(());
                }
            }
        })
    };

    // Retract when another item in a SINGULAR group claims activation. Only
    // reacts to transitions of the active id, never on initial mount.
    {
        let surface_ref = surface_ref.clone();
        let gesture = gesture.clone();
        let variant = group
            .as_ref()
            .map(|g| g.variant)
            .unwrap_or(Variant::Default);
        let active = group.as_ref().and_then(|g| g.active_item.clone());
        use_effect_with((active, props.id.clone()), move |(active, id)| {
            if !*mounted.borrow() {
                *mounted.borrow_mut() = true;
            } else if variant == Variant::Singular {
                if let Some(active) = active {
                    if active != id {
                        gesture.borrow_mut().reset();
                        if let Some(surface) = SwipeSurface::from_node_ref(&surface_ref) {
                            surface.snap_to(0);
                            surface.settle();
                        }
                    }
                }
            }
            || ()
        });
    }

    html! {
        <div style="position:relative; overflow:hidden;">
            <div style="position:absolute; inset:0; z-index:0;">
                { props.bottom.clone() }
            </div>
            <div
                ref={surface_ref}
                style="position:relative; z-index:1; transform:translateX(0px);"
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end.clone()}
                ontouchcancel={on_touch_end}
            >
                { props.children.clone() }
            </div>
        </div>
    }
}
