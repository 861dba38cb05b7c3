use yew::prelude::*;

use crate::model::Variant;

/// Shared group state: which item is open, and how strictly the group
/// enforces exclusivity. `SwipeGroup` is the only writer of `active_item`;
/// items read it through `use_context` and get re-rendered on change.
#[derive(Clone, PartialEq)]
pub struct SwipeGroupContext {
    pub active_item: Option<AttrValue>,
    pub set_active: Callback<AttrValue>,
    pub variant: Variant,
}

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeGroupProps {
    #[prop_or_default]
    pub variant: Variant,
    pub children: Html,
}

/// Root of a set of swipeable items. Claiming activation is last-write-wins;
/// input is serialized by user interaction, so no contention handling is
/// needed.
#[function_component(SwipeGroup)]
pub fn swipe_group(props: &SwipeGroupProps) -> Html {
    let active_item = use_state(|| None::<AttrValue>);

    let set_active = {
        let active_item = active_item.clone();
        Callback::from(move |id: AttrValue| active_item.set(Some(id)))
    };

    let context = SwipeGroupContext {
        active_item: (*active_item).clone(),
        set_active,
        variant: props.variant,
    };

    html! {
        <ContextProvider<SwipeGroupContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SwipeGroupContext>>
    }
}
