use yew::prelude::*;

use super::{swipe_group::SwipeGroup, swipe_item::SwipeItem};
use crate::model::{InboxAction, InboxState, SwipeDirection, Variant};
use crate::util::{clog, local_storage};

const INBOX_KEY: &str = "swipe_demo_inbox";

fn time_stamp() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("en-US"))
}

#[function_component(App)]
pub fn app() -> Html {
    let inbox = use_reducer(InboxState::new_basic);
    let status = use_state(|| None::<String>);
    let pinned = use_state(|| false);

    // Load the persisted inbox once
    {
        let inbox = inbox.clone();
        use_effect_with((), move |_| {
            if let Some(store) = local_storage() {
                if let Ok(Some(raw)) = store.get_item(INBOX_KEY) {
                    if let Ok(saved) = serde_json::from_str::<InboxState>(&raw) {
                        inbox.dispatch(InboxAction::Replace { state: saved });
                    }
                }
            }
            || ()
        });
    }
    // Persist inbox changes
    {
        let inbox = inbox.clone();
        use_effect_with(inbox.version, move |_| {
            if let Some(store) = local_storage() {
                if let Ok(raw) = serde_json::to_string(&*inbox) {
                    let _ = store.set_item(INBOX_KEY, &raw);
                }
            }
            || ()
        });
    }

    let restore = {
        let inbox = inbox.clone();
        let status = status.clone();
        Callback::from(move |_| {
            inbox.dispatch(InboxAction::Restore);
            status.set(Some(format!("Inbox restored at {}", time_stamp())));
        })
    };

    let archived_count = inbox.messages.iter().filter(|m| m.archived).count();

    let rows: Html = inbox
        .messages
        .iter()
        .filter(|m| !m.archived)
        .map(|msg| {
            let archive = {
                let inbox = inbox.clone();
                let status = status.clone();
                let id = msg.id;
                let sender = msg.sender.clone();
                Callback::from(move |_| {
                    inbox.dispatch(InboxAction::Archive { id });
                    status.set(Some(format!("Archived '{}' at {}", sender, time_stamp())));
                })
            };
            let delete = {
                let inbox = inbox.clone();
                let status = status.clone();
                let id = msg.id;
                let sender = msg.sender.clone();
                Callback::from(move |_| {
                    inbox.dispatch(InboxAction::Delete { id });
                    status.set(Some(format!("Deleted '{}' at {}", sender, time_stamp())));
                })
            };
            // A full swipe deletes; dispatching twice for one gesture is
            // harmless because delete-by-id is idempotent.
            let on_max = {
                let inbox = inbox.clone();
                let status = status.clone();
                let id = msg.id;
                let sender = msg.sender.clone();
                Callback::from(move |_| {
                    clog(&format!("max offset reached for message {id}"));
                    inbox.dispatch(InboxAction::Delete { id });
                    status.set(Some(format!("Deleted '{}' at {}", sender, time_stamp())));
                })
            };
            html! {
                <SwipeItem
                    key={msg.id}
                    id={format!("msg-{}", msg.id)}
                    direction={SwipeDirection::Left}
                    breakpoints_to_keep={vec![0, 72, 240]}
                    on_max_offset_reach={on_max}
                    bottom={html! {
                        <div style="display:flex; justify-content:flex-end; height:100%;">
                            <button onclick={archive} style="width:72px; border:none; background:#58a6ff; color:#fff;">{"Archive"}</button>
                            <button onclick={delete} style="width:72px; border:none; background:#f85149; color:#fff;">{"Delete"}</button>
                        </div>
                    }}
                >
                    <div style="background:#161b22; border-bottom:1px solid #30363d; padding:12px 16px;">
                        <div style="font-weight:600;">{ &msg.sender }</div>
                        <div style="font-size:13px; opacity:0.7;">{ &msg.preview }</div>
                    </div>
                </SwipeItem>
            }
        })
        .collect();

    let on_pin_reach = {
        let pinned = pinned.clone();
        let status = status.clone();
        Callback::from(move |_| {
            pinned.set(!*pinned);
            status.set(Some(format!("Pinned toggled at {}", time_stamp())));
        })
    };

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <div style="max-width:480px; margin:0 auto; padding:24px 12px;">
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:12px;">
                    <h2 style="margin:0;">{"Inbox"}</h2>
                    <div style="display:flex; gap:8px; align-items:center;">
                        <span style="font-size:12px; opacity:0.6;">{ format!("{archived_count} archived") }</span>
                        <button onclick={restore}>{"Restore"}</button>
                    </div>
                </div>
                <div style="border:1px solid #30363d; border-radius:8px; overflow:hidden;">
                    <SwipeGroup variant={Variant::Singular}>
                        { rows }
                    </SwipeGroup>
                </div>
                <h3 style="margin:24px 0 8px;">{"Swipe right to pin"}</h3>
                <div style="border:1px solid #30363d; border-radius:8px; overflow:hidden;">
                    <SwipeGroup>
                        <SwipeItem
                            id="pin-row"
                            direction={SwipeDirection::Right}
                            breakpoints_to_keep={vec![0, 96]}
                            on_max_offset_reach={on_pin_reach}
                            bottom={html! {
                                <div style="display:flex; justify-content:flex-start; align-items:center; height:100%; background:#238636; color:#fff; padding-left:16px;">
                                    {"Pin"}
                                </div>
                            }}
                        >
                            <div style="background:#161b22; padding:12px 16px;">
                                { if *pinned { "📌 Pinned conversation" } else { "Conversation" } }
                            </div>
                        </SwipeItem>
                    </SwipeGroup>
                </div>
                if let Some(note) = &*status {
                    <div style="margin-top:16px; font-size:12px; opacity:0.6;">{ note.clone() }</div>
                }
                <div style="margin-top:8px; font-size:12px; opacity:0.4;">
                    {"Touch-only demo: swipe a row left to reveal its actions; a full swipe deletes."}
                </div>
            </div>
        </div>
    }
}
