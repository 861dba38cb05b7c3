//! Core data model for the swipe-to-action engine and the demo inbox.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Which way an item may be dragged away from its rest position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Negative offsets only (finger travels left).
    Left,
    /// Positive offsets only.
    Right,
}

/// Group-level exclusivity mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// At most one item in the group stays open; activating another item
    /// retracts the rest.
    Singular,
    /// No cross-item retraction.
    #[default]
    Default,
}

/// Immutable per-item swipe configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    pub direction: SwipeDirection,
    /// Ascending non-negative offsets the element may rest at after release.
    /// The last entry is the maximum offset; empty means the element always
    /// returns home.
    pub breakpoints_to_keep: Vec<i32>,
}

impl SwipeConfig {
    pub fn new(direction: SwipeDirection, breakpoints_to_keep: Vec<i32>) -> Self {
        Self {
            direction,
            breakpoints_to_keep,
        }
    }

    /// Maximum offset magnitude, 0 when no breakpoints are configured.
    pub fn max_offset(&self) -> i32 {
        self.breakpoints_to_keep.last().copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Demo inbox model

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender: String,
    pub preview: String,
    pub archived: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxState {
    pub messages: Vec<Message>,
    /// Bumped on every mutation so effects can key off a cheap scalar.
    pub version: u32,
}

pub enum InboxAction {
    Archive { id: u32 },
    Delete { id: u32 },
    Restore,
    /// Replace the whole state with a persisted snapshot.
    Replace { state: InboxState },
}

impl InboxState {
    pub fn new_basic() -> Self {
        let seed = [
            ("Dana", "Standup moved to 9:30 tomorrow"),
            ("Priya", "Design review notes attached"),
            ("Miguel", "Can you take a look at the release branch?"),
            ("Ops", "Deploy finished without warnings"),
            ("Sam", "Lunch on Thursday?"),
        ];
        let messages = seed
            .iter()
            .enumerate()
            .map(|(i, (sender, preview))| Message {
                id: i as u32 + 1,
                sender: (*sender).to_string(),
                preview: (*preview).to_string(),
                archived: false,
            })
            .collect();
        Self {
            messages,
            version: 0,
        }
    }
}

impl Reducible for InboxState {
    type Action = InboxAction;

    fn reduce(self: Rc<Self>, action: InboxAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InboxAction::Archive { id } => {
                if let Some(msg) = next.messages.iter_mut().find(|m| m.id == id) {
                    msg.archived = true;
                }
            }
            InboxAction::Delete { id } => {
                next.messages.retain(|m| m.id != id);
            }
            InboxAction::Restore => {
                next = Self::new_basic();
            }
            InboxAction::Replace { state } => {
                next = state;
            }
        }
        next.version = self.version.wrapping_add(1);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_offset_is_last_breakpoint_or_zero() {
        let cfg = SwipeConfig::new(SwipeDirection::Left, vec![0, 50, 250]);
        assert_eq!(cfg.max_offset(), 250);
        let empty = SwipeConfig::new(SwipeDirection::Left, vec![]);
        assert_eq!(empty.max_offset(), 0);
    }

    #[test]
    fn archive_marks_without_removing() {
        let state = Rc::new(InboxState::new_basic());
        let count = state.messages.len();
        let next = state.reduce(InboxAction::Archive { id: 2 });
        assert_eq!(next.messages.len(), count);
        assert!(next.messages.iter().find(|m| m.id == 2).unwrap().archived);
        assert_eq!(next.version, 1);
    }

    #[test]
    fn delete_removes_the_message() {
        let state = Rc::new(InboxState::new_basic());
        let count = state.messages.len();
        let next = state.reduce(InboxAction::Delete { id: 3 });
        assert_eq!(next.messages.len(), count - 1);
        assert!(next.messages.iter().all(|m| m.id != 3));
    }

    #[test]
    fn delete_of_a_missing_id_is_a_no_op() {
        let state = Rc::new(InboxState::new_basic());
        let next = state.clone().reduce(InboxAction::Delete { id: 99 });
        assert_eq!(next.messages, state.messages);
    }

    #[test]
    fn restore_reseeds_but_keeps_counting_versions() {
        let state = Rc::new(InboxState::new_basic());
        let next = state
            .reduce(InboxAction::Delete { id: 1 })
            .reduce(InboxAction::Restore);
        assert_eq!(next.messages, InboxState::new_basic().messages);
        assert_eq!(next.version, 2);
    }
}
