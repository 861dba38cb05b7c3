// Per-item swipe gesture state machine.
//
// The component layer feeds raw touch samples in and performs whatever
// effect comes back; everything here is DOM-free so the edge cases stay
// testable (direction gating, vertical-scroll lockout, exceed tracking).

use crate::model::{SwipeConfig, SwipeDirection};
use crate::state::breakpoint::closest;

/// Effect requested by a touch-move sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveAction {
    /// Vertical scrolling won this gesture; leave the event to the browser.
    CedeToScroll,
    /// The drag went in the disallowed direction; the offset was forced
    /// back to 0 and the element should be eased home.
    SnapHome,
    /// The offset reached the configured maximum; keep the current visual
    /// position and suppress native scrolling.
    Pin,
    /// Project this offset onto the element.
    Write(i32),
}

/// Result of releasing a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReleaseOutcome {
    /// Offset to ease the element to, `None` when nothing needs writing.
    pub settle: Option<i32>,
    /// The exceeded flag was latched while dragging.
    pub max_reached_early: bool,
    /// The release snap landed on the last configured breakpoint.
    ///
    /// Reported independently of `max_reached_early`, so one gesture can
    /// produce both; callers decide whether to dedupe.
    pub max_reached_on_snap: bool,
}

#[derive(Clone, Debug, Default)]
pub struct GestureState {
    /// Signed horizontal displacement in px. Authoritative; the element's
    /// transform is a projection of this field.
    pub offset: i32,
    /// Latched on the first vertically dominant sample; horizontal updates
    /// stay suppressed until the next touch-start.
    pub vertical_scroll: bool,
    /// Baseline for the next delta. Only advances when an offset write
    /// happens, so pinning at the maximum does not cause a jump when the
    /// finger later drags back below it.
    pub prev_x: f64,
    /// Vertical reference from touch-start; never advances mid-gesture.
    pub prev_y: f64,
    pub drag_in_progress: bool,
    pub offset_exceeded: bool,
}

impl GestureState {
    /// Touch-start: record the contact point and re-arm the gesture flags.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.prev_x = x;
        self.prev_y = y;
        self.vertical_scroll = false;
        self.drag_in_progress = false;
    }

    /// Touch-move: advance the offset by the delta since the last baseline.
    pub fn advance(&mut self, x: f64, y: f64, config: &SwipeConfig) -> MoveAction {
        let dx = (x - self.prev_x).abs();
        let dy = (y - self.prev_y).abs();
        if (dy > dx && !self.drag_in_progress) || self.vertical_scroll {
            self.vertical_scroll = true;
            return MoveAction::CedeToScroll;
        }

        let delta = if self.prev_x > x { -dx } else { dx };
        let new_offset = self.offset + delta.ceil() as i32;

        match config.direction {
            SwipeDirection::Left if new_offset > 0 => {
                self.offset = 0;
                return MoveAction::SnapHome;
            }
            SwipeDirection::Right if new_offset < 0 => {
                self.offset = 0;
                return MoveAction::SnapHome;
            }
            _ => {}
        }

        if new_offset.abs() >= config.max_offset() {
            // Pin: no write, and prev_x keeps the last written baseline.
            self.offset_exceeded = true;
            return MoveAction::Pin;
        }

        self.offset_exceeded = false;
        self.drag_in_progress = true;
        self.offset = new_offset;
        self.prev_x = x;
        MoveAction::Write(new_offset)
    }

    /// Touch-end (or cancel): resolve the offset to a breakpoint.
    pub fn release(&mut self, config: &SwipeConfig) -> ReleaseOutcome {
        let mut outcome = ReleaseOutcome {
            max_reached_early: self.offset_exceeded,
            ..ReleaseOutcome::default()
        };
        self.offset_exceeded = false;
        self.drag_in_progress = false;
        self.prev_x = 0.0;

        if config.breakpoints_to_keep.is_empty() {
            self.offset = 0;
            outcome.settle = Some(0);
            return outcome;
        }
        if self.offset == 0 {
            // Already home, nothing to snap.
            return outcome;
        }

        let sign = if self.offset < 0 { -1 } else { 1 };
        let nearest = closest(&config.breakpoints_to_keep, self.offset.abs());
        outcome.max_reached_on_snap = nearest == config.max_offset();
        self.offset = nearest * sign;
        outcome.settle = Some(self.offset);
        outcome
    }

    /// Forced retraction (group coordination or unmount).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(breakpoints: &[i32]) -> SwipeConfig {
        SwipeConfig::new(SwipeDirection::Left, breakpoints.to_vec())
    }

    fn right(breakpoints: &[i32]) -> SwipeConfig {
        SwipeConfig::new(SwipeDirection::Right, breakpoints.to_vec())
    }

    #[test]
    fn left_drag_settles_on_the_nearest_breakpoint() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(200.0, 100.0);
        assert_eq!(g.advance(180.0, 100.0, &cfg), MoveAction::Write(-20));
        assert_eq!(g.advance(160.0, 101.0, &cfg), MoveAction::Write(-40));
        assert_eq!(g.advance(120.0, 102.0, &cfg), MoveAction::Write(-80));

        let outcome = g.release(&cfg);
        assert_eq!(outcome.settle, Some(-50));
        assert!(!outcome.max_reached_early);
        assert!(!outcome.max_reached_on_snap);
        assert_eq!(g.offset, -50);
    }

    #[test]
    fn exceeding_the_max_pins_and_reports_on_release() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(400.0, 100.0);
        assert_eq!(g.advance(160.0, 100.0, &cfg), MoveAction::Write(-240));
        // -300 crosses the 250 limit: pinned, no write
        assert_eq!(g.advance(100.0, 100.0, &cfg), MoveAction::Pin);
        assert!(g.offset_exceeded);
        assert_eq!(g.offset, -240);
        // further movement past the limit stays pinned
        assert_eq!(g.advance(90.0, 100.0, &cfg), MoveAction::Pin);

        let outcome = g.release(&cfg);
        assert_eq!(outcome.settle, Some(-250));
        assert!(outcome.max_reached_early);
        assert!(outcome.max_reached_on_snap);
        assert_eq!(g.offset, -250);
    }

    #[test]
    fn offset_magnitude_never_exceeds_the_max_mid_drag() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(500.0, 100.0);
        let mut x = 500.0;
        for _ in 0..20 {
            x -= 40.0;
            g.advance(x, 100.0, &cfg);
            assert!(g.offset.abs() < 250, "offset {} left the clamp", g.offset);
        }
    }

    #[test]
    fn dragging_back_resumes_from_the_pinned_baseline() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(400.0, 100.0);
        g.advance(160.0, 100.0, &cfg); // -240 written, baseline 160
        g.advance(100.0, 100.0, &cfg); // pinned, baseline stays 160
        // back above the limit: delta measured from 160, not 100
        assert_eq!(g.advance(200.0, 100.0, &cfg), MoveAction::Write(-200));
        assert!(!g.offset_exceeded);
    }

    #[test]
    fn disallowed_direction_snaps_home_immediately() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        assert_eq!(g.advance(120.0, 100.0, &cfg), MoveAction::SnapHome);
        assert_eq!(g.offset, 0);
        // offset is already 0, so release has nothing to write
        assert_eq!(g.release(&cfg), ReleaseOutcome::default());
    }

    #[test]
    fn right_direction_gate_is_symmetric() {
        let cfg = right(&[0, 96]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        assert_eq!(g.advance(60.0, 100.0, &cfg), MoveAction::SnapHome);
        g.begin(100.0, 100.0);
        assert_eq!(g.advance(140.0, 100.0, &cfg), MoveAction::Write(40));
        assert_eq!(g.advance(180.0, 100.0, &cfg), MoveAction::Write(80));
        let outcome = g.release(&cfg);
        assert_eq!(outcome.settle, Some(96));
        assert!(outcome.max_reached_on_snap);
    }

    #[test]
    fn vertical_first_move_locks_out_the_whole_gesture() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        assert_eq!(g.advance(102.0, 140.0, &cfg), MoveAction::CedeToScroll);
        assert!(g.vertical_scroll);
        // horizontally dominant now, but the latch holds
        assert_eq!(g.advance(160.0, 140.0, &cfg), MoveAction::CedeToScroll);
        assert_eq!(g.offset, 0);
        assert_eq!(g.release(&cfg).settle, None);
    }

    #[test]
    fn vertical_movement_after_a_horizontal_start_keeps_dragging() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        assert_eq!(g.advance(80.0, 100.0, &cfg), MoveAction::Write(-20));
        // dy dominates this sample, but the drag already began
        assert_eq!(g.advance(80.0, 160.0, &cfg), MoveAction::Write(-20));
        assert!(!g.vertical_scroll);
    }

    #[test]
    fn touch_start_unlatches_vertical_scroll() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        g.advance(101.0, 150.0, &cfg);
        assert!(g.vertical_scroll);
        g.begin(100.0, 100.0);
        assert_eq!(g.advance(70.0, 100.0, &cfg), MoveAction::Write(-30));
    }

    #[test]
    fn empty_breakpoints_always_release_to_home() {
        let cfg = left(&[]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        // max offset is 0, so every horizontal move pins at home
        assert_eq!(g.advance(60.0, 100.0, &cfg), MoveAction::Pin);
        assert_eq!(g.offset, 0);
        let outcome = g.release(&cfg);
        assert_eq!(outcome.settle, Some(0));
        assert!(outcome.max_reached_early);
        assert_eq!(g.offset, 0);
    }

    #[test]
    fn release_without_movement_writes_nothing() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        let outcome = g.release(&cfg);
        assert_eq!(outcome.settle, None);
        assert!(!outcome.max_reached_early);
        assert!(!outcome.max_reached_on_snap);
    }

    #[test]
    fn snap_can_reach_the_max_without_the_early_flag() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(300.0, 100.0);
        assert_eq!(g.advance(60.0, 100.0, &cfg), MoveAction::Write(-240));
        let outcome = g.release(&cfg);
        assert_eq!(outcome.settle, Some(-250));
        assert!(!outcome.max_reached_early);
        assert!(outcome.max_reached_on_snap);
    }

    #[test]
    fn exceeded_flag_does_not_leak_into_the_next_gesture() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(400.0, 100.0);
        g.advance(100.0, 100.0, &cfg); // -300, pinned
        assert!(g.release(&cfg).max_reached_early);

        g.begin(100.0, 100.0);
        let outcome = g.release(&cfg);
        assert!(!outcome.max_reached_early);
    }

    #[test]
    fn fractional_deltas_round_toward_positive() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(100.0, 100.0);
        // ceil(-4.7) = -4
        assert_eq!(g.advance(95.3, 100.0, &cfg), MoveAction::Write(-4));
    }

    #[test]
    fn reset_returns_to_the_rest_state() {
        let cfg = left(&[0, 50, 250]);
        let mut g = GestureState::default();
        g.begin(200.0, 100.0);
        g.advance(120.0, 100.0, &cfg);
        g.reset();
        assert_eq!(g.offset, 0);
        assert!(!g.drag_in_progress);
        assert!(!g.offset_exceeded);
    }
}
