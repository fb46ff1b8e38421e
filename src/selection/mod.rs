//! Pointer/touch gesture state machine for carving out time ranges.
//!
//! All gesture state lives on [`SelectionController`]: the current phase,
//! the pending selection, the last hovered slot, and the hold-timer token.
//! The host owns the clock; timers are inert [`TimerHandle`] values the
//! host schedules and reports back through [`SelectionController::timer_fired`].
//!
//! Every input returns a [`GestureUpdate`] describing what the host should
//! do (emit an outcome, schedule or cancel a timer, auto-scroll).  Inputs
//! that arrive out of order, such as a move with no active gesture, are
//! ignored so the board stays usable.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::grid::GridSlot;
use crate::models::column::Column;
use crate::models::selection::PendingSelection;
use crate::utils::time::minutes_to_time;

/// Hold threshold before a press on a card turns into a drag, per input
/// kind.  Touch waits longer so scroll gestures are not hijacked.
pub const MOUSE_HOLD_MS: u64 = 200;
pub const TOUCH_HOLD_MS: u64 = 500;

/// Distance from a viewport edge at which dragging starts auto-scrolling.
pub const AUTO_SCROLL_BAND: f32 = 24.0;
/// Constant auto-scroll step applied once per move event.
pub const AUTO_SCROLL_STEP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    pub fn hold_threshold_ms(self) -> u64 {
        match self {
            PointerKind::Mouse => MOUSE_HOLD_MS,
            PointerKind::Touch => TOUCH_HOLD_MS,
        }
    }
}

/// A delayed callback the host must schedule.
///
/// The controller never blocks; it hands out a token and a delay, and the
/// host calls [`SelectionController::timer_fired`] with the token when the
/// delay elapses.  Stale tokens are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub token: u64,
    pub delay_ms: u64,
}

/// The vertical extent of the scrollable viewport, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f32,
    pub bottom: f32,
}

/// Terminal result of a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// A press-release on a card resolved as a click.
    CardActivated(String),
    /// A genuine drag settled into a time range.
    RangeSelected {
        column: Column,
        start: NaiveTime,
        end: NaiveTime,
    },
}

/// Side effects requested by one gesture input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureUpdate {
    pub outcome: Option<GestureOutcome>,
    /// Timer the host must schedule.
    pub schedule_hold: Option<TimerHandle>,
    /// Token of a previously scheduled timer that is now obsolete.
    pub cancel_hold: Option<u64>,
    /// Signed vertical scroll to apply to the viewport this event.
    pub auto_scroll: f32,
}

impl GestureUpdate {
    fn with_outcome(outcome: GestureOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    /// Press registered on a card; the hold timer decides click vs drag.
    PendingOnCard { appointment_id: String, token: u64 },
    Dragging {
        /// Armed through a card hold rather than an empty slot.
        via_card: bool,
        /// Cursor has left the anchor slot at least once.
        moved: bool,
    },
    /// Gesture ended, range emitted; selection stays visible until cleared.
    Settled,
}

/// The gesture state machine.
///
/// Single-threaded and synchronous; every method runs to completion inside
/// the host's event handler.
#[derive(Debug)]
pub struct SelectionController {
    phase: Phase,
    selection: Option<PendingSelection>,
    /// Last slot the pointer was seen over, card-covered or not.
    hover: Option<(Column, GridSlot)>,
    next_token: u64,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            selection: None,
            hover: None,
            next_token: 0,
        }
    }

    /// The selection to inject into the layout pass, if any.
    pub fn pending(&self) -> Option<&PendingSelection> {
        self.selection.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled)
    }

    /// Press on an empty grid slot: arm and immediately start dragging.
    pub fn press_slot(&mut self, column: Column, slot: GridSlot, _kind: PointerKind) -> GestureUpdate {
        let update = self.abandon_previous_gesture();
        log::debug!("press on empty slot {:?} {:?}", column, slot);
        self.hover = Some((column, slot));
        self.selection = Some(PendingSelection::at(column, slot));
        self.phase = Phase::Dragging {
            via_card: false,
            moved: false,
        };
        update
    }

    /// Press on an existing appointment card: start the hold timer that
    /// disambiguates click from drag.  `slot_under` is the grid slot the
    /// card visually covers at the press point, resolved by the caller
    /// through the geometry hit-test.
    pub fn press_card(
        &mut self,
        appointment_id: impl Into<String>,
        column: Column,
        slot_under: GridSlot,
        kind: PointerKind,
    ) -> GestureUpdate {
        let mut update = self.abandon_previous_gesture();
        let appointment_id = appointment_id.into();
        log::debug!("press on card {}", appointment_id);

        self.hover = Some((column, slot_under));
        self.next_token += 1;
        let handle = TimerHandle {
            token: self.next_token,
            delay_ms: kind.hold_threshold_ms(),
        };
        self.phase = Phase::PendingOnCard {
            appointment_id,
            token: handle.token,
        };
        update.schedule_hold = Some(handle);
        update
    }

    /// The hold timer elapsed: a card press becomes a drag, anchored at the
    /// slot currently under the pointer.
    pub fn timer_fired(&mut self, token: u64) -> GestureUpdate {
        match &self.phase {
            Phase::PendingOnCard { token: armed, .. } if *armed == token => {
                let Some((column, slot)) = self.hover else {
                    // Pointer left the grid before the timer fired.
                    self.phase = Phase::Idle;
                    return GestureUpdate::default();
                };
                log::debug!("hold threshold reached, dragging from {:?} {:?}", column, slot);
                self.selection = Some(PendingSelection::at(column, slot));
                self.phase = Phase::Dragging {
                    via_card: true,
                    moved: false,
                };
                GestureUpdate::default()
            }
            // Stale token from a cancelled or superseded gesture.
            _ => GestureUpdate::default(),
        }
    }

    /// Pointer moved to a slot.  Only meaningful while a gesture is active;
    /// stray moves are ignored.
    ///
    /// `pointer_y`/`viewport` drive edge auto-scroll while dragging.
    pub fn pointer_moved(
        &mut self,
        column: Column,
        slot: GridSlot,
        pointer_y: f32,
        viewport: Viewport,
    ) -> GestureUpdate {
        self.hover = Some((column, slot));
        let mut update = GestureUpdate::default();

        if let Phase::Dragging { moved, .. } = &mut self.phase {
            let Some(selection) = self.selection.as_mut() else {
                return update;
            };
            // The gesture stays bound to its column; crossing into another
            // column moves the pointer but not the selection.
            if column == selection.column && slot != selection.cursor {
                selection.cursor = slot;
                if slot != selection.anchor {
                    *moved = true;
                }
            }
            update.auto_scroll = edge_scroll(pointer_y, viewport);
        }
        update
    }

    /// Pointer released: resolve the gesture.
    pub fn released(&mut self) -> GestureUpdate {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            // Released before the hold threshold: a click, not a drag.
            Phase::PendingOnCard { appointment_id, token } => {
                log::debug!("card click {}", appointment_id);
                let mut update = GestureUpdate::with_outcome(GestureOutcome::CardActivated(
                    appointment_id,
                ));
                update.cancel_hold = Some(token);
                update
            }
            Phase::Dragging { via_card, moved } => {
                let Some(selection) = self.selection else {
                    return GestureUpdate::default();
                };
                // A card-armed drag that never left its anchor slot is the
                // card's own click, not a new booking.
                if via_card && !moved {
                    self.selection = None;
                    return GestureUpdate::default();
                }
                let (start_min, mut end_min) = selection.range_minutes();
                if end_min <= start_min {
                    end_min = start_min + crate::grid::SLOT_MINUTES;
                }
                self.phase = Phase::Settled;
                log::debug!(
                    "gesture settled: {:?} {}..{}",
                    selection.column,
                    start_min,
                    end_min
                );
                GestureUpdate::with_outcome(GestureOutcome::RangeSelected {
                    column: selection.column,
                    start: minutes_to_time(start_min),
                    end: minutes_to_time(end_min),
                })
            }
            phase @ Phase::Settled => {
                // A release with no active gesture; keep the settled state.
                self.phase = phase;
                GestureUpdate::default()
            }
            Phase::Idle => GestureUpdate::default(),
        }
    }

    /// Pointer left the tracked surface without releasing (non-touch):
    /// treated as a release at the last known cursor.
    pub fn pointer_left(&mut self) -> GestureUpdate {
        self.released()
    }

    /// External clear signal, e.g. the booking dialog closed.  Drops the
    /// selection and returns to idle.
    pub fn clear(&mut self) -> GestureUpdate {
        self.selection = None;
        self.hover = None;
        let mut update = GestureUpdate::default();
        if let Phase::PendingOnCard { token, .. } =
            std::mem::replace(&mut self.phase, Phase::Idle)
        {
            update.cancel_hold = Some(token);
        }
        update
    }

    /// Starting a new gesture implicitly cancels a still-pending hold timer
    /// and discards an uncommitted selection from the previous gesture.
    fn abandon_previous_gesture(&mut self) -> GestureUpdate {
        let mut update = GestureUpdate::default();
        if let Phase::PendingOnCard { token, .. } =
            std::mem::replace(&mut self.phase, Phase::Idle)
        {
            update.cancel_hold = Some(token);
        }
        self.selection = None;
        update
    }
}

/// Constant-rate scroll command when the pointer nears a viewport edge.
fn edge_scroll(pointer_y: f32, viewport: Viewport) -> f32 {
    if pointer_y < viewport.top + AUTO_SCROLL_BAND {
        -AUTO_SCROLL_STEP
    } else if pointer_y > viewport.bottom - AUTO_SCROLL_BAND {
        AUTO_SCROLL_STEP
    } else {
        0.0
    }
}
