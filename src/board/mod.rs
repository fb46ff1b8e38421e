//! Day board facade: the one mutable object the presentation layer talks to.
//!
//! Owns the day's appointment snapshot, the gesture controller, and the
//! cached layout.  Everything is synchronous and single-threaded; the
//! snapshot is replaced atomically and the layout is recomputed from
//! scratch whenever an input changes.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::layout::geometry::{BoardRect, GridMetrics};
use crate::layout::item::ItemId;
use crate::layout::{layout_day, DayLayout};
use crate::models::appointment::Appointment;
use crate::models::classification::{classify, Classification};
use crate::models::column::Column;
use crate::selection::{GestureUpdate, PointerKind, SelectionController, Viewport};

/// Collaborator seam for fetching a day's appointments.
///
/// The board treats the returned list as an authoritative snapshot for the
/// current layout pass; storage, querying, and persistence semantics live
/// behind this trait.
pub trait AppointmentSource {
    fn list_appointments(&self, date: NaiveDate) -> Result<Vec<Appointment>>;
}

/// The scheduling board for one viewed day.
pub struct DayBoard {
    date: Option<NaiveDate>,
    appointments: Vec<Appointment>,
    controller: SelectionController,
    metrics: GridMetrics,
    cache: Option<DayLayout>,
}

impl Default for DayBoard {
    fn default() -> Self {
        Self::new(GridMetrics::default())
    }
}

impl DayBoard {
    pub fn new(metrics: GridMetrics) -> Self {
        Self {
            date: None,
            appointments: Vec::new(),
            controller: SelectionController::new(),
            metrics,
            cache: None,
        }
    }

    /// Load a day's snapshot from the collaborator.
    ///
    /// Replaces the snapshot atomically and destroys any selection from the
    /// previously viewed day.
    pub fn load(&mut self, source: &dyn AppointmentSource, date: NaiveDate) -> Result<()> {
        let appointments = source
            .list_appointments(date)
            .with_context(|| format!("Failed to list appointments for {}", date))?;
        log::debug!("loaded {} appointments for {}", appointments.len(), date);
        self.date = Some(date);
        self.controller.clear();
        self.replace_snapshot(appointments);
        Ok(())
    }

    /// Replace the snapshot in place, e.g. after the collaborator reports a
    /// create/update/delete.
    pub fn replace_snapshot(&mut self, appointments: Vec<Appointment>) {
        self.appointments = appointments;
        self.cache = None;
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// The current layout, recomputed if any input changed since the last
    /// pass.
    pub fn layout(&mut self) -> &DayLayout {
        if self.cache.is_none() {
            self.cache = Some(layout_day(&self.appointments, self.controller.pending()));
        }
        self.cache.as_ref().expect("layout cache populated above")
    }

    /// Rectangle of a laid-out item, for rendering.
    pub fn rect_of(&mut self, id: &ItemId) -> Option<BoardRect> {
        let metrics = self.metrics;
        let (column, item) = self.layout().lane_of(id)?;
        Some(metrics.rect_for_item(column, item))
    }

    /// Display classification for a card.
    pub fn classification(&self, appointment: &Appointment) -> Classification {
        classify(
            appointment.category,
            appointment.status,
            appointment.encounter_completed,
        )
    }

    /// Route a press at board coordinates to the card under the pointer or,
    /// failing that, to the grid slot there.
    ///
    /// Uses the geometry inverse for the slot and the laid-out rectangles
    /// for cards, so hit-testing can never disagree with rendering.
    pub fn press_at(&mut self, x: f32, y: f32, kind: PointerKind) -> GestureUpdate {
        let Some((column, slot)) = self.metrics.slot_at(x, y) else {
            return GestureUpdate::default();
        };
        let card = self.card_at(x, y);
        let update = match card {
            Some(id) => self.controller.press_card(id, column, slot, kind),
            None => self.controller.press_slot(column, slot, kind),
        };
        self.cache = None;
        update
    }

    /// The real appointment card under a board-space point, if any.
    pub fn card_at(&mut self, x: f32, y: f32) -> Option<String> {
        let metrics = self.metrics;
        for column in Column::ALL {
            for item in self.layout().items(column) {
                let ItemId::Appointment(id) = &item.id else {
                    continue;
                };
                if metrics.rect_for_item(column, item).contains(x, y) {
                    return Some(id.clone());
                }
            }
        }
        None
    }

    /// Pointer moved to board coordinates while a gesture may be active.
    pub fn pointer_moved_at(&mut self, x: f32, y: f32, viewport: Viewport) -> GestureUpdate {
        let Some((column, slot)) = self.metrics.slot_at(x, y) else {
            return GestureUpdate::default();
        };
        let update = self.controller.pointer_moved(column, slot, y, viewport);
        self.cache = None;
        update
    }

    pub fn released(&mut self) -> GestureUpdate {
        let update = self.controller.released();
        self.cache = None;
        update
    }

    pub fn pointer_left(&mut self) -> GestureUpdate {
        let update = self.controller.pointer_left();
        self.cache = None;
        update
    }

    pub fn timer_fired(&mut self, token: u64) -> GestureUpdate {
        let update = self.controller.timer_fired(token);
        self.cache = None;
        update
    }

    /// External clear signal: the booking dialog closed or the view reset.
    pub fn clear_selection(&mut self) -> GestureUpdate {
        let update = self.controller.clear();
        self.cache = None;
        update
    }

    pub fn selection(&self) -> Option<&crate::models::selection::PendingSelection> {
        self.controller.pending()
    }
}
