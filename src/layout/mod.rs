//! The layout pipeline: partition a day's appointments into overlap
//! clusters per column, pack each cluster into lanes, and expose the result
//! for geometry mapping.
//!
//! Real appointments and the ghost selection travel the same path; the
//! ghost is just one more [`item::BoardItem`] in its bound column.

pub mod cluster;
pub mod geometry;
pub mod item;
pub mod lanes;

use item::{BoardItem, ItemId};
use lanes::LaidOutItem;

use crate::models::appointment::Appointment;
use crate::models::column::{Column, COLUMN_COUNT};
use crate::models::selection::PendingSelection;

/// Run the full partition + assign pass over one column's items.
///
/// Output order follows the canonical sort, flattened across clusters.
pub fn layout_column(items: Vec<BoardItem>) -> Vec<LaidOutItem> {
    cluster::partition_clusters(items)
        .into_iter()
        .flat_map(lanes::assign_lanes)
        .collect()
}

/// Lane assignments for every column of the viewed day.
///
/// Derived state: recomputed from scratch whenever the snapshot or the
/// pending selection changes, never updated incrementally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayLayout {
    columns: [Vec<LaidOutItem>; COLUMN_COUNT],
}

impl DayLayout {
    /// Laid-out items for one column, in canonical order.
    pub fn items(&self, column: Column) -> &[LaidOutItem] {
        &self.columns[column.index()]
    }

    /// Look up one item's lane assignment by id.
    pub fn lane_of(&self, id: &ItemId) -> Option<(Column, &LaidOutItem)> {
        Column::ALL.iter().find_map(|&column| {
            self.columns[column.index()]
                .iter()
                .find(|item| &item.id == id)
                .map(|item| (column, item))
        })
    }

    /// Total number of laid-out items, ghost included.
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lay out a day's snapshot plus any visible pending selection.
///
/// Columns are resolved once, up front; everything downstream sees only
/// resolved columns.  The ghost joins its bound column and is processed
/// identically to real appointments.
pub fn layout_day(appointments: &[Appointment], pending: Option<&PendingSelection>) -> DayLayout {
    let mut buckets: [Vec<BoardItem>; COLUMN_COUNT] = Default::default();

    for appointment in appointments {
        let column = Column::resolve(appointment);
        buckets[column.index()].push(BoardItem::from_appointment(appointment));
    }
    if let Some(selection) = pending.filter(|s| s.visible) {
        buckets[selection.column.index()].push(BoardItem::from_selection(selection));
    }

    let mut layout = DayLayout::default();
    for column in Column::ALL {
        let items = std::mem::take(&mut buckets[column.index()]);
        layout.columns[column.index()] = layout_column(items);
    }
    log::trace!("layout pass placed {} items", layout.len());
    layout
}
