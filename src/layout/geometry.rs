//! Geometry mapping between laid-out items and board coordinates.
//!
//! One authoritative pair of transforms: [`GridMetrics::rect_for`] maps a
//! laid-out item to a rectangle in the virtual board space, and
//! [`GridMetrics::slot_at`] is its inverse for hit-testing.  Rendering and
//! pointer handling both go through these, so they cannot drift apart.

use serde::{Deserialize, Serialize};

use super::lanes::LaidOutItem;
use crate::grid::{self, GridSlot, GRID_END_MINUTES, GRID_START_MINUTES, HOUR_ROWS};
use crate::models::column::{Column, COLUMN_COUNT};

/// Axis-aligned rectangle in the virtual board coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoardRect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Dimensions of the virtual board space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Height of one hour row.
    pub hour_height: f32,
    /// Width of the time-label gutter on the left.
    pub gutter_width: f32,
    /// Width of each category column.
    pub column_width: f32,
    /// Horizontal padding inside a lane; halved when a cluster has more
    /// than one lane so narrow cards stay legible.
    pub lane_padding: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            hour_height: 120.0,
            gutter_width: 50.0,
            column_width: 160.0,
            lane_padding: 4.0,
        }
    }
}

impl GridMetrics {
    /// Total board height, spanning the grid's full minute range.
    pub fn grid_height(&self) -> f32 {
        (GRID_END_MINUTES - GRID_START_MINUTES) as f32 / 60.0 * self.hour_height
    }

    /// Total board width including the gutter.
    pub fn grid_width(&self) -> f32 {
        self.gutter_width + COLUMN_COUNT as f32 * self.column_width
    }

    /// Left edge of a column.
    pub fn column_left(&self, column: Column) -> f32 {
        self.gutter_width + column.index() as f32 * self.column_width
    }

    /// Vertical position of a minutes-since-midnight instant.
    pub fn y_of_minutes(&self, minutes: u32) -> f32 {
        (minutes as f32 - GRID_START_MINUTES as f32) / 60.0 * self.hour_height
    }

    /// Map a laid-out interval to its rectangle.
    ///
    /// Called identically for real appointments and the ghost; lane index
    /// and lane count are the only inputs that differ.
    pub fn rect_for(
        &self,
        column: Column,
        lane: usize,
        total_lanes: usize,
        start_min: u32,
        end_min: u32,
    ) -> BoardRect {
        let total_lanes = total_lanes.max(1);
        let lane_width = self.column_width / total_lanes as f32;
        let padding = if total_lanes > 1 {
            self.lane_padding * 0.5
        } else {
            self.lane_padding
        };

        BoardRect {
            left: self.column_left(column) + lane as f32 * lane_width + padding,
            top: self.y_of_minutes(start_min),
            width: (lane_width - 2.0 * padding).max(1.0),
            height: (end_min.saturating_sub(start_min)) as f32 / 60.0 * self.hour_height,
        }
    }

    /// Convenience wrapper for pipeline output.
    pub fn rect_for_item(&self, column: Column, item: &LaidOutItem) -> BoardRect {
        self.rect_for(column, item.lane, item.total_lanes, item.start_min, item.end_min)
    }

    /// Inverse transform: the column and slot under a board-space point.
    ///
    /// Returns `None` in the gutter, beyond the last column, or outside the
    /// grid's vertical range.  This is the single authoritative hit-test;
    /// drags that start on top of a card resolve their anchor slot through
    /// it rather than through whatever element is visually on top.
    pub fn slot_at(&self, x: f32, y: f32) -> Option<(Column, GridSlot)> {
        if x < self.gutter_width || y < 0.0 {
            return None;
        }
        let column_index = ((x - self.gutter_width) / self.column_width).floor() as usize;
        let column = *Column::ALL.get(column_index)?;

        let hour_row = (y / self.hour_height).floor();
        if hour_row >= HOUR_ROWS as f32 {
            return None;
        }
        let fraction = y / self.hour_height - hour_row;
        let quarter = grid::quarter_from_fraction(fraction);
        let slot = GridSlot::new(grid::GRID_START_HOUR + hour_row as u32, quarter)?;
        Some((column, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::item::ItemId;
    use pretty_assertions::assert_eq;

    fn metrics() -> GridMetrics {
        GridMetrics::default()
    }

    #[test]
    fn test_grid_dimensions_cover_all_rows_and_columns() {
        let m = metrics();
        assert_eq!(m.grid_height(), HOUR_ROWS as f32 * m.hour_height);
        assert_eq!(m.grid_width(), m.gutter_width + 6.0 * m.column_width);
        // The last on-grid slot still lies inside the board.
        assert!(m.y_of_minutes(GRID_END_MINUTES - 15) < m.grid_height());
    }

    #[test]
    fn test_rect_vertical_mapping() {
        // 09:00-09:30 sits two hours below the 07:00 grid start.
        let rect = metrics().rect_for(Column::Consultation, 0, 1, 540, 570);
        assert_eq!(rect.top, 240.0);
        assert_eq!(rect.height, 60.0);
    }

    #[test]
    fn test_single_lane_fills_column_minus_padding() {
        let m = metrics();
        let rect = m.rect_for(Column::FollowUp, 0, 1, 540, 570);
        assert_eq!(rect.left, m.gutter_width + m.column_width + m.lane_padding);
        assert_eq!(rect.width, m.column_width - 2.0 * m.lane_padding);
    }

    #[test]
    fn test_two_lanes_split_column_with_reduced_padding() {
        let m = metrics();
        let first = m.rect_for(Column::Surgery, 0, 2, 540, 570);
        let second = m.rect_for(Column::Surgery, 1, 2, 540, 570);
        let lane_width = m.column_width / 2.0;
        let pad = m.lane_padding * 0.5;
        assert_eq!(first.left, m.column_left(Column::Surgery) + pad);
        assert_eq!(second.left, m.column_left(Column::Surgery) + lane_width + pad);
        assert_eq!(first.width, lane_width - 2.0 * pad);
        // Side-by-side lanes never overlap horizontally.
        assert!(first.right() <= second.left);
    }

    #[test]
    fn test_ghost_maps_through_same_transform() {
        let m = metrics();
        let item = LaidOutItem {
            id: ItemId::Ghost,
            lane: 1,
            total_lanes: 2,
            start_min: 540,
            end_min: 555,
        };
        assert_eq!(
            m.rect_for_item(Column::Surgery, &item),
            m.rect_for(Column::Surgery, 1, 2, 540, 555)
        );
    }

    #[test]
    fn test_slot_at_inverts_rect_top_left() {
        let m = metrics();
        for column in Column::ALL {
            let rect = m.rect_for(column, 0, 1, 600, 630);
            let (hit_column, slot) = m.slot_at(rect.left, rect.top).unwrap();
            assert_eq!(hit_column, column);
            assert_eq!(slot.to_minutes(), 600);
        }
    }

    #[test]
    fn test_slot_at_rejects_gutter_and_out_of_range() {
        let m = metrics();
        assert_eq!(m.slot_at(10.0, 100.0), None);
        assert_eq!(m.slot_at(m.grid_width() + 1.0, 100.0), None);
        assert_eq!(m.slot_at(100.0, -5.0), None);
        assert_eq!(m.slot_at(100.0, m.grid_height() + 1.0), None);
    }

    #[test]
    fn test_slot_at_floors_within_hour_row() {
        let m = metrics();
        // 20% into the 09:00 row lands in quarter 0; 30% in quarter 1.
        let row_top = m.y_of_minutes(540);
        let (_, early) = m.slot_at(m.gutter_width + 1.0, row_top + 0.2 * m.hour_height).unwrap();
        let (_, later) = m.slot_at(m.gutter_width + 1.0, row_top + 0.3 * m.hour_height).unwrap();
        assert_eq!(early.quarter, 0);
        assert_eq!(later.quarter, 1);
    }
}
