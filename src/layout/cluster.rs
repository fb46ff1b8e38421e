//! Overlap partitioner: groups a column's items into clusters of
//! transitively overlapping intervals.
//!
//! The sort performed here is the one total order the whole layout pass
//! depends on; lane assignment walks clusters in exactly this order, so the
//! comparator must never fall back to unstable or partial ordering.

use std::cmp::Ordering;

use super::item::{BoardItem, ItemId};

/// Sort a column's items into the canonical layout order.
///
/// Ascending by start, then: real before ghost among equal starts (the
/// ghost "pushes in" from the right), then creation time with missing
/// timestamps last, then id for a final total tie-break.
fn canonical_order(a: &BoardItem, b: &BoardItem) -> Ordering {
    a.start_min
        .cmp(&b.start_min)
        .then_with(|| a.is_ghost().cmp(&b.is_ghost()))
        .then_with(|| {
            let a_created = a.created_at.map(|t| t.timestamp_millis()).unwrap_or(i64::MAX);
            let b_created = b.created_at.map(|t| t.timestamp_millis()).unwrap_or(i64::MAX);
            a_created.cmp(&b_created)
        })
        .then_with(|| match (&a.id, &b.id) {
            (ItemId::Appointment(a_id), ItemId::Appointment(b_id)) => a_id.cmp(b_id),
            _ => Ordering::Equal,
        })
}

/// Partition a column's items into clusters of mutually overlapping
/// intervals.
///
/// Sorts into canonical order, then sweeps: an item whose start lies before
/// the running `max_end` extends the current cluster, otherwise it closes
/// the cluster and opens a new one.  Item order inside each cluster is the
/// canonical sort order.
pub fn partition_clusters(mut items: Vec<BoardItem>) -> Vec<Vec<BoardItem>> {
    items.sort_by(canonical_order);

    let mut clusters: Vec<Vec<BoardItem>> = Vec::new();
    let mut current: Vec<BoardItem> = Vec::new();
    let mut max_end = 0u32;

    for item in items {
        if current.is_empty() || item.start_min < max_end {
            max_end = max_end.max(item.end_min);
            current.push(item);
        } else {
            clusters.push(std::mem::take(&mut current));
            max_end = item.end_min;
            current.push(item);
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }
    clusters
}
