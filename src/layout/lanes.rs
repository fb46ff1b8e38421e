//! Greedy lane assignment within one overlap cluster.

use super::item::{BoardItem, ItemId};

/// A laid-out item: its lane within the cluster plus the cluster's lane
/// count, ready for the geometry mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutItem {
    pub id: ItemId,
    pub lane: usize,
    pub total_lanes: usize,
    pub start_min: u32,
    pub end_min: u32,
}

/// Assign lanes within one cluster by greedy interval partitioning.
///
/// Each lane tracks only the end of its most recent item.  Items are placed
/// in the first lane whose end is `<=` their start (an exact touch reuses
/// the lane); otherwise a new lane opens.  Every item is stamped with the
/// cluster's final lane count.  For a fixed input order the result is
/// bit-for-bit reproducible; two overlapping items can never share a lane.
pub fn assign_lanes(cluster: Vec<BoardItem>) -> Vec<LaidOutItem> {
    let mut lane_ends: Vec<u32> = Vec::new();
    let mut placed: Vec<LaidOutItem> = Vec::with_capacity(cluster.len());

    for item in cluster {
        let lane = match lane_ends.iter().position(|&end| end <= item.start_min) {
            Some(lane) => {
                lane_ends[lane] = item.end_min;
                lane
            }
            None => {
                lane_ends.push(item.end_min);
                lane_ends.len() - 1
            }
        };
        placed.push(LaidOutItem {
            id: item.id,
            lane,
            total_lanes: 0, // stamped below once the cluster is complete
            start_min: item.start_min,
            end_min: item.end_min,
        });
    }

    let total_lanes = lane_ends.len();
    for item in &mut placed {
        item.total_lanes = total_lanes;
    }
    placed
}
