// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening synthesis.
//!
//! An adjacency becomes two `opening` features, one on each room, that
//! describe the same physical gap. Each room's offset is computed from that
//! room's own origin, so the two percentages generally differ.

use nalgebra::{distance, Point2};
use planlite_core::units::{feet_to_px, px_to_feet, ADJACENCY_TOLERANCE_PX};
use planlite_core::{ids, Feature, FeatureType, FloorPlan, Room, Vector2, Wall};

use crate::adjacency::{find_adjacent, Adjacency};
use crate::error::{Error, Result};

/// The updated target and neighbor rooms, each carrying its new opening.
#[derive(Debug, Clone)]
pub struct OpeningPair {
    pub target: Room,
    pub neighbor: Room,
}

/// Position of a room's origin along the axis a wall runs on.
fn axis_origin(room: &Room, wall: Wall) -> f64 {
    if wall.is_horizontal() {
        room.position.x
    } else {
        room.position.y
    }
}

fn opening(id: String, wall: Wall, start_ft: f64, size: f64, wall_length_ft: f64) -> Feature {
    Feature {
        id,
        feature_type: FeatureType::Opening,
        wall,
        offset: (start_ft + size / 2.0) / wall_length_ft * 100.0,
        size,
    }
}

/// Builds the opening pair for `adjacency`, with freshly generated ids.
pub fn synthesize_opening(target: &Room, adjacency: &Adjacency<'_>) -> OpeningPair {
    synthesize_opening_with_ids(target, adjacency, ids::next_id("feat"), ids::next_id("feat"))
}

/// Builds the opening pair for `adjacency` using the given feature ids.
pub fn synthesize_opening_with_ids(
    target: &Room,
    adjacency: &Adjacency<'_>,
    target_feature_id: String,
    neighbor_feature_id: String,
) -> OpeningPair {
    let neighbor = adjacency.neighbor;
    let size = adjacency.overlap.length();

    let target_feature = opening(
        target_feature_id,
        adjacency.wall_on_target,
        adjacency.overlap.start,
        size,
        target.wall_length_ft(adjacency.wall_on_target),
    );

    // Re-express the segment start from the neighbor's origin.
    let global_start =
        axis_origin(target, adjacency.wall_on_target) + feet_to_px(adjacency.overlap.start);
    let neighbor_start = px_to_feet(global_start - axis_origin(neighbor, adjacency.wall_on_neighbor));
    let neighbor_feature = opening(
        neighbor_feature_id,
        adjacency.wall_on_neighbor,
        neighbor_start,
        size,
        neighbor.wall_length_ft(adjacency.wall_on_neighbor),
    );

    let pair = OpeningPair {
        target: target.with_feature(target_feature),
        neighbor: neighbor.with_feature(neighbor_feature),
    };

    if let (Some(a), Some(b)) = (pair.target.features.last(), pair.neighbor.features.last()) {
        let coincide = segments_coincide(
            feature_segment(&pair.target, a),
            feature_segment(&pair.neighbor, b),
            ADJACENCY_TOLERANCE_PX,
        );
        if !coincide {
            tracing::warn!(
                target = %target.id,
                neighbor = %neighbor.id,
                "synthesized opening halves do not line up"
            );
        }
        debug_assert!(coincide);
    }

    tracing::debug!(
        target = %target.id,
        neighbor = %neighbor.id,
        wall = %adjacency.wall_on_target,
        size,
        "synthesized opening"
    );
    pair
}

/// Endpoints of a feature's span in floor pixels, ignoring room rotation.
pub fn feature_segment(room: &Room, feature: &Feature) -> (Vector2, Vector2) {
    let (s, e) = feature.extent_along(room.wall_length_ft(feature.wall));
    let b = room.bounds();
    let (s, e) = (feet_to_px(s), feet_to_px(e));
    match feature.wall {
        Wall::Top => (Vector2::new(b.min_x + s, b.min_y), Vector2::new(b.min_x + e, b.min_y)),
        Wall::Bottom => (Vector2::new(b.min_x + s, b.max_y), Vector2::new(b.min_x + e, b.max_y)),
        Wall::Left => (Vector2::new(b.min_x, b.min_y + s), Vector2::new(b.min_x, b.min_y + e)),
        Wall::Right => (Vector2::new(b.max_x, b.min_y + s), Vector2::new(b.max_x, b.min_y + e)),
    }
}

/// True when both segments have matching endpoints within `tolerance` pixels.
pub fn segments_coincide(a: (Vector2, Vector2), b: (Vector2, Vector2), tolerance: f64) -> bool {
    let close = |p: Vector2, q: Vector2| -> bool {
        let (p, q): (Point2<f64>, Point2<f64>) = (p.to_point(), q.to_point());
        distance(&p, &q) <= tolerance
    };
    (close(a.0, b.0) && close(a.1, b.1)) || (close(a.0, b.1) && close(a.1, b.0))
}

/// Opens the wall between two rooms of `plan` and returns the new plan.
///
/// Both rooms are written in one replacement. When the rooms share more
/// than one wall segment, the first one found is used.
pub fn create_opening(plan: &FloorPlan, room_id: &str, neighbor_id: &str) -> Result<FloorPlan> {
    let target = plan
        .get(room_id)
        .ok_or_else(|| Error::UnknownRoom(room_id.to_string()))?;
    if !plan.contains(neighbor_id) {
        return Err(Error::UnknownRoom(neighbor_id.to_string()));
    }

    let adjacencies = find_adjacent(target, plan.rooms());
    let adjacency = adjacencies
        .iter()
        .find(|adj| adj.neighbor.id == neighbor_id)
        .ok_or_else(|| Error::NotAdjacent(room_id.to_string(), neighbor_id.to_string()))?;

    let pair = synthesize_opening(target, adjacency);
    Ok(plan.with_rooms_replaced([pair.target, pair.neighbor])?)
}
