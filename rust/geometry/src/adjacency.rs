// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-sharing detection between rooms.
//!
//! Two rooms are adjacent along a wall pair when the walls lie within
//! [`ADJACENCY_TOLERANCE_PX`] of each other and their perpendicular extents
//! overlap by a positive length. Room rotation is not taken into account;
//! walls are compared in their unrotated bounding boxes.

use planlite_core::units::{px_to_feet, ADJACENCY_TOLERANCE_PX};
use planlite_core::{Bounds, FloorPlan, Room, Wall};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// A span along a wall, in feet from the wall's start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// One shared wall between the target room and `neighbor`.
#[derive(Debug, Clone)]
pub struct Adjacency<'a> {
    pub neighbor: &'a Room,
    pub wall_on_target: Wall,
    pub wall_on_neighbor: Wall,
    /// Overlap relative to the target wall's origin.
    pub overlap: Segment,
}

/// Most rooms touch a handful of neighbors.
pub type AdjacencyList<'a> = SmallVec<[Adjacency<'a>; 4]>;

/// Fixed coordinate of a wall: x for left/right walls, y for top/bottom.
fn wall_coordinate(bounds: &Bounds, wall: Wall) -> f64 {
    match wall {
        Wall::Left => bounds.min_x,
        Wall::Right => bounds.max_x,
        Wall::Top => bounds.min_y,
        Wall::Bottom => bounds.max_y,
    }
}

/// Span of a wall along its own axis.
fn wall_span(bounds: &Bounds, wall: Wall) -> (f64, f64) {
    if wall.is_horizontal() {
        (bounds.min_x, bounds.max_x)
    } else {
        (bounds.min_y, bounds.max_y)
    }
}

/// Finds every wall `target` shares with another room on its floor.
///
/// `rooms` may include `target` itself; it is skipped by id. All qualifying
/// wall pairs are returned in room order, without deduplication.
pub fn find_adjacent<'a>(target: &Room, rooms: &'a [Room]) -> AdjacencyList<'a> {
    find_adjacent_within(target, rooms.iter(), ADJACENCY_TOLERANCE_PX)
}

/// Like [`find_adjacent`], with an explicit wall distance tolerance in pixels.
pub fn find_adjacent_within<'a, I>(target: &Room, rooms: I, tolerance_px: f64) -> AdjacencyList<'a>
where
    I: IntoIterator<Item = &'a Room>,
{
    let tb = target.bounds();
    let mut found = AdjacencyList::new();

    for neighbor in rooms {
        if neighbor.id == target.id || neighbor.floor != target.floor {
            continue;
        }
        let nb = neighbor.bounds();

        for wall_on_target in Wall::ALL {
            let wall_on_neighbor = wall_on_target.opposite();
            let gap = wall_coordinate(&tb, wall_on_target) - wall_coordinate(&nb, wall_on_neighbor);
            if gap.abs() >= tolerance_px {
                continue;
            }

            let (t0, t1) = wall_span(&tb, wall_on_target);
            let (n0, n1) = wall_span(&nb, wall_on_neighbor);
            let start = t0.max(n0);
            let end = t1.min(n1);
            if end <= start {
                continue;
            }

            found.push(Adjacency {
                neighbor,
                wall_on_target,
                wall_on_neighbor,
                overlap: Segment {
                    start: px_to_feet(start - t0),
                    end: px_to_feet(end - t0),
                },
            });
        }
    }

    tracing::debug!(room_id = %target.id, count = found.len(), "adjacency scan");
    found
}

/// Adjacency records for the room `room_id` in `plan`.
pub fn find_adjacent_in_plan<'a>(plan: &'a FloorPlan, room_id: &str) -> Result<AdjacencyList<'a>> {
    let target = plan
        .get(room_id)
        .ok_or_else(|| Error::UnknownRoom(room_id.to_string()))?;
    Ok(find_adjacent(target, plan.rooms()))
}
