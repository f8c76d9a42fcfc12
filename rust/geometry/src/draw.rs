// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Draw-a-room gesture: a rectangle dragged out on the canvas becomes a
//! hallway.

use planlite_core::units::{feet_to_px, grid_step_px, px_to_feet, snap_px, MIN_ROOM_SIZE_FEET};
use planlite_core::{Dimension, Room, RoomType, Vector2};

use crate::transform::TransformOptions;

fn rect_room(id: &str, floor: u32, origin: Vector2, width_px: f64, length_px: f64) -> Room {
    Room::new(
        id,
        RoomType::Hallway.as_str(),
        RoomType::Hallway,
        Dimension::new(px_to_feet(width_px), px_to_feet(length_px)),
        origin,
        floor,
    )
}

/// The rectangle between two pointer positions, as an unsnapped hallway.
pub fn preview_drawn_room(id: &str, floor: u32, start: Vector2, current: Vector2) -> Room {
    rect_room(
        id,
        floor,
        Vector2::new(start.x.min(current.x), start.y.min(current.y)),
        (current.x - start.x).abs(),
        (current.y - start.y).abs(),
    )
}

/// Finishes the gesture.
///
/// Position and pixel extents are snapped (when enabled). Returns `None`
/// if either extent is no larger than half a grid cell, which treats a
/// click or a thin sliver as no room at all. Anything larger is grown to
/// at least [`MIN_ROOM_SIZE_FEET`] per side, away from the origin corner.
pub fn commit_drawn_room(
    id: &str,
    floor: u32,
    start: Vector2,
    end: Vector2,
    options: &TransformOptions,
) -> Option<Room> {
    let snap = |v: f64| if options.snap_to_grid { snap_px(v) } else { v };
    let origin = Vector2::new(snap(start.x.min(end.x)), snap(start.y.min(end.y)));
    let width = snap((end.x - start.x).abs());
    let length = snap((end.y - start.y).abs());

    let min_extent = grid_step_px() / 2.0;
    if width <= min_extent || length <= min_extent {
        tracing::debug!(width, length, "drawn rectangle too small, discarded");
        return None;
    }

    let min_px = feet_to_px(MIN_ROOM_SIZE_FEET);
    Some(rect_room(id, floor, origin, width.max(min_px), length.max(min_px)))
}
