// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Move and resize transforms.
//!
//! Every transform has two flavours. [`preview`] produces a [`Draft`] for
//! live feedback while the pointer is down; [`commit`] produces the
//! grid-snapped [`Committed`] room once the gesture ends. Only a
//! `Committed` value can be written back into a [`FloorPlan`], which keeps
//! intermediate drag states out of undo history.

use std::fmt;
use std::str::FromStr;

use planlite_core::units::{feet_to_px, px_to_feet, snap_px, MIN_ROOM_SIZE_FEET};
use planlite_core::{Dimension, FloorPlan, Room, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the eight resize grips around a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Left,
        Handle::Right,
        Handle::BottomLeft,
        Handle::Bottom,
        Handle::BottomRight,
    ];

    pub fn horizontal(self) -> Option<HorizontalEdge> {
        match self {
            Handle::TopLeft | Handle::Left | Handle::BottomLeft => Some(HorizontalEdge::Left),
            Handle::TopRight | Handle::Right | Handle::BottomRight => Some(HorizontalEdge::Right),
            Handle::Top | Handle::Bottom => None,
        }
    }

    pub fn vertical(self) -> Option<VerticalEdge> {
        match self {
            Handle::TopLeft | Handle::Top | Handle::TopRight => Some(VerticalEdge::Top),
            Handle::BottomLeft | Handle::Bottom | Handle::BottomRight => Some(VerticalEdge::Bottom),
            Handle::Left | Handle::Right => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::TopLeft => "top-left",
            Handle::Top => "top",
            Handle::TopRight => "top-right",
            Handle::Left => "left",
            Handle::Right => "right",
            Handle::BottomLeft => "bottom-left",
            Handle::Bottom => "bottom",
            Handle::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Handle::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| Error::InvalidGesture(format!("unknown resize handle `{s}`")))
    }
}

/// Editor settings that affect transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Snap committed positions and sizes to the grid.
    pub snap_to_grid: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self { snap_to_grid: true }
    }
}

/// Arrow-key nudge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A pointer gesture applied to a room, as a pixel delta from where it began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Move { delta: Vector2 },
    Resize { handle: Handle, delta: Vector2 },
}

/// Live, unsnapped result of a gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft(Room);

impl Draft {
    pub fn room(&self) -> &Room {
        &self.0
    }

    pub fn into_room(self) -> Room {
        self.0
    }
}

/// Final result of a gesture, eligible for history.
#[derive(Debug, Clone, PartialEq)]
pub struct Committed(Room);

impl Committed {
    pub fn room(&self) -> &Room {
        &self.0
    }

    pub fn into_room(self) -> Room {
        self.0
    }

    /// Writes the committed room into `plan`, replacing the room with its id.
    pub fn apply_to(&self, plan: &FloorPlan) -> Result<FloorPlan> {
        Ok(plan.with_room_replaced(self.0.clone())?)
    }
}

/// Shifts a room by a pixel delta without snapping.
pub fn translate(room: &Room, delta: Vector2) -> Room {
    room.with_position(Vector2::new(
        room.position.x + delta.x,
        room.position.y + delta.y,
    ))
}

/// Drops a dragged room: each axis is snapped independently when snapping
/// is on, then rounded to a whole pixel.
pub fn drop_at(room: &Room, delta: Vector2, options: &TransformOptions) -> Room {
    let place = |v: f64| {
        let v = if options.snap_to_grid { snap_px(v) } else { v };
        v.round()
    };
    room.with_position(Vector2::new(
        place(room.position.x + delta.x),
        place(room.position.y + delta.y),
    ))
}

/// Moves a room by `amount_ft` feet in one direction.
pub fn nudge(room: &Room, direction: Direction, amount_ft: f64) -> Room {
    let step = feet_to_px(amount_ft);
    let delta = match direction {
        Direction::Up => Vector2::new(0.0, -step),
        Direction::Down => Vector2::new(0.0, step),
        Direction::Left => Vector2::new(-step, 0.0),
        Direction::Right => Vector2::new(step, 0.0),
    };
    translate(room, delta)
}

/// Applies a raw resize delta for `handle`.
///
/// Left and top grips move the position along with the edge; right and
/// bottom grips only change the size. A side that would shrink below
/// [`MIN_ROOM_SIZE_FEET`] is clamped there with the opposite edge held fixed.
pub fn resize(room: &Room, handle: Handle, delta: Vector2) -> Room {
    let origin = room.position;
    let start = room.dimensions;
    let mut position = origin;
    let mut dims = start;

    match handle.horizontal() {
        Some(HorizontalEdge::Left) => {
            position.x += delta.x;
            dims.width -= px_to_feet(delta.x);
        }
        Some(HorizontalEdge::Right) => dims.width += px_to_feet(delta.x),
        None => {}
    }
    match handle.vertical() {
        Some(VerticalEdge::Top) => {
            position.y += delta.y;
            dims.length -= px_to_feet(delta.y);
        }
        Some(VerticalEdge::Bottom) => dims.length += px_to_feet(delta.y),
        None => {}
    }

    if dims.width < MIN_ROOM_SIZE_FEET {
        dims.width = MIN_ROOM_SIZE_FEET;
        if handle.horizontal() == Some(HorizontalEdge::Left) {
            position.x = origin.x + feet_to_px(start.width - MIN_ROOM_SIZE_FEET);
        }
    }
    if dims.length < MIN_ROOM_SIZE_FEET {
        dims.length = MIN_ROOM_SIZE_FEET;
        if handle.vertical() == Some(VerticalEdge::Top) {
            position.y = origin.y + feet_to_px(start.length - MIN_ROOM_SIZE_FEET);
        }
    }

    Room {
        position,
        dimensions: dims,
        ..room.clone()
    }
}

/// Snaps both edges of one axis, keeping the span at or above the minimum.
/// `moving_start` says the low edge is the one being dragged.
fn snap_span(lo: f64, hi: f64, moving_start: bool) -> (f64, f64) {
    let min_px = feet_to_px(MIN_ROOM_SIZE_FEET);
    let (mut lo, mut hi) = (snap_px(lo), snap_px(hi));
    if hi - lo < min_px {
        if moving_start {
            lo = hi - min_px;
        } else {
            hi = lo + min_px;
        }
    }
    (lo, hi)
}

/// Grid-snaps a resized room's position and pixel size, converting the size
/// back to feet.
pub fn snap_resized(room: &Room, handle: Handle) -> Room {
    let b = room.bounds();
    let (min_x, max_x) = snap_span(
        b.min_x,
        b.max_x,
        handle.horizontal() == Some(HorizontalEdge::Left),
    );
    let (min_y, max_y) = snap_span(
        b.min_y,
        b.max_y,
        handle.vertical() == Some(VerticalEdge::Top),
    );
    Room {
        position: Vector2::new(min_x, min_y),
        dimensions: Dimension::new(px_to_feet(max_x - min_x), px_to_feet(max_y - min_y)),
        ..room.clone()
    }
}

/// Live result of `transform` on `room`, for display only.
pub fn preview(room: &Room, transform: &Transform) -> Draft {
    match *transform {
        Transform::Move { delta } => Draft(translate(room, delta)),
        Transform::Resize { handle, delta } => Draft(resize(room, handle, delta)),
    }
}

/// Final result of `transform` on `room` at the end of a gesture.
pub fn commit(room: &Room, transform: &Transform, options: &TransformOptions) -> Committed {
    let committed = match *transform {
        Transform::Move { delta } => drop_at(room, delta, options),
        Transform::Resize { handle, delta } => {
            let resized = resize(room, handle, delta);
            if options.snap_to_grid {
                snap_resized(&resized, handle)
            } else {
                resized
            }
        }
    };
    tracing::debug!(
        room_id = %committed.id,
        x = committed.position.x,
        y = committed.position.y,
        width = committed.dimensions.width,
        length = committed.dimensions.length,
        "committed transform"
    );
    Committed(committed)
}
