// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit constants, feet/pixel conversion and grid snapping.
//!
//! Room dimensions are persisted in feet; room positions are persisted in
//! pixels. The two are tied together by [`PIXELS_PER_FOOT`].

/// Number of pixels that represent one foot on the blueprint.
pub const PIXELS_PER_FOOT: f64 = 15.0;

/// Grid snapping increment, in feet.
pub const GRID_SNAP_FEET: f64 = 0.5;

/// Smallest width or length a room may have, in feet.
pub const MIN_ROOM_SIZE_FEET: f64 = 2.0;

/// Two walls closer than this (in pixels) are considered touching.
pub const ADJACENCY_TOLERANCE_PX: f64 = 5.0;

/// How far a light wedge is thrown from its window, in pixels.
pub const LIGHT_RAY_LENGTH_PX: f64 = 500.0;

/// An opening wider than this share of its wall replaces the wall panel.
pub const FULL_OPENING_RATIO: f64 = 0.8;

/// Converts feet to pixels.
#[inline]
pub fn feet_to_px(feet: f64) -> f64 {
    feet * PIXELS_PER_FOOT
}

/// Converts pixels to feet.
#[inline]
pub fn px_to_feet(px: f64) -> f64 {
    px / PIXELS_PER_FOOT
}

/// Size of one grid cell in pixels.
#[inline]
pub fn grid_step_px() -> f64 {
    PIXELS_PER_FOOT * GRID_SNAP_FEET
}

/// Rounds a pixel value to the nearest grid line.
///
/// Idempotent: snapping an already snapped value returns it unchanged.
#[inline]
pub fn snap_px(px: f64) -> f64 {
    let step = grid_step_px();
    (px / step).round() * step
}

/// Rounds a length typed in feet to the nearest grid increment.
#[inline]
pub fn snap_feet(feet: f64) -> f64 {
    (feet / GRID_SNAP_FEET).round() * GRID_SNAP_FEET
}
