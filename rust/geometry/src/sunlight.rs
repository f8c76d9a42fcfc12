// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sunlight through windows.
//!
//! For a sun azimuth, every window whose wall faces the sun throws a
//! quadrilateral light wedge into the plan. There is no occlusion: wedges
//! pass through other rooms and walls.

use nalgebra::{Point2, Rotation2, Vector2 as NVector2};
use planlite_core::units::{feet_to_px, LIGHT_RAY_LENGTH_PX};
use planlite_core::{Feature, FeatureType, Room, Rotation, Vector2, Wall};
use serde::Serialize;

/// Walls facing the sun closer to edge-on than this get no wedge.
const FACING_EPSILON: f64 = 1e-9;

/// A light wedge cast through one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightWedge {
    pub room_id: String,
    pub feature_id: String,
    /// Corners in room-local pixels: window start, window end, then the two
    /// projected points in matching order.
    pub local: [Vector2; 4],
    /// The same corners in floor pixels, after the room's rotation about its
    /// centre and its translation.
    pub polygon: [Vector2; 4],
}

/// Unit vector of light travel for a compass azimuth in degrees, in screen
/// space (y down): 0° travels up the screen, 90° travels right.
pub fn sun_vector(azimuth_deg: f64) -> NVector2<f64> {
    let az = azimuth_deg.to_radians();
    NVector2::new(az.sin(), -az.cos())
}

/// Outward normal of an unrotated wall.
pub fn outward_normal(wall: Wall) -> NVector2<f64> {
    match wall {
        Wall::Top => NVector2::new(0.0, -1.0),
        Wall::Bottom => NVector2::new(0.0, 1.0),
        Wall::Left => NVector2::new(-1.0, 0.0),
        Wall::Right => NVector2::new(1.0, 0.0),
    }
}

/// Outward normal of `wall` after turning the room by `rotation`.
pub fn rotated_normal(wall: Wall, rotation: Rotation) -> NVector2<f64> {
    Rotation2::new(rotation.radians()) * outward_normal(wall)
}

/// Window endpoints on the wall, in room-local pixels.
fn window_endpoints(room: &Room, feature: &Feature) -> (Point2<f64>, Point2<f64>) {
    let (s, e) = feature.extent_along(room.wall_length_ft(feature.wall));
    let (s, e) = (feet_to_px(s), feet_to_px(e));
    let (w, l) = (room.width_px(), room.length_px());
    match feature.wall {
        Wall::Top => (Point2::new(s, 0.0), Point2::new(e, 0.0)),
        Wall::Bottom => (Point2::new(s, l), Point2::new(e, l)),
        Wall::Left => (Point2::new(0.0, s), Point2::new(0.0, e)),
        Wall::Right => (Point2::new(w, s), Point2::new(w, e)),
    }
}

/// Maps a room-local point into floor pixels.
fn to_floor(room: &Room, local: Point2<f64>) -> Point2<f64> {
    let center = Point2::new(room.width_px() / 2.0, room.length_px() / 2.0);
    let rotated = center + Rotation2::new(room.rotation.radians()) * (local - center);
    Point2::new(rotated.x + room.position.x, rotated.y + room.position.y)
}

/// The wedge for one window, or `None` if its wall faces away from the sun.
pub fn window_wedge(room: &Room, feature: &Feature, sun: &NVector2<f64>) -> Option<LightWedge> {
    let facing = sun.dot(&rotated_normal(feature.wall, room.rotation));
    if facing <= FACING_EPSILON {
        return None;
    }

    let (p1, p2) = window_endpoints(room, feature);
    let throw = *sun * LIGHT_RAY_LENGTH_PX;
    let local = [p1, p2, p2 + throw, p1 + throw];
    let polygon = local.map(|p| Vector2::from_point(&to_floor(room, p)));

    Some(LightWedge {
        room_id: room.id.clone(),
        feature_id: feature.id.clone(),
        local: local.map(|p| Vector2::from_point(&p)),
        polygon,
    })
}

/// Casts light through every window of `rooms` for a sun at `azimuth_deg`.
pub fn cast_sunlight<'a, I>(rooms: I, azimuth_deg: f64) -> Vec<LightWedge>
where
    I: IntoIterator<Item = &'a Room>,
{
    let sun = sun_vector(azimuth_deg);
    let wedges: Vec<LightWedge> = rooms
        .into_iter()
        .flat_map(|room| {
            room.features
                .iter()
                .filter(|f| f.feature_type == FeatureType::Window)
                .filter_map(move |f| window_wedge(room, f, &sun))
        })
        .collect();
    tracing::debug!(azimuth = azimuth_deg, wedges = wedges.len(), "cast sunlight");
    wedges
}
