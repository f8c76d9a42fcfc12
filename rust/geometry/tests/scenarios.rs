// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end checks of the editing geometry on small plans.

use approx::assert_relative_eq;
use planlite_core::units::{snap_px, ADJACENCY_TOLERANCE_PX, MIN_ROOM_SIZE_FEET};
use planlite_core::{Dimension, Feature, FeatureType, FloorPlan, Room, RoomType, Rotation, Vector2, Wall};
use planlite_geometry::transform::resize;
use planlite_geometry::{
    cast_sunlight, commit, create_opening, feature_segment, find_adjacent, segments_coincide,
    synthesize_opening, Handle, Transform, TransformOptions,
};

fn room(id: &str, x: f64, y: f64, w: f64, l: f64) -> Room {
    Room::new(id, id, RoomType::Custom, Dimension::new(w, l), Vector2::new(x, y), 1)
}

#[test]
fn touching_rooms_share_the_full_wall() {
    let a = room("A", 0.0, 0.0, 10.0, 10.0);
    let b = room("B", 150.0, 0.0, 10.0, 10.0);
    let rooms = vec![a.clone(), b];

    let found = find_adjacent(&a, &rooms);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].neighbor.id, "B");
    assert_eq!(found[0].wall_on_target, Wall::Right);
    assert_eq!(found[0].wall_on_neighbor, Wall::Left);
    assert_relative_eq!(found[0].overlap.start, 0.0);
    assert_relative_eq!(found[0].overlap.end, 10.0);
}

#[test]
fn left_handle_shrinks_and_shifts() {
    let a = room("A", 0.0, 0.0, 10.0, 10.0);
    let r = resize(&a, Handle::Left, Vector2::new(30.0, 0.0));
    assert_relative_eq!(r.dimensions.width, 8.0);
    assert_relative_eq!(r.position.x, 30.0);
    assert_relative_eq!(r.dimensions.length, 10.0);
}

#[test]
fn east_sun_lights_only_east_windows() {
    let base = room("A", 0.0, 0.0, 10.0, 10.0);
    let east = base.with_feature(Feature::new("w", FeatureType::Window, Wall::Right));
    let west = base.with_feature(Feature::new("w", FeatureType::Window, Wall::Left));

    assert_eq!(cast_sunlight([&east], 90.0).len(), 1);
    assert!(cast_sunlight([&west], 90.0).is_empty());
}

#[test]
fn adjacency_is_symmetric() {
    let layouts = [
        (room("A", 0.0, 0.0, 10.0, 10.0), room("B", 150.0, 45.0, 6.0, 14.0)),
        (room("A", 30.0, 0.0, 8.0, 6.0), room("B", 0.0, 92.0, 12.0, 5.0)),
        (room("A", 0.0, 0.0, 4.0, 12.0), room("B", 62.0, -30.0, 3.0, 3.0)),
    ];
    for (a, b) in layouts {
        let rooms = vec![a.clone(), b.clone()];
        let forward = find_adjacent(&a, &rooms);
        let backward = find_adjacent(&b, &rooms);
        assert_eq!(forward.len(), 1, "{a:?} / {b:?}");
        assert_eq!(backward.len(), 1);
        assert_eq!(forward[0].wall_on_target, backward[0].wall_on_neighbor);
        assert_eq!(forward[0].wall_on_neighbor, backward[0].wall_on_target);
        assert_relative_eq!(
            forward[0].overlap.length(),
            backward[0].overlap.length(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn opening_halves_coincide_in_floor_space() {
    let pairs = [
        (room("A", 0.0, 0.0, 10.0, 10.0), room("B", 152.0, 60.0, 8.0, 12.0)),
        (room("A", 45.0, 0.0, 6.0, 4.0), room("B", 0.0, 60.0, 20.0, 8.0)),
        (room("A", 90.0, 90.0, 5.0, 5.0), room("B", 0.0, 30.0, 6.0, 5.0)),
    ];
    for (a, b) in pairs {
        let rooms = vec![a.clone(), b];
        let adj = &find_adjacent(&a, &rooms)[0];
        let pair = synthesize_opening(&a, adj);
        let fa = pair.target.features.last().unwrap();
        let fb = pair.neighbor.features.last().unwrap();
        assert_eq!(fa.feature_type, FeatureType::Opening);
        assert_relative_eq!(fa.size, fb.size);
        assert!(segments_coincide(
            feature_segment(&pair.target, fa),
            feature_segment(&pair.neighbor, fb),
            ADJACENCY_TOLERANCE_PX,
        ));
    }
}

#[test]
fn opening_is_applied_to_both_rooms_at_once() {
    let plan = FloorPlan::from_rooms(vec![
        room("A", 0.0, 0.0, 10.0, 10.0),
        room("B", 150.0, 0.0, 10.0, 10.0),
        room("C", 0.0, 150.0, 10.0, 10.0),
    ]);
    let next = create_opening(&plan, "A", "B").unwrap();
    let a = next.get("A").unwrap();
    let b = next.get("B").unwrap();
    assert_eq!(a.features[0].wall, Wall::Right);
    assert_eq!(b.features[0].wall, Wall::Left);
    assert!(a.has_full_opening(Wall::Right));
    assert!(next.get("C").unwrap().features.is_empty());
}

#[test]
fn resize_never_breaks_the_floor_or_moves_the_anchor() {
    let start = room("A", 30.0, 45.0, 6.0, 5.0);
    let sb = start.bounds();
    let deltas = [-400.0, -37.0, -7.5, 0.0, 4.0, 22.5, 90.0, 400.0];

    for handle in Handle::ALL {
        for &dx in &deltas {
            for &dy in &deltas {
                let delta = Vector2::new(dx, dy);
                for r in [
                    resize(&start, handle, delta),
                    commit(&start, &Transform::Resize { handle, delta }, &TransformOptions::default())
                        .into_room(),
                ] {
                    assert!(r.dimensions.width >= MIN_ROOM_SIZE_FEET - 1e-9);
                    assert!(r.dimensions.length >= MIN_ROOM_SIZE_FEET - 1e-9);

                    let b = r.bounds();
                    let name = handle.as_str();
                    if name.contains("left") {
                        assert_relative_eq!(b.max_x, sb.max_x, epsilon = 1e-9);
                    } else {
                        assert_relative_eq!(b.min_x, sb.min_x, epsilon = 1e-9);
                    }
                    if name.contains("top") {
                        assert_relative_eq!(b.max_y, sb.max_y, epsilon = 1e-9);
                    } else {
                        assert_relative_eq!(b.min_y, sb.min_y, epsilon = 1e-9);
                    }
                }
            }
        }
    }
}

#[test]
fn dropped_positions_are_snapped_whole_pixels() {
    let start = room("A", 0.0, 0.0, 4.0, 4.0);
    for (dx, dy) in [(3.0, 3.0), (11.2, -6.0), (97.0, 1000.4)] {
        let r = commit(
            &start,
            &Transform::Move { delta: Vector2::new(dx, dy) },
            &TransformOptions::default(),
        )
        .into_room();
        assert_relative_eq!(r.position.x, snap_px(dx).round());
        assert_relative_eq!(r.position.y, snap_px(dy).round());
    }
}

#[test]
fn windows_facing_away_never_cast_light() {
    for rotation in [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270] {
        for wall in Wall::ALL {
            let mut r = room("A", 0.0, 0.0, 10.0, 10.0)
                .with_feature(Feature::new("w", FeatureType::Window, wall));
            r.rotation = rotation;
            for az in (0..360).step_by(15) {
                let az = f64::from(az);
                let facing = planlite_geometry::sun_vector(az)
                    .dot(&planlite_geometry::sunlight::rotated_normal(wall, rotation));
                let wedges = cast_sunlight([&r], az);
                if facing < 0.0 {
                    assert!(wedges.is_empty(), "{wall} {rotation:?} at {az}");
                } else if facing > 1e-6 {
                    assert_eq!(wedges.len(), 1);
                }
            }
        }
    }
}
