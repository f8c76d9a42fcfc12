// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use planlite_core::ingest::{parse_costs, parse_furniture, parse_layout};
use planlite_core::{FeatureType, ProjectData, RoomType, Rotation, Wall};

const PROJECT: &str = r##"{
  "property": { "name": "Lake Cabin", "address": "12 Shore Rd" },
  "rooms": [
    {
      "id": "room-1",
      "name": "Living Room",
      "type": "Living Room",
      "dimensions": { "width": 16, "length": 14 },
      "position": { "x": 0, "y": 0 },
      "rotation": 0,
      "features": [
        { "id": "feat-1", "type": "window", "wall": "top", "offset": 50, "size": 4 },
        { "id": "feat-2", "type": "opening", "wall": "right", "offset": 50, "size": 12 }
      ],
      "furniture": [
        { "id": "sofa-1", "name": "three_seat_sofa", "position": { "x": 2, "y": 1 },
          "dimensions": { "width": 7, "length": 3 }, "rotation": 0, "color": "#A0522D" }
      ],
      "pets": [],
      "floor": 1,
      "color": "#fef08a",
      "connections": [{ "roomId": "room-2", "wall": "right" }],
      "description": "A bright corner room."
    },
    {
      "id": "room-2",
      "name": "Kitchen",
      "type": "Kitchen",
      "dimensions": { "width": 12, "length": 14 },
      "position": { "x": 240, "y": 0 },
      "rotation": 90,
      "features": [],
      "furniture": [],
      "pets": [],
      "floor": 1,
      "costEstimates": { "flooring": 8.5, "paint": 2.25, "labor": 40 }
    },
    {
      "id": "room-3",
      "name": "Loft",
      "type": "Bedroom",
      "dimensions": { "width": 10, "length": 10 },
      "position": { "x": 0, "y": 0 },
      "features": [],
      "furniture": [],
      "floor": 2
    }
  ],
  "diagram": "stale"
}"##;

#[test]
fn loads_a_saved_project() {
    let project = ProjectData::from_json(PROJECT).unwrap();
    let plan = project.plan();

    assert_eq!(plan.len(), 3);
    assert_eq!(plan.floors(), vec![1, 2]);

    let living = plan.get("room-1").unwrap();
    assert_eq!(living.room_type, RoomType::LivingRoom);
    assert!(living.has_full_opening(Wall::Right));
    assert_eq!(living.connections[0].room_id, "room-2");
    assert_eq!(living.features_on(Wall::Top).count(), 1);

    let kitchen = plan.get("room-2").unwrap();
    assert_eq!(kitchen.rotation, Rotation::Deg90);
    assert_eq!(kitchen.cost_estimates.map(|c| c.labor), Some(40.0));

    assert!(plan.get("room-3").unwrap().pets.is_empty());
}

#[test]
fn replacing_the_plan_drops_the_diagram_cache() {
    let project = ProjectData::from_json(PROJECT).unwrap();
    assert_eq!(project.diagram.as_deref(), Some("stale"));

    let plan = project.plan().with_room_removed("room-3").unwrap();
    let updated = project.with_plan(plan);
    assert_eq!(updated.rooms.len(), 2);
    assert!(updated.diagram.is_none());
    assert_eq!(updated.property, project.property);
}

#[test]
fn saved_files_reload_identically() {
    let dir = tempfile::tempdir().unwrap();
    let project = ProjectData::from_json(PROJECT).unwrap();
    let path = dir.path().join(project.save_file_name());
    project.save(&path).unwrap();

    assert!(path.ends_with("Lake_Cabin.json"));
    assert_eq!(ProjectData::load(&path).unwrap(), project);
}

#[test]
fn assistant_results_merge_into_rooms() {
    let project = ProjectData::from_json(PROJECT).unwrap();
    let plan = project.plan();
    let kitchen = plan.get("room-2").unwrap();

    let furniture = parse_furniture(
        r#"```json
        [{ "id": "island-1", "name": "kitchen_island", "position": { "x": 4, "y": 5 },
           "dimensions": { "width": 4, "length": 2.5 }, "rotation": 90 }]
        ```"#,
    )
    .unwrap();
    let costs = parse_costs(r#"{"flooring": 9, "paint": 3, "labor": 50}"#).unwrap();

    let updated = kitchen.with_furniture(furniture).with_cost_estimates(costs);
    let next = plan.with_room_replaced(updated).unwrap();
    let kitchen = next.get("room-2").unwrap();
    assert_eq!(kitchen.furniture[0].rotation, Rotation::Deg90);
    assert_eq!(kitchen.cost_estimates.map(|c| c.paint), Some(3.0));
}

#[test]
fn generated_layouts_become_rooms() {
    let rooms = parse_layout(
        r#"[
          { "name": "Hall", "type": "Hallway", "floor": 0,
            "dimensions": { "width": 4, "length": 12 }, "position": { "x": 2, "y": 3 },
            "features": [{ "id": "d1", "type": "door", "wall": "left", "offset": 50, "size": 3 }] }
        ]"#,
    )
    .unwrap();
    assert_eq!(rooms[0].floor, 1);
    assert_eq!(rooms[0].position.x, 30.0);
    assert_eq!(rooms[0].position.y, 45.0);
    assert_eq!(rooms[0].features[0].feature_type, FeatureType::Door);
}
