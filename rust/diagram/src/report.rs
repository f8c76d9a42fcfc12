// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain-text project report: header, full diagram, then one block per
//! room ordered by floor and name.

use std::cmp::Ordering;

use planlite_core::{ProjectData, Room};

use crate::ascii::{render_project, DiagramConfig};
use crate::error::Result;

const RULE: &str = "------------------------------------------------------------";

fn by_floor_then_name(a: &&Room, b: &&Room) -> Ordering {
    a.floor
        .max(1)
        .cmp(&b.floor.max(1))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

fn room_section(out: &mut String, room: &Room) {
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("ROOM: {}\n", room.name));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("- Type: {}\n", room.room_type));
    out.push_str(&format!("- Floor: {}\n", room.floor.max(1)));
    out.push_str(&format!(
        "- Dimensions: {} ft (Width) x {} ft (Length)\n",
        room.dimensions.width, room.dimensions.length
    ));
    out.push_str(&format!("- Area: {:.2} sq. ft.\n", room.area_sq_ft()));

    if let Some(description) = room.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!(
            "\n- AI Description:\n  {}\n",
            description.replace('\n', "\n  ")
        ));
    }

    if !room.features.is_empty() {
        out.push_str("\n- Features:\n");
        for f in &room.features {
            out.push_str(&format!(
                "  - {}: on {} wall, {} ft wide, offset at {:.0}%.\n",
                f.feature_type.label(),
                f.wall,
                f.size,
                f.offset
            ));
        }
    }

    if !room.furniture.is_empty() {
        out.push_str("\n- Furniture Layout:\n");
        for item in &room.furniture {
            out.push_str(&format!(
                "  - {} ({}' x {}')\n",
                item.name.replace('_', " "),
                item.dimensions.width,
                item.dimensions.length
            ));
        }
    }

    if !room.pets.is_empty() {
        out.push_str("\n- Pets in this room:\n");
        for pet in &room.pets {
            out.push_str(&format!("  - {} (the {})\n", pet.name, pet.pet_type.as_str()));
        }
    }

    out.push('\n');
}

/// Renders the full text report for `project`. Fails only when the layout
/// diagram is too large to draw.
pub fn render_report(project: &ProjectData) -> Result<String> {
    let mut out = String::from("Project Report\n====================\n\n");
    out.push_str(&format!("Project Name: {}\n", project.property.name));
    if !project.property.address.is_empty() {
        out.push_str(&format!("Address: {}\n", project.property.address));
    }
    out.push('\n');

    out.push_str("Full Layout Diagram\n-------------------\n");
    out.push_str(&render_project(&project.rooms, &DiagramConfig::default())?.text);
    out.push_str("\n\n");

    out.push_str("Room Details\n============\n\n");
    let mut rooms: Vec<&Room> = project.rooms.iter().collect();
    rooms.sort_by(by_floor_then_name);
    for room in rooms {
        room_section(&mut out, room);
    }
    Ok(out)
}
