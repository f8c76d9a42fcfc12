// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subcommand implementations. Each returns the text to print on stdout.

use std::path::Path;

use anyhow::{Context, Result};
use planlite_core::{ProjectData, Vector2};
use planlite_diagram::{render_project, render_report, DiagramConfig};
use planlite_geometry::{
    cast_sunlight, commit, create_opening, find_adjacent_in_plan, Handle, Transform,
    TransformOptions,
};

fn load(path: &Path) -> Result<ProjectData> {
    ProjectData::load(path).with_context(|| format!("Failed to load project {}", path.display()))
}

/// Saves `project` with a freshly rendered diagram cache.
fn save(project: &ProjectData, path: &Path) -> Result<()> {
    let diagram = render_project(&project.rooms, &DiagramConfig::default())?;
    project
        .with_diagram(diagram.text)
        .save(path)
        .with_context(|| format!("Failed to save project {}", path.display()))
}

pub fn diagram(path: &Path) -> Result<String> {
    let project = load(path)?;
    let diagram = render_project(&project.rooms, &DiagramConfig::default())?;
    if diagram.skipped_glyphs > 0 {
        tracing::warn!(skipped = diagram.skipped_glyphs, "some features could not be drawn");
    }
    Ok(diagram.text)
}

pub fn report(path: &Path, output: Option<&Path>) -> Result<String> {
    let project = load(path)?;
    let report = render_report(&project)?;
    match output {
        Some(out) => {
            std::fs::write(out, &report)
                .with_context(|| format!("Failed to write report {}", out.display()))?;
            Ok(format!("Wrote {}", out.display()))
        }
        None => Ok(report),
    }
}

pub fn adjacency(path: &Path, room_id: &str) -> Result<String> {
    let project = load(path)?;
    let plan = project.plan();
    let found = find_adjacent_in_plan(&plan, room_id)?;
    if found.is_empty() {
        return Ok(format!("{room_id} shares no walls"));
    }
    let lines: Vec<String> = found
        .iter()
        .map(|adj| {
            format!(
                "{} ({}): {} wall -> {} wall, {}-{} ft",
                adj.neighbor.id,
                adj.neighbor.name,
                adj.wall_on_target,
                adj.wall_on_neighbor,
                adj.overlap.start,
                adj.overlap.end
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn open(path: &Path, room_id: &str, neighbor_id: &str, output: Option<&Path>) -> Result<String> {
    let project = load(path)?;
    let next = create_opening(&project.plan(), room_id, neighbor_id)?;
    let out = output.unwrap_or(path);
    save(&project.with_plan(next), out)?;
    Ok(format!("Opened {room_id} to {neighbor_id}, saved {}", out.display()))
}

pub fn sunlight(path: &Path, azimuth: f64, floor: Option<u32>) -> Result<String> {
    let project = load(path)?;
    let rooms = project
        .rooms
        .iter()
        .filter(|r| floor.map_or(true, |f| r.floor == f));
    let wedges = cast_sunlight(rooms, azimuth);
    Ok(serde_json::to_string_pretty(&wedges)?)
}

/// Applies a committed move or resize to one room and saves.
pub fn transform(
    path: &Path,
    room_id: &str,
    handle: Option<Handle>,
    delta: Vector2,
    options: &TransformOptions,
    output: Option<&Path>,
) -> Result<String> {
    let project = load(path)?;
    let plan = project.plan();
    let room = plan
        .get(room_id)
        .with_context(|| format!("No room with id {room_id}"))?;

    let gesture = match handle {
        Some(handle) => Transform::Resize { handle, delta },
        None => Transform::Move { delta },
    };
    let committed = commit(room, &gesture, options);
    let summary = format!(
        "{} at ({}, {}) px, {}' x {}'",
        room_id,
        committed.room().position.x,
        committed.room().position.y,
        committed.room().dimensions.width,
        committed.room().dimensions.length
    );
    let next = committed.apply_to(&plan)?;

    let out = output.unwrap_or(path);
    save(&project.with_plan(next), out)?;
    Ok(summary)
}

pub fn resave(path: &Path, output: Option<&Path>) -> Result<String> {
    let project = load(path)?;
    let out = output.unwrap_or(path);
    save(&project, out)?;
    Ok(format!("Saved {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planlite_core::{Dimension, Feature, FeatureType, Property, Room, RoomType, Wall};
    use tempfile::TempDir;

    fn write_project(dir: &TempDir) -> std::path::PathBuf {
        let a = Room::new("a", "Den", RoomType::Office, Dimension::new(10.0, 10.0), Vector2::new(0.0, 0.0), 1)
            .with_feature(Feature::new("w", FeatureType::Window, Wall::Right));
        let b = Room::new("b", "Hall", RoomType::Hallway, Dimension::new(10.0, 10.0), Vector2::new(150.0, 0.0), 1);
        let project = ProjectData::new(
            Property {
                name: "Test".into(),
                address: String::new(),
            },
            vec![a, b],
        );
        let path = dir.path().join("Test.json");
        project.save(&path).unwrap();
        path
    }

    #[test]
    fn open_saves_both_rooms_and_diagram() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);
        open(&path, "a", "b", None).unwrap();

        let saved = ProjectData::load(&path).unwrap();
        assert!(saved.rooms.iter().all(|r| r
            .features
            .iter()
            .any(|f| f.feature_type == FeatureType::Opening)));
        assert!(saved.diagram.unwrap().starts_with("--- Floor 1 Diagram ---"));
    }

    #[test]
    fn adjacency_lists_neighbors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);
        let text = adjacency(&path, "a").unwrap();
        assert_eq!(text, "b (Hall): right wall -> left wall, 0-10 ft");
        assert!(adjacency(&path, "zzz").is_err());
    }

    #[test]
    fn sunlight_is_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);
        let value: serde_json::Value = serde_json::from_str(&sunlight(&path, 90.0, Some(1)).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["featureId"], "w");
        let none: serde_json::Value = serde_json::from_str(&sunlight(&path, 270.0, None).unwrap()).unwrap();
        assert_eq!(none.as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn resize_is_committed_and_snapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);
        let out = dir.path().join("out.json");
        transform(
            &path,
            "a",
            Some(Handle::Left),
            Vector2::new(31.0, 0.0),
            &TransformOptions::default(),
            Some(&out),
        )
        .unwrap();
        let saved = ProjectData::load(&out).unwrap();
        let a = saved.rooms.iter().find(|r| r.id == "a").unwrap();
        assert_eq!(a.position.x, 30.0);
        assert_eq!(a.dimensions.width, 8.0);
    }

    #[test]
    fn report_can_be_written_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(&dir);
        let out = dir.path().join("Test_Report.txt");
        report(&path, Some(&out)).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("ROOM: Den"));
    }
}
