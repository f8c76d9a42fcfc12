// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ingestion of assistant responses into the data model.
//!
//! The layout/furniture/measurement/cost assistants are external services
//! returning JSON text. This module turns that text into typed values and
//! rejects anything with the wrong shape. Geometry is not validated beyond
//! types: a generated room smaller than the minimum size is accepted as-is.
//!
//! Generated layouts express room positions in feet; they are converted to
//! pixels here, while dimensions stay in feet.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ids;
use crate::model::{
    CostEstimates, Dimension, Feature, Furniture, Room, RoomType, Rotation, Vector2,
    DEFAULT_FURNITURE_COLOR,
};
use crate::units;

/// Strips a surrounding markdown code fence (with optional language tag).
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag, if any, up to the first newline.
    let body = match body.find('\n') {
        Some(nl) if body[..nl].chars().all(|c| c.is_alphanumeric()) => &body[nl + 1..],
        _ => body.trim_start_matches(|c: char| c.is_alphanumeric()),
    };
    body.trim()
}

fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| Error::MalformedResponse(format!("not valid JSON: {e}")))
}

fn expect_array(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(Error::MalformedResponse("response is not a JSON array".into())),
    }
}

fn number_field(value: &Value, field: &str) -> Result<f64> {
    value
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::MalformedResponse(format!("`{field}` is missing or not a number")))
}

/// A room as the layout assistant describes it, with position in feet.
#[derive(Debug, Deserialize)]
struct GeneratedRoom {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(rename = "type")]
    room_type: RoomType,
    #[serde(default)]
    floor: Option<u32>,
    dimensions: Dimension,
    #[serde(default)]
    position: Option<GeneratedPosition>,
    #[serde(default)]
    rotation: Rotation,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    furniture: Vec<Furniture>,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratedPosition {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl GeneratedRoom {
    fn into_room(self, fallback_id: String) -> Room {
        let position = self.position.unwrap_or_default();
        let floor = self.floor.filter(|&f| f >= 1).unwrap_or(1);
        let mut room = Room::new(
            self.id.filter(|id| !id.is_empty()).unwrap_or(fallback_id),
            self.name,
            self.room_type,
            self.dimensions,
            Vector2::new(units::feet_to_px(position.x), units::feet_to_px(position.y)),
            floor,
        );
        room.rotation = self.rotation;
        room.features = self.features;
        room.furniture = self.furniture;
        room
    }
}

/// Parses a generated floor plan into rooms with pixel positions.
///
/// Rooms without an id get a fresh one; a missing or zero floor becomes 1;
/// a missing position becomes the floor origin. Pets and connections are
/// never taken from the assistant.
pub fn parse_layout(text: &str) -> Result<Vec<Room>> {
    let items = expect_array(parse_json(text)?)?;
    let base = ids::next_id("room");
    let rooms = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let generated: GeneratedRoom = serde_json::from_value(item)
                .map_err(|e| Error::MalformedResponse(format!("room {i}: {e}")))?;
            Ok(generated.into_room(format!("{base}-{i}")))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = rooms.len(), "ingested generated layout");
    Ok(rooms)
}

/// Parses a generated furniture layout.
///
/// Items missing an id or name, with non-numeric geometry, or without a
/// quarter-turn rotation are dropped. A missing rotation is not defaulted. Kept items get the
/// default furniture colour.
pub fn parse_furniture(text: &str) -> Result<Vec<Furniture>> {
    let items = expect_array(parse_json(text)?)?;
    let total = items.len();
    let furniture: Vec<Furniture> = items
        .into_iter()
        .filter(|item| item.get("rotation").is_some())
        .filter_map(|item| serde_json::from_value::<Furniture>(item).ok())
        .filter(|f| !f.id.is_empty() && !f.name.is_empty())
        .map(|f| Furniture {
            color: Some(DEFAULT_FURNITURE_COLOR.to_string()),
            ..f
        })
        .collect();
    if furniture.len() < total {
        tracing::debug!(
            dropped = total - furniture.len(),
            kept = furniture.len(),
            "dropped malformed furniture items"
        );
    }
    Ok(furniture)
}

/// Parses a measured `{ width, length }` response, in feet.
pub fn parse_dimensions(text: &str) -> Result<Dimension> {
    let value = parse_json(text)?;
    Ok(Dimension::new(
        number_field(&value, "width")?,
        number_field(&value, "length")?,
    ))
}

/// Parses a `{ flooring, paint, labor }` cost response.
pub fn parse_costs(text: &str) -> Result<CostEstimates> {
    let value = parse_json(text)?;
    Ok(CostEstimates {
        flooring: number_field(&value, "flooring")?,
        paint: number_field(&value, "paint")?,
        labor: number_field(&value, "labor")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn strips_fences_with_and_without_language() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  [2]  "), "[2]");
    }

    #[test]
    fn layout_positions_become_pixels() {
        let text = r#"```json
        [
          { "id": "room-1", "name": "Living Room", "type": "Living Room", "floor": 1,
            "dimensions": { "width": 15, "length": 20 }, "position": { "x": 0, "y": 0 } },
          { "name": "Kitchen", "type": "Kitchen",
            "dimensions": { "width": 12, "length": 15 }, "position": { "x": 15 } }
        ]
        ```"#;
        let rooms = parse_layout(text).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id, "room-1");
        assert_relative_eq!(rooms[1].position.x, 225.0);
        assert_relative_eq!(rooms[1].position.y, 0.0);
        assert_eq!(rooms[1].floor, 1);
        assert!(!rooms[1].id.is_empty());
        assert_relative_eq!(rooms[1].dimensions.width, 12.0);
    }

    #[test]
    fn layout_must_be_an_array() {
        assert!(matches!(
            parse_layout(r#"{"rooms": []}"#),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn furniture_filter_drops_bad_items() {
        let text = r#"[
          { "id": "bed-1", "name": "queen_bed", "position": { "x": 5.5, "y": 0.5 },
            "dimensions": { "width": 5, "length": 6.7 }, "rotation": 0 },
          { "id": "bad-rot", "name": "desk", "position": { "x": 1, "y": 1 },
            "dimensions": { "width": 2, "length": 2 }, "rotation": 45 },
          { "id": "no-pos", "name": "lamp", "dimensions": { "width": 1, "length": 1 }, "rotation": 0 },
          { "id": "no-rot", "name": "chair", "position": { "x": 2, "y": 2 },
            "dimensions": { "width": 1.5, "length": 1.5 } },
          { "id": "", "name": "ghost", "position": { "x": 1, "y": 1 },
            "dimensions": { "width": 2, "length": 2 }, "rotation": 90 }
        ]"#;
        let furniture = parse_furniture(text).unwrap();
        assert_eq!(furniture.len(), 1);
        assert_eq!(furniture[0].id, "bed-1");
        assert_eq!(furniture[0].color.as_deref(), Some(DEFAULT_FURNITURE_COLOR));
    }

    #[test]
    fn dimensions_require_numbers() {
        let d = parse_dimensions(r#"{"width": 12.5, "length": 14.0}"#).unwrap();
        assert_relative_eq!(d.width, 12.5);
        assert!(parse_dimensions(r#"{"width": "12", "length": 14}"#).is_err());
    }

    #[test]
    fn costs_require_all_fields() {
        let c = parse_costs(r#"{"flooring": 8.5, "paint": 3, "labor": 45}"#).unwrap();
        assert_relative_eq!(c.labor, 45.0);
        assert!(parse_costs(r#"{"flooring": 8.5, "paint": 3}"#).is_err());
    }
}
