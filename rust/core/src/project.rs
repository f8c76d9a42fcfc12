// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Project files: `{ property, rooms, diagram? }` as pretty-printed JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Room;
use crate::plan::FloorPlan;

/// The property a project describes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Top-level project document.
///
/// `diagram` is a cache of the ASCII schematic taken at save time. It is not
/// authoritative and can be regenerated from `rooms` at any time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectData {
    pub property: Property,
    pub rooms: Vec<Room>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
}

impl ProjectData {
    pub fn new(property: Property, rooms: Vec<Room>) -> Self {
        Self {
            property,
            rooms,
            diagram: None,
        }
    }

    /// Parses a project document, checking that it has a `property` object
    /// and a `rooms` array before decoding the rooms themselves.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let has_property = value.get("property").is_some_and(|p| p.is_object());
        let has_rooms = value.get("rooms").is_some_and(|r| r.is_array());
        if !has_property || !has_rooms {
            return Err(Error::InvalidProject(
                "expected a `property` object and a `rooms` array".into(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let project = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), rooms = project.rooms.len(), "loaded project");
        Ok(project)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)?;
        tracing::info!(path = %path.display(), rooms = self.rooms.len(), "saved project");
        Ok(())
    }

    /// Returns a copy carrying a freshly generated diagram cache.
    pub fn with_diagram(&self, diagram: impl Into<String>) -> Self {
        Self {
            diagram: Some(diagram.into()),
            ..self.clone()
        }
    }

    pub fn plan(&self) -> FloorPlan {
        FloorPlan::from_rooms(self.rooms.clone())
    }

    /// Returns a copy whose rooms come from `plan`. The diagram cache is
    /// dropped since it may no longer match.
    pub fn with_plan(&self, plan: FloorPlan) -> Self {
        Self {
            property: self.property.clone(),
            rooms: plan.into_rooms(),
            diagram: None,
        }
    }

    /// File stem derived from the property name: spaces become underscores,
    /// and an empty name falls back to `home-plan`.
    pub fn file_stem(&self) -> String {
        let stem = self.property.name.replace(' ', "_");
        if stem.is_empty() {
            "home-plan".to_string()
        } else {
            stem
        }
    }

    pub fn save_file_name(&self) -> String {
        format!("{}.json", self.file_stem())
    }

    pub fn report_file_name(&self) -> String {
        format!("{}_Report.txt", self.file_stem())
    }
}
