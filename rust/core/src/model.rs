// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core entity types: rooms, wall features, furniture and pets.
//!
//! These are the JSON shapes persisted in project files. Field names follow
//! the file format (`camelCase`, `type` for the kind discriminant).

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::units::{self, FULL_OPENING_RATIO};

/// Default wall colour for rooms without an explicit one.
pub const DEFAULT_WALL_COLOR: &str = "#E2E8F0";

/// Colour given to furniture coming back from the layout assistant.
pub const DEFAULT_FURNITURE_COLOR: &str = "#A0522D";

/// A 2D point or offset. Pixel space unless stated otherwise.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_point(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Size of a room or furniture item, in feet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimension {
    pub width: f64,
    pub length: f64,
}

impl Dimension {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// One of a room's four axis-aligned edges, named before rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];

    /// Top and bottom walls run along the x axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Wall::Top | Wall::Bottom)
    }

    pub fn opposite(&self) -> Wall {
        match self {
            Wall::Top => Wall::Bottom,
            Wall::Bottom => Wall::Top,
            Wall::Left => Wall::Right,
            Wall::Right => Wall::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Wall::Top => "top",
            Wall::Bottom => "bottom",
            Wall::Left => "left",
            Wall::Right => "right",
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of wall-mounted feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    Door,
    Window,
    Outlet,
    Opening,
    SlidingDoor,
    FrenchDoor,
    GarageDoor,
}

impl FeatureType {
    /// Width in feet a newly placed feature of this kind gets.
    pub fn default_size(&self) -> f64 {
        match self {
            FeatureType::Door | FeatureType::Opening => 3.0,
            FeatureType::Window => 4.0,
            FeatureType::Outlet => 0.5,
            FeatureType::GarageDoor => 8.0,
            FeatureType::SlidingDoor => 6.0,
            FeatureType::FrenchDoor => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Door => "door",
            FeatureType::Window => "window",
            FeatureType::Outlet => "outlet",
            FeatureType::Opening => "opening",
            FeatureType::SlidingDoor => "sliding_door",
            FeatureType::FrenchDoor => "french_door",
            FeatureType::GarageDoor => "garage_door",
        }
    }

    /// Human readable label, e.g. "Sliding door".
    pub fn label(&self) -> String {
        let spaced = self.as_str().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A door, window, outlet or opening placed on one wall of a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    pub id: String,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub wall: Wall,
    /// Distance of the feature's centre from the wall start, in percent.
    pub offset: f64,
    /// Extent along the wall, in feet.
    pub size: f64,
}

impl Feature {
    /// Creates a feature centred on the wall with the kind's default size.
    pub fn new(id: impl Into<String>, feature_type: FeatureType, wall: Wall) -> Self {
        Self {
            id: id.into(),
            feature_type,
            wall,
            offset: 50.0,
            size: feature_type.default_size(),
        }
    }

    /// Start and end of the feature along its wall, in feet from the wall
    /// start, for a wall of the given length.
    pub fn extent_along(&self, wall_length_ft: f64) -> (f64, f64) {
        let center = wall_length_ft * self.offset / 100.0;
        (center - self.size / 2.0, center + self.size / 2.0)
    }
}

/// Room rotation in quarter turns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn radians(&self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("rotation must be 0, 90, 180 or 270, got {other}")),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

/// A furniture item placed inside a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Furniture {
    pub id: String,
    pub name: String,
    /// Top-left corner in feet, relative to the room's origin.
    pub position: Vector2,
    pub dimensions: Dimension,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Fish,
    #[serde(rename = "Small Animal")]
    SmallAnimal,
}

impl PetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
            PetType::Bird => "Bird",
            PetType::Fish => "Fish",
            PetType::SmallAnimal => "Small Animal",
        }
    }
}

/// A pet placed in a room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    /// Position in feet, relative to the room's origin.
    pub position: Vector2,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomType {
    #[serde(rename = "Living Room")]
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    #[serde(rename = "Dining Room")]
    DiningRoom,
    Office,
    Garage,
    Stairs,
    Hallway,
    Custom,
}

impl RoomType {
    pub const ALL: [RoomType; 10] = [
        RoomType::LivingRoom,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::DiningRoom,
        RoomType::Office,
        RoomType::Garage,
        RoomType::Stairs,
        RoomType::Hallway,
        RoomType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "Living Room",
            RoomType::Bedroom => "Bedroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bathroom => "Bathroom",
            RoomType::DiningRoom => "Dining Room",
            RoomType::Office => "Office",
            RoomType::Garage => "Garage",
            RoomType::Stairs => "Stairs",
            RoomType::Hallway => "Hallway",
            RoomType::Custom => "Custom",
        }
    }

    /// Floor colour used for new rooms of this type.
    pub fn default_color(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "#fef08a",
            RoomType::Bedroom => "#bfdbfe",
            RoomType::Kitchen => "#fed7aa",
            RoomType::Bathroom => "#bbf7d0",
            RoomType::DiningRoom => "#fecaca",
            RoomType::Office => "#e0e7ff",
            RoomType::Garage => "#d1d5db",
            RoomType::Stairs => "#e5e7eb",
            RoomType::Hallway => "#f3f4f6",
            RoomType::Custom => "#e9d5ff",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded link from one room to another through one of its walls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomConnection {
    pub room_id: String,
    pub wall: Wall,
}

/// Renovation cost estimates, per square foot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostEstimates {
    pub flooring: f64,
    pub paint: f64,
    pub labor: f64,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

fn default_floor() -> u32 {
    1
}

/// A rectangular room on one floor.
///
/// `position` is the top-left corner in floor pixels; `dimensions` are in
/// feet. The bounding box is
/// `[x, x + width·PPF] × [y, y + length·PPF]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub dimensions: Dimension,
    pub position: Vector2,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub furniture: Vec<Furniture>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub connections: Vec<RoomConnection>,
    #[serde(default = "default_floor")]
    pub floor: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_estimates: Option<CostEstimates>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        room_type: RoomType,
        dimensions: Dimension,
        position: Vector2,
        floor: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_type,
            dimensions,
            position,
            rotation: Rotation::Deg0,
            features: Vec::new(),
            furniture: Vec::new(),
            pets: Vec::new(),
            connections: Vec::new(),
            floor,
            color: Some(room_type.default_color().to_string()),
            wall_color: None,
            description: None,
            cost_estimates: None,
        }
    }

    /// The room the editor adds when asked for a new blank room.
    pub fn blank(id: impl Into<String>, floor: u32) -> Self {
        Self::new(
            id,
            "New Room",
            RoomType::Custom,
            Dimension::new(10.0, 10.0),
            Vector2::new(50.0, 50.0),
            floor,
        )
    }

    pub fn width_px(&self) -> f64 {
        units::feet_to_px(self.dimensions.width)
    }

    pub fn length_px(&self) -> f64 {
        units::feet_to_px(self.dimensions.length)
    }

    /// Unrotated bounding box in floor pixels.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.position.x,
            min_y: self.position.y,
            max_x: self.position.x + self.width_px(),
            max_y: self.position.y + self.length_px(),
        }
    }

    /// Length of a wall in feet: width for top/bottom, length for left/right.
    pub fn wall_length_ft(&self, wall: Wall) -> f64 {
        if wall.is_horizontal() {
            self.dimensions.width
        } else {
            self.dimensions.length
        }
    }

    pub fn area_sq_ft(&self) -> f64 {
        self.dimensions.area()
    }

    /// True when an opening on `wall` spans more than 80% of it, in which
    /// case the wall is rendered as open rather than as a panel.
    pub fn has_full_opening(&self, wall: Wall) -> bool {
        let threshold = self.wall_length_ft(wall) * FULL_OPENING_RATIO;
        self.features
            .iter()
            .any(|f| f.wall == wall && f.feature_type == FeatureType::Opening && f.size > threshold)
    }

    pub fn features_on(&self, wall: Wall) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(move |f| f.wall == wall)
    }

    pub fn with_feature(&self, feature: Feature) -> Room {
        let mut room = self.clone();
        room.features.push(feature);
        room
    }

    pub fn with_furniture(&self, furniture: Vec<Furniture>) -> Room {
        Room {
            furniture,
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Room {
        Room {
            description: Some(description.into()),
            ..self.clone()
        }
    }

    pub fn with_dimensions(&self, dimensions: Dimension) -> Room {
        Room {
            dimensions,
            ..self.clone()
        }
    }

    pub fn with_cost_estimates(&self, costs: CostEstimates) -> Room {
        Room {
            cost_estimates: Some(costs),
            ..self.clone()
        }
    }

    pub fn with_position(&self, position: Vector2) -> Room {
        Room {
            position,
            ..self.clone()
        }
    }
}
