// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PlanLite Core
//!
//! Data model for the PlanLite floor-plan editor: rooms, their wall-mounted
//! features, furniture and pets, plus the unit constants that tie the
//! persisted "feet" unit to on-screen pixels.
//!
//! Rooms live in a flat, arena-style [`FloorPlan`] keyed by id. Floors are a
//! derived grouping over `Room::floor`, not a container. Every operation that
//! changes a plan returns a new snapshot, which keeps undo/redo a matter of
//! storing values.
//!
//! ```
//! use planlite_core::{units, FloorPlan, Room};
//!
//! let plan = FloorPlan::new().with_room_added(Room::blank("room-1", 1));
//! let room = plan.get("room-1").unwrap();
//! assert_eq!(room.bounds().max_x, 50.0 + units::feet_to_px(10.0));
//! ```

pub mod error;
pub mod ids;
pub mod ingest;
pub mod model;
pub mod plan;
pub mod project;
pub mod units;

pub use error::{Error, Result};
pub use model::{
    Bounds, CostEstimates, Dimension, Feature, FeatureType, Furniture, Pet, PetType, Room,
    RoomConnection, RoomType, Rotation, Vector2, Wall,
};
pub use plan::FloorPlan;
pub use project::{ProjectData, Property};
