// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PlanLite Geometry
//!
//! Pure geometry over [`planlite_core`] rooms:
//!
//! 1. [`adjacency`]: which rooms share a wall with a given room
//! 2. [`opening`]: turning a shared wall segment into a matched pair of
//!    `opening` features
//! 3. [`transform`] and [`drag`]: move/resize transforms with a preview vs.
//!    commit split, driven by an explicit drag state machine
//! 4. [`draw`]: the draw-a-room gesture
//! 5. [`sunlight`]: light wedges cast through windows for a sun azimuth
//!
//! Nothing here mutates a room in place; every function returns new values.
//!
//! ```
//! use planlite_core::{Dimension, Room, RoomType, Vector2};
//! use planlite_geometry::find_adjacent;
//!
//! let a = Room::new("a", "A", RoomType::Bedroom, Dimension::new(10.0, 10.0), Vector2::new(0.0, 0.0), 1);
//! let b = Room::new("b", "B", RoomType::Office, Dimension::new(10.0, 10.0), Vector2::new(150.0, 0.0), 1);
//! let rooms = vec![a.clone(), b];
//! let found = find_adjacent(&a, &rooms);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].overlap.length(), 10.0);
//! ```

pub mod adjacency;
pub mod drag;
pub mod draw;
pub mod error;
pub mod opening;
pub mod sunlight;
pub mod transform;

pub use adjacency::{find_adjacent, find_adjacent_in_plan, Adjacency, AdjacencyList, Segment};
pub use drag::{DragSession, DragState, Gesture};
pub use draw::{commit_drawn_room, preview_drawn_room};
pub use error::{Error, Result};
pub use opening::{
    create_opening, feature_segment, segments_coincide, synthesize_opening, OpeningPair,
};
pub use sunlight::{cast_sunlight, sun_vector, LightWedge};
pub use transform::{
    commit, nudge, preview, Committed, Direction, Draft, Handle, Transform, TransformOptions,
};
