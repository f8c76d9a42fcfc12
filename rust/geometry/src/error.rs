// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing plan geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("Room not found: {0}")]
    UnknownRoom(String),

    #[error("Rooms {0} and {1} do not share a wall")]
    NotAdjacent(String, String),

    #[error("Invalid drag gesture: {0}")]
    InvalidGesture(String),

    #[error("Plan error: {0}")]
    Core(#[from] planlite_core::Error),
}
