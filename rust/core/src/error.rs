// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the data model and project I/O.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, saving or updating a plan.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A room id referenced by an update is not part of the plan.
    #[error("room not found: {0}")]
    UnknownRoom(String),

    /// The document parsed as JSON but is not a project.
    #[error("invalid project file: {0}")]
    InvalidProject(String),

    /// An assistant response did not have the expected shape.
    #[error("malformed assistant response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
