// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for diagram rendering
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a diagram
#[derive(Error, Debug)]
pub enum Error {
    #[error("Diagram would be {width}x{height} cells, over the {limit} cell limit")]
    TooLarge { width: f64, height: f64, limit: usize },
}
