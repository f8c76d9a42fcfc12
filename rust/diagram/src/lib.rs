// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PlanLite Diagram
//!
//! Text views over a project: an ASCII schematic per floor ([`ascii`]) and a
//! full plain-text report ([`report`]). Both are read-only; nothing here
//! changes the rooms it is given.

pub mod ascii;
pub mod error;
pub mod report;

pub use ascii::{render_floor, render_project, Diagram, DiagramConfig, MAX_GRID_CELLS};
pub use error::{Error, Result};
pub use report::render_report;
