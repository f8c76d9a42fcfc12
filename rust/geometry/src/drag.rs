// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drag interaction as an explicit state machine.
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_up--> Committed
//!                           |
//!                           +------cancel------> Cancelled
//! ```
//!
//! The host UI feeds pointer events; the session turns each move into a
//! [`Draft`] and the release into a single [`Committed`] room. A cancelled
//! drag never yields a committed value, so the host simply keeps its last
//! stored snapshot. `Committed` and `Cancelled` accept a new `pointer_down`.

use planlite_core::{Room, Vector2};

use crate::error::{Error, Result};
use crate::transform::{self, Committed, Draft, Handle, Transform, TransformOptions};

/// What the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Move,
    Resize(Handle),
}

impl Gesture {
    fn transform(self, delta: Vector2) -> Transform {
        match self {
            Gesture::Move => Transform::Move { delta },
            Gesture::Resize(handle) => Transform::Resize { handle, delta },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { gesture: Gesture, start: Room },
    Committed(Room),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DragSession {
    state: DragState,
    options: TransformOptions,
}

impl DragSession {
    pub fn new(options: TransformOptions) -> Self {
        Self {
            state: DragState::Idle,
            options,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Starts a gesture on `room`. Fails if a gesture is already running.
    pub fn pointer_down(&mut self, room: Room, gesture: Gesture) -> Result<()> {
        if self.is_dragging() {
            return Err(Error::InvalidGesture(
                "pointer down while a drag is already in progress".into(),
            ));
        }
        tracing::debug!(room_id = %room.id, ?gesture, "drag started");
        self.state = DragState::Dragging {
            gesture,
            start: room,
        };
        Ok(())
    }

    /// Live update for a pointer `delta` measured from the pointer-down point.
    pub fn pointer_move(&self, delta: Vector2) -> Result<Draft> {
        match &self.state {
            DragState::Dragging { gesture, start } => {
                Ok(transform::preview(start, &gesture.transform(delta)))
            }
            _ => Err(Error::InvalidGesture("pointer move without an active drag".into())),
        }
    }

    /// Ends the gesture and returns the room to persist.
    pub fn pointer_up(&mut self, delta: Vector2) -> Result<Committed> {
        let DragState::Dragging { gesture, start } = &self.state else {
            return Err(Error::InvalidGesture("pointer up without an active drag".into()));
        };
        let committed = transform::commit(start, &gesture.transform(delta), &self.options);
        self.state = DragState::Committed(committed.room().clone());
        Ok(committed)
    }

    /// Abandons the gesture. Returns the room as it was at pointer-down, or
    /// `None` if nothing was being dragged.
    pub fn cancel(&mut self) -> Option<Room> {
        match std::mem::replace(&mut self.state, DragState::Cancelled) {
            DragState::Dragging { start, .. } => {
                tracing::debug!(room_id = %start.id, "drag cancelled");
                Some(start)
            }
            previous => {
                self.state = previous;
                None
            }
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}
