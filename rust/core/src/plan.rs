// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-style room storage.
//!
//! A [`FloorPlan`] is a flat list of rooms plus an id index. Rooms never
//! point at each other; a feature belongs to the room whose `features` list
//! holds it. Every update returns a new plan, so callers can keep old
//! snapshots around for undo.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::model::Room;

#[derive(Debug, Clone, Default)]
pub struct FloorPlan {
    rooms: Vec<Room>,
    index: FxHashMap<String, usize>,
}

impl FloorPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plan from rooms in project order.
    ///
    /// Ids are expected to be unique. If one repeats, lookups resolve to the
    /// first room carrying it.
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let mut index = FxHashMap::default();
        for (i, room) in rooms.iter().enumerate() {
            if index.contains_key(&room.id) {
                tracing::warn!(room_id = %room.id, "duplicate room id in plan");
                continue;
            }
            index.insert(room.id.clone(), i);
        }
        Self { rooms, index }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn into_rooms(self) -> Vec<Room> {
        self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.index.get(id).map(|&i| &self.rooms[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Rooms on `floor`, in plan order.
    pub fn rooms_on_floor(&self, floor: u32) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor == floor).collect()
    }

    /// Floor numbers in use, ascending.
    pub fn floors(&self) -> Vec<u32> {
        self.rooms
            .iter()
            .map(|r| r.floor)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Highest floor in use; an empty plan still has floor 1.
    pub fn max_floor(&self) -> u32 {
        self.rooms.iter().map(|r| r.floor).max().unwrap_or(1).max(1)
    }

    /// Returns a plan with `room` appended.
    pub fn with_room_added(&self, room: Room) -> FloorPlan {
        let mut rooms = self.rooms.clone();
        rooms.push(room);
        FloorPlan::from_rooms(rooms)
    }

    /// Replaces every room in `updates` by id, all at once.
    ///
    /// Either all rooms are written or, if any id is unknown, none are.
    pub fn with_rooms_replaced<I>(&self, updates: I) -> Result<FloorPlan>
    where
        I: IntoIterator<Item = Room>,
    {
        let updates: Vec<Room> = updates.into_iter().collect();
        let mut slots = Vec::with_capacity(updates.len());
        for room in &updates {
            let slot = self
                .index
                .get(&room.id)
                .copied()
                .ok_or_else(|| Error::UnknownRoom(room.id.clone()))?;
            slots.push(slot);
        }

        let mut next = self.clone();
        for (slot, room) in slots.into_iter().zip(updates) {
            next.rooms[slot] = room;
        }
        tracing::debug!(count = next.rooms.len(), "replaced rooms in plan");
        Ok(next)
    }

    /// Replaces a single room by id.
    pub fn with_room_replaced(&self, room: Room) -> Result<FloorPlan> {
        self.with_rooms_replaced(std::iter::once(room))
    }

    /// Returns a plan without the room `id`.
    pub fn with_room_removed(&self, id: &str) -> Result<FloorPlan> {
        if !self.contains(id) {
            return Err(Error::UnknownRoom(id.to_string()));
        }
        let rooms = self.rooms.iter().filter(|r| r.id != id).cloned().collect();
        Ok(FloorPlan::from_rooms(rooms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimension, Room, Vector2};

    fn plan() -> FloorPlan {
        let mut upstairs = Room::blank("b", 2);
        upstairs.name = "Upstairs".into();
        FloorPlan::from_rooms(vec![Room::blank("a", 1), upstairs, Room::blank("c", 1)])
    }

    #[test]
    fn lookup_by_id() {
        let plan = plan();
        assert_eq!(plan.get("b").map(|r| r.name.as_str()), Some("Upstairs"));
        assert!(plan.get("zzz").is_none());
    }

    #[test]
    fn floors_are_sorted_and_grouped() {
        let plan = plan();
        assert_eq!(plan.floors(), vec![1, 2]);
        assert_eq!(plan.rooms_on_floor(1).len(), 2);
        assert_eq!(plan.max_floor(), 2);
        assert_eq!(FloorPlan::new().max_floor(), 1);
    }

    #[test]
    fn replace_is_atomic() {
        let plan = plan();
        let moved = plan.get("a").unwrap().with_position(Vector2::new(0.0, 0.0));
        let missing = Room::blank("missing", 1);

        let err = plan.with_rooms_replaced(vec![moved.clone(), missing]);
        assert!(matches!(err, Err(Error::UnknownRoom(id)) if id == "missing"));
        assert_eq!(plan.get("a").unwrap().position, Vector2::new(50.0, 50.0));

        let next = plan.with_room_replaced(moved).unwrap();
        assert_eq!(next.get("a").unwrap().position, Vector2::new(0.0, 0.0));
        // the old snapshot is untouched
        assert_eq!(plan.get("a").unwrap().position, Vector2::new(50.0, 50.0));
    }

    #[test]
    fn replacing_two_rooms_writes_both() {
        let plan = plan();
        let a = plan.get("a").unwrap().with_dimensions(Dimension::new(4.0, 4.0));
        let c = plan.get("c").unwrap().with_dimensions(Dimension::new(6.0, 6.0));
        let next = plan.with_rooms_replaced([a, c]).unwrap();
        assert_eq!(next.get("a").unwrap().dimensions.width, 4.0);
        assert_eq!(next.get("c").unwrap().dimensions.width, 6.0);
    }

    #[test]
    fn remove_rebuilds_index() {
        let plan = plan().with_room_removed("a").unwrap();
        assert_eq!(plan.len(), 2);
        assert!(plan.get("a").is_none());
        assert_eq!(plan.get("c").map(|r| r.id.as_str()), Some("c"));
        assert!(plan.with_room_removed("a").is_err());
    }
}
