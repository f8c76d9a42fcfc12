// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ASCII rasterizer.
//!
//! Rooms are drawn on a character grid sized to the floor's bounding box
//! in feet, scaled by [`DiagramConfig`]. Rendering happens in three passes
//! over all rooms: borders, wall features, then labels. Each pass only
//! writes into cells that an earlier pass left suitable, so the order of
//! rooms does not matter for shared walls.
//!
//! Cell coordinates use half-up rounding throughout. A floor whose grid
//! would exceed [`MAX_GRID_CELLS`] is refused rather than allocated.

use std::collections::BTreeMap;

use planlite_core::units::px_to_feet;
use planlite_core::{FeatureType, Room, Wall};

use crate::error::{Error, Result};

/// Upper bound on the cells of one floor's grid.
pub const MAX_GRID_CELLS: usize = 4_000_000;

const BLANK: char = ' ';
const CORNER: char = '+';
const HORIZONTAL: char = '-';
const VERTICAL: char = '|';

/// Character scaling and margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Characters per foot along x.
    pub scale_x: f64,
    /// Characters per foot along y.
    pub scale_y: f64,
    /// Blank cells around the drawing.
    pub padding: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        // monospace cells are about twice as tall as wide
        Self {
            scale_x: 2.0,
            scale_y: 1.0,
            padding: 1,
        }
    }
}

/// Rendered text plus the number of feature glyphs that fell off the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    pub text: String,
    pub skipped_glyphs: usize,
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// A room's rectangle in grid cells.
#[derive(Debug, Clone, Copy)]
struct CellRect {
    x: i64,
    y: i64,
    w: i64,
    h: i64,
}

impl CellRect {
    fn right(&self) -> i64 {
        self.x + self.w - 1
    }

    fn bottom(&self) -> i64 {
        self.y + self.h - 1
    }
}

struct Grid {
    cells: Vec<Vec<char>>,
    offset_x: f64,
    offset_y: f64,
    config: DiagramConfig,
}

impl Grid {
    fn for_rooms(rooms: &[&Room], config: DiagramConfig) -> Result<Self> {
        let Some(bounds) = rooms.iter().map(|r| r.bounds()).reduce(|a, b| a.union(&b)) else {
            return Ok(Self {
                cells: Vec::new(),
                offset_x: 0.0,
                offset_y: 0.0,
                config,
            });
        };
        let min_x = px_to_feet(bounds.min_x);
        let min_y = px_to_feet(bounds.min_y);

        let pad = config.padding as f64;
        let width = (px_to_feet(bounds.width()) * config.scale_x).ceil().max(0.0) + pad * 2.0;
        let height = (px_to_feet(bounds.height()) * config.scale_y).ceil().max(0.0) + pad * 2.0;
        if !width.is_finite() || !height.is_finite() || width * height > MAX_GRID_CELLS as f64 {
            tracing::warn!(width, height, limit = MAX_GRID_CELLS, "diagram grid too large, refused");
            return Err(Error::TooLarge {
                width,
                height,
                limit: MAX_GRID_CELLS,
            });
        }

        Ok(Self {
            cells: vec![vec![BLANK; width as usize]; height as usize],
            offset_x: -min_x * config.scale_x + pad,
            offset_y: -min_y * config.scale_y + pad,
            config,
        })
    }

    fn rect(&self, room: &Room) -> CellRect {
        CellRect {
            x: round_half_up(px_to_feet(room.position.x) * self.config.scale_x + self.offset_x),
            y: round_half_up(px_to_feet(room.position.y) * self.config.scale_y + self.offset_y),
            w: round_half_up(room.dimensions.width * self.config.scale_x),
            h: round_half_up(room.dimensions.length * self.config.scale_y),
        }
    }

    fn get(&self, col: i64, row: i64) -> Option<char> {
        let (col, row) = (usize::try_from(col).ok()?, usize::try_from(row).ok()?);
        self.cells.get(row)?.get(col).copied()
    }

    fn cell_mut(&mut self, col: i64, row: i64) -> Option<&mut char> {
        let (col, row) = (usize::try_from(col).ok()?, usize::try_from(row).ok()?);
        self.cells.get_mut(row)?.get_mut(col)
    }

    fn draw_border(&mut self, r: CellRect) {
        for row in r.y..r.y + r.h {
            for col in r.x..r.x + r.w {
                let on_h = row == r.y || row == r.bottom();
                let on_v = col == r.x || col == r.right();
                let glyph = match (on_h, on_v) {
                    (true, true) => CORNER,
                    (true, false) => HORIZONTAL,
                    (false, true) => VERTICAL,
                    (false, false) => continue,
                };
                let Some(cell) = self.cell_mut(col, row) else {
                    continue;
                };
                if *cell == BLANK {
                    *cell = glyph;
                } else if *cell != glyph && matches!(*cell, HORIZONTAL | VERTICAL) {
                    // two rooms' walls cross here
                    *cell = CORNER;
                }
            }
        }
    }

    /// Places a feature glyph on a plain wall cell. Returns false when the
    /// target cell is off the grid.
    fn draw_feature(&mut self, r: CellRect, wall: Wall, offset_pct: f64, glyph: char) -> bool {
        let t = offset_pct / 100.0;
        let (col, row, wall_char) = match wall {
            Wall::Top => (r.x + round_half_up(r.w as f64 * t), r.y, HORIZONTAL),
            Wall::Bottom => (r.x + round_half_up(r.w as f64 * t), r.bottom(), HORIZONTAL),
            Wall::Left => (r.x, r.y + round_half_up(r.h as f64 * t), VERTICAL),
            Wall::Right => (r.right(), r.y + round_half_up(r.h as f64 * t), VERTICAL),
        };
        match self.cell_mut(col, row) {
            Some(cell) => {
                if *cell == wall_char {
                    *cell = glyph;
                }
                true
            }
            None => false,
        }
    }

    /// Writes `text` centred on `center_col`, into blank cells only.
    fn write_label(&mut self, text: &str, center_col: i64, row: i64) {
        let len = text.chars().count() as i64;
        let start = center_col - len.div_euclid(2);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i64, row) {
                if *cell == BLANK {
                    *cell = ch;
                }
            }
        }
    }

    fn into_text(self) -> String {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .filter(|row| !row.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn feature_glyph(feature_type: FeatureType) -> Option<char> {
    match feature_type {
        FeatureType::Door => Some('D'),
        FeatureType::Window => Some('W'),
        FeatureType::Opening => Some('='),
        _ => None,
    }
}

/// Draws the rooms of one floor.
///
/// Fails with [`Error::TooLarge`] when the rooms span more than
/// [`MAX_GRID_CELLS`] cells at the configured scale.
pub fn render_floor(rooms: &[&Room], config: &DiagramConfig) -> Result<Diagram> {
    if rooms.is_empty() {
        return Ok(Diagram {
            text: "No rooms on this floor.".to_string(),
            skipped_glyphs: 0,
        });
    }

    let mut grid = Grid::for_rooms(rooms, *config)?;
    let rects: Vec<CellRect> = rooms.iter().map(|r| grid.rect(r)).collect();

    for r in &rects {
        grid.draw_border(*r);
    }

    let mut skipped_glyphs = 0;
    for (room, r) in rooms.iter().zip(&rects) {
        for feature in &room.features {
            let Some(glyph) = feature_glyph(feature.feature_type) else {
                continue;
            };
            if !grid.draw_feature(*r, feature.wall, feature.offset, glyph) {
                tracing::warn!(
                    room_id = %room.id,
                    feature_id = %feature.id,
                    wall = %feature.wall,
                    offset = feature.offset,
                    "feature glyph falls outside the diagram, skipped"
                );
                skipped_glyphs += 1;
            }
        }
    }

    for (room, r) in rooms.iter().zip(&rects) {
        if r.h <= 2 {
            continue;
        }
        let name = room.name.as_str();
        let dims = format!("{}'x{}'", room.dimensions.width, room.dimensions.length);
        let center_col = r.x + r.w.div_euclid(2);
        let center_row = r.y + r.h.div_euclid(2);
        if r.w > name.chars().count() as i64 {
            grid.write_label(name, center_col, center_row - 1);
        }
        if r.w > dims.chars().count() as i64 {
            grid.write_label(&dims, center_col, center_row);
        }
    }

    Ok(Diagram {
        text: grid.into_text(),
        skipped_glyphs,
    })
}

/// Draws every floor of a project, lowest first, each under its own header.
pub fn render_project(rooms: &[Room], config: &DiagramConfig) -> Result<Diagram> {
    if rooms.is_empty() {
        return Ok(Diagram {
            text: "This project is empty.".to_string(),
            skipped_glyphs: 0,
        });
    }

    let mut floors: BTreeMap<u32, Vec<&Room>> = BTreeMap::new();
    for room in rooms {
        floors.entry(room.floor.max(1)).or_default().push(room);
    }

    let mut text = String::new();
    let mut skipped_glyphs = 0;
    for (floor, floor_rooms) in &floors {
        let diagram = render_floor(floor_rooms, config)?;
        text.push_str(&format!("--- Floor {floor} Diagram ---\n\n"));
        text.push_str(&diagram.text);
        text.push_str("\n\n");
        skipped_glyphs += diagram.skipped_glyphs;
    }

    tracing::debug!(floors = floors.len(), skipped_glyphs, "rendered diagram");
    Ok(Diagram {
        text: text.trim().to_string(),
        skipped_glyphs,
    })
}
