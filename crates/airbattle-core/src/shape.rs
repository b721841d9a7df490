//! The airplane shape catalog.
//!
//! An airplane pointing `Up` has its head at the anchor, a 3-cell body
//! below it, a 5-cell wing across the first body row, and a 3-cell tail
//! across the last body row. Wing and tail centres overlap the body, so
//! the airplane covers 10 distinct cells. Other orientations are rotations
//! of the `Up` layout about the head.

use serde::{Deserialize, Serialize};

use crate::constants::PLANE_CELL_COUNT;
use crate::enums::{CellKind, Orientation};
use crate::types::Position;

/// Offset of one airplane cell relative to the head anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeOffset {
    pub d_row: i32,
    pub d_col: i32,
    pub kind: CellKind,
}

/// One absolute airplane cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaneCell {
    pub pos: Position,
    pub kind: CellKind,
}

const HEAD: (i32, i32) = (0, 0);
const BODY: [(i32, i32); 3] = [(1, 0), (2, 0), (3, 0)];
const WINGS: [(i32, i32); 5] = [(1, -2), (1, -1), (1, 0), (1, 1), (1, 2)];
const TAIL: [(i32, i32); 3] = [(3, -1), (3, 0), (3, 1)];

/// Rotate an `Up`-relative offset into the given orientation.
fn rotate((d_row, d_col): (i32, i32), orientation: Orientation) -> (i32, i32) {
    match orientation {
        Orientation::Up => (d_row, d_col),
        Orientation::Down => (-d_row, -d_col),
        Orientation::Left => (-d_col, d_row),
        Orientation::Right => (d_col, -d_row),
    }
}

/// Canonical head-relative offsets for every orientation.
///
/// Cell order is fixed: head first, then body, wing, tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTemplate {
    offsets: [[ShapeOffset; PLANE_CELL_COUNT]; 4],
}

impl ShapeTemplate {
    pub fn new() -> Self {
        let blank = ShapeOffset {
            d_row: 0,
            d_col: 0,
            kind: CellKind::Head,
        };
        let mut offsets = [[blank; PLANE_CELL_COUNT]; 4];
        for (slot, orientation) in offsets.iter_mut().zip(Orientation::ALL) {
            *slot = build_orientation(orientation);
        }
        Self { offsets }
    }

    /// Offsets for one orientation, head first.
    pub fn offsets(&self, orientation: Orientation) -> &[ShapeOffset; PLANE_CELL_COUNT] {
        &self.offsets[orientation_index(orientation)]
    }

    /// Absolute cells of an airplane anchored at `head`. No bounds check.
    pub fn place(&self, head: Position, orientation: Orientation) -> [PlaneCell; PLANE_CELL_COUNT] {
        let offsets = *self.offsets(orientation);
        offsets.map(|o| PlaneCell {
            pos: head.offset(o.d_row, o.d_col),
            kind: o.kind,
        })
    }
}

impl Default for ShapeTemplate {
    fn default() -> Self {
        Self::new()
    }
}

fn orientation_index(orientation: Orientation) -> usize {
    match orientation {
        Orientation::Up => 0,
        Orientation::Down => 1,
        Orientation::Left => 2,
        Orientation::Right => 3,
    }
}

fn build_orientation(orientation: Orientation) -> [ShapeOffset; PLANE_CELL_COUNT] {
    let layers: [(&[(i32, i32)], CellKind); 4] = [
        (&[HEAD], CellKind::Head),
        (&BODY, CellKind::Body),
        (&WINGS, CellKind::Wing),
        (&TAIL, CellKind::Tail),
    ];

    let mut cells: Vec<ShapeOffset> = Vec::with_capacity(PLANE_CELL_COUNT);
    for (layer, kind) in layers {
        for &rel in layer {
            let (d_row, d_col) = rotate(rel, orientation);
            // Wing and tail centres are already claimed by the body.
            if cells.iter().any(|c| c.d_row == d_row && c.d_col == d_col) {
                continue;
            }
            cells.push(ShapeOffset { d_row, d_col, kind });
        }
    }

    let mut out = [ShapeOffset {
        d_row: 0,
        d_col: 0,
        kind: CellKind::Head,
    }; PLANE_CELL_COUNT];
    for (slot, cell) in out.iter_mut().zip(cells) {
        *slot = cell;
    }
    out
}
