//! `HexWorld`: hexagonal board of a fixed radius around the origin.
//!
//! Every step costs 1. Labels are the direction index into
//! [`HexVec::UNIT`] (0 = +x, counting counter-clockwise).

use std::collections::HashSet;

use wayfind_geometry::hex2d::{HexPoint, HexVec};
use wayfind_search::SearchSpace;

/// A hex board with blocked cells and a single goal.
#[derive(Debug, Clone)]
pub struct HexWorld {
    radius: i64,
    blocked: HashSet<HexPoint>,
    goal: HexPoint,
}

impl HexWorld {
    /// All cells within `radius` steps of the origin are on the board.
    #[must_use]
    pub fn new(radius: i64, goal: HexPoint) -> Self {
        Self {
            radius,
            blocked: HashSet::new(),
            goal,
        }
    }

    #[must_use]
    pub fn with_blocked(mut self, cells: impl IntoIterator<Item = HexPoint>) -> Self {
        self.blocked.extend(cells);
        self
    }

    /// The ring of cells at exactly `distance` from `centre`, in direction
    /// order starting from `centre + distance * UNIT[4]`.
    #[must_use]
    pub fn ring(centre: HexPoint, distance: i64) -> Vec<HexPoint> {
        if distance == 0 {
            return vec![centre];
        }
        let mut cell = centre + distance * HexVec::UNIT[4];
        let mut cells = Vec::new();
        for dir in HexVec::UNIT {
            for _ in 0..distance {
                cells.push(cell);
                cell = cell + dir;
            }
        }
        cells
    }

    fn on_board(&self, cell: HexPoint) -> bool {
        (cell - HexPoint::ORIGIN).hex_norm() <= self.radius && !self.blocked.contains(&cell)
    }
}

impl SearchSpace for HexWorld {
    type Node = HexPoint;
    type Cost = u64;
    type Label = u8;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "hex"
    }

    fn expand(&self, node: &HexPoint) -> Vec<(HexPoint, u64, u8)> {
        (0_u8..)
            .zip(HexVec::UNIT)
            .map(|(dir, step)| (*node + step, 1, dir))
            .filter(|&(cell, _, _)| self.on_board(cell))
            .collect()
    }

    fn is_goal(&self, node: &HexPoint) -> bool {
        *node == self.goal
    }
}
