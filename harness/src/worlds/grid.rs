//! `GridWorld`: 4-connected cartesian grid with walls and weighted cells.
//!
//! Moving into a cell costs that cell's entry cost (default 1). Walls and
//! cells outside the bounding rectangle are never produced as neighbours.
//! Labels are the unit step taken.

use std::collections::{HashMap, HashSet};

use wayfind_geometry::cart2d::{Point2d, Rect, Vec2d};
use wayfind_search::SearchSpace;

/// Error parsing an ASCII grid map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// The map has no rows.
    Empty,
    /// A row's width differs from the first row's.
    RaggedRow { row: usize, expected: usize, found: usize },
    /// A character outside the map alphabet.
    UnknownCell { row: usize, col: usize, ch: char },
    /// `S` or `G` appears zero or several times.
    MarkerCount { marker: char, count: usize },
}

impl std::fmt::Display for GridParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "grid map is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has width {found}, expected {expected}"),
            Self::UnknownCell { row, col, ch } => {
                write!(f, "unknown cell {ch:?} at row {row}, column {col}")
            }
            Self::MarkerCount { marker, count } => {
                write!(f, "expected exactly one {marker:?}, found {count}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}

/// A bounded grid with walls, per-cell entry costs and a single goal.
#[derive(Debug, Clone)]
pub struct GridWorld {
    bounds: Rect,
    walls: HashSet<Point2d>,
    entry_costs: HashMap<Point2d, u64>,
    goal: Point2d,
}

impl GridWorld {
    /// An open grid with unit costs.
    #[must_use]
    pub fn new(bounds: Rect, goal: Point2d) -> Self {
        Self {
            bounds,
            walls: HashSet::new(),
            entry_costs: HashMap::new(),
            goal,
        }
    }

    /// Add impassable cells.
    #[must_use]
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Point2d>) -> Self {
        self.walls.extend(walls);
        self
    }

    /// Override the cost of entering `cell`.
    #[must_use]
    pub fn with_entry_cost(mut self, cell: Point2d, cost: u64) -> Self {
        self.entry_costs.insert(cell, cost);
        self
    }

    /// Parse an ASCII map, returning the world and the start cell.
    ///
    /// Row `r`, column `c` maps to `Point2d { x: c, y: r }` (y grows
    /// downward). Alphabet: `.` open (cost 1), `1`-`9` open with that entry
    /// cost, `#` wall, `S` start and `G` goal (both cost 1). Blank lines and
    /// surrounding whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`GridParseError`] for empty or ragged maps, unknown
    /// characters, or a missing or repeated `S`/`G`.
    pub fn parse(map: &str) -> Result<(Self, Point2d), GridParseError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().ok_or(GridParseError::Empty)?.chars().count();

        let mut walls = HashSet::new();
        let mut entry_costs = HashMap::new();
        let mut starts = Vec::new();
        let mut goals = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Point2d::new(to_coord(col), to_coord(row));
                match ch {
                    '.' => {}
                    '#' => {
                        walls.insert(cell);
                    }
                    'S' => starts.push(cell),
                    'G' => goals.push(cell),
                    '1'..='9' => {
                        entry_costs.insert(cell, u64::from(ch.to_digit(10).unwrap_or(1)));
                    }
                    _ => return Err(GridParseError::UnknownCell { row, col, ch }),
                }
            }
        }

        let start = single(&starts, 'S')?;
        let goal = single(&goals, 'G')?;
        let bounds = Rect::new(0, 0, to_coord(width) - 1, to_coord(rows.len()) - 1);

        Ok((
            Self {
                bounds,
                walls,
                entry_costs,
                goal,
            },
            start,
        ))
    }

    #[must_use]
    pub fn goal(&self) -> Point2d {
        self.goal
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    fn passable(&self, cell: Point2d) -> bool {
        self.bounds.contains(cell) && !self.walls.contains(&cell)
    }

    fn entry_cost(&self, cell: Point2d) -> u64 {
        self.entry_costs.get(&cell).copied().unwrap_or(1)
    }
}

fn to_coord(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn single(found: &[Point2d], marker: char) -> Result<Point2d, GridParseError> {
    match found {
        [one] => Ok(*one),
        _ => Err(GridParseError::MarkerCount {
            marker,
            count: found.len(),
        }),
    }
}

impl SearchSpace for GridWorld {
    type Node = Point2d;
    type Cost = u64;
    type Label = Vec2d;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "grid"
    }

    fn expand(&self, node: &Point2d) -> Vec<(Point2d, u64, Vec2d)> {
        Vec2d::ORTHOGONAL
            .iter()
            .map(|&step| (*node + step, step))
            .filter(|&(cell, _)| self.passable(cell))
            .map(|(cell, step)| (cell, self.entry_cost(cell), step))
            .collect()
    }

    fn is_goal(&self, node: &Point2d) -> bool {
        *node == self.goal
    }
}
