//! Shared helpers for wayfind benchmark suites.
//!
//! A regime is a grid world plus a start cell, sized so that one search
//! expands on the order of `size * size` cells.

use wayfind_geometry::cart2d::{Point2d, Rect, Vec2d};
use wayfind_harness::runner::{run_world, RunReport};
use wayfind_harness::worlds::GridWorld;
use wayfind_search::{search_space, SearchPolicy, SearchRun};

/// A named benchmark input.
pub struct Regime {
    pub name: &'static str,
    pub world: GridWorld,
    pub start: Point2d,
    pub policy: SearchPolicy,
}

fn coord(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn far_corner(size: usize) -> Point2d {
    Point2d::new(coord(size) - 1, coord(size) - 1)
}

fn square(size: usize) -> Rect {
    Rect::from_points(Point2d::ORIGIN, far_corner(size))
}

/// An open `size`x`size` grid, corner to corner.
#[must_use]
pub fn open_grid(size: usize) -> GridWorld {
    GridWorld::new(square(size), far_corner(size))
}

/// A serpentine maze: every odd column is a wall with a single gap,
/// alternating between the bottom and the top row. `size` should be odd so
/// the goal corner is not walled.
#[must_use]
pub fn maze_grid(size: usize) -> GridWorld {
    let n = coord(size);
    let walls = (1..n).step_by(2).flat_map(move |x| {
        let gap = if (x / 2) % 2 == 0 { n - 1 } else { 0 };
        (0..n).filter(move |&y| y != gap).map(move |y| Point2d::new(x, y))
    });
    GridWorld::new(square(size), far_corner(size)).with_walls(walls)
}

/// An open grid whose entry costs follow a fixed 1..=9 pattern, so the
/// frontier sees many distinct costs and plenty of stale entries.
#[must_use]
pub fn weighted_grid(size: usize) -> GridWorld {
    square(size).points().fold(open_grid(size), |world, p| {
        let cost = (p.x * 7 + p.y * 13).rem_euclid(9) + 1;
        world.with_entry_cost(p, u64::try_from(cost).unwrap_or(1))
    })
}

/// The regimes the report harness measures.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let unbounded = SearchPolicy::default();
    vec![
        Regime {
            name: "open_64",
            world: open_grid(64),
            start: Point2d::ORIGIN,
            policy: unbounded,
        },
        Regime {
            name: "maze_65",
            world: maze_grid(65),
            start: Point2d::ORIGIN,
            policy: unbounded,
        },
        Regime {
            name: "weighted_64",
            world: weighted_grid(64),
            start: Point2d::ORIGIN,
            policy: unbounded,
        },
        Regime {
            name: "walled_off_64",
            world: open_grid(64).with_walls([Point2d::new(62, 63), Point2d::new(63, 62)]),
            start: Point2d::ORIGIN,
            policy: unbounded,
        },
        Regime {
            name: "budget_limited_64",
            world: open_grid(64),
            start: Point2d::ORIGIN,
            policy: SearchPolicy::with_max_expansions(1000),
        },
    ]
}

/// Run only the search engine for a regime.
///
/// # Panics
///
/// Panics if the regime's policy is invalid. Benchmark runs are expected to
/// succeed.
#[must_use]
pub fn run_search_only(regime: &Regime) -> SearchRun<Point2d, u64, Vec2d> {
    search_space(&regime.world, regime.start, &regime.policy)
        .expect("search should succeed in benchmarks")
}

/// Run the full harness pipeline (search, report, canonical hash).
///
/// # Panics
///
/// Panics if the run fails.
#[must_use]
pub fn run_report(regime: &Regime) -> RunReport {
    run_world(&regime.world, regime.start, &regime.policy).expect("run_world should succeed")
}
