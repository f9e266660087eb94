//! Skeleton growth: straight runs grown from a frontier of junctions
//!
//! A run walks cell by cell in one direction until it reaches its requested
//! length, the boundary margin, or (after a grace period) comes within the
//! collision radius of road that is not part of the run itself. The frontier
//! loop decides which runs become new junctions and retires junctions that
//! cannot grow in any direction.

use log::{debug, trace};

use crate::roads::occupancy::GridOccupancy;
use crate::roads::params::RoadParams;
use crate::roads::rng::RandomSource;
use crate::roads::types::{Cell, Direction};

/// Spatial limits applied to every run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthLimits {
    pub map_size: i32,
    /// Cells closer than this to any edge are never committed
    pub boundary_margin: i32,
    pub collision_radius: i32,
    /// Steps taken before collision checks start
    pub collision_grace: i32,
}

impl GrowthLimits {
    pub fn from_params(params: &RoadParams) -> Self {
        Self {
            map_size: params.map_size,
            boundary_margin: params.boundary_margin(),
            collision_radius: params.collision_radius(),
            collision_grace: params.min_straight_length,
        }
    }

    /// Whether `cell` lies in `[margin, map_size - margin)` on both axes.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let lo = self.boundary_margin;
        let hi = self.map_size - self.boundary_margin;
        cell.x >= lo && cell.x < hi && cell.y >= lo && cell.y < hi
    }
}

/// Result of the frontier-driven growth loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthOutcome {
    /// Origin followed by the end cell of every accepted run
    pub junctions: Vec<Cell>,
    pub segments_created: usize,
    pub dead_ends: usize,
    /// Junctions still on the frontier when the loop stopped
    pub frontier_remaining: usize,
}

/// Whether `cell` lies on the run from `origin` covering `steps` cells.
fn on_run(origin: Cell, direction: Direction, steps: i32, cell: Cell) -> bool {
    let (dx, dy) = direction.delta();
    let rx = cell.x - origin.x;
    let ry = cell.y - origin.y;
    let k = rx * dx + ry * dy;
    k >= 0 && k <= steps && rx == dx * k && ry == dy * k
}

/// Grow one straight run from `origin` and return the last committed cell.
///
/// Every accepted step is written to `occupancy` immediately. A run that
/// stops early is truncated, not rolled back; the caller decides from the
/// returned cell whether the run counts. Returns `origin` when the very
/// first step is refused.
///
/// The collision scan deliberately skips the run's own cells; counting them
/// would stop every run one step after the grace period.
pub fn grow_segment(
    occupancy: &mut GridOccupancy,
    origin: Cell,
    direction: Direction,
    length: i32,
    limits: &GrowthLimits,
) -> Cell {
    let mut current = origin;

    for step in 0..length {
        let candidate = current.step(direction);

        if !limits.in_bounds(candidate) {
            return current;
        }

        if step > limits.collision_grace {
            let blocker = occupancy.find_in_square(candidate, limits.collision_radius, |c| {
                on_run(origin, direction, step, c)
            });
            if let Some(blocker) = blocker {
                trace!("run from {} stopped at {} by road at {}", origin, current, blocker);
                return current;
            }
        }

        occupancy.add(candidate);
        current = candidate;
    }

    current
}

/// Grow the skeleton from `origin` until the frontier empties or
/// `max_segments` runs have been accepted.
pub fn grow_network<R: RandomSource>(
    occupancy: &mut GridOccupancy,
    origin: Cell,
    params: &RoadParams,
    rng: &mut R,
) -> GrowthOutcome {
    let limits = GrowthLimits::from_params(params);
    let threshold = params.acceptance_threshold();

    let mut junctions = vec![origin];
    let mut frontier = vec![origin];
    let mut segments_created = 0;
    let mut dead_ends = 0;

    while !frontier.is_empty() && segments_created < params.max_segments {
        let pick = rng.next_int(0, frontier.len() as i32) as usize;
        let junction = frontier[pick];

        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        let mut accepted = false;
        for direction in directions {
            let length = rng.next_int(params.min_straight_length, params.max_straight_length);
            let end = grow_segment(occupancy, junction, direction, length, &limits);

            if junction.distance(end) > threshold {
                trace!("accepted {:?} run {} -> {}", direction, junction, end);
                junctions.push(end);
                frontier.push(end);
                segments_created += 1;
                accepted = true;
                break;
            }
        }

        if !accepted {
            frontier.remove(pick);
            dead_ends += 1;
        }
    }

    debug!(
        "growth finished: {} segments, {} dead ends, {} junctions left on frontier",
        segments_created,
        dead_ends,
        frontier.len()
    );

    GrowthOutcome {
        junctions,
        segments_created,
        dead_ends,
        frontier_remaining: frontier.len(),
    }
}
