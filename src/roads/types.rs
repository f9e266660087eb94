//! Core road network types
//!
//! Defines grid cells, growth directions, corner orientations and the
//! finished [`RoadMap`] handed to rendering and instantiation sinks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::palette::TileKind;
use crate::roads::occupancy::GridOccupancy;

/// Integer grid coordinate. `y` grows northwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Euclidean distance between two cells.
    pub fn distance(self, other: Cell) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether the cell lies inside a square map of side `map_size`.
    pub fn in_map(self, map_size: i32) -> bool {
        self.x >= 0 && self.x < map_size && self.y >= 0 && self.y < map_size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal growth direction of a straight run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Right, Direction::Left];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }
}

/// Diagonal orientation of a junction corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Orientation {
    /// Fixed classification order; corner tile sets are indexed the same way.
    pub const ALL: [Orientation; 4] = [
        Orientation::NorthEast,
        Orientation::NorthWest,
        Orientation::SouthWest,
        Orientation::SouthEast,
    ];

    /// Unit signs of the corner offset along x and y.
    pub fn signs(self) -> (i32, i32) {
        match self {
            Orientation::NorthEast => (1, 1),
            Orientation::NorthWest => (-1, 1),
            Orientation::SouthWest => (-1, -1),
            Orientation::SouthEast => (1, -1),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Orientation::NorthEast => 0,
            Orientation::NorthWest => 1,
            Orientation::SouthWest => 2,
            Orientation::SouthEast => 3,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Orientation::NorthEast => "NE",
            Orientation::NorthWest => "NW",
            Orientation::SouthWest => "SW",
            Orientation::SouthEast => "SE",
        }
    }
}

/// A corner tile emitted for one junction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerMarker {
    pub junction: Cell,
    pub orientation: Orientation,
    pub cell: Cell,
    pub tile: TileKind,
}

/// A non-road cell next to a junction where a landmark gets instantiated.
///
/// The world-space point is resolved by the tile sink when the map is
/// applied, since only the sink knows the cell layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkPosition {
    pub junction: Cell,
    pub cell: Cell,
}

/// Counters collected over one generation pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Accepted straight runs
    pub segments_created: usize,
    /// Junctions retired after all four directions failed
    pub dead_ends: usize,
    /// Skeleton cells removed around the origin
    pub cleared_cells: usize,
    /// Skeleton cells left after cleanup
    pub skeleton_cells: usize,
    /// Cells in the widened mask
    pub road_cells: usize,
}

/// The finished result of one generation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadMap {
    pub map_size: i32,
    pub road_width: i32,
    pub origin: Cell,
    /// One-cell-wide path graph after start-point cleanup
    pub skeleton: GridOccupancy,
    /// Skeleton dilated to full road width
    pub mask: GridOccupancy,
    /// Every segment start/end in creation order, origin first
    pub junctions: Vec<Cell>,
    pub corners: Vec<CornerMarker>,
    pub landmarks: Vec<LandmarkPosition>,
    pub stats: GenerationStats,
}

impl RoadMap {
    pub fn is_road(&self, cell: Cell) -> bool {
        self.mask.contains(cell)
    }

    pub fn road_cell_count(&self) -> usize {
        self.mask.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_follows_direction() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
    }

    #[test]
    fn test_distance_is_euclidean() {
        assert_eq!(Cell::new(0, 0).distance(Cell::new(3, 4)), 5.0);
        assert_eq!(Cell::new(2, 2).distance(Cell::new(2, 2)), 0.0);
    }

    #[test]
    fn test_orientation_order_matches_index() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
        assert_eq!(Orientation::NorthWest.signs(), (-1, 1));
    }

    #[test]
    fn test_in_map_bounds() {
        assert!(Cell::new(0, 0).in_map(10));
        assert!(Cell::new(9, 9).in_map(10));
        assert!(!Cell::new(10, 3).in_map(10));
        assert!(!Cell::new(-1, 3).in_map(10));
    }
}
