//! Road generation parameters and presets

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::roads::error::RoadError;
use crate::roads::types::Cell;

/// Generator tuning preset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadPreset {
    /// Long runs, few segments, wide separation between parallel roads
    Classic,
    /// Shorter runs and more segments for a congested layout
    #[default]
    Dense,
}

impl RoadPreset {
    pub fn all() -> &'static [Self] {
        &[Self::Classic, Self::Dense]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "Sparse grid of long avenues",
            Self::Dense => "Congested grid of short blocks",
        }
    }

    pub fn params(&self) -> RoadParams {
        match self {
            Self::Classic => RoadParams::classic(),
            Self::Dense => RoadParams::dense(),
        }
    }
}

impl std::fmt::Display for RoadPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Dense => write!(f, "dense"),
        }
    }
}

impl FromStr for RoadPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "dense" => Ok(Self::Dense),
            other => Err(format!("unknown preset '{}' (expected classic or dense)", other)),
        }
    }
}

/// Radius of the square scanned around each candidate cell for existing road
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionRadius {
    /// `road_width / 2 + 1`
    Tight,
    /// `road_width + 1`
    Wide,
    /// Explicit radius in cells
    Fixed(i32),
}

impl CollisionRadius {
    pub fn resolve(&self, road_width: i32) -> i32 {
        match *self {
            CollisionRadius::Tight => road_width / 2 + 1,
            CollisionRadius::Wide => road_width + 1,
            CollisionRadius::Fixed(r) => r,
        }
    }
}

/// Road network generation parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadParams {
    /// Side length of the square map in cells
    pub map_size: i32,
    /// Road width in cells after widening (>= 2)
    pub road_width: i32,
    /// Lower bound of the requested run length (inclusive).
    /// Also the number of steps a run takes before collision checks start.
    pub min_straight_length: i32,
    /// Upper bound of the requested run length (exclusive)
    pub max_straight_length: i32,
    /// Maximum number of accepted runs
    pub max_segments: usize,
    /// A run is accepted when it reaches further than
    /// `min_straight_length * acceptance_fraction` from its junction
    pub acceptance_fraction: f32,
    pub collision_radius: CollisionRadius,
    /// Drop landmark candidates already claimed by an earlier junction
    pub dedupe_landmarks: bool,
}

impl Default for RoadParams {
    fn default() -> Self {
        Self::dense()
    }
}

impl RoadParams {
    /// Congested layout: short runs, many segments
    pub fn dense() -> Self {
        Self {
            map_size: 200,
            road_width: 6,
            min_straight_length: 30,
            max_straight_length: 60,
            max_segments: 60,
            acceptance_fraction: 0.3,
            collision_radius: CollisionRadius::Tight,
            dedupe_landmarks: false,
        }
    }

    /// Sparse layout: long runs, fewer segments, wide separation
    pub fn classic() -> Self {
        Self {
            min_straight_length: 50,
            max_straight_length: 100,
            max_segments: 40,
            acceptance_fraction: 0.5,
            collision_radius: CollisionRadius::Wide,
            ..Self::dense()
        }
    }

    pub fn half_width(&self) -> i32 {
        self.road_width / 2
    }

    /// Distance from every map edge that runs may not enter
    pub fn boundary_margin(&self) -> i32 {
        self.half_width() + 3
    }

    pub fn collision_radius(&self) -> i32 {
        self.collision_radius.resolve(self.road_width)
    }

    /// Radius of the square cleared around the origin after growth
    pub fn clean_radius(&self) -> i32 {
        self.half_width() + 1
    }

    /// Diagonal offset of landmark candidates from their junction
    pub fn landmark_offset(&self) -> i32 {
        self.half_width() + 1
    }

    pub fn acceptance_threshold(&self) -> f32 {
        self.min_straight_length as f32 * self.acceptance_fraction
    }

    /// Map centre, where growth starts
    pub fn origin(&self) -> Cell {
        Cell::new(self.map_size / 2, self.map_size / 2)
    }

    /// Whether roads that pass the skeleton collision check may still touch
    /// once widened.
    pub fn collision_radius_is_tight(&self) -> bool {
        self.collision_radius() < self.half_width()
    }

    pub fn validate(&self) -> Result<(), RoadError> {
        if self.road_width < 2 {
            return Err(RoadError::invalid(
                "road_width",
                format!("must be at least 2, got {}", self.road_width),
            ));
        }
        if self.road_width > self.map_size {
            return Err(RoadError::invalid(
                "road_width",
                format!("must not exceed map_size ({}), got {}", self.map_size, self.road_width),
            ));
        }
        // i64: the bound overflows i32 for maps near i32::MAX
        let min_map = 2 * i64::from(self.boundary_margin());
        if i64::from(self.map_size) <= min_map {
            return Err(RoadError::invalid(
                "map_size",
                format!(
                    "must exceed twice the boundary margin ({}), got {}",
                    min_map, self.map_size
                ),
            ));
        }
        if self.min_straight_length <= 0 {
            return Err(RoadError::invalid(
                "min_straight_length",
                format!("must be positive, got {}", self.min_straight_length),
            ));
        }
        if self.max_straight_length <= self.min_straight_length {
            return Err(RoadError::invalid(
                "max_straight_length",
                format!(
                    "must exceed min_straight_length ({}), got {}",
                    self.min_straight_length, self.max_straight_length
                ),
            ));
        }
        if !self.acceptance_fraction.is_finite() || self.acceptance_fraction < 0.0 {
            return Err(RoadError::invalid(
                "acceptance_fraction",
                format!("must be a non-negative number, got {}", self.acceptance_fraction),
            ));
        }
        let radius = self.collision_radius();
        if radius < 0 || radius > self.map_size {
            return Err(RoadError::invalid(
                "collision_radius",
                format!("must be within [0, {}], got {}", self.map_size, radius),
            ));
        }
        Ok(())
    }
}
