//! Collaborator contracts for rendering and instantiation
//!
//! Generation itself never touches a sink. A finished [`RoadMap`] is
//! applied afterwards in one pass by [`apply::apply_road_map`].
//!
//! [`RoadMap`]: crate::roads::RoadMap

pub mod apply;
pub mod placements;
pub mod tile_grid;

use serde::{Deserialize, Serialize};

use crate::palette::{PrefabId, TileKind};
use crate::roads::Cell;

pub use apply::{apply_road_map, ApplyStats};
pub use placements::{Placement, PlacementLog};
pub use tile_grid::TileGrid;

/// A point in world space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

/// Surface that stores one tile per cell
pub trait TileSink {
    fn clear_all(&mut self);

    /// Set or clear (`None`) the tile at `cell`.
    fn set_tile(&mut self, cell: Cell, tile: Option<&TileKind>);

    fn get_tile(&self, cell: Cell) -> Option<TileKind>;

    /// World-space centre of `cell`.
    fn cell_to_world_center(&self, cell: Cell) -> WorldPos;
}

/// Receiver for object instantiation requests
pub trait InstantiationSink {
    fn instantiate(&mut self, prefab: &PrefabId, position: WorldPos);
}
