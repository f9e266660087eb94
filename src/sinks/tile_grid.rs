use crate::palette::TileKind;
use crate::roads::Cell;
use crate::sinks::{TileSink, WorldPos};
use crate::tilemap::Tilemap;

/// In-memory tile surface covering a square map.
///
/// Writes outside the map are dropped and reads outside it return `None`.
#[derive(Clone, Debug)]
pub struct TileGrid {
    tiles: Tilemap<Option<TileKind>>,
    cell_size: f32,
}

impl TileGrid {
    pub fn new(map_size: usize) -> Self {
        Self::with_cell_size(map_size, 1.0)
    }

    pub fn with_cell_size(map_size: usize, cell_size: f32) -> Self {
        Self {
            tiles: Tilemap::new(map_size, map_size),
            cell_size,
        }
    }

    pub fn size(&self) -> usize {
        self.tiles.width
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Borrow the tile at `cell` without cloning.
    pub fn tile(&self, cell: Cell) -> Option<&TileKind> {
        self.tiles.get_checked(cell.x, cell.y).and_then(|t| t.as_ref())
    }

    pub fn count(&self, kind: &TileKind) -> usize {
        self.tiles
            .iter()
            .filter(|(_, _, t)| matches!(t, Some(k) if k == kind))
            .count()
    }

    /// Cells holding `kind`, row-major.
    pub fn cells_with<'a>(&'a self, kind: &'a TileKind) -> impl Iterator<Item = Cell> + 'a {
        self.tiles
            .iter()
            .filter(move |(_, _, t)| matches!(t, Some(k) if k == kind))
            .map(|(x, y, _)| Cell::new(x as i32, y as i32))
    }
}

impl TileSink for TileGrid {
    fn clear_all(&mut self) {
        self.tiles.fill(None);
    }

    fn set_tile(&mut self, cell: Cell, tile: Option<&TileKind>) {
        self.tiles.set_checked(cell.x, cell.y, tile.cloned());
    }

    fn get_tile(&self, cell: Cell) -> Option<TileKind> {
        self.tile(cell).cloned()
    }

    fn cell_to_world_center(&self, cell: Cell) -> WorldPos {
        WorldPos {
            x: (cell.x as f32 + 0.5) * self.cell_size,
            y: (cell.y as f32 + 0.5) * self.cell_size,
        }
    }
}
