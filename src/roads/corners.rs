//! Corner classification for junctions
//!
//! Each junction has four outer-corner cells at `(±half_width, ±half_width)`,
//! where the widened band turns. A corner marker is emitted only for
//! corner cells that ended up inside the road mask.

use crate::palette::TileKind;
use crate::roads::occupancy::GridOccupancy;
use crate::roads::types::{Cell, CornerMarker, Orientation};

/// The four corner cells of `junction`, in NE, NW, SW, SE order.
pub fn corner_cells(junction: Cell, half_width: i32) -> [(Orientation, Cell); 4] {
    Orientation::ALL.map(|o| {
        let (sx, sy) = o.signs();
        (o, junction.offset(sx * half_width, sy * half_width))
    })
}

/// Emit corner markers for every junction whose corner cell is road.
///
/// `tiles` is indexed by [`Orientation::index`].
pub fn classify_corners(
    junctions: &[Cell],
    mask: &GridOccupancy,
    half_width: i32,
    tiles: &[TileKind; 4],
) -> Vec<CornerMarker> {
    let mut markers = Vec::new();

    for &junction in junctions {
        for (orientation, cell) in corner_cells(junction, half_width) {
            if mask.contains(cell) {
                markers.push(CornerMarker {
                    junction,
                    orientation,
                    cell,
                    tile: tiles[orientation.index()].clone(),
                });
            }
        }
    }

    markers
}
