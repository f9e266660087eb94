use crate::palette::TilePalette;
use crate::roads::{Cell, RoadMap};
use crate::sinks::{InstantiationSink, TileSink};

/// Calls made while applying a road map
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub background_tiles: usize,
    pub road_tiles: usize,
    pub corner_tiles: usize,
    pub instances: usize,
}

/// Render a finished road map into the sinks.
///
/// Clears the tile sink, fills the background, paints the road mask, then
/// the corner markers, and finally requests one instance per landmark when
/// both a landmark prefab and an instantiation sink are present.
pub fn apply_road_map(
    map: &RoadMap,
    palette: &TilePalette,
    tiles: &mut dyn TileSink,
    instances: Option<&mut dyn InstantiationSink>,
) -> ApplyStats {
    let mut stats = ApplyStats::default();

    tiles.clear_all();

    if let Some(background) = &palette.background {
        for y in 0..map.map_size {
            for x in 0..map.map_size {
                tiles.set_tile(Cell::new(x, y), Some(background));
                stats.background_tiles += 1;
            }
        }
    }

    if let Some(road) = &palette.road {
        for cell in map.mask.sorted_cells() {
            tiles.set_tile(cell, Some(road));
            stats.road_tiles += 1;
        }
    }

    for marker in &map.corners {
        tiles.set_tile(marker.cell, Some(&marker.tile));
        stats.corner_tiles += 1;
    }

    if let (Some(prefab), Some(instances)) = (&palette.landmark, instances) {
        for landmark in &map.landmarks {
            let position = tiles.cell_to_world_center(landmark.cell);
            instances.instantiate(prefab, position);
            stats.instances += 1;
        }
    }

    stats
}
