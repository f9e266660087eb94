//! Generation orchestrator
//!
//! Sequences one full pass:
//! 1. Validate configuration and collaborators (nothing is touched on failure)
//! 2. Grow the skeleton from the map centre
//! 3. Clear the start point
//! 4. Widen the skeleton into the road mask
//! 5. Classify corners and place landmarks
//! 6. Apply the finished map to the sinks, if any were supplied

use log::{debug, error, info, warn};

use crate::palette::TilePalette;
use crate::roads::corners::classify_corners;
use crate::roads::error::RoadError;
use crate::roads::growth::grow_network;
use crate::roads::landmarks::place_landmarks;
use crate::roads::occupancy::GridOccupancy;
use crate::roads::params::RoadParams;
use crate::roads::rng::RandomSource;
use crate::roads::types::{GenerationStats, RoadMap};
use crate::roads::widen::{clean_start_point, widen_roads};
use crate::sinks::{apply_road_map, InstantiationSink, TileSink};

/// Road network generator holding its configuration.
///
/// Every call recomputes all state from scratch; nothing carries over
/// between runs, so the generator can be invoked repeatedly.
#[derive(Clone, Debug, Default)]
pub struct RoadGenerator {
    params: RoadParams,
    palette: TilePalette,
}

impl RoadGenerator {
    pub fn new(params: RoadParams, palette: TilePalette) -> Self {
        Self { params, palette }
    }

    pub fn params(&self) -> &RoadParams {
        &self.params
    }

    pub fn palette(&self) -> &TilePalette {
        &self.palette
    }

    /// Check parameters and required palette entries.
    pub fn validate(&self) -> Result<(), RoadError> {
        if self.palette.road.is_none() {
            return Err(RoadError::MissingRoadTile);
        }
        self.params.validate()
    }

    /// Compute a road map without touching any sink.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<RoadMap, RoadError> {
        if let Err(e) = self.validate() {
            error!("road generation aborted: {}", e);
            return Err(e);
        }

        let params = &self.params;
        if params.collision_radius_is_tight() {
            warn!(
                "collision radius {} is below half the road width ({}); widened roads may merge",
                params.collision_radius(),
                params.half_width()
            );
        }

        let origin = params.origin();
        let mut occupancy = GridOccupancy::new();

        let growth = grow_network(&mut occupancy, origin, params, rng);
        let cleared_cells = clean_start_point(&mut occupancy, origin, params.clean_radius());

        let skeleton = occupancy;
        let mask = widen_roads(&skeleton, params.half_width(), params.map_size);

        let corners = match self.palette.corner_set() {
            Some(tiles) => classify_corners(&growth.junctions, &mask, params.half_width(), &tiles),
            None => {
                warn!("corner tile set incomplete, skipping corner markers");
                Vec::new()
            }
        };

        let landmarks = if self.palette.landmark.is_some() {
            place_landmarks(
                &growth.junctions,
                &mask,
                params.landmark_offset(),
                params.map_size,
                params.dedupe_landmarks,
            )
        } else {
            warn!("no landmark prefab assigned, skipping landmark placement");
            Vec::new()
        };

        let stats = GenerationStats {
            segments_created: growth.segments_created,
            dead_ends: growth.dead_ends,
            cleared_cells,
            skeleton_cells: skeleton.count(),
            road_cells: mask.count(),
        };

        info!(
            "road map generated: {} road tiles, {} junctions",
            stats.road_cells,
            growth.junctions.len()
        );
        debug!(
            "{} corner markers, {} landmarks, {} dead ends",
            corners.len(),
            landmarks.len(),
            stats.dead_ends
        );

        Ok(RoadMap {
            map_size: params.map_size,
            road_width: params.road_width,
            origin,
            skeleton,
            mask,
            junctions: growth.junctions,
            corners,
            landmarks,
            stats,
        })
    }

    /// Full entry point: validate, generate, then render into the sinks.
    ///
    /// Fails before any sink call when the tile sink or road tile is missing
    /// or the parameters are invalid.
    pub fn generate_road_map<R: RandomSource>(
        &self,
        rng: &mut R,
        tiles: Option<&mut dyn TileSink>,
        instances: Option<&mut dyn InstantiationSink>,
    ) -> Result<RoadMap, RoadError> {
        let Some(tiles) = tiles else {
            error!("road generation aborted: {}", RoadError::MissingTileSink);
            return Err(RoadError::MissingTileSink);
        };

        let map = self.generate(rng)?;
        let applied = apply_road_map(&map, &self.palette, tiles, instances);
        info!(
            "applied {} tiles ({} road, {} corner), {} landmark instances",
            applied.background_tiles + applied.road_tiles + applied.corner_tiles,
            applied.road_tiles,
            applied.corner_tiles,
            applied.instances
        );
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::TileKind;
    use crate::roads::growth::GrowthLimits;
    use crate::roads::types::Cell;
    use crate::sinks::{PlacementLog, TileGrid, WorldPos};
    use quickcheck::{QuickCheck, TestResult};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Tile sink that counts calls instead of storing tiles
    #[derive(Default)]
    struct CountingSink {
        clears: usize,
        sets: Vec<(Cell, Option<TileKind>)>,
    }

    impl TileSink for CountingSink {
        fn clear_all(&mut self) {
            self.clears += 1;
        }

        fn set_tile(&mut self, cell: Cell, tile: Option<&TileKind>) {
            self.sets.push((cell, tile.cloned()));
        }

        fn get_tile(&self, _cell: Cell) -> Option<TileKind> {
            None
        }

        fn cell_to_world_center(&self, cell: Cell) -> WorldPos {
            WorldPos { x: cell.x as f32, y: cell.y as f32 }
        }
    }

    fn scenario_params() -> RoadParams {
        RoadParams {
            map_size: 50,
            road_width: 6,
            min_straight_length: 10,
            max_straight_length: 15,
            max_segments: 5,
            ..RoadParams::dense()
        }
    }

    fn small_params() -> RoadParams {
        RoadParams {
            map_size: 80,
            road_width: 4,
            min_straight_length: 8,
            max_straight_length: 16,
            max_segments: 20,
            ..RoadParams::dense()
        }
    }

    #[test]
    fn test_scenario_small_map() {
        let generator = RoadGenerator::new(scenario_params(), TilePalette::default());

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let map = generator.generate(&mut rng).unwrap();

            assert_eq!(map.origin, Cell::new(25, 25));
            assert_eq!(map.junctions[0], Cell::new(25, 25));
            assert!(map.junctions.len() <= 6);
            assert!(map.mask.iter().all(|c| c.in_map(50)));
        }
    }

    #[test]
    fn test_deterministic() {
        let generator = RoadGenerator::new(RoadParams::dense(), TilePalette::default());

        let a = generator.generate(&mut ChaCha8Rng::seed_from_u64(123)).unwrap();
        let b = generator.generate(&mut ChaCha8Rng::seed_from_u64(123)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = RoadGenerator::new(RoadParams::dense(), TilePalette::default());

        let a = generator.generate(&mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let b = generator.generate(&mut ChaCha8Rng::seed_from_u64(2)).unwrap();

        assert_ne!(a.mask, b.mask);
    }

    #[test]
    fn test_repeated_runs_reset_state() {
        let generator = RoadGenerator::new(small_params(), TilePalette::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut grid = TileGrid::new(80);

        let first = generator.generate_road_map(&mut rng, Some(&mut grid), None).unwrap();
        let second = generator.generate_road_map(&mut rng, Some(&mut grid), None).unwrap();

        let road = TileKind::new("road");
        let corner_tiles: usize = TilePalette::default()
            .corners
            .iter()
            .flatten()
            .map(|t| grid.count(t))
            .sum();
        assert_eq!(grid.count(&road) + corner_tiles, second.road_cell_count());
        assert_eq!(first.junctions[0], second.junctions[0]);
    }

    #[test]
    fn test_mask_contains_skeleton() {
        let generator = RoadGenerator::new(RoadParams::classic(), TilePalette::default());
        let map = generator.generate(&mut ChaCha8Rng::seed_from_u64(77)).unwrap();

        assert!(map.mask.is_superset(&map.skeleton));
        assert!(map.mask.count() >= map.skeleton.count());
    }

    #[test]
    fn test_origin_is_cleared() {
        let params = small_params();
        let generator = RoadGenerator::new(params.clone(), TilePalette::default());
        let map = generator.generate(&mut ChaCha8Rng::seed_from_u64(9)).unwrap();

        let r = params.clean_radius();
        for dx in -r..=r {
            for dy in -r..=r {
                assert!(!map.skeleton.contains(map.origin.offset(dx, dy)));
            }
        }
    }

    #[test]
    fn test_corner_markers_sit_on_road() {
        let generator = RoadGenerator::new(RoadParams::dense(), TilePalette::default());
        let map = generator.generate(&mut ChaCha8Rng::seed_from_u64(31)).unwrap();

        assert!(!map.corners.is_empty());
        for marker in &map.corners {
            assert!(map.mask.contains(marker.cell));
            let (sx, sy) = marker.orientation.signs();
            assert_eq!(marker.cell, marker.junction.offset(sx * 3, sy * 3));
        }
    }

    #[test]
    fn test_width_two_corner_offsets() {
        let params = RoadParams { road_width: 2, ..small_params() };
        let generator = RoadGenerator::new(params, TilePalette::default());
        let map = generator.generate(&mut ChaCha8Rng::seed_from_u64(4)).unwrap();

        for marker in &map.corners {
            let d = (marker.cell.x - marker.junction.x, marker.cell.y - marker.junction.y);
            assert!(d.0.abs() == 1 && d.1.abs() == 1);
            assert!(map.mask.contains(marker.cell));
        }
    }

    #[test]
    fn test_landmarks_off_road_and_in_map() {
        let generator = RoadGenerator::new(RoadParams::dense(), TilePalette::default());
        let map = generator.generate(&mut ChaCha8Rng::seed_from_u64(8)).unwrap();

        assert!(!map.landmarks.is_empty());
        for landmark in &map.landmarks {
            assert!(landmark.cell.in_map(map.map_size));
            assert!(!map.mask.contains(landmark.cell));
        }
    }

    #[test]
    fn test_incomplete_corner_set_skips_markers() {
        let mut palette = TilePalette::default();
        palette.corners[2] = None;
        let generator = RoadGenerator::new(small_params(), palette);

        let mut sink = CountingSink::default();
        let map = generator
            .generate_road_map(&mut ChaCha8Rng::seed_from_u64(3), Some(&mut sink), None)
            .unwrap();

        assert!(map.corners.is_empty());
        let corner_sets = sink
            .sets
            .iter()
            .filter(|(_, t)| matches!(t, Some(k) if k.name().starts_with("corner")))
            .count();
        assert_eq!(corner_sets, 0);

        // Road mask is the same as with a full palette
        let full = RoadGenerator::new(small_params(), TilePalette::default())
            .generate(&mut ChaCha8Rng::seed_from_u64(3))
            .unwrap();
        assert_eq!(map.mask, full.mask);
    }

    #[test]
    fn test_no_landmark_prefab_still_succeeds() {
        let palette = TilePalette { landmark: None, ..TilePalette::default() };
        let generator = RoadGenerator::new(small_params(), palette);
        let mut grid = TileGrid::new(80);
        let mut log = PlacementLog::new();

        let result = generator.generate_road_map(
            &mut ChaCha8Rng::seed_from_u64(3),
            Some(&mut grid),
            Some(&mut log),
        );

        assert!(result.is_ok());
        assert!(log.is_empty());
        assert!(result.unwrap().landmarks.is_empty());
    }

    #[test]
    fn test_one_instance_per_landmark() {
        let generator = RoadGenerator::new(small_params(), TilePalette::default());
        let mut grid = TileGrid::new(80);
        let mut log = PlacementLog::new();

        let map = generator
            .generate_road_map(&mut ChaCha8Rng::seed_from_u64(12), Some(&mut grid), Some(&mut log))
            .unwrap();

        assert_eq!(log.len(), map.landmarks.len());
    }

    #[test]
    fn test_missing_tile_sink_aborts() {
        let generator = RoadGenerator::new(small_params(), TilePalette::default());
        let mut log = PlacementLog::new();

        let result = generator.generate_road_map(&mut ChaCha8Rng::seed_from_u64(1), None, Some(&mut log));

        assert_eq!(result, Err(RoadError::MissingTileSink));
        assert!(log.is_empty());
    }

    #[test]
    fn test_missing_road_tile_leaves_sink_untouched() {
        let palette = TilePalette { road: None, ..TilePalette::default() };
        let generator = RoadGenerator::new(small_params(), palette);
        let mut sink = CountingSink::default();

        let result = generator.generate_road_map(&mut ChaCha8Rng::seed_from_u64(1), Some(&mut sink), None);

        assert_eq!(result, Err(RoadError::MissingRoadTile));
        assert_eq!(sink.clears, 0);
        assert!(sink.sets.is_empty());
    }

    #[test]
    fn test_invalid_params_leave_sink_untouched() {
        let params = RoadParams { road_width: 1, ..small_params() };
        let generator = RoadGenerator::new(params, TilePalette::default());
        let mut sink = CountingSink::default();

        let result = generator.generate_road_map(&mut ChaCha8Rng::seed_from_u64(1), Some(&mut sink), None);

        assert!(matches!(result, Err(RoadError::InvalidConfig { .. })));
        assert_eq!(sink.clears, 0);
    }

    #[test]
    fn test_zero_segments_yields_bare_origin() {
        let params = RoadParams { max_segments: 0, ..small_params() };
        let generator = RoadGenerator::new(params.clone(), TilePalette::default());
        let map = generator.generate(&mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert_eq!(map.junctions, vec![params.origin()]);
        assert!(map.mask.is_empty());
        assert!(map.corners.is_empty());
        // All four diagonal candidates around the origin are free grass
        assert_eq!(map.landmarks.len(), 4);
    }

    #[test]
    fn test_sink_sees_clear_before_tiles() {
        let generator = RoadGenerator::new(small_params(), TilePalette::default());
        let mut sink = CountingSink::default();

        let map = generator
            .generate_road_map(&mut ChaCha8Rng::seed_from_u64(2), Some(&mut sink), None)
            .unwrap();

        assert_eq!(sink.clears, 1);
        let expected = (80 * 80) + map.road_cell_count() + map.corners.len();
        assert_eq!(sink.sets.len(), expected);
    }

    #[test]
    fn test_apply_stats_match_sink_calls() {
        let generator = RoadGenerator::new(small_params(), TilePalette::default());
        let map = generator.generate(&mut ChaCha8Rng::seed_from_u64(6)).unwrap();

        let mut sink = CountingSink::default();
        let mut log = PlacementLog::new();
        let applied = apply_road_map(&map, generator.palette(), &mut sink, Some(&mut log));

        assert_eq!(
            applied.background_tiles + applied.road_tiles + applied.corner_tiles,
            sink.sets.len()
        );
        assert_eq!(applied.road_tiles, map.road_cell_count());
        assert_eq!(applied.corner_tiles, map.corners.len());
        assert_eq!(applied.instances, log.len());
    }

    #[test]
    fn quickcheck_generated_maps_stay_in_bounds() {
        fn prop(seed: u64, width: u8) -> TestResult {
            let road_width = 2 + (width % 6) as i32;
            let params = RoadParams { road_width, ..small_params() };
            let generator = RoadGenerator::new(params.clone(), TilePalette::default());
            let Ok(map) = generator.generate(&mut ChaCha8Rng::seed_from_u64(seed)) else {
                return TestResult::discard();
            };

            let limits = GrowthLimits::from_params(&params);
            let skeleton_ok = map.skeleton.iter().all(|c| limits.in_bounds(c));
            let mask_ok = map.mask.iter().all(|c| c.in_map(params.map_size));
            let superset = map.mask.is_superset(&map.skeleton);
            let capped = map.stats.segments_created <= params.max_segments
                && map.junctions.len() == map.stats.segments_created + 1;

            TestResult::from_bool(skeleton_ok && mask_ok && superset && capped)
        }

        QuickCheck::new()
            .tests(40)
            .quickcheck(prop as fn(u64, u8) -> TestResult);
    }

    #[test]
    fn quickcheck_same_seed_same_map() {
        fn prop(seed: u64) -> bool {
            let generator = RoadGenerator::new(small_params(), TilePalette::default());
            let a = generator.generate(&mut ChaCha8Rng::seed_from_u64(seed));
            let b = generator.generate(&mut ChaCha8Rng::seed_from_u64(seed));
            a == b
        }

        QuickCheck::new().tests(20).quickcheck(prop as fn(u64) -> bool);
    }
}
