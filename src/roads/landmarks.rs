//! Landmark placement next to junctions

use std::collections::HashSet;

use crate::roads::occupancy::GridOccupancy;
use crate::roads::types::{Cell, LandmarkPosition};

/// Diagonal candidate cells just outside the road band around `junction`.
pub fn landmark_candidates(junction: Cell, offset: i32) -> [Cell; 4] {
    [
        junction.offset(offset, offset),
        junction.offset(-offset, offset),
        junction.offset(offset, -offset),
        junction.offset(-offset, -offset),
    ]
}

/// Keep the candidates that are inside the map and not road.
///
/// Neighbouring junctions can produce the same candidate cell; both are
/// kept unless `dedupe` is set.
pub fn place_landmarks(
    junctions: &[Cell],
    mask: &GridOccupancy,
    offset: i32,
    map_size: i32,
    dedupe: bool,
) -> Vec<LandmarkPosition> {
    let mut seen: HashSet<Cell> = HashSet::new();
    let mut placed = Vec::new();

    for &junction in junctions {
        for cell in landmark_candidates(junction, offset) {
            if !cell.in_map(map_size) || mask.contains(cell) {
                continue;
            }
            if dedupe && !seen.insert(cell) {
                continue;
            }
            placed.push(LandmarkPosition { junction, cell });
        }
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_are_diagonal() {
        let c = landmark_candidates(Cell::new(10, 10), 4);
        assert_eq!(c, [Cell::new(14, 14), Cell::new(6, 14), Cell::new(14, 6), Cell::new(6, 6)]);
    }

    #[test]
    fn test_road_and_out_of_map_candidates_dropped() {
        let mut mask = GridOccupancy::new();
        mask.add(Cell::new(14, 14));

        let placed = place_landmarks(&[Cell::new(10, 10), Cell::new(12, 12)], &mask, 4, 15, false);

        // (14, 14) is road; three candidates of (12, 12) fall off a 15-cell map
        let cells: Vec<Cell> = placed.iter().map(|l| l.cell).collect();
        assert_eq!(
            cells,
            vec![Cell::new(6, 14), Cell::new(14, 6), Cell::new(6, 6), Cell::new(8, 8)]
        );
        assert_eq!(placed[3].junction, Cell::new(12, 12));
    }

    #[test]
    fn test_shared_candidates_kept_without_dedupe() {
        let junctions = [Cell::new(10, 10), Cell::new(18, 10)];
        let mask = GridOccupancy::new();

        let placed = place_landmarks(&junctions, &mask, 4, 40, false);
        assert_eq!(placed.len(), 8);
        let shared = placed.iter().filter(|l| l.cell == Cell::new(14, 14)).count();
        assert_eq!(shared, 2);

        let deduped = place_landmarks(&junctions, &mask, 4, 40, true);
        assert_eq!(deduped.len(), 6);
    }
}
