//! Start-point cleanup and skeleton widening

use log::debug;

use crate::roads::occupancy::GridOccupancy;
use crate::roads::types::Cell;

/// Remove every road cell in the square of `radius` around `origin`.
///
/// The first runs out of the origin can leave a stub that does not line up
/// with the rest of the network; clearing it leaves a clean spawn area.
/// Returns the number of cells removed.
pub fn clean_start_point(occupancy: &mut GridOccupancy, origin: Cell, radius: i32) -> usize {
    let mut removed = 0;
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if occupancy.remove(origin.offset(dx, dy)) {
                removed += 1;
            }
        }
    }
    debug!("cleared {} cells around start point {}", removed, origin);
    removed
}

/// Dilate the skeleton by a square of half-width `half_width`, clipped to
/// the map. The result always contains the skeleton itself.
pub fn widen_roads(skeleton: &GridOccupancy, half_width: i32, map_size: i32) -> GridOccupancy {
    let mut widened = GridOccupancy::new();

    for cell in skeleton.iter() {
        for dx in -half_width..=half_width {
            for dy in -half_width..=half_width {
                let wide = cell.offset(dx, dy);
                if wide.in_map(map_size) {
                    widened.add(wide);
                }
            }
        }
    }

    debug!(
        "widened {} skeleton cells into {} road cells",
        skeleton.count(),
        widened.count()
    );
    widened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_becomes_square() {
        let skeleton: GridOccupancy = [Cell::new(10, 10)].into_iter().collect();
        let mask = widen_roads(&skeleton, 2, 50);

        assert_eq!(mask.count(), 25);
        assert!(mask.contains(Cell::new(8, 8)));
        assert!(mask.contains(Cell::new(12, 12)));
        assert!(!mask.contains(Cell::new(13, 10)));
    }

    #[test]
    fn test_widening_clips_to_map() {
        let skeleton: GridOccupancy = [Cell::new(0, 0)].into_iter().collect();
        let mask = widen_roads(&skeleton, 1, 10);

        assert_eq!(mask.count(), 4);
        assert!(mask.iter().all(|c| c.in_map(10)));
    }

    #[test]
    fn test_widening_fills_inside_corner() {
        // L-shaped skeleton turning at (5, 5)
        let skeleton: GridOccupancy = (0..=5)
            .map(|x| Cell::new(x + 5, 5))
            .chain((0..=5).map(|y| Cell::new(5, y + 5)))
            .collect();
        let mask = widen_roads(&skeleton, 1, 20);

        assert!(mask.is_superset(&skeleton));
        assert!(mask.contains(Cell::new(6, 6)));
        assert!(mask.contains(Cell::new(4, 4)));
    }

    #[test]
    fn test_clean_start_point_removes_square_only() {
        let mut occ: GridOccupancy = (0..20).map(|x| Cell::new(x, 10)).collect();
        let removed = clean_start_point(&mut occ, Cell::new(10, 10), 2);

        assert_eq!(removed, 5);
        assert_eq!(occ.count(), 15);
        assert!(!occ.contains(Cell::new(12, 10)));
        assert!(occ.contains(Cell::new(13, 10)));
        assert!(occ.contains(Cell::new(7, 10)));
    }
}
