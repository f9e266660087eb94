use std::collections::HashSet;

use crate::roads::types::Cell;

/// Set of cells currently marked as road.
///
/// Single source of truth for "is this cell road" during growth, widening
/// and corner classification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridOccupancy {
    cells: HashSet<Cell>,
}

impl GridOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Mark a cell as road. Returns `true` if it was not road before.
    pub fn add(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Unmark a cell. Returns `true` if it was road before.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Cells in row-major order, for output that must not depend on hashing.
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }

    pub fn is_superset(&self, other: &GridOccupancy) -> bool {
        self.cells.is_superset(&other.cells)
    }

    /// Find any road cell in the square of `radius` around `center` that
    /// is not excluded by `ignore`.
    pub fn find_in_square<F>(&self, center: Cell, radius: i32, ignore: F) -> Option<Cell>
    where
        F: Fn(Cell) -> bool,
    {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let probe = center.offset(dx, dy);
                if self.contains(probe) && !ignore(probe) {
                    return Some(probe);
                }
            }
        }
        None
    }
}

impl FromIterator<Cell> for GridOccupancy {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for GridOccupancy {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
