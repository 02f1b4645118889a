use std::fmt;

use crate::cells::Cartesian3DCoordinate;
use crate::grid::Maze;
use crate::grid_coordinates::{self, WallAddress};
use crate::grid_dimensions::LatticeDimensions;

/// Lattice cells in scan order: `x` fastest, then `y`, then `z`.
#[derive(Copy, Clone)]
pub struct LatticeCellIter {
    dimensions: LatticeDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl LatticeCellIter {
    pub fn new(dimensions: LatticeDimensions) -> LatticeCellIter {
        LatticeCellIter {
            dimensions: dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for LatticeCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "LatticeCellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for LatticeCellIter {} // default impl using size_hint()
impl Iterator for LatticeCellIter {
    type Item = Cartesian3DCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = self.dimensions.index_to_grid_coordinate(self.current_cell_number);
            self.current_cell_number += 1;
            coord
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Every address of the wall grid in `[bz][by][bx]` storage order.
#[derive(Debug, Copy, Clone)]
pub struct WallAddressIter {
    dimensions: LatticeDimensions,
    next_address: Option<WallAddress>,
}

impl WallAddressIter {
    pub fn new(dimensions: LatticeDimensions) -> WallAddressIter {
        WallAddressIter {
            dimensions: dimensions,
            next_address: Some(WallAddress::new(0, 0, 0)),
        }
    }

    fn following(&self, address: WallAddress) -> Option<WallAddress> {
        let WallAddress { bz, by, bx } = address;
        let d = &self.dimensions;
        if d.row_length(bz, by).map_or(false, |length| bx + 1 < length) {
            Some(WallAddress::new(bz, by, bx + 1))
        } else if d.slice_rows(bz).map_or(false, |rows| by + 1 < rows) {
            Some(WallAddress::new(bz, by + 1, 0))
        } else if bz + 1 < d.wall_slices_count() {
            Some(WallAddress::new(bz + 1, 0, 0))
        } else {
            None
        }
    }
}

impl Iterator for WallAddressIter {
    type Item = WallAddress;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next_address?;
        self.next_address = self.following(current);
        Some(current)
    }
}

/// Pairs of cells joined by an open passage, found by mapping each open wall grid entry back
/// to the cells on either side of it.
pub struct PassagesIter<'a> {
    maze: &'a Maze,
    addresses: WallAddressIter,
}

impl<'a> PassagesIter<'a> {
    pub fn new(maze: &'a Maze) -> PassagesIter<'a> {
        PassagesIter {
            maze: maze,
            addresses: WallAddressIter::new(*maze.dimensions()),
        }
    }
}

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PassagesIter :: addresses: {:?}", self.addresses)
    }
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (Cartesian3DCoordinate, Cartesian3DCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        let maze = self.maze;
        let dimensions = maze.dimensions();
        self.addresses
            .by_ref()
            .filter(|address| maze.is_wall_at(*address) == Some(false))
            .filter_map(|address| grid_coordinates::cells_either_side(address, dimensions))
            .next()
    }
}
