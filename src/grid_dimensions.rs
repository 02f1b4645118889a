use std::cmp;

use crate::cells::Cartesian3DCoordinate;
use crate::units::{EdgesCount, Height, Levels, NodesCount, Width};

/// Extent of a multi-level lattice and the shape of the wall grid laid over it.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct LatticeDimensions {
    width: Width,
    height: Height,
    levels: Levels,
}

impl LatticeDimensions {
    /// Width and height are clamped to at least 2 and levels to at least 1, so every
    /// cell of the lattice has a neighbour to walk to.
    pub fn new(width: Width, height: Height, levels: Levels) -> LatticeDimensions {
        LatticeDimensions {
            width: Width(cmp::max(width.0, 2)),
            height: Height(cmp::max(height.0, 2)),
            levels: Levels(cmp::max(levels.0, 1)),
        }
    }

    /// Unclamped dimensions, for exercising degenerate lattices.
    #[cfg(test)]
    pub(crate) fn exact(width: Width, height: Height, levels: Levels) -> LatticeDimensions {
        LatticeDimensions {
            width: width,
            height: height,
            levels: levels,
        }
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn levels(&self) -> Levels {
        self.levels
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0 * self.levels.0)
    }

    /// Number of interior walls, i.e. the edge count of the full lattice graph.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (w, h, l) = (self.width.0, self.height.0, self.levels.0);
        let x_edges = (w - 1) * h * l;
        let y_edges = w * (h - 1) * l;
        let z_edges = w * h * (l - 1);
        (self.size(), EdgesCount(x_edges + y_edges + z_edges))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian3DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0 &&
        (coord.z as usize) < self.levels.0
    }

    /// Position of a cell in scan order: `z` most significant, then `y`, then `x`.
    pub fn grid_coordinate_to_index(&self, coord: Cartesian3DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            let level_size = self.width.0 * self.height.0;
            Some(coord.z as usize * level_size + coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    pub fn index_to_grid_coordinate(&self, index: usize) -> Option<Cartesian3DCoordinate> {
        if index < self.size().0 {
            let level_size = self.width.0 * self.height.0;
            let z = index / level_size;
            let within_level = index % level_size;
            Some(Cartesian3DCoordinate::new((within_level % self.width.0) as u32,
                                            (within_level / self.width.0) as u32,
                                            z as u32))
        } else {
            None
        }
    }

    /// Number of slices in the wall grid: a floor below and a wall slice in every level,
    /// plus the ceiling of the top level.
    #[inline]
    pub fn wall_slices_count(&self) -> usize {
        2 * self.levels.0 + 1
    }

    /// Rows in slice `bz`, or None if there is no such slice.
    pub fn slice_rows(&self, bz: usize) -> Option<usize> {
        if bz >= self.wall_slices_count() {
            None
        } else if bz % 2 == 0 {
            Some(self.height.0)
        } else {
            Some(2 * self.height.0 + 1)
        }
    }

    /// Entries in row `by` of slice `bz`, or None if there is no such row.
    pub fn row_length(&self, bz: usize, by: usize) -> Option<usize> {
        match self.slice_rows(bz) {
            Some(rows) if by < rows => {
                if bz % 2 == 0 || by % 2 == 0 {
                    Some(self.width.0)
                } else {
                    Some(self.width.0 + 1)
                }
            }
            _ => None,
        }
    }

    /// Total number of entries in the wall grid.
    pub fn wall_grid_len(&self) -> usize {
        let floors = self.levels.0 + 1;
        floors * self.floor_slice_len() + self.levels.0 * self.wall_slice_len()
    }

    /// Offset of slice `bz` in the flattened wall grid.
    pub(crate) fn slice_offset(&self, bz: usize) -> usize {
        let slice_pair_len = self.floor_slice_len() + self.wall_slice_len();
        let offset = (bz / 2) * slice_pair_len;
        if bz % 2 == 0 {
            offset
        } else {
            offset + self.floor_slice_len()
        }
    }

    /// Offset of row `by` within its slice.
    pub(crate) fn row_offset(&self, bz: usize, by: usize) -> usize {
        let w = self.width.0;
        if bz % 2 == 0 {
            by * w
        } else {
            // Each pair of rows is a y wall row of `w` then an x wall row of `w + 1`.
            let offset = (by / 2) * (2 * w + 1);
            if by % 2 == 0 { offset } else { offset + w }
        }
    }

    #[inline]
    fn floor_slice_len(&self) -> usize {
        self.width.0 * self.height.0
    }

    #[inline]
    fn wall_slice_len(&self) -> usize {
        let (w, h) = (self.width.0, self.height.0);
        (h + 1) * w + h * (w + 1)
    }
}
