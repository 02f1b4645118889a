use std::fmt;

use bit_set::BitSet;
use petgraph::{Graph, Undirected};
use petgraph::graph::NodeIndex;

use crate::cells::{self, Cartesian3DCoordinate, CoordinateSmallVec};
use crate::errors::MazeError;
use crate::grid_coordinates::{self, WallAddress};
use crate::grid_dimensions::LatticeDimensions;
use crate::grid_iterators::{LatticeCellIter, PassagesIter, WallAddressIter};

pub type PassageGraph = Graph<Cartesian3DCoordinate, (), Undirected, u32>;

/// A multi-level maze: the wall grid over a lattice of cells.
///
/// A maze is only built by the generators and has no public way to change it afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    dimensions: LatticeDimensions,
    // One bit per wall grid entry in `[bz][by][bx]` order, set when the entry is a wall.
    walls: BitSet,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Maze :: dimensions: {:?}, walls: {:?}, passages: {:?}",
               self.dimensions,
               self.walls_count(),
               self.passages_count())
    }
}

impl Maze {
    /// A maze with every entry of the wall grid set to a wall.
    pub(crate) fn walled(dimensions: LatticeDimensions) -> Maze {
        let entries = dimensions.wall_grid_len();
        let mut walls = BitSet::with_capacity(entries);
        for index in 0..entries {
            walls.insert(index);
        }
        Maze {
            dimensions: dimensions,
            walls: walls,
        }
    }

    /// Open a passage between two adjacent cells.
    pub(crate) fn carve(&mut self,
                        a: Cartesian3DCoordinate,
                        b: Cartesian3DCoordinate)
                        -> Result<(), MazeError> {
        let address = grid_coordinates::wall_between(a, b)?;
        if let Some(index) = grid_coordinates::address_to_index(address, &self.dimensions) {
            self.walls.remove(index);
        }
        Ok(())
    }

    #[inline]
    pub fn dimensions(&self) -> &LatticeDimensions {
        &self.dimensions
    }

    /// Number of cells in the lattice.
    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn walls_count(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn passages_count(&self) -> usize {
        self.dimensions.wall_grid_len() - self.walls.len()
    }

    /// Is there a wall at this entry of the wall grid? None if the address is outside the grid.
    pub fn is_wall_at(&self, address: WallAddress) -> Option<bool> {
        grid_coordinates::address_to_index(address, &self.dimensions)
            .map(|index| self.walls.contains(index))
    }

    /// Is there a wall between two adjacent cells?
    ///
    /// Cells outside the lattice are walled off from everything.
    pub fn is_wall(&self,
                   a: Cartesian3DCoordinate,
                   b: Cartesian3DCoordinate)
                   -> Result<bool, MazeError> {
        let address = grid_coordinates::wall_between(a, b)?;
        if !self.dimensions.is_valid_coordinate(a) || !self.dimensions.is_valid_coordinate(b) {
            return Ok(true);
        }
        Ok(self.is_wall_at(address).unwrap_or(true))
    }

    /// Are two cells joined by an open passage? False for non adjacent cells.
    pub fn is_linked(&self, a: Cartesian3DCoordinate, b: Cartesian3DCoordinate) -> bool {
        self.is_wall(a, b).map_or(false, |wall| !wall)
    }

    /// Cells reachable from `coord` through one open passage.
    pub fn links(&self, coord: Cartesian3DCoordinate) -> CoordinateSmallVec {
        cells::neighbours(coord, &self.dimensions)
            .iter()
            .cloned()
            .filter(|neighbour| self.is_linked(coord, *neighbour))
            .collect()
    }

    /// Cells adjacent to `coord`, linked by a passage or not.
    pub fn neighbours(&self, coord: Cartesian3DCoordinate) -> CoordinateSmallVec {
        cells::neighbours(coord, &self.dimensions)
    }

    /// All cells, level by level, row by row.
    pub fn iter(&self) -> LatticeCellIter {
        LatticeCellIter::new(self.dimensions)
    }

    /// Every entry of the wall grid in storage order.
    pub fn iter_wall_addresses(&self) -> WallAddressIter {
        WallAddressIter::new(self.dimensions)
    }

    /// The pairs of cells joined by an open passage.
    pub fn iter_passages(&self) -> PassagesIter<'_> {
        PassagesIter::new(self)
    }

    /// The passages as a graph with one node per cell, node indices in scan order.
    pub fn passage_graph(&self) -> PassageGraph {
        let mut graph = PassageGraph::with_capacity(self.size(), self.passages_count());
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_passages() {
            let a_index = self.dimensions.grid_coordinate_to_index(a);
            let b_index = self.dimensions.grid_coordinate_to_index(b);
            if let (Some(a_index), Some(b_index)) = (a_index, b_index) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    /// The wall grid as a nested `[bz][by][bx]` array, `true` for a wall.
    pub fn wall_array(&self) -> Vec<Vec<Vec<bool>>> {
        let d = &self.dimensions;
        (0..d.wall_slices_count())
            .map(|bz| {
                let rows = d.slice_rows(bz).unwrap_or(0);
                (0..rows)
                    .map(|by| {
                        let length = d.row_length(bz, by).unwrap_or(0);
                        (0..length)
                            .map(|bx| self.is_wall_at(WallAddress::new(bz, by, bx)).unwrap_or(true))
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}
