use std::error::Error;
use std::fmt;

use crate::cells::Cartesian3DCoordinate;
use crate::grid::Maze;

/// Misuse of the lattice primitives: the wall codec or the neighbour sampler.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MazeError {
    /// A wall only exists between two cells at Manhattan distance 1.
    InvalidAdjacency {
        a: Cartesian3DCoordinate,
        b: Cartesian3DCoordinate,
        distance: u64,
    },
    /// The lattice is a single cell so there is nowhere to step to.
    NoNeighbors(Cartesian3DCoordinate),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MazeError::InvalidAdjacency { a, b, distance } => {
                write!(f,
                       "cells {} and {} are not adjacent: Manhattan distance was {}, but only 1 allowed",
                       a,
                       b,
                       distance)
            }
            MazeError::NoNeighbors(cell) => write!(f, "cell {} has no neighbouring cells", cell),
        }
    }
}

impl Error for MazeError {}

/// Maze generation did not produce a spanning tree over every cell.
#[derive(Debug)]
pub enum GenerationError {
    /// The random walk budget ran out before every cell joined the tree.
    /// The partial maze is still loop free, but `unconnected_cells` cells are walled off.
    StepLimitExceeded {
        steps: usize,
        unconnected_cells: usize,
        maze: Box<Maze>,
    },
    Lattice(MazeError),
}

impl GenerationError {
    /// Take the best-effort maze out of a step limit failure.
    pub fn into_partial_maze(self) -> Option<Maze> {
        match self {
            GenerationError::StepLimitExceeded { maze, .. } => Some(*maze),
            GenerationError::Lattice(_) => None,
        }
    }
}

impl From<MazeError> for GenerationError {
    fn from(err: MazeError) -> GenerationError {
        GenerationError::Lattice(err)
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GenerationError::StepLimitExceeded { steps, unconnected_cells, .. } => {
                write!(f,
                       "step limit of {} random walk steps reached with {} cells unconnected",
                       steps,
                       unconnected_cells)
            }
            GenerationError::Lattice(ref err) => write!(f, "lattice error: {}", err),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            GenerationError::Lattice(ref err) => Some(err),
            GenerationError::StepLimitExceeded { .. } => None,
        }
    }
}
