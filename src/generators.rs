use log::{debug, warn};
use rand::Rng;

use crate::cells::{self, Cartesian3DCoordinate};
use crate::errors::GenerationError;
use crate::grid::Maze;
use crate::grid_dimensions::LatticeDimensions;

/// Random walk steps allowed before Wilson's algorithm gives up.
pub const DEFAULT_STEP_LIMIT: usize = 1_000_000;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum CellState {
    Unvisited,
    InWalk,
    InTree,
}

/// Apply Wilson's algorithm to a fully walled lattice, producing a perfect maze.
///
/// Every cell not yet in the maze starts a random walk that ends when it steps onto a cell
/// already in the maze. Whenever the walk crosses its own path the loop it just made is erased,
/// so what remains is a simple path which is then carved into the maze. The result is a
/// uniformly sampled spanning tree of the lattice: exactly one route between any two cells.
///
/// The first walks are slow as they hunt for the single starting cell, but the maze grows
/// quickly once it covers more of the lattice.
///
/// If `step_limit` random walk steps are taken before every cell is connected the generation
/// stops with `GenerationError::StepLimitExceeded`, which carries the loop free maze built so
/// far. A walk still in progress when the limit is hit is discarded.
pub fn wilson<R>(dimensions: LatticeDimensions,
                 step_limit: usize,
                 rng: &mut R)
                 -> Result<Maze, GenerationError>
    where R: Rng + ?Sized
{
    let mut maze = Maze::walled(dimensions);
    let cells_count = dimensions.size().0;

    // Scan order indices into `states` and `walk_positions`.
    let index_of = |coord: Cartesian3DCoordinate| {
        dimensions.grid_coordinate_to_index(coord)
                  .expect("random walk left the lattice")
    };

    let mut states = vec![CellState::Unvisited; cells_count];
    // Where each InWalk cell sits on the current walk.
    let mut walk_positions = vec![0usize; cells_count];
    let mut walk: Vec<Cartesian3DCoordinate> = Vec::with_capacity(cells_count);

    states[0] = CellState::InTree;
    let mut free_cells = cells_count - 1;
    let mut next_unvisited = 1;
    let mut steps = 0;

    while free_cells > 0 && steps < step_limit {

        while next_unvisited < cells_count && states[next_unvisited] != CellState::Unvisited {
            next_unvisited += 1;
        }
        let start = match dimensions.index_to_grid_coordinate(next_unvisited) {
            Some(coord) => coord,
            None => break, // unreachable while free_cells counts the unvisited cells
        };

        walk.clear();
        let mut current = start;
        let mut current_index = next_unvisited;
        states[current_index] = CellState::InWalk;
        walk_positions[current_index] = 0;
        walk.push(current);

        while states[current_index] != CellState::InTree && steps < step_limit {
            current = cells::random_neighbour(rng, current, &dimensions)?;
            current_index = index_of(current);
            steps += 1;

            match states[current_index] {
                CellState::Unvisited => {
                    states[current_index] = CellState::InWalk;
                    walk_positions[current_index] = walk.len();
                    walk.push(current);
                }
                CellState::InWalk => {
                    // Erase the loop back to the first visit of this cell.
                    let keep = walk_positions[current_index] + 1;
                    for erased in walk.drain(keep..) {
                        states[index_of(erased)] = CellState::Unvisited;
                    }
                }
                CellState::InTree => {}
            }
        }

        if states[current_index] != CellState::InTree {
            for abandoned in walk.drain(..) {
                states[index_of(abandoned)] = CellState::Unvisited;
            }
            break;
        }

        // Commit the walk, joining its last cell to the maze cell it stepped onto.
        for (position, &coord) in walk.iter().enumerate() {
            states[index_of(coord)] = CellState::InTree;
            let successor = walk.get(position + 1).cloned().unwrap_or(current);
            maze.carve(coord, successor)?;
        }
        free_cells -= walk.len();
    }

    if free_cells > 0 {
        warn!("Wilson maze generation reached the step limit of {} with {} cells unconnected",
              step_limit,
              free_cells);
        return Err(GenerationError::StepLimitExceeded {
            steps: steps,
            unconnected_cells: free_cells,
            maze: Box::new(maze),
        });
    }

    debug!("Wilson maze generated: {:?} in {} random walk steps",
           dimensions,
           steps);
    Ok(maze)
}
