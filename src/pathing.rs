use smallvec::SmallVec;

use crate::cells::Cartesian3DCoordinate;
use crate::grid::Maze;
use crate::utils::{self, FnvHashMap};


/// Steps from a start cell to every cell reachable from it through open passages.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Cartesian3DCoordinate,
    distances: FnvHashMap<Cartesian3DCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill the maze from `start_coordinate`. None if the start is not a cell of the maze.
    pub fn new(maze: &Maze, start_coordinate: Cartesian3DCoordinate) -> Option<Distances> {

        if !maze.dimensions().is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start_coordinate, 0);

        // Every link is one step, so the first time a cell is reached is along a shortest route
        // and the distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link_coordinate in maze.links(*cell_coord).iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate: start_coordinate,
            distances: distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cartesian3DCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Cartesian3DCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// Number of cells reachable from the start, the start included.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells at the maximum distance from the start, in scan order.
    pub fn furthest_points(&self) -> SmallVec<[Cartesian3DCoordinate; 8]> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == self.max_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[Cartesian3DCoordinate; 8]>>();
        furthest.sort_by_key(|c| (c.z, c.y, c.x));
        furthest
    }
}

/// Route from the start of `distances_from_start` to `end_point`, both ends included.
/// None if there is no such route.
pub fn shortest_path(maze: &Maze,
                     distances_from_start: &Distances,
                     end_point: Cartesian3DCoordinate)
                     -> Option<Vec<Cartesian3DCoordinate>> {

    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let mut current_coord = end_point;
    let mut path = vec![end_point];

    while current_distance > 0 {
        let closer = maze.links(current_coord)
            .iter()
            .cloned()
            .find(|linked| {
                distances_from_start.distance_from_start_to(*linked) == Some(current_distance - 1)
            })?;
        current_coord = closer;
        current_distance -= 1;
        path.push(current_coord);
    }

    path.reverse();
    Some(path)
}

/// The longest route through a perfect maze, found by two flood fills: the cell furthest from
/// an arbitrary cell is one end of a longest path, and the cell furthest from that is the other.
///
/// On a maze with loops or unreachable cells this is just some long path.
pub fn longest_path(maze: &Maze) -> Option<Vec<Cartesian3DCoordinate>> {
    let first_distances = Distances::new(maze, Cartesian3DCoordinate::new(0, 0, 0))?;
    let long_path_start = *first_distances.furthest_points().first()?;

    let distances_from_start = Distances::new(maze, long_path_start)?;
    let end_point = *distances_from_start.furthest_points().first()?;

    shortest_path(maze, &distances_from_start, end_point)
}
