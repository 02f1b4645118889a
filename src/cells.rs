use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::errors::MazeError;
use crate::grid_dimensions::LatticeDimensions;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian3DCoordinate {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian3DCoordinate; 6]>;

impl Cartesian3DCoordinate {
    pub fn new(x: u32, y: u32, z: u32) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate { x: x, y: y, z: z }
    }

    pub fn manhattan_distance(&self, other: Cartesian3DCoordinate) -> u64 {
        abs_diff(self.x, other.x) + abs_diff(self.y, other.y) + abs_diff(self.z, other.z)
    }
}

impl From<(u32, u32, u32)> for Cartesian3DCoordinate {
    fn from(x_y_z: (u32, u32, u32)) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(x_y_z.0, x_y_z.1, x_y_z.2)
    }
}

impl fmt::Display for Cartesian3DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[inline]
fn abs_diff(a: u32, b: u32) -> u64 {
    u64::from(if a > b { a - b } else { b - a })
}

/// The six axis aligned steps between lattice cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum LatticeDirection {
    East,
    West,
    North,
    South,
    Up,
    Down,
}

pub const ALL_DIRECTIONS: [LatticeDirection; 6] = [LatticeDirection::East,
                                                   LatticeDirection::West,
                                                   LatticeDirection::North,
                                                   LatticeDirection::South,
                                                   LatticeDirection::Up,
                                                   LatticeDirection::Down];

/// Creates a new coordinate offset 1 cell away in the given direction.
/// Returns None if the result would leave the `u32` range; the lattice bounds are not checked here.
pub fn offset_coordinate(coord: Cartesian3DCoordinate,
                         dir: LatticeDirection)
                         -> Option<Cartesian3DCoordinate> {
    let Cartesian3DCoordinate { x, y, z } = coord;
    match dir {
        LatticeDirection::East => x.checked_add(1).map(|x| Cartesian3DCoordinate { x: x, ..coord }),
        LatticeDirection::West => x.checked_sub(1).map(|x| Cartesian3DCoordinate { x: x, ..coord }),
        LatticeDirection::North => y.checked_add(1).map(|y| Cartesian3DCoordinate { y: y, ..coord }),
        LatticeDirection::South => y.checked_sub(1).map(|y| Cartesian3DCoordinate { y: y, ..coord }),
        LatticeDirection::Up => z.checked_add(1).map(|z| Cartesian3DCoordinate { z: z, ..coord }),
        LatticeDirection::Down => z.checked_sub(1).map(|z| Cartesian3DCoordinate { z: z, ..coord }),
    }
}

/// Cells one step away from `coord` along an axis that lie inside the lattice.
pub fn neighbours(coord: Cartesian3DCoordinate,
                  dimensions: &LatticeDimensions)
                  -> CoordinateSmallVec {
    ALL_DIRECTIONS.iter()
        .filter_map(|dir| offset_coordinate(coord, *dir))
        .filter(|adjacent| dimensions.is_valid_coordinate(*adjacent))
        .collect()
}

/// Pick one of the neighbours of `coord` uniformly at random.
pub fn random_neighbour<R>(rng: &mut R,
                           coord: Cartesian3DCoordinate,
                           dimensions: &LatticeDimensions)
                           -> Result<Cartesian3DCoordinate, MazeError>
    where R: Rng + ?Sized
{
    neighbours(coord, dimensions)
        .choose(rng)
        .cloned()
        .ok_or(MazeError::NoNeighbors(coord))
}


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use crate::units::{Height, Levels, Width};

    fn dims(w: usize, h: usize, l: usize) -> LatticeDimensions {
        LatticeDimensions::new(Width(w), Height(h), Levels(l))
    }

    fn gc(x: u32, y: u32, z: u32) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(x, y, z)
    }

    #[test]
    fn manhattan_distances() {
        assert_eq!(gc(1, 1, 1).manhattan_distance(gc(1, 1, 1)), 0);
        assert_eq!(gc(1, 1, 1).manhattan_distance(gc(0, 1, 1)), 1);
        assert_eq!(gc(0, 0, 0).manhattan_distance(gc(2, 3, 1)), 6);
        assert_eq!(gc(2, 3, 1).manhattan_distance(gc(0, 0, 0)), 6);
        assert_eq!(gc(0, 0, 0).manhattan_distance(gc(u32::MAX, u32::MAX, u32::MAX)),
                   3 * u64::from(u32::MAX));
    }

    #[test]
    fn offsets_stop_at_zero() {
        assert_eq!(offset_coordinate(gc(0, 0, 0), LatticeDirection::West), None);
        assert_eq!(offset_coordinate(gc(0, 0, 0), LatticeDirection::South), None);
        assert_eq!(offset_coordinate(gc(0, 0, 0), LatticeDirection::Down), None);
        assert_eq!(offset_coordinate(gc(0, 0, 0), LatticeDirection::Up),
                   Some(gc(0, 0, 1)));
        assert_eq!(offset_coordinate(gc(1, 2, 3), LatticeDirection::West),
                   Some(gc(0, 2, 3)));
        assert_eq!(offset_coordinate(gc(1, 2, 3), LatticeDirection::North),
                   Some(gc(1, 3, 3)));
    }

    #[test]
    fn offsets_stop_at_max() {
        let corner = gc(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(offset_coordinate(corner, LatticeDirection::East), None);
        assert_eq!(offset_coordinate(corner, LatticeDirection::North), None);
        assert_eq!(offset_coordinate(corner, LatticeDirection::Up), None);
        assert_eq!(offset_coordinate(corner, LatticeDirection::West),
                   Some(gc(u32::MAX - 1, u32::MAX, u32::MAX)));
    }

    #[test]
    fn neighbour_cells() {
        let d = dims(3, 3, 3);

        let check_expected_neighbours = |coord, expected_neighbours: &[Cartesian3DCoordinate]| {
            let found: Vec<Cartesian3DCoordinate> =
                neighbours(coord, &d).iter().cloned().sorted().collect();
            let expected: Vec<Cartesian3DCoordinate> =
                expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(found, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0, 0), &[gc(1, 0, 0), gc(0, 1, 0), gc(0, 0, 1)]);
        check_expected_neighbours(gc(2, 2, 2), &[gc(1, 2, 2), gc(2, 1, 2), gc(2, 2, 1)]);

        // middle of a face
        check_expected_neighbours(gc(1, 1, 0),
                                  &[gc(0, 1, 0), gc(2, 1, 0), gc(1, 0, 0), gc(1, 2, 0),
                                    gc(1, 1, 1)]);

        // the centre has all six
        check_expected_neighbours(gc(1, 1, 1),
                                  &[gc(0, 1, 1), gc(2, 1, 1), gc(1, 0, 1), gc(1, 2, 1),
                                    gc(1, 1, 0), gc(1, 1, 2)]);
    }

    #[test]
    fn single_level_has_no_vertical_neighbours() {
        let d = dims(2, 2, 1);
        let found: Vec<_> = neighbours(gc(0, 0, 0), &d).iter().cloned().sorted().collect();
        assert_eq!(found, vec![gc(0, 1, 0), gc(1, 0, 0)]);
    }

    #[test]
    fn random_neighbour_reaches_every_candidate() {
        let d = dims(3, 3, 3);
        let mut rng = XorShiftRng::seed_from_u64(7);
        let centre = gc(1, 1, 1);
        let mut seen = Vec::new();
        for _ in 0..1000 {
            let next = random_neighbour(&mut rng, centre, &d).unwrap();
            assert_eq!(centre.manhattan_distance(next), 1);
            assert!(d.is_valid_coordinate(next));
            if !seen.contains(&next) {
                seen.push(next);
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn random_neighbour_in_single_cell_lattice_fails() {
        let d = LatticeDimensions::exact(Width(1), Height(1), Levels(1));
        let mut rng = XorShiftRng::seed_from_u64(1);
        assert_eq!(random_neighbour(&mut rng, gc(0, 0, 0), &d),
                   Err(MazeError::NoNeighbors(gc(0, 0, 0))));
    }
}
