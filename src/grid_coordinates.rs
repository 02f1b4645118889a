//! Mapping between pairs of adjacent lattice cells and the wall grid entry separating them.
//!
//! The wall grid is indexed `[bz][by][bx]`. Even `bz` slices are floors (the boundary between
//! level `bz / 2 - 1` and level `bz / 2`), one entry per column of cells. Odd `bz` slices hold
//! the walls inside level `bz / 2`: even `by` rows separate y neighbours and odd `by` rows,
//! one entry longer, separate x neighbours.

use std::cmp;
use std::fmt;

use crate::cells::Cartesian3DCoordinate;
use crate::errors::MazeError;
use crate::grid_dimensions::LatticeDimensions;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct WallAddress {
    pub bz: usize,
    pub by: usize,
    pub bx: usize,
}

impl WallAddress {
    pub fn new(bz: usize, by: usize, bx: usize) -> WallAddress {
        WallAddress { bz: bz, by: by, bx: bx }
    }
}

impl fmt::Display for WallAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}][{}][{}]", self.bz, self.by, self.bx)
    }
}

/// The wall grid address of the boundary between two adjacent cells.
///
/// The result does not depend on the argument order.
pub fn wall_between(a: Cartesian3DCoordinate,
                    b: Cartesian3DCoordinate)
                    -> Result<WallAddress, MazeError> {

    let distance = a.manhattan_distance(b);
    if distance != 1 {
        return Err(MazeError::InvalidAdjacency {
            a: a,
            b: b,
            distance: distance,
        });
    }

    let address = if a.x != b.x {
        WallAddress::new(2 * a.z as usize + 1,
                         2 * a.y as usize + 1,
                         cmp::max(a.x, b.x) as usize)
    } else if a.y != b.y {
        WallAddress::new(2 * a.z as usize + 1,
                         2 * cmp::max(a.y, b.y) as usize,
                         a.x as usize)
    } else {
        WallAddress::new(2 * cmp::max(a.z, b.z) as usize, a.y as usize, a.x as usize)
    };
    Ok(address)
}

/// Is the address inside the wall grid of a lattice with these dimensions?
pub fn is_valid_address(address: WallAddress, dimensions: &LatticeDimensions) -> bool {
    dimensions.row_length(address.bz, address.by)
              .map_or(false, |length| address.bx < length)
}

/// Position of the address in the flattened `[bz][by][bx]` wall grid.
pub fn address_to_index(address: WallAddress, dimensions: &LatticeDimensions) -> Option<usize> {
    if is_valid_address(address, dimensions) {
        Some(dimensions.slice_offset(address.bz) + dimensions.row_offset(address.bz, address.by) +
             address.bx)
    } else {
        None
    }
}

/// The two cells separated by an interior wall, lower coordinate first.
///
/// Returns None for walls on the outside of the lattice (the outer walls of each level, the
/// floor of the bottom level and the ceiling of the top level) and for invalid addresses.
pub fn cells_either_side(address: WallAddress,
                         dimensions: &LatticeDimensions)
                         -> Option<(Cartesian3DCoordinate, Cartesian3DCoordinate)> {

    if !is_valid_address(address, dimensions) {
        return None;
    }

    let WallAddress { bz, by, bx } = address;
    let (x, y, z) = (bx as u32, by as u32, bz as u32);

    let pair = if bz % 2 == 0 {
        if bz == 0 || bz == dimensions.wall_slices_count() - 1 {
            return None;
        }
        (Cartesian3DCoordinate::new(x, y, z / 2 - 1), Cartesian3DCoordinate::new(x, y, z / 2))
    } else if by % 2 == 1 {
        if bx == 0 || bx == dimensions.width().0 {
            return None;
        }
        (Cartesian3DCoordinate::new(x - 1, y / 2, z / 2),
         Cartesian3DCoordinate::new(x, y / 2, z / 2))
    } else {
        if by == 0 || by == 2 * dimensions.height().0 {
            return None;
        }
        (Cartesian3DCoordinate::new(x, y / 2 - 1, z / 2),
         Cartesian3DCoordinate::new(x, y / 2, z / 2))
    };
    Some(pair)
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::neighbours;
    use crate::units::{EdgesCount, Height, Levels, Width};

    fn gc(x: u32, y: u32, z: u32) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(x, y, z)
    }

    fn dims(w: usize, h: usize, l: usize) -> LatticeDimensions {
        LatticeDimensions::new(Width(w), Height(h), Levels(l))
    }

    #[test]
    fn wall_addresses_per_axis() {
        // x neighbours: vertical wall row inside the level
        assert_eq!(wall_between(gc(0, 0, 0), gc(1, 0, 0)), Ok(WallAddress::new(1, 1, 1)));
        assert_eq!(wall_between(gc(2, 1, 1), gc(1, 1, 1)), Ok(WallAddress::new(3, 3, 2)));
        // y neighbours: horizontal wall row inside the level
        assert_eq!(wall_between(gc(0, 0, 0), gc(0, 1, 0)), Ok(WallAddress::new(1, 2, 0)));
        assert_eq!(wall_between(gc(3, 2, 1), gc(3, 1, 1)), Ok(WallAddress::new(3, 4, 3)));
        // z neighbours: the floor slice of the upper level
        assert_eq!(wall_between(gc(0, 0, 0), gc(0, 0, 1)), Ok(WallAddress::new(2, 0, 0)));
        assert_eq!(wall_between(gc(1, 2, 2), gc(1, 2, 1)), Ok(WallAddress::new(4, 2, 1)));
    }

    #[test]
    fn wall_between_is_symmetric() {
        let d = dims(3, 3, 3);
        for index in 0..d.size().0 {
            let a = d.index_to_grid_coordinate(index).unwrap();
            for &b in neighbours(a, &d).iter() {
                assert_eq!(wall_between(a, b), wall_between(b, a));
            }
        }
    }

    #[test]
    fn wall_between_requires_adjacent_cells() {
        assert_eq!(wall_between(gc(1, 1, 1), gc(1, 1, 1)),
                   Err(MazeError::InvalidAdjacency {
                       a: gc(1, 1, 1),
                       b: gc(1, 1, 1),
                       distance: 0,
                   }));
        assert_eq!(wall_between(gc(0, 0, 0), gc(1, 1, 0)),
                   Err(MazeError::InvalidAdjacency {
                       a: gc(0, 0, 0),
                       b: gc(1, 1, 0),
                       distance: 2,
                   }));
        assert!(wall_between(gc(0, 0, 0), gc(2, 0, 0)).is_err());
        assert!(wall_between(gc(0, 0, 0), gc(0, 0, 3)).is_err());
    }

    #[test]
    fn wall_between_far_apart_cells_does_not_overflow() {
        let far = gc(u32::MAX, u32::MAX, 0);
        assert_eq!(wall_between(gc(0, 0, 0), far),
                   Err(MazeError::InvalidAdjacency {
                       a: gc(0, 0, 0),
                       b: far,
                       distance: 2 * u64::from(u32::MAX),
                   }));
        // A u32 sum of these differences wraps round to 1.
        assert!(wall_between(gc(0, 0, 0), gc(u32::MAX, u32::MAX, 3)).is_err());
        assert_eq!(wall_between(gc(u32::MAX - 1, 0, 0), gc(u32::MAX, 0, 0)),
                   Ok(WallAddress::new(1, 1, u32::MAX as usize)));
    }

    #[test]
    fn interior_walls_map_back_to_their_cells() {
        let d = dims(3, 2, 2);
        let mut interior_walls = 0;
        for index in 0..d.size().0 {
            let a = d.index_to_grid_coordinate(index).unwrap();
            for &b in neighbours(a, &d).iter() {
                let address = wall_between(a, b).unwrap();
                assert!(is_valid_address(address, &d));
                let expected = if a < b { (a, b) } else { (b, a) };
                let (low, high) = cells_either_side(address, &d).unwrap();
                let found = if low < high { (low, high) } else { (high, low) };
                assert_eq!(found, expected);
                interior_walls += 1;
            }
        }
        // every interior wall was seen from both sides
        let (_, EdgesCount(edges)) = d.graph_size();
        assert_eq!(interior_walls / 2, edges);
    }

    #[test]
    fn boundary_walls_have_no_cells_either_side() {
        let d = dims(2, 2, 2);
        // bottom floor and top ceiling
        assert_eq!(cells_either_side(WallAddress::new(0, 1, 1), &d), None);
        assert_eq!(cells_either_side(WallAddress::new(4, 0, 0), &d), None);
        // outer x walls
        assert_eq!(cells_either_side(WallAddress::new(1, 1, 0), &d), None);
        assert_eq!(cells_either_side(WallAddress::new(3, 3, 2), &d), None);
        // outer y walls
        assert_eq!(cells_either_side(WallAddress::new(1, 0, 1), &d), None);
        assert_eq!(cells_either_side(WallAddress::new(3, 4, 0), &d), None);
        // outside the grid entirely
        assert_eq!(cells_either_side(WallAddress::new(5, 0, 0), &d), None);
        assert_eq!(cells_either_side(WallAddress::new(1, 2, 2), &d), None);
    }

    #[test]
    fn address_indices_are_distinct_and_in_range() {
        let d = dims(3, 2, 2);
        let mut seen = vec![false; d.wall_grid_len()];
        for bz in 0..d.wall_slices_count() {
            for by in 0..d.slice_rows(bz).unwrap() {
                for bx in 0..d.row_length(bz, by).unwrap() {
                    let index = address_to_index(WallAddress::new(bz, by, bx), &d).unwrap();
                    assert!(!seen[index]);
                    seen[index] = true;
                }
            }
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(address_to_index(WallAddress::new(1, 1, 4), &d), None);
    }
}
