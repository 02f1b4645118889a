use std::fmt;

use crate::cells::Cartesian3DCoordinate;
use crate::grid::Maze;

const WALL: char = '#';
const OPEN: char = ' ';
const TRAPDOOR_UP: char = '/';
const TRAPDOOR_DOWN: char = '\\';
const TRAPDOOR_BOTH: char = 'X';

/// Render a maze as text, one block of lines per level headed `Level N`.
///
/// Each level is drawn with the highest `y` row at the top. Cells and the walls between them
/// alternate, so a level of `w * h` cells takes `2h + 1` lines of `2w + 1` characters.
/// A cell with a passage through its ceiling shows `/`, through its floor `\`, through both `X`.
pub fn render(maze: &Maze) -> Vec<String> {
    let dimensions = maze.dimensions();
    let (width, height, levels) = (dimensions.width().0 as u32,
                                   dimensions.height().0 as u32,
                                   dimensions.levels().0 as u32);
    let is_open = |a, b| maze.is_linked(a, b);
    let line_length = 2 * width as usize + 1;

    let mut lines = Vec::with_capacity(levels as usize * (2 * height as usize + 2));
    for z in 0..levels {
        lines.push(format!("Level {}", z + 1));

        for y in (0..height + 1).rev() {
            if y < height {
                let mut cells_line = String::with_capacity(line_length);
                for x in 0..line_length as u32 {
                    let c = if x % 2 == 1 {
                        let cell = Cartesian3DCoordinate::new((x - 1) / 2, y, z);
                        let below = Cartesian3DCoordinate { z: z.wrapping_sub(1), ..cell };
                        let above = Cartesian3DCoordinate { z: z + 1, ..cell };
                        let down = z > 0 && is_open(cell, below);
                        let up = z + 1 < levels && is_open(cell, above);
                        match (up, down) {
                            (true, true) => TRAPDOOR_BOTH,
                            (true, false) => TRAPDOOR_UP,
                            (false, true) => TRAPDOOR_DOWN,
                            (false, false) => OPEN,
                        }
                    } else {
                        let east_x = x / 2;
                        if east_x > 0 && east_x < width &&
                           is_open(Cartesian3DCoordinate::new(east_x, y, z),
                                   Cartesian3DCoordinate::new(east_x - 1, y, z)) {
                            OPEN
                        } else {
                            WALL
                        }
                    };
                    cells_line.push(c);
                }
                lines.push(cells_line);
            }

            // The walls below row `y`: the top border when y == height, the bottom border when y == 0.
            let walls_line = (0..line_length as u32)
                .map(|x| {
                    if y < height && y > 0 && x % 2 == 1 &&
                       is_open(Cartesian3DCoordinate::new((x - 1) / 2, y - 1, z),
                               Cartesian3DCoordinate::new((x - 1) / 2, y, z)) {
                        OPEN
                    } else {
                        WALL
                    }
                })
                .collect::<String>();
            lines.push(walls_line);
        }
    }
    lines
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in render(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::grid_dimensions::LatticeDimensions;
    use crate::units::{Height, Levels, Width};

    fn gc(x: u32, y: u32, z: u32) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(x, y, z)
    }

    fn walled(w: usize, h: usize, l: usize) -> Maze {
        Maze::walled(LatticeDimensions::new(Width(w), Height(h), Levels(l)))
    }

    #[test]
    fn render_walled_level() {
        let maze = walled(3, 2, 1);
        assert_eq!(render(&maze),
                   vec!["Level 1", "#######", "# # # #", "#######", "# # # #", "#######"]);
    }

    #[test]
    fn render_single_level_maze() {
        let mut maze = walled(2, 2, 1);
        maze.carve(gc(0, 0, 0), gc(1, 0, 0)).expect("carve failed");
        maze.carve(gc(0, 0, 0), gc(0, 1, 0)).expect("carve failed");
        maze.carve(gc(1, 0, 0), gc(1, 1, 0)).expect("carve failed");

        // y = 1 is drawn above y = 0
        assert_eq!(render(&maze),
                   vec!["Level 1",
                        "#####",
                        "# # #",
                        "# # #",
                        "#   #",
                        "#####"]);
    }

    #[test]
    fn render_trapdoors() {
        let mut maze = walled(2, 2, 2);
        maze.carve(gc(0, 0, 0), gc(0, 0, 1)).expect("carve failed");
        maze.carve(gc(1, 1, 0), gc(1, 1, 1)).expect("carve failed");
        maze.carve(gc(0, 1, 1), gc(1, 1, 1)).expect("carve failed");

        assert_eq!(render(&maze),
                   vec!["Level 1",
                        "#####",
                        "# #/#",
                        "#####",
                        "#/# #",
                        "#####",
                        "Level 2",
                        "#####",
                        "#  \\#",
                        "#####",
                        "#\\# #",
                        "#####"]);
    }

    #[test]
    fn render_trapdoor_both_ways() {
        let mut maze = walled(2, 2, 3);
        maze.carve(gc(1, 0, 0), gc(1, 0, 1)).expect("carve failed");
        maze.carve(gc(1, 0, 1), gc(1, 0, 2)).expect("carve failed");
        let lines = render(&maze);
        assert_eq!(lines.len(), 3 * 6);
        assert_eq!(lines[4], "# #/#");
        assert_eq!(lines[10], "# #X#");
        assert_eq!(lines[16], "# #\\#");
    }

    #[test]
    fn display_writes_every_line() {
        let maze = walled(2, 2, 1);
        assert_eq!(format!("{}", maze), "Level 1\n#####\n# # #\n#####\n# # #\n#####\n");
    }
}
