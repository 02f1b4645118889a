use docopt::Docopt;
use log::warn;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use mazes3d::{
    errors::GenerationError,
    generators,
    grid::Maze,
    grid_dimensions::LatticeDimensions,
    pathing,
    units::{Height, Levels, Width},
};
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Mazes 3D

Usage:
    mazes_driver -h | --help
    mazes_driver [--width=<w>] [--height=<h>] [--levels=<l>] [--step-limit=<n>] [--seed=<s>] [--allow-partial] [--text-out=<path>] [--save-edges=<path>] [--longest-path]

Options:
    -h --help              Show this screen.
    --width=<w>            Cells along x on every level, at least 2 [default: 20].
    --height=<h>           Cells along y on every level, at least 2 [default: 20].
    --levels=<l>           Number of levels stacked along z, at least 1 [default: 1].
    --step-limit=<n>       Random walk steps allowed before generation gives up [default: 1000000].
    --seed=<s>             Seed for a reproducible maze. A random seed is used if not given.
    --allow-partial        Keep the maze when the step limit is reached, some cells will be unreachable.
    --text-out=<path>      Output file path for the textual rendering of the maze, stdout if not given.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices in level, row, column order.
    --longest-path         Report the length and end points of the longest path through the maze.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: usize,
    flag_height: usize,
    flag_levels: usize,
    flag_step_limit: usize,
    flag_seed: Option<u64>,
    flag_allow_partial: bool,
    flag_text_out: String,
    flag_save_edges: String,
    flag_longest_path: bool,
}

mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Generation(::mazes3d::errors::GenerationError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let dimensions = LatticeDimensions::new(Width(args.flag_width),
                                            Height(args.flag_height),
                                            Levels(args.flag_levels));
    let mut rng = match args.flag_seed {
        Some(seed) => XorShiftRng::seed_from_u64(seed),
        None => XorShiftRng::seed_from_u64(rand::random()),
    };

    let maze = generate_maze(dimensions, &args, &mut rng)?;

    let text = format!("{}", maze);
    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    if args.flag_longest_path {
        report_longest_path(&maze);
    }

    Ok(())
}

fn generate_maze(dimensions: LatticeDimensions,
                 maze_args: &MazeArgs,
                 rng: &mut XorShiftRng)
                 -> Result<Maze> {

    match generators::wilson(dimensions, maze_args.flag_step_limit, rng) {
        Ok(maze) => Ok(maze),
        Err(GenerationError::StepLimitExceeded { steps, unconnected_cells, maze })
            if maze_args.flag_allow_partial => {
            warn!("Keeping a partial maze after {} steps, {} cells are unreachable",
                  steps,
                  unconnected_cells);
            Ok(*maze)
        }
        Err(e) => Err(e.into()),
    }
}

fn report_longest_path(maze: &Maze) {
    match pathing::longest_path(maze) {
        Some(path) => {
            if let (Some(start), Some(end)) = (path.first(), path.last()) {
                println!("Longest path: {} cells from {} to {}", path.len(), start, end);
            }
        }
        None => println!("Longest path: none"),
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", maze.size(), maze.passages_count()));

    for (src, dst) in maze.iter_passages() {
        let index_a = maze.dimensions()
            .grid_coordinate_to_index(src)
            .ok_or("Passages iter gave a coordinate outside the maze")?;
        let index_b = maze.dimensions()
            .grid_coordinate_to_index(dst)
            .ok_or("Passages iter gave a coordinate outside the maze")?;
        let src_as_1_based_index = index_a + 1;
        let dst_as_1_based_index = index_b + 1;

        graph_data.push_str(&format!("{} {}\n", src_as_1_based_index, dst_as_1_based_index));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
