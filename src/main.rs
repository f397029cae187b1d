use docopt::Docopt;
use error_chain::{bail, ChainedError};
use log::{error, info, warn};
use mazes::{
    errors::*,
    generators::CarveOptions,
    grid_dimensions::GridDimensions,
    maze,
    random::MAX_SEED,
    renderers::{self, RenderOptions},
    units::{Height, Width},
};
use rand::Rng;
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

const USAGE: &str = "Maze driver

Generates a perfect maze and saves it as a printable A4 SVG image plus an HTML page showing it.

Usage:
    maze_driver -h | --help
    maze_driver [options] [<width> [<height> [<seed> [<svg-path>]]]]

Arguments:
    <width>                Maze width in squares, 30 if omitted. Even values grow by one, then 5..=99.
    <height>               Maze height in squares, 40 if omitted. Even values grow by one, then 5..=99.
    <seed>                 Seed to reproduce a maze. 0 or omitted picks a new random seed.
    <svg-path>             Output file path for the maze image, maze.svg if omitted.

Options:
    -h --help              Show this screen.
    --backtracker          Carve a plain recursive backtracker maze, never jumping back into older open rooms.
    --jump-threshold=<n>   Only jump back once more than n rooms are still open [default: 10].
    --jump-percent=<p>     Chance in percent of continuing from a random open room [default: 30].
    --html-out=<path>      Output file path for the HTML page. Defaults to the image path with an .html extension.
";

const DEFAULT_WIDTH: usize = 30;
const DEFAULT_HEIGHT: usize = 40;
const DEFAULT_SVG_PATH: &str = "maze.svg";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    arg_width: Option<usize>,
    arg_height: Option<usize>,
    arg_seed: Option<u32>,
    arg_svg_path: Option<String>,
    flag_backtracker: bool,
    flag_jump_threshold: usize,
    flag_jump_percent: usize,
    flag_html_out: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if let Err(ref e) = run(&args) {
        error!("{}", e.display_chain());
        ::std::process::exit(1);
    }
}

fn run(args: &MazeArgs) -> Result<()> {

    let dimensions = dimensions_from_args(args);
    let seed = seed_from_args(args);
    let options = carve_options_from_args(args);

    info!("generating {}x{} maze (seed {})",
          dimensions.width().0, dimensions.height().0, seed);
    let (maze, summary) = maze::generate(dimensions, seed, &options)?;
    info!("{} rooms joined by {} passages", summary.rooms_visited, summary.passages_carved);

    let svg_path = PathBuf::from(args.arg_svg_path.as_ref().map_or(DEFAULT_SVG_PATH, String::as_str));
    let html_path = if args.flag_html_out.is_empty() {
        renderers::html_path_for(&svg_path)
    } else {
        PathBuf::from(&args.flag_html_out)
    };

    // Each artifact is independent: a failed image still gets its page written and vice versa.
    let render_options = RenderOptions::default();
    let mut failed_artifacts = vec![];
    if let Err(e) = renderers::write_svg_file(&maze, &svg_path, &render_options) {
        error!("{}", e.display_chain());
        failed_artifacts.push(display_path(&svg_path));
    }
    if let Err(e) = renderers::write_html_file(&maze, &html_path, &svg_path, &render_options) {
        error!("{}", e.display_chain());
        failed_artifacts.push(display_path(&html_path));
    }

    if !failed_artifacts.is_empty() {
        bail!("could not write {}", failed_artifacts.join(", "));
    }

    info!("done, open {} to view and print the maze", html_path.display());
    info!("use seed {} to generate this maze again", seed);
    Ok(())
}

fn dimensions_from_args(args: &MazeArgs) -> GridDimensions {
    let requested = (args.arg_width.unwrap_or(DEFAULT_WIDTH),
                     args.arg_height.unwrap_or(DEFAULT_HEIGHT));
    let dimensions = GridDimensions::normalized(Width(requested.0), Height(requested.1));
    let actual = (dimensions.width().0, dimensions.height().0);
    let user_sized = args.arg_width.is_some() || args.arg_height.is_some();
    if user_sized && actual != requested {
        warn!("requested {}x{} maze adjusted to {}x{}: sides must be odd and within 5..=99",
              requested.0, requested.1, actual.0, actual.1);
    }
    dimensions
}

fn seed_from_args(args: &MazeArgs) -> u32 {
    match args.arg_seed {
        Some(seed) if seed != 0 => seed,
        _ => rand::thread_rng().gen_range(1..=MAX_SEED),
    }
}

fn carve_options_from_args(args: &MazeArgs) -> CarveOptions {
    if args.flag_backtracker {
        CarveOptions::backtracker()
    } else {
        CarveOptions::default()
            .with_jump_threshold(args.flag_jump_threshold)
            .with_jump_percent(args.flag_jump_percent)
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
