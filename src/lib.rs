//! **mazes** generates perfect rectangular mazes from a seed and renders them as printable
//! SVG and HTML pages.
//!
//! A maze lives on a grid with odd sides. Squares at odd x and odd y are rooms, the squares
//! between two rooms are connectors, and everything else stays wall. Carving joins every room
//! to the top left room through exactly one route.
//!
//! ```
//! use mazes::{generators::CarveOptions, grid_dimensions::GridDimensions, maze,
//!             units::{Height, Width}};
//!
//! let dimensions = GridDimensions::new(Width(11), Height(11)).unwrap();
//! let (maze, _) = maze::generate(dimensions, 1, &CarveOptions::default()).unwrap();
//! assert_eq!(maze.grid().to_text_rows()[1], "#S  #   # #");
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod maze;
pub mod random;
pub mod renderers;
pub mod units;
