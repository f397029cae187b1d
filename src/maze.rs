use crate::errors::*;
use crate::generators::{self, CarveOptions, CarveSummary};
use crate::grid::Grid;
use crate::grid_dimensions::GridDimensions;
use crate::random::Lcg31;

/// A finished maze and the seed it was carved from. The seed alone reproduces the maze.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Maze {
    grid: Grid,
    seed: u32,
}

impl Maze {
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Generate a maze with its own freshly seeded random source.
///
/// Nothing is shared between calls, so mazes can be generated from several threads at once.
pub fn generate(dimensions: GridDimensions,
                seed: u32,
                options: &CarveOptions)
                -> Result<(Maze, CarveSummary)> {

    let mut grid = Grid::new(dimensions);
    let mut rng = Lcg31::new(seed);
    let summary = generators::carve(&mut grid, &mut rng, options)?;
    Ok((Maze {
            grid: grid,
            seed: seed,
        },
        summary))
}
