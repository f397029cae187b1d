use std::fmt;
use std::slice;

use error_chain::bail;
use itertools::{iproduct, Itertools};

use crate::cells::{Cartesian2DCoordinate, CellState};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::units::{Height, PassagesCount, RoomsCount, Width};

/// A rectangular array of square states, stored row major.
///
/// Created all wall. Generators mutate it in place, renderers only read it.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<CellState>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, open: {}",
               self.width(), self.height(), self.cells.iter().filter(|c| c.is_open()).count())
    }
}

impl Grid {
    pub fn new(dimensions: GridDimensions) -> Grid {
        Grid {
            dimensions: dimensions,
            cells: vec![CellState::Wall; dimensions.size()],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width().0 && (coord.y as usize) < self.height().0
    }

    /// Is the coordinate strictly inside the border ring?
    #[inline]
    pub fn is_interior_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.x >= 1 && coord.y >= 1 && (coord.x as usize) + 1 < self.width().0 &&
        (coord.y as usize) + 1 < self.height().0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width().0 + coord.x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<CellState> {
        self.grid_coordinate_to_index(coord).map(|index| self.cells[index])
    }

    pub fn set_cell(&mut self, coord: Cartesian2DCoordinate, state: CellState) -> Result<()> {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => {
                self.cells[index] = state;
                Ok(())
            }
            None => bail!(ErrorKind::CellOutOfBounds(coord.x, coord.y)),
        }
    }

    /// The top left room, where carving begins and the start marker goes.
    pub fn start_coordinate(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(1, 1)
    }

    /// The bottom right room, where the end marker goes.
    pub fn end_coordinate(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(self.width().0 as u32 - 2, self.height().0 as u32 - 2)
    }

    /// All coordinates, row by row, left to right.
    pub fn iter(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        let (w, h) = (self.width().0 as u32, self.height().0 as u32);
        iproduct!(0..h, 0..w).map(|(y, x)| Cartesian2DCoordinate::new(x, y))
    }

    /// The square states of each row, top to bottom.
    pub fn iter_row(&self) -> slice::Chunks<CellState> {
        self.cells.chunks(self.width().0)
    }

    /// Coordinates of every square currently in `state`.
    pub fn positions_of(&self, state: CellState) -> Vec<Cartesian2DCoordinate> {
        self.iter()
            .zip(self.cells.iter())
            .filter(|&(_, cell)| *cell == state)
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Open rooms and open connectors.
    /// In a perfect maze the connectors are the edges of a spanning tree over the rooms, so
    /// there is exactly one fewer of them.
    pub fn open_rooms_and_passages(&self) -> (RoomsCount, PassagesCount) {
        let (rooms, passages): (Vec<_>, Vec<_>) = self.iter()
            .filter(|&coord| self.is_interior_coordinate(coord))
            .filter(|&coord| self.cell(coord).map_or(false, CellState::is_open))
            .filter(|coord| coord.is_room() || coord.is_connector())
            .partition(|coord| coord.is_room());
        (RoomsCount(rooms.len()), PassagesCount(passages.len()))
    }

    /// Render the squares as lines of text: `#` wall, ` ` passage, `S` start and `E` end.
    pub fn to_text_rows(&self) -> Vec<String> {
        self.iter_row()
            .map(|row| row.iter().map(|&cell| cell_glyph(cell)).join(""))
            .collect()
    }
}

pub(crate) fn cell_glyph(cell: CellState) -> &'static str {
    match cell {
        CellState::Wall => "#",
        CellState::Passage => " ",
        CellState::Start => "S",
        CellState::End => "E",
    }
}
