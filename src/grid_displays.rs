use std::fmt;

use crate::grid::Grid;

// One line per row, no trailing newline. Handy for eyeballing a maze in a test failure or log.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.to_text_rows();
        for (index, row) in rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cells::{Cartesian2DCoordinate, CellState};
    use crate::grid::Grid;
    use crate::grid_dimensions::GridDimensions;
    use crate::units::{Height, Width};

    #[test]
    fn display_walls_passages_and_markers() {
        let mut g = Grid::new(GridDimensions::new(Width(5), Height(5)).unwrap());
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        g.set_cell(gc(1, 1), CellState::Start).unwrap();
        g.set_cell(gc(1, 2), CellState::Passage).unwrap();
        g.set_cell(gc(1, 3), CellState::Passage).unwrap();
        g.set_cell(gc(2, 3), CellState::Passage).unwrap();
        g.set_cell(gc(3, 3), CellState::End).unwrap();

        let expected = "#####\n\
                        #S###\n\
                        # ###\n\
                        #  E#\n\
                        #####";
        assert_eq!(format!("{}", g), expected);
    }
}
