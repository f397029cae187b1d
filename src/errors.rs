// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules in this crate `use errors::*;` to get at everything `error_chain!` creates.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimension(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: both sides must be odd and within {}..={}",
                    width, height, crate::grid_dimensions::MIN_DIMENSION,
                    crate::grid_dimensions::MAX_DIMENSION)
        }
        RandomRange(n: usize) {
            description("random range upper bound must be positive")
            display("random range requested with non-positive upper bound {}", n)
        }
        CellOutOfBounds(x: u32, y: u32) {
            description("cell coordinate outside of the grid")
            display("cell coordinate ({}, {}) is outside of the grid", x, y)
        }
    }
}
