use std::cmp;

use error_chain::bail;

use crate::errors::*;
use crate::units::{Height, Width};

/// The smallest side length that still holds more than one room.
pub const MIN_DIMENSION: usize = 5;
/// The largest side length accepted. Odd, like every valid side length.
pub const MAX_DIMENSION: usize = 99;

/// Validated maze dimensions: both sides odd and within `MIN_DIMENSION..=MAX_DIMENSION`.
///
/// Odd sides mean the border ring is all wall and every odd coordinate inside it is a room.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct GridDimensions {
    width: Width,
    height: Height,
}

impl GridDimensions {
    pub fn new(width: Width, height: Height) -> Result<GridDimensions> {
        if is_valid_side(width.0) && is_valid_side(height.0) {
            Ok(GridDimensions {
                width: width,
                height: height,
            })
        } else {
            bail!(ErrorKind::InvalidDimension(width.0, height.0))
        }
    }

    /// Coerce any requested size into valid dimensions: even sides grow by one, then each side
    /// is clamped to the allowed range.
    pub fn normalized(width: Width, height: Height) -> GridDimensions {
        GridDimensions {
            width: Width(normalize_side(width.0)),
            height: Height(normalize_side(height.0)),
        }
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.width.0 * self.height.0
    }

    /// The number of rooms, squares at odd x and odd y inside the border.
    pub fn rooms_count(&self) -> usize {
        (self.width.0 / 2) * (self.height.0 / 2)
    }
}

fn is_valid_side(side: usize) -> bool {
    side % 2 == 1 && side >= MIN_DIMENSION && side <= MAX_DIMENSION
}

fn normalize_side(side: usize) -> usize {
    let odd = if side % 2 == 0 { side.saturating_add(1) } else { side };
    cmp::min(cmp::max(odd, MIN_DIMENSION), MAX_DIMENSION)
}
