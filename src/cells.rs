use std::fmt;

use smallvec::SmallVec;

/// The state of a single grid square.
///
/// Every square starts as a `Wall`. Carving turns rooms and the connectors between them into
/// `Passage`, and the two corner rooms are finally stamped as `Start` and `End`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Wall,
    Passage,
    Start,
    End,
}

impl CellState {
    /// Can the square be walked through? True for everything except walls.
    #[inline]
    pub fn is_open(self) -> bool {
        self != CellState::Wall
    }
}

impl Default for CellState {
    fn default() -> CellState {
        CellState::Wall
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x: x, y: y }
    }

    /// A room is a square at odd x and odd y. Everything else is either border, a connector
    /// between two rooms, or a pillar that always stays a wall.
    #[inline]
    pub fn is_room(&self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }

    /// A connector sits between two horizontally or vertically adjacent rooms: exactly one of
    /// its components is even.
    #[inline]
    pub fn is_connector(&self) -> bool {
        (self.x % 2 == 1) != (self.y % 2 == 1)
    }

    /// The square halfway between this coordinate and `other`.
    pub fn midpoint(&self, other: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

/// Rooms are two squares apart, with a connector square in between.
pub const ROOM_STEP: u32 = 2;

/// The directions in the order the carver examines them.
/// Changing the order changes every maze generated from a given seed.
pub const CARVE_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                   CompassPrimary::East,
                                                   CompassPrimary::South,
                                                   CompassPrimary::West];

/// Creates a new coordinate offset `step` squares away in the given direction.
/// Returns None if the coordinate is not representable (would go below zero).
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary,
                         step: u32)
                         -> Option<Cartesian2DCoordinate> {

    let (x, y) = (coord.x, coord.y);
    match dir {
        CompassPrimary::North => y.checked_sub(step).map(|y| Cartesian2DCoordinate { x: x, y: y }),
        CompassPrimary::South => y.checked_add(step).map(|y| Cartesian2DCoordinate { x: x, y: y }),
        CompassPrimary::East => x.checked_add(step).map(|x| Cartesian2DCoordinate { x: x, y: y }),
        CompassPrimary::West => x.checked_sub(step).map(|x| Cartesian2DCoordinate { x: x, y: y }),
    }
}
