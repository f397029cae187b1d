#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct Height(pub usize);

/// Number of rooms (cells at odd x and odd y) that are open.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RoomsCount(pub usize);
/// Number of connector cells between two rooms that are open.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct PassagesCount(pub usize);
