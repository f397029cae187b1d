use bit_set::BitSet;
use log::debug;

use crate::cells::{offset_coordinate, Cartesian2DCoordinate, CellState, CoordinateSmallVec,
                   CARVE_DIRECTIONS, ROOM_STEP};
use crate::errors::*;
use crate::grid::Grid;
use crate::random::RandomSource;

/// Knobs for the frontier selection policy of `carve`.
///
/// While the frontier holds more than `jump_threshold` rooms, each step has a `jump_percent`
/// chance of continuing from a uniformly random frontier room instead of the newest one.
/// Jumping produces more, shorter dead ends than a plain depth first carve.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CarveOptions {
    pub jump_threshold: usize,
    pub jump_percent: usize,
}

impl Default for CarveOptions {
    fn default() -> CarveOptions {
        CarveOptions {
            jump_threshold: 10,
            jump_percent: 30,
        }
    }
}

impl CarveOptions {
    /// Never jump: a plain recursive backtracker with long winding corridors.
    pub fn backtracker() -> CarveOptions {
        CarveOptions {
            jump_threshold: usize::MAX,
            jump_percent: 0,
        }
    }

    pub fn with_jump_threshold(mut self, jump_threshold: usize) -> CarveOptions {
        self.jump_threshold = jump_threshold;
        self
    }

    pub fn with_jump_percent(mut self, jump_percent: usize) -> CarveOptions {
        self.jump_percent = jump_percent;
        self
    }
}

/// What a finished carve did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct CarveSummary {
    pub rooms_visited: usize,
    pub passages_carved: usize,
    pub jumps: usize,
}

/// Visited rooms that may still have unvisited neighbours.
/// Removal swaps with the last entry, order among the remaining rooms does not matter.
#[derive(Debug)]
struct Frontier {
    open: Vec<Cartesian2DCoordinate>,
}

impl Frontier {
    fn new(start: Cartesian2DCoordinate, capacity: usize) -> Frontier {
        let mut open = Vec::with_capacity(capacity);
        open.push(start);
        Frontier { open: open }
    }

    #[inline]
    fn len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    #[inline]
    fn get(&self, position: usize) -> Cartesian2DCoordinate {
        self.open[position]
    }

    fn push(&mut self, coord: Cartesian2DCoordinate) {
        self.open.push(coord);
    }

    fn remove_exhausted(&mut self, position: usize) {
        let _ = self.open.swap_remove(position);
    }

    /// Position of the room to carve from next, and whether it was a random jump.
    fn select<R: RandomSource>(&self, rng: &mut R, options: &CarveOptions) -> Result<(usize, bool)> {
        if self.len() > options.jump_threshold && rng.range(100)? < options.jump_percent {
            Ok((rng.range(self.len())?, true))
        } else {
            Ok((self.len() - 1, false))
        }
    }
}

/// Carve a perfect maze into an all wall grid, then mark the start and end rooms.
///
/// Carving begins at the top left room (1, 1). Each step picks a frontier room (see
/// `CarveOptions`), looks two squares away to the north, east, south and west for interior rooms
/// not yet visited, and opens up one of them at random along with the connector square in
/// between. A room with nothing left to visit leaves the frontier. Rooms are only ever joined
/// to unvisited rooms so no loops form, and carving runs until every room reachable from the
/// start has been joined.
///
/// Finally (1, 1) becomes `Start` and (width - 2, height - 2) becomes `End`.
///
/// The result depends only on the grid dimensions, the options and the random draws.
pub fn carve<R: RandomSource>(grid: &mut Grid,
                              rng: &mut R,
                              options: &CarveOptions)
                              -> Result<CarveSummary> {

    let start = grid.start_coordinate();
    let mut visited = BitSet::with_capacity(grid.size());
    let mut frontier = Frontier::new(start, grid.dimensions().rooms_count());
    let mut summary = CarveSummary::default();

    grid.set_cell(start, CellState::Passage)?;
    mark_visited(grid, &mut visited, start);
    summary.rooms_visited = 1;

    while !frontier.is_empty() {

        let (position, jumped) = frontier.select(rng, options)?;
        if jumped {
            summary.jumps += 1;
        }
        let current = frontier.get(position);

        let unvisited = unvisited_neighbours(grid, &visited, current);
        if unvisited.is_empty() {
            frontier.remove_exhausted(position);
            continue;
        }

        let next = unvisited[rng.range(unvisited.len())?];
        grid.set_cell(current.midpoint(next), CellState::Passage)?;
        grid.set_cell(next, CellState::Passage)?;
        mark_visited(grid, &mut visited, next);
        frontier.push(next);

        summary.rooms_visited += 1;
        summary.passages_carved += 1;
    }

    grid.set_cell(start, CellState::Start)?;
    grid.set_cell(grid.end_coordinate(), CellState::End)?;

    debug!("carved {}x{} grid: {:?}", grid.width().0, grid.height().0, summary);
    Ok(summary)
}

fn mark_visited(grid: &Grid, visited: &mut BitSet, coord: Cartesian2DCoordinate) {
    if let Some(index) = grid.grid_coordinate_to_index(coord) {
        let _ = visited.insert(index);
    }
}

fn is_visited(grid: &Grid, visited: &BitSet, coord: Cartesian2DCoordinate) -> bool {
    grid.grid_coordinate_to_index(coord)
        .map_or(false, |index| visited.contains(index))
}

/// Interior rooms two squares away from `coord` that carving has not reached yet, in
/// `CARVE_DIRECTIONS` order.
fn unvisited_neighbours(grid: &Grid,
                        visited: &BitSet,
                        coord: Cartesian2DCoordinate)
                        -> CoordinateSmallVec {
    CARVE_DIRECTIONS.iter()
        .filter_map(|&dir| offset_coordinate(coord, dir, ROOM_STEP))
        .filter(|&neighbour| grid.is_interior_coordinate(neighbour))
        .filter(|&neighbour| !is_visited(grid, visited, neighbour))
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::grid_dimensions::GridDimensions;
    use crate::random::Lcg31;
    use crate::units::{Height, PassagesCount, RoomsCount, Width};
    use quickcheck::{quickcheck, TestResult};
    use std::collections::VecDeque;

    fn carved(w: usize, h: usize, seed: u32, options: &CarveOptions) -> Grid {
        let dims = GridDimensions::new(Width(w), Height(h)).expect("valid test dimensions");
        let mut grid = Grid::new(dims);
        let mut rng = Lcg31::new(seed);
        carve(&mut grid, &mut rng, options).expect("carve failed");
        grid
    }

    fn complex(w: usize, h: usize, seed: u32) -> Grid {
        carved(w, h, seed, &CarveOptions::default())
    }

    // Map arbitrary numbers onto valid odd dimensions in 5..=41
    fn odd_side(n: u8) -> usize {
        5 + 2 * (n as usize % 19)
    }

    // Every open square reachable from the start through open neighbours
    fn reachable_from_start(grid: &Grid) -> Vec<Cartesian2DCoordinate> {
        let mut seen = vec![false; grid.size()];
        let mut reached = vec![];
        let mut queue = VecDeque::new();
        let start = grid.start_coordinate();
        seen[grid.grid_coordinate_to_index(start).unwrap()] = true;
        queue.push_back(start);

        while let Some(coord) = queue.pop_front() {
            reached.push(coord);
            for &dir in CARVE_DIRECTIONS.iter() {
                if let Some(next) = offset_coordinate(coord, dir, 1) {
                    if let Some(index) = grid.grid_coordinate_to_index(next) {
                        if !seen[index] && grid.cell(next).map_or(false, CellState::is_open) {
                            seen[index] = true;
                            queue.push_back(next);
                        }
                    }
                }
            }
        }
        reached
    }

    fn is_perfect_maze(grid: &Grid) -> bool {
        let (RoomsCount(rooms), PassagesCount(passages)) = grid.open_rooms_and_passages();
        let all_rooms_open = rooms == grid.dimensions().rooms_count();
        let all_open_reachable = reachable_from_start(grid).len() ==
                                 grid.size() - grid.count(CellState::Wall);
        all_rooms_open && all_open_reachable && passages + 1 == rooms
    }

    fn border_is_wall(grid: &Grid) -> bool {
        let (w, h) = (grid.width().0 as u32, grid.height().0 as u32);
        grid.iter()
            .filter(|c| c.x == 0 || c.y == 0 || c.x == w - 1 || c.y == h - 1)
            .all(|c| grid.cell(c) == Some(CellState::Wall))
    }

    #[test]
    fn seed_1_at_11_by_11() {
        let grid = complex(11, 11, 1);
        assert_eq!(grid.to_text_rows(),
                   vec!["###########",
                        "#S  #   # #",
                        "### # ### #",
                        "# # #   # #",
                        "# # # ### #",
                        "# # #   # #",
                        "# # ### # #",
                        "# # #     #",
                        "# # # ### #",
                        "#     #  E#",
                        "###########"]);
    }

    #[test]
    fn seed_42_at_11_by_11() {
        let grid = complex(11, 11, 42);
        assert_eq!(grid.to_text_rows(),
                   vec!["###########",
                        "#S#       #",
                        "# ### ### #",
                        "#   # #   #",
                        "### # ### #",
                        "# # # #   #",
                        "# # # ### #",
                        "#   #   # #",
                        "# # ### # #",
                        "# #     #E#",
                        "###########"]);
    }

    #[test]
    fn minimum_size_grid() {
        let grid = complex(5, 5, 7);
        assert_eq!(grid.to_text_rows(),
                   vec!["#####",
                        "#S  #",
                        "### #",
                        "#  E#",
                        "#####"]);
        assert_eq!(grid.open_rooms_and_passages(), (RoomsCount(4), PassagesCount(3)));
    }

    #[test]
    fn minimum_size_grid_never_underflows_the_frontier() {
        for seed in 0..200 {
            let grid = complex(5, 5, seed);
            assert!(is_perfect_maze(&grid), "seed {}\n{}", seed, grid);
        }
    }

    #[test]
    fn backtracker_seed_1_at_9_by_7() {
        let grid = carved(9, 7, 1, &CarveOptions::backtracker());
        assert_eq!(grid.to_text_rows(),
                   vec!["#########",
                        "#S  #   #",
                        "### ### #",
                        "# # #   #",
                        "# # # # #",
                        "#     #E#",
                        "#########"]);
    }

    #[test]
    fn summary_counts_every_room_and_passage() {
        let dims = GridDimensions::new(Width(21), Height(15)).unwrap();
        let mut grid = Grid::new(dims);
        let summary = carve(&mut grid, &mut Lcg31::new(5), &CarveOptions::default()).unwrap();
        assert_eq!(summary.rooms_visited, dims.rooms_count());
        assert_eq!(summary.passages_carved, dims.rooms_count() - 1);
        assert!(summary.jumps > 0);
    }

    #[test]
    fn backtracker_never_jumps() {
        let dims = GridDimensions::new(Width(31), Height(31)).unwrap();
        let mut grid = Grid::new(dims);
        let summary = carve(&mut grid, &mut Lcg31::new(5), &CarveOptions::backtracker()).unwrap();
        assert_eq!(summary.jumps, 0);
        assert!(is_perfect_maze(&grid));
    }

    #[test]
    fn always_jumping_still_makes_a_perfect_maze() {
        let options = CarveOptions::default().with_jump_threshold(0).with_jump_percent(100);
        let grid = carved(25, 19, 3, &options);
        assert!(is_perfect_maze(&grid), "\n{}", grid);
    }

    #[test]
    fn different_seeds_give_different_mazes() {
        assert_ne!(complex(11, 11, 42), complex(11, 11, 43));
    }

    #[test]
    fn largest_grid() {
        let grid = complex(99, 99, 2024);
        assert!(is_perfect_maze(&grid));
        assert!(border_is_wall(&grid));
    }

    #[test]
    fn deterministic() {
        fn p(w: u8, h: u8, seed: u32) -> bool {
            let (w, h) = (odd_side(w), odd_side(h));
            complex(w, h, seed) == complex(w, h, seed)
        }
        quickcheck(p as fn(u8, u8, u32) -> bool);
    }

    #[test]
    fn connected_and_acyclic() {
        fn p(w: u8, h: u8, seed: u32) -> bool {
            is_perfect_maze(&complex(odd_side(w), odd_side(h), seed))
        }
        quickcheck(p as fn(u8, u8, u32) -> bool);
    }

    #[test]
    fn one_start_and_one_end_in_the_corners() {
        fn p(w: u8, h: u8, seed: u32) -> bool {
            let grid = complex(odd_side(w), odd_side(h), seed);
            grid.positions_of(CellState::Start) == vec![grid.start_coordinate()] &&
            grid.positions_of(CellState::End) == vec![grid.end_coordinate()]
        }
        quickcheck(p as fn(u8, u8, u32) -> bool);
    }

    #[test]
    fn border_and_pillars_stay_wall() {
        fn p(w: u8, h: u8, seed: u32) -> bool {
            let grid = complex(odd_side(w), odd_side(h), seed);
            let pillars_closed = grid.iter()
                .filter(|c| c.x % 2 == 0 && c.y % 2 == 0)
                .all(|c| grid.cell(c) == Some(CellState::Wall));
            border_is_wall(&grid) && pillars_closed
        }
        quickcheck(p as fn(u8, u8, u32) -> bool);
    }

    #[test]
    fn any_jump_settings_make_a_perfect_maze() {
        fn p(threshold: u8, percent: u8, seed: u32) -> TestResult {
            if percent > 100 {
                return TestResult::discard();
            }
            let options = CarveOptions::default()
                .with_jump_threshold(threshold as usize)
                .with_jump_percent(percent as usize);
            TestResult::from_bool(is_perfect_maze(&carved(15, 13, seed, &options)))
        }
        quickcheck(p as fn(u8, u8, u32) -> TestResult);
    }
}
