use serde::{Deserialize, Serialize};

use crate::{Colour, Grid};

/// Visitation tag for one cell during a blob search.
///
/// A cell starts `Unvisited` and is tagged exactly once: `Miss` for a
/// visited cell of the wrong colour, `Hit` for a visited cell of the target
/// colour. The array lives for a single score computation and is then
/// discarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Miss,
    Hit,
}

/// The two kinds of goal in the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Build the largest connected blob of the target colour.
    Blob,
    /// Put as many target-coloured cells on the outer perimeter as possible.
    Perimeter,
}

/// A player goal: a target colour plus the scoring policy applied to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub kind: GoalKind,
    pub colour: Colour,
}

impl Goal {
    pub fn new(kind: GoalKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    /// Scores a flattened board against this goal.
    ///
    /// Pure: the same grid always yields the same score, and the grid is
    /// neither modified nor retained.
    pub fn score(&self, grid: &Grid) -> usize {
        match self.kind {
            GoalKind::Blob => largest_blob(grid, self.colour),
            GoalKind::Perimeter => perimeter_count(grid, self.colour),
        }
    }

    /// A human-readable description of this goal.
    ///
    /// A colour outside the palette is called out as unknown rather than
    /// silently producing an empty name.
    pub fn description(&self) -> String {
        let colour = self.colour.name().unwrap_or("unknown colour");
        match self.kind {
            GoalKind::Blob => format!("create the biggest {} blob", colour),
            GoalKind::Perimeter => format!("put the most {} on the outer perimeter", colour),
        }
    }
}

/// Size of the largest 4-connected (no diagonals) region of `colour`.
///
/// Single pass: one visitation array for the whole call, a flood fill from
/// every not-yet-visited matching cell, keeping the best component size.
/// Yields the same score as probing from every cell with a fresh array,
/// without re-walking each blob once per member cell.
fn largest_blob(grid: &Grid, colour: Colour) -> usize {
    let n = grid.side();
    let mut visited = vec![VisitState::Unvisited; n * n];
    let mut best = 0;
    for row in 0..n {
        for col in 0..n {
            if grid.get(row, col) != colour {
                visited[row * n + col] = VisitState::Miss;
            } else if visited[row * n + col] == VisitState::Unvisited {
                best = best.max(blob_size_from(grid, colour, (row, col), &mut visited));
            }
        }
    }
    best
}

/// Flood fill from a cell already known to match `colour`, marking every
/// reached cell `Hit` and every inspected non-matching neighbour `Miss`.
/// Returns the component size.
fn blob_size_from(
    grid: &Grid,
    colour: Colour,
    start: (usize, usize),
    visited: &mut [VisitState],
) -> usize {
    let n = grid.side();
    visited[start.0 * n + start.1] = VisitState::Hit;
    let mut stack = vec![start];
    let mut size = 0;
    while let Some((row, col)) = stack.pop() {
        size += 1;
        let neighbours = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in neighbours {
            // Out of bounds contributes nothing. wrapping_sub turns
            // row/col 0 into usize::MAX, which this catches too.
            if r >= n || c >= n {
                continue;
            }
            if visited[r * n + c] != VisitState::Unvisited {
                continue;
            }
            if grid.get(r, c) == colour {
                visited[r * n + c] = VisitState::Hit;
                stack.push((r, c));
            } else {
                visited[r * n + c] = VisitState::Miss;
            }
        }
    }
    size
}

/// Count of target-coloured cells on the outer ring.
///
/// Corner cells belong to one row and one column check each, so a matching
/// corner is worth 2. This duplication is inherited behaviour and kept for
/// compatibility.
fn perimeter_count(grid: &Grid, colour: Colour) -> usize {
    let n = grid.side();
    if n == 0 {
        return 0;
    }
    let mut count = 0;
    for j in 0..n {
        if grid.get(j, 0) == colour {
            count += 1;
        }
        if grid.get(j, n - 1) == colour {
            count += 1;
        }
        if grid.get(0, j) == colour {
            count += 1;
        }
        if grid.get(n - 1, j) == colour {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{COLOUR_LIST, OLD_OLIVE, PACIFIC_POINT, REAL_RED};

    #[test]
    fn three_by_three_scenario() {
        let (a, b) = (PACIFIC_POINT, REAL_RED);
        let grid = Grid::from_rows(&[&[a, a, b], &[a, b, b], &[b, b, b]]);
        assert_eq!(Goal::new(GoalKind::Blob, a).score(&grid), 3);
        assert_eq!(Goal::new(GoalKind::Blob, b).score(&grid), 6);
        // Left column 1, right column 3, top row 1, bottom row 3.
        assert_eq!(Goal::new(GoalKind::Perimeter, b).score(&grid), 8);
        // Left column 2, top row 2, corner (0, 0) counted by both.
        assert_eq!(Goal::new(GoalKind::Perimeter, a).score(&grid), 4);
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let (a, b) = (PACIFIC_POINT, REAL_RED);
        let grid = Grid::from_rows(&[&[b, a], &[a, b]]);
        assert_eq!(Goal::new(GoalKind::Blob, b).score(&grid), 1);
    }

    #[test]
    fn matching_corners_score_twice() {
        let c = OLD_OLIVE;
        let grid = Grid::from_rows(&[&[c, c], &[c, c]]);
        assert_eq!(Goal::new(GoalKind::Perimeter, c).score(&grid), 8);
    }

    #[test]
    fn uniform_grid_scores() {
        let c = OLD_OLIVE;
        let grid = Grid::filled(4, c);
        assert_eq!(Goal::new(GoalKind::Blob, c).score(&grid), 16);
        assert_eq!(Goal::new(GoalKind::Perimeter, c).score(&grid), 16);
    }

    #[test]
    fn single_cell_grid() {
        let c = REAL_RED;
        let grid = Grid::from_rows(&[&[c]]);
        assert_eq!(Goal::new(GoalKind::Blob, c).score(&grid), 1);
        // The lone cell is on all four boundary lines.
        assert_eq!(Goal::new(GoalKind::Perimeter, c).score(&grid), 4);
    }

    #[test]
    fn empty_grid_scores_zero() {
        let grid = Grid::from_rows(&[]);
        assert_eq!(Goal::new(GoalKind::Blob, REAL_RED).score(&grid), 0);
        assert_eq!(Goal::new(GoalKind::Perimeter, REAL_RED).score(&grid), 0);
    }

    #[test]
    fn descriptions_name_the_colour() {
        assert_eq!(
            Goal::new(GoalKind::Blob, PACIFIC_POINT).description(),
            "create the biggest Pacific Point blob"
        );
        assert_eq!(
            Goal::new(GoalKind::Perimeter, REAL_RED).description(),
            "put the most Real Red on the outer perimeter"
        );
    }

    #[test]
    fn off_palette_colour_is_called_out() {
        let description = Goal::new(GoalKind::Blob, Colour::new(0, 0, 0)).description();
        assert_eq!(description, "create the biggest unknown colour blob");
    }

    quickcheck! {
        fn blob_score_is_bounded_by_cell_count(grid: Grid, colour: Colour) -> bool {
            Goal::new(GoalKind::Blob, colour).score(&grid) <= grid.side() * grid.side()
        }

        fn scoring_is_pure(grid: Grid, colour: Colour) -> bool {
            let blob = Goal::new(GoalKind::Blob, colour);
            let perimeter = Goal::new(GoalKind::Perimeter, colour);
            blob.score(&grid) == blob.score(&grid)
                && perimeter.score(&grid) == perimeter.score(&grid)
        }

        fn absent_colour_scores_zero(grid: Grid, colour: Colour) -> bool {
            let mut grid = grid;
            let replacement = *COLOUR_LIST
                .iter()
                .find(|&&c| c != colour)
                .unwrap();
            for row in 0..grid.side() {
                for col in 0..grid.side() {
                    if grid.get(row, col) == colour {
                        grid.set(row, col, replacement);
                    }
                }
            }
            Goal::new(GoalKind::Blob, colour).score(&grid) == 0
                && Goal::new(GoalKind::Perimeter, colour).score(&grid) == 0
        }

        fn recolouring_a_cell_never_shrinks_the_blob(grid: Grid, colour: Colour, row: usize, col: usize) -> bool {
            let n = grid.side();
            let goal = Goal::new(GoalKind::Blob, colour);
            let before = goal.score(&grid);
            let mut grid = grid;
            grid.set(row % n, col % n, colour);
            goal.score(&grid) >= before
        }

        fn perimeter_of_uniform_grid_is_four_times_side(colour: Colour, depth_choice: u8) -> bool {
            let side = 1usize << (2 + depth_choice % 4);
            let grid = Grid::filled(side, colour);
            Goal::new(GoalKind::Perimeter, colour).score(&grid) == 4 * side
        }
    }
}
