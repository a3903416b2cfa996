use crate::Colour;

/// A uniform-resolution projection of a board.
///
/// Always square, row-major, fully populated. Produced by
/// [`Board::flatten`](crate::Board::flatten); scoring reads a grid and never
/// holds on to it past the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Colour>,
}

impl Grid {
    pub(crate) fn filled(side: usize, colour: Colour) -> Self {
        Self {
            side,
            cells: vec![colour; side * side],
        }
    }

    /// Builds a grid from rows of equal length, for hand-constructed
    /// positions.
    ///
    /// Panics if the rows do not form a square.
    pub fn from_rows(rows: &[&[Colour]]) -> Self {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for row in rows {
            assert_eq!(row.len(), side, "grid rows must form a square");
            cells.extend_from_slice(row);
        }
        Self { side, cells }
    }

    /// The number of cells along one edge.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> Colour {
        self.cells[row * self.side + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, colour: Colour) {
        let side = self.side;
        self.cells[row * side + col] = colour;
    }
}
