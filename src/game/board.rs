use super::{
    components::{Move, Player},
    error::{Error, GameResult},
};

/// Grid of `H` rows by `W` columns. Row 0 is the top row.
///
/// Pieces only enter through [`Board::place`], so every column is a contiguous stack
/// resting on the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const W: usize, const H: usize> {
    board: [[Option<Player>; W]; H],
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Create a new, empty Board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension is zero.
    pub fn new() -> GameResult<Self> {
        if W == 0 || H == 0 {
            return Err(Error::InvalidDim {
                width: W,
                height: H,
            });
        }
        Ok(Self {
            board: [[None; W]; H],
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        H
    }

    /// Place a piece for `player` in the given column. The column is zero indexed.
    ///
    /// Returns the resulting move, with the row the piece landed in.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if the column is outside the board dimensions.
    ///
    /// Returns `Error::ColumnFull` if there is no empty cell left in the column.
    pub fn place(&mut self, col: usize, player: Player) -> GameResult<Move> {
        if col >= W {
            return Err(Error::InvalidColumn {
                column: col,
                width: W,
            });
        }
        for row in (0..H).rev() {
            if self.board[row][col].is_none() {
                self.board[row][col] = Some(player);
                log::trace!("{player} placed at row {row}, column {col}");
                return Ok(Move { row, col, player });
            }
        }
        Err(Error::ColumnFull(col))
    }

    /// Owner of the cell at (`row`, `col`). Out of range cells are reported as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if row >= H || col >= W {
            return None;
        }
        self.board[row][col]
    }

    /// Owner of a cell given signed coordinates, `None` when off the board.
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<Player> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Number of pieces stacked in a column.
    pub fn column_height(&self, col: usize) -> usize {
        if col >= W {
            return 0;
        }
        (0..H).filter(|&row| self.board[row][col].is_some()).count()
    }

    /// A column is full once its top cell is taken.
    pub fn is_column_full(&self, col: usize) -> bool {
        col < W && self.board[0][col].is_some()
    }

    /// Every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.board.iter().all(|row| row.iter().all(Option::is_some))
    }

    /// Total number of pieces on the board.
    pub fn occupied(&self) -> usize {
        self.board.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Clear every cell.
    pub(crate) fn reset(&mut self) {
        self.board = [[None; W]; H];
    }

    /// Build a board from text rows, top row first: `.` empty, `x` Player 1, `o` Player 2.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; H]) -> Self {
        let mut board = [[None; W]; H];
        for (y, line) in rows.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                board[y][x] = match c {
                    'x' => Some(Player::Player1),
                    'o' => Some(Player::Player2),
                    _ => None,
                };
            }
        }
        Self { board }
    }
}

impl<const W: usize, const H: usize> std::fmt::Display for Board<W, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#")?;
        for x in 1..=W {
            if x < 10 {
                write!(f, "-{x}-")?;
            } else if x < 100 {
                write!(f, "{x}-")?;
            } else {
                write!(f, "{x}")?;
            }
        }
        writeln!(f, "#")?;
        for row in &self.board {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    None => write!(f, " . ")?,
                    Some(player) => write!(f, " {} ", player.glyph())?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "#")?;
        for _ in 1..=W {
            write!(f, "---")?;
        }
        writeln!(f, "#")
    }
}
