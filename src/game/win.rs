//! Four-in-a-row detection.
//!
//! [`winning_line`] scans every cell as the anchor of a run in each direction.
//! [`has_winning_line_through`] only follows the lines crossing the last move, which is
//! all a game needs since any new run has to include the piece that was just placed.

use super::{
    board::Board,
    components::{Move, Player},
};

/// Length of a winning run.
pub const RUN: usize = 4;

/// Row and column steps: horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// First run of four cells owned by `player`, as (row, col) pairs starting at the anchor.
pub fn winning_line<const W: usize, const H: usize>(
    board: &Board<W, H>,
    player: Player,
) -> Option<[(usize, usize); RUN]> {
    for y in 0..H {
        for x in 0..W {
            for (dy, dx) in DIRECTIONS {
                let mut run = [(0, 0); RUN];
                let owned = (0..RUN).all(|i| {
                    let row = y as isize + dy * i as isize;
                    let col = x as isize + dx * i as isize;
                    // get_signed returns None off the board, so bounds fail before ownership
                    if board.get_signed(row, col) == Some(player) {
                        run[i] = (row as usize, col as usize);
                        true
                    } else {
                        false
                    }
                });
                if owned {
                    return Some(run);
                }
            }
        }
    }
    None
}

/// Check if `player` has four connected pieces anywhere on the board.
pub fn has_winning_line<const W: usize, const H: usize>(
    board: &Board<W, H>,
    player: Player,
) -> bool {
    winning_line(board, player).is_some()
}

/// Check if the piece placed by `mv` completes four in a row.
pub fn has_winning_line_through<const W: usize, const H: usize>(
    board: &Board<W, H>,
    mv: Move,
) -> bool {
    let (y, x) = (mv.row as isize, mv.col as isize);
    if board.get_signed(y, x) != Some(mv.player) {
        return false;
    }
    DIRECTIONS.iter().any(|&(dy, dx)| {
        let count = |sign: isize| {
            (1..RUN as isize)
                .take_while(|&i| {
                    board.get_signed(y + sign * dy * i, x + sign * dx * i) == Some(mv.player)
                })
                .count()
        };
        1 + count(1) + count(-1) >= RUN
    })
}
