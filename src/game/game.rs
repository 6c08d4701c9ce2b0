use crate::game::{
    board::Board,
    components::{GameEvents, Move, Player, Status},
    error::{Error, GameResult},
    win,
};

/// Default number of columns.
pub const WIDTH: usize = 7;
/// Default number of rows.
pub const HEIGHT: usize = 6;

/// The classic 7 by 6 game.
pub type Standard = GameState<WIDTH, HEIGHT>;

/// State of one game session: the board, whose turn it is and whether the game is over.
///
/// All mutation goes through [`GameState::drop_piece`] and [`GameState::reset`].
#[derive(Debug, Clone)]
pub struct GameState<const W: usize, const H: usize> {
    board: Board<W, H>,
    current: Player,
    status: Status,
}

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'g, const W: usize, const H: usize> {
    pub board: &'g Board<W, H>,
    pub current: Player,
    pub status: Status,
}

impl<const W: usize, const H: usize> GameState<W, H> {
    /// Create a new game with an empty board and Player 1 to move.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension is zero.
    pub fn new() -> GameResult<Self> {
        Ok(Self {
            board: Board::new()?,
            current: Player::Player1,
            status: Status::InProgress,
        })
    }

    /// Drop a piece for the current player into `col` (zero indexed).
    ///
    /// On success `events` receives the placed piece, then the game over notice if the
    /// move won or filled the board. A win takes precedence over a tie.
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` once the game has been won or tied,
    /// `Error::InvalidColumn` for a column outside the board and
    /// `Error::ColumnFull` when the column has no room left.
    /// In all three cases nothing changes and no event is emitted.
    pub fn drop_piece<E: GameEvents + ?Sized>(
        &mut self,
        col: usize,
        events: &mut E,
    ) -> GameResult<Move> {
        if self.status.is_terminal() {
            log::trace!("ignoring drop in column {col}, game is over");
            return Err(Error::GameOver(self.status));
        }

        let mv = self.board.place(col, self.current).map_err(|e| {
            log::trace!("drop in column {col} rejected: {e}");
            e
        })?;
        events.on_piece_placed(mv);

        if win::has_winning_line_through(&self.board, mv) {
            self.status = Status::Won(mv.player);
        } else if self.board.is_full() {
            self.status = Status::Tied;
        } else {
            self.current = self.current.other();
            return Ok(mv);
        }

        if let Some(outcome) = self.status.outcome() {
            log::debug!("game over: {outcome}");
            events.on_game_over(outcome);
        }
        Ok(mv)
    }

    /// Start a new session: empty board, Player 1 to move.
    pub fn reset(&mut self) {
        log::debug!("resetting game");
        self.board.reset();
        self.current = Player::Player1;
        self.status = Status::InProgress;
    }

    /// Current board contents.
    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }

    /// The player to move, or the one who made the final move once the game is over.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Cells of the winning run once the game has been won.
    pub fn winning_line(&self) -> Option<[(usize, usize); win::RUN]> {
        match self.status {
            Status::Won(player) => win::winning_line(&self.board, player),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_, W, H> {
        Snapshot {
            board: &self.board,
            current: self.current,
            status: self.status,
        }
    }
}
