/// One of the two players. A cell on the board holds `Some(Player)` once a piece lands in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first.
    Player1,
    /// Moves second.
    Player2,
}

impl Player {
    /// The player whose turn comes after this one.
    pub fn other(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Board glyph used by the text rendering.
    pub(crate) fn glyph(self) -> char {
        match self {
            Player::Player1 => 'x',
            Player::Player2 => 'o',
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::Player1
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
        }
    }
}

/// A piece that was just placed. Rows count from the top, both indices are zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    /// Owner of the new piece.
    pub player: Player,
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    /// Terminal, carries the winner.
    Won(Player),
    /// Terminal, the board filled up without a winner.
    Tied,
}

impl Status {
    /// `Won` and `Tied` accept no further drops.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// The outcome of a finished game, `None` while still in progress.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::InProgress => None,
            Status::Won(player) => Some(Outcome::Winner(player)),
            Status::Tied => Some(Outcome::Tie),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::InProgress
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} won!"),
            Outcome::Tie => write!(f, "Tie!"),
        }
    }
}

/// Something the game reports to whoever is displaying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PiecePlaced(Move),
    GameOver(Outcome),
}

/// Receiver for the events emitted while a drop is applied.
///
/// Both methods default to doing nothing, so an adapter only implements what it renders.
pub trait GameEvents {
    /// A piece landed at `mv.row`, `mv.col`.
    fn on_piece_placed(&mut self, _mv: Move) {}

    /// The game reached a terminal state. Emitted exactly once per game.
    fn on_game_over(&mut self, _outcome: Outcome) {}
}

/// Ignore all events.
impl GameEvents for () {}

/// Record events in the order they were emitted.
impl GameEvents for Vec<Event> {
    fn on_piece_placed(&mut self, mv: Move) {
        self.push(Event::PiecePlaced(mv));
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.push(Event::GameOver(outcome));
    }
}
