//! Line based stdin/stdout front end for a [`GameState`].

mod input;

use std::io::{BufRead, Write};

use crate::game::{Error, Event, GameResult, GameState};
use input::Input;

/// Plays games read line by line from `R`, rendering to `O`.
#[derive(Debug)]
pub struct Terminal<R, O, const W: usize, const H: usize> {
    game: GameState<W, H>,
    input: R,
    output: O,
}

impl<R: BufRead, O: Write, const W: usize, const H: usize> Terminal<R, O, W, H> {
    /// Create a terminal with a fresh game.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either board dimension is zero.
    pub fn new(input: R, output: O) -> GameResult<Self> {
        Ok(Self {
            game: GameState::new()?,
            input,
            output,
        })
    }

    pub fn game(&self) -> &GameState<W, H> {
        &self.game
    }

    /// Run rounds until the player quits or the input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures end the loop early. Rejected drops are reported and ignored.
    pub fn run(&mut self) -> GameResult<()> {
        loop {
            if self.game.status().is_terminal() {
                writeln!(self.output, "Start new round? [Y/n]\t(type \"help\" for help page)")?;
                match self.read()? {
                    Some(Ok(Input::Enter | Input::Yes | Input::New)) => self.game.reset(),
                    None | Some(Ok(Input::No | Input::Quit)) => break,
                    Some(Ok(Input::Help)) => self.help()?,
                    _ => writeln!(self.output, "Invalid")?,
                }
                continue;
            }

            write!(self.output, "{}", self.game.board())?;
            writeln!(self.output, "{}'s turn.", self.game.current_player())?;

            match self.read()? {
                None | Some(Ok(Input::Quit)) => break,
                Some(Ok(Input::Col(col))) => self.drop_in(col)?,
                Some(Ok(Input::New)) => self.game.reset(),
                Some(Ok(Input::Help)) => self.help()?,
                Some(Ok(input)) => {
                    writeln!(self.output, "Invalid input. Must be a number between 1 and {W}")?;
                    log::trace!("unexpected input during a round: {input:?}");
                }
                Some(Err(e)) => {
                    writeln!(self.output, "Invalid input. Must be a number between 1 and {W}")?;
                    log::trace!("{e}");
                }
            }
        }
        Ok(())
    }

    /// Read one line. `None` at end of input.
    fn read(&mut self) -> GameResult<Option<GameResult<Input>>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.parse()))
    }

    /// Drop into a column given as shown on screen, starting at 1.
    fn drop_in(&mut self, col: usize) -> GameResult<()> {
        let Some(index) = col.checked_sub(1) else {
            writeln!(self.output, "Column {col} does not exist!")?;
            return Ok(());
        };

        let mut events: Vec<Event> = Vec::new();
        match self.game.drop_piece(index, &mut events) {
            Ok(_) => (),
            Err(Error::ColumnFull(_)) => writeln!(self.output, "Column {col} is already full!")?,
            Err(Error::InvalidColumn { .. }) => {
                writeln!(self.output, "Column {col} does not exist!")?
            }
            Err(e) => return Err(e),
        }

        for event in events {
            match event {
                Event::PiecePlaced(mv) => {
                    writeln!(self.output, "{} placed in column {}", mv.player, mv.col + 1)?
                }
                Event::GameOver(outcome) => {
                    write!(self.output, "{}", self.game.board())?;
                    writeln!(self.output, "{outcome}")?;
                    log::info!("{outcome}");
                }
            }
        }
        Ok(())
    }

    fn help(&mut self) -> GameResult<()> {
        writeln!(
            self.output,
            "Place a piece in a column by typing a number between 1 and {W}"
        )?;
        writeln!(self.output, " (the column numbers are visible above the columns)")?;
        writeln!(self.output, "Commands")?;
        writeln!(self.output, "  help\t\t\tshow this page")?;
        writeln!(self.output, "  new\t\t\tstart over with an empty board")?;
        writeln!(self.output, "  yes\t\t\tconfirm action (only when applicable)")?;
        writeln!(self.output, "  no\t\t\tdecline action (only when applicable)")?;
        writeln!(self.output, "  quit\t\t\tquit")?;
        writeln!(self.output, "Aliases")?;
        writeln!(self.output, "  h, ?\t\t\tshort for help")?;
        writeln!(self.output, "  reset, restart\tshort for new")?;
        writeln!(self.output, "  y\t\t\tshort for yes")?;
        writeln!(self.output, "  n\t\t\tshort for no")?;
        writeln!(self.output, "  exit, stop, q, e, s\tshort for quit")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, Status};

    fn run(script: &str) -> (String, Status) {
        let mut out = Vec::new();
        let mut term = Terminal::<_, _, 7, 6>::new(script.as_bytes(), &mut out).unwrap();
        term.run().unwrap();
        let status = term.game().status();
        drop(term);
        (String::from_utf8(out).unwrap(), status)
    }

    #[test]
    fn plays_until_a_win() {
        let (out, status) = run("1\n1\n2\n2\n3\n3\n4\nn\n");
        assert_eq!(status, Status::Won(Player::Player1));
        assert!(out.contains("Player 1 placed in column 4"));
        assert!(out.contains("Player 1 won!"));
        assert!(out.contains("Start new round? [Y/n]"));
    }

    #[test]
    fn reports_rejected_columns() {
        let (out, status) = run("0\n8\n1\n1\n1\n1\n1\n1\n1\nq\n");
        assert_eq!(status, Status::InProgress);
        assert!(out.contains("Column 0 does not exist!"));
        assert!(out.contains("Column 8 does not exist!"));
        assert!(out.contains("Column 1 is already full!"));
    }

    #[test]
    fn invalid_input_is_ignored() {
        let (out, status) = run("banana\ny\n");
        assert_eq!(status, Status::InProgress);
        assert!(out.contains("Invalid input. Must be a number between 1 and 7"));
    }

    #[test]
    fn new_round_after_game_over() {
        let (out, status) = run("1\n1\n2\n2\n3\n3\n4\ny\n5\n");
        assert_eq!(status, Status::InProgress);
        assert!(out.contains("Player 1 placed in column 5"));
        assert_eq!(out.matches("won!").count(), 1);
    }

    #[test]
    fn end_of_input_stops() {
        let (out, status) = run("");
        assert_eq!(status, Status::InProgress);
        assert!(out.ends_with("Player 1's turn.\n"));
    }
}
