use connect4_core::{
    game::win, Board, Error, Event, GameState, Move, Outcome, Player, Standard, Status, HEIGHT,
    WIDTH,
};
use rand::Rng;

const P1: Player = Player::Player1;
const P2: Player = Player::Player2;

fn play(game: &mut Standard, cols: &[usize]) -> Vec<Event> {
    let mut events: Vec<Event> = Vec::new();
    for &col in cols {
        game.drop_piece(col, &mut events).unwrap();
    }
    events
}

fn game_overs(events: &[Event]) -> Vec<Outcome> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::GameOver(outcome) => Some(*outcome),
            Event::PiecePlaced(_) => None,
        })
        .collect()
}

fn assert_columns_contiguous<const W: usize, const H: usize>(board: &Board<W, H>) {
    for col in 0..W {
        let height = board.column_height(col);
        for row in 0..H {
            assert_eq!(
                board.get(row, col).is_some(),
                row >= H - height,
                "gap in column {col}\n{board}"
            );
        }
    }
}

#[test]
fn first_drop_goes_to_the_bottom_center() {
    let mut game = Standard::new().unwrap();
    let events = play(&mut game, &[3]);

    let placed = Move {
        row: 5,
        col: 3,
        player: P1,
    };
    assert_eq!(events, vec![Event::PiecePlaced(placed)]);
    assert_eq!(game.board().get(5, 3), Some(P1));
    assert_eq!(game.current_player(), P2);
    assert_eq!(game.status(), Status::InProgress);
}

#[test]
fn bottom_row_horizontal_win() {
    let mut game = Standard::new().unwrap();
    let events = play(&mut game, &[0, 0, 1, 1, 2, 2, 3]);

    assert!(win::has_winning_line(game.board(), P1));
    assert_eq!(game.status(), Status::Won(P1));
    assert_eq!(game_overs(&events), vec![Outcome::Winner(P1)]);
}

#[test]
fn rising_diagonal_win() {
    let mut game = Standard::new().unwrap();
    let events = play(&mut game, &[0, 1, 1, 2, 3, 2, 2, 3, 4, 3, 3]);

    for (row, col) in [(5, 0), (4, 1), (3, 2), (2, 3)] {
        assert_eq!(game.board().get(row, col), Some(P1));
    }
    assert_eq!(game.status(), Status::Won(P1));
    assert_eq!(game.winning_line(), Some([(2, 3), (3, 2), (4, 1), (5, 0)]));
    assert_eq!(game_overs(&events), vec![Outcome::Winner(P1)]);
}

#[test]
fn dropping_into_a_full_column_changes_nothing() {
    let mut game = Standard::new().unwrap();
    play(&mut game, &[4; HEIGHT]);
    let snapshot = game.snapshot();
    let (board, current) = (snapshot.board.clone(), snapshot.current);
    let mut events: Vec<Event> = Vec::new();

    assert!(matches!(
        game.drop_piece(4, &mut events),
        Err(Error::ColumnFull(4))
    ));
    assert!(events.is_empty());
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_player(), current);
}

#[test]
fn full_board_without_a_run_is_a_tie() {
    let mut game = Standard::new().unwrap();
    let events = play(
        &mut game,
        &[
            4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0, 4, 6,
            5, 2, 0, 4, 2, 4, 2, 2, 2, 3, 3, 3, 3,
        ],
    );

    assert!(game.board().is_full());
    assert!(!win::has_winning_line(game.board(), P1));
    assert!(!win::has_winning_line(game.board(), P2));
    assert_eq!(game.status(), Status::Tied);
    assert_eq!(game_overs(&events), vec![Outcome::Tie]);
    assert_eq!(events.len(), WIDTH * HEIGHT + 1);

    let mut more: Vec<Event> = Vec::new();
    for col in 0..WIDTH {
        assert!(matches!(
            game.drop_piece(col, &mut more),
            Err(Error::GameOver(Status::Tied))
        ));
    }
    assert!(more.is_empty());
}

#[test]
fn random_games_keep_the_rules() {
    let mut rng = rand::thread_rng();
    for _ in 0..300 {
        let mut game = Standard::new().unwrap();
        let mut events: Vec<Event> = Vec::new();

        while !game.status().is_terminal() {
            let col = rng.gen_range(0..WIDTH);
            let before = game.board().clone();
            let height = before.column_height(col);
            let mover = game.current_player();
            let seen = events.len();

            match game.drop_piece(col, &mut events) {
                Ok(mv) => {
                    assert_eq!(mv, Move { row: HEIGHT - 1 - height, col, player: mover });
                    assert_eq!(game.board().column_height(col), height + 1);
                    assert_eq!(game.board().occupied(), before.occupied() + 1);
                    assert_eq!(events[seen], Event::PiecePlaced(mv));
                    if game.status().is_terminal() {
                        assert_eq!(game.current_player(), mover);
                    } else {
                        assert_eq!(game.current_player(), mover.other());
                        assert!(!game.board().is_full());
                    }
                }
                Err(Error::ColumnFull(c)) => {
                    assert_eq!(c, col);
                    assert_eq!(height, HEIGHT);
                    assert_eq!(game.board(), &before);
                    assert_eq!(events.len(), seen);
                }
                Err(e) => panic!("unexpected error {e}"),
            }
            assert_columns_contiguous(game.board());
        }

        let overs = game_overs(&events);
        assert_eq!(overs.len(), 1);
        match game.status() {
            Status::Won(player) => {
                assert_eq!(overs[0], Outcome::Winner(player));
                assert!(win::has_winning_line(game.board(), player));
            }
            Status::Tied => {
                assert_eq!(overs[0], Outcome::Tie);
                assert!(game.board().is_full());
            }
            Status::InProgress => unreachable!(),
        }
    }
}

#[test]
fn custom_dimensions() {
    let mut game = GameState::<4, 4>::new().unwrap();
    let events = play_small(&mut game, &[0, 1, 0, 1, 0, 1, 0]);

    assert_eq!(game.status(), Status::Won(P1));
    assert_eq!(game.winning_line(), Some([(0, 0), (1, 0), (2, 0), (3, 0)]));
    assert_eq!(game_overs(&events), vec![Outcome::Winner(P1)]);
    assert!(matches!(
        game.drop_piece(4, &mut ()),
        Err(Error::GameOver(_))
    ));

    game.reset();
    assert!(matches!(
        game.drop_piece(4, &mut ()),
        Err(Error::InvalidColumn { column: 4, width: 4 })
    ));
}

fn play_small(game: &mut GameState<4, 4>, cols: &[usize]) -> Vec<Event> {
    let mut events: Vec<Event> = Vec::new();
    for &col in cols {
        game.drop_piece(col, &mut events).unwrap();
    }
    events
}
