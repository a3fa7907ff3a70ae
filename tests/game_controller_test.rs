//! Tests for the turn state machine.

use noughts::{GameController, GameStatus, MoveError, Outcome, PlaceError, Round, Square, Token};

fn play_all(game: &mut GameController, moves: &[(usize, usize)]) {
    for &(row, column) in moves {
        game.play_round(row, column).expect("legal move");
    }
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = GameController::new();
    play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2)]);
    let round = game.play_round(0, 2).expect("winning move");

    assert_eq!(round, Round::Finished(Outcome::Win(Token::First)));
    for column in 0..3 {
        assert_eq!(game.board().square(0, column), Some(Square::Taken(Token::First)));
    }
    assert_eq!(game.board().check_winner(), Some(Outcome::Win(Token::First)));
    assert!(game.is_over());
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Player One"));
}

#[test]
fn test_tie_scenario() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    play_all(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)],
    );
    let round = game.play_round(2, 2).expect("final move");

    assert_eq!(round, Round::Finished(Outcome::Tie));
    assert_eq!(game.status(), GameStatus::Over(Outcome::Tie));
    assert!(game.winner().is_none());
}

#[test]
fn test_same_cell_twice() {
    let mut game = GameController::new();
    game.play_round(0, 0).unwrap();

    let result = game.play_round(0, 0);
    assert_eq!(
        result,
        Err(MoveError::InvalidMove(PlaceError::Occupied { row: 0, column: 0 }))
    );
    assert_eq!(game.board().square(0, 0), Some(Square::Taken(Token::First)));
    assert_eq!(game.active_player().token(), Token::Second);
}

#[test]
fn test_turn_alternation() {
    let mut game = GameController::new();
    let mut expected = Token::First;
    for (row, column) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)] {
        assert_eq!(game.active_player().token(), expected);
        assert!(game.play_round(3, 3).is_err());
        assert_eq!(game.active_player().token(), expected);

        assert_eq!(
            game.play_round(row, column),
            Ok(Round::Continue { next: expected.opponent() })
        );
        expected = expected.opponent();
    }
}

#[test]
fn test_terminal_state_is_absorbing() {
    let mut game = GameController::new();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let result = game.result();

    for row in 0..4 {
        for column in 0..4 {
            assert_eq!(game.play_round(row, column), Err(MoveError::GameOver));
            assert_eq!(game.result(), result);
            assert!(game.is_over());
        }
    }
}

#[test]
fn test_tie_is_absorbing() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    play_all(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(game.result(), Some(Outcome::Tie));

    let board = game.board().clone();
    assert_eq!(game.play_round(1, 1), Err(MoveError::GameOver));
    assert_eq!(game.play_round(5, 0), Err(MoveError::GameOver));
    assert_eq!(game.result(), Some(Outcome::Tie));
    assert!(game.is_over());
    assert_eq!(game.board(), &board);
}

#[test]
fn test_restart_is_a_fresh_controller() {
    let mut game = GameController::with_names("Ada", "Grace");
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(game.is_over());

    let names = game.players().clone().map(|p| p.name().clone());
    game = GameController::with_names(&names[0], &names[1]);

    assert!(!game.is_over());
    assert_eq!(game.result(), None);
    assert_eq!(game.active_player().name(), "Ada");
    assert_eq!(game.board().empty_cells().len(), 9);
}

#[test]
fn test_players_have_distinct_tokens() {
    let game = GameController::new();
    let [one, two] = game.players();
    assert_eq!(one.name(), "Player One");
    assert_eq!(two.name(), "Player Two");
    assert_ne!(one.token(), two.token());
}

#[test]
fn test_state_serializes() {
    let mut game = GameController::new();
    game.play_round(1, 1).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["active"], "Second");
    assert_eq!(json["status"], "InProgress");
}

#[test]
fn test_forged_state_is_rejected_on_load() {
    let mut game = GameController::new();
    game.play_round(0, 0).unwrap();

    let mut json = serde_json::to_value(&game).unwrap();
    for column in 0..3 {
        json["board"]["grid"][0][column]["value"] = serde_json::json!({ "Taken": "Second" });
    }
    assert!(serde_json::from_value::<GameController>(json).is_err());

    let json = serde_json::to_value(&game).unwrap();
    let restored: GameController = serde_json::from_value(json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.active_player().token(), Token::Second);
}
