//! End-to-end games played through the controller.

use tictactoe_core::{Board, GameController, Player, Position, Square, Status};

fn play(controller: &mut GameController, cells: &[usize]) {
    for &cell in cells {
        let pos = Position::from_index(cell).expect("cell on the grid");
        assert!(controller.click(pos), "click on cell {} should be legal", cell);
    }
}

#[test]
fn test_top_row_win() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 5, 2]);

    assert_eq!(game.view().status(), Status::Winner(Player::X));
    assert_eq!(game.view().status().to_string(), "Winner: X");
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current_move(), 5);
}

#[test]
fn test_jump_back_then_play_overwrites() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 5, 2]);

    game.jump_to(2).expect("in range");
    let expected = Board::new()
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::Center, Player::O);
    assert_eq!(*game.current_board(), expected);
    assert_eq!(game.view().status().to_string(), "Next player: X");

    assert!(game.click(Position::TopCenter));
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 3);
    assert_eq!(
        *game.current_board(),
        expected.with_mark(Position::TopCenter, Player::X)
    );
}

#[test]
fn test_won_game_still_allows_jumping() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 5, 2]);

    assert!(!game.click(Position::BottomLeft));
    game.jump_to(4).expect("in range");
    assert_eq!(game.view().winner(), None);

    // X to move at pointer 4; the winning branch is gone once X plays.
    assert!(game.click(Position::BottomRight));
    assert_eq!(game.history().len(), 6);
    assert!(game.current_board().is_empty(Position::TopRight));
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.view().status().to_string(), "Next player: O");
}

#[test]
fn test_jump_forward_after_jump_back() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 8]);

    game.jump_to(0).expect("in range");
    assert!(game.current_board().is_blank());
    game.jump_to(3).expect("in range");
    assert_eq!(game.current_board().occupied_count(), 3);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_move_list_labels() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4]);

    let labels: Vec<String> = game.moves().iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
}

#[test]
fn test_full_board_without_winner_keeps_prompting() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.view().winner(), None);
    assert_eq!(game.current_board().occupied_count(), 9);
    for pos in Position::ALL {
        assert!(!game.click(pos));
    }
    assert_eq!(game.history().len(), 10);
}
