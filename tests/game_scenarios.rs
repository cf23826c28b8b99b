use bitboard_checkers::game_state::game_status::is_over;
use bitboard_checkers::move_generation::capture_chain::has_further_capture;
use bitboard_checkers::move_generation::legal_move_apply::apply_move;
use bitboard_checkers::move_generation::legal_move_checks::{classify_move, validate_move};
use bitboard_checkers::utils::algebraic::{parse_coordinate, to_index};
use bitboard_checkers::utils::render_game_state::render_board;
use bitboard_checkers::{
    initialize_board, BoardState, CheckersError, CheckersGame, GameStatus, IllegalMove, MoveClass,
    Player, RulesConfig, TurnOutcome,
};

fn sq(text: &str) -> u8 {
    parse_coordinate(text).expect("test coordinate should parse")
}

#[test]
fn starting_board_matches_the_standard_layout() {
    let board = initialize_board();
    assert_eq!(board.black_pieces.count_ones(), 12);
    assert_eq!(board.white_pieces.count_ones(), 12);
    assert_eq!(board.kings, 0);
    assert_eq!(board.black_pieces & board.white_pieces, 0);
    assert_eq!(board.black_pieces >> 24, 0, "black only on rows 0-2");
    assert_eq!(board.white_pieces & ((1u64 << 40) - 1), 0, "white only on rows 5-7");
    assert_eq!(is_over(&board), GameStatus::InProgress);
}

#[test]
fn worked_examples_from_the_opening() {
    let board = initialize_board();
    // C3 holds no piece.
    assert_eq!(
        validate_move(&board, sq("C3"), sq("D4"), Player::Black),
        MoveClass::Illegal(IllegalMove::NoOwnPiece)
    );
    assert_eq!(to_index('B', 3), Ok(17));
    assert_eq!(validate_move(&board, 17, 26, Player::Black), MoveClass::Simple);

    // Backward step for a man, with the square behind emptied first.
    let mut sparse = BoardState::new_empty();
    sparse.black_pieces = 1 << 17;
    sparse.white_pieces = 1 << 62;
    assert_eq!(
        validate_move(&sparse, 17, 10, Player::Black),
        MoveClass::Illegal(IllegalMove::WrongDirection)
    );
}

#[test]
fn mask_level_and_board_level_validation_agree() {
    let board = initialize_board();
    for start in 0..64u8 {
        for end in 0..64u8 {
            for player in [Player::Black, Player::White] {
                assert_eq!(
                    classify_move(
                        board.pieces_of(player),
                        board.pieces_of(player.opponent()),
                        board.kings,
                        start,
                        end,
                        player
                    ),
                    validate_move(&board, start, end, player)
                );
            }
        }
    }
}

#[test]
fn opening_exchange_through_the_turn_driver() {
    let mut game = CheckersGame::new(RulesConfig::default());

    game.submit_move(sq("B3"), sq("C4")).expect("B3-C4");
    game.submit_move(sq("A6"), sq("B5")).expect("A6-B5");
    game.submit_move(sq("H3"), sq("G4")).expect("H3-G4");

    // B5xC4 would land on D3, which is still occupied.
    assert!(matches!(
        game.submit_move(sq("B5"), sq("D3")),
        Err(CheckersError::IllegalMove {
            reason: IllegalMove::DestinationOccupied,
            ..
        })
    ));

    game.submit_move(sq("B5"), sq("A4")).expect("B5-A4");
    assert_eq!(game.to_move(), Player::Black);
    assert_eq!(game.turns_played(), 4);
    assert_eq!(game.board().piece_count(Player::Black), 12);
    assert_eq!(game.board().piece_count(Player::White), 12);
}

#[test]
fn single_capture_from_a_real_line() {
    let mut game = CheckersGame::new(RulesConfig::default());
    game.submit_move(sq("D3"), sq("E4")).expect("D3-E4");
    game.submit_move(sq("E6"), sq("F5")).expect("E6-F5");
    game.submit_move(sq("C3"), sq("D4")).expect_err("C3 is empty");
    game.submit_move(sq("H3"), sq("G4")).expect("H3-G4");

    // F5xE4 lands on D3, which Black vacated.
    let outcome = game.submit_move(sq("F5"), sq("D3")).expect("F5xD3");
    let TurnOutcome::TurnComplete { captured, promoted } = outcome else {
        panic!("no follow-up jump should exist from D3: {outcome:?}");
    };
    assert_eq!(captured, vec![sq("E4")]);
    assert!(!promoted);
    assert_eq!(game.board().piece_count(Player::Black), 11);
}

#[test]
fn promotion_by_simple_move_for_both_sides() {
    let board = BoardState::from_masks(1 << sq("B7"), 1 << sq("G2"), 0)
        .expect("layout should be consistent");
    let black = apply_move(&board, sq("B7"), sq("A8"), None, Player::Black);
    assert!(black.is_king(sq("A8")));
    let white = apply_move(&black, sq("G2"), sq("H1"), None, Player::White);
    assert!(white.is_king(sq("H1")));
    assert_eq!(white.kings.count_ones(), 2);
    assert!(render_board(&white).contains("8 B . . . . . . . 8"));
    assert!(render_board(&white).contains("1 . . . . . . . W 1"));
}

#[test]
fn king_chain_may_reverse_direction() {
    // D2xE3 lands on F4; G3 then sits behind the capturing piece.
    let white = (1 << sq("E3")) | (1 << sq("G3")) | (1 << sq("G8"));
    let king = BoardState::from_masks(1 << sq("D2"), white, 1 << sq("D2"))
        .expect("layout should be consistent");
    let king_after = apply_move(&king, sq("D2"), sq("F4"), Some(sq("E3")), Player::Black);
    assert!(has_further_capture(&king_after, sq("F4"), Player::Black));
    assert_eq!(
        validate_move(&king_after, sq("F4"), sq("H2"), Player::Black),
        MoveClass::Capture(sq("G3"))
    );

    let man = BoardState::from_masks(1 << sq("D2"), white, 0).expect("layout should be consistent");
    let man_after = apply_move(&man, sq("D2"), sq("F4"), Some(sq("E3")), Player::Black);
    assert!(!has_further_capture(&man_after, sq("F4"), Player::Black));
}

#[test]
fn game_ends_when_one_side_is_wiped_out() {
    let mut board = initialize_board();
    board.white_pieces = 0;
    assert_eq!(is_over(&board), GameStatus::Win(Player::Black));
    board = initialize_board();
    board.black_pieces = 0;
    assert_eq!(is_over(&board), GameStatus::Win(Player::White));
}
