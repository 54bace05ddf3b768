use super::*;

// ==================== NO PROMOTION ====================

#[test]
fn test_pawn_on_last_rank_stays_a_pawn() {
    let mut board = empty_board();
    place_piece(&mut board, 1, 0, Color::White, Type::Pawn);
    place_piece(&mut board, 7, 4, Color::White, Type::King);
    place_piece(&mut board, 0, 7, Color::Black, Type::King);
    let mut state = GameState::from_board(board, Color::White);

    state.try_move(mv((1, 0), (0, 0))).unwrap();

    assert_eq!(
        state.board().piece_at(sq(0, 0)),
        Some(Piece::new(Color::White, Type::Pawn))
    );
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    let mut board = empty_board();
    place_piece(&mut board, 7, 3, Color::Black, Type::Pawn);

    assert!(board.safe_moves(Color::Black).is_empty());
}
