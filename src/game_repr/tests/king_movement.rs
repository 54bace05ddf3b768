use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_one_square_every_direction() {
    let mut board = empty_board();
    place_piece(&mut board, 4, 4, Color::White, Type::King);

    let moves = board.safe_moves(Color::White);
    assert_eq!(moves.len(), 8);
    for dr in -1i32..=1 {
        for dc in -1i32..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let to = ((4 + dr) as u8, (4 + dc) as u8);
            assert!(has_move(&moves, (4, 4), to));
        }
    }
}

#[test]
fn test_king_cannot_step_two_squares_off_home_rank_vertically() {
    let mut board = empty_board();
    place_piece(&mut board, 4, 4, Color::White, Type::King);

    assert!(!board.is_legal(mv((4, 4), (2, 4))));
    assert!(!board.is_legal(mv((4, 4), (2, 2))));
}

#[test]
fn test_king_in_corner() {
    let mut board = empty_board();
    place_piece(&mut board, 0, 0, Color::Black, Type::King);

    let moves = board.safe_moves(Color::Black);
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_king_cannot_move_into_check() {
    let mut board = empty_board();
    place_piece(&mut board, 7, 4, Color::White, Type::King);
    place_piece(&mut board, 0, 5, Color::Black, Type::Rook);

    // Geometrically fine, but the f-file is covered
    assert!(board.is_legal(mv((7, 4), (7, 5))));
    assert!(!board.is_safe_move(mv((7, 4), (7, 5)), Color::White));
    assert!(!board.is_safe_move(mv((7, 4), (6, 5)), Color::White));
    assert!(board.is_safe_move(mv((7, 4), (7, 3)), Color::White));
}

#[test]
fn test_king_can_capture_undefended_piece() {
    let mut board = empty_board();
    place_piece(&mut board, 7, 4, Color::White, Type::King);
    place_piece(&mut board, 6, 4, Color::Black, Type::Queen);

    assert!(board.is_in_check(Color::White));
    assert!(board.is_safe_move(mv((7, 4), (6, 4)), Color::White));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let mut board = empty_board();
    place_piece(&mut board, 7, 4, Color::White, Type::King);
    place_piece(&mut board, 6, 4, Color::Black, Type::Queen);
    place_piece(&mut board, 5, 4, Color::Black, Type::Rook);

    assert!(!board.is_safe_move(mv((7, 4), (6, 4)), Color::White));
}
