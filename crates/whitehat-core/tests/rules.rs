//! End-to-end rule checks through the public API.

use whitehat_core::{Board, Game, InvalidMove, Move, Piece, PieceKind, Position, Side};

fn sq(file: i8, rank: i8) -> Position {
    Position::new(file, rank)
}

fn mv(from: (i8, i8), to: (i8, i8)) -> Move {
    Move::new(sq(from.0, from.1), sq(to.0, to.1))
}

/// Swap sides and flip ranks.
fn mirror(board: &Board) -> Board {
    let mut mirrored = Board::empty();
    for (pos, piece) in board.pieces() {
        mirrored.place(
            sq(pos.file(), 7 - pos.rank()),
            Piece::new(piece.kind(), piece.side().opponent()),
        );
    }
    mirrored
}

// ── Setup ───────────────────────────────────────────────────────────────────

#[test]
fn initial_setup_is_standard() {
    let board = Board::new();
    let mut kings = [0; Side::COUNT];
    let mut counts = std::collections::HashMap::new();
    for (_, piece) in board.pieces() {
        *counts.entry((piece.side(), piece.kind())).or_insert(0) += 1;
        if piece.kind() == PieceKind::King {
            kings[piece.side().index()] += 1;
        }
    }
    assert_eq!(kings, [1, 1]);
    for side in Side::ALL {
        assert_eq!(counts[&(side, PieceKind::Pawn)], 8);
        assert_eq!(counts[&(side, PieceKind::Rook)], 2);
        assert_eq!(counts[&(side, PieceKind::Knight)], 2);
        assert_eq!(counts[&(side, PieceKind::Bishop)], 2);
        assert_eq!(counts[&(side, PieceKind::Queen)], 1);
    }
    assert_eq!(board.pieces().count(), 32);
}

#[test]
fn out_of_range_moves_never_valid() {
    let board = Board::new();
    let outside = [(-1, 0), (0, -1), (8, 0), (0, 8), (-3, 9)];
    for side in Side::ALL {
        for from in Position::all() {
            for &(f, r) in &outside {
                assert!(!board.is_valid_move(Move::new(from, sq(f, r)), side));
                assert!(!board.is_valid_move(Move::new(sq(f, r), from), side));
            }
        }
    }
}

// ── Round trip ──────────────────────────────────────────────────────────────

#[test]
fn quiet_move_and_inverse_restore_board() {
    let mut board = Board::new();
    let original = board.clone();
    for quiet in [mv((6, 0), (5, 2)), mv((4, 1), (4, 3)), mv((3, 6), (3, 4))] {
        board.apply_move(quiet);
        board.apply_move(quiet.reversed());
        assert_eq!(board.grid(), original.grid());
    }

    let mut board = Board::empty();
    board.place(sq(4, 0), Piece::new(PieceKind::King, Side::White));
    let before = board.clone();
    board.apply_move(mv((4, 0), (4, 1)));
    assert_eq!(board.king_position(Side::White), Some(sq(4, 1)));
    board.apply_move(mv((4, 1), (4, 0)));
    assert_eq!(board, before);
}

#[test]
fn capture_and_inverse_do_not_restore() {
    let mut board = Board::new();
    let original = board.clone();
    let capture = mv((3, 0), (3, 6));
    board.apply_move(capture);
    board.apply_move(capture.reversed());
    assert_ne!(board.grid(), original.grid());
    assert!(board.piece_at(sq(3, 6)).is_none());
}

// ── Self-check rejection ────────────────────────────────────────────────────

#[test]
fn sole_blocker_against_each_slider_is_pinned() {
    for (slider, at, blocker, escape) in [
        (PieceKind::Rook, (4, 7), (4, 3), (3, 3)),
        (PieceKind::Bishop, (7, 3), (5, 1), (5, 2)),
        (PieceKind::Queen, (0, 4), (2, 2), (2, 3)),
    ] {
        let mut board = Board::empty();
        board.place(sq(4, 0), Piece::new(PieceKind::King, Side::White));
        board.place(sq(at.0, at.1), Piece::new(slider, Side::Black));
        board.place(sq(blocker.0, blocker.1), Piece::new(PieceKind::Rook, Side::White));
        let mut game = Game::with_board(board);

        let escape = mv(blocker, escape);
        assert!(game.board().is_valid_move(escape, Side::White));
        assert_eq!(game.make_move(escape), Err(InvalidMove::LeavesKingInCheck));
        assert_eq!(game.history(), "");
        assert_eq!(game.current_side(), Side::White);
    }
}

#[test]
fn capturing_the_pinner_is_allowed() {
    let mut board = Board::empty();
    board.place(sq(4, 0), Piece::new(PieceKind::King, Side::White));
    board.place(sq(4, 1), Piece::new(PieceKind::Rook, Side::White));
    board.place(sq(4, 7), Piece::new(PieceKind::Rook, Side::Black));
    let mut game = Game::with_board(board);
    game.make_move(mv((4, 1), (4, 7))).unwrap();
    assert_eq!(game.board().pieces().count(), 2);
}

#[test]
fn short_game_through_make_move() {
    let mut game = Game::new();
    for (text, side) in [
        ("e7e5", Side::White),
        ("e2e4", Side::Black),
        ("d8h4", Side::White),
    ] {
        assert_eq!(game.current_side(), side);
        game.make_move(Move::from_text(text).unwrap()).unwrap();
    }
    // The f7 pawn still shields e8 from the queen on h5.
    assert_eq!(game.history(), "WHITE: e2e4\nBLACK: e7e5\nWHITE: d1h5\n");
    assert!(!game.in_check());
}

// ── Special moves ───────────────────────────────────────────────────────────

fn castle_ready() -> Board {
    let mut board = Board::empty();
    board.place(sq(4, 0), Piece::new(PieceKind::King, Side::White));
    board.place(sq(7, 0), Piece::new(PieceKind::Rook, Side::White));
    board.place(sq(4, 7), Piece::new(PieceKind::King, Side::Black));
    board
}

#[test]
fn castling_end_to_end() {
    let mut game = Game::with_board(castle_ready());
    assert!(game.special_moves().attempt_castling(mv((4, 0), (6, 0)), Side::White));
    assert!(game.board().piece_at(sq(6, 0)).unwrap().is(PieceKind::King, Side::White));
    assert!(game.board().piece_at(sq(5, 0)).unwrap().is(PieceKind::Rook, Side::White));
}

#[test]
fn castling_refusals_leave_board_unchanged() {
    // ordinary moves do not mark pieces as moved
    let mut game = Game::with_board(castle_ready());
    game.make_move(mv((7, 0), (7, 3))).unwrap();
    game.make_move(mv((4, 7), (3, 7))).unwrap();
    game.make_move(mv((7, 3), (7, 0))).unwrap();
    assert!(!game.board().piece_at(sq(7, 0)).unwrap().has_moved());
    assert!(game.special_moves().attempt_castling(mv((4, 0), (6, 0)), Side::White));

    // rook has moved: castle, walk both pieces home, try again
    let mut board = game.board().clone();
    board.apply_move(mv((6, 0), (4, 0)));
    board.apply_move(mv((5, 0), (7, 0)));
    board.place(sq(4, 0), Piece::new(PieceKind::King, Side::White));
    assert!(board.piece_at(sq(7, 0)).unwrap().has_moved());
    let mut game = Game::with_board(board);
    let before = game.clone();
    assert!(!game.special_moves().attempt_castling(mv((4, 0), (6, 0)), Side::White));
    assert_eq!(game, before);

    // path blocked
    let mut board = castle_ready();
    board.place(sq(5, 0), Piece::new(PieceKind::Bishop, Side::White));
    let mut game = Game::with_board(board);
    let before = game.clone();
    assert!(!game.special_moves().attempt_castling(mv((4, 0), (6, 0)), Side::White));
    assert_eq!(game, before);

    // path attacked
    let mut board = castle_ready();
    board.place(sq(5, 5), Piece::new(PieceKind::Rook, Side::Black));
    let mut game = Game::with_board(board);
    let before = game.clone();
    assert!(!game.special_moves().attempt_castling(mv((4, 0), (6, 0)), Side::White));
    assert_eq!(game, before);

    // no rook in the corner
    let mut board = castle_ready();
    board.remove(sq(7, 0));
    let mut game = Game::with_board(board);
    let before = game.clone();
    assert!(!game.special_moves().attempt_castling(mv((4, 0), (6, 0)), Side::White));
    assert_eq!(game, before);
}

#[test]
fn en_passant_after_double_step() {
    let mut board = Board::empty();
    board.place(sq(4, 0), Piece::new(PieceKind::King, Side::White));
    board.place(sq(4, 7), Piece::new(PieceKind::King, Side::Black));
    board.place(sq(4, 4), Piece::new(PieceKind::Pawn, Side::White));
    board.place(sq(3, 6), Piece::new(PieceKind::Pawn, Side::Black));
    let mut game = Game::with_board(board);

    game.make_move(mv((4, 0), (4, 1))).unwrap();
    game.make_move(mv((3, 6), (3, 4))).unwrap();
    assert!(game.special_moves().attempt_en_passant(mv((4, 4), (3, 5)), Side::White));

    let board = game.board();
    assert!(board.piece_at(sq(3, 4)).is_none());
    assert!(board.piece_at(sq(3, 5)).unwrap().is(PieceKind::Pawn, Side::White));
    assert!(
        board.pieces().all(|(_, p)| !p.is(PieceKind::Pawn, Side::Black)),
        "the black pawn must be gone from the board"
    );
}

#[test]
fn promotion_rank_rules() {
    let mut board = Board::empty();
    board.place(sq(2, 7), Piece::new(PieceKind::Pawn, Side::White));
    board.place(sq(3, 6), Piece::new(PieceKind::Pawn, Side::White));
    let mut game = Game::with_board(board);

    game.special_moves().promote_pawn(sq(2, 7), PieceKind::Rook).unwrap();
    assert!(game.board().piece_at(sq(2, 7)).unwrap().is(PieceKind::Rook, Side::White));

    let err = game.special_moves().promote_pawn(sq(3, 6), PieceKind::Queen).unwrap_err();
    assert!(matches!(err, InvalidMove::NotOnPromotionRank { .. }));
    assert!(game.board().piece_at(sq(3, 6)).unwrap().is(PieceKind::Pawn, Side::White));
}

// ── Symmetry ────────────────────────────────────────────────────────────────

#[test]
fn check_detection_is_side_symmetric() {
    let mut positions = Vec::new();

    let mut board = Board::empty();
    board.place(sq(4, 0), Piece::new(PieceKind::King, Side::White));
    board.place(sq(4, 7), Piece::new(PieceKind::King, Side::Black));
    board.place(sq(7, 3), Piece::new(PieceKind::Bishop, Side::Black));
    positions.push(board);

    let mut board = Board::empty();
    board.place(sq(2, 2), Piece::new(PieceKind::King, Side::White));
    board.place(sq(6, 6), Piece::new(PieceKind::King, Side::Black));
    board.place(sq(3, 3), Piece::new(PieceKind::Pawn, Side::Black));
    board.place(sq(5, 5), Piece::new(PieceKind::Knight, Side::White));
    positions.push(board);

    let mut board = Board::new();
    board.apply_move(mv((4, 1), (4, 3)));
    board.apply_move(mv((5, 6), (5, 4)));
    board.apply_move(mv((3, 0), (7, 4)));
    positions.push(board);

    positions.push(Board::new());

    for board in &positions {
        let mirrored = mirror(board);
        for side in Side::ALL {
            assert_eq!(
                board.is_in_check(side),
                mirrored.is_in_check(side.opponent()),
                "mirror mismatch for {side}"
            );
        }
    }
    assert!(positions[0].is_in_check(Side::White));
    assert!(positions[2].is_in_check(Side::Black));
}
