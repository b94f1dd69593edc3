use lib::chess::{rules, Board, Color, Move, MoveError, Piece, Role, Setup, Square};
use lib::game::{Game, InvalidAction};

fn board(setup: &str) -> Board {
    setup.parse::<Setup>().unwrap().try_into().unwrap()
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn starting_position_is_quiet() {
    let b = Board::default();

    assert_eq!(b.is_check(Color::White), Ok(false));
    assert_eq!(b.is_check(Color::Black), Ok(false));
    assert_eq!(b.find_king(Color::White), Ok(Square::new(0, 4)));
    assert_eq!(b.find_king(Color::Black), Ok(Square::new(7, 4)));
}

#[test]
fn only_knights_and_pawns_may_move_in_the_starting_position() {
    let b = Board::default();

    for p in b.iter() {
        let movable = b.destinations(p.position).next().is_some();
        assert_eq!(movable, matches!(p.role, Role::Knight | Role::Pawn), "{p:#}");
    }
}

#[test]
fn cornered_king_is_checkmated_by_a_supported_queen() {
    let mut b = board(r#"[(white, king, "a8"), (black, queen, "a7"), (black, king, "b6")]"#);

    assert_eq!(b.is_check(Color::White), Ok(true));
    assert_eq!(b.is_checkmate(Color::White), Ok(true));
    assert_eq!(b.is_checkmate(Color::Black), Ok(false));

    assert_eq!(
        b.remove(Square::new(1, 0)).map(|p| p.role),
        Some(Role::Queen)
    );

    assert_eq!(b.is_check(Color::White), Ok(false));
    assert_eq!(b.is_checkmate(Color::White), Ok(false));
}

#[test]
fn move_then_reverse_restores_the_board() {
    let mut b = Board::default();
    let before = b;

    let m = Move(sq("b8"), sq("c6"));
    let mc = b.move_piece(m.whence(), m.whither()).unwrap();
    assert_eq!(mc.piece(), Piece::new(Role::Knight, Color::White, sq("c6")));
    assert_eq!(mc.capture(), None);

    let back = m.reversed();
    b.move_piece(back.whence(), back.whither()).unwrap();
    assert_eq!(b, before);
}

#[test]
fn sliders_stop_at_the_first_piece_in_their_way() {
    let b = board(
        r#"[(white, king, "h8"), (white, rook, "a1"), (white, pawn, "a4"), (black, pawn, "e1"), (black, king, "h3")]"#,
    );

    let rook = b.get_piece_at(sq("a1")).unwrap();

    assert!(rules::is_legal_move(&rook, sq("a1"), sq("a3"), &b));
    assert!(!rules::is_legal_move(&rook, sq("a1"), sq("a4"), &b));
    assert!(!rules::is_legal_move(&rook, sq("a1"), sq("a5"), &b));
    assert!(rules::is_legal_move(&rook, sq("a1"), sq("e1"), &b));
    assert!(!rules::is_legal_move(&rook, sq("a1"), sq("f1"), &b));
}

#[test]
fn check_is_given_and_then_blocked() {
    let mut b = board(r#"[(white, king, "e8"), (white, knight, "c6"), (black, rook, "a1"), (black, king, "h1")]"#);

    assert_eq!(b.is_check(Color::White), Ok(false));
    b.move_piece(sq("a1"), sq("e1")).unwrap();
    assert_eq!(b.is_check(Color::White), Ok(true));

    b.move_piece(sq("c6"), sq("e5")).unwrap();
    assert_eq!(b.is_check(Color::White), Ok(false));
}

#[test]
fn check_is_given_and_then_removed_by_capture() {
    let mut b = board(r#"[(white, king, "e8"), (white, bishop, "b4"), (black, rook, "a1"), (black, king, "h1")]"#);

    b.move_piece(sq("a1"), sq("e1")).unwrap();
    assert_eq!(b.is_check(Color::White), Ok(true));

    let mc = b.move_piece(sq("b4"), sq("e1")).unwrap();
    assert!(mc.is_capture());
    assert_eq!(b.is_check(Color::White), Ok(false));
}

#[test]
fn board_accepts_moves_the_game_refuses() {
    let setup = r#"[(white, king, "e8"), (white, bishop, "e7"), (black, rook, "e1"), (black, king, "a1")]"#;
    let mut game = Game::new(board(setup), Color::White).unwrap();
    let mut b = board(setup);

    assert_eq!(
        game.play(Move(sq("e7"), sq("d6"))),
        Err(InvalidAction::SelfCheck(Move(sq("e7"), sq("d6")), Color::White))
    );

    assert!(b.move_piece(sq("e7"), sq("d6")).is_ok());
    assert_eq!(b.is_check(Color::White), Ok(true));
}

#[test]
fn moving_from_an_empty_square_fails() {
    let mut b = Board::default();
    assert_eq!(
        b.move_piece(sq("e4"), sq("e5")),
        Err(MoveError::EmptySquare(sq("e4")))
    );
}

#[test]
fn scholars_mate_ends_the_game() {
    let mut game = Game::default();

    for m in ["e7e5", "e2e4", "f8c5", "b1c3", "d8h4", "g1f3", "h4f2"] {
        game.play(m.parse().unwrap()).unwrap();
    }

    assert_eq!(game.board().is_checkmate(Color::Black), Ok(true));
    assert_eq!(
        game.outcome().map(|o| o.winner()),
        Some(Color::White)
    );
}
