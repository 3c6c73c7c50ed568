//! Integration tests for reversi-cube
//!
//! These drive the public API the way a front end does: read the board and
//! legal moves, play a cell, read the next snapshot.

use reversi_cube::board::{Board, Cell, CubeBoard, Player, PlaneBoard};
use reversi_cube::game::{CubeGame, GameState, PlaneGame, Status};
use reversi_cube::geometry::{Cube, Geometry, Plane, Point, Square};
use reversi_cube::playout::random_game;
use reversi_cube::protocol::Session;
use reversi_cube::rules::{apply_move, compute_captures, is_game_over, legal_moves};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Build a plane board from notation lists.
fn plane_position(black: &[&str], white: &[&str]) -> PlaneBoard {
    position(black, white)
}

/// Build a cube board from notation lists.
fn cube_position(black: &[&str], white: &[&str]) -> CubeBoard {
    position(black, white)
}

fn position<G: Geometry>(black: &[&str], white: &[&str]) -> Board<G> {
    let mut cells = vec![Cell::Empty; G::VOLUME];
    for (names, cell) in [(black, Cell::Black), (white, Cell::White)] {
        for name in names {
            let coord: G::Coord = name.parse().unwrap();
            cells[G::index_of(coord).unwrap()] = cell;
        }
    }
    Board::from_cells(cells).unwrap()
}

/// Play a sequence of moves in notation from the starting position.
fn play_sequence<G: Geometry>(moves: &[&str]) -> GameState<G> {
    moves.iter().fold(GameState::new(), |game, mv| {
        let coord: G::Coord = mv.parse().unwrap();
        game.play_at(coord)
            .unwrap_or_else(|err| panic!("move {mv} rejected: {err}"))
    })
}

/// Check every invariant that must hold for any snapshot.
fn check_snapshot<G: Geometry>(game: &GameState<G>) {
    let board = game.board();
    let score = board.score();
    assert_eq!(score.black + score.white + score.empty, G::VOLUME);

    for mv in game.legal_moves() {
        assert_eq!(board.cell(mv.index), Some(Cell::Empty));
        assert!(!mv.captures.is_empty());

        let next = apply_move(board, game.current_player(), mv.coord).unwrap();
        let disc = game.current_player().disc();
        assert_eq!(next.cell(mv.index), Some(disc));
        for &captured in &mv.captures {
            assert_eq!(board.cell(captured), Some(game.current_player().opponent().disc()));
            assert_eq!(next.cell(captured), Some(disc));
        }

        let after = next.score();
        let gained = 1 + mv.captures.len();
        assert_eq!(after.of(game.current_player()), score.of(game.current_player()) + gained);
    }

    if game.is_game_over() {
        assert!(is_game_over(board));
        assert!(game.legal_moves().is_empty());
    }
}

// =============================================================================
// Board and indexing
// =============================================================================

#[test]
fn test_direction_tables() {
    assert_eq!(Plane::directions().len(), 8);
    assert_eq!(Cube::directions().len(), 26);
}

#[test]
fn test_initial_scores() {
    let cube = CubeBoard::initial().score();
    assert_eq!((cube.black, cube.white, cube.empty), (4, 4, 56));

    let plane = PlaneBoard::initial().score();
    assert_eq!((plane.black, plane.white, plane.empty), (2, 2, 60));
}

#[test]
fn test_numeric_round_trip_of_initial_cube() {
    let values = CubeBoard::initial().values();
    assert_eq!(values.iter().filter(|&&v| v == 1).count(), 4);
    assert_eq!(values.iter().filter(|&&v| v == -1).count(), 4);
    assert_eq!(values[21], 1); // B22 = (1, 1, 1)
    assert_eq!(values[22], -1); // C22 = (2, 1, 1)
}

// =============================================================================
// Move generation
// =============================================================================

#[test]
fn test_cube_opening_moves() {
    let moves = legal_moves(&CubeBoard::initial(), Player::Black);
    let indices: Vec<usize> = moves.iter().map(|m| m.index).collect();
    assert_eq!(
        indices,
        vec![3, 6, 9, 12, 18, 23, 24, 29, 33, 36, 43, 46, 48, 53, 58, 63]
    );
    assert!(moves.iter().all(|m| m.captures.len() == 1));

    let captured: Vec<usize> = moves.iter().map(|m| m.captures[0]).collect();
    assert_eq!(
        captured,
        vec![22, 22, 25, 25, 22, 22, 25, 25, 37, 37, 42, 42, 37, 37, 42, 42]
    );
}

#[test]
fn test_plane_opening_counts() {
    let board = PlaneBoard::initial();
    for mv in legal_moves(&board, Player::Black) {
        let next = apply_move(&board, Player::Black, mv.coord).unwrap();
        let score = next.score();
        let flips = mv.captures.len();
        assert_eq!(score.black, 2 + 1 + flips);
        assert_eq!(score.white, 2 - flips);
    }
}

#[test]
fn test_long_line_capture_in_cube() {
    // A column along z: empty, white, white, black.
    let board = cube_position(&["A14"], &["A12", "A13"]);
    let captures = compute_captures(&board, Player::Black, "A11".parse::<Point>().unwrap());
    assert_eq!(captures, vec![16, 32]);

    // White sees nothing to take from the same cell.
    assert!(compute_captures(&board, Player::White, Point::new(0, 0, 0)).is_empty());
}

#[test]
fn test_capture_needs_closing_disc() {
    let board = plane_position(&[], &["B1", "C1", "D1"]);
    assert!(compute_captures(&board, Player::Black, "A1".parse::<Square>().unwrap()).is_empty());
}

// =============================================================================
// Turn order and game end
// =============================================================================

#[test]
fn test_standard_plane_opening() {
    let game = play_sequence::<Plane>(&["D3", "C5", "F6"]);
    assert_eq!(game.current_player(), Player::White);
    assert_eq!(game.status(), Status::InProgress);
    check_snapshot(&game);
}

#[test]
fn test_pass_does_not_touch_board() {
    let board = plane_position(&["A1", "H8"], &["B1", "G8"]);
    let game = PlaneGame::from_position(board, Player::Black).play_at("C1".parse().unwrap());
    let game = game.unwrap();

    assert_eq!(game.status(), Status::Passed(Player::White));
    assert_eq!(game.current_player(), Player::Black);

    let expected = plane_position(&["A1", "B1", "C1", "H8"], &["G8"]);
    assert_eq!(game.board(), &expected);
}

#[test]
fn test_blocked_both_sides_is_game_over() {
    let board = cube_position(&["A11"], &["D44"]);
    assert!(is_game_over(&board));

    let game = CubeGame::from_position(board, Player::White);
    assert!(game.is_game_over());
    assert_eq!(game.message(), "Draw 1-1");
    assert!(game.play(5).is_err());
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..20 {
        let record = random_game::<Cube>(&mut fastrand::Rng::with_seed(seed));

        // Replay the game and check every intermediate snapshot.
        let mut game = CubeGame::new();
        check_snapshot(&game);
        for &index in &record.moves {
            assert!(game.is_legal(index), "seed {seed}: {index} not legal");
            game = game.play(index).unwrap();
            check_snapshot(&game);
        }
        assert_eq!(game, record.final_state);
        assert!(game.is_game_over());
    }
}

#[test]
fn test_random_plane_games_end_properly() {
    let mut rng = fastrand::Rng::with_seed(2024);
    for _ in 0..10 {
        let record = random_game::<Plane>(&mut rng);
        let state = &record.final_state;
        let score = state.score();

        let message = state.message();
        match score.leader() {
            Some(Player::Black) => assert!(message.starts_with("Black wins")),
            Some(Player::White) => assert!(message.starts_with("White wins")),
            None => assert!(message.starts_with("Draw")),
        }
    }
}

// =============================================================================
// Text protocol
// =============================================================================

#[test]
fn test_protocol_session() {
    let script = "\
1 variant
2 legal_moves
3 play D3
4 current_player
5 play D3
6 score
quit
";
    let mut session = Session::<Plane>::new();
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("=1 plane\n"));
    assert!(text.contains("=2 D3 C4 F5 E6\n"));
    assert!(text.contains("=3 \n"));
    assert!(text.contains("=4 White\n"));
    assert!(text.contains("?5 Illegal move: cell 19 is not empty\n"));
    assert!(text.contains("=6 black 4 white 1 empty 59\n"));
}
