use std::time::Duration;

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::eval;
use othello_core::game_state::GameState;
use othello_core::search::options::SearchOptions;
use othello_core::search::search_context::SearchContext;
use othello_core::search::{self, Search};
use othello_core::square::Square;
use othello_core::types::{Depth, SCORE_INF, Scoref};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

/// Plain minimax without pruning, caching or time limits.
fn minimax(board: &Board, depth: Depth) -> (Scoref, Option<Square>) {
    if depth == 0 || !board.has_legal_moves() {
        return (eval::evaluate(board, Disc::Light), None);
    }

    let maximizing = board.side_to_move() == Disc::Light;
    let mut best = (if maximizing { -SCORE_INF } else { SCORE_INF }, None);
    for sq in board.legal_moves().iter() {
        let child = board.try_make_move(sq).unwrap();
        let (value, _) = minimax(&child, depth - 1);
        if (maximizing && value > best.0) || (!maximizing && value < best.0) {
            best = (value, Some(sq));
        }
    }
    best
}

fn exact_options(depth: Depth) -> SearchOptions {
    SearchOptions::default()
        .with_fixed_depth(depth)
        .with_time_budget(None)
        .with_cache(false)
        .with_corner_cutoff(false)
        .with_seed(Some(17))
}

/// Plays `n` random moves from the initial position.
fn random_position(rng: &mut StdRng, n: usize) -> Board {
    let mut game = GameState::new();
    for _ in 0..n {
        if game.is_game_over() {
            break;
        }
        let sq = game.board().legal_moves().iter().choose(rng).unwrap();
        game.make_move(sq).unwrap();
    }
    *game.board()
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut positions = vec![Board::new()];
    for n in [3, 8, 15, 24, 40, 52] {
        positions.push(random_position(&mut rng, n));
    }

    for board in positions.iter().filter(|b| b.has_legal_moves()) {
        for depth in 1..=3 {
            let expected = minimax(board, depth);
            let mut search = Search::new(&exact_options(depth));
            let result = search.run(board, board.side_to_move());
            assert_eq!(result.best_move, expected.1, "depth {depth}\n{board}");
            assert_eq!(result.value, expected.0, "depth {depth}\n{board}");
        }
    }
}

#[test]
fn test_alpha_beta_searches_fewer_nodes() {
    let board = Board::new();
    let mut ctx = SearchContext::new(&exact_options(4));
    search::search(&mut ctx, &board, None, 4, -SCORE_INF, SCORE_INF);
    // 1 + 4 + 12 + 56 + 244 nodes without pruning.
    assert!(ctx.n_nodes < 317);
}

#[test]
fn test_retained_tree_does_not_change_result() {
    let mut rng = StdRng::seed_from_u64(99);
    let board = random_position(&mut rng, 10);

    let mut plain = Search::new(&exact_options(3));
    let mut with_tree = Search::new(&exact_options(3).with_retain_tree(true));
    let a = plain.run(&board, board.side_to_move());
    let b = with_tree.run(&board, board.side_to_move());
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.value, b.value);
    assert!(with_tree.tree_len().unwrap() > 1);
    assert_eq!(plain.tree_len(), None);

    // Playing the chosen move keeps the explored subtree.
    let next = board.try_make_move(b.best_move.unwrap()).unwrap();
    with_tree.sync(&next);
    assert!(with_tree.tree_len().unwrap() > 1);
    let c = with_tree.run(&next, next.side_to_move());
    let d = plain.run(&next, next.side_to_move());
    assert_eq!(c.best_move, d.best_move);
}

#[test]
fn test_always_returns_move_when_out_of_time() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut search = Search::new(&SearchOptions::default());
    for n in 0..40 {
        let board = random_position(&mut rng, n);
        if !board.has_legal_moves() {
            continue;
        }
        let color = board.side_to_move();
        let decision = search
            .request_move(&board, color, Some(Duration::ZERO))
            .expect("a legal move exists");
        assert_eq!(Some(decision.square), board.legal_moves().lsb_square());
        assert!(board.is_legal_move(decision.square));
    }
}

#[test]
fn test_no_move_for_stuck_color() {
    let board = Board::from_string(&format!("{}-", "O".repeat(63)), Disc::Dark).unwrap();
    let mut search = Search::new(&exact_options(2));
    assert!(search.request_move(&board, Disc::Dark, None).is_none());
}

#[test]
fn test_opening_scenario() {
    let mut board = Board::new();
    assert_eq!(board.legal_moves().count(), 4);

    assert!(board.apply_move(Square::from_row_col(2, 3).unwrap(), Disc::Dark));
    assert_eq!(board.dark_count(), 4);
    assert_eq!(board.light_count(), 1);
    assert_eq!(board.disc_at_row_col(3, 3), Some(Disc::Dark));
    assert_eq!(board.side_to_move(), Disc::Light);
    assert!(board.has_legal_moves());

    let mut search = Search::new(&SearchOptions::new(2).with_seed(Some(1)));
    let decision = search
        .request_move(&board, Disc::Light, Some(Duration::from_secs(10)))
        .unwrap();
    assert!(board.is_legal_move(decision.square));
    assert!(decision.depth_used >= 1);
    assert!(board.apply_move(decision.square, Disc::Light));
}

#[test]
fn test_every_legal_move_flips() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 0..50 {
        let board = random_position(&mut rng, n);
        let color = board.side_to_move();
        for sq in board.legal_moves().iter() {
            let mut next = board;
            assert!(next.apply_move(sq, color));
            let gained = next.count(color) - board.count(color);
            assert!(gained >= 2, "{sq} flipped nothing");
            assert_eq!(
                next.dark_count() + next.light_count(),
                board.dark_count() + board.light_count() + 1
            );
        }
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let board = random_position(&mut rng, 20);
    for color in [Disc::Dark, Disc::Light] {
        assert_eq!(eval::evaluate(&board, color), eval::evaluate(&board, color));
    }
}

#[test]
fn test_self_play_completes() {
    let options = SearchOptions::new(1)
        .with_time_budget(Some(Duration::from_secs(5)))
        .with_retain_tree(true)
        .with_seed(Some(21));
    let mut search = Search::new(&options);
    let mut game = GameState::new();

    while !game.is_game_over() {
        let board = *game.board();
        let decision = search
            .request_move(&board, board.side_to_move(), None)
            .expect("side to move always has a move in GameState");
        game.make_move(decision.square).unwrap();
        search.sync(game.board());
    }

    let (dark, light) = game.get_score();
    assert!(dark + light <= 64);
    assert!(game.outcome().is_some());
}
