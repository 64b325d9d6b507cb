//! Strategy-level tests.
//!
//! Test coverage:
//! - Terminal outcomes (checkmate, stalemate) for every strategy
//! - Forced single moves
//! - Mate in 1 and mate in 2
//! - Pruning never changes the best score, with or without the table
//! - Transposition table lifetime

use super::*;
use crate::board::square::*;
use crate::evaluate::is_checkmate;
use crate::move_generator::generate_moves;
use crate::{chess_move, chess_position};

const ALL_STRATEGIES: [Strategy; 5] = [
    Strategy::Random,
    Strategy::Heuristic,
    Strategy::Negamax,
    Strategy::NegamaxTt,
    Strategy::AlphaBeta,
];

fn seeded_searcher(strategy: Strategy, search_depth: u8) -> Searcher {
    Searcher::new(SearchConfig {
        strategy,
        search_depth,
        seed: Some(7),
        ..SearchConfig::default()
    })
}

fn unpruned_alpha_beta(search_depth: u8) -> Searcher {
    Searcher::new(SearchConfig {
        strategy: Strategy::AlphaBeta,
        search_depth,
        seed: Some(7),
        transposition_table: false,
        ..SearchConfig::default()
    })
}

fn back_rank_mate_for_black() -> Board {
    chess_position! {
        r......k
        ......pp
        ........
        ........
        ........
        ........
        .....PPP
        ......K.
    }
}

fn ladder_mate_in_two_for_black() -> Board {
    chess_position! {
        k.......
        ........
        ........
        ........
        .r......
        r.......
        .......K
        ........
    }
}

#[test]
fn test_parse_strategy() {
    assert_eq!("alpha-beta".parse::<Strategy>(), Ok(Strategy::AlphaBeta));
    assert_eq!("Negamax-TT".parse::<Strategy>(), Ok(Strategy::NegamaxTt));
    assert!("minimax".parse::<Strategy>().is_err());
    for &strategy in ALL_STRATEGIES.iter() {
        assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
    }
}

#[test]
fn test_every_strategy_reports_checkmate() {
    let mut board = chess_position! {
        .......k
        .......Q
        ......K.
        ........
        ........
        ........
        ........
        ........
    };

    for &strategy in ALL_STRATEGIES.iter() {
        let mut searcher = seeded_searcher(strategy, 2);
        assert_eq!(
            searcher.choose_move(&mut board, Color::Black),
            MoveChoice::Checkmate,
            "{}",
            strategy
        );
    }
}

#[test]
fn test_every_strategy_reports_stalemate() {
    let mut board = chess_position! {
        .......k
        .....Q..
        ........
        ........
        ........
        ........
        ........
        K.......
    };

    for &strategy in ALL_STRATEGIES.iter() {
        let mut searcher = seeded_searcher(strategy, 2);
        assert_eq!(
            searcher.choose_move(&mut board, Color::Black),
            MoveChoice::Stalemate,
            "{}",
            strategy
        );
    }
}

#[test]
fn test_every_strategy_plays_the_only_legal_move() {
    let mut board = chess_position! {
        ...qkr..
        ...p.p..
        ........
        ........
        ........
        ........
        ........
        ....R.K.
    };
    assert_eq!(generate_moves(&mut board, Color::Black).len(), 1);

    for &strategy in ALL_STRATEGIES.iter() {
        for seed in 0..5 {
            let mut searcher = Searcher::new(SearchConfig {
                strategy,
                search_depth: 2,
                seed: Some(seed),
                ..SearchConfig::default()
            });
            assert_eq!(
                searcher.choose_move(&mut board, Color::Black),
                MoveChoice::Move(chess_move!(D8, E7)),
                "{}",
                strategy
            );
        }
    }
}

#[test]
fn test_search_leaves_the_board_untouched() {
    let mut board = Board::starting_position();
    board.make_move(E2, E4);
    board.make_move(D7, D5);
    let original = board.clone();

    for &strategy in ALL_STRATEGIES.iter() {
        let mut searcher = seeded_searcher(strategy, 2);
        let choice = searcher.choose_move(&mut board, Color::White);
        assert!(matches!(choice, MoveChoice::Move(_)), "{}", strategy);
        assert_eq!(board, original, "{}", strategy);
    }
}

#[test]
fn test_heuristic_opening_move_is_legal_and_safe() {
    let mut board = Board::starting_position();
    board.make_move(E2, E4);
    let mut searcher = seeded_searcher(Strategy::Heuristic, 1);

    let chess_move = match searcher.choose_move(&mut board, Color::Black) {
        MoveChoice::Move(chess_move) => chess_move,
        other => panic!("expected a move, got {:?}", other),
    };
    assert!(generate_moves(&mut board, Color::Black).contains(&chess_move));

    board.make_move(chess_move.from_square(), chess_move.to_square());
    assert!(!is_checkmate(&mut board, Color::Black));
    assert!(!is_checkmate(&mut board, Color::White));
}

#[test]
fn test_random_strategy_is_reproducible_with_a_seed() {
    let mut board = Board::starting_position();
    let first = seeded_searcher(Strategy::Random, 1).choose_move(&mut board, Color::White);
    let second = seeded_searcher(Strategy::Random, 1).choose_move(&mut board, Color::White);
    assert_eq!(first, second);
}

#[test]
fn test_heuristic_takes_free_material() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ...q....
        ........
        ........
        ........
        ...RK...
    };
    let mut searcher = seeded_searcher(Strategy::Heuristic, 1);
    assert_eq!(
        searcher.choose_move(&mut board, Color::White),
        MoveChoice::Move(chess_move!(D1, D5))
    );
    assert_eq!(searcher.stats().best_score, Some(5));
}

#[test]
fn test_find_mate_in_1_black() {
    for &strategy in &[
        Strategy::Heuristic,
        Strategy::Negamax,
        Strategy::NegamaxTt,
        Strategy::AlphaBeta,
    ] {
        for depth in 1..=3 {
            let mut board = back_rank_mate_for_black();
            let mut searcher = seeded_searcher(strategy, depth);

            let choice = searcher.choose_move(&mut board, Color::Black);
            assert_eq!(
                choice,
                MoveChoice::Move(chess_move!(A8, A1)),
                "{} at depth {}",
                strategy,
                depth
            );
            assert!(searcher.stats().best_score.unwrap() >= MATE_SCORE);

            board.make_move(A8, A1);
            assert!(is_checkmate(&mut board, Color::White));
        }
    }
}

#[test]
fn test_find_mate_in_1_with_several_mating_moves() {
    let valid_checkmates = [
        chess_move!(B8, B2),
        chess_move!(B8, A8),
        chess_move!(B8, A7),
    ];

    for seed in 0..5 {
        let mut board = chess_position! {
            .q......
            ........
            ........
            ........
            ........
            ........
            K.k.....
            ........
        };
        let mut searcher = Searcher::new(SearchConfig {
            search_depth: 2,
            seed: Some(seed),
            ..SearchConfig::default()
        });

        let chess_move = match searcher.choose_move(&mut board, Color::Black) {
            MoveChoice::Move(chess_move) => chess_move,
            other => panic!("expected a move, got {:?}", other),
        };
        assert!(
            valid_checkmates.contains(&chess_move),
            "{} does not lead to checkmate",
            chess_move
        );
    }
}

#[test]
fn test_shorter_mate_scores_higher() {
    let mut board = back_rank_mate_for_black();
    let mut searcher = seeded_searcher(Strategy::AlphaBeta, 3);
    searcher.choose_move(&mut board, Color::Black);
    assert_eq!(searcher.stats().best_score, Some(MATE_SCORE + 2));
}

#[test]
fn test_find_mate_in_2() {
    for &strategy in &[Strategy::Negamax, Strategy::NegamaxTt, Strategy::AlphaBeta] {
        let mut board = ladder_mate_in_two_for_black();
        let mut searcher = seeded_searcher(strategy, 3);

        // Rb2+ and the quiet Rg4 both force mate next move
        let chess_move = match searcher.choose_move(&mut board, Color::Black) {
            MoveChoice::Move(chess_move) => chess_move,
            other => panic!("expected a move, got {:?}", other),
        };
        assert_eq!(searcher.stats().best_score, Some(MATE_SCORE), "{}", strategy);

        // every white reply leaves a mate in 1
        board.make_move(chess_move.from_square(), chess_move.to_square());
        let mut replier = seeded_searcher(Strategy::Heuristic, 1);
        for reply in generate_moves(&mut board, Color::White) {
            let mut after = board.scoped_move(reply.from_square(), reply.to_square());
            replier.choose_move(&mut after, Color::Black);
            assert_eq!(replier.stats().best_score, Some(MATE_SCORE), "{} {}", chess_move, reply);
        }
    }
}

#[test]
fn test_pruning_preserves_the_best_score() {
    let positions = vec![
        (Board::starting_position(), Color::White, 2),
        (ladder_mate_in_two_for_black(), Color::Black, 3),
        (
            chess_position! {
                k.......
                ........
                ..n.....
                ........
                .p.q.r..
                ....P...
                N.......
                ..R....K
            },
            Color::White,
            3,
        ),
    ];

    for (mut board, color, depth) in positions {
        let mut negamax = seeded_searcher(Strategy::Negamax, depth);
        let mut alpha_beta = unpruned_alpha_beta(depth);

        negamax.choose_move(&mut board, color);
        let choice = alpha_beta.choose_move(&mut board, color);
        let best_score = negamax.stats().best_score;
        assert_eq!(alpha_beta.stats().best_score, best_score, "\n{}", board);
        assert!(alpha_beta.stats().positions_searched <= negamax.stats().positions_searched);

        // the pruned choice belongs to the same best-score class
        let chess_move = match choice {
            MoveChoice::Move(chess_move) => chess_move,
            other => panic!("expected a move, got {:?}", other),
        };
        let mut child = board.scoped_move(chess_move.from_square(), chess_move.to_square());
        let score = -negamax.negamax(&mut child, color.opposite(), depth - 1, false);
        assert_eq!(Some(score), best_score);
    }
}

/// Plays `plies` seeded random moves from the starting position. `None` if the
/// game ends first.
fn random_game_position(seed: u64, plies: usize) -> Option<(Board, Color)> {
    let mut board = Board::starting_position();
    let mut random = Searcher::new(SearchConfig {
        strategy: Strategy::Random,
        seed: Some(seed),
        ..SearchConfig::default()
    });

    let mut color = Color::White;
    for _ in 0..plies {
        match random.choose_move(&mut board, color) {
            MoveChoice::Move(chess_move) => {
                board.make_move(chess_move.from_square(), chess_move.to_square());
            }
            _ => return None,
        }
        color = color.opposite();
    }
    Some((board, color))
}

#[test]
fn test_cached_alpha_beta_matches_plain_negamax() {
    let mut positions = vec![
        (ladder_mate_in_two_for_black(), Color::Black, 3),
        (back_rank_mate_for_black(), Color::Black, 2),
        (
            // Qg6 stalemates, Qh6 mates
            chess_position! {
                .......k
                .....K..
                ........
                ......Q.
                ........
                ........
                ........
                ........
            },
            Color::White,
            3,
        ),
    ];
    for seed in 0..4 {
        if let Some((board, color)) = random_game_position(seed, 10) {
            positions.push((board, color, 3));
        }
    }

    for (mut board, color, depth) in positions {
        let mut negamax = seeded_searcher(Strategy::Negamax, depth);
        let mut alpha_beta = seeded_searcher(Strategy::AlphaBeta, depth);
        assert!(alpha_beta.config().transposition_table);

        let expected = negamax.choose_move(&mut board, color);
        let choice = alpha_beta.choose_move(&mut board, color);
        let best_score = negamax.stats().best_score;
        assert_eq!(alpha_beta.stats().best_score, best_score, "\n{}", board);

        let chess_move = match choice {
            MoveChoice::Move(chess_move) => chess_move,
            other => {
                assert_eq!(other, expected);
                continue;
            }
        };
        let mut child = board.scoped_move(chess_move.from_square(), chess_move.to_square());
        let score = -negamax.negamax(&mut child, color.opposite(), depth - 1, false);
        assert_eq!(Some(score), best_score, "{:?}\n{}", chess_move, *child);
    }
}

#[test]
fn test_alpha_beta_prunes_the_mate_search() {
    let mut board = ladder_mate_in_two_for_black();
    let mut negamax = seeded_searcher(Strategy::Negamax, 3);
    let mut alpha_beta = unpruned_alpha_beta(3);

    negamax.choose_move(&mut board, Color::Black);
    alpha_beta.choose_move(&mut board, Color::Black);

    assert!(alpha_beta.stats().cutoffs > 0);
    assert!(alpha_beta.stats().positions_searched < negamax.stats().positions_searched);
}

#[test]
fn test_transposition_table_matches_plain_negamax_at_depth_2() {
    let mut board = Board::starting_position();
    let mut negamax = seeded_searcher(Strategy::Negamax, 2);
    let mut cached = seeded_searcher(Strategy::NegamaxTt, 2);

    negamax.choose_move(&mut board, Color::White);
    cached.choose_move(&mut board, Color::White);
    assert_eq!(cached.stats().best_score, negamax.stats().best_score);
    assert!(cached.transposition_table().size() > 0);
}

#[test]
fn test_transposition_table_is_cleared_between_moves() {
    let mut board = Board::starting_position();
    let mut searcher = seeded_searcher(Strategy::AlphaBeta, 3);

    searcher.choose_move(&mut board, Color::White);
    let first = searcher.stats();
    searcher.choose_move(&mut board, Color::White);
    let second = searcher.stats();

    assert_eq!(first.positions_searched, second.positions_searched);
}

#[test]
fn test_kept_transposition_table_is_reused() {
    let mut board = Board::starting_position();
    let mut searcher = Searcher::new(SearchConfig {
        search_depth: 3,
        seed: Some(7),
        keep_transposition_table: true,
        ..SearchConfig::default()
    });

    searcher.choose_move(&mut board, Color::White);
    let first = searcher.stats();
    searcher.choose_move(&mut board, Color::White);
    let second = searcher.stats();

    assert!(second.cache_hits > 0);
    assert!(second.positions_searched < first.positions_searched);
    assert_eq!(second.best_score, first.best_score);
}

#[test]
fn test_terminal_score() {
    let values = PieceValues::default();

    let mated = chess_position! {
        .......k
        .......Q
        ......K.
        ........
        ........
        ........
        ........
        ........
    };
    assert_eq!(terminal_score(&mated, Color::Black, 0, &values), -MATE_SCORE);
    assert_eq!(terminal_score(&mated, Color::Black, 2, &values), -(MATE_SCORE + 2));

    // black is behind on material, so being stalemated is welcome
    let stalemated = chess_position! {
        .......k
        .....Q..
        ........
        ........
        ........
        ........
        ........
        K.......
    };
    assert_eq!(
        terminal_score(&stalemated, Color::Black, 1, &values),
        STALEMATE_SCORE + 1
    );

    let stalemated_while_ahead = chess_position! {
        .......k
        .....Q..
        ........
        ........
        ........
        ........
        rr......
        K.......
    };
    assert_eq!(
        terminal_score(&stalemated_while_ahead, Color::Black, 1, &values),
        -(STALEMATE_SCORE + 1)
    );
}

#[test]
fn test_depth_zero_searches_one_ply() {
    let mut board = back_rank_mate_for_black();
    let mut searcher = seeded_searcher(Strategy::AlphaBeta, 0);
    assert_eq!(
        searcher.choose_move(&mut board, Color::Black),
        MoveChoice::Move(chess_move!(A8, A1))
    );
}
