//! End-to-end match tests.
//!
//! These drive whole matches through the public API: seeded determinism,
//! terminal conditions, and the narration each outcome produces.

use rust_dominoes::board::{Board, BoardEnd, OpenEnds};
use rust_dominoes::core::{MatchConfig, PlayerId, PlayerMap};
use rust_dominoes::game::{Match, MatchEvent, MatchPhase};
use rust_dominoes::rules::GameResult;
use rust_dominoes::tiles::{DominoSet, TileFace};
use rust_dominoes::zones::{Hand, Stack};

fn lines(events: &[MatchEvent]) -> Vec<String> {
    events.iter().map(ToString::to_string).collect()
}

/// Same seed, same narration, byte for byte.
#[test]
fn test_seeded_match_is_deterministic() {
    for seed in [0, 1, 42, 2024, u64::MAX] {
        let first = Match::run(MatchConfig::default().with_seed(seed)).unwrap();
        let second = Match::run(MatchConfig::default().with_seed(seed)).unwrap();

        assert_eq!(first.result, second.result);
        assert_eq!(lines(&first.events), lines(&second.events));
        assert_eq!(first.seed, seed);
    }
}

/// Different seeds deal different matches.
#[test]
fn test_different_seeds_differ() {
    let narrations: Vec<_> = (0..10)
        .map(|seed| lines(&Match::run(MatchConfig::default().with_seed(seed)).unwrap().events))
        .collect();

    assert!(narrations.iter().any(|n| n != &narrations[0]));
}

/// Every match opens with the start event and closes with exactly one terminal event.
#[test]
fn test_match_shape() {
    for seed in 0..50 {
        let report = Match::run(MatchConfig::default().with_seed(seed)).unwrap();
        let events = &report.events;

        assert!(matches!(events[0], MatchEvent::Started { .. }), "seed {}", seed);

        let terminals = events
            .iter()
            .filter(|e| matches!(e, MatchEvent::Won { .. } | MatchEvent::Stalemate))
            .count();
        assert_eq!(terminals, 1, "seed {}", seed);

        match report.result {
            GameResult::Winner(player) => {
                assert!(matches!(events.last(), Some(MatchEvent::Won { player: p, .. }) if *p == player));
            }
            GameResult::Draw => assert_eq!(events.last(), Some(&MatchEvent::Stalemate)),
        }
    }
}

/// Players act strictly in turn, Player One first.
#[test]
fn test_turns_alternate() {
    for seed in 0..20 {
        let report = Match::run(MatchConfig::default().with_seed(seed)).unwrap();

        let actors: Vec<_> = report
            .events
            .iter()
            .filter(|e| matches!(e, MatchEvent::Placed { .. } | MatchEvent::DrewTile { .. }))
            .filter_map(MatchEvent::player)
            .collect();

        let mut expected = PlayerId::One;
        for actor in actors {
            assert_eq!(actor, expected, "seed {}", seed);
            expected = expected.other();
        }
    }
}

/// Each placement is followed by the board it produced, one tile longer than before.
#[test]
fn test_board_grows_one_tile_per_placement() {
    let report = Match::run(MatchConfig::default().with_seed(77)).unwrap();

    let mut board_len = 1;
    let mut events = report.events.iter().peekable();
    while let Some(event) = events.next() {
        if let MatchEvent::Placed { played, end, .. } = event {
            let Some(MatchEvent::BoardChanged { board }) = events.peek() else {
                panic!("placement without a board update");
            };
            board_len += 1;
            assert_eq!(board.len(), board_len);

            let boundary = match end {
                BoardEnd::Left => board[0],
                BoardEnd::Right => board[board.len() - 1],
            };
            assert_eq!(boundary, *played);
        }
    }
}

/// Adjacent tiles in every rendered board share their touching values.
#[test]
fn test_rendered_boards_are_consistent_chains() {
    for seed in 0..30 {
        let report = Match::run(MatchConfig::default().with_seed(seed)).unwrap();
        for event in &report.events {
            if let MatchEvent::BoardChanged { board } = event {
                for pair in board.windows(2) {
                    assert_eq!(pair[0].right, pair[1].left, "seed {}: {}", seed, event);
                }
            }
        }
    }
}

/// A hand emptied by a placement ends the match before the other player moves.
#[test]
fn test_win_ends_match_immediately() {
    let mut set = DominoSet::new();
    let first = set.push(2, 5);
    let last_tile = set.push(2, 3);
    let other = set.push(5, 6);

    let mut game = Match::arranged(
        MatchConfig::default(),
        set,
        Stack::from_tiles(vec![]),
        PlayerMap::from_pair(Hand::from_tiles([last_tile]), Hand::from_tiles([other])),
        first,
    )
    .unwrap();

    let mut events: Vec<MatchEvent> = Vec::new();
    assert_eq!(game.play(&mut events).unwrap(), GameResult::Winner(PlayerId::One));
    assert_eq!(game.phase(), MatchPhase::Won(PlayerId::One));
    assert!(events.iter().all(|e| e.player() != Some(PlayerId::Two)));
    assert!(game.hand(PlayerId::Two).contains(other));
    assert_eq!(
        lines(&events),
        vec![
            "Game starting with first tile: <2:5>",
            "Jackson plays <3:2> to connect to tile <2:5> on the board",
            "Board is now: <3:2> <2:5>",
            "Player Jackson has won!",
        ]
    );
}

/// Player Two can win too, after Player One is forced to draw.
#[test]
fn test_second_player_wins() {
    let mut set = DominoSet::new();
    let first = set.push(4, 4);
    let stuck = set.push(0, 1);
    let winner = set.push(4, 6);
    let top = set.push(1, 2);
    let bottom = set.push(3, 3);

    let config = MatchConfig::default()
        .with_player_name(PlayerId::One, "Ada")
        .with_player_name(PlayerId::Two, "Grace");
    let mut game = Match::arranged(
        config,
        set,
        Stack::from_tiles(vec![bottom, top]),
        PlayerMap::from_pair(Hand::from_tiles([stuck]), Hand::from_tiles([winner])),
        first,
    )
    .unwrap();

    let mut events: Vec<MatchEvent> = Vec::new();
    assert_eq!(game.play(&mut events).unwrap(), GameResult::Winner(PlayerId::Two));
    assert_eq!(
        lines(&events),
        vec![
            "Game starting with first tile: <4:4>",
            "Ada can't play, drawing tile <1:2>",
            "Grace plays <6:4> to connect to tile <4:4> on the board",
            "Board is now: <6:4> <4:4>",
            "Player Grace has won!",
        ]
    );
}

/// Drawing the last stack tile ends in a draw, even with tiles left in hand.
#[test]
fn test_draw_when_stack_runs_dry() {
    let mut set = DominoSet::new();
    let first = set.push(6, 6);
    let p1 = set.push(0, 1);
    let p2 = set.push(1, 2);
    let last = set.push(2, 3);

    let mut game = Match::arranged(
        MatchConfig::default(),
        set,
        Stack::from_tiles(vec![last]),
        PlayerMap::from_pair(Hand::from_tiles([p1]), Hand::from_tiles([p2])),
        first,
    )
    .unwrap();

    let mut events: Vec<MatchEvent> = Vec::new();
    assert_eq!(game.play(&mut events).unwrap(), GameResult::Draw);
    assert_eq!(game.phase(), MatchPhase::Stalemate);
    assert!(game.stack().is_empty());
    assert_eq!(game.hand(PlayerId::One).len(), 2);
    assert_eq!(
        lines(&events),
        vec![
            "Game starting with first tile: <6:6>",
            "Jackson can't play, drawing tile <2:3>",
            "The game was a draw!",
        ]
    );
}

/// Seed <2:5>, play <5:5>: it attaches to the right end.
#[test]
fn test_double_attaches_to_matching_end() {
    let mut set = DominoSet::new();
    let first = set.push(2, 5);
    let double = set.push(5, 5);

    let mut board = Board::new();
    board.seed(&set, first).unwrap();
    let hand = Hand::from_tiles([double]);

    let open = board.open_values(&set).unwrap();
    let tile = hand.find_playable(&set, open).unwrap();
    board.place(&mut set, tile).unwrap();

    assert_eq!(board.open_values(&set), Some(OpenEnds { left: 2, right: 5 }));
    assert_eq!(board.render(&set), "<2:5> <5:5>");
}

/// A tile fitting both ends goes left.
#[test]
fn test_double_matching_both_ends_goes_left() {
    let mut set = DominoSet::new();
    let first = set.push(3, 5);
    let bridge = set.push(5, 3);
    let double = set.push(5, 5);

    let mut board = Board::new();
    board.seed(&set, first).unwrap();
    // <5:3> joins on the left: both ends now show 5
    board.place(&mut set, bridge).unwrap();
    assert_eq!(board.open_values(&set), Some(OpenEnds { left: 5, right: 5 }));

    let placement = board.place(&mut set, double).unwrap();
    assert_eq!(placement.end, BoardEnd::Left);
    assert_eq!(placement.connected_to, TileFace::new(5, 3));
    assert_eq!(board.render(&set), "<5:5> <5:3> <3:5>");
}

/// Larger sets play to completion too.
#[test]
fn test_double_nine_set() {
    let config = MatchConfig::default().with_pip_max(9).with_hand_size(10).with_seed(8);
    let mut game = Match::new(config).unwrap();
    let mut events: Vec<MatchEvent> = Vec::new();
    game.play(&mut events).unwrap();

    let total = game.hand(PlayerId::One).len()
        + game.hand(PlayerId::Two).len()
        + game.stack().len()
        + game.board().len();
    assert_eq!(total, 55);
}

/// Reports serialize for machine consumers.
#[test]
fn test_report_serializes() {
    let report = Match::run(MatchConfig::default().with_seed(3)).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let restored: rust_dominoes::MatchReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, restored);
}
