//! Game state machine integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use sanguine::{Card, Cell, CellContents, CellKind, Coordinate, ErrorKind, Game, GameConfig, GameError, GameEvent, Player};

fn deck(owner: Player, size: usize, value: u32) -> Vec<Card> {
    (0..size)
        .map(|i| {
            Card::new(
                owner,
                format!("{owner}-{i}"),
                1,
                value,
                [Coordinate::new(1, 0), Coordinate::new(0, 1), Coordinate::new(0, -1)],
            )
            .unwrap()
        })
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn new_game() -> Game {
    init_tracing();
    Game::new(deck(Player::Red, 15, 2), deck(Player::Blue, 15, 1)).unwrap()
}

fn started() -> Game {
    let mut game = new_game();
    game.start_game(3, 5, 5, false).unwrap();
    game
}

fn record(game: &mut Game) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.add_listener(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));
    events
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_everything_requires_start() {
    let mut game = new_game();
    let card = game.deck(Player::Red)[0].clone();

    for err in [
        game.current_player().map(|_| ()).unwrap_err(),
        game.board().map(|_| ()).unwrap_err(),
        game.row_score(0, Player::Red).map(|_| ()).unwrap_err(),
        game.total_score(Player::Red).map(|_| ()).unwrap_err(),
        game.num_rows().map(|_| ()).unwrap_err(),
        game.winner().map(|_| ()).unwrap_err(),
        game.position().map(|_| ()).unwrap_err(),
    ] {
        assert_eq!(err, GameError::NotStarted);
    }

    assert_eq!(game.play_card(&card, 0, 0), Err(GameError::NotStarted));
    assert_eq!(game.pass(), Err(GameError::NotStarted));
    assert_eq!(GameError::NotStarted.kind(), ErrorKind::InvalidState);
}

#[test]
fn test_start_with_config() {
    let mut game = Game::new(deck(Player::Red, 40, 1), deck(Player::Blue, 40, 1)).unwrap();
    let config = GameConfig::default().with_board(5, 7).with_hand_size(4).shuffled(99);

    game.start_with(&config).unwrap();

    assert_eq!(game.num_rows(), Ok(5));
    assert_eq!(game.num_cols(), Ok(7));
    assert_eq!(game.hand(Player::Red).len(), 4);
    assert_eq!(game.hand(Player::Blue).len(), 4);
    assert_eq!(game.deck(Player::Red).len(), 36);
}

#[test]
fn test_start_failure_leaves_game_unstarted() {
    let mut game = new_game();
    let events = record(&mut game);

    let err = game.start_game(2, 6, 3, false).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!game.is_started());
    assert_eq!(game.deck(Player::Red).len(), 15);
    assert!(matches!(&events.borrow()[..], [GameEvent::Error { .. }]));

    game.start_game(3, 5, 5, false).unwrap();
    assert_eq!(events.borrow().last(), Some(&GameEvent::TurnChanged(Player::Red)));
}

// =============================================================================
// Turns
// =============================================================================

#[test]
fn test_influence_card_scenario() {
    let red = Card::new(Player::Red, "C", 1, 3, [Coordinate::new(1, 0)]).unwrap();
    let mut red_deck = vec![red.clone()];
    red_deck.extend(deck(Player::Red, 14, 1));
    let mut game = Game::new(red_deck, deck(Player::Blue, 15, 1)).unwrap();
    game.start_game(3, 5, 5, false).unwrap();

    game.play_card(&red, 0, 0).unwrap();

    assert_eq!(game.cell(0, 0), Ok(Cell::Value { amount: 3, owner: Player::Red }));
    assert_eq!(game.cell(0, 1), Ok(Cell::Pawn { count: 1, owner: Player::Red }));
    assert_eq!(
        game.cell_contents(0, 0),
        Ok(CellContents {
            kind: CellKind::Value,
            owner: Some(Player::Red),
            magnitude: 3
        })
    );
    assert_eq!(game.row_score(0, Player::Red), Ok(3));
}

#[test]
fn test_rejected_play_changes_nothing() {
    let mut game = started();
    let before = game.board().unwrap().clone();
    let hand_before = game.hand(Player::Red).to_vec();
    let card = hand_before[0].clone();

    // Blue's pawn column.
    let err = game.play_card(&card, 1, 4).unwrap_err();
    assert_eq!(
        err,
        GameError::WrongCellOwner {
            owner: Player::Blue,
            card_owner: Player::Red
        }
    );
    assert_eq!(game.play_card(&card, 7, 0).unwrap_err().kind(), ErrorKind::OutOfRange);

    assert_eq!(game.board().unwrap(), &before);
    assert_eq!(game.hand(Player::Red), &hand_before[..]);
    assert_eq!(game.current_player(), Ok(Player::Red));
}

#[test]
fn test_blue_cannot_act_on_reds_turn() {
    let mut game = started();
    let events = record(&mut game);

    let err = game.pass_as(Player::Blue).unwrap_err();

    assert_eq!(
        err,
        GameError::OutOfTurn {
            player: Player::Blue,
            current: Player::Red
        }
    );
    assert_eq!(game.last_passer(), None);
    assert_eq!(game.consecutive_passes(), 0);
    assert_eq!(game.current_player(), Ok(Player::Red));
    assert!(matches!(&events.borrow()[..], [GameEvent::Error { .. }]));

    let err = game.play_from_hand(Player::Red, 9, 0, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    game.play_from_hand(Player::Red, 0, 0, 0).unwrap();
    assert_eq!(game.current_player(), Ok(Player::Blue));
}

#[test]
fn test_turn_events_in_order() {
    let mut game = started();
    let first = record(&mut game);
    let second = record(&mut game);
    let card = game.hand(Player::Red)[0].clone();

    game.play_card(&card, 1, 0).unwrap();
    game.pass().unwrap();

    let expected = vec![
        GameEvent::TurnChanged(Player::Blue),
        GameEvent::TurnPassed(Player::Blue),
        GameEvent::TurnChanged(Player::Red),
    ];
    assert_eq!(*first.borrow(), expected);
    assert_eq!(*second.borrow(), expected);
}

#[test]
fn test_draw_stops_when_deck_empty() {
    let mut game = Game::new(deck(Player::Red, 3, 1), deck(Player::Blue, 3, 1)).unwrap();
    game.start_game(1, 3, 1, false).unwrap();

    // Red keeps passing; each pass hands Blue a card until Blue's deck runs out.
    for _ in 0..3 {
        game.pass().unwrap();
        game.switch_player().unwrap();
    }

    assert_eq!(game.hand(Player::Blue).len(), 3);
    assert!(game.deck(Player::Blue).is_empty());
    assert_eq!(game.consecutive_passes(), 1);
    assert_eq!(game.game_over(), Ok(false));
}

// =============================================================================
// Outcome
// =============================================================================

#[test]
fn test_full_game_winner_is_stable() {
    let mut game = started();

    // Red always takes its first legal move, Blue always passes.
    let mut turns = 0;
    while !game.game_over().unwrap() && turns < 100 {
        turns += 1;
        let player = game.current_player().unwrap();
        let playable = game.position().unwrap();
        let choice = sanguine::strategy::legal_moves(&playable).next();
        match choice {
            Some(mv) if player == Player::Red => game.play_card(&mv.card, mv.row, mv.col).unwrap(),
            _ => game.pass().unwrap(),
        }
    }

    assert!(game.game_over().unwrap());
    let winner = game.winner().unwrap();
    assert_eq!(game.winner().unwrap(), winner);
    assert_eq!(game.winner().unwrap(), winner);

    let red = game.total_score(Player::Red).unwrap();
    let blue = game.total_score(Player::Blue).unwrap();
    match winner {
        Some(Player::Red) => assert!(red > blue),
        Some(Player::Blue) => assert!(blue > red),
        None => assert_eq!(red, blue),
    }
    assert_eq!(winner, Some(Player::Red));
}

#[test]
fn test_winner_none_while_running() {
    let game = started();
    assert_eq!(game.winner(), Ok(None));
}

#[test]
fn test_game_over_on_full_board() {
    let mut game = Game::new(deck(Player::Red, 3, 1), deck(Player::Blue, 3, 1)).unwrap();
    let events = record(&mut game);
    game.start_game(1, 3, 1, false).unwrap();

    // Red fills the row left to right; each card's influence readies the
    // next cell, capturing Blue's starting pawn on the way.
    for col in 0..3 {
        if col > 0 {
            game.pass().unwrap();
        }
        let red = game.hand(Player::Red)[0].clone();
        game.play_card(&red, 0, col).unwrap();
    }

    assert_eq!(game.game_over(), Ok(true));
    assert_eq!(game.total_score(Player::Red), Ok(3));
    assert_eq!(game.winner(), Ok(Some(Player::Red)));
    assert_eq!(
        events.borrow().last(),
        Some(&GameEvent::GameOver {
            winner: Some(Player::Red)
        })
    );
}
