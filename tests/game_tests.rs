//! Integration tests for the game orchestrator's public surface

use gridfall::core::{Game, GameSnapshot};
use gridfall::types::{Command, GameEvent, GameStatus, TickSource, SPAWN_X, SPAWN_Y};

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(12345);
    assert_eq!(game.status(), GameStatus::Menu);
    assert!(game.player().is_none());

    assert!(game.start_game());
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.player().is_some());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 0);
}

#[test]
fn test_game_commands_move_the_piece() {
    let mut game = Game::new(12345);
    game.start_game();

    let initial_x = game.player().unwrap().active().x;
    assert_eq!(initial_x, SPAWN_X);

    game.on_command(Command::MoveLeft);
    assert_eq!(game.player().unwrap().active().x, initial_x - 1);

    game.on_command(Command::MoveRight);
    assert_eq!(game.player().unwrap().active().x, initial_x);
}

#[test]
fn test_gravity_tick_advances_and_eventually_locks() {
    let mut game = Game::new(12345);
    game.start_game();

    game.on_tick(TickSource::Gravity);
    assert_eq!(game.player().unwrap().active().y, SPAWN_Y + 1);

    let mut locked = false;
    for _ in 0..64 {
        game.on_tick(TickSource::Gravity);
        if game.take_events().contains(&GameEvent::PieceLocked) {
            locked = true;
            break;
        }
    }
    assert!(locked);
    assert_eq!(game.player().unwrap().active().y, SPAWN_Y);
}

#[test]
fn test_hard_drop_locks_immediately() {
    let mut game = Game::new(12345);
    game.start_game();

    game.on_command(Command::HardDrop);
    assert!(game.take_events().contains(&GameEvent::PieceLocked));
    assert_eq!(game.player().unwrap().active().y, SPAWN_Y);
}

#[test]
fn test_hold_swaps_into_empty_slot() {
    let mut game = Game::new(12345);
    game.start_game();

    let first = game.player().unwrap().active().kind;
    let queued = game.player().unwrap().next_kind();

    game.on_command(Command::Hold);

    let player = game.player().unwrap();
    assert_eq!(player.hold_kind(), Some(first));
    assert_eq!(player.active().kind, queued);
    assert!(player.has_held());
}

#[test]
fn test_pause_freezes_commands_and_ticks() {
    let mut game = Game::new(12345);
    game.start_game();
    game.pause();

    let y = game.player().unwrap().active().y;
    game.on_tick(TickSource::Gravity);
    game.on_command(Command::HardDrop);
    assert_eq!(game.player().unwrap().active().y, y);

    game.resume();
    game.on_tick(TickSource::Gravity);
    assert_eq!(game.player().unwrap().active().y, y + 1);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = Game::new(777);
    let mut b = Game::new(777);
    a.start_game();
    b.start_game();

    let script = [
        Command::MoveLeft,
        Command::RotateCw,
        Command::HardDrop,
        Command::MoveRight,
        Command::RotateCcw,
        Command::HardDrop,
    ];
    for cmd in script {
        a.on_command(cmd);
        b.on_command(cmd);
        a.on_tick(TickSource::Gravity);
        b.on_tick(TickSource::Gravity);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let mut game = Game::new(9);
    game.start_game();

    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);
    assert_eq!(snap.status, GameStatus::Playing);
    assert!(snap.active.is_some());
    assert!(snap.next.is_some());

    // A later refill fully overwrites the previous frame: exactly one
    // falling piece's worth of unlocked tiles.
    game.on_command(Command::HardDrop);
    game.snapshot_into(&mut snap);
    let falling = snap
        .tiles
        .iter()
        .flatten()
        .filter(|t| t.kind.is_some() && !t.locked)
        .count();
    assert_eq!(falling, 4);
}
