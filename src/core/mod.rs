//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for tick processing
//!
//! # Module Structure
//!
//! - [`stage`]: 12x24 grid (top 4 rows hidden) with collision detection,
//!   row sweeping, and garbage injection
//! - [`player`]: Active/next/hold piece state with movement, ad-hoc
//!   rotation kicks, and hard drop
//! - [`tetromino`]: Piece shape matrices and matrix rotation
//! - [`scoring`]: Clear scores, combo multipliers, level, and the gravity
//!   and garbage timer curves
//! - [`rng`]: Seeded LCG for piece draws and garbage hole placement
//! - [`game`]: Orchestrator tying the above behind a tick/command interface
//! - [`snapshot`]: Read-only render view with ghost projection
//!
//! # Example
//!
//! ```
//! use gridfall::core::Game;
//! use gridfall::types::Command;
//!
//! let mut game = Game::new(12345);
//! game.start_game();
//!
//! game.on_command(Command::MoveRight);
//! game.on_command(Command::HardDrop);
//!
//! assert!(game.player().is_some());
//! ```
//!
//! # Timing
//!
//! The core owns no timers. An external driver calls
//! [`Game::on_tick`](game::Game::on_tick) and re-reads
//! [`Game::gravity_interval`](game::Game::gravity_interval) and
//! [`Game::garbage_interval`](game::Game::garbage_interval) after every
//! event; a `None` interval means that timer is stopped.

pub mod game;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod stage;
pub mod tetromino;

// Re-export commonly used types for convenience
pub use game::{CueSink, Game, NullCues};
pub use player::{Piece, Player};
pub use rng::SimpleRng;
pub use scoring::{clear_score, garbage_interval_ms, gravity_interval_ms, level_for_rows};
pub use snapshot::{GameSnapshot, TileView};
pub use stage::{LockSweep, Stage};
pub use tetromino::{spawn_shape, Shape};
