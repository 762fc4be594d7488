//! Gridfall - a terminal falling-block game
//!
//! The crate splits into a pure core and a thin presentation layer:
//!
//! - [`core`]: deterministic game logic (stage, pieces, scoring, orchestrator)
//! - [`view`]: renders a [`core::GameSnapshot`] into text lines
//! - [`types`]: shared constants, enums, and events
//!
//! The binary in `main.rs` owns the terminal and the two game timers;
//! everything it does goes through [`core::Game`] and [`view`].

pub mod core;
pub mod types;
pub mod view;
