//! Read-only state snapshot for rendering and previews
//!
//! Collaborators never touch the live grid; they read a `GameSnapshot`
//! refilled in place via `Game::snapshot_into`. The ghost projection only
//! exists here - it is recomputed for every snapshot and never stored in
//! the authoritative stage.

use crate::types::{GameStatus, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};

/// One renderable tile. `ghost` marks the hard-drop projection of the
/// active piece; ghost tiles are always logically empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileView {
    pub kind: Option<PieceKind>,
    pub locked: bool,
    pub ghost: bool,
}

/// Complete renderable game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub tiles: [[TileView; STAGE_WIDTH as usize]; STAGE_HEIGHT as usize],
    pub active: Option<PieceKind>,
    pub next: Option<PieceKind>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub status: GameStatus,
    pub score: u32,
    pub rows: u32,
    pub level: u32,
    pub combo: u32,
    /// Current timer intervals; None means the timer is disabled.
    pub gravity_interval_ms: Option<u64>,
    pub garbage_interval_ms: Option<u64>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles = [[TileView::default(); STAGE_WIDTH as usize]; STAGE_HEIGHT as usize];
        self.active = None;
        self.next = None;
        self.hold = None;
        self.can_hold = true;
        self.status = GameStatus::Menu;
        self.score = 0;
        self.rows = 0;
        self.level = 0;
        self.combo = 0;
        self.gravity_interval_ms = None;
        self.garbage_interval_ms = None;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: [[TileView::default(); STAGE_WIDTH as usize]; STAGE_HEIGHT as usize],
            active: None,
            next: None,
            hold: None,
            can_hold: true,
            status: GameStatus::Menu,
            score: 0,
            rows: 0,
            level: 0,
            combo: 0,
            gravity_interval_ms: None,
            garbage_interval_ms: None,
        }
    }
}
