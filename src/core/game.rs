//! Game orchestrator - turns timer ticks and input commands into state
//!
//! The orchestrator is the single writer of the stage/player pair. Every
//! tick or command runs to completion before the next is accepted: piece
//! mutation first, then the stage recompute that depends on it. It does
//! not own timers; an external driver fires `on_tick` and reads the
//! interval getters back after every event (pausing disables both
//! intervals, resuming restarts the schedule from the current level).

use crate::core::player::Player;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{clear_score, garbage_interval_ms, gravity_interval_ms, level_for_rows};
use crate::core::snapshot::{GameSnapshot, TileView};
use crate::core::stage::Stage;
use crate::types::{
    Cell, Command, Cue, GameEvent, GameStatus, TickSource, STAGE_HEIGHT, STAGE_WIDTH,
};

/// Fire-and-forget sink for audio/visual cues. Implementations are best
/// effort; nothing in the core depends on what a sink does.
pub trait CueSink {
    fn cue(&mut self, cue: Cue);
}

/// Default sink: silence.
pub struct NullCues;

impl CueSink for NullCues {
    fn cue(&mut self, _cue: Cue) {}
}

/// Complete game state behind the lifecycle/tick/command interface.
pub struct Game {
    status: GameStatus,
    stage: Stage,
    player: Option<Player>,
    rng: SimpleRng,
    score: u32,
    rows: u32,
    level: u32,
    combo: u32,
    soft_dropping: bool,
    events: Vec<GameEvent>,
    cues: Box<dyn CueSink>,
}

impl Game {
    /// Create a game in the menu state with a silent cue sink.
    pub fn new(seed: u32) -> Self {
        Self::with_cues(seed, Box::new(NullCues))
    }

    /// Create a game with an injected cue sink.
    pub fn with_cues(seed: u32, cues: Box<dyn CueSink>) -> Self {
        Self {
            status: GameStatus::Menu,
            stage: Stage::new(),
            player: None,
            rng: SimpleRng::new(seed),
            score: 0,
            rows: 0,
            level: 0,
            combo: 0,
            soft_dropping: false,
            events: Vec::new(),
            cues,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Gravity interval for the external timer. None while not playing or
    /// while a soft drop is held (the driver steps manually instead).
    pub fn gravity_interval(&self) -> Option<u64> {
        if self.status != GameStatus::Playing || self.soft_dropping {
            return None;
        }
        Some(gravity_interval_ms(self.level))
    }

    /// Garbage interval for the external timer. None while not playing or
    /// at level 0.
    pub fn garbage_interval(&self) -> Option<u64> {
        if self.status != GameStatus::Playing {
            return None;
        }
        garbage_interval_ms(self.level)
    }

    /// Drain events raised since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a new game. Only the menu and game-over states may start one.
    pub fn start_game(&mut self) -> bool {
        match self.status {
            GameStatus::Menu | GameStatus::GameOver => {
                self.reset_round();
                true
            }
            _ => false,
        }
    }

    /// Full reset into a fresh playing state, from any in-game state.
    pub fn restart(&mut self) -> bool {
        if self.status == GameStatus::Menu {
            return false;
        }
        self.reset_round();
        true
    }

    fn reset_round(&mut self) {
        self.stage = Stage::new();
        self.player = Some(Player::new(&mut self.rng));
        self.score = 0;
        self.rows = 0;
        self.level = 0;
        self.combo = 0;
        self.soft_dropping = false;
        self.events.clear();
        self.status = GameStatus::Playing;
        self.sync_stage();
    }

    /// Suspend play. The interval getters go to None, which stops the
    /// external timers without racing an in-flight callback.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Paused;
        true
    }

    /// Resume play; the driver re-reads the intervals and restarts both
    /// periodic schedules from the current level.
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        true
    }

    /// Advance one unit for the given timer.
    pub fn on_tick(&mut self, source: TickSource) {
        if self.status != GameStatus::Playing {
            return;
        }
        match source {
            TickSource::Gravity => self.gravity_step(),
            TickSource::Garbage => self.garbage_step(),
        }
    }

    /// Apply a discrete player command. Ignored unless playing.
    pub fn on_command(&mut self, cmd: Command) {
        if self.status != GameStatus::Playing {
            return;
        }
        let Some(player) = self.player.as_mut() else {
            return;
        };

        match cmd {
            Command::MoveLeft | Command::MoveRight => {
                let dx = if cmd == Command::MoveLeft { -1 } else { 1 };
                if player.try_move(&self.stage, dx, 0) {
                    self.cues.cue(Cue::Move);
                    self.sync_stage();
                }
            }
            Command::SoftDrop => {
                self.soft_dropping = true;
                self.cues.cue(Cue::SoftDrop);
                self.gravity_step();
            }
            Command::SoftDropRelease => {
                self.soft_dropping = false;
            }
            Command::RotateCw | Command::RotateCcw => {
                let clockwise = cmd == Command::RotateCw;
                if player.try_rotate(&self.stage, clockwise) {
                    self.cues.cue(Cue::Rotate);
                    self.sync_stage();
                }
            }
            Command::Hold => {
                if player.hold(&self.stage, &mut self.rng) {
                    self.cues.cue(Cue::Hold);
                    self.sync_stage();
                }
            }
            Command::HardDrop => {
                player.hard_drop(&self.stage);
                self.cues.cue(Cue::HardDrop);
                self.sync_stage();
            }
        }
    }

    /// One gravity unit: move down, or mark the piece for locking.
    fn gravity_step(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if !player.try_move(&self.stage, 0, 1) {
            player.mark_collided();
        }
        self.sync_stage();
    }

    /// One garbage unit: sentinel check (the grid is left untouched on
    /// overflow), inject a row, then rescue or bury the active piece.
    fn garbage_step(&mut self) {
        if self.stage.top_buffer_blocked() {
            self.signal_game_over();
            return;
        }

        let hole = self.rng.draw_hole();
        self.stage.push_garbage_row(hole);

        if let Some(player) = self.player.as_mut() {
            if self.stage.collides(player.active(), 0, 0) {
                if self.stage.collides(player.active(), 0, -1) {
                    // The shift moved the piece's paint a row off its true
                    // position; wipe it so the final frame shows only the
                    // stack that buried it.
                    self.stage.clear_transient();
                    self.signal_game_over();
                    return;
                }
                player.active.y -= 1;
            }
        }
        self.sync_stage();
    }

    /// Recompute the stage from the current piece state, handling lock
    /// processing when the piece committed this tick.
    fn sync_stage(&mut self) {
        let Some(player) = self.player.as_ref() else {
            return;
        };
        let Some(outcome) = self.stage.redraw(player.active()) else {
            return;
        };

        self.events.push(GameEvent::PieceLocked);
        if outcome.cleared > 0 {
            self.combo += 1;
            // Score uses the level in effect at lock time; the level-up
            // from these rows applies to later clears.
            self.score += clear_score(outcome.cleared, self.level, self.combo);
            self.rows += outcome.cleared;
            self.level = level_for_rows(self.rows);
            self.events.push(GameEvent::LinesCleared(outcome.cleared));
            self.cues.cue(Cue::Clear);
        } else {
            self.combo = 0;
            self.cues.cue(Cue::Lock);
        }

        if outcome.lock_out {
            self.signal_game_over();
            return;
        }

        if let Some(player) = self.player.as_mut() {
            player.spawn_next(&mut self.rng);
        }
        if let Some(player) = self.player.as_ref() {
            self.stage.redraw(player.active());
        }
    }

    fn signal_game_over(&mut self) {
        self.status = GameStatus::GameOver;
        self.soft_dropping = false;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        self.cues.cue(Cue::GameOver);
    }

    /// Refill a snapshot in place (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();

        for y in 0..STAGE_HEIGHT as usize {
            for x in 0..STAGE_WIDTH as usize {
                let cell = self.stage.get(x as i8, y as i8).unwrap_or(Cell::Empty);
                out.tiles[y][x] = TileView {
                    kind: cell.kind(),
                    locked: cell.is_locked(),
                    ghost: false,
                };
            }
        }

        if let Some(player) = self.player.as_ref() {
            let piece = player.active();
            let distance = self.stage.drop_distance(piece);
            for &(ox, oy) in piece.shape.offsets().iter() {
                let gx = piece.x + ox;
                let gy = piece.y + oy + distance;
                if gx < 0 || gy < 0 {
                    continue;
                }
                let (gx, gy) = (gx as usize, gy as usize);
                if gy < out.tiles.len() && gx < out.tiles[gy].len() && out.tiles[gy][gx].kind.is_none()
                {
                    out.tiles[gy][gx].ghost = true;
                }
            }

            out.active = Some(piece.kind);
            out.next = Some(player.next_kind());
            out.hold = player.hold_kind();
            out.can_hold = !player.has_held();
        }

        out.status = self.status;
        out.score = self.score;
        out.rows = self.rows;
        out.level = self.level;
        out.combo = self.combo;
        out.gravity_interval_ms = self.gravity_interval();
        out.garbage_interval_ms = self.garbage_interval();
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
