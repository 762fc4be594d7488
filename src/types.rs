//! Core types shared across the crate
//!
//! Pure data types and constants with no external dependencies.

/// Stage dimensions. Rows 0..BUFFER_ROWS are a hidden buffer above the
/// visible play area; rows BUFFER_ROWS..STAGE_HEIGHT are shown on screen.
pub const STAGE_WIDTH: u8 = 12;
pub const STAGE_HEIGHT: u8 = 24;
pub const BUFFER_ROWS: u8 = 4;

/// First visible row. A locked cell here after a sweep means lock-out.
pub const VISIBLE_START_ROW: u8 = BUFFER_ROWS;

/// Spawn anchor: horizontally centered, vertically inside the buffer so a
/// fresh piece only overlaps the visible area once it has fallen two rows.
pub const SPAWN_X: i8 = (STAGE_WIDTH / 2) as i8 - 2;
pub const SPAWN_Y: i8 = 2;

/// Gravity timing: interval = max(GRAVITY_FLOOR_MS, floor(800 * 0.95^level)).
pub const GRAVITY_BASE_MS: u64 = 800;
pub const GRAVITY_DECAY: f64 = 0.95;
pub const GRAVITY_FLOOR_MS: u64 = 150;

/// Garbage timing: interval = max(GARBAGE_FLOOR_MS, 15000 - level * 1200),
/// disabled entirely at level 0.
pub const GARBAGE_BASE_MS: u64 = 15_000;
pub const GARBAGE_STEP_MS: u64 = 1_200;
pub const GARBAGE_FLOOR_MS: u64 = 2_000;

/// Line clear base points, indexed by number of lines (classic table).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Combo multiplier: 1 + (combo - 1) * 0.5, capped at this value.
pub const COMBO_MULTIPLIER_CAP: f64 = 10.0;
pub const COMBO_MULTIPLIER_STEP: f64 = 0.5;

/// Occupant kinds. `Garbage` is only ever produced by garbage injection,
/// never by the randomizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
    Garbage,
}

impl PieceKind {
    /// The seven spawnable kinds, in randomizer order.
    pub const PLAYABLE: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Single-character label used by the text view and previews.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
            PieceKind::Garbage => 'G',
        }
    }
}

/// One stage cell. Only `locked: true` cells count as permanent occupancy;
/// unlocked occupants are the active piece's transient per-frame paint and
/// are wiped at the start of every redraw. The ghost projection is never
/// stored here - it lives in the snapshot overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied { kind: PieceKind, locked: bool },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Cell::Occupied { locked: true, .. })
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { kind, .. } => Some(*kind),
        }
    }
}

/// Discrete player commands, accepted only while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    SoftDropRelease,
    RotateCw,
    RotateCcw,
    Hold,
    HardDrop,
}

/// Which external timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSource {
    Gravity,
    Garbage,
}

/// Orchestrator-level lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Events raised by the core for its collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LinesCleared(u32),
    PieceLocked,
    GameOver { final_score: u32 },
}

/// Best-effort side-channel cues (audio/visual feedback). Sinks must never
/// influence game state; the core fires these and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Move,
    Rotate,
    SoftDrop,
    Lock,
    HardDrop,
    Hold,
    Clear,
    GameOver,
}
