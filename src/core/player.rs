//! Player module - the active piece, hold slot, and next-piece queue
//!
//! All mutation proposals here are validated through `Stage::collides`;
//! illegal moves are silent no-ops so callers decide the fallback (e.g. a
//! blocked downward move becomes a lock attempt).

use crate::core::rng::SimpleRng;
use crate::core::stage::Stage;
use crate::core::tetromino::{spawn_shape, Shape};
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    /// This tick's move attempt hit something; the next redraw commits the
    /// piece as a lock.
    pub collided: bool,
}

impl Piece {
    /// A fresh piece at the spawn anchor in spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
            collided: false,
        }
    }
}

/// Active piece plus hold slot and single-slot lookahead queue.
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) active: Piece,
    next: PieceKind,
    hold: Option<PieceKind>,
    has_held: bool,
}

impl Player {
    /// Draw the first active piece and the lookahead from the randomizer.
    pub fn new(rng: &mut SimpleRng) -> Self {
        let active = Piece::spawn(rng.draw_kind());
        let next = rng.draw_kind();
        Self {
            active,
            next,
            hold: None,
            has_held: false,
        }
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn hold_kind(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn has_held(&self) -> bool {
        self.has_held
    }

    /// Translate the piece by (dx, dy) if the target is free. A successful
    /// move clears the `collided` flag; failure changes nothing.
    pub fn try_move(&mut self, stage: &Stage, dx: i8, dy: i8) -> bool {
        if stage.collides(&self.active, dx, dy) {
            return false;
        }
        self.active.x += dx;
        self.active.y += dy;
        self.active.collided = false;
        true
    }

    /// Mark the piece for locking on the next redraw.
    pub fn mark_collided(&mut self) {
        self.active.collided = true;
    }

    /// Rotate 90 degrees with the horizontal kick search. The scratch copy
    /// starts at the unchanged position; on collision, cumulative offsets
    /// walk the net positions +1, -1, +2, -2, ... and the attempt is
    /// rejected outright once the raw offset exceeds the shape side - an
    /// exact no-op, since only the scratch copy was touched.
    pub fn try_rotate(&mut self, stage: &Stage, clockwise: bool) -> bool {
        let mut piece = self.active;
        piece.shape = piece.shape.rotated(clockwise);

        let mut offset: i8 = 1;
        while stage.collides(&piece, 0, 0) {
            piece.x += offset;
            offset = -(offset + if offset > 0 { 1 } else { -1 });
            if offset > piece.shape.side() as i8 {
                return false;
            }
        }

        self.active = piece;
        true
    }

    /// Drop straight to the landing position and mark the lock in one
    /// step, with no intermediate frames.
    pub fn hard_drop(&mut self, stage: &Stage) {
        self.active.y += stage.drop_distance(&self.active);
        self.active.collided = true;
    }

    /// Stash or swap the active piece, at most once per piece lifetime.
    ///
    /// Both branches set `has_held`; the flag clears only on the natural
    /// post-lock spawn, never on the hold itself - one hold per piece that
    /// is actually played. The incoming piece is collision-checked at the
    /// spawn anchor; a blocked swap is a silent no-op.
    pub fn hold(&mut self, stage: &Stage, rng: &mut SimpleRng) -> bool {
        if self.has_held {
            return false;
        }

        match self.hold {
            None => {
                let incoming = Piece::spawn(self.next);
                if stage.collides(&incoming, 0, 0) {
                    return false;
                }
                self.hold = Some(self.active.kind);
                self.active = incoming;
                self.next = rng.draw_kind();
            }
            Some(held) => {
                let incoming = Piece::spawn(held);
                if stage.collides(&incoming, 0, 0) {
                    return false;
                }
                self.hold = Some(self.active.kind);
                self.active = incoming;
            }
        }

        self.has_held = true;
        true
    }

    /// Natural post-lock spawn: promote the queued piece, refill the
    /// queue, and re-arm the hold flag.
    pub fn spawn_next(&mut self, rng: &mut SimpleRng) {
        self.active = Piece::spawn(self.next);
        self.next = rng.draw_kind();
        self.has_held = false;
    }
}
