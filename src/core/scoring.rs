//! Scoring and progression - pure functions, no state
//!
//! Classic line-clear table multiplied by level and a capped combo
//! multiplier; level is derived from total cleared rows. The difficulty
//! timers for gravity and garbage injection also derive from level here.

use crate::types::{
    COMBO_MULTIPLIER_CAP, COMBO_MULTIPLIER_STEP, GARBAGE_BASE_MS, GARBAGE_FLOOR_MS,
    GARBAGE_STEP_MS, GRAVITY_BASE_MS, GRAVITY_DECAY, GRAVITY_FLOOR_MS, LINE_SCORES,
};

/// Base points for a clear of `lines` rows. A lock clears 1-4 rows by
/// construction; anything else scores zero.
pub fn base_points(lines: u32) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines as usize],
        _ => 0,
    }
}

/// Combo multiplier for the given post-increment combo count:
/// `min(10, 1 + (combo - 1) * 0.5)`.
pub fn combo_multiplier(combo: u32) -> f64 {
    let bonus = combo.saturating_sub(1) as f64 * COMBO_MULTIPLIER_STEP;
    (1.0 + bonus).min(COMBO_MULTIPLIER_CAP)
}

/// Score delta for a clearing lock: `floor(base * (level + 1) * combo
/// multiplier)`. `level` is the level in effect when the lock happened,
/// before the cleared rows are counted.
pub fn clear_score(lines: u32, level: u32, combo: u32) -> u32 {
    let points = base_points(lines) as f64 * (level + 1) as f64 * combo_multiplier(combo);
    points.floor() as u32
}

/// Level is a pure function of total cleared rows.
pub fn level_for_rows(rows: u32) -> u32 {
    rows / 10
}

/// Gravity interval: `max(150, floor(800 * 0.95^level))` milliseconds.
pub fn gravity_interval_ms(level: u32) -> u64 {
    let interval = (GRAVITY_BASE_MS as f64 * GRAVITY_DECAY.powi(level as i32)).floor() as u64;
    interval.max(GRAVITY_FLOOR_MS)
}

/// Garbage interval: `max(2000, 15000 - level * 1200)` milliseconds, or
/// None at level 0 (garbage disabled until the first level-up).
pub fn garbage_interval_ms(level: u32) -> Option<u64> {
    if level == 0 {
        return None;
    }
    let interval = GARBAGE_BASE_MS.saturating_sub(level as u64 * GARBAGE_STEP_MS);
    Some(interval.max(GARBAGE_FLOOR_MS))
}
