//! Terminal runner (default binary).
//!
//! Owns the two game timers and the terminal; everything else goes through
//! `core::Game`. Timers are deadline-based: after every game interaction the
//! interval getters are re-read, so pausing stops the clocks and level-ups
//! reschedule them without racing an in-flight tick.

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use gridfall::core::{Game, GameSnapshot};
use gridfall::types::{Command, GameStatus, TickSource};
use gridfall::view;

/// How long a held soft drop survives without a key event before the
/// runner releases it on the game's behalf. Some terminals never deliver
/// key-release events.
const SOFT_DROP_GRACE: Duration = Duration::from_millis(150);

/// Upper bound on input poll latency so the UI stays responsive even when
/// both timers are far out.
const MAX_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let mut stdout = io::stdout();
    enter(&mut stdout)?;

    let result = run(&mut stdout);

    // Always try to restore terminal state.
    let _ = leave(&mut stdout);
    result
}

fn enter(stdout: &mut io::Stdout) -> Result<()> {
    terminal::enable_raw_mode()?;
    stdout.queue(terminal::EnterAlternateScreen)?;
    stdout.queue(cursor::Hide)?;
    stdout.flush()?;
    Ok(())
}

fn leave(stdout: &mut io::Stdout) -> Result<()> {
    stdout.queue(cursor::Show)?;
    stdout.queue(terminal::LeaveAlternateScreen)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// One deadline-driven periodic timer. The schedule restarts whenever the
/// game reports a different interval than the one it was armed with.
struct GameTimer {
    deadline: Option<Instant>,
    armed_with: Option<u64>,
}

impl GameTimer {
    fn new() -> Self {
        Self {
            deadline: None,
            armed_with: None,
        }
    }

    fn sync(&mut self, interval_ms: Option<u64>, now: Instant) {
        if interval_ms != self.armed_with {
            self.armed_with = interval_ms;
            self.deadline = interval_ms.map(|ms| now + Duration::from_millis(ms));
        }
    }

    /// True when the deadline has passed; re-arms from `now`.
    fn fire(&mut self, now: Instant) -> bool {
        match (self.deadline, self.armed_with) {
            (Some(deadline), Some(ms)) if now >= deadline => {
                self.deadline = Some(now + Duration::from_millis(ms));
                true
            }
            _ => false,
        }
    }

    fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

fn run(stdout: &mut io::Stdout) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut game = Game::new(seed);
    let mut snap = GameSnapshot::default();

    let mut gravity = GameTimer::new();
    let mut garbage = GameTimer::new();
    let mut soft_drop_release: Option<Instant> = None;

    loop {
        game.snapshot_into(&mut snap);
        draw(stdout, &snap)?;
        game.take_events();

        let now = Instant::now();
        gravity.sync(game.gravity_interval(), now);
        garbage.sync(game.garbage_interval(), now);

        // Lapsed soft drop without a release event: let gravity resume.
        if let Some(release) = soft_drop_release {
            if now >= release {
                game.on_command(Command::SoftDropRelease);
                soft_drop_release = None;
                continue;
            }
        }

        let timeout = [
            gravity.remaining(now),
            garbage.remaining(now),
            soft_drop_release.map(|r| r.saturating_duration_since(now)),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(MAX_POLL)
        .min(MAX_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        handle_key(&mut game, key.code, &mut soft_drop_release);
                    }
                    KeyEventKind::Release => {
                        if key.code == KeyCode::Down {
                            game.on_command(Command::SoftDropRelease);
                            soft_drop_release = None;
                        }
                    }
                }
            }
            continue;
        }

        let now = Instant::now();
        if gravity.fire(now) {
            game.on_tick(TickSource::Gravity);
        }
        if garbage.fire(now) {
            game.on_tick(TickSource::Garbage);
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn handle_key(game: &mut Game, code: KeyCode, soft_drop_release: &mut Option<Instant>) {
    match code {
        KeyCode::Enter => {
            game.start_game();
        }
        KeyCode::Char('r') => {
            game.restart();
        }
        KeyCode::Esc => {
            if !game.pause() {
                game.resume();
            }
        }
        KeyCode::Left => game.on_command(Command::MoveLeft),
        KeyCode::Right => game.on_command(Command::MoveRight),
        KeyCode::Up => game.on_command(Command::RotateCw),
        KeyCode::Char('z') => game.on_command(Command::RotateCcw),
        KeyCode::Char('c') => game.on_command(Command::Hold),
        KeyCode::Char(' ') => game.on_command(Command::HardDrop),
        KeyCode::Down => {
            *soft_drop_release = Some(Instant::now() + SOFT_DROP_GRACE);
            game.on_command(Command::SoftDrop);
        }
        _ => {}
    }
}

fn draw(stdout: &mut io::Stdout, snap: &GameSnapshot) -> Result<()> {
    stdout.queue(terminal::Clear(terminal::ClearType::All))?;

    let board = view::render_lines(snap);
    let panel = view::render_panel(snap);
    let panel_x = board
        .first()
        .map(|l| l.chars().count() as u16 + 2)
        .unwrap_or(0);

    for (y, line) in board.iter().enumerate() {
        stdout.queue(cursor::MoveTo(0, y as u16))?;
        stdout.queue(Print(line))?;
    }
    for (y, line) in panel.iter().enumerate() {
        stdout.queue(cursor::MoveTo(panel_x, y as u16 + 1))?;
        stdout.queue(Print(line))?;
    }

    let hint_y = board.len() as u16 + 1;
    stdout.queue(cursor::MoveTo(0, hint_y))?;
    let hint = match snap.status {
        GameStatus::Menu => "enter: start   q: quit",
        GameStatus::Playing => "arrows: move/rotate  z: ccw  space: drop  c: hold  esc: pause",
        GameStatus::Paused => "esc: resume   r: restart   q: quit",
        GameStatus::GameOver => "enter: new game   q: quit",
    };
    stdout.queue(Print(hint))?;

    stdout.flush()?;
    Ok(())
}
