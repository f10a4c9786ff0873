//! Key/input event sources.
//!
//! The default source polls crossterm. A scripted source driven by a
//! line-oriented DSL (selected via `ROSTER_TUI_SCRIPT`) can drive the UI
//! without a real tty.

use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};

/// Source of key/input events so scripts can drive the TUI without a tty.
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
    fn is_scripted(&self) -> bool {
        false
    }
}

pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Scripted event source driven by a simple line-oriented DSL:
///   tab|back-tab|enter|esc|left|right|backspace|type:<text>
/// Lines beginning with # are ignored. Blank lines are skipped.
/// When events are exhausted, we fail fast to avoid hangs.
pub struct ScriptEventSource {
    events: Vec<Event>,
    cursor: usize,
    exhausted_at: Option<Instant>,
}

impl ScriptEventSource {
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(&path).context("read scripted TUI input")?;
        Self::from_script(&contents)
    }

    pub fn from_script(contents: &str) -> Result<Self> {
        let mut events = Vec::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut push_key = |code: KeyCode, modifiers: KeyModifiers| {
                events.push(Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    state: KeyEventState::NONE,
                }));
            };

            match line {
                "tab" => push_key(KeyCode::Tab, KeyModifiers::NONE),
                "back-tab" => push_key(KeyCode::BackTab, KeyModifiers::SHIFT),
                "enter" => push_key(KeyCode::Enter, KeyModifiers::NONE),
                "esc" => push_key(KeyCode::Esc, KeyModifiers::NONE),
                "left" => push_key(KeyCode::Left, KeyModifiers::NONE),
                "right" => push_key(KeyCode::Right, KeyModifiers::NONE),
                "backspace" => push_key(KeyCode::Backspace, KeyModifiers::NONE),
                _ => {
                    if let Some(rest) = line.strip_prefix("type:") {
                        for ch in rest.chars() {
                            push_key(KeyCode::Char(ch), KeyModifiers::NONE);
                        }
                    } else {
                        return Err(anyhow!(
                            "unrecognized TUI script token at line {}: {}",
                            idx + 1,
                            line
                        ));
                    }
                }
            }
        }

        Ok(Self {
            events,
            cursor: 0,
            exhausted_at: None,
        })
    }
}

impl EventSource for ScriptEventSource {
    fn next(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        if self.cursor >= self.events.len() {
            // Allow a short grace period before failing to avoid a tight loop.
            match self.exhausted_at {
                Some(at) => {
                    if at.elapsed() > Duration::from_secs(1) {
                        return Err(anyhow!("scripted TUI input exhausted before quit"));
                    }
                }
                None => self.exhausted_at = Some(Instant::now()),
            }
            std::thread::sleep(Duration::from_millis(25));
            return Ok(None);
        }

        let ev = self.events[self.cursor].clone();
        self.cursor += 1;
        Ok(Some(ev))
    }

    fn is_scripted(&self) -> bool {
        true
    }
}

pub fn event_source_from_env() -> Result<Box<dyn EventSource>> {
    if let Ok(path) = std::env::var("ROSTER_TUI_SCRIPT") {
        let src = ScriptEventSource::from_path(PathBuf::from(path))?;
        Ok(Box::new(src))
    } else {
        Ok(Box::new(CrosstermEventSource))
    }
}
