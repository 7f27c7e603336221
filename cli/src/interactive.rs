//! Interactive keypad loop
//!
//! Raw-mode key events mapped to engine intents, two-line display redrawn
//! per event. Enter evaluates, Backspace deletes, `c` clears, Esc, `q`, or
//! Ctrl-C quits.

use crate::formatter;
use abacus::{compute, Intent, Session, Theme};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;

pub async fn run(theme: Option<Theme>) -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = event_loop(theme.as_ref()).await;
    terminal::disable_raw_mode()?;
    // Step past the two display lines before handing the prompt back
    println!();
    println!();
    result
}

async fn event_loop(theme: Option<&Theme>) -> Result<()> {
    let mut session = Session::new();
    let mut out = io::stdout();
    formatter::draw(&mut out, &session, theme)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_quit(&key) {
            return Ok(());
        }

        if let Some(intent) = map_key(&key) {
            if let Some(request) = session.handle(intent) {
                // Show the pending placeholder while the evaluation runs
                formatter::draw(&mut out, &session, theme)?;
                let completion = compute(request).await;
                session.apply_completion(completion);
            }
        }
        formatter::draw(&mut out, &session, theme)?;
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}

fn map_key(key: &KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Enter => Some(Intent::Equals),
        KeyCode::Backspace => Some(Intent::Delete),
        KeyCode::Char('c') => Some(Intent::Clear),
        KeyCode::Char(ch) => Intent::from_key(ch),
        _ => None,
    }
}
