// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Arrow-key selection menu

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use crate::error::{Error, Result};

const PROMPT: &str = "Use the arrow keys to navigate and press Enter to select a file:";

/// What a key press did to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Highlight moved or key ignored; keep reading
    Continue,
    /// Entry at this index was chosen
    Select(usize),
    /// Menu dismissed
    Cancel,
}

/// Selection state over a non-empty list of entries
#[derive(Debug, Clone)]
pub struct Menu {
    len: usize,
    selected: usize,
}

impl Menu {
    /// Create a menu over `len` entries with the first highlighted
    ///
    /// Returns `None` for an empty list.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, selected: 0 })
    }

    /// Currently highlighted index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move up, wrapping to the last entry
    pub fn up(&mut self) {
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            self.len - 1
        };
    }

    /// Move down, wrapping to the first entry
    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % self.len;
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> MenuAction {
        if key.kind == KeyEventKind::Release {
            return MenuAction::Continue;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.up(),
            KeyCode::Down | KeyCode::Char('j') => self.down(),
            KeyCode::Enter => return MenuAction::Select(self.selected),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return MenuAction::Cancel
            }
            KeyCode::Esc | KeyCode::Char('q') => return MenuAction::Cancel,
            _ => {}
        }
        MenuAction::Continue
    }
}

/// Leaves raw mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!(error = %e, "Failed to restore terminal mode");
        }
    }
}

/// Show the menu on the terminal and return the chosen file
pub fn select_file(files: &[PathBuf]) -> Result<PathBuf> {
    let mut menu = Menu::new(files.len()).ok_or(Error::SelectionCancelled)?;
    let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();

    let mut stdout = io::stdout();
    let guard = RawModeGuard::enable()?;

    let choice = loop {
        render(&mut stdout, &names, menu.selected())?;

        if let Event::Key(key) = event::read()? {
            match menu.handle_key(key) {
                MenuAction::Continue => {}
                MenuAction::Select(index) => break Some(index),
                MenuAction::Cancel => break None,
            }
        }
    };

    drop(guard);
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    match choice {
        Some(index) => {
            tracing::debug!(file = %files[index].display(), "File selected");
            Ok(files[index].clone())
        }
        None => Err(Error::SelectionCancelled),
    }
}

fn render(out: &mut impl Write, names: &[String], selected: usize) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetForegroundColor(Color::Cyan),
        Print(PROMPT),
        ResetColor,
        Print("\r\n")
    )?;

    for (i, name) in names.iter().enumerate() {
        if i == selected {
            queue!(
                out,
                SetBackgroundColor(Color::DarkCyan),
                SetForegroundColor(Color::White),
                Print(name),
                ResetColor,
                Print("\r\n")
            )?;
        } else {
            queue!(out, Print(name), Print("\r\n"))?;
        }
    }

    out.flush()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::Command;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_empty_menu() {
        assert!(Menu::new(0).is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = Menu::new(3).unwrap();

        assert_eq!(menu.handle_key(press(KeyCode::Up)), MenuAction::Continue);
        assert_eq!(menu.selected(), 2);

        menu.handle_key(press(KeyCode::Down));
        assert_eq!(menu.selected(), 0);

        menu.handle_key(press(KeyCode::Char('j')));
        menu.handle_key(press(KeyCode::Char('j')));
        assert_eq!(menu.handle_key(press(KeyCode::Enter)), MenuAction::Select(2));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut menu = Menu::new(2).unwrap();
        menu.handle_key(press(KeyCode::Down));

        assert_eq!(menu.handle_key(press(KeyCode::Char('x'))), MenuAction::Continue);
        assert_eq!(menu.handle_key(press(KeyCode::Left)), MenuAction::Continue);
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_cancel_keys() {
        let mut menu = Menu::new(1).unwrap();

        assert_eq!(menu.handle_key(press(KeyCode::Esc)), MenuAction::Cancel);
        assert_eq!(menu.handle_key(press(KeyCode::Char('q'))), MenuAction::Cancel);
        assert_eq!(
            menu.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            MenuAction::Cancel
        );
    }

    #[test]
    fn test_render_marks_selection() {
        let names = vec!["a.http".to_string(), "b.http".to_string()];
        let mut out = Vec::new();
        render(&mut out, &names, 1).unwrap();

        let mut highlight = String::new();
        SetBackgroundColor(Color::DarkCyan).write_ansi(&mut highlight).unwrap();
        SetForegroundColor(Color::White).write_ansi(&mut highlight).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(PROMPT));
        assert!(text.find("a.http").unwrap() < text.find("b.http").unwrap());
        assert!(text.contains(&format!("{highlight}b.http")));
        assert!(!text.contains(&format!("{highlight}a.http")));
        assert!(text.contains("\r\na.http\r\n"));
    }
}
