//! Loading screen component
//!
//! Shown from startup until the first catalog fetch resolves, successfully
//! or not. The app switches to the browser screen either way.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// How long before the slow-fetch hint appears
const SLOW_HINT_AFTER: Duration = Duration::from_secs(5);

/// Loading screen component
pub struct LoadingComponent {
    /// When the loading screen was shown
    start_time: Option<Instant>,
    /// Current spinner frame, advanced on tick
    frame_index: usize,
}

impl Default for LoadingComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            frame_index: 0,
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()]
    }

    fn waiting_long(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= SLOW_HINT_AFTER)
            .unwrap_or(false)
    }
}

impl Component for LoadingComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // The loading screen cannot be skipped; it ends when the fetch does.
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.frame_index = self.frame_index.wrapping_add(1);
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(5) / 2),
                Constraint::Length(1), // wordmark
                Constraint::Length(1),
                Constraint::Length(1), // spinner line
                Constraint::Length(1), // slow hint
                Constraint::Min(0),
            ])
            .split(area);

        let wordmark = Line::from(Span::styled(
            "casebook",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(wordmark), chunks[1]);

        let spinner_line = Line::from(vec![
            Span::styled(self.spinner(), Style::default().fg(Color::Yellow)),
            Span::raw(" Loading case studies..."),
        ])
        .centered();
        frame.render_widget(Paragraph::new(spinner_line), chunks[3]);

        if self.waiting_long() {
            let hint = Line::from(Span::styled(
                "Still waiting on the data server (q quits)",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(hint), chunks[4]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_the_spinner() {
        let mut loading = LoadingComponent::new();
        let first = loading.spinner();
        loading.update(Action::Tick).unwrap();
        assert_ne!(loading.spinner(), first);
    }

    #[test]
    fn test_only_quit_key_produces_an_action() {
        let mut loading = LoadingComponent::new();
        let action = loading
            .handle_key_event(KeyEvent::from(KeyCode::Char('q')))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));

        let action = loading
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(action, None);
    }
}
