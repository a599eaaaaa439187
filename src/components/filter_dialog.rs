//! Filter selection dialog
//!
//! One list popup serving both the location and the industry filter. Entry
//! 0 is the clear option ("All Locations" / "All Industries"); the rest are
//! the distinct values present in the collection.

use crate::action::Action;
use crate::component::Component;
use crate::model::ui::FilterKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Shown in place of an empty-string value
fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

/// Location/industry filter dialog
pub struct FilterDialog {
    /// Which record field this dialog filters
    kind: FilterKind,
    /// Selectable values
    pub values: Vec<String>,
    /// Selected entry index (0 is the clear entry)
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Active filter value when the dialog was opened
    pub current_filter: Option<String>,
}

impl FilterDialog {
    pub fn new(kind: FilterKind) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            kind,
            values: Vec::new(),
            selected_index: 0,
            list_state,
            current_filter: None,
        }
    }

    /// Set selectable values and position the selection on the active one
    pub fn set_values(&mut self, values: Vec<String>, current_filter: Option<&str>) {
        self.values = values;
        self.current_filter = current_filter.map(|value| value.to_string());

        self.selected_index = match current_filter {
            // +1 because of the clear entry at index 0
            Some(current) => self
                .values
                .iter()
                .position(|value| value == current)
                .map(|idx| idx + 1)
                .unwrap_or(0),
            None => 0,
        };
        self.list_state.select(Some(self.selected_index));
    }

    /// The selected value; None means the clear entry
    pub fn selected_value(&self) -> Option<&str> {
        if self.selected_index == 0 {
            None
        } else {
            self.values
                .get(self.selected_index - 1)
                .map(|value| value.as_str())
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < self.values.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn confirm_action(&self) -> Action {
        match (self.kind, self.selected_value()) {
            (FilterKind::Location, Some(value)) => Action::SetLocationFilter(value.to_string()),
            (FilterKind::Location, None) => Action::ClearLocationFilter,
            (FilterKind::Industry, Some(value)) => Action::SetIndustryFilter(value.to_string()),
            (FilterKind::Industry, None) => Action::ClearIndustryFilter,
        }
    }
}

impl Component for FilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            // The key that opened the dialog also closes it.
            KeyCode::Char('f') if self.kind == FilterKind::Location => Some(Action::CloseModal),
            KeyCode::Char('i') if self.kind == FilterKind::Industry => Some(Action::CloseModal),
            KeyCode::Enter => Some(self.confirm_action()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let content_height = if self.values.is_empty() {
            6
        } else {
            self.values.len() as u16 + 3
        };
        let popup_height = (content_height + 6).min(area.height.saturating_sub(4)).max(12);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Value list / empty message
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        // Header
        let header_text = match &self.current_filter {
            Some(current) => format!("Current: {}", display_value(current)),
            None => "No filter active".to_string(),
        };

        let header = Paragraph::new(Line::from(vec![Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.kind.title()))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        if self.values.is_empty() {
            let empty_message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No values in the current records",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Refetch with r once the server has data",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(empty_message, main_chunks[1]);
        } else {
            let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(vec![
                Span::styled(
                    if self.current_filter.is_none() {
                        "● "
                    } else {
                        "  "
                    },
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    self.kind.clear_label().to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))];

            for value in &self.values {
                let is_current = self.current_filter.as_deref() == Some(value.as_str());
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_current { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        display_value(value).to_string(),
                        if is_current {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ])));
            }

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);
        }

        // Help bar
        let close_key = match self.kind {
            FilterKind::Location => " Esc/f ",
            FilterKind::Industry => " Esc/i ",
        };
        let help_text = vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(close_key, Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ];

        let help = Paragraph::new(Line::from(help_text))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}
