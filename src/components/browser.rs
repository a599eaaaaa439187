//! Browser component - Main application screen
//!
//! Displays the filters bar, the paginated record table, status, and the
//! help bar. Owns presentation-only state (search input mode and the
//! horizontal table scroll); all data state lives in ViewState and is
//! passed in for rendering.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    build_table_lines, calculate_browser_layout, column_widths, table_width,
};
use crate::model::{FilterSemantics, ViewState, COLUMN_HEADERS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Display cells scrolled per [ or ] press
const SCROLL_STEP: u16 = 8;

// ═══════════════════════════════════════════════════════════════════════════════
// Browser Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Browser component for the main table view
pub struct BrowserComponent {
    /// Whether search input mode is active
    pub search_mode: bool,

    /// Horizontal scroll offset into the table, in display cells
    pub h_scroll: u16,
}

impl Default for BrowserComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserComponent {
    pub fn new() -> Self {
        Self {
            search_mode: false,
            h_scroll: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter search mode
    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Exit search mode, keeping the current term
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Horizontal Scroll
    // ─────────────────────────────────────────────────────────────────────────

    /// Scroll the table left
    pub fn scroll_left(&mut self) {
        self.h_scroll = self.h_scroll.saturating_sub(SCROLL_STEP);
    }

    /// Scroll the table right, clamped to the table width
    pub fn scroll_right(&mut self, max: u16) {
        self.h_scroll = self.h_scroll.saturating_add(SCROLL_STEP).min(max);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for BrowserComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Pagination
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),
            KeyCode::Char('g') => Some(Action::FirstPage),
            KeyCode::Char('G') => Some(Action::LastPage),

            // Horizontal scroll
            KeyCode::Char('[') => Some(Action::ScrollLeft),
            KeyCode::Char(']') => Some(Action::ScrollRight),

            // Search
            KeyCode::Char('/') => Some(Action::EnterSearchMode),

            // Filters
            KeyCode::Char('f') => Some(Action::OpenLocationFilter),
            KeyCode::Char('i') => Some(Action::OpenIndustryFilter),
            KeyCode::Char('m') => Some(Action::ToggleFilterSemantics),

            // Data
            KeyCode::Char('r') => Some(Action::Refetch),
            KeyCode::Char('x') => Some(Action::ExportXlsx),

            // Help
            KeyCode::Char('?') => Some(Action::OpenHelp),

            KeyCode::Char('q') => Some(Action::ForceQuit),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Scroll updates are handled by App, which has access to the view
        // and calls the scroll methods directly with the table width.
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_browser_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the browser screen
pub struct BrowserRenderContext<'a> {
    pub view: &'a ViewState,
    pub status_message: Option<&'a str>,
    /// Number of fetches still running
    pub in_flight: usize,
}

/// Current page as display rows
fn page_rows(view: &ViewState) -> Vec<Vec<String>> {
    view.page_records()
        .iter()
        .map(|record| record.cells().to_vec())
        .collect()
}

/// Widest horizontal offset that still shows table content
pub fn max_h_scroll(view: &ViewState) -> u16 {
    let widths = column_widths(&COLUMN_HEADERS, &page_rows(view));
    (table_width(&widths) as u16).saturating_sub(1)
}

/// Draw the browser screen
pub fn draw_browser_screen(
    frame: &mut Frame,
    area: Rect,
    browser: &mut BrowserComponent,
    ctx: &BrowserRenderContext,
) -> Result<()> {
    let layout = calculate_browser_layout(area);

    render_filters_bar(frame, layout.filters, browser, ctx);
    render_table(frame, layout.table, browser, ctx);
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, browser);

    Ok(())
}

fn render_filters_bar(
    frame: &mut Frame,
    area: Rect,
    browser: &BrowserComponent,
    ctx: &BrowserRenderContext,
) {
    let view = ctx.view;
    let mut spans = vec![];

    if browser.search_mode {
        spans.push(Span::styled("Search: ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!("{}_", view.search_term),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    } else if !view.search_term.is_empty() {
        spans.push(Span::styled("Search: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            view.search_term.clone(),
            Style::default().fg(Color::White),
        ));
    } else {
        spans.push(Span::styled(
            "/ to search",
            Style::default().fg(Color::DarkGray),
        ));
    }

    for (name, filter) in [
        ("location", &view.location_filter),
        ("industry", &view.industry_filter),
    ] {
        if let Some(value) = filter {
            let shown = if value.is_empty() { "(empty)" } else { value };
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                format!("{}: {}", name, shown),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("{} filters", view.semantics.label()),
        match view.semantics {
            FilterSemantics::Composed => Style::default().fg(Color::DarkGray),
            FilterSemantics::Legacy => Style::default().fg(Color::Magenta),
        },
    ));

    if ctx.in_flight > 0 {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("fetching…", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    browser: &BrowserComponent,
    ctx: &BrowserRenderContext,
) {
    let rows = page_rows(ctx.view);
    let lines = build_table_lines(&COLUMN_HEADERS, &rows);

    let title = format!(" Case Studies ({}) ", ctx.view.visible().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((0, browser.h_scroll));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &BrowserRenderContext) {
    let mut spans = vec![];

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        let view = ctx.view;
        spans.push(Span::styled(
            format!(" Page {} of {} ", view.page, view.total_pages().max(1)),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {} records", view.visible().len()),
            Style::default().fg(Color::DarkGray),
        ));
        if view.loading {
            spans.push(Span::styled(
                "  loading…",
                Style::default().fg(Color::Cyan),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, browser: &BrowserComponent) {
    let help_spans = if browser.search_mode {
        vec![
            Span::styled(
                " Esc/Enter ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Done  "),
            Span::styled(
                " Backspace ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Delete  "),
            Span::styled(
                "matches update as you type",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    } else {
        vec![
            Span::styled(
                " q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit "),
            Span::styled(
                " / ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Search "),
            Span::styled(
                " f ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Location "),
            Span::styled(
                " i ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Industry "),
            Span::styled(
                " h/l ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Pages "),
            Span::styled(
                " x ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Export "),
            Span::styled(
                " r ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Refetch "),
            Span::styled(
                " ? ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Help"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(help_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}
