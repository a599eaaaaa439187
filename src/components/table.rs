//! Table rendering for case-study records
//!
//! Builds aligned header/separator/row lines for the current page. Widths
//! are display widths, so records with non-ASCII names and locations keep
//! their columns aligned.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cap on a single column, in display cells
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Column widths sized to content, capped at MAX_COLUMN_WIDTH
pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.width()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            }
        }
    }

    for width in &mut widths {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }

    widths
}

/// Total display width of a table line including column separators
pub fn table_width(col_widths: &[usize]) -> usize {
    col_widths.iter().sum::<usize>() + col_widths.len() * " │ ".width()
}

/// Build table lines from headers and rows
pub fn build_table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let col_widths = column_widths(headers, rows);
    let mut lines = Vec::new();

    let header_spans: Vec<Span> = headers
        .iter()
        .enumerate()
        .flat_map(|(i, header)| {
            vec![
                Span::styled(
                    pad_cell(header, col_widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    let separator: String = col_widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No matching records",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for row in rows {
        let row_spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let width = col_widths.get(i).copied().unwrap_or(10);
                vec![
                    Span::styled(pad_cell(cell, width), Style::default().fg(Color::White)),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    lines
}

/// Truncate to `width` display cells, appending "..." when cut
fn truncate_cell(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let target = width.saturating_sub(3);
    let mut truncated = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > target {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }

    truncated.push_str("...");
    truncated
}

/// Truncate and right-pad to exactly `width` display cells
fn pad_cell(text: &str, width: usize) -> String {
    let truncated = truncate_cell(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}
