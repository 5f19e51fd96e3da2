//! Busy overlay.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Spinner glyph for a tick count.
#[must_use]
pub fn spinner_frame(tick: u64) -> &'static str {
    #[allow(clippy::cast_possible_truncation)]
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Render a centered box with a spinner and the busy message.
pub fn render_busy(frame: &mut Frame, area: Rect, message: &str, tick: u64, theme: &ColorTheme) {
    #[allow(clippy::cast_possible_truncation)]
    let width = (message.chars().count() as u16 + 8).min(area.width);
    let rect = centered(area, width, 3);

    let paragraph = Paragraph::new(Line::styled(
        format!("{} {message}", spinner_frame(tick)),
        theme.header_style(),
    ))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.focused_style()),
    );
    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}
