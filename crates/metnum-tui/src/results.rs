//! Scrollable result panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Content and scroll position of one feature's result panel.
#[derive(Debug, Clone, Default)]
pub struct ResultPanel {
    lines: Vec<String>,
    is_error: bool,
    /// First visible line.
    pub offset: usize,
}

impl ResultPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content with a result or comparison text.
    pub fn show(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
        self.is_error = false;
        self.offset = 0;
    }

    /// Replace the content with an error.
    pub fn show_error(&mut self, message: &str) {
        self.lines = vec![format!("Error: {message}")];
        self.is_error = true;
        self.offset = 0;
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Page up.
    pub fn page_up(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
    }

    /// Page down, stopping at the last line.
    pub fn page_down(&mut self, page_size: usize) {
        self.offset = (self.offset + page_size).min(self.lines.len().saturating_sub(1));
    }
}

/// Render a result panel.
pub fn render_results(frame: &mut Frame, area: Rect, panel: &ResultPanel, theme: &ColorTheme) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let total = panel.lines.len();

    let style = if panel.is_error {
        theme.error_style()
    } else {
        theme.text_style()
    };

    let lines: Vec<Line> = if panel.is_empty() {
        vec![Line::styled(
            "Sin resultados. F5 calcula, F6 compara métodos.",
            theme.muted_style(),
        )]
    } else {
        panel
            .lines
            .iter()
            .skip(panel.offset)
            .map(|l| Line::styled(l.as_str(), style))
            .collect()
    };

    let title = if total > visible_height {
        let pct = (panel.offset * 100) / total.saturating_sub(1).max(1);
        format!(" Resultados ({pct}%) ")
    } else {
        " Resultados ".to_string()
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border_style()),
        );
    frame.render_widget(paragraph, area);
}
