//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::navigation::View;
use crate::styles::ColorTheme;

fn hints(view: View) -> &'static [(&'static str, &'static str)] {
    if view == View::Home {
        &[
            ("1-3", "abrir vista"),
            ("Alt+1/2/3", "vistas"),
            ("Esc", "salir"),
        ]
    } else {
        &[
            ("F5", "calcular"),
            ("F6", "comparar"),
            ("Tab", "campo"),
            ("←/→", "método"),
            ("PgUp/PgDn", "desplazar"),
            ("Alt+0", "inicio"),
            ("Esc", "salir"),
        ]
    }
}

/// Render the footer panel with keyboard shortcuts for the active view.
pub fn render_footer(frame: &mut Frame, area: Rect, view: View, theme: &ColorTheme) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints(view).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(*key, theme.focused_style()));
        spans.push(Span::raw(format!(": {action}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
