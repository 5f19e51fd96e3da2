//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::navigation::View;
use crate::styles::ColorTheme;

/// Render the view tabs, highlighting the active one.
pub fn render_header(frame: &mut Frame, area: Rect, active: View, theme: &ColorTheme) {
    let titles = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{i} {}", v.title()));

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(theme.muted_style())
        .highlight_style(theme.active_tab_style())
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(" Métodos Numéricos ")
                .title_style(theme.header_style()),
        );
    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_header_lists_views() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, View::Integration, &ColorTheme::default());
            })
            .unwrap();

        let row = |y: u16| -> String {
            (0..buf.area.width)
                .map(|x| buf.buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).contains("Métodos Numéricos"));
        assert!(row(1).contains("0 Inicio"));
        assert!(row(1).contains("3 Derivación"));
    }

    #[test]
    fn active_tab_is_highlighted() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, View::Integration, &ColorTheme::default());
            })
            .unwrap();

        let theme = ColorTheme::default();
        let tabs: Vec<String> = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        let start = tabs.windows(5).position(|w| w.concat() == "Integ").unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let cell = &buf.buffer[(start as u16, 1)];
        assert_eq!(cell.bg, theme.active_tab_style().bg.unwrap());
    }
}
