//! Home view.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use metnum_core::Feature;

use crate::styles::ColorTheme;

fn description(feature: Feature) -> &'static str {
    match feature {
        Feature::Interpolation => "Lineal, Newton, Lagrange y spline cúbico sobre pares (x, y).",
        Feature::Integration => "Trapecio, Simpson 1/3, Simpson 3/8 y Gauss-Legendre en [a, b].",
        Feature::Differentiation => "Diferencias hacia adelante, hacia atrás y centradas.",
    }
}

/// Render the introduction and one card per feature.
pub fn render_home(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let [intro_area, cards_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    let intro = Paragraph::new(vec![
        Line::styled("Calculadora de métodos numéricos", theme.header_style()),
        Line::styled(
            "Elige una vista con las teclas 1-3 o Alt+1/2/3. Los cálculos los resuelve el servidor.",
            theme.muted_style(),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(intro, intro_area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);
    for (i, feature) in Feature::ALL.into_iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("Alt+{}", i + 1), theme.focused_style()),
                Span::raw(" "),
                Span::styled(feature.label(), theme.header_style()),
            ]),
            Line::raw(""),
            Line::styled(description(feature), theme.text_style()),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
        frame.render_widget(card, columns[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn cards_name_each_feature() {
        let backend = TestBackend::new(120, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_home(frame, area, &ColorTheme::default());
            })
            .unwrap();
        let card_row: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 5)].symbol().to_string())
            .collect();
        assert!(card_row.contains("Alt+1 Interpolación"));
        assert!(card_row.contains("Alt+2 Integración"));
        assert!(card_row.contains("Alt+3 Derivación"));
    }

    #[test]
    fn small_area_does_not_panic() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_home(frame, area, &ColorTheme::default());
            })
            .unwrap();
    }
}
