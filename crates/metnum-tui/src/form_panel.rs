//! Input form of a feature view.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use metnum_core::form::{fields_for, FieldKind};
use metnum_core::{Feature, FormState};

use crate::fields::FieldValidator;
use crate::styles::ColorTheme;

const LABEL_WIDTH: usize = 22;

/// Build the form lines: one per field, plus one per blur error.
#[must_use]
pub fn form_lines(
    feature: Feature,
    form: &FormState,
    focused: Option<&str>,
    validator: &FieldValidator,
    theme: &ColorTheme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for field in fields_for(feature) {
        let is_focused = focused == Some(field.id);
        let value = form.get(field.id);
        let shown = match field.kind {
            FieldKind::Method => format!("◀ {} ▶", feature.method_label(value)),
            _ if is_focused => format!("{value}▏"),
            _ => value.to_string(),
        };

        let marker = if is_focused { "▶ " } else { "  " };
        let label_style = if is_focused {
            theme.focused_style().add_modifier(Modifier::BOLD)
        } else {
            theme.text_style()
        };
        let value_style = if validator.has_error(field.id) {
            theme.error_style()
        } else if is_focused {
            theme.focused_style()
        } else {
            theme.text_style()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<LABEL_WIDTH$}", field.label), label_style),
            Span::styled(shown, value_style),
        ]));
        if let Some(message) = validator.error(field.id) {
            lines.push(Line::styled(
                format!("    ✗ {message}"),
                theme.error_style(),
            ));
        }
    }
    lines
}

/// Render a feature's form.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    feature: Feature,
    form: &FormState,
    focused: Option<&str>,
    validator: &FieldValidator,
    theme: &ColorTheme,
) {
    let lines = form_lines(feature, form, focused, validator, theme);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", feature.label()))
            .border_style(theme.border_style()),
    );
    frame.render_widget(paragraph, area);
}
