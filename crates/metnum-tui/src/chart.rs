//! Interpolation chart widget.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use metnum_orchestration::ChartData;

use crate::styles::ColorTheme;

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .into_iter()
        .map(|v| Span::raw(format!("{v:.2}")))
        .collect()
}

/// Render the data points as a scatter plot and the interpolated values as a line.
pub fn render_chart(frame: &mut Frame, area: Rect, data: &ChartData, theme: &ColorTheme) {
    let (x_bounds, y_bounds) = data.bounds();

    let datasets = vec![
        Dataset::default()
            .name("Datos")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&data.points),
        Dataset::default()
            .name(data.method.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.primary))
            .data(&data.curve),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Gráfico: {} ", data.method))
                .border_style(theme.border_style()),
        )
        .x_axis(
            Axis::default()
                .title("x")
                .style(theme.muted_style())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("y")
                .style(theme.muted_style())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}
