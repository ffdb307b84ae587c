//! Shared chart rendering helpers.
//!
//! The screens feed sample-dataset values into these; all scaling here is
//! purely visual (ratatui bars take u64 heights).

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

/// Display colors for the four sectors, in dataset order.
pub const SECTOR_COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::Magenta, Color::Yellow];

/// One bar of a simple bar chart.
pub struct BarSpec {
    pub label: String,
    pub value: f64,
    /// Text drawn on the bar (the unscaled figure).
    pub text: String,
    pub color: Color,
}

/// Render a vertical bar chart, scaling `value * scale` into bar heights.
pub fn render_bar_chart(frame: &mut Frame, area: Rect, title: &str, bars: &[BarSpec], scale: f64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title.to_uppercase()));

    let bar_width = bar_width_for(area, bars.len().max(1));
    let chart_bars: Vec<Bar> = bars
        .iter()
        .map(|b| {
            let style = Style::default().fg(b.color);
            Bar::default()
                .value((b.value * scale).max(0.0) as u64)
                .label(Line::from(b.label.clone()))
                .text_value(b.text.clone())
                .style(style)
                .value_style(style.reversed())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&chart_bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Render a grouped bar chart: one group per entry, one bar per series.
///
/// The series names and colors double as the legend in the block title.
pub fn render_grouped_bar_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &[(&str, Color)],
    groups: &[(String, Vec<f64>)],
    scale: f64,
) {
    let mut title_spans = vec![Span::raw(format!(" {} ", title.to_uppercase()))];
    for (name, color) in series {
        title_spans.push(Span::styled(format!("■ {} ", name), Style::default().fg(*color)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans));

    let per_group = series.len().max(1);
    let bar_width = bar_width_for(area, groups.len().max(1) * per_group);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(2);

    // BarChart borrows the bars it draws, so build every group's bars
    // before handing them over.
    let built: Vec<(Line, Vec<Bar>)> = groups
        .iter()
        .map(|(label, values)| {
            let bars = values
                .iter()
                .zip(series.iter())
                .map(|(value, (_, color))| {
                    let style = Style::default().fg(*color);
                    Bar::default()
                        .value((value * scale).max(0.0) as u64)
                        .text_value(format!("{:.1}", value))
                        .style(style)
                        .value_style(style.reversed())
                })
                .collect();
            (Line::from(label.clone()), bars)
        })
        .collect();

    for (label, bars) in &built {
        chart = chart.data(BarGroup::default().label(label.clone()).bars(bars));
    }

    frame.render_widget(chart, area);
}

/// Render a share breakdown as horizontal block-character bars, one line
/// per entry.
pub fn render_composition(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[(String, f64)],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title.to_uppercase()));
    let inner_width = area.width.saturating_sub(2) as usize;

    // Longest label defines the gutter, bars fill the rest.
    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let bar_space = inner_width.saturating_sub(label_width + 10);

    let mut lines = vec![Line::from("")];
    for (idx, (label, share)) in entries.iter().enumerate() {
        let color = SECTOR_COLORS[idx % SECTOR_COLORS.len()];
        let filled = ((share / 100.0) * bar_space as f64).round() as usize;
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<width$} ", label, width = label_width)),
            Span::styled("█".repeat(filled.min(bar_space)), Style::default().fg(color)),
            Span::raw(format!(" {:>5.1}%", share)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render a multi-series line chart over period indices.
pub fn render_line_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &[(&str, Color, Vec<(f64, f64)>)],
    x_labels: &[&str],
    y_max: f64,
) {
    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(name, color, points)| {
            Dataset::default()
                .name(*name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let x_max = x_labels.len().saturating_sub(1) as f64;
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title.to_uppercase())),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_labels.iter().map(|l| Line::from(*l)))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels([
                    Line::from("0"),
                    Line::from(format!("{:.0}", y_max / 2.0)),
                    Line::from(format!("{:.0}", y_max)),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

fn bar_width_for(area: Rect, bars: usize) -> u16 {
    let usable = area.width.saturating_sub(2);
    ((usable / bars as u16).saturating_sub(1)).clamp(3, 12)
}
