use crate::components::charts::{render_bar_chart, render_composition, BarSpec, SECTOR_COLORS};
use crate::components::{Component, EventResult};
use crate::state::{AppState, ChartKind};
use crate::util::format::{format_compact, format_ratio, format_thousands};
use crossterm::event::{KeyCode, KeyEvent};
use iotab_core::dataset::{
    self, AVG_MULTIPLIER, LINKAGE_INDEX, TOTAL_OUTPUT_LABEL, TOTAL_SECTORS,
};
use iotab_core::sort::MultiplierColumn;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Screen;

pub struct InitialScreen;

impl InitialScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_stat_cards(&self, frame: &mut Frame, area: Rect) {
        let cards: [(&str, String, Color); 4] = [
            ("Total Sektor", TOTAL_SECTORS.to_string(), Color::Blue),
            ("Total Output", TOTAL_OUTPUT_LABEL.to_string(), Color::Green),
            ("Rata-rata Multiplier", format_ratio(AVG_MULTIPLIER), Color::Magenta),
            ("Keterkaitan Ekonomi", format_ratio(LINKAGE_INDEX), Color::Yellow),
        ];

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        for ((label, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    value,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            ];
            let card = Paragraph::new(lines)
                .centered()
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, *chunk);
        }
    }

    fn render_charts(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let outputs = dataset::sector_outputs();
        let bars: Vec<BarSpec> = outputs
            .iter()
            .enumerate()
            .map(|(idx, o)| BarSpec {
                label: o.sector.to_string(),
                value: o.output,
                text: format_compact(o.output),
                color: SECTOR_COLORS[idx % SECTOR_COLORS.len()],
            })
            .collect();
        render_bar_chart(frame, chunks[0], "Output per Sektor [o]", &bars, 0.001);

        let shares: Vec<(String, f64)> = outputs
            .iter()
            .map(|o| (o.sector.to_string(), o.share))
            .collect();
        render_composition(frame, chunks[1], "Komposisi Ekonomi [c]", &shares);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let sort = &state.initial_state.sort;
        let header_cell = |name: &str, key: MultiplierColumn, hotkey: &str| -> Span<'static> {
            if sort.is_active(key) {
                Span::styled(
                    format!("{} {} [{}]", name, sort.direction.arrow(), hotkey),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!("{} [{}]", name, hotkey),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            }
        };

        // Column headers carry their sort hotkeys and the active arrow.
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{:<14}", "Sektor"), Style::default().add_modifier(Modifier::BOLD)),
            header_cell("Direct", MultiplierColumn::Direct, "d"),
            Span::raw("   "),
            header_cell("Indirect", MultiplierColumn::Indirect, "i"),
            Span::raw("   "),
            header_cell("Total", MultiplierColumn::Total, "t"),
        ])];
        lines.push(Line::from(""));

        for record in sort.apply(&dataset::multiplier_effects()) {
            lines.push(Line::from(format!(
                "{:<14}{:<13}{:<15}{:<10}",
                record.sector,
                format_ratio(record.direct),
                format_ratio(record.indirect),
                format_ratio(record.total),
            )));
        }

        lines.push(Line::from(""));
        let hint = if sort.key.is_some() {
            "Urut aktif. [x] hapus urutan"
        } else {
            "[d/i/t] urutkan kolom"
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));

        let outputs = dataset::sector_outputs();
        let total: f64 = outputs.iter().map(|o| o.output).sum();
        lines.push(Line::from(Span::styled(
            format!("Total output perekonomian: {}", format_thousands(total)),
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" EFEK MULTIPLIER PER SEKTOR "),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Component for InitialScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('d') => {
                state.initial_state.sort.toggle(MultiplierColumn::Direct);
                EventResult::Handled
            }
            KeyCode::Char('i') => {
                state.initial_state.sort.toggle(MultiplierColumn::Indirect);
                EventResult::Handled
            }
            KeyCode::Char('t') => {
                state.initial_state.sort.toggle(MultiplierColumn::Total);
                EventResult::Handled
            }
            KeyCode::Char('x') => {
                state.initial_state.sort.clear();
                EventResult::Handled
            }
            KeyCode::Char('o') => {
                state.modal.open(ChartKind::OutputPerSektor);
                EventResult::Handled
            }
            KeyCode::Char('c') => {
                state.modal.open(ChartKind::KomposisiEkonomi);
                EventResult::Handled
            }
            KeyCode::Char('n') => {
                if let Some(next) = state.route.next_step() {
                    state.navigate(next);
                }
                EventResult::Handled
            }
            KeyCode::Char('p') => {
                if let Some(prev) = state.route.prev_step() {
                    state.navigate(prev);
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Percentage(50),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_stat_cards(frame, chunks[0]);
        self.render_charts(frame, chunks[1]);
        self.render_table(frame, chunks[2], state);
    }
}

impl Screen for InitialScreen {
    fn title(&self) -> &str {
        "Analisis Awal"
    }
}
