use crate::components::charts::{render_grouped_bar_chart, render_line_chart, SECTOR_COLORS};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_percent, format_signed_percent};
use crossterm::event::{KeyCode, KeyEvent};
use iotab_core::dataset;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

pub struct ShockScreen;

impl ShockScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_params(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let params = &state.shock_state.params;
        let value_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("Sektor Terdampak [s]: ", Style::default().fg(Color::DarkGray)),
                Span::styled(params.sector_name(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Jenis Shock [t]: ", Style::default().fg(Color::DarkGray)),
                Span::styled(params.shock_type.label(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Besaran Shock [←/→]: ", Style::default().fg(Color::DarkGray)),
                Span::styled(format_signed_percent(params.magnitude), value_style),
            ]),
            Line::from(vec![
                Span::styled("Horizon Waktu [ [/] ]: ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} tahun", params.horizon), value_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "[r] Jalankan Simulasi",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PARAMETER SIMULASI "),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from("Atur parameter shock di panel kiri, lalu tekan"),
            Line::from("[r] untuk menjalankan simulasi propagasi shock."),
            Line::from(""),
            Line::from(Span::styled(
                "Hasil simulasi akan ditampilkan di sini.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines).centered().block(
            Block::default()
                .borders(Borders::ALL)
                .title(" HASIL SIMULASI "),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_propagation(&self, frame: &mut Frame, area: Rect) {
        let paths = dataset::shock_paths();
        let periods: Vec<&str> = paths.iter().map(|p| p.period).collect();
        let point = |values: Vec<f64>| -> Vec<(f64, f64)> {
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i as f64, v))
                .collect()
        };

        let series = [
            (
                "Pertanian",
                SECTOR_COLORS[0],
                point(paths.iter().map(|p| p.pertanian).collect()),
            ),
            (
                "Industri",
                SECTOR_COLORS[1],
                point(paths.iter().map(|p| p.industri).collect()),
            ),
            (
                "Jasa",
                SECTOR_COLORS[2],
                point(paths.iter().map(|p| p.jasa).collect()),
            ),
            (
                "Perdagangan",
                SECTOR_COLORS[3],
                point(paths.iter().map(|p| p.perdagangan).collect()),
            ),
        ];

        render_line_chart(frame, area, "Propagasi Dampak Shock", &series, &periods, 25.0);
    }

    fn render_cumulative(&self, frame: &mut Frame, area: Rect) {
        let impacts = dataset::cumulative_impacts();
        let groups: Vec<(String, Vec<f64>)> = impacts
            .iter()
            .map(|c| (c.period.to_string(), vec![c.direct, c.indirect]))
            .collect();

        render_grouped_bar_chart(
            frame,
            area,
            "Dampak Kumulatif",
            &[("Direct", Color::Blue), ("Indirect", Color::Green)],
            &groups,
            1.0,
        );
    }

    fn render_sectoral_table(&self, frame: &mut Frame, area: Rect) {
        let mut impacts = dataset::sectoral_impacts();
        impacts.sort_by(|a, b| b.total.total_cmp(&a.total));

        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "{:<9}{:<14}{:>8}{:>10}{:>8}",
                    "Ranking", "Sektor", "Direct", "Indirect", "Total"
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (idx, impact) in impacts.iter().enumerate() {
            lines.push(Line::from(format!(
                "{:<9}{:<14}{:>8}{:>10}{:>8}",
                idx + 1,
                impact.sector,
                format_percent(impact.direct),
                format_percent(impact.indirect),
                format_percent(impact.total),
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" DAMPAK SEKTORAL (TAHUN TERAKHIR) "),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_risk(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Risiko Tinggi: ", Style::default().fg(Color::Red)),
                Span::raw("Sektor Industri menyerap dampak terbesar (28.3%) dan "),
                Span::raw("menularkannya lewat keterkaitan ke belakang yang kuat."),
            ]),
            Line::from(vec![
                Span::styled("Risiko Menengah: ", Style::default().fg(Color::Yellow)),
                Span::raw("Sektor Jasa dan Perdagangan terdampak tidak langsung "),
                Span::raw("melalui penurunan permintaan antara."),
            ]),
            Line::from(vec![
                Span::styled("Relatif Aman: ", Style::default().fg(Color::Green)),
                Span::raw("Sektor Pertanian paling tahan (5.2%) berkat "),
                Span::raw("ketergantungan input antar sektor yang rendah."),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" PENILAIAN RISIKO "));
        frame.render_widget(paragraph, area);
    }
}

impl Component for ShockScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let shock = &mut state.shock_state;
        match key.code {
            KeyCode::Char('s') => {
                shock.params.cycle_sector();
                EventResult::Handled
            }
            KeyCode::Char('t') => {
                shock.params.shock_type.cycle();
                EventResult::Handled
            }
            KeyCode::Left => {
                shock.params.adjust_magnitude(-1);
                EventResult::Handled
            }
            KeyCode::Right => {
                shock.params.adjust_magnitude(1);
                EventResult::Handled
            }
            KeyCode::Char('[') => {
                shock.params.adjust_horizon(-1);
                EventResult::Handled
            }
            KeyCode::Char(']') => {
                shock.params.adjust_horizon(1);
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                shock.has_run = true;
                let message = format!(
                    "Simulasi Berhasil: Shock {} pada sektor {} telah disimulasikan",
                    format_signed_percent(shock.params.magnitude),
                    shock.params.sector_name(),
                );
                tracing::info!("shock simulation run: {:?}", shock.params);
                state.toast_info(message);
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
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(area);

        self.render_params(frame, columns[0], state);

        if !state.shock_state.has_run {
            self.render_placeholder(frame, columns[1]);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Min(8),
                Constraint::Length(5),
            ])
            .split(columns[1]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);
        self.render_propagation(frame, charts[0]);
        self.render_cumulative(frame, charts[1]);

        self.render_sectoral_table(frame, rows[1]);
        self.render_risk(frame, rows[2]);
    }
}

impl Screen for ShockScreen {
    fn title(&self) -> &str {
        "Simulasi Shock"
    }
}
