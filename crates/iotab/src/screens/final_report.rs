use crate::components::charts::render_grouped_bar_chart;
use crate::components::{Component, EventResult};
use crate::state::{AppState, Route};
use crossterm::event::{KeyCode, KeyEvent};
use iotab_core::dataset;
use iotab_core::report::{self, FindingStatus, Report};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

pub struct FinalScreen;

impl FinalScreen {
    pub fn new() -> Self {
        Self
    }

    fn export_report(&self, state: &mut AppState) {
        let today = jiff::Zoned::now().date();
        let report = Report::assemble(today);
        let dir = state.report_dir();
        match report.write_json(&dir) {
            Ok(path) => {
                tracing::info!("report exported to {}", path.display());
                state.toast_info(format!("Laporan Diunduh: {}", path.display()));
            }
            Err(e) => {
                tracing::error!("report export failed: {}", e);
                state.toast_error(format!("Gagal menyimpan laporan: {}", e));
            }
        }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let stats = dataset::summary_stats();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        for (stat, chunk) in stats.iter().zip(chunks.iter()) {
            let change_color = if stat.change.starts_with('-') {
                Color::Red
            } else {
                Color::Green
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        stat.value,
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(stat.change, Style::default().fg(change_color)),
                ]),
                Line::from(Span::styled(stat.metric, Style::default().fg(Color::DarkGray))),
            ];
            let card = Paragraph::new(lines)
                .centered()
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, *chunk);
        }
    }

    fn findings_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![section_header("TEMUAN UTAMA")];
        for finding in report::key_findings() {
            let (badge, color) = match finding.status {
                FindingStatus::High => ("TINGGI", Color::Blue),
                FindingStatus::Medium => ("SEDANG", Color::Green),
                FindingStatus::Warning => ("PERINGATAN", Color::Yellow),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", badge), Style::default().fg(color)),
                Span::styled(finding.title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(format!("  {}", finding.description)));
            lines.push(Line::from(""));
        }
        lines
    }

    fn recommendations_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![section_header("REKOMENDASI KEBIJAKAN")];
        for rec in report::policy_recommendations() {
            let color = match rec.priority {
                "Tinggi" => Color::Red,
                _ => Color::Yellow,
            };
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", rec.priority), Style::default().fg(color)),
                Span::raw(rec.recommendation),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  Dampak: {}  •  Kesulitan: {}", rec.impact, rec.difficulty),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        lines
    }

    fn conclusion_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![section_header("KESIMPULAN")];
        for paragraph in report::conclusion() {
            lines.push(Line::from(paragraph));
            lines.push(Line::from(""));
        }
        lines
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = self.findings_lines();
        lines.extend(self.recommendations_lines());
        lines.extend(self.conclusion_lines());
        lines.push(Line::from(Span::styled(
            "[d] unduh laporan JSON   [s] salin link   [b] kembali ke beranda",
            Style::default().fg(Color::Cyan),
        )));

        let offset = state.final_state.scroll_offset.min(lines.len().saturating_sub(1));
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset as u16, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" LAPORAN ANALISIS INPUT-OUTPUT [j/k] "),
            );
        frame.render_widget(paragraph, area);
    }

    fn render_performance(&self, frame: &mut Frame, area: Rect) {
        let records = dataset::performance_records();
        let groups: Vec<(String, Vec<f64>)> = records
            .iter()
            .map(|r| (r.sector.to_string(), vec![r.multiplier, r.linkage, r.resilience]))
            .collect();

        render_grouped_bar_chart(
            frame,
            area,
            "Perbandingan Kinerja Sektor",
            &[
                ("Multiplier", Color::Blue),
                ("Linkage", Color::Green),
                ("Resilience", Color::Magenta),
            ],
            &groups,
            10.0,
        );
    }
}

fn section_header(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

impl Component for FinalScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.final_state.scroll_offset = state.final_state.scroll_offset.saturating_add(1);
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.final_state.scroll_offset = state.final_state.scroll_offset.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Char('d') => {
                self.export_report(state);
                EventResult::Handled
            }
            KeyCode::Char('s') => {
                state.toast_info("Link laporan telah disalin ke clipboard");
                EventResult::Handled
            }
            KeyCode::Char('b') => {
                state.navigate(Route::Home);
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
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Percentage(30),
            ])
            .split(area);

        self.render_summary(frame, rows[0]);
        self.render_body(frame, rows[1], state);
        self.render_performance(frame, rows[2]);
    }
}

impl Screen for FinalScreen {
    fn title(&self) -> &str {
        "Laporan Akhir"
    }
}
