use crate::components::{Component, EventResult};
use crate::state::{AppState, Route};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Screen;

struct MenuItem {
    title: &'static str,
    description: &'static str,
    route: Route,
}

const MENU: [MenuItem; 5] = [
    MenuItem {
        title: "Upload Tabel",
        description: "Unggah file tabel input-output untuk analisis",
        route: Route::Upload,
    },
    MenuItem {
        title: "Analisis & Visualisasi Awal",
        description: "Lihat preview data dan statistik dasar",
        route: Route::AnalysisInitial,
    },
    MenuItem {
        title: "Analisis Multiplier",
        description: "Hitung efek multiplier ekonomi",
        route: Route::AnalysisMultiplier,
    },
    MenuItem {
        title: "Analisis Shock",
        description: "Simulasi dampak perubahan ekonomi",
        route: Route::AnalysisShock,
    },
    MenuItem {
        title: "Analisis Akhir",
        description: "Ringkasan dan laporan komprehensif",
        route: Route::AnalysisFinal,
    },
];

pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Input-Output Analysis",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("Platform Analisis Tabel Input-Output Komprehensif"),
            Line::from(""),
            Line::from(
                "Lakukan analisis mendalam terhadap tabel input-output dengan tools \
                 yang lengkap dan visualisasi yang menarik",
            ),
        ];
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = MENU
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let selected = idx == state.home_state.selected;
                let marker = if selected { "> " } else { "  " };
                let title_style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(format!("{}. {}", idx + 1, item.title), title_style),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", item.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" MULAI ANALISIS "),
        );
        frame.render_widget(list, area);
    }

    fn render_features(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "FITUR UNGGULAN",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  Upload Mudah: dukung format file CSV dan Excel"),
            Line::from("  Visualisasi Interaktif: grafik dan chart yang mudah dipahami"),
            Line::from("  Analisis Mendalam: perhitungan multiplier dan analisis shock ekonomi"),
        ];
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}

impl Component for HomeScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if state.home_state.selected + 1 < MENU.len() {
                    state.home_state.selected += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if state.home_state.selected > 0 {
                    state.home_state.selected -= 1;
                }
                EventResult::Handled
            }
            KeyCode::Enter => {
                let route = MENU[state.home_state.selected].route;
                state.navigate(route);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),  // Hero
                Constraint::Min(0),     // Menu
                Constraint::Length(7),  // Features
            ])
            .split(area);

        self.render_hero(frame, chunks[0]);
        self.render_menu(frame, chunks[1], state);
        self.render_features(frame, chunks[2]);
    }
}

impl Screen for HomeScreen {
    fn title(&self) -> &str {
        "Beranda"
    }
}
