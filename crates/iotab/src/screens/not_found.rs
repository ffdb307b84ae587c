use crate::components::{Component, EventResult};
use crate::state::{AppState, Route};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Screen;

pub struct NotFoundScreen;

impl NotFoundScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Component for NotFoundScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('h') | KeyCode::Enter => {
                state.navigate(Route::Home);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "404",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Oops! Halaman tidak ditemukan"),
            Line::from(""),
            Line::from(Span::styled(
                "[h] Kembali ke Beranda",
                Style::default().fg(Color::Cyan),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .centered()
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}

impl Screen for NotFoundScreen {
    fn title(&self) -> &str {
        "Halaman Tidak Ditemukan"
    }
}
