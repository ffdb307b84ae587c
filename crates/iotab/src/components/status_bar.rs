use super::{Component, EventResult};
use crate::state::{AppState, Route};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Bottom bar: shows the active toast, otherwise per-screen key help.
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        if state.upload_screen.path_input.editing {
            return "ketik path file | Enter: pilih | Esc: batal";
        }

        match state.route {
            Route::Home => "j/k: pilih | Enter: buka | 1-5: langkah | q: keluar",
            Route::Upload => {
                "e: isi path | u: upload | n: lanjut (setelah upload) | h: beranda | q: keluar"
            }
            Route::AnalysisInitial => {
                "d/i/t: urutkan kolom | x: reset urutan | o/c: perbesar grafik | n/p: langkah | q: keluar"
            }
            Route::AnalysisMultiplier => {
                "s: sektor | m: jenis multiplier | n/p: langkah | q: keluar"
            }
            Route::AnalysisShock => {
                "s: sektor | t: jenis shock | \u{2190}/\u{2192}: besaran | [/]: horison | r: jalankan | n/p: langkah"
            }
            Route::AnalysisFinal => {
                "j/k: gulir | d: unduh laporan | s: bagikan | b: analisis baru | p: langkah sebelumnya"
            }
            Route::NotFound => "h: kembali ke beranda | q: keluar",
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(toast) = &state.toast {
            let (tag, color) = if toast.is_error {
                ("Error: ", Color::Red)
            } else {
                ("", Color::Green)
            };
            Line::from(vec![
                Span::styled(tag, Style::default().fg(color)),
                Span::styled(toast.message.clone(), Style::default().fg(color)),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
