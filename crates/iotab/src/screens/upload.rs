use std::time::Instant;

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::text::{calculate_scroll, render_cursor_line};
use crossterm::event::{KeyCode, KeyEvent};
use iotab_core::upload::{MAX_FILE_BYTES, SUPPORTED_EXTENSIONS};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

pub struct UploadScreen;

impl UploadScreen {
    pub fn new() -> Self {
        Self
    }

    fn handle_editing_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let input = &mut state.upload_screen.path_input;
        match key.code {
            KeyCode::Enter => {
                let value = input.value.clone();
                input.stop_editing();
                if value.trim().is_empty() {
                    return EventResult::Handled;
                }
                match state.upload.select(value.trim()) {
                    Ok(()) => {
                        state.clear_toast();
                        tracing::info!("file selected: {}", value.trim());
                    }
                    Err(e) => state.toast_error(e.to_string()),
                }
                EventResult::Handled
            }
            KeyCode::Esc => {
                input.stop_editing();
                EventResult::Handled
            }
            KeyCode::Backspace => {
                input.backspace();
                EventResult::Handled
            }
            KeyCode::Delete => {
                input.delete();
                EventResult::Handled
            }
            KeyCode::Left => {
                input.move_cursor_left();
                EventResult::Handled
            }
            KeyCode::Right => {
                input.move_cursor_right();
                EventResult::Handled
            }
            KeyCode::Home => {
                input.move_cursor_home();
                EventResult::Handled
            }
            KeyCode::End => {
                input.move_cursor_end();
                EventResult::Handled
            }
            KeyCode::Char(c) => {
                input.insert_char(c);
                EventResult::Handled
            }
            _ => EventResult::Handled,
        }
    }

    fn start_upload(&mut self, state: &mut AppState) {
        let delay = state.config.upload_delay();
        match state.upload.start(Instant::now(), delay) {
            Ok(()) => {
                state.clear_toast();
                tracing::info!("simulated upload started (delay={:?})", delay);
            }
            Err(e) => state.toast_error(e.to_string()),
        }
    }

    fn render_upload_panel(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" UPLOAD FILE ");
        let inner_width = area.width.saturating_sub(4) as usize;

        let mut lines = vec![
            Line::from("Pilih file CSV atau Excel yang berisi"),
            Line::from("tabel input-output"),
            Line::from(""),
            Line::from(Span::styled("Path File:", Style::default().add_modifier(Modifier::BOLD))),
        ];

        let input = &state.upload_screen.path_input;
        if input.editing {
            let view = calculate_scroll(&input.value, input.cursor_pos, inner_width);
            lines.push(render_cursor_line(&view.display_value, view.cursor_pos, " "));
        } else if input.value.is_empty() {
            lines.push(Line::from(Span::styled(
                " (tekan 'e' untuk mengisi path)",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.push(Line::from(format!(" {}", input.value)));
        }

        lines.push(Line::from(""));

        if let Some(selection) = state.upload.selected() {
            lines.push(Line::from(vec![
                Span::styled("File: ", Style::default().fg(Color::Blue)),
                Span::styled(selection.file_name(), Style::default().fg(Color::Blue)),
            ]));
            lines.push(Line::from(""));
        }

        if state.upload.is_uploading() {
            lines.push(Line::from(Span::styled(
                "Mengupload...",
                Style::default().fg(Color::Yellow),
            )));
        } else if state.upload.is_complete() {
            lines.push(Line::from(Span::styled(
                "File berhasil diunggah!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[n] Lanjut ke Analisis Awal",
                Style::default().fg(Color::Green),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "[u] Upload File",
                Style::default().fg(Color::Cyan),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_requirements(&self, frame: &mut Frame, area: Rect) {
        let extensions = SUPPORTED_EXTENSIONS
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(", ");

        let lines = vec![
            Line::from(Span::styled(
                "Format File",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("CSV atau Excel ({})", extensions)),
            Line::from(""),
            Line::from(Span::styled(
                "Struktur Data",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("• Baris pertama berisi nama sektor"),
            Line::from("• Kolom pertama berisi nama sektor"),
            Line::from("• Data numerik untuk koefisien teknis"),
            Line::from("• Tidak ada sel kosong dalam tabel utama"),
            Line::from(""),
            Line::from(Span::styled(
                "Ukuran File",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Maksimal {} MB", MAX_FILE_BYTES / (1024 * 1024))),
            Line::from(""),
            Line::from(Span::styled(
                "Tips: Pastikan tabel input-output sudah dalam format yang benar \
                 sebelum upload untuk hasil analisis yang optimal.",
                Style::default().fg(Color::Yellow),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" PERSYARATAN FILE "));
        frame.render_widget(paragraph, area);
    }

    fn render_example(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("Contoh tampilan tabel input-output yang benar:"),
            Line::from(""),
            Line::from(Span::styled(
                "          Pertanian  Industri  Jasa    Perdagangan",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Pertanian    0.12      0.08    0.05      0.03",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Industri     0.21      0.18    0.14      0.09",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Jasa         0.07      0.11    0.09      0.06",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Perdagangan  0.04      0.06    0.05      0.04",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from("• Header baris dan kolom berisi nama sektor"),
            Line::from("• Nilai koefisien teknis di interseksi"),
            Line::from("• Format numerik yang konsisten"),
            Line::from(""),
            Line::from(Span::styled(
                "Catatan: Pastikan struktur tabel sesuai dengan contoh di atas \
                 untuk hasil analisis yang akurat.",
                Style::default().fg(Color::Blue),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" CONTOH FORMAT TABEL "));
        frame.render_widget(paragraph, area);
    }
}

impl Component for UploadScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.upload_screen.path_input.editing {
            return self.handle_editing_key(key, state);
        }

        match key.code {
            KeyCode::Char('e') => {
                state.upload_screen.path_input.start_editing();
                EventResult::Handled
            }
            KeyCode::Char('u') => {
                self.start_upload(state);
                EventResult::Handled
            }
            KeyCode::Char('n') => {
                // The continue affordance only exists once the upload finished
                if state.upload.is_complete() {
                    if let Some(next) = state.route.next_step() {
                        state.navigate(next);
                    }
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        self.render_upload_panel(frame, chunks[0], state);
        self.render_requirements(frame, chunks[1]);
        self.render_example(frame, chunks[2]);
    }
}

impl Screen for UploadScreen {
    fn title(&self) -> &str {
        "Upload Tabel Input-Output"
    }
}
