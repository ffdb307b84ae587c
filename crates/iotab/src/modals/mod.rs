mod chart;
mod helpers;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;

pub use helpers::{HelpText, ModalFrame, centered_rect, render_modal_frame};

use crate::state::{AppState, ChartKind};

/// Render the active modal as an overlay
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    if let Some(kind) = state.modal.kind() {
        chart::render_chart_modal(frame, kind);
    }
}

/// Handle key events while a modal is open. The modal swallows all keys;
/// returns true when the event was consumed.
pub fn handle_modal_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            state.modal.close();
        }
        // Re-opening with the other variant replaces the current one
        KeyCode::Char('o') => state.modal.open(ChartKind::OutputPerSektor),
        KeyCode::Char('c') => state.modal.open(ChartKind::KomposisiEkonomi),
        _ => {}
    }
    true
}
