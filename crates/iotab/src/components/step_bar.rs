use super::{Component, EventResult};
use crate::state::{AppState, Route};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Navigation bar over the five analysis steps plus the home view.
pub struct StepBar;

impl StepBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StepBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // The path field on the upload screen needs raw characters.
        if state.upload_screen.path_input.editing {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char('h') | KeyCode::Char('0') => {
                state.navigate(Route::Home);
                EventResult::Handled
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                state.navigate(Route::STEPS[idx]);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut titles: Vec<Line> = vec![label(
            "[h] Beranda",
            state.route == Route::Home,
        )];
        titles.extend(Route::STEPS.iter().enumerate().map(|(idx, step)| {
            label(
                format!("[{}] {}", idx + 1, step.title()),
                *step == state.route,
            )
        }));

        // Selected index: home occupies slot 0, steps follow.
        let selected = match state.route.step_index() {
            Some(idx) => idx + 1,
            None => 0,
        };

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(selected)
            .style(Style::default())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}

fn label<'a>(content: impl Into<String>, active: bool) -> Line<'a> {
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(content.into(), style))
}
