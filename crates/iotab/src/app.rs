use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, step_bar::StepBar};
use crate::config::AppConfig;
use crate::modals::{handle_modal_key, render_modal};
use crate::screens::{
    final_report::FinalScreen, home::HomeScreen, initial::InitialScreen,
    multiplier::MultiplierScreen, not_found::NotFoundScreen, shock::ShockScreen,
    upload::UploadScreen,
};
use crate::state::{AppState, Route};

/// How often the main loop wakes up to advance the upload timer.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    step_bar: StepBar,
    status_bar: StatusBar,
    home_screen: HomeScreen,
    upload_screen: UploadScreen,
    initial_screen: InitialScreen,
    multiplier_screen: MultiplierScreen,
    shock_screen: ShockScreen,
    final_screen: FinalScreen,
    not_found_screen: NotFoundScreen,
}

impl App {
    pub fn new(data_dir: PathBuf, config: AppConfig, route: Route) -> Self {
        Self {
            state: AppState::new(data_dir, config, route),
            step_bar: StepBar::new(),
            status_bar: StatusBar::new(),
            home_screen: HomeScreen::new(),
            upload_screen: UploadScreen::new(),
            initial_screen: InitialScreen::new(),
            multiplier_screen: MultiplierScreen::new(),
            shock_screen: ShockScreen::new(),
            final_screen: FinalScreen::new(),
            not_found_screen: NotFoundScreen::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    /// Advance time-based state between input events.
    fn tick(&mut self) {
        if self.state.upload.poll(Instant::now()) {
            tracing::info!("simulated upload completed");
            self.state
                .toast_info("File tabel input-output telah berhasil diunggah");
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: step bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(frame.area());

        self.step_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Modal overlay (if open)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.route {
            Route::Home => self.home_screen.render(frame, area, &self.state),
            Route::Upload => self.upload_screen.render(frame, area, &self.state),
            Route::AnalysisInitial => self.initial_screen.render(frame, area, &self.state),
            Route::AnalysisMultiplier => self.multiplier_screen.render(frame, area, &self.state),
            Route::AnalysisShock => self.shock_screen.render(frame, area, &self.state),
            Route::AnalysisFinal => self.final_screen.render(frame, area, &self.state),
            Route::NotFound => self.not_found_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        // Poll with a timeout so the upload timer ticks without input.
        if !event::poll(TICK_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if open
        if self.state.modal.is_open() {
            handle_modal_key(key_event, &mut self.state);
            return;
        }

        // The upload path field consumes raw characters while editing.
        let editing = self.state.route == Route::Upload
            && self.state.upload_screen.path_input.editing;

        // Global key bindings
        if !editing {
            match key_event.code {
                KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                    self.state.exit = true;
                    return;
                }
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.exit = true;
                    return;
                }
                KeyCode::Esc => {
                    self.state.clear_toast();
                    return;
                }
                _ => {}
            }

            // Try the step bar first
            if self.step_bar.handle_key(key_event, &mut self.state) != EventResult::NotHandled {
                return;
            }
        }

        // Then the active screen
        let result = match self.state.route {
            Route::Home => self.home_screen.handle_key(key_event, &mut self.state),
            Route::Upload => self.upload_screen.handle_key(key_event, &mut self.state),
            Route::AnalysisInitial => self.initial_screen.handle_key(key_event, &mut self.state),
            Route::AnalysisMultiplier => {
                self.multiplier_screen.handle_key(key_event, &mut self.state)
            }
            Route::AnalysisShock => self.shock_screen.handle_key(key_event, &mut self.state),
            Route::AnalysisFinal => self.final_screen.handle_key(key_event, &mut self.state),
            Route::NotFound => self.not_found_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ChartKind;
    use crossterm::event::KeyModifiers;

    fn app_at(route: Route) -> App {
        App::new(PathBuf::from("/tmp/iotab-test"), AppConfig::default(), route)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_exits() {
        let mut app = app_at(Route::Home);
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.state.exit);
    }

    #[test]
    fn test_step_bar_navigates_between_screens() {
        let mut app = app_at(Route::Home);
        app.handle_key_event(press(KeyCode::Char('2')));
        assert_eq!(app.state.route, Route::AnalysisInitial);
        app.handle_key_event(press(KeyCode::Char('h')));
        assert_eq!(app.state.route, Route::Home);
    }

    #[test]
    fn test_modal_swallows_navigation_keys() {
        let mut app = app_at(Route::AnalysisInitial);
        app.handle_key_event(press(KeyCode::Char('o')));
        assert!(app.state.modal.is_open());

        // '2' would navigate when no modal is open
        app.handle_key_event(press(KeyCode::Char('2')));
        assert_eq!(app.state.route, Route::AnalysisInitial);
        assert!(app.state.modal.is_open());

        app.handle_key_event(press(KeyCode::Esc));
        assert!(!app.state.modal.is_open());
    }

    #[test]
    fn test_modal_keys_swap_chart() {
        let mut app = app_at(Route::AnalysisInitial);
        app.handle_key_event(press(KeyCode::Char('c')));
        assert_eq!(app.state.modal.kind(), Some(ChartKind::KomposisiEkonomi));
        app.handle_key_event(press(KeyCode::Char('o')));
        assert_eq!(app.state.modal.kind(), Some(ChartKind::OutputPerSektor));
    }

    #[test]
    fn test_editing_path_bypasses_global_keys() {
        let mut app = app_at(Route::Upload);
        app.handle_key_event(press(KeyCode::Char('e')));
        assert!(app.state.upload_screen.path_input.editing);

        // 'q' is a literal character while editing, not quit
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(!app.state.exit);
        assert_eq!(app.state.upload_screen.path_input.value, "q");

        app.handle_key_event(press(KeyCode::Esc));
        assert!(!app.state.upload_screen.path_input.editing);
    }

    #[test]
    fn test_upload_completion_toasts_on_tick() {
        let mut app = app_at(Route::Upload);
        app.state.upload.select("tabel.csv").unwrap();
        app.state
            .upload
            .start(Instant::now() - Duration::from_secs(5), Duration::from_secs(2))
            .unwrap();

        app.tick();

        assert!(app.state.upload.is_complete());
        let toast = app.state.toast.as_ref().unwrap();
        assert!(!toast.is_error);
        assert!(toast.message.contains("berhasil diunggah"));
    }
}
