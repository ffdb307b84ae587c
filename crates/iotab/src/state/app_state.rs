use std::path::PathBuf;

use iotab_core::upload::UploadState;

use crate::config::AppConfig;

use super::{
    ChartModal, FinalState, HomeState, InitialState, MultiplierState, Route, ShockState,
    UploadScreenState,
};

/// Transient status message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
}

/// Shared application state: the active route, per-screen view state, the
/// chart modal, the upload flow, and ambient configuration.
///
/// No analysis data flows between screens; each holds only its own
/// presentation state, recreated on navigation.
#[derive(Debug)]
pub struct AppState {
    pub route: Route,
    pub exit: bool,
    pub toast: Option<Toast>,
    pub modal: ChartModal,

    pub upload: UploadState,
    pub upload_screen: UploadScreenState,

    pub home_state: HomeState,
    pub initial_state: InitialState,
    pub multiplier_state: MultiplierState,
    pub shock_state: ShockState,
    pub final_state: FinalState,

    pub config: AppConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(data_dir: PathBuf, config: AppConfig, route: Route) -> Self {
        Self {
            route,
            exit: false,
            toast: None,
            modal: ChartModal::default(),
            upload: UploadState::default(),
            upload_screen: UploadScreenState::default(),
            home_state: HomeState::default(),
            initial_state: InitialState::default(),
            multiplier_state: MultiplierState::default(),
            shock_state: ShockState::default(),
            final_state: FinalState::default(),
            config,
            data_dir,
        }
    }

    /// Switch views. The departing view's state is torn down: any in-flight
    /// upload timer is cancelled, the chart modal closes, and the screen's
    /// local state returns to its defaults.
    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }

        self.modal.close();
        match self.route {
            Route::Home => self.home_state = HomeState::default(),
            Route::Upload => {
                self.upload.cancel();
                self.upload = UploadState::default();
                self.upload_screen = UploadScreenState::default();
            }
            Route::AnalysisInitial => self.initial_state = InitialState::default(),
            Route::AnalysisMultiplier => self.multiplier_state = MultiplierState::default(),
            Route::AnalysisShock => self.shock_state = ShockState::default(),
            Route::AnalysisFinal => self.final_state = FinalState::default(),
            Route::NotFound => {}
        }

        tracing::debug!("navigate {} -> {}", self.route.path(), route.path());
        self.route = route;
    }

    pub fn toast_info(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error: false,
        });
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error: true,
        });
    }

    pub fn clear_toast(&mut self) {
        self.toast = None;
    }

    /// Directory where exported reports are written.
    pub fn report_dir(&self) -> PathBuf {
        self.config.report_dir(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::state::ChartKind;
    use iotab_core::sort::MultiplierColumn;

    fn state_at(route: Route) -> AppState {
        AppState::new(PathBuf::from("/tmp/iotab-test"), AppConfig::default(), route)
    }

    #[test]
    fn test_leaving_upload_cancels_the_task() {
        let mut state = state_at(Route::Upload);
        let now = Instant::now();
        state.upload.select("tabel.csv").unwrap();
        state.upload.start(now, Duration::from_millis(2000)).unwrap();

        state.navigate(Route::AnalysisInitial);

        assert!(!state.upload.is_uploading());
        assert!(!state.upload.poll(now + Duration::from_secs(10)));
        assert!(!state.upload.is_complete());
    }

    #[test]
    fn test_navigation_resets_view_state() {
        let mut state = state_at(Route::AnalysisInitial);
        state.initial_state.sort.toggle(MultiplierColumn::Total);
        state.modal.open(ChartKind::OutputPerSektor);

        state.navigate(Route::AnalysisMultiplier);

        assert_eq!(state.modal, ChartModal::Closed);
        assert_eq!(state.initial_state.sort.key, None);
    }

    #[test]
    fn test_navigate_to_same_route_keeps_state() {
        let mut state = state_at(Route::AnalysisShock);
        state.shock_state.has_run = true;

        state.navigate(Route::AnalysisShock);
        assert!(state.shock_state.has_run);
    }
}
