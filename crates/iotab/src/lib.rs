//! Terminal frontend for the iotab input-output analysis workbench.
//!
//! A guided five-step flow (upload, initial overview, multiplier analysis,
//! shock simulation, final report) rendered with ratatui. All analysis
//! figures are the sample datasets from `iotab_core`; the upload is
//! simulated and nothing is computed from the chosen file.

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;
