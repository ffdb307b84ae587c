use clap::Parser;
use iotab::{App, AppConfig, init_logging};
use iotab::state::Route;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iotab")]
#[command(about = "A terminal workbench for guided input-output economic analysis")]
struct Args {
    /// Path to the data directory (default: ~/.iotab/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Start route, e.g. "/upload" or "/analysis-shock"
    #[arg(short, long)]
    route: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".iotab")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = AppConfig::load_or_default(&data_dir);
    let route = args
        .route
        .as_deref()
        .or(config.start_route.as_deref())
        .map(Route::parse)
        .unwrap_or(Route::Home);

    let mut app = App::new(data_dir, config, route);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
