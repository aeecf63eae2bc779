//! Main entry point for the listening history dashboard.

use replay_common::init_logging;
use replay_config::ConfigLoader;
use replay_dashboard::{AppResult, DashboardApp};
use tracing::{error, info};

fn main() -> AppResult<()> {
    let config = ConfigLoader::load()?;

    init_logging(replay_common::LoggingConfig {
        level: config.logging.level.clone(),
        file_path: config.logging.file.clone(),
        ..Default::default()
    })?;

    info!("Starting listening history dashboard");

    let app = DashboardApp::new(config);
    if let Err(e) = app.run() {
        error!("Dashboard run failed: {}", e);
        return Err(e);
    }

    Ok(())
}
