use backend::config::{create_cors, init_logger, load_environment, AppConfig};
use backend::{build_rocket, AppState};
use log::info;
use std::sync::Arc;

#[rocket::launch]
fn rocket() -> _ {
    load_environment();
    init_logger();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };

    let (youtube, cors) = match (config.youtube_client(), create_cors(&config.frontend_origin)) {
        (Ok(youtube), Ok(cors)) => (youtube, cors),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Startup failed: {e:#}");
            std::process::exit(1);
        }
    };
    info!(
        "Using YouTube API at {} (allowed origin {})",
        config.youtube_api_url, config.frontend_origin
    );

    build_rocket(AppState {
        youtube: Arc::new(youtube),
    })
    .attach(cors)
}
