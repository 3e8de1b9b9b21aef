use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pitchbot::error::BotError;
use pitchbot::io::{NullClassifier, NullDetector, PlaystationKeyboard, StaticImageSource};
use pitchbot::{Configuration, CoordinatorBuilder};

fn init_logging(configuration: &Configuration) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&configuration.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), BotError> {
    let configuration = Configuration::load()?;
    init_logging(&configuration);
    info!(app_name = %configuration.app_name, "starting pitchbot");

    let frame_source = match configuration.static_image_path.clone() {
        Some(path) => {
            info!(?path, "serving frames from a static image");
            Arc::new(StaticImageSource::new(path))
        }
        None => {
            return Err(BotError::Config(config::ConfigError::Message(
                "static_image_path is required until live window capture lands".to_string(),
            )));
        }
    };

    // TODO: wire the trained ONNX classifier and detector once exported;
    // with the null models the bot observes and logs but never infers state.
    warn!("no trained models configured, running with null classifier/detector");

    let coordinator = CoordinatorBuilder::new(configuration)
        .frame_source(frame_source)
        .input_driver(Arc::new(PlaystationKeyboard::new()?))
        .match_detector(Arc::new(NullDetector))
        .mode_classifier(Arc::new(NullClassifier))
        .menu_classifier(Arc::new(NullClassifier))
        .squad_detector(Arc::new(NullDetector))
        .build()?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| BotError::Pipeline(format!("failed to listen for ctrl-c: {e}")))?;
    info!("shutdown requested");
    coordinator.shutdown().await;
    Ok(())
}
