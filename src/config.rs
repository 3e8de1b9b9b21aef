use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::BotError;

/// Region of the frame cropped out before squad-selection detection,
/// in 1440p coordinates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRegion {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Name of the streaming window being captured, e.g. "Moonlight".
    pub app_name: String,
    /// Delay between capture loop iterations. Throttles window focus and
    /// capture rate; useful for debugging.
    pub capture_delay_ms: u64,
    /// Delay between inference loop iterations.
    pub infer_delay_ms: u64,
    /// Delay between act loop iterations.
    pub act_delay_ms: u64,
    /// Minimum top-class confidence before a menu classification is trusted.
    pub classifier_confidence_threshold: f32,
    /// Minimum confidence before a match detection qualifies.
    pub detector_confidence_threshold: f32,
    /// Number of consecutive equal classifications before a mode change commits.
    pub mode_debounce_frames: usize,
    /// Frame dimensions the squad-selection detector was trained against.
    pub expected_frame_size: (u32, u32),
    /// Frame dimensions that are upscaled to `expected_frame_size` instead
    /// of being rejected.
    pub upscale_frame_size: (u32, u32),
    pub squad_selection_crop: CropRegion,
    /// The six fixed screen points probed against each detection box,
    /// in cropped-region coordinates. Laid out top-to-bottom:
    /// [0] [1] / [2] [3] / [4] [5].
    pub squad_selection_points: Vec<(u32, u32)>,
    pub save_screenshots: bool,
    pub screenshots_dir: PathBuf,
    /// When set, the capture loop serves this image instead of live capture.
    pub static_image_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            app_name: "Moonlight".to_string(),
            capture_delay_ms: 1_000,
            infer_delay_ms: 0,
            act_delay_ms: 50,
            classifier_confidence_threshold: 0.5,
            detector_confidence_threshold: 0.35,
            mode_debounce_frames: 3,
            expected_frame_size: (2560, 1440),
            upscale_frame_size: (1280, 720),
            squad_selection_crop: CropRegion {
                left: 140,
                top: 363,
                right: 430,
                bottom: 908,
            },
            squad_selection_points: vec![
                (73, 130),
                (220, 130),
                (73, 330),
                (220, 330),
                (73, 470),
                (220, 470),
            ],
            save_screenshots: false,
            screenshots_dir: PathBuf::from("./screenshots"),
            static_image_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Configuration {
    /// Loads configuration from `pitchbot.toml` (optional) layered with
    /// `PITCHBOT_*` environment variables. Failure here is fatal.
    pub fn load() -> Result<Self, BotError> {
        let source = config::Config::builder()
            .add_source(config::File::with_name("pitchbot").required(false))
            .add_source(config::Environment::with_prefix("PITCHBOT"))
            .build()?;
        Ok(source.try_deserialize()?)
    }

    pub fn capture_delay(&self) -> Duration {
        Duration::from_millis(self.capture_delay_ms)
    }

    pub fn infer_delay(&self) -> Duration {
        Duration::from_millis(self.infer_delay_ms)
    }

    pub fn act_delay(&self) -> Duration {
        Duration::from_millis(self.act_delay_ms)
    }
}
