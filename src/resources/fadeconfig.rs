//! Fade configuration resource.
//!
//! Holds the defaults applied to panels that do not set their own values, and
//! the frame pacing of the headless runner. Values are loaded from an INI
//! file; anything missing keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [fade]
//! speed = 1.0
//! start_visible = false
//!
//! [simulation]
//! fps = 60
//! time_scale = 1.0
//! max_frames = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_FADE_SPEED: f32 = 1.0;
const DEFAULT_START_VISIBLE: bool = false;
const DEFAULT_FPS: u32 = 60;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_MAX_FRAMES: u32 = 600;
const DEFAULT_CONFIG_PATH: &str = "./canvasfade.ini";

/// Fade configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct FadeConfig {
    /// Default fade speed in alpha units per second.
    pub fade_speed: f32,
    /// Whether panels start fully opaque.
    pub start_visible: bool,
    /// Simulated frames per second.
    pub fps: u32,
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// Upper bound on simulated frames.
    pub max_frames: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fade_speed: DEFAULT_FADE_SPEED,
            start_visible: DEFAULT_START_VISIBLE,
            fps: DEFAULT_FPS,
            time_scale: DEFAULT_TIME_SCALE,
            max_frames: DEFAULT_MAX_FRAMES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Seconds per simulated frame.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    /// Parse every key into a copy and commit it only once all keys are valid.
    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        let mut parsed = self.clone();

        // [fade] section
        if let Some(speed) = config
            .getfloat("fade", "speed")
            .map_err(|e| format!("fade.speed: {}", e))?
        {
            if speed <= 0.0 {
                return Err(format!("fade.speed must be positive, got {}", speed));
            }
            parsed.fade_speed = speed as f32;
        }
        if let Some(visible) = config
            .getbool("fade", "start_visible")
            .map_err(|e| format!("fade.start_visible: {}", e))?
        {
            parsed.start_visible = visible;
        }

        // [simulation] section
        if let Some(fps) = config
            .getuint("simulation", "fps")
            .map_err(|e| format!("simulation.fps: {}", e))?
        {
            if fps == 0 {
                return Err("simulation.fps must be at least 1".to_string());
            }
            parsed.fps = fps as u32;
        }
        if let Some(scale) = config
            .getfloat("simulation", "time_scale")
            .map_err(|e| format!("simulation.time_scale: {}", e))?
        {
            parsed.time_scale = scale.max(0.0) as f32;
        }
        if let Some(frames) = config
            .getuint("simulation", "max_frames")
            .map_err(|e| format!("simulation.max_frames: {}", e))?
        {
            parsed.max_frames = frames as u32;
        }

        *self = parsed;

        info!(
            "Loaded config: speed={}, start_visible={}, fps={}, time_scale={}, max_frames={}",
            self.fade_speed, self.start_visible, self.fps, self.time_scale, self.max_frames
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [fade] section
        config.set("fade", "speed", Some(self.fade_speed.to_string()));
        config.set("fade", "start_visible", Some(self.start_visible.to_string()));

        // [simulation] section
        config.set("simulation", "fps", Some(self.fps.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));
        config.set("simulation", "max_frames", Some(self.max_frames.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
