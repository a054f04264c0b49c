use std::path::{Path, PathBuf};

use iced::Task;
use swipe_deck_core::DeckConfig;

use crate::messages::Message;
use crate::state::State;

/// Phone-sized portrait window.
pub const DEFAULT_WINDOW_WIDTH: f32 = 390.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Configuration for booting the demo.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub deck: DeckConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            deck: DeckConfig::default(),
        }
    }
}

impl AppConfig {
    /// Deck settings come from `SWIPE_DECK_CONFIG` (a TOML file) or, when
    /// unset, `<config_dir>/swipe-deck/config.toml` if it exists. Window size
    /// comes from `SWIPE_DECK_WINDOW_WIDTH` / `SWIPE_DECK_WINDOW_HEIGHT`.
    pub fn from_environment() -> Self {
        let mut config = Self::default();

        if let Some(path) = config_path()
            && let Some(deck) = load_deck_config(&path)
        {
            config.deck = deck;
        }

        if let Some(width) = env_dimension("SWIPE_DECK_WINDOW_WIDTH") {
            config.window_width = width;
        }
        if let Some(height) = env_dimension("SWIPE_DECK_WINDOW_HEIGHT") {
            config.window_height = height;
        }

        config
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SWIPE_DECK_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let path = dirs::config_dir()?.join("swipe-deck").join("config.toml");
    path.exists().then_some(path)
}

/// A broken config file falls back to defaults rather than stopping the app.
pub(crate) fn load_deck_config(path: &Path) -> Option<DeckConfig> {
    match DeckConfig::load(path) {
        Ok(deck) => {
            log::info!("Loaded deck config from {}", path.display());
            Some(deck)
        }
        Err(err) => {
            log::warn!(
                "Ignoring deck config at {}: {err}; using defaults",
                path.display()
            );
            None
        }
    }
}

fn env_dimension(name: &str) -> Option<f32> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => {
            log::warn!("Ignoring {name}={raw}: expected a positive number");
            None
        }
    }
}

/// Boot logic for the running application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    (State::new(config), Task::none())
}
