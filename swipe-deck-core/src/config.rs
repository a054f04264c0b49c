//! Deck configuration
//!
//! Every section is optional in a config file; missing fields fall back to
//! the values in [`crate::constants`]. Call [`DeckConfig::validate`] (done by
//! `Deck::new`) before using a config built by hand.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::easing::EasingFunction;
use crate::error::{DeckError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Width of the screen (logical px). Drives the swipe threshold, the
    /// swipe-out target and the rotation domain.
    pub screen_width: f32,
    /// Fraction of `screen_width` a release must exceed to commit.
    pub swipe_threshold_ratio: f32,
    pub swipe_out: SwipeOutConfig,
    pub spring: SpringConfig,
    pub rotation: RotationConfig,
    pub stack: StackConfig,
    pub layout_animation: LayoutAnimationConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            screen_width: constants::gesture::DEFAULT_SCREEN_WIDTH,
            swipe_threshold_ratio: constants::gesture::SWIPE_THRESHOLD_RATIO,
            swipe_out: SwipeOutConfig::default(),
            spring: SpringConfig::default(),
            rotation: RotationConfig::default(),
            stack: StackConfig::default(),
            layout_animation: LayoutAnimationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeOutConfig {
    pub duration_ms: u64,
    pub easing: EasingFunction,
}

impl Default for SwipeOutConfig {
    fn default() -> Self {
        Self {
            duration_ms: constants::swipe_out::DURATION_MS,
            easing: EasingFunction::EaseInOutQuad,
        }
    }
}

impl SwipeOutConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_displacement: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: constants::spring::STIFFNESS,
            damping: constants::spring::DAMPING,
            mass: constants::spring::MASS,
            rest_displacement: constants::spring::REST_DISPLACEMENT,
            rest_speed: constants::spring::REST_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub max_degrees: f32,
    pub domain_factor: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_degrees: constants::rotation::MAX_DEGREES,
            domain_factor: constants::rotation::DOMAIN_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Vertical offset per depth level for background cards.
    pub depth_offset: f32,
    /// Cap on the number of rendered cards (top card included).
    /// `None` renders every remaining card.
    pub max_rendered: Option<usize>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            depth_offset: constants::stack::DEPTH_OFFSET,
            max_rendered: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutAnimationConfig {
    /// Read once when the deck is built.
    pub enabled: bool,
    pub duration_ms: u64,
    pub easing: EasingFunction,
}

impl Default for LayoutAnimationConfig {
    fn default() -> Self {
        Self {
            enabled: constants::layout_animation::ENABLED,
            duration_ms: constants::layout_animation::DURATION_MS,
            easing: EasingFunction::EaseOutCubic,
        }
    }
}

impl LayoutAnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl DeckConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DeckConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Copy of this config with a different screen width.
    pub fn with_screen_width(mut self, width: f32) -> Self {
        self.screen_width = width;
        self
    }

    /// Displacement a release must exceed (strictly) to commit a swipe.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_ratio * self.screen_width
    }

    pub fn validate(&self) -> Result<()> {
        validate_screen_width(self.screen_width)?;
        let ratio = self.swipe_threshold_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(DeckError::InvalidConfig(format!(
                "swipe_threshold_ratio must be in (0, 1], got {ratio}"
            )));
        }
        if self.swipe_out.duration_ms == 0 {
            return Err(DeckError::InvalidConfig(
                "swipe_out.duration_ms must be greater than zero".into(),
            ));
        }
        let spring = &self.spring;
        if !(spring.stiffness > 0.0
            && spring.damping > 0.0
            && spring.mass > 0.0)
        {
            return Err(DeckError::InvalidConfig(format!(
                "spring stiffness, damping and mass must be positive, \
                 got {}/{}/{}",
                spring.stiffness, spring.damping, spring.mass
            )));
        }
        if !(spring.rest_displacement > 0.0 && spring.rest_speed > 0.0) {
            return Err(DeckError::InvalidConfig(
                "spring rest thresholds must be positive".into(),
            ));
        }
        if !(self.rotation.domain_factor > 0.0)
            || !self.rotation.max_degrees.is_finite()
        {
            return Err(DeckError::InvalidConfig(format!(
                "rotation domain_factor must be positive, got {}",
                self.rotation.domain_factor
            )));
        }
        if !(self.stack.depth_offset >= 0.0) {
            return Err(DeckError::InvalidConfig(format!(
                "stack.depth_offset must not be negative, got {}",
                self.stack.depth_offset
            )));
        }
        if self.stack.max_rendered == Some(0) {
            return Err(DeckError::InvalidConfig(
                "stack.max_rendered must allow at least the top card".into(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_screen_width(width: f32) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(DeckError::InvalidConfig(format!(
            "screen_width must be a positive finite number, got {width}"
        )))
    }
}
