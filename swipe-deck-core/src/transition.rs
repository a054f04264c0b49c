//! Layout transition for the card stack
//!
//! When the index advances or the list is replaced, cards change depth (or
//! appear for the first time). Instead of jumping, each card eases from the
//! stack offset it had to its new one, and cards that were not on screen
//! fade in. Purely cosmetic: it never touches the index or the position.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::config::LayoutAnimationConfig;
use crate::easing::{EasingFunction, lerp};

/// Cosmetic placement of one card during a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub offset_y: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct LayoutTransition<K> {
    duration: Duration,
    easing: EasingFunction,
    /// Stack offsets of the cards that were visible before the change.
    from: HashMap<K, f32>,
    started_at: Option<Instant>,
    /// Eased progress, 1.0 when settled.
    progress: f32,
    active: bool,
}

impl<K: Eq + Hash> LayoutTransition<K> {
    pub fn new(cfg: &LayoutAnimationConfig) -> Self {
        Self {
            duration: cfg.duration(),
            easing: cfg.easing,
            from: HashMap::new(),
            started_at: None,
            progress: 1.0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start easing from `previous` (key -> offset as last displayed).
    /// Supersedes a transition already in flight.
    pub fn begin(&mut self, previous: HashMap<K, f32>) {
        self.from = previous;
        self.started_at = None;
        self.progress = 0.0;
        self.active = !self.duration.is_zero();
        if !self.active {
            self.progress = 1.0;
            self.from.clear();
        }
    }

    /// Advance to `now`. Returns true while still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            self.active = false;
            self.progress = 1.0;
            self.from.clear();
            return false;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.progress = self.easing.apply(t);
        true
    }

    /// Where `key` should be drawn given its resting offset.
    pub fn frame(&self, key: &K, target_offset: f32) -> CardFrame {
        if !self.active {
            return CardFrame {
                offset_y: target_offset,
                opacity: 1.0,
            };
        }
        match self.from.get(key) {
            Some(&previous) => CardFrame {
                offset_y: lerp(previous, target_offset, self.progress),
                opacity: 1.0,
            },
            None => CardFrame {
                offset_y: target_offset,
                opacity: self.progress,
            },
        }
    }
}
