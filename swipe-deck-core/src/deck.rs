//! The deck state machine
//!
//! A deck is always at some `index` into its list. Between gestures it is
//! `Idle`; a touch-down moves it to `Dragging`, and the release either
//! springs the card back (`SpringingBack`, index unchanged) or flies it off
//! screen (`SwipingOut`) and advances the index once the animation lands.
//! `index == len` is terminal until the host supplies a new list.
//!
//! The deck never reads a clock. Hosts feed gesture events through
//! [`Deck::handle_gesture_event`] and frame timestamps through [`Deck::tick`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::animation::{
    Animation, AnimationFrame, SpringAnimation, TimingAnimation,
};
use crate::callbacks::{SwipeCallbacks, Swiped};
use crate::config::{DeckConfig, validate_screen_width};
use crate::error::Result;
use crate::geometry::Vector2;
use crate::gesture::{
    GestureEvent, GestureResponse, IgnoreReason, ReleaseDecision,
    SwipeDirection, decide_release,
};
use crate::item::CardItem;
use crate::layout::{CardRole, plan_stack};
use crate::position::AnimatedPosition;
use crate::render::{CardRenderer, CardTransform, DeckScene, PlacedCard};
use crate::rotation::RotationMapping;
use crate::transition::{CardFrame, LayoutTransition};

#[derive(Debug, Clone)]
pub enum DeckPhase {
    Idle,
    /// Finger down; displacement of the latest move.
    Dragging { dx: f32, dy: f32 },
    SpringingBack(SpringAnimation),
    SwipingOut {
        direction: SwipeDirection,
        animation: TimingAnimation,
    },
}

#[derive(Debug)]
pub struct Deck<T: CardItem> {
    config: DeckConfig,
    data: Arc<[T]>,
    index: usize,
    position: AnimatedPosition,
    phase: DeckPhase,
    rotation: RotationMapping,
    /// `None` when layout animation was disabled at construction.
    transition: Option<LayoutTransition<T::Key>>,
    callbacks: SwipeCallbacks<T>,
}

impl<T: CardItem> Deck<T> {
    pub fn new(config: DeckConfig, data: Arc<[T]>) -> Result<Self> {
        config.validate()?;
        let rotation =
            RotationMapping::for_screen(config.screen_width, &config.rotation)?;
        let transition = config
            .layout_animation
            .enabled
            .then(|| LayoutTransition::new(&config.layout_animation));

        debug!(
            cards = data.len(),
            screen_width = config.screen_width,
            layout_animation = transition.is_some(),
            "deck created"
        );

        Ok(Self {
            config,
            data,
            index: 0,
            position: AnimatedPosition::default(),
            phase: DeckPhase::Idle,
            rotation,
            transition,
            callbacks: SwipeCallbacks::default(),
        })
    }

    pub fn on_swipe_right(
        mut self,
        handler: impl FnMut(Swiped<'_, T>) + 'static,
    ) -> Self {
        self.callbacks.on_swipe_right = Box::new(handler);
        self
    }

    pub fn on_swipe_left(
        mut self,
        handler: impl FnMut(Swiped<'_, T>) + 'static,
    ) -> Self {
        self.callbacks.on_swipe_left = Box::new(handler);
        self
    }

    pub fn with_callbacks(mut self, callbacks: SwipeCallbacks<T>) -> Self {
        self.callbacks = callbacks;
        self
    }

    // Queries

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn data(&self) -> &Arc<[T]> {
        &self.data
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.len() - self.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.len()
    }

    pub fn top_card(&self) -> Option<&T> {
        self.data.get(self.index)
    }

    pub fn phase(&self) -> &DeckPhase {
        &self.phase
    }

    pub fn position(&self) -> Vector2 {
        self.position.value()
    }

    /// Tilt of the top card, derived from the live horizontal offset.
    pub fn rotation_deg(&self) -> f32 {
        self.rotation.degrees(self.position.value().x)
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.config.swipe_threshold()
    }

    /// True while the host should keep delivering frame ticks.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            DeckPhase::SpringingBack(_) | DeckPhase::SwipingOut { .. }
        ) || self.transition.as_ref().is_some_and(|t| t.is_active())
    }

    // Input

    /// Single entry point for gesture input.
    pub fn handle_gesture_event(
        &mut self,
        event: GestureEvent,
    ) -> GestureResponse {
        if matches!(self.phase, DeckPhase::SwipingOut { .. }) {
            trace!(?event, "gesture ignored while a swipe is in flight");
            return GestureResponse::Ignored(IgnoreReason::SwipeInFlight);
        }
        if self.is_exhausted() {
            return GestureResponse::Ignored(IgnoreReason::Exhausted);
        }

        match event {
            GestureEvent::Down => {
                if matches!(self.phase, DeckPhase::SpringingBack(_)) {
                    debug!(
                        position = ?self.position.value(),
                        "spring-back superseded by new gesture"
                    );
                }
                self.phase = DeckPhase::Dragging { dx: 0.0, dy: 0.0 };
                GestureResponse::Claimed
            }
            GestureEvent::Move { dx, dy } => {
                if !matches!(self.phase, DeckPhase::Dragging { .. }) {
                    return GestureResponse::Ignored(IgnoreReason::NotTracking);
                }
                trace!(dx, dy, "drag");
                self.position.set(Vector2::new(dx, dy));
                self.phase = DeckPhase::Dragging { dx, dy };
                GestureResponse::Moved
            }
            GestureEvent::Release { dx, dy } => {
                if !matches!(self.phase, DeckPhase::Dragging { .. }) {
                    return GestureResponse::Ignored(IgnoreReason::NotTracking);
                }
                self.position.set(Vector2::new(dx, dy));
                let decision = decide_release(dx, self.swipe_threshold());
                debug!(
                    dx,
                    threshold = self.swipe_threshold(),
                    ?decision,
                    "release"
                );
                match decision {
                    ReleaseDecision::Commit(direction) => {
                        self.start_swipe_out(direction)
                    }
                    ReleaseDecision::Reset => self.reset_position(),
                }
                GestureResponse::Released(decision)
            }
            GestureEvent::Cancel => {
                if !matches!(self.phase, DeckPhase::Dragging { .. }) {
                    return GestureResponse::Ignored(IgnoreReason::NotTracking);
                }
                debug!("gesture cancelled");
                self.reset_position();
                GestureResponse::Released(ReleaseDecision::Reset)
            }
        }
    }

    /// Commit the top card without a gesture. Returns false when there is
    /// no card or a swipe is already in flight.
    pub fn force_swipe(&mut self, direction: SwipeDirection) -> bool {
        if self.is_exhausted()
            || matches!(self.phase, DeckPhase::SwipingOut { .. })
        {
            return false;
        }
        self.start_swipe_out(direction);
        true
    }

    /// Advance animations to `now`. Returns the direction of a swipe that
    /// completed on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<SwipeDirection> {
        if let Some(transition) = self.transition.as_mut() {
            transition.tick(now);
        }

        match std::mem::replace(&mut self.phase, DeckPhase::Idle) {
            DeckPhase::SpringingBack(mut spring) => {
                match spring.step(now) {
                    AnimationFrame::Running(value) => {
                        self.position.set(value);
                        self.phase = DeckPhase::SpringingBack(spring);
                    }
                    AnimationFrame::Finished(value) => {
                        self.position.set(value);
                        trace!("spring-back settled");
                    }
                }
                None
            }
            DeckPhase::SwipingOut {
                direction,
                mut animation,
            } => match animation.step(now) {
                AnimationFrame::Running(value) => {
                    self.position.set(value);
                    self.phase = DeckPhase::SwipingOut {
                        direction,
                        animation,
                    };
                    None
                }
                AnimationFrame::Finished(value) => {
                    self.position.set(value);
                    self.complete_swipe(direction);
                    Some(direction)
                }
            },
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Replace the list. A different `Arc` resets progress to the first
    /// card; the same `Arc` is a no-op. Returns whether a reset happened.
    pub fn set_data(&mut self, data: Arc<[T]>) -> bool {
        if Arc::ptr_eq(&self.data, &data) {
            return false;
        }
        let snapshot = self.layout_snapshot();
        debug!(
            previous_index = self.index,
            previous_len = self.data.len(),
            cards = data.len(),
            "deck data replaced"
        );
        self.data = data;
        self.index = 0;
        self.phase = DeckPhase::Idle;
        self.position.set(Vector2::ZERO);
        self.begin_layout_transition(snapshot);
        true
    }

    pub fn set_screen_width(&mut self, width: f32) -> Result<()> {
        validate_screen_width(width)?;
        self.rotation =
            RotationMapping::for_screen(width, &self.config.rotation)?;
        self.config.screen_width = width;
        Ok(())
    }

    // Output

    /// Describe what to paint for the current state.
    pub fn compose<R: CardRenderer<T>>(
        &self,
        renderer: &R,
    ) -> DeckScene<R::Output> {
        if self.is_exhausted() {
            return DeckScene::Exhausted(renderer.render_no_more_cards());
        }

        let rotation_deg = self.rotation_deg();
        let cards = plan_stack(self.index, self.len(), &self.config.stack)
            .into_iter()
            .filter_map(|slot| {
                let item = self.data.get(slot.index)?;
                let frame = self.card_frame(&item.key(), slot.offset_y);
                let transform = match slot.role {
                    CardRole::Top => CardTransform {
                        offset: self.position.value()
                            + Vector2::new(0.0, frame.offset_y),
                        rotation_deg,
                        opacity: frame.opacity,
                    },
                    CardRole::Background => CardTransform {
                        offset: Vector2::new(0.0, frame.offset_y),
                        rotation_deg: 0.0,
                        opacity: frame.opacity,
                    },
                };
                Some(PlacedCard {
                    index: slot.index,
                    depth: slot.depth,
                    role: slot.role,
                    transform,
                    interactive: slot.role == CardRole::Top,
                    content: renderer.render_card(item),
                })
            })
            .collect();

        DeckScene::Stack(cards)
    }

    // Internals

    fn start_swipe_out(&mut self, direction: SwipeDirection) {
        let target =
            Vector2::new(direction.sign() * self.config.screen_width, 0.0);
        debug!(?direction, index = self.index, "swipe committed");
        self.phase = DeckPhase::SwipingOut {
            direction,
            animation: TimingAnimation::new(
                self.position.value(),
                target,
                self.config.swipe_out.duration(),
                self.config.swipe_out.easing,
            ),
        };
    }

    fn reset_position(&mut self) {
        if self.position.is_at_rest() {
            self.phase = DeckPhase::Idle;
            return;
        }
        self.phase = DeckPhase::SpringingBack(SpringAnimation::new(
            self.position.value(),
            Vector2::ZERO,
            self.config.spring,
        ));
    }

    /// Runs once per commit, after the swipe-out animation has landed.
    fn complete_swipe(&mut self, direction: SwipeDirection) {
        let index = self.index;
        let len = self.data.len();
        let snapshot = self.layout_snapshot();

        match self.data.get(index) {
            Some(item) => self.callbacks.dispatch(Swiped {
                item,
                direction,
                index,
                remaining: len - index,
            }),
            None => warn!(index, len, "swipe completed with no card at index"),
        }

        self.position.set(Vector2::ZERO);
        self.index = (index + 1).min(len);
        debug!(
            ?direction,
            index = self.index,
            remaining = self.remaining(),
            "swipe complete"
        );
        self.begin_layout_transition(snapshot);
    }

    fn card_frame(&self, key: &T::Key, offset_y: f32) -> CardFrame {
        match &self.transition {
            Some(transition) => transition.frame(key, offset_y),
            None => CardFrame {
                offset_y,
                opacity: 1.0,
            },
        }
    }

    /// Stack offsets of the currently visible cards, as displayed right now.
    fn layout_snapshot(&self) -> HashMap<T::Key, f32> {
        if self.transition.is_none() {
            return HashMap::new();
        }
        plan_stack(self.index, self.len(), &self.config.stack)
            .into_iter()
            .filter_map(|slot| {
                let key = self.data.get(slot.index)?.key();
                let offset = self.card_frame(&key, slot.offset_y).offset_y;
                Some((key, offset))
            })
            .collect()
    }

    fn begin_layout_transition(&mut self, snapshot: HashMap<T::Key, f32>) {
        if let Some(transition) = self.transition.as_mut() {
            transition.begin(snapshot);
        }
    }
}
