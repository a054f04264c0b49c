use std::cell::RefCell;
use std::rc::Rc;

use swipe_deck_core::{Deck, PanTracker, SwipeDirection, Swiped};

use crate::app::AppConfig;
use crate::data::{CardRecord, demo_cards};

/// Ids of swiped cards, in the order they were swiped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwipeTally {
    pub liked: Vec<u32>,
    pub passed: Vec<u32>,
}

impl SwipeTally {
    fn record(&mut self, swiped: &Swiped<'_, CardRecord>) {
        match swiped.direction {
            SwipeDirection::Right => self.liked.push(swiped.item.id),
            SwipeDirection::Left => self.passed.push(swiped.item.id),
        }
    }
}

#[derive(Debug)]
pub struct State {
    /// `None` when the deck could not be built from the configuration.
    pub deck: Option<Deck<CardRecord>>,
    pub boot_error: Option<String>,
    pub pan: PanTracker,
    pub tally: Rc<RefCell<SwipeTally>>,
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        let tally = Rc::new(RefCell::new(SwipeTally::default()));
        let deck_config =
            config.deck.clone().with_screen_width(config.window_width);

        let liked = Rc::clone(&tally);
        let passed = Rc::clone(&tally);
        let (deck, boot_error) = match Deck::new(deck_config, demo_cards()) {
            Ok(deck) => {
                let deck = deck
                    .on_swipe_right(move |swiped| {
                        log::info!(
                            "Liked {} ({} left before this swipe)",
                            swiped.item.text,
                            swiped.remaining
                        );
                        liked.borrow_mut().record(&swiped);
                    })
                    .on_swipe_left(move |swiped| {
                        log::info!(
                            "Passed on {} ({} left before this swipe)",
                            swiped.item.text,
                            swiped.remaining
                        );
                        passed.borrow_mut().record(&swiped);
                    });
                (Some(deck), None)
            }
            Err(err) => {
                log::error!("Failed to build deck: {err}");
                (None, Some(err.to_string()))
            }
        };

        Self {
            deck,
            boot_error,
            pan: PanTracker::new(),
            tally,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.deck.as_ref().is_some_and(|deck| deck.is_animating())
    }
}
