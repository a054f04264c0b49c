//! Desktop host for the swipe deck: eight static cards, drag to swipe.

pub mod app;
pub mod cards;
pub mod data;
pub mod deck_canvas;
pub mod input;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
