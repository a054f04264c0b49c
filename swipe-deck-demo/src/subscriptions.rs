//! Root-level subscription composition

use iced::{Subscription, event, window};

use crate::input;
use crate::messages::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![event::listen_with(input::on_event)];

    // Frame ticks only while something on the deck is moving.
    if state.is_animating() {
        subscriptions.push(window::frames().map(Message::Frame));
    }

    Subscription::batch(subscriptions)
}
