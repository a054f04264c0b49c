use iced::Task;
use swipe_deck_core::GestureResponse;

use crate::data::demo_cards;
use crate::messages::{Message, PointerMessage};
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Pointer(pointer) => handle_pointer(state, pointer),
        Message::Frame(now) => {
            if let Some(deck) = state.deck.as_mut()
                && let Some(direction) = deck.tick(now)
            {
                log::debug!(
                    "Swipe {direction:?} landed; {} cards remaining",
                    deck.remaining()
                );
            }
        }
        Message::WindowResized { width } => {
            if let Some(deck) = state.deck.as_mut()
                && let Err(err) = deck.set_screen_width(width)
            {
                log::warn!("Ignoring window width {width}: {err}");
            }
        }
        Message::ForceSwipe(direction) => {
            if let Some(deck) = state.deck.as_mut()
                && !deck.force_swipe(direction)
            {
                log::debug!(
                    "Swipe {direction:?} ignored: nothing to swipe right now"
                );
            }
        }
        Message::Reload => {
            if let Some(deck) = state.deck.as_mut() {
                deck.set_data(demo_cards());
                log::info!("Reloaded {} cards", deck.len());
            }
        }
    }
    Task::none()
}

fn handle_pointer(state: &mut State, pointer: PointerMessage) {
    let gesture = match pointer {
        PointerMessage::Pressed(id, position) => state.pan.press(id, position),
        PointerMessage::Moved(id, position) => state.pan.moved(id, position),
        PointerMessage::Released(id, position) => {
            state.pan.release(id, position)
        }
        PointerMessage::Lost(id) => state.pan.lost(id),
    };

    let (Some(gesture), Some(deck)) = (gesture, state.deck.as_mut()) else {
        return;
    };

    match deck.handle_gesture_event(gesture) {
        GestureResponse::Ignored(reason) => {
            log::trace!("Gesture {gesture:?} ignored: {reason:?}");
        }
        GestureResponse::Released(decision) => {
            log::debug!("Release decided {decision:?}");
        }
        GestureResponse::Claimed | GestureResponse::Moved => {}
    }
}
