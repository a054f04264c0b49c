//! Runtime events to demo messages
//!
//! Presses are not handled here: `DeckCanvas` hit-tests them against the top
//! card. Everything after the press is window-wide.

use iced::keyboard::{self, Key, key::Named};
use iced::{Event, Point, event, mouse, touch, window};
use swipe_deck_core::{PointerId, SwipeDirection, Vector2};

use crate::messages::{Message, PointerMessage};

fn to_vector(point: Point) -> Vector2 {
    Vector2::new(point.x, point.y)
}

/// Global event handler passed to `event::listen_with`.
pub fn on_event(
    event: Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Mouse(mouse_event) => on_mouse(mouse_event),
        Event::Touch(touch_event) => on_touch(touch_event),
        Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized { width: size.width })
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            if status == event::Status::Captured {
                return None;
            }
            on_key(key)
        }
        _ => None,
    }
}

fn on_mouse(event: mouse::Event) -> Option<Message> {
    let pointer = match event {
        mouse::Event::CursorMoved { position } => {
            PointerMessage::Moved(PointerId::Mouse, to_vector(position))
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            PointerMessage::Released(PointerId::Mouse, None)
        }
        mouse::Event::CursorLeft => PointerMessage::Lost(PointerId::Mouse),
        _ => return None,
    };
    Some(Message::Pointer(pointer))
}

fn on_touch(event: touch::Event) -> Option<Message> {
    let pointer = match event {
        touch::Event::FingerMoved { id, position } => {
            PointerMessage::Moved(PointerId::Finger(id.0), to_vector(position))
        }
        touch::Event::FingerLifted { id, position } => {
            PointerMessage::Released(
                PointerId::Finger(id.0),
                Some(to_vector(position)),
            )
        }
        touch::Event::FingerLost { id, .. } => {
            PointerMessage::Lost(PointerId::Finger(id.0))
        }
        _ => return None,
    };
    Some(Message::Pointer(pointer))
}

fn on_key(key: Key) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => {
            Some(Message::ForceSwipe(SwipeDirection::Left))
        }
        Key::Named(Named::ArrowRight) => {
            Some(Message::ForceSwipe(SwipeDirection::Right))
        }
        _ => None,
    }
}
