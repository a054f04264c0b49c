//! Canvas program that paints a composed card stack
//!
//! Presses are hit-tested here so only the top card starts a drag. Moves and
//! releases are picked up globally by `input::on_event`, so a drag keeps
//! going when the pointer leaves the card.

use iced::widget::Action;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke};
use iced::{
    Color, Event, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector,
    mouse, touch,
};
use swipe_deck_core::{PlacedCard, PointerId, Vector2};

use crate::cards::{BUTTON_BLUE, CardFace, Visual};
use crate::messages::{Message, PointerMessage};

/// Gap between the card and the canvas edges.
const CARD_MARGIN: f32 = 15.0;
const CARD_HEIGHT: f32 = 380.0;
const IMAGE_FRACTION: f32 = 0.55;

#[derive(Debug)]
pub struct DeckCanvas {
    /// Back-to-front, as composed by the deck.
    pub cards: Vec<PlacedCard<Visual>>,
}

/// Resting card centre and size for a canvas of `bounds` size.
fn card_layout(bounds: Size) -> (Point, Size) {
    let size =
        Size::new((bounds.width - 2.0 * CARD_MARGIN).max(0.0), CARD_HEIGHT);
    let center =
        Point::new(bounds.width / 2.0, CARD_MARGIN + CARD_HEIGHT / 2.0);
    (center, size)
}

impl DeckCanvas {
    pub fn new(cards: Vec<PlacedCard<Visual>>) -> Self {
        Self { cards }
    }

    /// Whether `local` (canvas coordinates) lands on the card that takes
    /// gesture input, as currently drawn (offset and tilt included).
    pub fn hits_interactive_card(&self, bounds: Size, local: Point) -> bool {
        let Some(card) = self.cards.iter().rev().find(|card| card.interactive)
        else {
            return false;
        };
        let (center, size) = card_layout(bounds);
        let transform = card.transform;

        let dx = local.x - (center.x + transform.offset.x);
        let dy = local.y - (center.y + transform.offset.y);
        let (sin, cos) = transform.rotation_rad().sin_cos();
        // Undo the card's rotation.
        let x = dx * cos + dy * sin;
        let y = -dx * sin + dy * cos;

        x.abs() <= size.width / 2.0 && y.abs() <= size.height / 2.0
    }

    /// Message for a press at window position `position`, if it starts a
    /// drag.
    pub fn press(
        &self,
        bounds: Rectangle,
        pointer: PointerId,
        position: Point,
    ) -> Option<Message> {
        let local = Point::new(position.x - bounds.x, position.y - bounds.y);
        if !bounds.contains(position)
            || !self.hits_interactive_card(bounds.size(), local)
        {
            return None;
        }
        Some(Message::Pointer(PointerMessage::Pressed(
            pointer,
            Some(Vector2::new(position.x, position.y)),
        )))
    }
}

impl Program<Message> for DeckCanvas {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = match event {
            Event::Mouse(mouse::Event::ButtonPressed(
                mouse::Button::Left,
            )) => self.press(bounds, PointerId::Mouse, cursor.position()?),
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                self.press(bounds, PointerId::Finger(id.0), *position)
            }
            _ => None,
        }?;
        Some(Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let (center, card_size) = card_layout(bounds.size());

        for placed in &self.cards {
            let Visual::Card(face) = &placed.content else {
                continue;
            };
            let transform = placed.transform;
            frame.with_save(|frame| {
                frame.translate(Vector::new(
                    center.x + transform.offset.x,
                    center.y + transform.offset.y,
                ));
                frame.rotate(transform.rotation_rad());
                draw_card(frame, face, card_size, transform.opacity);
            });
        }

        vec![frame.into_geometry()]
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Draw a card centred on the frame origin.
fn draw_card(frame: &mut Frame, face: &CardFace, size: Size, opacity: f32) {
    let top_left = Point::new(-size.width / 2.0, -size.height / 2.0);
    let body = Path::rectangle(top_left, size);
    frame.fill(&body, faded(Color::WHITE, opacity));
    frame.stroke(
        &body,
        Stroke::default()
            .with_color(faded(Color::from_rgb(0.85, 0.85, 0.85), opacity))
            .with_width(1.0),
    );

    let image_height = size.height * IMAGE_FRACTION;
    frame.fill(
        &Path::rectangle(top_left, Size::new(size.width, image_height)),
        faded(face.accent, opacity),
    );
    frame.fill_text(canvas::Text {
        content: face.source.to_string(),
        position: Point::new(
            top_left.x + 10.0,
            top_left.y + image_height - 22.0,
        ),
        color: faded(Color::from_rgba(1.0, 1.0, 1.0, 0.8), opacity),
        size: Pixels(11.0),
        ..canvas::Text::default()
    });

    let mut y = top_left.y + image_height + 14.0;
    frame.fill_text(canvas::Text {
        content: face.title.clone(),
        position: Point::new(top_left.x + 15.0, y),
        color: faded(Color::from_rgb(0.17, 0.17, 0.17), opacity),
        size: Pixels(20.0),
        ..canvas::Text::default()
    });
    y += 36.0;
    frame.fill_text(canvas::Text {
        content: face.caption.to_string(),
        position: Point::new(top_left.x + 15.0, y),
        color: faded(Color::from_rgb(0.35, 0.35, 0.35), opacity),
        size: Pixels(14.0),
        ..canvas::Text::default()
    });
    y += 34.0;

    let button = Path::rectangle(
        Point::new(top_left.x + 15.0, y),
        Size::new(size.width - 30.0, 40.0),
    );
    frame.fill(&button, faded(BUTTON_BLUE, opacity));
    frame.fill_text(canvas::Text {
        content: face.action.to_string(),
        position: Point::new(top_left.x + size.width / 2.0 - 36.0, y + 11.0),
        color: faded(Color::WHITE, opacity),
        size: Pixels(15.0),
        ..canvas::Text::default()
    });
}
