use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, text};
use iced::{Background, Border, Color, Element, Length, Theme};
use swipe_deck_core::DeckScene;

use crate::cards::{AllDonePanel, BUTTON_BLUE, DemoRenderer, Visual};
use crate::deck_canvas::DeckCanvas;
use crate::messages::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    let Some(deck) = state.deck.as_ref() else {
        let reason = state.boot_error.as_deref().unwrap_or("unknown error");
        return container(text(format!("Could not start the deck: {reason}")))
            .padding(20)
            .into();
    };

    let tally = state.tally.borrow();
    let header = text(format!(
        "{} of {} left  ·  liked {}  ·  passed {}",
        deck.remaining(),
        deck.len(),
        tally.liked.len(),
        tally.passed.len()
    ))
    .size(14);

    let body: Element<'_, Message> = match deck.compose(&DemoRenderer) {
        DeckScene::Exhausted(Visual::AllDone(panel)) => all_done(panel),
        DeckScene::Exhausted(Visual::Card(_)) => text("No more content").into(),
        DeckScene::Stack(cards) => Canvas::new(DeckCanvas::new(cards))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    column![container(header).padding([8, 15]), body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn all_done(panel: AllDonePanel) -> Element<'static, Message> {
    let get_more = button(text(panel.action).size(15))
        .padding([10, 20])
        .style(|_theme: &Theme, _status| button::Style {
            background: Some(Background::Color(BUTTON_BLUE)),
            text_color: Color::WHITE,
            ..button::Style::default()
        })
        .on_press(Message::Reload);

    let card = column![
        text(panel.title).size(20),
        text(panel.body).size(14),
        get_more
    ]
    .spacing(10);

    container(card)
        .padding(15)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::WHITE)),
            text_color: Some(Color::from_rgb(0.17, 0.17, 0.17)),
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: Color::from_rgb(0.85, 0.85, 0.85),
            },
            ..Default::default()
        })
        .into()
}
