//! Card and end-of-deck visuals

use iced::Color;
use swipe_deck_core::CardRenderer;

use crate::data::CardRecord;

/// Image placeholder colours, cycled by card id.
const ACCENTS: [Color; 4] = [
    Color::from_rgb(0.80, 0.36, 0.36),
    Color::from_rgb(0.25, 0.55, 0.80),
    Color::from_rgb(0.35, 0.68, 0.45),
    Color::from_rgb(0.85, 0.65, 0.25),
];

pub const BUTTON_BLUE: Color = Color::from_rgb(0.012, 0.663, 0.957);

#[derive(Debug, Clone, PartialEq)]
pub struct CardFace {
    pub title: String,
    pub caption: &'static str,
    pub action: &'static str,
    /// Where the image would come from; images are not fetched.
    pub source: &'static str,
    pub accent: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllDonePanel {
    pub title: &'static str,
    pub body: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Card(CardFace),
    AllDone(AllDonePanel),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DemoRenderer;

impl CardRenderer<CardRecord> for DemoRenderer {
    type Output = Visual;

    fn render_card(&self, item: &CardRecord) -> Visual {
        Visual::Card(CardFace {
            title: item.text.to_string(),
            caption: "I can customize a card further",
            action: "View Now!",
            source: item.uri,
            accent: ACCENTS[item.id as usize % ACCENTS.len()],
        })
    }

    fn render_no_more_cards(&self) -> Visual {
        Visual::AllDone(AllDonePanel {
            title: "All Done!",
            body: "No more content",
            action: "Get More!",
        })
    }
}
