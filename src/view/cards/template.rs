use maud::{Markup, html};

use super::card::render_card;
use crate::controller::cards::RosterCards;
use crate::model::CardSelection;

pub fn render_cards_template(data: &RosterCards, selection: &CardSelection) -> Markup {
    html! {
        div class="cards" {
            @for card in &data.cards {
                (render_card(card, &data.best, selection))
            }
        }
    }
}
