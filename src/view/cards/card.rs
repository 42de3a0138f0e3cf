use maud::{Markup, html};
use reqwest::Url;

use crate::controller::cards::BestMarks;
use crate::model::{
    CardData, CardSelection, GameVariant, Metric, level_for_elo, level_image_path,
};

pub const DEFAULT_AVATAR: &str = "static/images/default_avatar.svg";
pub const FACEIT_PROFILE_URL: &str = "https://www.faceit.com/ru/players";
pub const STEAM_PROFILE_URL: &str = "https://steamcommunity.com/profiles";

const AVATAR_ONERROR: &str =
    "this.onerror=null;this.src='static/images/default_avatar.svg';";
const LEVEL_ONERROR: &str = "this.style.display='none';";

/// The nickname becomes one percent-encoded path segment.
#[must_use]
pub fn faceit_profile_link(nickname: &str) -> String {
    let Ok(mut url) = Url::parse(FACEIT_PROFILE_URL) else {
        return FACEIT_PROFILE_URL.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(nickname);
    }
    url.to_string()
}

#[must_use]
pub fn steam_profile_link(steam_id_64: &str) -> String {
    format!("{STEAM_PROFILE_URL}/{steam_id_64}")
}

pub fn render_card(card: &CardData, best: &BestMarks, selection: &CardSelection) -> Markup {
    let card_id = card.entry.card_id.as_str();
    let record = card.record.as_deref();
    let stats = record.and_then(|r| r.stats.as_ref());

    let name = record.map_or(card.entry.nickname.as_str(), |r| r.display_name());
    let elo = record.map_or(0, |r| r.elo());
    let level = level_for_elo(elo);
    let avatar = record
        .and_then(|r| r.profile.avatar_url())
        .unwrap_or(DEFAULT_AVATAR);
    let steam_id = record.and_then(|r| r.profile.steam_id());

    html! {
        div class="card" id=(card_id) data-game=(card.game.as_str()) {
            div class="card__header" {
                img class="card__img" src=(avatar) alt=(name) onerror=(AVATAR_ONERROR);
                div class="card__title" {
                    span class="card__name" { (name) }
                    div class="card__elo" {
                        img class="card__lvl" src=(level_image_path(level))
                            alt={ "Level " (level) } onerror=(LEVEL_ONERROR);
                        span class="elo-value" { (elo) }
                    }
                }
            }
            div class="game-switch" {
                @for game in GameVariant::ALL {
                    button.game-switch-btn.active[game == card.game]
                        data-player=(card_id)
                        data-game=(game.as_str())
                        hx-get={ "cards?" (selection.with(card_id, game).to_query()) }
                        hx-target="#cards" {
                        (game.display_name())
                    }
                }
            }
            div class="player-stats" {
                @for metric in Metric::DISPLAYED {
                    @if !(metric == Metric::Adr && card.game.is_legacy()) {
                        @let is_best = best.is_best(card_id, metric);
                        @let value = stats.map_or_else(|| "N/A".to_string(), |s| metric.format(s));
                        div class="player-stats-info" data-metric=(metric.slug()) {
                            span.player-stats-label.best-stat[is_best] { (metric.label()) }
                            span.player-stats-value.best-stat[is_best] { (value) }
                        }
                    }
                }
            }
            div class="card__links" {
                a class="faceit-link" href=(faceit_profile_link(name))
                    target="_blank" rel="noopener noreferrer" { "FACEIT" }
                @if let Some(steam_id) = steam_id {
                    a class="steam-link" href=(steam_profile_link(steam_id))
                        target="_blank" rel="noopener noreferrer" { "Steam" }
                }
            }
        }
    }
}
