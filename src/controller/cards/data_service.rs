use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;

use super::highlight::{BestMarks, highlight_best_stats};
use crate::controller::faceit::{FaceitApiClient, PlayerRecordCache};
use crate::model::{AggregationOptions, CardData, CardSelection, RosterEntry};

/// Shared by every request handler.
pub struct AppState {
    pub api: Arc<dyn FaceitApiClient>,
    pub cache: PlayerRecordCache,
    pub roster: Vec<RosterEntry>,
    pub title: String,
}

impl AppState {
    #[must_use]
    pub fn new(
        api: Arc<dyn FaceitApiClient>,
        roster: Vec<RosterEntry>,
        options: AggregationOptions,
        title: impl Into<String>,
    ) -> Self {
        Self {
            api,
            cache: PlayerRecordCache::new(options),
            roster,
            title: title.into(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct RosterCards {
    pub cards: Vec<CardData>,
    pub best: BestMarks,
}

/// Loads every card concurrently and waits for all of them before
/// highlighting. A player whose fetch fails gets a placeholder card; the
/// other cards are unaffected.
pub async fn load_cards(
    api: &dyn FaceitApiClient,
    cache: &PlayerRecordCache,
    roster: &[RosterEntry],
    selection: &CardSelection,
) -> RosterCards {
    let pipelines = roster.iter().map(|entry| async move {
        let game = selection.variant_for(&entry.card_id);
        let record = match cache.get(&entry.nickname, game, api).await {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(
                    nickname = %entry.nickname,
                    %game,
                    error = %err,
                    "failed to load player data, showing placeholder card"
                );
                None
            }
        };
        CardData {
            entry: entry.clone(),
            game,
            record,
        }
    });

    let cards = join_all(pipelines).await;
    let best = highlight_best_stats(&cards);

    tracing::debug!(
        cards = cards.len(),
        failed = cards.iter().filter(|c| c.record.is_none()).count(),
        without_stats = cards
            .iter()
            .filter(|c| c.record.as_ref().is_some_and(|r| !r.has_stats()))
            .count(),
        marks = best.len(),
        "loaded roster cards"
    );

    RosterCards { cards, best }
}

pub async fn get_data_for_cards_page(
    state: &AppState,
    selection: &CardSelection,
) -> RosterCards {
    load_cards(state.api.as_ref(), &state.cache, &state.roster, selection).await
}
