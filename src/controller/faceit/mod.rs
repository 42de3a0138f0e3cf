pub mod cache;
pub mod client;
pub mod processing;

pub use cache::*;
pub use client::*;
pub use processing::*;

use crate::error::CardError;
use crate::model::{AggregationOptions, GameVariant, PlayerRecord};

/// Fetches the profile, then the stats for its player id, and aggregates them.
/// A failed stats request still yields a record carrying the profile, with
/// `stats` left empty.
///
/// # Errors
///
/// Will return `Err` if the profile call fails
pub async fn get_player_data(
    api: &dyn FaceitApiClient,
    nickname: &str,
    game: GameVariant,
    options: AggregationOptions,
) -> Result<PlayerRecord, CardError> {
    let profile = api.get_player(nickname).await?;
    let stats = match api.get_player_stats(&profile.player_id, game).await {
        Ok(payload) => {
            let stats = aggregate_stats(&payload, game, options);
            tracing::debug!(
                nickname,
                %game,
                segments = payload.segments().len(),
                matches = stats.matches,
                "aggregated player stats"
            );
            Some(stats)
        }
        Err(err) => {
            tracing::warn!(
                nickname,
                %game,
                error = %err,
                "failed to load player stats, keeping profile only"
            );
            None
        }
    };

    Ok(PlayerRecord {
        nickname: nickname.to_string(),
        game,
        profile,
        stats,
        fetched_at: chrono::Utc::now(),
    })
}
