use ahash::RandomState;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

use super::client::FaceitApiClient;
use super::get_player_data;
use crate::error::CardError;
use crate::model::{AggregationOptions, GameVariant, PlayerRecord};

/// Cache key: the nickname as configured plus the game variant.
pub type CacheKey = (String, GameVariant);

type Slot = Arc<OnceCell<Arc<PlayerRecord>>>;

enum FetchError {
    Failed(CardError),
    /// Profile loaded, stats did not. Handed back to the caller, not stored.
    ProfileOnly(PlayerRecord),
}

/// Fetched player records for the lifetime of the process. Entries are never
/// evicted. Each key has its own cell, so concurrent requests for a missing
/// key share one fetch. A failed fetch, or one that only got the profile,
/// leaves the cell empty and the next request tries again.
#[derive(Default)]
pub struct PlayerRecordCache {
    options: AggregationOptions,
    slots: RwLock<HashMap<CacheKey, Slot, RandomState>>,
}

impl PlayerRecordCache {
    #[must_use]
    pub fn new(options: AggregationOptions) -> Self {
        Self {
            options,
            slots: RwLock::new(HashMap::default()),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the record is not cached and the profile call fails
    pub async fn get(
        &self,
        nickname: &str,
        game: GameVariant,
        api: &dyn FaceitApiClient,
    ) -> Result<Arc<PlayerRecord>, CardError> {
        let slot = self.slot(nickname, game).await;
        if let Some(record) = slot.get() {
            tracing::trace!(nickname, %game, "player record cache hit");
            return Ok(Arc::clone(record));
        }

        let fetched = slot
            .get_or_try_init(|| async {
                tracing::debug!(nickname, %game, "player record cache miss, fetching");
                match get_player_data(api, nickname, game, self.options).await {
                    Ok(record) if record.has_stats() => Ok(Arc::new(record)),
                    Ok(record) => Err(FetchError::ProfileOnly(record)),
                    Err(err) => Err(FetchError::Failed(err)),
                }
            })
            .await;
        match fetched {
            Ok(record) => Ok(Arc::clone(record)),
            Err(FetchError::ProfileOnly(record)) => Ok(Arc::new(record)),
            Err(FetchError::Failed(err)) => Err(err),
        }
    }

    async fn slot(&self, nickname: &str, game: GameVariant) -> Slot {
        let key = (nickname.to_string(), game);
        if let Some(slot) = self.slots.read().await.get(&key) {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().await;
        Arc::clone(slots.entry(key).or_default())
    }

    pub async fn contains(&self, nickname: &str, game: GameVariant) -> bool {
        self.slots
            .read()
            .await
            .get(&(nickname.to_string(), game))
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of cached records; keys whose fetch failed are not counted.
    pub async fn len(&self) -> usize {
        self.slots
            .read()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
