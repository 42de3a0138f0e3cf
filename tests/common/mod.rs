#![allow(dead_code)]

use async_trait::async_trait;
use roster_cards::CardError;
use roster_cards::controller::faceit::FaceitApiClient;
use roster_cards::model::{GameVariant, PlayerProfile, RawStatsPayload, RosterEntry};
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory stand-in for the FACEIT api. Counts calls so tests can tell a
/// cache hit from a fetch.
#[derive(Default)]
pub struct FakeFaceitClient {
    profiles: HashMap<String, PlayerProfile>,
    stats: HashMap<(String, GameVariant), RawStatsPayload>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    pub profile_calls: AtomicUsize,
    pub stats_calls: AtomicUsize,
}

impl FakeFaceitClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player whose profile id is `id-<nickname>`.
    pub fn with_player(mut self, nickname: &str, elo: i64, segments: Value) -> Self {
        let player_id = format!("id-{nickname}");
        let profile = profile_json(nickname, elo);
        let payload: RawStatsPayload =
            serde_json::from_value(json!({ "segments": segments, "lifetime": {} }))
                .expect("valid stats json");
        self.profiles.insert(nickname.to_string(), profile);
        self.stats
            .insert((player_id.clone(), GameVariant::Cs2), payload.clone());
        self.stats.insert((player_id, GameVariant::Csgo), payload);
        self
    }

    /// Registers a profile with no stats behind it; the stats call answers 404.
    pub fn with_profile_only(mut self, nickname: &str, elo: i64) -> Self {
        self.profiles
            .insert(nickname.to_string(), profile_json(nickname, elo));
        self
    }

    pub fn with_failing(mut self, nickname: &str) -> Self {
        self.failing.insert(nickname.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FaceitApiClient for FakeFaceitClient {
    async fn get_player(&self, nickname: &str) -> Result<PlayerProfile, CardError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(nickname) {
            return Err(CardError::Network(format!("connection reset for {nickname}")));
        }
        self.profiles
            .get(nickname)
            .cloned()
            .ok_or_else(|| CardError::Status {
                status: 404,
                url: format!("/players?nickname={nickname}"),
            })
    }

    async fn get_player_stats(
        &self,
        player_id: &str,
        game: GameVariant,
    ) -> Result<RawStatsPayload, CardError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.stats
            .get(&(player_id.to_string(), game))
            .cloned()
            .ok_or_else(|| CardError::Status {
                status: 404,
                url: format!("/players/{player_id}/stats/{game}"),
            })
    }
}

fn profile_json(nickname: &str, elo: i64) -> PlayerProfile {
    serde_json::from_value(json!({
        "nickname": nickname,
        "player_id": format!("id-{nickname}"),
        "avatar": format!("https://cdn.example.com/{nickname}.jpg"),
        "steam_id_64": "76561198000000000",
        "games": { "cs2": { "faceit_elo": elo }, "csgo": { "faceit_elo": elo - 100 } }
    }))
    .expect("valid profile json")
}

/// One segment with the given kills; every other counter fixed.
pub fn kills_segment(kills: i64) -> Value {
    json!([{
        "label": "de_mirage",
        "mode": "5v5",
        "stats": {
            "Kills": kills,
            "Deaths": "5",
            "Matches": 2,
            "Wins": 1,
            "Headshots": 4,
            "Total Damage": 200,
            "K/D Ratio": "1.5",
            "K/R Ratio": "0.8",
            "Total Rounds with extended stats": 20
        }
    }])
}

pub fn roster(nicknames: &[&str]) -> Vec<RosterEntry> {
    let nicknames: Vec<String> = nicknames.iter().map(|s| (*s).to_string()).collect();
    RosterEntry::from_nicknames(&nicknames)
}
