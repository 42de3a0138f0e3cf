use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::GameVariant;

/// A single stat value as the API reports it. Counters usually arrive as
/// numbers, but ratios and rates are often strings such as `"54%"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Response of `GET /players/{id}/stats/{game}`.
///
/// Both keys are optional; a payload without them aggregates to zeros.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawStatsPayload {
    #[serde(default)]
    pub segments: Option<Vec<Segment>>,
    #[serde(default)]
    pub lifetime: Option<HashMap<String, MetricValue>>,
}

impl RawStatsPayload {
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_deref().unwrap_or(&[])
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Segment {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub stats: Option<HashMap<String, MetricValue>>,
}

impl Segment {
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<&MetricValue> {
        self.stats.as_ref().and_then(|stats| stats.get(name))
    }
}

/// Response of `GET /players?nickname=...`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PlayerProfile {
    #[serde(default)]
    pub nickname: String,
    pub player_id: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub steam_id_64: Option<String>,
    #[serde(default)]
    pub games: HashMap<String, GameProfile>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct GameProfile {
    #[serde(default)]
    pub faceit_elo: Option<f64>,
}

impl PlayerProfile {
    #[must_use]
    pub fn elo(&self, game: GameVariant) -> i64 {
        self.games
            .get(game.as_str())
            .and_then(|g| g.faceit_elo)
            .filter(|elo| elo.is_finite())
            .map_or(0, |elo| elo.trunc() as i64)
    }

    /// The API sends an empty string for players without an avatar.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|a| !a.trim().is_empty())
    }

    #[must_use]
    pub fn steam_id(&self) -> Option<&str> {
        self.steam_id_64.as_deref().filter(|s| !s.trim().is_empty())
    }
}
