use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{GameVariant, PlayerProfile};

/// Derived per-player statistics. Every rate is computed from totals summed
/// across segments, never as an average of per-segment rates.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NormalizedStats {
    pub matches: f64,
    pub kills: f64,
    pub deaths: f64,
    pub average_kills: f64,
    pub average_deaths: f64,
    /// `None` when ADR is not applicable (legacy variant).
    pub average_damage: Option<f64>,
    pub win_rate: f64,
    pub average_headshots: f64,
    pub kill_ratio: f64,
    pub kill_deaths: f64,
}

/// Divisor used for the headshot percentage.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HeadshotBasis {
    /// headshots / kills
    #[default]
    Kills,
    /// headshots / matches
    Matches,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    pub headshot_basis: HeadshotBasis,
}

#[derive(Serialize, Clone, Debug)]
pub struct PlayerRecord {
    pub nickname: String,
    pub game: GameVariant,
    pub profile: PlayerProfile,
    /// `None` when the profile loaded but the stats request failed; the card
    /// keeps its header and shows placeholders for every value.
    pub stats: Option<NormalizedStats>,
    pub fetched_at: DateTime<Utc>,
}

impl PlayerRecord {
    #[must_use]
    pub fn has_stats(&self) -> bool {
        self.stats.is_some()
    }

    #[must_use]
    pub fn elo(&self) -> i64 {
        self.profile.elo(self.game)
    }

    /// Prefers the nickname the API returned, which carries the canonical casing.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.profile.nickname.trim().is_empty() {
            &self.nickname
        } else {
            &self.profile.nickname
        }
    }
}
