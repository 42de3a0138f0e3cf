use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::model::{GameVariant, PlayerRecord};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub nickname: String,
    pub card_id: String,
}

impl RosterEntry {
    /// Builds entries for bare nicknames with card ids `player1..n`.
    #[must_use]
    pub fn from_nicknames(nicknames: &[String]) -> Vec<RosterEntry> {
        nicknames
            .iter()
            .enumerate()
            .map(|(i, nickname)| RosterEntry {
                nickname: nickname.trim().to_string(),
                card_id: format!("player{}", i + 1),
            })
            .collect()
    }
}

/// Roster loaded from a json file, wrapped so clap treats it as one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster(pub Vec<RosterEntry>);

/// Game variant chosen for each card. Cards without an explicit choice show
/// the default variant.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSelection(BTreeMap<String, GameVariant>);

impl CardSelection {
    /// Reads `<card_id>=<variant>` pairs for the cards in `roster`; other keys
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a card's variant is not a known game variant
    pub fn from_query(
        query: &HashMap<String, String>,
        roster: &[RosterEntry],
    ) -> Result<Self, String> {
        let mut selection = BTreeMap::new();
        for entry in roster {
            let game = match query.get(&entry.card_id) {
                Some(raw) => raw
                    .parse::<GameVariant>()
                    .map_err(|e| format!("card '{}': {e}", entry.card_id))?,
                None => GameVariant::default(),
            };
            selection.insert(entry.card_id.clone(), game);
        }
        Ok(Self(selection))
    }

    #[must_use]
    pub fn variant_for(&self, card_id: &str) -> GameVariant {
        self.0.get(card_id).copied().unwrap_or_default()
    }

    /// Copy of this selection with one card switched.
    #[must_use]
    pub fn with(&self, card_id: &str, game: GameVariant) -> Self {
        let mut next = self.clone();
        next.0.insert(card_id.to_string(), game);
        next
    }

    /// Card ids are restricted to `[A-Za-z0-9_-]` at startup, so no escaping
    /// is needed here.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.0
            .iter()
            .map(|(card_id, game)| format!("{card_id}={game}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// One rendered card. `record` is `None` when the player's profile could not
/// be fetched and the card shows placeholders.
#[derive(Serialize, Clone, Debug)]
pub struct CardData {
    pub entry: RosterEntry,
    pub game: GameVariant,
    pub record: Option<Arc<PlayerRecord>>,
}
