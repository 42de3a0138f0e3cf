use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Game variants the stats API reports on. `Csgo` is the legacy title.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    #[default]
    Cs2,
    Csgo,
}

impl GameVariant {
    pub const ALL: [GameVariant; 2] = [GameVariant::Cs2, GameVariant::Csgo];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameVariant::Cs2 => "cs2",
            GameVariant::Csgo => "csgo",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            GameVariant::Cs2 => "CS2",
            GameVariant::Csgo => "CS:GO",
        }
    }

    /// The legacy API does not report extended-stat rounds reliably, so ADR
    /// is not applicable there.
    #[must_use]
    pub fn is_legacy(self) -> bool {
        matches!(self, GameVariant::Csgo)
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cs2" => Ok(GameVariant::Cs2),
            "csgo" => Ok(GameVariant::Csgo),
            other => Err(format!("unknown game variant '{other}', expected cs2 or csgo")),
        }
    }
}
