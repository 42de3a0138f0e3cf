use serde::{Deserialize, Serialize};

use crate::model::NormalizedStats;

/// Value slots shown on a card.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Matches,
    Kills,
    Deaths,
    KillDeaths,
    KillRounds,
    Adr,
    WinRate,
    Headshots,
    AvgKills,
    AvgDeaths,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Count,
    Decimal,
    Percent,
}

impl Metric {
    /// Display order on a card.
    pub const DISPLAYED: [Metric; 10] = [
        Metric::Matches,
        Metric::Kills,
        Metric::Deaths,
        Metric::KillDeaths,
        Metric::KillRounds,
        Metric::Adr,
        Metric::WinRate,
        Metric::Headshots,
        Metric::AvgKills,
        Metric::AvgDeaths,
    ];

    /// Metrics that take part in the best-value comparison. Deaths is shown
    /// but never compared.
    pub const COMPARED: [Metric; 9] = [
        Metric::Matches,
        Metric::Kills,
        Metric::Adr,
        Metric::KillDeaths,
        Metric::KillRounds,
        Metric::WinRate,
        Metric::Headshots,
        Metric::AvgKills,
        Metric::AvgDeaths,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Matches => "Matches",
            Metric::Kills => "Kills",
            Metric::Deaths => "Deaths",
            Metric::KillDeaths => "K/D",
            Metric::KillRounds => "K/R",
            Metric::Adr => "ADR",
            Metric::WinRate => "Win Rate",
            Metric::Headshots => "HS%",
            Metric::AvgKills => "Avg Kills",
            Metric::AvgDeaths => "Avg Deaths",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Metric::Matches => "matches",
            Metric::Kills => "kills",
            Metric::Deaths => "deaths",
            Metric::KillDeaths => "kd",
            Metric::KillRounds => "kr",
            Metric::Adr => "adr",
            Metric::WinRate => "win-rate",
            Metric::Headshots => "hs",
            Metric::AvgKills => "avg-kills",
            Metric::AvgDeaths => "avg-deaths",
        }
    }

    fn format_kind(self) -> Format {
        match self {
            Metric::Matches | Metric::Kills | Metric::Deaths => Format::Count,
            Metric::WinRate | Metric::Headshots => Format::Percent,
            _ => Format::Decimal,
        }
    }

    /// Value as displayed: fractions are scaled to percent. `None` means the
    /// metric does not apply to this record.
    #[must_use]
    pub fn value(self, stats: &NormalizedStats) -> Option<f64> {
        match self {
            Metric::Matches => Some(stats.matches),
            Metric::Kills => Some(stats.kills),
            Metric::Deaths => Some(stats.deaths),
            Metric::KillDeaths => Some(stats.kill_deaths),
            Metric::KillRounds => Some(stats.kill_ratio),
            Metric::Adr => stats.average_damage,
            Metric::WinRate => Some(stats.win_rate * 100.0),
            Metric::Headshots => Some(stats.average_headshots * 100.0),
            Metric::AvgKills => Some(stats.average_kills),
            Metric::AvgDeaths => Some(stats.average_deaths),
        }
    }

    fn display_number(self, v: f64) -> String {
        match self.format_kind() {
            Format::Count => format!("{}", v.round()),
            Format::Decimal | Format::Percent => format!("{v:.2}"),
        }
    }

    #[must_use]
    pub fn format(self, stats: &NormalizedStats) -> String {
        match self.value(stats) {
            None => "N/A".to_string(),
            Some(v) if self.format_kind() == Format::Percent => {
                format!("{}%", self.display_number(v))
            }
            Some(v) => self.display_number(v),
        }
    }

    /// The displayed digits read back as an integer ("2.12" is 212, "17" is
    /// 17), so two cards compare equal exactly when they show the same text.
    /// Not-applicable values compare as 0.
    #[must_use]
    pub fn comparable(self, stats: &NormalizedStats) -> i64 {
        let Some(v) = self.value(stats).filter(|v| v.is_finite()) else {
            return 0;
        };
        self.display_number(v)
            .replace('.', "")
            .parse::<i64>()
            .unwrap_or_else(|_| match self.format_kind() {
                Format::Count => v.round() as i64,
                Format::Decimal | Format::Percent => (v * 100.0).round() as i64,
            })
    }
}
