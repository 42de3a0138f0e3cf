use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::{CardData, Metric, NormalizedStats};

/// The (card, metric) pairs holding the best value of the roster.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BestMarks {
    marks: BTreeSet<(String, Metric)>,
}

impl BestMarks {
    #[must_use]
    pub fn is_best(&self, card_id: &str, metric: Metric) -> bool {
        self.marks.contains(&(card_id.to_string(), metric))
    }

    #[must_use]
    pub fn winners(&self, metric: Metric) -> Vec<&str> {
        self.marks
            .iter()
            .filter(|(_, m)| *m == metric)
            .map(|(card_id, _)| card_id.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Metric)> {
        self.marks.iter().map(|(card_id, m)| (card_id.as_str(), *m))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// For every compared metric, marks each card holding the maximum. Ties all
/// win; nothing is marked when the maximum is 0. Cards without stats count
/// as 0.
#[must_use]
pub fn highlight_best_values(cards: &[(&str, Option<&NormalizedStats>)]) -> BestMarks {
    let mut best = BestMarks::default();

    for metric in Metric::COMPARED {
        let values: Vec<(&str, i64)> = cards
            .iter()
            .map(|(card_id, stats)| (*card_id, stats.map_or(0, |s| metric.comparable(s))))
            .collect();

        let Some(max) = values.iter().map(|(_, v)| *v).max() else {
            continue;
        };
        if max <= 0 {
            continue;
        }

        for (card_id, value) in values {
            if value == max {
                best.marks.insert((card_id.to_string(), metric));
            }
        }
    }

    best
}

#[must_use]
pub fn highlight_best_stats(cards: &[CardData]) -> BestMarks {
    let values: Vec<(&str, Option<&NormalizedStats>)> = cards
        .iter()
        .map(|card| {
            (
                card.entry.card_id.as_str(),
                card.record.as_deref().and_then(|r| r.stats.as_ref()),
            )
        })
        .collect();
    highlight_best_values(&values)
}
