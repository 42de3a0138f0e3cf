use super::sanitize::sanitize;
use crate::model::{
    AggregationOptions, GameVariant, HeadshotBasis, NormalizedStats, RawStatsPayload, Segment,
};

pub const KILLS: &str = "Kills";
pub const DEATHS: &str = "Deaths";
pub const MATCHES: &str = "Matches";
pub const ROUNDS: &str = "Rounds";
pub const WINS: &str = "Wins";
pub const HEADSHOTS: &str = "Headshots";
pub const TOTAL_DAMAGE: &str = "Total Damage";
pub const KD_RATIO: &str = "K/D Ratio";
pub const KR_RATIO: &str = "K/R Ratio";
pub const EXTENDED_ROUNDS: &str = "Total Rounds with extended stats";

/// Per-metric sums across every segment of a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentTotals {
    pub kills: f64,
    pub deaths: f64,
    pub matches: f64,
    pub rounds: f64,
    pub wins: f64,
    pub headshots: f64,
    pub damage: f64,
    /// Sum of the per-segment K/D ratios, not a recomputed ratio.
    pub kd_ratio_sum: f64,
    /// Sum of the per-segment K/R ratios, not a recomputed ratio.
    pub kr_ratio_sum: f64,
    pub extended_rounds: f64,
}

#[must_use]
pub fn sum_segments(segments: &[Segment]) -> SegmentTotals {
    segments
        .iter()
        .fold(SegmentTotals::default(), |mut totals, segment| {
            totals.kills += sanitize(segment.stat(KILLS));
            totals.deaths += sanitize(segment.stat(DEATHS));
            totals.matches += sanitize(segment.stat(MATCHES));
            totals.rounds += sanitize(segment.stat(ROUNDS));
            totals.wins += sanitize(segment.stat(WINS));
            totals.headshots += sanitize(segment.stat(HEADSHOTS));
            totals.damage += sanitize(segment.stat(TOTAL_DAMAGE));
            totals.kd_ratio_sum += sanitize(segment.stat(KD_RATIO));
            totals.kr_ratio_sum += sanitize(segment.stat(KR_RATIO));
            totals.extended_rounds += sanitize(segment.stat(EXTENDED_ROUNDS));
            totals
        })
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn fraction(numerator: f64, denominator: f64) -> f64 {
    ratio(numerator, denominator).clamp(0.0, 1.0)
}

/// Normalizes a stats payload.
///
/// K/D and K/R divide the *sum of per-segment ratios* by the total match
/// count. The numbers this produces are not real K/D or K/R figures when a
/// player has several segments, but they are what the cards have always
/// shown, so they are kept.
#[must_use]
pub fn aggregate_stats(
    payload: &RawStatsPayload,
    game: GameVariant,
    options: AggregationOptions,
) -> NormalizedStats {
    let totals = sum_segments(payload.segments());

    let headshot_divisor = match options.headshot_basis {
        HeadshotBasis::Kills => totals.kills,
        HeadshotBasis::Matches => totals.matches,
    };

    let average_damage = if game.is_legacy() {
        None
    } else {
        Some(ratio(totals.damage, totals.extended_rounds))
    };

    NormalizedStats {
        matches: totals.matches,
        kills: totals.kills,
        deaths: totals.deaths,
        average_kills: ratio(totals.kills, totals.matches),
        average_deaths: ratio(totals.deaths, totals.matches),
        average_damage,
        win_rate: fraction(totals.wins, totals.matches),
        average_headshots: fraction(totals.headshots, headshot_divisor),
        kill_ratio: ratio(totals.kr_ratio_sum, totals.matches),
        kill_deaths: ratio(totals.kd_ratio_sum, totals.matches),
    }
}
