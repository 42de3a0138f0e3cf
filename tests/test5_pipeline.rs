mod common;

use common::{FakeFaceitClient, kills_segment, roster};
use roster_cards::controller::cards::load_cards;
use roster_cards::controller::faceit::{PlayerRecordCache, get_player_data};
use roster_cards::model::{AggregationOptions, CardSelection, GameVariant, Metric};
use std::collections::HashMap;
use std::time::Duration;

#[tokio::test]
async fn test5_failed_player_does_not_block_others() {
    let api = FakeFaceitClient::new()
        .with_player("2Papa", 1200, kills_segment(10))
        .with_player("TiltGod_", 2100, kills_segment(25))
        .with_failing("prankeRX")
        .with_delay(Duration::from_millis(10));
    let cache = PlayerRecordCache::new(AggregationOptions::default());
    let roster = roster(&["2Papa", "prankeRX", "TiltGod_"]);

    let loaded = load_cards(&api, &cache, &roster, &CardSelection::default()).await;

    assert_eq!(loaded.cards.len(), 3);
    let first = loaded.cards[0].record.as_ref().expect("2Papa loads");
    assert_eq!(first.stats.as_ref().map(|s| s.kills), Some(10.0));
    assert!(loaded.cards[1].record.is_none());
    let third = loaded.cards[2].record.as_ref().expect("TiltGod_ loads");
    assert_eq!(third.stats.as_ref().map(|s| s.kills), Some(25.0));

    assert_eq!(loaded.best.winners(Metric::Kills), vec!["player3"]);
    // equal matches on both loaded cards, the failed card never wins
    assert_eq!(loaded.best.winners(Metric::Matches), vec!["player1", "player3"]);
}

#[tokio::test]
async fn test5_get_player_data_builds_record() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeFaceitClient::new().with_player("2Papa", 1200, kills_segment(10));

    let record = get_player_data(&api, "2Papa", GameVariant::Cs2, AggregationOptions::default())
        .await?;

    assert_eq!(record.nickname, "2Papa");
    assert_eq!(record.display_name(), "2Papa");
    assert_eq!(record.game, GameVariant::Cs2);
    assert_eq!(record.elo(), 1200);
    assert_eq!(record.profile.player_id, "id-2Papa");
    assert_eq!(record.stats.as_ref().map(|s| s.average_kills), Some(5.0));
    Ok(())
}

#[tokio::test]
async fn test5_selection_switches_one_card() {
    let api = FakeFaceitClient::new()
        .with_player("2Papa", 1200, kills_segment(10))
        .with_player("li5t_", 1600, kills_segment(10));
    let cache = PlayerRecordCache::new(AggregationOptions::default());
    let roster = roster(&["2Papa", "li5t_"]);

    let query = HashMap::from([("player2".to_string(), "csgo".to_string())]);
    let selection = CardSelection::from_query(&query, &roster).expect("valid selection");
    let loaded = load_cards(&api, &cache, &roster, &selection).await;

    assert_eq!(loaded.cards[0].game, GameVariant::Cs2);
    assert_eq!(loaded.cards[1].game, GameVariant::Csgo);
    let legacy = loaded.cards[1].record.as_ref().expect("li5t_ loads");
    assert_eq!(legacy.stats.as_ref().and_then(|s| s.average_damage), None);
    assert_eq!(loaded.best.winners(Metric::Adr), vec!["player1"]);
}

#[test]
fn test5_selection_query_round_trip() {
    let roster = roster(&["2Papa", "li5t_"]);

    let bad = HashMap::from([("player1".to_string(), "quake".to_string())]);
    assert!(CardSelection::from_query(&bad, &roster).is_err());

    let selection = CardSelection::from_query(&HashMap::new(), &roster).expect("defaults");
    assert_eq!(selection.to_query(), "player1=cs2&player2=cs2");
    assert_eq!(
        selection.with("player1", GameVariant::Csgo).to_query(),
        "player1=csgo&player2=cs2"
    );
    assert_eq!(selection.variant_for("player1"), GameVariant::Cs2);
}

#[tokio::test]
async fn test5_missing_stats_keep_the_profile() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeFaceitClient::new()
        .with_player("2Papa", 1200, kills_segment(10))
        .with_profile_only("li5t_", 3000);

    let record =
        get_player_data(&api, "li5t_", GameVariant::Cs2, AggregationOptions::default()).await?;
    assert_eq!(record.profile.player_id, "id-li5t_");
    assert!(record.stats.is_none());

    let cache = PlayerRecordCache::new(AggregationOptions::default());
    let roster = roster(&["2Papa", "li5t_"]);
    let loaded = load_cards(&api, &cache, &roster, &CardSelection::default()).await;
    assert!(loaded.cards[1].record.is_some());
    // a card without stats counts as 0 everywhere
    assert_eq!(loaded.best.winners(Metric::Kills), vec!["player1"]);
    assert!(loaded.best.iter().all(|(card_id, _)| card_id != "player2"));
    Ok(())
}
