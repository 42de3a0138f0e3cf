mod common;

use common::{FakeFaceitClient, kills_segment};
use futures::future::join_all;
use roster_cards::controller::faceit::PlayerRecordCache;
use roster_cards::model::{AggregationOptions, GameVariant};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test4_second_get_is_served_from_cache() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeFaceitClient::new().with_player("2Papa", 1200, kills_segment(10));
    let cache = PlayerRecordCache::new(AggregationOptions::default());

    let first = cache.get("2Papa", GameVariant::Cs2, &api).await?;
    let second = cache.get("2Papa", GameVariant::Cs2, &api).await?;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(api.profile_calls(), 1);
    assert_eq!(api.stats_calls(), 1);
    assert!(cache.contains("2Papa", GameVariant::Cs2).await);
    assert_eq!(cache.len().await, 1);
    assert_eq!(first.stats.as_ref().map(|s| s.kills), Some(10.0));
    Ok(())
}

#[tokio::test]
async fn test4_variants_are_cached_separately() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeFaceitClient::new().with_player("li5t_", 1600, kills_segment(10));
    let cache = PlayerRecordCache::new(AggregationOptions::default());

    let cs2 = cache.get("li5t_", GameVariant::Cs2, &api).await?;
    let csgo = cache.get("li5t_", GameVariant::Csgo, &api).await?;

    assert_eq!(api.profile_calls(), 2);
    assert_eq!(cache.len().await, 2);
    assert_eq!(cs2.stats.as_ref().and_then(|s| s.average_damage), Some(10.0));
    assert_eq!(csgo.stats.as_ref().and_then(|s| s.average_damage), None);
    assert!(csgo.has_stats());
    assert_eq!(cs2.elo(), 1600);
    assert_eq!(csgo.elo(), 1500);
    Ok(())
}

#[tokio::test]
async fn test4_concurrent_misses_share_one_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeFaceitClient::new()
        .with_player("TiltGod_", 900, kills_segment(10))
        .with_delay(Duration::from_millis(50));
    let cache = PlayerRecordCache::new(AggregationOptions::default());

    let results = join_all((0..5).map(|_| cache.get("TiltGod_", GameVariant::Cs2, &api))).await;

    for result in &results {
        assert!(result.is_ok());
    }
    assert_eq!(api.profile_calls(), 1);
    assert_eq!(api.stats_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test4_failures_are_not_cached() {
    let api = FakeFaceitClient::new().with_failing("prankeRX");
    let cache = PlayerRecordCache::new(AggregationOptions::default());

    assert!(cache.get("prankeRX", GameVariant::Cs2, &api).await.is_err());
    assert!(cache.is_empty().await);
    assert!(!cache.contains("prankeRX", GameVariant::Cs2).await);

    assert!(cache.get("prankeRX", GameVariant::Cs2, &api).await.is_err());
    assert_eq!(api.profile_calls(), 2);
    assert_eq!(api.stats_calls(), 0);
}

#[tokio::test]
async fn test4_profile_without_stats_is_returned_but_not_cached()
-> Result<(), Box<dyn std::error::Error>> {
    let api = FakeFaceitClient::new().with_profile_only("li5t_", 1600);
    let cache = PlayerRecordCache::new(AggregationOptions::default());

    let record = cache.get("li5t_", GameVariant::Csgo, &api).await?;
    assert!(!record.has_stats());
    assert_eq!(record.display_name(), "li5t_");
    assert_eq!(record.elo(), 1500);
    assert!(!cache.contains("li5t_", GameVariant::Csgo).await);

    cache.get("li5t_", GameVariant::Csgo, &api).await?;
    assert_eq!(api.profile_calls(), 2);
    assert_eq!(api.stats_calls(), 2);
    assert!(cache.is_empty().await);
    Ok(())
}
