//! Cache policy registration, precedence and provider enforcement.

use std::sync::Arc;

use chrono::Duration;
use serde_json::json;

use rowmap::access::{AccessError, DataAccess};
use rowmap::cache::{CacheError, CacheEngine, CachePolicy, MemoryCacheStore};
use rowmap::result_set::MemoryRows;

use crate::fixtures::President;

#[test]
fn precedence_is_custom_then_global_then_infinite() {
    let engine = CacheEngine::new(Arc::new(MemoryCacheStore::with_defaults()));

    let global = CachePolicy::absolute(Duration::hours(1));
    let c1 = CachePolicy::sliding(Duration::minutes(10));
    let c2 = CachePolicy::sliding(Duration::minutes(20));

    engine.register_global_policy(global.clone()).unwrap();
    engine.register_policy("^a.*", c1.clone()).unwrap();
    engine.register_policy("^ab.*", c2.clone()).unwrap();

    // First matching custom policy in registration order wins.
    assert_eq!(engine.resolve("abc"), c1);
    // No custom match falls back to the global policy.
    assert_eq!(engine.resolve("xyz"), global);
}

#[test]
fn without_global_policy_unmatched_keys_get_infinite_expiration() {
    let engine = CacheEngine::new(Arc::new(MemoryCacheStore::with_defaults()));
    engine
        .register_policy("^a.*", CachePolicy::sliding(Duration::minutes(10)))
        .unwrap();

    assert_eq!(engine.resolve("xyz"), CachePolicy::infinite());
}

#[test]
fn contradictory_policy_is_rejected_and_never_registered() {
    let engine = CacheEngine::new(Arc::new(MemoryCacheStore::with_defaults()));
    let contradictory = CachePolicy {
        absolute_expiration: Some(Duration::minutes(5)),
        sliding_expiration: Some(Duration::minutes(1)),
        infinite_expiration: false,
    };

    let result = engine.register_policy("^reports.*", contradictory);
    assert!(matches!(result, Err(CacheError::InvalidPolicy { .. })));

    // The registry is untouched: the key resolves to the built-in default.
    assert_eq!(engine.resolve("reports.daily"), CachePolicy::infinite());
}

#[test]
fn cache_key_without_provider_is_a_configuration_error() {
    let access = DataAccess::new();
    let mut source = MemoryRows::new(["Id", "FirstName", "LastName", "Fans", "IsHonest"])
        .push_row(vec![json!(1), json!("A"), json!("B"), json!(0), json!(false)]);

    let err = access
        .select("dbo.GetPresidents")
        .cache_key("presidents")
        .fetch::<President, _>(&mut source)
        .unwrap_err();

    assert!(matches!(err, AccessError::Cache(CacheError::NoProvider)));
}

#[test]
fn cache_management_without_provider_fails_the_same_way() {
    let access = DataAccess::new();

    assert!(matches!(
        access.cache().invalidate("presidents"),
        Err(CacheError::NoProvider)
    ));
    assert!(matches!(
        access.cache().reset(),
        Err(CacheError::NoProvider)
    ));
}
