use minidns_application::{ClientEngine, ResolveOutcome, RrTable};
use minidns_domain::{Answer, RecordType};
use std::sync::Arc;

mod helpers;
use helpers::MockForwarder;

fn engine_with_resolver() -> (Arc<RrTable>, Arc<MockForwarder>, ClientEngine) {
    let table = Arc::new(RrTable::new());
    let resolver = Arc::new(MockForwarder::new());
    let engine = ClientEngine::new(Arc::clone(&table), resolver.clone());
    (table, resolver, engine)
}

fn csusm_answer() -> Answer {
    Answer {
        name: "www.csusm.edu".to_string(),
        rtype: Some(RecordType::A),
        ttl: Some(60),
        result: "144.37.5.45".to_string(),
    }
}

#[tokio::test]
async fn test_miss_queries_resolver_and_caches_answer() {
    let (table, resolver, engine) = engine_with_resolver();
    resolver.set_answer("www.csusm.edu", csusm_answer());

    let outcome = engine
        .resolve("www.csusm.edu", Some(RecordType::A))
        .await
        .unwrap();

    match outcome {
        ResolveOutcome::Answered(record) => {
            assert_eq!(record.result, "144.37.5.45");
            assert!(!record.is_static);
        }
        other => panic!("expected Answered, got {other:?}"),
    }
    assert_eq!(table.len(), 1);
}

#[tokio::test]
async fn test_second_lookup_hits_local_cache() {
    let (_table, resolver, engine) = engine_with_resolver();
    resolver.set_answer("www.csusm.edu", csusm_answer());

    engine
        .resolve("www.csusm.edu", Some(RecordType::A))
        .await
        .unwrap();
    let outcome = engine
        .resolve("www.csusm.edu", Some(RecordType::A))
        .await
        .unwrap();

    assert!(matches!(outcome, ResolveOutcome::CacheHit(_)));
    assert_eq!(resolver.forward_count(), 1);
}

#[tokio::test]
async fn test_not_found_adds_nothing_to_the_cache() {
    let (table, _resolver, engine) = engine_with_resolver();

    let outcome = engine
        .resolve("missing.example", Some(RecordType::A))
        .await
        .unwrap();

    assert_eq!(outcome, ResolveOutcome::NotFound);
    assert!(table.is_empty());
}

#[tokio::test]
async fn test_transaction_id_advances_once_per_request() {
    let (_table, resolver, engine) = engine_with_resolver();
    resolver.set_answer("www.csusm.edu", csusm_answer());

    engine
        .resolve("www.csusm.edu", Some(RecordType::A))
        .await
        .unwrap();
    assert_eq!(resolver.last_query().unwrap().transaction_id, 1);

    // A cache hit still consumes a transaction id.
    engine
        .resolve("www.csusm.edu", Some(RecordType::A))
        .await
        .unwrap();

    engine
        .resolve("missing.example", Some(RecordType::A))
        .await
        .unwrap();
    assert_eq!(resolver.last_query().unwrap().transaction_id, 3);
}

#[tokio::test]
async fn test_omitted_type_defaults_to_a() {
    let (_table, resolver, engine) = engine_with_resolver();

    engine.resolve("www.csusm.edu", None).await.unwrap();

    let sent = resolver.last_query().unwrap();
    assert_eq!(sent.question.qtype, Some(RecordType::A));
}
