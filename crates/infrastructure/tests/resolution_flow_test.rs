//! End-to-end run of the three roles over loopback UDP.

use minidns_application::{
    AuthoritativeEngine, ClientEngine, RecursiveEngine, ResolveOutcome, RrTable,
};
use minidns_domain::{RecordType, RECORD_NOT_FOUND};
use minidns_infrastructure::{server, UdpEndpoint, UdpForwarder};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(100);

/// Spawns an authoritative server seeded with the test-case record
/// and returns its address plus a handle on its table.
async fn spawn_authoritative() -> (SocketAddr, Arc<RrTable>) {
    let table = Arc::new(RrTable::new());
    table.insert("www.csusm.edu", RecordType::A, "144.37.5.45", None, true);

    let endpoint = UdpEndpoint::ephemeral(TIMEOUT).await.unwrap();
    let addr = endpoint.local_addr().unwrap();
    let engine = AuthoritativeEngine::new(Arc::clone(&table));
    tokio::spawn(async move {
        let _ = server::run_authoritative(&endpoint, &engine, || {}).await;
    });
    (addr, table)
}

/// Spawns a local resolver forwarding to `upstream`.
async fn spawn_resolver(upstream: SocketAddr) -> (SocketAddr, Arc<RrTable>) {
    let table = Arc::new(RrTable::new());
    let endpoint = UdpEndpoint::ephemeral(TIMEOUT).await.unwrap();
    let addr = endpoint.local_addr().unwrap();
    let forwarder = Arc::new(UdpForwarder::new(upstream, TIMEOUT));
    let engine = RecursiveEngine::new(Arc::clone(&table), forwarder);
    tokio::spawn(async move {
        let _ = server::run_resolver(&endpoint, &engine, || {}).await;
    });
    (addr, table)
}

fn client(resolver_addr: SocketAddr) -> (Arc<RrTable>, ClientEngine) {
    let table = Arc::new(RrTable::new());
    let forwarder = Arc::new(UdpForwarder::new(resolver_addr, TIMEOUT));
    let engine = ClientEngine::new(Arc::clone(&table), forwarder);
    (table, engine)
}

#[tokio::test]
async fn test_miss_forward_cache_then_pure_local_hit() {
    let (authoritative_addr, _auth_table) = spawn_authoritative().await;
    let (resolver_addr, resolver_table) = spawn_resolver(authoritative_addr).await;
    let (client_table, engine) = client(resolver_addr);

    // First query walks the whole hierarchy and caches at every tier.
    let outcome = engine
        .resolve("www.csusm.edu", Some(RecordType::A))
        .await
        .unwrap();
    match outcome {
        ResolveOutcome::Answered(record) => assert_eq!(record.result, "144.37.5.45"),
        other => panic!("expected Answered, got {other:?}"),
    }

    let resolver_cached = resolver_table.lookup("www.csusm.edu", RecordType::A).unwrap();
    assert!(!resolver_cached.is_static);
    let client_cached = client_table.lookup("www.csusm.edu", RecordType::A).unwrap();
    assert!(!client_cached.is_static);

    // The repeat is answered entirely from the client's cache.
    let outcome = engine
        .resolve("www.csusm.edu", Some(RecordType::A))
        .await
        .unwrap();
    assert!(matches!(outcome, ResolveOutcome::CacheHit(_)));
}

#[tokio::test]
async fn test_not_found_propagates_without_caching_anywhere() {
    let (authoritative_addr, auth_table) = spawn_authoritative().await;
    let (resolver_addr, resolver_table) = spawn_resolver(authoritative_addr).await;
    let (client_table, engine) = client(resolver_addr);

    let outcome = engine
        .resolve("nowhere.example", Some(RecordType::A))
        .await
        .unwrap();

    assert_eq!(outcome, ResolveOutcome::NotFound);
    assert!(client_table.is_empty());
    assert!(resolver_table.is_empty());
    assert_eq!(auth_table.len(), 1);
}

#[tokio::test]
async fn test_authoritative_answers_direct_queries() {
    let (authoritative_addr, _auth_table) = spawn_authoritative().await;

    let endpoint = UdpEndpoint::ephemeral(TIMEOUT).await.unwrap();
    endpoint
        .send("5,0000,www.csusm.edu,8,,,,", authoritative_addr)
        .await
        .unwrap();
    let (line, _from) = endpoint.recv().await.unwrap();
    assert_eq!(line, "5,0001,www.csusm.edu,8,www.csusm.edu,8,None,144.37.5.45");

    endpoint
        .send("6,0000,missing.example,8,,,,", authoritative_addr)
        .await
        .unwrap();
    let (line, _from) = endpoint.recv().await.unwrap();
    assert_eq!(
        line,
        format!("6,0001,missing.example,8,missing.example,8,0,{RECORD_NOT_FOUND}")
    );
}

#[tokio::test]
async fn test_malformed_datagrams_are_dropped_and_the_loop_survives() {
    let (authoritative_addr, _auth_table) = spawn_authoritative().await;

    let endpoint = UdpEndpoint::ephemeral(TIMEOUT).await.unwrap();
    endpoint.send("garbage", authoritative_addr).await.unwrap();
    endpoint
        .send("7,0000,www.csusm.edu,8,,,,", authoritative_addr)
        .await
        .unwrap();

    // Only the well-formed query gets a reply.
    let (line, _from) = endpoint.recv().await.unwrap();
    assert!(line.starts_with("7,0001,www.csusm.edu"));
}
