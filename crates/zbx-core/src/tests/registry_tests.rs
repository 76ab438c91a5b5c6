//! Tests for accessor memoization

use std::sync::Arc;

use super::fixtures::MockServer;
use crate::{ObjectApi, ObjectKind};
use serde_json::json;

#[tokio::test]
async fn test_memoized_kinds_return_same_accessor() {
    let server = MockServer::replying(json!([])).await;
    let client = server.client();

    for &kind in ObjectKind::ALL.iter().filter(|k| k.memoized()) {
        let first = client.object(kind);
        let second = client.object(kind);
        assert!(Arc::ptr_eq(&first, &second), "{kind} should be memoized");
    }
    assert_eq!(client.registry().cached(), ObjectKind::ALL.len() - 2);
}

#[tokio::test]
async fn test_item_kinds_are_fresh_but_share_connection() {
    let server = MockServer::replying(json!([])).await;
    let client = server.client();

    for kind in [ObjectKind::Item, ObjectKind::ItemPrototype] {
        let first = client.object(kind);
        let second = client.object(kind);
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(first.connection(), second.connection()));
        assert!(!client.registry().is_cached(kind));
    }
}

#[tokio::test]
async fn test_fresh_item_accessors_restart_ids() {
    let server = MockServer::replying(json!([])).await;
    let client = server.client();

    client.object(ObjectKind::Item).dispatch("get", json!({})).await.unwrap();
    client.object(ObjectKind::Item).dispatch("get", json!({})).await.unwrap();

    let ids: Vec<u64> = server.requests().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![2, 2]);
}

#[tokio::test]
async fn test_clients_do_not_share_accessors() {
    let server = MockServer::replying(json!([])).await;
    let a = server.client();
    let b = server.client();

    let host_a = a.host();
    let host_b = b.host();
    assert!(!std::ptr::eq(host_a.accessor(), host_b.accessor()));
    assert!(!Arc::ptr_eq(a.connection(), b.connection()));
}

#[tokio::test]
async fn test_typed_and_untyped_access_agree() {
    let server = MockServer::replying(json!([])).await;
    let client = server.client();

    let typed = client.template();
    let untyped = client.object(ObjectKind::Template);
    assert!(std::ptr::eq(typed.accessor(), Arc::as_ptr(&untyped)));
}
