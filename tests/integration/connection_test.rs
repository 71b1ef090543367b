// Connection resolution integration tests
use crate::mocks::{FailingDiscovery, SpyDiscovery};
use pip_components::{
    Component, ComponentError, ConfigParams, ConnectionParams, ConnectionResolver, Descriptor,
    Discovery, References,
};
use std::sync::Arc;

fn discovery_locator(name: &str) -> Descriptor {
    Descriptor::new("pip-services", "discovery", "memory", name, "1.0")
}

fn references_with(discovery: Arc<dyn Discovery>) -> Arc<References> {
    Arc::new(References::from_tuples(vec![(
        discovery_locator("default"),
        Component::Discovery(discovery),
    )]))
}

// ============================================================================
// Short-circuit
// ============================================================================

#[test]
fn test_local_connection_skips_discovery() {
    let spy = Arc::new(SpyDiscovery::new());
    let mut resolver = ConnectionResolver::new().with_references(references_with(spy.clone()));
    resolver.configure(&ConfigParams::from_tuples(&[
        ("connections.remote.discovery_key", "svc"),
        ("connections.local.host", "localhost"),
        ("connections.local.port", "3000"),
    ]));

    let connection = resolver.resolve(None).unwrap().unwrap();
    assert_eq!(connection.host(), Some("localhost"));
    assert_eq!(connection.port(), 3000);
    assert_eq!(spy.calls(), 0);
}

// ============================================================================
// Indirection
// ============================================================================

#[test]
fn test_discovery_result_is_merged() {
    let spy = Arc::new(SpyDiscovery::new());
    spy.register(None, "svc", ConnectionParams::from_string("host=10.0.0.1;port=8080")).unwrap();

    let mut resolver = ConnectionResolver::new().with_references(references_with(spy.clone()));
    resolver.configure(&ConfigParams::from_tuples(&[
        ("connection.discovery_key", "svc"),
        ("connection.protocol", "http"),
    ]));

    let connection = resolver.resolve(Some("123")).unwrap().unwrap();
    assert_eq!(connection.host(), Some("10.0.0.1"));
    assert_eq!(connection.port(), 8080);
    assert_eq!(connection.protocol(), Some("http"));
    assert_eq!(connection.discovery_key(), Some("svc"));
}

#[test]
fn test_discovered_ip_replaces_configured_host() {
    let spy = Arc::new(SpyDiscovery::new());
    spy.register(None, "svc", ConnectionParams::from_string("ip=10.0.0.1;port=8080")).unwrap();

    let mut resolver = ConnectionResolver::new().with_references(references_with(spy.clone()));
    resolver.configure(&ConfigParams::from_tuples(&[
        ("connection.discovery_key", "svc"),
        ("connection.host", "stale.local"),
    ]));

    let connection = resolver.resolve(None).unwrap().unwrap();
    assert_eq!(connection.host(), Some("10.0.0.1"));
    assert_eq!(connection.port(), 8080);
}

#[test]
fn test_second_discovery_answers() {
    let empty = Arc::new(SpyDiscovery::new());
    let filled = Arc::new(SpyDiscovery::new());
    filled.register(None, "svc", ConnectionParams::from_string("host=b")).unwrap();

    let references = Arc::new(References::new());
    references.put(discovery_locator("first"), Component::Discovery(empty.clone()));
    references.put(discovery_locator("second"), Component::Discovery(filled.clone()));

    let mut resolver = ConnectionResolver::new().with_references(references);
    resolver.add(ConnectionParams::from_tuples(&[("discovery_key", "svc")]));

    let connection = resolver.resolve(None).unwrap().unwrap();
    assert_eq!(connection.host(), Some("b"));
    assert_eq!(empty.calls(), 1);
}

#[test]
fn test_missing_discovery_is_reference_error() {
    let mut resolver = ConnectionResolver::new().with_references(Arc::new(References::new()));
    resolver.configure(&ConfigParams::from_tuples(&[("connection.discovery_key", "svc")]));

    assert!(matches!(resolver.resolve(None), Err(ComponentError::ReferenceMissing(_))));
}

#[test]
fn test_discovery_error_propagates() {
    let mut resolver = ConnectionResolver::new().with_references(references_with(Arc::new(FailingDiscovery)));
    resolver.add(ConnectionParams::from_tuples(&[("discovery_key", "svc")]));

    assert_eq!(
        resolver.resolve(None).unwrap_err(),
        ComponentError::Service("discovery is down".to_string())
    );
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_then_resolve_all() {
    let spy = Arc::new(SpyDiscovery::new());
    let mut resolver = ConnectionResolver::new().with_references(references_with(spy.clone()));

    let connection = ConnectionParams::from_string("discovery_key=svc;host=h1;port=1");
    assert!(resolver.register(None, connection).unwrap());

    let all = resolver.resolve_all(None).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].host(), Some("h1"));
}
