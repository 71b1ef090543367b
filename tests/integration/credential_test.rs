// Credential resolution integration tests
use crate::mocks::SpyCredentialStore;
use pip_components::{
    Component, ComponentError, ConfigParams, Configurable, CredentialParams, CredentialResolver,
    CredentialStore, Descriptor, MemoryCredentialStore, References,
};
use std::sync::Arc;

fn store_locator() -> Descriptor {
    Descriptor::new("pip-services", "credential-store", "memory", "default", "1.0")
}

#[test]
fn test_field_fallbacks() {
    let credential = CredentialParams::from_string("user=jdoe;pass=pwd;client_id=id;secret_key=sk");
    assert_eq!(credential.username(), Some("jdoe"));
    assert_eq!(credential.password(), Some("pwd"));
    assert_eq!(credential.access_id(), Some("id"));
    assert_eq!(credential.access_key(), Some("sk"));
}

#[test]
fn test_local_credential_skips_store() {
    let spy = Arc::new(SpyCredentialStore::new());
    let references = Arc::new(References::new());
    references.put(store_locator(), Component::CredentialStore(spy.clone()));

    let mut resolver = CredentialResolver::new().with_references(references);
    resolver.configure(&ConfigParams::from_tuples(&[
        ("credentials.a.store_key", "db"),
        ("credentials.b.username", "local"),
    ]));

    assert_eq!(resolver.lookup(None).unwrap().unwrap().username(), Some("local"));
    assert_eq!(spy.lookups(), 0);
}

#[test]
fn test_lookup_from_configured_store() {
    let store = Arc::new(MemoryCredentialStore::new());
    store.configure(&ConfigParams::from_tuples(&[("db", "username=admin;password=secret")]));

    let references = Arc::new(References::new());
    references.put(store_locator(), Component::CredentialStore(store.clone()));

    let mut resolver = CredentialResolver::new().with_references(references);
    resolver.configure(&ConfigParams::from_tuples(&[("credential.store_key", "db")]));

    let credential = resolver.lookup(None).unwrap().unwrap();
    assert_eq!(credential.username(), Some("admin"));
    assert_eq!(credential.password(), Some("secret"));

    store.store(None, "db", None).unwrap();
    assert_eq!(resolver.lookup(None).unwrap(), None);
}

#[test]
fn test_missing_store_is_reference_error() {
    let mut resolver = CredentialResolver::new().with_references(Arc::new(References::new()));
    resolver.configure(&ConfigParams::from_tuples(&[("credential.store_key", "db")]));

    assert!(matches!(resolver.lookup(None), Err(ComponentError::ReferenceMissing(_))));
}
