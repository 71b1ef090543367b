// Factory integration tests
use pip_components::{
    ComponentError, ConnectionParams, DefaultComponentsFactory, Descriptor, References,
};

#[test]
fn test_created_components_share_through_references() {
    let factory = DefaultComponentsFactory::new();
    let locator = Descriptor::new("pip-services", "discovery", "memory", "default", "1.0");

    let component = factory.create(&locator).unwrap();
    let references = References::from_tuples(vec![(locator, component)]);

    let discoveries = references.get_discoveries();
    assert_eq!(discoveries.len(), 1);
    discoveries[0]
        .register(None, "svc", ConnectionParams::from_string("host=h"))
        .unwrap();
    assert!(references.get_discoveries()[0].resolve_one(None, "svc").unwrap().is_some());
}

#[test]
fn test_wrong_version_cannot_be_created() {
    let factory = DefaultComponentsFactory::new();
    let locator = Descriptor::new("pip-services", "lock", "memory", "default", "2.0");

    assert!(matches!(factory.create(&locator), Err(ComponentError::CannotCreate(_))));
}
