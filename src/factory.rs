// Component factories

pub mod component_factory;
pub mod default_components_factory;

pub use component_factory::{Constructor, Factory};
pub use default_components_factory::DefaultComponentsFactory;
