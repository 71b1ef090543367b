// Component locators and the shared reference registry

pub mod descriptor;
pub mod references;

pub use descriptor::Descriptor;
pub use references::{Component, References};
