// Ports - boundary between the toolkit and the components hosting it

pub mod provided;
pub mod required;

pub use provided::*;
pub use required::*;
