// Connections and discovery

pub mod connection_params;
pub mod connection_resolver;
pub mod memory_discovery;

pub use connection_params::ConnectionParams;
pub use connection_resolver::ConnectionResolver;
pub use memory_discovery::MemoryDiscovery;
