pub mod common;
pub mod ports;
pub mod config;
pub mod refer;
pub mod cache;
pub mod lock;
pub mod connect;
pub mod auth;
pub mod factory;

pub use common::LogFormat;
pub use config::{ConfigParams, ConfigReader, JsonConfigReader, MemoryConfigReader, YamlConfigReader};
pub use refer::{Component, Descriptor, References};
pub use cache::{CacheEntry, MemoryCache, NullCache};
pub use lock::{MemoryLock, NullLock};
pub use connect::{ConnectionParams, ConnectionResolver, MemoryDiscovery};
pub use auth::{CredentialParams, CredentialResolver, MemoryCredentialStore};
pub use factory::{DefaultComponentsFactory, Factory};

pub use ports::provided::{
    Cache, Configurable, Lock,
};

pub use ports::required::{
    CredentialStore, Discovery,
};

pub use ports::provided::{ComponentError, Result};
