// Credentials and credential stores

pub mod credential_params;
pub mod credential_resolver;
pub mod memory_credential_store;

pub use credential_params::CredentialParams;
pub use credential_resolver::CredentialResolver;
pub use memory_credential_store::MemoryCredentialStore;
