// Required Ports - capabilities the resolvers look up in `References`
use crate::auth::CredentialParams;
use crate::connect::ConnectionParams;
use crate::ports::provided::Result;

/// Discovery service
/// Maps a logical key to one or more connection parameter sets.
pub trait Discovery: Send + Sync {
    /// Registers a connection under `key`. Several connections may share a key.
    fn register(
        &self,
        correlation_id: Option<&str>,
        key: &str,
        connection: ConnectionParams,
    ) -> Result<ConnectionParams>;

    /// First connection registered under `key`
    fn resolve_one(&self, correlation_id: Option<&str>, key: &str) -> Result<Option<ConnectionParams>>;

    /// Every connection registered under `key`, in registration order
    fn resolve_all(&self, correlation_id: Option<&str>, key: &str) -> Result<Vec<ConnectionParams>>;
}

/// Credential store
/// Maps a key to exactly one credential parameter set.
pub trait CredentialStore: Send + Sync {
    /// Overwrites the credential under `key`; `None` removes it.
    fn store(
        &self,
        correlation_id: Option<&str>,
        key: &str,
        credential: Option<CredentialParams>,
    ) -> Result<()>;

    fn lookup(&self, correlation_id: Option<&str>, key: &str) -> Result<Option<CredentialParams>>;
}
