use crate::auth::CredentialParams;
use crate::config::ConfigParams;
use crate::fn_log;
use crate::ports::provided::{ComponentError, Result};
use crate::refer::References;
use std::sync::Arc;

/// Resolves credentials from configuration, following store keys through
/// the credential stores found in `References`.
///
/// ### Configuration parameters ###
///
/// - `credential.*`: a single credential
/// - `credentials.<name>.*`: several credentials, used instead of `credential` when present
///
/// # Examples
///
/// ```
/// use pip_components::{ConfigParams, CredentialResolver};
///
/// let mut resolver = CredentialResolver::new();
/// resolver.configure(&ConfigParams::from_tuples(&[
///     ("credential.username", "admin"),
///     ("credential.password", "secret"),
/// ]));
///
/// let credential = resolver.lookup(None).unwrap().unwrap();
/// assert_eq!(credential.username(), Some("admin"));
/// ```
#[derive(Default)]
pub struct CredentialResolver {
    credentials: Vec<CredentialParams>,
    references: Option<Arc<References>>,
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self {
            credentials: Vec::new(),
            references: None,
        }
    }

    pub fn with_references(mut self, references: Arc<References>) -> Self {
        self.references = Some(references);
        self
    }

    pub fn set_references(&mut self, references: Arc<References>) {
        self.references = Some(references);
    }

    /// Appends the credentials declared in `config`.
    pub fn configure(&mut self, config: &ConfigParams) {
        self.credentials.extend(CredentialParams::many_from_config(config));
    }

    pub fn add(&mut self, credential: CredentialParams) {
        self.credentials.push(credential);
    }

    /// Configured credentials as they are, store keys unresolved.
    pub fn get_all(&self) -> &[CredentialParams] {
        &self.credentials
    }

    fn lookup_in_stores(
        &self,
        correlation_id: Option<&str>,
        credential: &CredentialParams,
    ) -> Result<Option<CredentialParams>> {
        let Some(key) = credential.store_key() else {
            return Ok(None);
        };
        let Some(references) = &self.references else {
            return Ok(None);
        };

        let stores = references.get_credential_stores();
        if stores.is_empty() {
            return Err(ComponentError::ReferenceMissing(
                "Credential stores not found in references".to_string(),
            ));
        }

        for store in stores {
            if let Some(found) = store.lookup(correlation_id, key)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// First usable credential.
    ///
    /// A credential without a store key is returned as is. Only when every
    /// credential carries a store key are they looked up in order; the first
    /// hit is merged over its configured entry, with stored values winning
    /// even when stored under an alias (`pass` over `password`).
    pub fn lookup(&self, correlation_id: Option<&str>) -> Result<Option<CredentialParams>> {
        fn_log!("CredentialResolver", "lookup", correlation_id.unwrap_or_default());

        if self.credentials.is_empty() {
            return Ok(None);
        }

        if let Some(local) = self.credentials.iter().find(|c| !c.use_credential_store()) {
            return Ok(Some(local.clone()));
        }

        for credential in &self.credentials {
            if let Some(found) = self.lookup_in_stores(correlation_id, credential)? {
                return Ok(Some(credential.merged_with(&found)));
            }
        }
        Ok(None)
    }
}
