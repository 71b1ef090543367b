use crate::config::ConfigParams;
use std::fmt;
use std::ops::{Deref, DerefMut};

const USERNAME: &[&str] = &["username", "user"];
const PASSWORD: &[&str] = &["password", "pass"];
const ACCESS_ID: &[&str] = &["access_id", "client_id"];
const ACCESS_KEY: &[&str] = &["access_key", "client_key", "secret_key"];
const ALIASES: &[&[&str]] = &[USERNAME, PASSWORD, ACCESS_ID, ACCESS_KEY];

/// Credential parameters, or a store key pointing at a credential store
/// that holds them.
///
/// Field aliases: `user` for `username`, `pass` for `password`, `client_id`
/// for `access_id`, `client_key`/`secret_key` for `access_key`.
///
/// # Examples
///
/// ```
/// use pip_components::CredentialParams;
///
/// let credential = CredentialParams::from_string("user=jdoe;pass=secret");
/// assert_eq!(credential.username(), Some("jdoe"));
/// assert_eq!(credential.password(), Some("secret"));
/// assert!(!credential.use_credential_store());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialParams {
    params: ConfigParams,
}

impl CredentialParams {
    pub fn new(params: ConfigParams) -> Self {
        Self { params }
    }

    pub fn from_string(line: &str) -> Self {
        Self::new(ConfigParams::from_string(line))
    }

    pub fn from_tuples(tuples: &[(&str, &str)]) -> Self {
        Self::new(ConfigParams::from_tuples(tuples))
    }

    /// Credentials declared in `config`: the `credentials` sub-sections when
    /// present, otherwise the `credential` section.
    pub fn many_from_config(config: &ConfigParams) -> Vec<CredentialParams> {
        let credentials = config.get_section("credentials");
        let names = credentials.get_section_names();

        if !names.is_empty() {
            return names
                .iter()
                .map(|name| Self::new(credentials.get_section(name)))
                .collect();
        }

        let credential = config.get_section("credential");
        if credential.is_empty() {
            Vec::new()
        } else {
            vec![Self::new(credential)]
        }
    }

    pub fn from_config(config: &ConfigParams) -> Option<CredentialParams> {
        Self::many_from_config(config).into_iter().next()
    }

    pub fn params(&self) -> &ConfigParams {
        &self.params
    }

    pub fn into_params(self) -> ConfigParams {
        self.params
    }

    /// `self` overridden by `other`; `other` wins on conflicts, also when
    /// the two name a field by different aliases (`password` and `pass`).
    pub fn merged_with(&self, other: &CredentialParams) -> CredentialParams {
        Self::new(self.params.override_with_aliases(&other.params, ALIASES))
    }

    pub fn use_credential_store(&self) -> bool {
        self.store_key().is_some()
    }

    pub fn store_key(&self) -> Option<&str> {
        self.params.get("store_key")
    }

    pub fn set_store_key(&mut self, value: &str) {
        self.params.put("store_key", value);
    }

    fn get_first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.params.get(key))
    }

    pub fn username(&self) -> Option<&str> {
        self.get_first(USERNAME)
    }

    pub fn set_username(&mut self, value: &str) {
        self.params.put("username", value);
    }

    pub fn password(&self) -> Option<&str> {
        self.get_first(PASSWORD)
    }

    pub fn set_password(&mut self, value: &str) {
        self.params.put("password", value);
    }

    pub fn access_id(&self) -> Option<&str> {
        self.get_first(ACCESS_ID)
    }

    pub fn set_access_id(&mut self, value: &str) {
        self.params.put("access_id", value);
    }

    pub fn access_key(&self) -> Option<&str> {
        self.get_first(ACCESS_KEY)
    }

    pub fn set_access_key(&mut self, value: &str) {
        self.params.put("access_key", value);
    }
}

impl From<ConfigParams> for CredentialParams {
    fn from(params: ConfigParams) -> Self {
        Self::new(params)
    }
}

impl Deref for CredentialParams {
    type Target = ConfigParams;

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}

impl DerefMut for CredentialParams {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.params
    }
}

impl fmt::Display for CredentialParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.params, f)
    }
}
