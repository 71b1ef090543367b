use crate::ports::provided::ComponentError;
use std::fmt;
use std::str::FromStr;

/// Component locator: `group:type:kind:name:version`.
///
/// Any field may be `*`, which matches everything.
///
/// # Examples
///
/// ```
/// use pip_components::Descriptor;
///
/// let memory = Descriptor::new("pip-services", "discovery", "memory", "default", "1.0");
/// let any_discovery: Descriptor = "*:discovery:*:*:*".parse().unwrap();
///
/// assert!(memory.matches(&any_discovery));
/// assert!(!memory.exact_match(&any_discovery));
/// assert_eq!(memory.to_string(), "pip-services:discovery:memory:default:1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    group: String,
    kind_type: String,
    kind: String,
    name: String,
    version: String,
}

pub const WILDCARD: &str = "*";

impl Descriptor {
    pub fn new(group: &str, kind_type: &str, kind: &str, name: &str, version: &str) -> Self {
        Self {
            group: normalize(group),
            kind_type: normalize(kind_type),
            kind: normalize(kind),
            name: normalize(name),
            version: normalize(version),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn kind_type(&self) -> &str {
        &self.kind_type
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    fn fields(&self) -> [&str; 5] {
        [&self.group, &self.kind_type, &self.kind, &self.name, &self.version]
    }

    /// Field-wise match where `*` on either side matches anything.
    pub fn matches(&self, other: &Descriptor) -> bool {
        self.fields()
            .iter()
            .zip(other.fields().iter())
            .all(|(a, b)| *a == WILDCARD || *b == WILDCARD || a == b)
    }

    pub fn exact_match(&self, other: &Descriptor) -> bool {
        self.fields() == other.fields()
    }

    /// No wildcard fields.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| *f != WILDCARD)
    }
}

fn normalize(field: &str) -> String {
    if field.is_empty() {
        WILDCARD.to_string()
    } else {
        field.to_string()
    }
}

impl FromStr for Descriptor {
    type Err = ComponentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = value.split(':').collect();
        if tokens.len() != 5 {
            return Err(ComponentError::config(format!(
                "Descriptor '{}' must be in format group:type:kind:name:version",
                value
            )));
        }
        Ok(Self::new(tokens[0].trim(), tokens[1].trim(), tokens[2].trim(), tokens[3].trim(), tokens[4].trim()))
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields().join(":"))
    }
}
