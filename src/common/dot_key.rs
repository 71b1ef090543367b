use std::ops::{Index, RangeFrom};

/// Dotted config key split into its section segments.
///
/// # Examples
///
/// ```
/// use pip_components::common::DotKey;
///
/// let key = DotKey::new("connections.0.host");
/// assert_eq!(key.len(), 3);
/// assert_eq!(key.section(), "connections");
/// assert_eq!(key.rest(), Some("0.host"));
/// assert_eq!(&key[1], "0");
/// ```
#[derive(Debug, Clone)]
pub struct DotKey {
    key: String,
    segments: Vec<String>,
}

impl DotKey {
    pub const SEPARATOR: char = '.';

    pub fn new(dot_key: &str) -> Self {
        let segments = if dot_key.is_empty() {
            Vec::new()
        } else {
            dot_key.split(Self::SEPARATOR).map(|s| s.to_string()).collect()
        };

        Self {
            key: dot_key.to_string(),
            segments,
        }
    }

    /// Builds `section.key`, or just `key` when the section is empty.
    pub fn join(section: &str, key: &str) -> String {
        if section.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{}", section, Self::SEPARATOR, key)
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// First segment; the whole key when it has no separator.
    pub fn section(&self) -> &str {
        self.segments.first().map(|s| s.as_str()).unwrap_or("")
    }

    /// Everything after the first separator.
    pub fn rest(&self) -> Option<&str> {
        self.key
            .find(Self::SEPARATOR)
            .map(|pos| &self.key[pos + 1..])
    }

    /// Key with `prefix.` stripped, if it lives under that section.
    pub fn strip_section<'a>(key: &'a str, section: &str) -> Option<&'a str> {
        key.strip_prefix(section)
            .and_then(|rest| rest.strip_prefix(Self::SEPARATOR))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_str())
    }
}

// key[0]
impl Index<usize> for DotKey {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}

// key[1..]
impl Index<RangeFrom<usize>> for DotKey {
    type Output = [String];

    fn index(&self, range: RangeFrom<usize>) -> &Self::Output {
        &self.segments[range]
    }
}
