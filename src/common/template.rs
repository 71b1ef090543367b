use regex::{Captures, Regex};
use std::sync::LazyLock;

static PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([\w.\-]+)\s*\}\}").expect("parameter pattern is valid")
});

/// `{{ name }}` substitution for configuration text.
///
/// - Dotted names are looked up as-is (`{{ db.host }}` asks for `db.host`)
/// - Substitution is single-pass: a replaced value is never re-expanded
/// - Unknown names render as an empty string and are recorded in `missing_keys`
///
/// # Examples
///
/// ```
/// use pip_components::common::Template;
///
/// let mut template = Template::new();
/// let text = template.render("host={{ host }};port={{port}}", |name| match name {
///     "host" => Some("localhost".to_string()),
///     _ => None,
/// });
/// assert_eq!(text, "host=localhost;port=");
/// assert_eq!(template.get_missing_keys(), &["port"]);
/// ```
pub struct Template {
    missing_keys: Vec<String>,
}

impl Template {
    pub fn new() -> Self {
        Self {
            missing_keys: Vec::new(),
        }
    }

    pub fn get_missing_keys(&self) -> &[String] {
        &self.missing_keys
    }

    pub fn clear_missing_keys(&mut self) {
        self.missing_keys.clear();
    }

    /// Names referenced by the text, in order of appearance.
    pub fn collect(text: &str) -> Vec<String> {
        PARAMETER
            .captures_iter(text)
            .map(|cap| cap[1].to_string())
            .collect()
    }

    pub fn render<F>(&mut self, text: &str, mut resolver: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        let missing = &mut self.missing_keys;
        PARAMETER
            .replace_all(text, |cap: &Captures| {
                let name = &cap[1];
                match resolver(name) {
                    Some(value) => value,
                    None => {
                        missing.push(name.to_string());
                        String::new()
                    }
                }
            })
            .into_owned()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}
