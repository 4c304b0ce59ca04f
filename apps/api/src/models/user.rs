use serde_json::{Map, Value};

/// Structured details a user supplies for the resume rewrite, keyed by
/// camel-case field name. Entry order follows the incoming JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInfo {
    entries: Vec<(String, String)>,
}

impl UserInfo {
    #[cfg(test)]
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose value has visible text.
    pub fn non_empty_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries().filter(|(_, v)| !v.trim().is_empty())
    }
}

impl From<Map<String, Value>> for UserInfo {
    /// Strings are taken as-is, `null` becomes empty, and any other value is
    /// kept as its compact JSON text.
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| {
                    let text = match value {
                        Value::String(s) => s,
                        Value::Null => String::new(),
                        other => other.to_string(),
                    };
                    (key, text)
                })
                .collect(),
        }
    }
}
