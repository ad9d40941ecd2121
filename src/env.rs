//! Owned snapshots of the process environment

use std::collections::BTreeMap;

/// A copy of environment variables, detached from the live process.
///
/// Nothing here writes back to the process; callers decide what to do with
/// the values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Copy the current process environment, skipping entries that are not UTF-8.
    pub fn from_process() -> Self {
        let mut vars = BTreeMap::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    tracing::debug!("Skipping non UTF-8 value of {}", key);
                }
                _ => tracing::debug!("Skipping non UTF-8 environment variable name"),
            }
        }
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of `key` when it is set to something other than the empty string
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Set a variable, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// Keep only the listed keys
    pub fn retain_keys(&mut self, keys: &[String]) {
        self.vars.retain(|key, _| keys.iter().any(|k| k == key));
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_non_empty_ignores_empty_values() {
        let env: EnvSnapshot = [("A", ""), ("B", "x")].into_iter().collect();
        assert_eq!(env.get("A"), Some(""));
        assert_eq!(env.get_non_empty("A"), None);
        assert_eq!(env.get_non_empty("B"), Some("x"));
        assert_eq!(env.get_non_empty("C"), None);
    }

    #[test]
    fn test_retain_keys() {
        let mut env: EnvSnapshot = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();
        env.retain_keys(&["A".to_string(), "C".to_string()]);
        let keys: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "C"]);
    }

    #[test]
    fn test_from_process_copies_utf8_vars() {
        let env = EnvSnapshot::from_process();
        let expected =
            std::env::vars_os().filter(|(k, v)| k.to_str().is_some() && v.to_str().is_some()).count();
        assert_eq!(env.len(), expected);
    }
}
