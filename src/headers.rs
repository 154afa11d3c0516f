use indexmap::IndexMap;
use std::borrow::Cow;

/// Insertion-ordered header bag with case-insensitive names.
///
/// Each entry remembers the spelling it was last written with, so headers come
/// back out the way callers wrote them while lookups ignore ASCII case.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(normalize_name(name).as_ref())
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(normalize_name(name).as_ref())
    }

    /// Stores `value` under `name`, replacing any existing entry in place.
    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let key = normalize_name(&name).into_owned();
        self.entries.insert(key, (name, value.into()));
    }

    /// Adds `value` to `name`, joining with any existing value as a list.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        let key = normalize_name(&name).into_owned();
        match self.entries.get_mut(&key) {
            Some((_, existing)) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                self.entries.insert(key, (name, value));
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries
            .shift_remove(normalize_name(name).as_ref())
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrites entries in `self` with every entry of `other`.
    pub fn extend(&mut self, other: Headers) {
        for (_, (name, value)) in other.entries {
            self.set(name, value);
        }
    }
}

/// Combines two header bags; entries in `overrides` replace same-named entries in `base`.
pub fn merge_headers(base: &Headers, overrides: &Headers) -> Headers {
    let mut merged = Headers::with_capacity(base.len() + overrides.len());
    merged.extend(base.clone());
    merged.extend(overrides.clone());
    merged
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

impl<N, V, const K: usize> From<[(N, V); K]> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(N, V); K]) -> Self {
        entries.into_iter().collect()
    }
}

impl<N, V> From<Vec<(N, V)>> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from(entries: Vec<(N, V)>) -> Self {
        entries.into_iter().collect()
    }
}

fn normalize_name(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
