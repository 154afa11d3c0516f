use crate::constants::LIST_SEPARATOR;

/// Methods a cross-origin caller may announce in a preflight.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Construct an explicit list of allowed methods. Order and duplicates are kept.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Case-sensitive membership test; `get` does not match `GET`.
    pub fn allows_method(&self, method: &str) -> bool {
        self.0.iter().any(|allowed| allowed == method)
    }

    /// Value for `Access-Control-Allow-Methods`. Empty lists yield an empty string.
    pub fn header_value(&self) -> String {
        self.0.join(LIST_SEPARATOR)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
