use crate::constants::ANY_ORIGIN;

/// Origins admitted by the gate.
///
/// Entries are compared byte-for-byte against the request's `Origin` header.
/// The `"*"` entry admits every origin and switches
/// `Access-Control-Allow-Origin` to the wildcard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AllowedOrigins(Vec<String>);

/// How an admitted origin is reflected in `Access-Control-Allow-Origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision<'a> {
    /// The wildcard entry is configured.
    Any,
    /// A literal entry equals the request origin; echo it back.
    Mirror(&'a str),
}

impl<'a> OriginDecision<'a> {
    pub fn header_value(&self) -> &'a str {
        match *self {
            Self::Any => ANY_ORIGIN,
            Self::Mirror(origin) => origin,
        }
    }
}

impl AllowedOrigins {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn any() -> Self {
        Self(vec![ANY_ORIGIN.to_string()])
    }

    pub fn allows_any(&self) -> bool {
        self.0.iter().any(|entry| entry == ANY_ORIGIN)
    }

    /// `None` when the origin is not admitted.
    pub fn resolve<'a>(&self, request_origin: &'a str) -> Option<OriginDecision<'a>> {
        if self.allows_any() {
            Some(OriginDecision::Any)
        } else if self.0.iter().any(|entry| entry == request_origin) {
            Some(OriginDecision::Mirror(request_origin))
        } else {
            None
        }
    }

    /// An origin that cannot be read as text only passes the wildcard.
    pub fn resolve_unreadable(&self) -> Option<OriginDecision<'static>> {
        self.allows_any().then_some(OriginDecision::Any)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedOrigins {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
