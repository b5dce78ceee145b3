use std::borrow::Cow;
use std::fmt;

use super::ChatError;

/// Scheme and authority of the chat server, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Cow<'static, str>);

impl BaseUrl {
    pub fn parse(url: impl Into<Cow<'static, str>>) -> Result<Self, ChatError> {
        let url = url.into();
        let trimmed = url.trim();

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ChatError::InvalidUrl(format!(
                "{trimmed} (expected http:// or https://)"
            )));
        }

        let without_slash = trimmed.trim_end_matches('/');
        if without_slash.ends_with("://") {
            return Err(ChatError::InvalidUrl(format!("{trimmed} (missing host)")));
        }

        Ok(Self(Cow::Owned(without_slash.to_string())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    /// URL of the host root, used by the connectivity probe.
    #[must_use]
    pub fn root(&self) -> String {
        self.join("/")
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let url = BaseUrl::parse("http://localhost:5000/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000");
        assert_eq!(url.join("/chat"), "http://localhost:5000/chat");
    }

    #[test]
    fn join_adds_missing_slash() {
        let url = BaseUrl::parse("https://example.com").unwrap();
        assert_eq!(url.join("api/prompt"), "https://example.com/api/prompt");
        assert_eq!(url.root(), "https://example.com/");
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = BaseUrl::parse("localhost:5000").unwrap_err();
        assert!(matches!(err, ChatError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_missing_host() {
        assert!(BaseUrl::parse("http://").is_err());
        assert!(BaseUrl::parse("https:///").is_err());
    }
}
