//! Error types for URL building, URL parsing and pattern decoding.

/// Error returned by the public build/parse entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// Caller supplied input that cannot be encoded (missing cloud name,
    /// missing parameter key or value, unusable separators).
    #[error("{0}")]
    IllegalArgument(String),
    /// The URL (or its pattern segment) is not a well-formed Pixelbin URL.
    #[error("{0}")]
    InvalidUrl(String),
    /// A preset reference could not be expanded by the resolver.
    #[error("preset {0:?} not found")]
    UnknownPreset(String),
}

impl UrlError {
    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        UrlError::IllegalArgument(msg.into())
    }

    pub(crate) fn invalid_url(msg: impl Into<String>) -> Self {
        UrlError::InvalidUrl(msg.into())
    }
}

/// Detailed reason a pattern segment failed to decode.
///
/// [`crate::parse_url`] reports every one of these as
/// [`UrlError::InvalidUrl`]; callers of [`crate::pattern::decode`] get the
/// detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("empty operation at position {0}")]
    EmptyOperation(usize),
    #[error("unbalanced parentheses in operation {0:?}")]
    Unbalanced(String),
    #[error("missing plugin id in operation {0:?}")]
    MissingPlugin(String),
    #[error("missing operation name in {0:?}")]
    MissingName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            UrlError::illegal("key not specified.").to_string(),
            "key not specified."
        );
        assert_eq!(
            UrlError::UnknownPreset("summer".into()).to_string(),
            "preset \"summer\" not found"
        );
        assert_eq!(
            PatternError::Unbalanced("t.resize(w:1".into()).to_string(),
            "unbalanced parentheses in operation \"t.resize(w:1\""
        );
    }
}
