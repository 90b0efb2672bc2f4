//! Splits a Pixelbin URL into its path segments.
//!
//! Expected layout: `<scheme>://<host>/<version>/<cloudName>/<zone>/<pattern>/<filePath>`,
//! where `version` and `zone` are optional and `filePath` may span several
//! segments.

mod grammar;

pub use grammar::{is_version_tag, is_zone_slug};

use crate::error::UrlError;

/// Version assumed when the URL carries none (legacy URLs).
pub const LEGACY_VERSION: &str = "v1";

/// Cloud names shorter than this are rejected.
const MIN_CLOUD_NAME_LEN: usize = 3;

const INVALID_URL_MSG: &str = "Invalid pixelbin url. Please make sure the url is correct.";

/// Raw segments of a Pixelbin URL. The pattern is not decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Host, with `:port` when the URL names a non-default port.
    pub host: String,
    pub version: String,
    pub cloud_name: String,
    pub zone: Option<String>,
    pub pattern: String,
    pub file_path: String,
    /// Query string without the leading `?`, if any.
    pub query: Option<String>,
}

impl UrlParts {
    /// `<scheme>://<host>`.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

/// Splits `url` into its Pixelbin segments.
pub fn split_url(url: &str) -> Result<UrlParts, UrlError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| UrlError::invalid_url(format!("{INVALID_URL_MSG} ({e})")))?;
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(h), Some(port)) => format!("{h}:{port}"),
        (Some(h), None) => h.to_string(),
        (None, _) => return Err(UrlError::invalid_url(INVALID_URL_MSG)),
    };
    let mut segments: Vec<&str> = parsed
        .path_segments()
        .ok_or_else(|| UrlError::invalid_url(INVALID_URL_MSG))?
        .collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }

    let mut rest = segments.as_slice();

    let version = match rest.first() {
        Some(s) if is_version_tag(s) => {
            let version = s.to_string();
            rest = &rest[1..];
            version
        }
        _ => LEGACY_VERSION.to_string(),
    };

    let cloud_name = match rest.first() {
        Some(s) if s.len() >= MIN_CLOUD_NAME_LEN => {
            let cloud_name = s.to_string();
            rest = &rest[1..];
            cloud_name
        }
        _ => return Err(UrlError::invalid_url(INVALID_URL_MSG)),
    };

    // A zone is only taken when a pattern and a file still follow it.
    let zone = match rest {
        [z, _, _, ..] if is_zone_slug(z) => {
            let zone = z.to_string();
            rest = &rest[1..];
            Some(zone)
        }
        _ => None,
    };

    let pattern = match rest.first() {
        Some(s) if !s.is_empty() => {
            let pattern = s.to_string();
            rest = &rest[1..];
            pattern
        }
        _ => {
            return Err(UrlError::invalid_url(
                "Error Processing url. Please check the url is correct",
            ))
        }
    };

    let file_path = rest.join("/");
    if file_path.is_empty() {
        return Err(UrlError::invalid_url(INVALID_URL_MSG));
    }

    tracing::debug!(%version, %cloud_name, ?zone, %pattern, %file_path, "split pixelbin url");

    Ok(UrlParts {
        scheme: parsed.scheme().to_string(),
        host,
        version,
        cloud_name,
        zone,
        pattern,
        file_path,
        query: parsed.query().map(str::to_string),
    })
}
