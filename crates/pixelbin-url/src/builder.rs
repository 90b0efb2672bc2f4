//! Structured request to Pixelbin URL.

use crate::error::UrlError;
use crate::model::UrlRequest;
use crate::pattern;
use crate::url_parts::{is_version_tag, is_zone_slug};
use crate::UrlConfig;

/// Base URL used when the request names none.
pub const DEFAULT_BASE_URL: &str = "https://cdn.pixelbin.io";

/// Version used when the request's version is absent or not a version tag.
pub const DEFAULT_VERSION: &str = "v2";

/// Builds the URL for `request`.
///
/// `cloud_name` and `file_path` are required. An invalid `version` falls back
/// to `v2` and an invalid `zone` is left out rather than rejected.
///
/// # Examples
///
/// - `{cloudName: "demo", filePath: "a.jpg"}` → `https://cdn.pixelbin.io/v2/demo/original/a.jpg`
pub fn build_url(request: &UrlRequest, config: &UrlConfig) -> Result<String, UrlError> {
    config.validate()?;

    let base_url = non_empty(&request.base_url)
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/');
    let cloud_name = non_empty(&request.cloud_name)
        .ok_or_else(|| UrlError::illegal("key cloudName should be defined"))?;
    let file_path = non_empty(&request.file_path)
        .ok_or_else(|| UrlError::illegal("key filePath should be defined"))?;

    let pattern = pattern::encode(&request.transformations, config)?;

    let version = non_empty(&request.version)
        .filter(|v| is_version_tag(v))
        .unwrap_or(DEFAULT_VERSION);
    let zone = non_empty(&request.zone)
        .filter(|z| is_zone_slug(z))
        .unwrap_or("");

    let url = [base_url, version, cloud_name, zone, pattern.as_str(), file_path]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    tracing::debug!(%url, "built pixelbin url");
    Ok(url)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
