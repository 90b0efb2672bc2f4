//! Pixelbin URL to structured descriptor.

use crate::error::UrlError;
use crate::model::UrlDescriptor;
use crate::pattern;
use crate::preset::{expand_presets, PresetResolver};
use crate::url_parts::split_url;
use crate::UrlConfig;

const PATTERN_ERROR_MSG: &str = "Error Processing url. Please check the url is correct";

/// Parses `url` into a descriptor. Preset references stay unexpanded.
///
/// Any malformed pattern is reported as [`UrlError::InvalidUrl`]; the
/// underlying [`crate::PatternError`] is only logged.
pub fn parse_url(url: &str, config: &UrlConfig) -> Result<UrlDescriptor, UrlError> {
    config.validate()?;
    let parts = split_url(url)?;

    let transformations = pattern::decode(&parts.pattern, config).map_err(|e| {
        tracing::debug!(url, error = %e, "pattern decode failed");
        UrlError::invalid_url(PATTERN_ERROR_MSG)
    })?;

    Ok(UrlDescriptor {
        base_url: parts.base_url(),
        cloud_name: parts.cloud_name,
        zone: parts.zone,
        version: parts.version,
        file_path: parts.file_path,
        transformations,
    })
}

/// Like [`parse_url`], but replaces every preset reference with the
/// operations `resolver` returns for it (one level deep).
pub fn parse_url_flattened(
    url: &str,
    config: &UrlConfig,
    resolver: &dyn PresetResolver,
) -> Result<UrlDescriptor, UrlError> {
    let mut descriptor = parse_url(url, config)?;
    descriptor.transformations = expand_presets(descriptor.transformations, resolver)?;
    Ok(descriptor)
}
