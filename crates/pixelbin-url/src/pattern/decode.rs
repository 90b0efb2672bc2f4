//! Pattern segment to transformation list.

use super::ORIGINAL;
use crate::error::PatternError;
use crate::model::{Operation, Param, Transformation, PRESET_PLUGIN};
use crate::UrlConfig;

/// Parameter key carrying the preset name in `p.apply(n:<name>)`.
const PRESET_NAME_KEY: &str = "n";

/// Decodes a pattern segment into operations, in pattern order.
///
/// Preset tokens become [`Operation::Preset`] references; they are not
/// expanded here. A preset token whose `n` parameter is missing or empty
/// (`p.apply(x:1)`, `p.apply(n:)`, `p:`) is skipped rather than rejected.
pub fn decode(pattern: &str, config: &UrlConfig) -> Result<Vec<Operation>, PatternError> {
    if pattern == ORIGINAL {
        return Ok(Vec::new());
    }

    let mut ops = Vec::new();
    for (idx, token) in pattern.split(config.operation_separator.as_str()).enumerate() {
        if token.is_empty() {
            return Err(PatternError::EmptyOperation(idx));
        }
        let canonical = canonicalize(token);
        if let Some(op) = parse_operation(&canonical, &config.parameter_separator)? {
            ops.push(op);
        }
    }
    Ok(ops)
}

/// Rewrites the `p:<name>` shorthand to `p.apply(n:<name>)`.
fn canonicalize(token: &str) -> String {
    match token.strip_prefix("p:") {
        Some(rest) => {
            let name = rest.split_once(':').map_or(rest, |(name, _)| name);
            format!("{PRESET_PLUGIN}.apply({PRESET_NAME_KEY}:{name})")
        }
        None => token.to_string(),
    }
}

fn parse_operation(
    token: &str,
    parameter_separator: &str,
) -> Result<Option<Operation>, PatternError> {
    let unbalanced = || PatternError::Unbalanced(token.to_string());

    let (prefix, rest) = token.split_once('(').ok_or_else(unbalanced)?;
    let body = rest.strip_suffix(')').ok_or_else(unbalanced)?;
    if prefix.contains(')') || body.contains(['(', ')']) {
        return Err(unbalanced());
    }

    let (plugin, name) = prefix.split_once('.').unwrap_or((prefix, ""));
    let values = parse_params(body, parameter_separator);

    if plugin == PRESET_PLUGIN {
        let preset_name = values
            .into_iter()
            .find(|p| p.key == PRESET_NAME_KEY)
            .map(|p| p.value)
            .filter(|v| !v.is_empty());
        return Ok(match preset_name {
            Some(name) => Some(Operation::Preset { name }),
            None => {
                tracing::debug!(token, "skipping preset without a name parameter");
                None
            }
        });
    }

    if plugin.is_empty() {
        return Err(PatternError::MissingPlugin(token.to_string()));
    }
    if name.is_empty() {
        return Err(PatternError::MissingName(token.to_string()));
    }

    Ok(Some(Operation::Transform(Transformation {
        plugin: plugin.to_string(),
        name: name.to_string(),
        values,
    })))
}

/// Splits a parameter body into key/value pairs.
///
/// One leading `-` is stripped first. Chunks with no `:` or an empty key are
/// dropped; the value is everything after the first `:`.
fn parse_params(body: &str, parameter_separator: &str) -> Vec<Param> {
    let body = body.strip_prefix('-').unwrap_or(body);
    body.split(parameter_separator)
        .filter_map(|chunk| {
            let (key, value) = chunk.split_once(':')?;
            if key.is_empty() {
                return None;
            }
            Some(Param::new(key, value))
        })
        .collect()
}
