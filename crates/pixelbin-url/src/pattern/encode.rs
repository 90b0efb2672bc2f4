//! Transformation list to pattern segment.

use super::ORIGINAL;
use crate::error::UrlError;
use crate::model::{Operation, Transformation, PRESET_PLUGIN};
use crate::UrlConfig;

/// Characters that delimit tokens inside an operation or the URL path.
const GRAMMAR_CHARS: [char; 3] = ['(', ')', '/'];

/// Encodes `transformations` into a pattern segment.
///
/// Returns `"original"` for an empty list. Operations with an empty name are
/// skipped rather than rejected. Anything that would not decode back to the
/// same operation is an [`UrlError::IllegalArgument`]: a parameter with an
/// empty key or value, a plugin id that is empty, contains `.` or is the
/// reserved preset id `p`, or text containing a separator or `(`, `)`, `/`.
pub fn encode(transformations: &[Operation], config: &UrlConfig) -> Result<String, UrlError> {
    let mut segments = Vec::with_capacity(transformations.len());

    for op in transformations {
        match op {
            Operation::Preset { name } => {
                if name.is_empty() {
                    tracing::debug!("skipping preset reference without a name");
                    continue;
                }
                check_text("preset name", name, config)?;
                segments.push(format!("{PRESET_PLUGIN}:{name}"));
            }
            Operation::Transform(t) => {
                if t.name.is_empty() {
                    tracing::debug!(plugin = %t.plugin, "skipping transformation without a name");
                    continue;
                }
                segments.push(encode_transformation(t, config)?);
            }
        }
    }

    if segments.is_empty() {
        return Ok(ORIGINAL.to_string());
    }
    Ok(segments.join(config.operation_separator.as_str()))
}

fn encode_transformation(t: &Transformation, config: &UrlConfig) -> Result<String, UrlError> {
    if t.plugin.is_empty() {
        return Err(UrlError::illegal(format!(
            "plugin not specified for operation {}",
            t.name
        )));
    }
    if t.plugin == PRESET_PLUGIN {
        return Err(UrlError::illegal(format!(
            "plugin {PRESET_PLUGIN:?} is reserved for presets"
        )));
    }
    if t.plugin.contains('.') {
        return Err(UrlError::illegal(format!(
            "plugin {:?} must not contain '.'",
            t.plugin
        )));
    }
    check_text("plugin", &t.plugin, config)?;
    check_text("operation name", &t.name, config)?;

    let mut params = Vec::with_capacity(t.values.len());
    for param in &t.values {
        if param.key.is_empty() {
            return Err(UrlError::illegal("key not specified."));
        }
        if param.value.is_empty() {
            return Err(UrlError::illegal(format!(
                "value not specified for key {}",
                param.key
            )));
        }
        if param.key.contains(':') || param.key.starts_with('-') {
            return Err(UrlError::illegal(format!(
                "key {:?} must not contain ':' or start with '-'",
                param.key
            )));
        }
        check_text("key", &param.key, config)?;
        check_text("value", &param.value, config)?;
        params.push(format!("{}:{}", param.key, param.value));
    }
    Ok(format!(
        "{}.{}({})",
        t.plugin,
        t.name,
        params.join(config.parameter_separator.as_str())
    ))
}

/// Rejects text that would split or unbalance the encoded operation.
fn check_text(label: &str, text: &str, config: &UrlConfig) -> Result<(), UrlError> {
    if text.contains(GRAMMAR_CHARS)
        || text.contains(config.operation_separator.as_str())
        || text.contains(config.parameter_separator.as_str())
    {
        return Err(UrlError::illegal(format!(
            "{label} {text:?} contains a separator or reserved character"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Param;

    fn cfg() -> UrlConfig {
        UrlConfig::default()
    }

    #[test]
    fn empty_list_is_original() {
        assert_eq!(encode(&[], &cfg()).unwrap(), "original");
    }

    #[test]
    fn preset_shorthand() {
        let ops = [Operation::preset("summer")];
        assert_eq!(encode(&ops, &cfg()).unwrap(), "p:summer");
    }

    #[test]
    fn transformation_without_params_keeps_parens() {
        let ops = [Operation::transform("t", "flip")];
        assert_eq!(encode(&ops, &cfg()).unwrap(), "t.flip()");
    }

    #[test]
    fn missing_value_is_illegal_argument() {
        let ops = [Operation::Transform(Transformation {
            plugin: "t".into(),
            name: "resize".into(),
            values: vec![Param::new("w", "")],
        })];
        assert_eq!(
            encode(&ops, &cfg()).unwrap_err(),
            UrlError::IllegalArgument("value not specified for key w".into())
        );
    }

    #[test]
    fn missing_key_is_illegal_argument() {
        let ops = [Operation::Transform(Transformation {
            plugin: "t".into(),
            name: "resize".into(),
            values: vec![Param::new("w", "10"), Param::new("", "20")],
        })];
        assert_eq!(
            encode(&ops, &cfg()).unwrap_err(),
            UrlError::IllegalArgument("key not specified.".into())
        );
    }

    #[test]
    fn nameless_operations_are_dropped() {
        let ops = [
            Operation::transform("t", ""),
            Operation::transform("t", "flip"),
            Operation::preset(""),
        ];
        assert_eq!(encode(&ops, &cfg()).unwrap(), "t.flip()");
    }

    #[test]
    fn all_dropped_is_original() {
        let ops = [Operation::transform("t", "")];
        assert_eq!(encode(&ops, &cfg()).unwrap(), "original");
    }

    #[test]
    fn reserved_or_empty_plugin_is_illegal_argument() {
        let preset_plugin = [Operation::from(
            Transformation::new("p", "blur").with_param("s", "2"),
        )];
        assert_eq!(
            encode(&preset_plugin, &cfg()).unwrap_err(),
            UrlError::IllegalArgument("plugin \"p\" is reserved for presets".into())
        );

        let no_plugin = [Operation::transform("", "blur")];
        assert_eq!(
            encode(&no_plugin, &cfg()).unwrap_err(),
            UrlError::IllegalArgument("plugin not specified for operation blur".into())
        );

        let dotted = [Operation::transform("t.x", "blur")];
        assert!(matches!(
            encode(&dotted, &cfg()),
            Err(UrlError::IllegalArgument(_))
        ));
    }

    #[test]
    fn text_that_would_not_decode_is_illegal_argument() {
        for t in [
            Transformation::new("t", "resize").with_param("w", "1,2"),
            Transformation::new("t", "resize").with_param("w", "1~2"),
            Transformation::new("t", "resize").with_param("w", "a(b)"),
            Transformation::new("t", "resize").with_param("w", "dir/x.png"),
            Transformation::new("t", "resize").with_param("w:x", "1"),
            Transformation::new("t", "resize").with_param("-w", "1"),
            Transformation::new("t", "re(size"),
        ] {
            assert!(
                matches!(
                    encode(&[Operation::from(t.clone())], &cfg()),
                    Err(UrlError::IllegalArgument(_))
                ),
                "{t:?} should be rejected"
            );
        }
        assert!(matches!(
            encode(&[Operation::preset("sum~mer")], &cfg()),
            Err(UrlError::IllegalArgument(_))
        ));
    }

    #[test]
    fn value_with_colon_is_kept() {
        let ops = [Operation::from(
            Transformation::new("t", "text").with_param("s", "a:b"),
        )];
        assert_eq!(encode(&ops, &cfg()).unwrap(), "t.text(s:a:b)");
    }
}
