//! Transformation-pattern codec.
//!
//! A pattern is one URL path segment listing operations in processing order:
//!
//! ```text
//! t.resize(w:200,h:100)~t.flip()~p:summer
//! ```
//!
//! Operations are joined by [`UrlConfig::operation_separator`], parameters by
//! [`UrlConfig::parameter_separator`]. `p:<name>` is shorthand for the preset
//! operation `p.apply(n:<name>)`. The pattern `original` means "no
//! transformations".
//!
//! [`UrlConfig::operation_separator`]: crate::UrlConfig::operation_separator
//! [`UrlConfig::parameter_separator`]: crate::UrlConfig::parameter_separator

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

/// Pattern segment meaning "serve the file untransformed".
pub const ORIGINAL: &str = "original";
