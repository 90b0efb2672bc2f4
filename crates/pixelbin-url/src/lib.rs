//! Build and parse Pixelbin CDN URLs.
//!
//! A Pixelbin URL has the shape
//! `<baseUrl>/<version>/<cloudName>/<zone>/<pattern>/<filePath>`, where
//! `pattern` is a compact encoding of the ordered transformations to apply
//! (for example `t.resize(w:200,h:100)~p:summer`). This crate converts between
//! that string and a structured [`UrlDescriptor`].

pub mod config;
pub mod logging;

pub mod builder;
pub mod error;
pub mod model;
pub mod parser;
pub mod pattern;
pub mod preset;
pub mod url_parts;

pub use builder::build_url;
pub use config::UrlConfig;
pub use error::{PatternError, UrlError};
pub use model::{Operation, Param, Transformation, UrlDescriptor, UrlRequest};
pub use parser::{parse_url, parse_url_flattened};
pub use preset::{Preset, PresetResolver, PresetTable};
