//! Structured form of a Pixelbin URL and its transformations.

use serde::{Deserialize, Serialize};

/// Plugin id reserved on the wire for preset references.
pub const PRESET_PLUGIN: &str = "p";

/// One keyed parameter of a transformation, e.g. `w:200`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named operation from a plugin namespace, e.g. `t.resize(w:200,h:100)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub plugin: String,
    pub name: String,
    /// Parameters in wire order. Empty when the operation takes none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Param>,
}

impl Transformation {
    pub fn new(plugin: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push(Param::new(key, value));
        self
    }
}

/// One entry of a transformation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Operation {
    /// A concrete plugin operation.
    Transform(Transformation),
    /// Reference to a stored preset, `p:<name>` on the wire. Expansion is up
    /// to a [`crate::PresetResolver`].
    Preset { name: String },
}

impl Operation {
    pub fn transform(plugin: impl Into<String>, name: impl Into<String>) -> Self {
        Operation::Transform(Transformation::new(plugin, name))
    }

    pub fn preset(name: impl Into<String>) -> Self {
        Operation::Preset { name: name.into() }
    }

    pub fn is_preset(&self) -> bool {
        matches!(self, Operation::Preset { .. })
    }
}

impl From<Transformation> for Operation {
    fn from(t: Transformation) -> Self {
        Operation::Transform(t)
    }
}

/// Input to [`crate::build_url`]. Absent fields get defaults where one exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRequest {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub cloud_name: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub transformations: Vec<Operation>,
}

impl UrlRequest {
    pub fn new(cloud_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            cloud_name: Some(cloud_name.into()),
            file_path: Some(file_path.into()),
            ..Self::default()
        }
    }

    pub fn with_transformation(mut self, op: impl Into<Operation>) -> Self {
        self.transformations.push(op.into());
        self
    }
}

/// A fully parsed Pixelbin URL, as returned by [`crate::parse_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDescriptor {
    pub base_url: String,
    pub cloud_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub version: String,
    pub file_path: String,
    #[serde(default)]
    pub transformations: Vec<Operation>,
}

impl From<UrlDescriptor> for UrlRequest {
    fn from(d: UrlDescriptor) -> Self {
        Self {
            base_url: Some(d.base_url),
            cloud_name: Some(d.cloud_name),
            zone: d.zone,
            version: Some(d.version),
            file_path: Some(d.file_path),
            transformations: d.transformations,
        }
    }
}
