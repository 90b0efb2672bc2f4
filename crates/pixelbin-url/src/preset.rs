//! Preset expansion.
//!
//! Decoding leaves `p:<name>` as an [`Operation::Preset`] reference. Callers
//! that want the concrete operations supply a [`PresetResolver`] (usually
//! backed by the presets stored for their cloud) and call
//! [`expand_presets`] or [`crate::parse_url_flattened`].

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::UrlError;
use crate::model::Operation;

/// Looks up the operations a preset stands for.
pub trait PresetResolver {
    /// Returns `None` when no usable preset has this name.
    fn resolve(&self, name: &str) -> Option<Vec<Operation>>;
}

/// A stored preset as listed by the Pixelbin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    #[serde(alias = "presetName")]
    pub name: String,
    #[serde(default)]
    pub transformations: Vec<Operation>,
    #[serde(default)]
    pub archived: bool,
}

/// Presets that are still live.
pub fn unarchived_presets(presets: &[Preset]) -> Vec<&Preset> {
    presets.iter().filter(|p| !p.archived).collect()
}

/// Parse a JSON array of presets.
pub fn presets_from_json(data: &str) -> Result<Vec<Preset>> {
    Ok(serde_json::from_str(data)?)
}

/// In-memory resolver. Archived presets are kept but never resolve.
#[derive(Debug, Clone, Default)]
pub struct PresetTable {
    presets: HashMap<String, Preset>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a preset by name.
    pub fn insert(&mut self, preset: Preset) {
        self.presets.insert(preset.name.clone(), preset);
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl FromIterator<Preset> for PresetTable {
    fn from_iter<I: IntoIterator<Item = Preset>>(iter: I) -> Self {
        let mut table = PresetTable::new();
        for preset in iter {
            table.insert(preset);
        }
        table
    }
}

impl PresetResolver for PresetTable {
    fn resolve(&self, name: &str) -> Option<Vec<Operation>> {
        self.presets
            .get(name)
            .filter(|p| !p.archived)
            .map(|p| p.transformations.clone())
    }
}

impl<F> PresetResolver for F
where
    F: Fn(&str) -> Option<Vec<Operation>>,
{
    fn resolve(&self, name: &str) -> Option<Vec<Operation>> {
        self(name)
    }
}

/// Replaces each preset reference in `ops` with its resolved operations.
///
/// Expansion is one level deep: preset references inside a preset's own
/// list are kept as references.
pub fn expand_presets(
    ops: Vec<Operation>,
    resolver: &dyn PresetResolver,
) -> Result<Vec<Operation>, UrlError> {
    let mut out = Vec::with_capacity(ops.len());
    for op in ops {
        match op {
            Operation::Preset { name } => {
                let expanded = resolver
                    .resolve(&name)
                    .ok_or_else(|| UrlError::UnknownPreset(name.clone()))?;
                tracing::debug!(preset = %name, count = expanded.len(), "expanded preset");
                out.extend(expanded);
            }
            other => out.push(other),
        }
    }
    Ok(out)
}
