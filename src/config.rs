//! Render configuration
//!
//! Field names follow the camelCase JSON layout of kumiko config files.
//! Both TOML and JSON text are accepted; reading the file is left to the
//! caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{KumikoError, Result};
use crate::motif::{MotifKind, MotifOptions};
use crate::style::StyleSpec;

/// Default skeleton thickness as a fraction of the side length
pub const SKELETON_THICKNESS_RATIO: f64 = 0.04;
/// Default leaf thickness as a fraction of the side length
pub const LEAF_THICKNESS_RATIO: f64 = 0.015;

/// Global render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KumikoConfig {
    /// Edge length of one full triangle
    pub side_length: f64,
    pub colors: Colors,
    #[serde(default)]
    pub thickness: Thickness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    pub skeleton: String,
    pub leaf: String,
    pub background: String,
}

/// Optional stroke thickness overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thickness {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skeleton: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf: Option<f64>,
}

impl Default for KumikoConfig {
    fn default() -> Self {
        Self {
            side_length: 100.0,
            colors: Colors {
                skeleton: "#633524ff".to_string(),
                leaf: "#8d6e63".to_string(),
                background: "#33312eff".to_string(),
            },
            thickness: Thickness::default(),
        }
    }
}

impl KumikoConfig {
    pub fn with_side_length(mut self, side_length: f64) -> Self {
        self.side_length = side_length;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(side_length = config.side_length, "loaded TOML config");
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| KumikoError::config_parse(e.to_string()))?;
        tracing::debug!(side_length = config.side_length, "loaded JSON config");
        Ok(config)
    }

    /// Configured skeleton thickness, or 4% of the side length
    pub fn skeleton_thickness(&self) -> f64 {
        self.thickness
            .skeleton
            .unwrap_or(self.side_length * SKELETON_THICKNESS_RATIO)
    }

    /// Configured leaf thickness, or 1.5% of the side length
    pub fn leaf_thickness(&self) -> f64 {
        self.thickness
            .leaf
            .unwrap_or(self.side_length * LEAF_THICKNESS_RATIO)
    }

    /// Global skeleton style layer
    pub fn skeleton_style(&self) -> StyleSpec {
        StyleSpec::new(
            Some(self.colors.skeleton.clone()),
            Some(self.skeleton_thickness()),
        )
    }

    /// Global leaf style layer
    pub fn leaf_style(&self) -> StyleSpec {
        StyleSpec::new(Some(self.colors.leaf.clone()), Some(self.leaf_thickness()))
    }
}

/// One symbol's motif binding: `{ "type": "goma", "options": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifBinding {
    /// Motif identifier, validated when the registry is built
    #[serde(rename = "type")]
    pub motif: String,
    #[serde(default)]
    pub options: MotifOptions,
}

impl MotifBinding {
    pub fn new(kind: MotifKind) -> Self {
        Self {
            motif: kind.id().to_string(),
            options: MotifOptions::default(),
        }
    }

    pub fn with_options(kind: MotifKind, options: MotifOptions) -> Self {
        Self {
            motif: kind.id().to_string(),
            options,
        }
    }
}

/// Symbol → motif bindings: `{ "characters": { "A": { ... } } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifConfig {
    pub characters: BTreeMap<String, MotifBinding>,
}

impl Default for MotifConfig {
    /// `A` asanoha, `G` goma, `K` kaku, `S` sakura, `B` blank
    fn default() -> Self {
        let mut config = Self::empty();
        config.bind("A", MotifBinding::new(MotifKind::Asanoha));
        config.bind("G", MotifBinding::new(MotifKind::Goma));
        config.bind("K", MotifBinding::new(MotifKind::Kaku));
        config.bind("S", MotifBinding::new(MotifKind::Sakura));
        config.bind("B", MotifBinding::new(MotifKind::Blank));
        config
    }
}

impl MotifConfig {
    pub fn empty() -> Self {
        Self {
            characters: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, symbol: &str, binding: MotifBinding) -> &mut Self {
        self.characters.insert(symbol.to_string(), binding);
        self
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| KumikoError::config_parse(e.to_string()))?;
        tracing::debug!(bindings = config.characters.len(), "loaded motif config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(bindings = config.characters.len(), "loaded motif config");
        Ok(config)
    }
}
