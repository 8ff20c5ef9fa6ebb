//! Stroke style resolution and per-pass deduplication
//!
//! Leaf strokes resolve through four layers: stroke override, motif default,
//! global default, then a hard fallback of black at thickness 1. Skeleton
//! strokes skip the stroke layer. Resolved styles collapse to a canonical
//! key so that identical strokes share one style class.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Color used when no layer provides one
pub const FALLBACK_COLOR: &str = "#000000";
/// Thickness used when no layer provides one
pub const FALLBACK_THICKNESS: f64 = 1.0;

/// Partial stroke style; unset fields fall through to the next layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

impl StyleSpec {
    pub fn new(color: Option<String>, thickness: Option<f64>) -> Self {
        Self { color, thickness }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.thickness.is_none()
    }
}

/// Fully resolved, canonical stroke style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub color: String,
    pub thickness: f64,
}

impl ResolvedStyle {
    /// Deduplication key: `"{thickness}|{color}"`
    pub fn key(&self) -> String {
        format!("{}|{}", self.thickness, self.color)
    }
}

/// Trim and lower-case a color string.
///
/// Hex forms (`#abc`, `#aabbcc`) need nothing further; other notations are
/// compared as written.
pub fn normalize_color(color: &str) -> String {
    color.trim().to_lowercase()
}

/// Round a thickness to three decimals
pub fn normalize_thickness(thickness: f64) -> f64 {
    (thickness * 1000.0).round() / 1000.0
}

/// Merge style layers, highest priority first, and normalize the result
pub fn resolve_style(layers: &[&StyleSpec]) -> ResolvedStyle {
    let color = layers
        .iter()
        .find_map(|layer| layer.color.as_deref())
        .unwrap_or(FALLBACK_COLOR);
    let thickness = layers
        .iter()
        .find_map(|layer| layer.thickness)
        .unwrap_or(FALLBACK_THICKNESS);

    ResolvedStyle {
        color: normalize_color(color),
        thickness: normalize_thickness(thickness),
    }
}

/// Style of a leaf stroke: stroke > motif > global
pub fn resolve_leaf_style(
    stroke: &StyleSpec,
    motif: &StyleSpec,
    global: &StyleSpec,
) -> ResolvedStyle {
    resolve_style(&[stroke, motif, global])
}

/// Style of a skeleton stroke: motif > global
pub fn resolve_skeleton_style(motif: &StyleSpec, global: &StyleSpec) -> ResolvedStyle {
    resolve_style(&[motif, global])
}

/// Lazily populated key → id table.
///
/// Ids are `{prefix}-{n}` in first-seen order and never change once issued.
#[derive(Debug, Clone)]
pub struct IdRegistry<V> {
    prefix: &'static str,
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> IdRegistry<V> {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Return the slot for `key`, inserting `make()` on first sight
    pub fn intern(&mut self, key: &str, make: impl FnOnce() -> V) -> usize {
        if let Some(&slot) = self.index.get(key) {
            return slot;
        }
        let slot = self.entries.len();
        let id = format!("{}-{}", self.prefix, slot);
        tracing::trace!(%id, key, "registered");
        self.entries.push((id, make()));
        self.index.insert(key.to_string(), slot);
        slot
    }

    pub fn id(&self, slot: usize) -> &str {
        &self.entries[slot].0
    }

    pub fn value(&self, slot: usize) -> &V {
        &self.entries[slot].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(id, v)| (id.as_str(), v))
    }
}

/// Canonical style key → style class
pub type StyleRegistry = IdRegistry<ResolvedStyle>;

/// Literal clip path → clip region
pub type ClipRegistry = IdRegistry<String>;

pub fn style_registry() -> StyleRegistry {
    IdRegistry::new("style")
}

pub fn clip_registry() -> ClipRegistry {
    IdRegistry::new("clip")
}
