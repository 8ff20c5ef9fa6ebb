//! Symbol → motif bindings for one render pass

use std::collections::HashMap;

use super::{Motif, MotifKind, MotifOptions};
use crate::config::MotifConfig;
use crate::errors::{KumikoError, Result};

/// Symbol whose motif stands in for unbound symbols
pub const FALLBACK_SYMBOL: &str = "G";

/// Validated set of configured motifs
#[derive(Debug, Clone)]
pub struct MotifRegistry {
    motifs: HashMap<String, Motif>,
    fallback: Motif,
}

impl MotifRegistry {
    /// Build every binding up front so that a bad motif name fails before
    /// any cell is laid out.
    pub fn build(config: &MotifConfig) -> Result<Self> {
        let mut motifs = HashMap::with_capacity(config.characters.len());

        for (symbol, binding) in &config.characters {
            let kind: MotifKind = binding
                .motif
                .parse()
                .map_err(|_| KumikoError::unknown_motif(symbol, &binding.motif))?;
            tracing::debug!(symbol = %symbol, motif = kind.name(), "bound motif");
            motifs.insert(symbol.clone(), Motif::build(kind, &binding.options));
        }

        let fallback = motifs.get(FALLBACK_SYMBOL).cloned().unwrap_or_else(|| {
            tracing::debug!("no '{}' binding, falling back to default goma", FALLBACK_SYMBOL);
            Motif::build(MotifKind::Goma, &MotifOptions::default())
        });

        Ok(Self { motifs, fallback })
    }

    /// Motif bound to `symbol`, if any
    pub fn get(&self, symbol: &str) -> Option<&Motif> {
        self.motifs.get(symbol)
    }

    /// Motif bound to `symbol`, or the fallback motif
    pub fn resolve(&self, symbol: &str) -> &Motif {
        self.get(symbol).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &Motif {
        &self.fallback
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.motifs.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}
