//! Morph targets (shape keys).
//!
//! A morph target is a named alternate vertex position set with a
//! blendable influence scalar. The dictionary maps each name to an index
//! into the influence array (and into the optional delta buffers).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named morph targets with per-target influence values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorphTargets {
    /// Name → index into `influences` / `deltas`.
    pub dictionary: BTreeMap<String, usize>,
    /// Current influence of each target, normally in `[0, 1]`.
    pub influences: Vec<f32>,
    /// Per-target vertex deltas `[dx, dy, dz]`. An empty buffer means the
    /// renderer owns the delta data and only the influence is tracked here.
    pub deltas: Vec<Vec<[f32; 3]>>,
}

impl MorphTargets {
    /// Creates an empty morph set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a morph set from target names with zero influence and no deltas.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut targets = Self::new();
        for name in names {
            targets.add_target(name, Vec::new());
        }
        targets
    }

    /// Registers a target and returns its index.
    ///
    /// Re-registering an existing name replaces its deltas and keeps its index.
    pub fn add_target(&mut self, name: impl Into<String>, deltas: Vec<[f32; 3]>) -> usize {
        let name = name.into();
        if let Some(&idx) = self.dictionary.get(&name) {
            self.deltas[idx] = deltas;
            return idx;
        }
        let idx = self.influences.len();
        self.dictionary.insert(name, idx);
        self.influences.push(0.0);
        self.deltas.push(deltas);
        idx
    }

    /// Returns the number of targets.
    pub fn len(&self) -> usize {
        self.influences.len()
    }

    /// Returns true if there are no targets.
    pub fn is_empty(&self) -> bool {
        self.influences.is_empty()
    }

    /// Looks up the index of a target.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.dictionary.get(name).copied()
    }

    /// Returns true if a target with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.dictionary.contains_key(name)
    }

    /// Returns the influence of a named target.
    pub fn influence(&self, name: &str) -> Option<f32> {
        self.index_of(name).and_then(|i| self.influences.get(i).copied())
    }

    /// Sets the influence of a named target. Returns false if the name is unknown.
    pub fn set_influence(&mut self, name: &str, value: f32) -> bool {
        match self.index_of(name) {
            Some(i) if i < self.influences.len() => {
                self.influences[i] = value;
                true
            }
            _ => false,
        }
    }

    /// Iterates `(name, influence)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.dictionary
            .iter()
            .map(move |(name, &i)| (name.as_str(), self.influences.get(i).copied().unwrap_or(0.0)))
    }

    /// Blended displacement of vertex `v`: `Σ influence_k · delta_k[v]`.
    pub fn blended_delta(&self, v: usize) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (k, &w) in self.influences.iter().enumerate() {
            if w == 0.0 {
                continue;
            }
            if let Some(d) = self.deltas.get(k).and_then(|buf| buf.get(v)) {
                out[0] += w * d[0];
                out[1] += w * d[1];
                out[2] += w * d[2];
            }
        }
        out
    }
}
