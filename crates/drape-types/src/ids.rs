//! Strongly-typed identifiers.
//!
//! Newtype wrappers keep cloth particle indices apart from plain
//! vertex and constraint counters.

use serde::{Deserialize, Serialize};

/// Index into the cloth particle arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
