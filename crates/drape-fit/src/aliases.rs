//! Mannequin → garment morph-name aliases.

use drape_mesh::MorphTargets;

/// Candidate garment morph names for one mannequin morph, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphAlias {
    pub key: &'static str,
    pub candidates: &'static [&'static str],
}

/// Built-in aliases. The canonical name always comes first.
pub const DEFAULT_ALIASES: &[MorphAlias] = &[
    MorphAlias { key: "bust_large", candidates: &["bust_large", "chest_large", "bust_expand"] },
    MorphAlias { key: "bust_small", candidates: &["bust_small", "chest_small", "bust_shrink"] },
    MorphAlias { key: "waist_wide", candidates: &["waist_wide", "waist_large", "belly_expand"] },
    MorphAlias { key: "waist_narrow", candidates: &["waist_narrow", "waist_small", "belly_shrink"] },
    MorphAlias { key: "hips_wide", candidates: &["hips_wide", "hip_large", "hips_expand"] },
    MorphAlias { key: "hips_narrow", candidates: &["hips_narrow", "hip_small", "hips_shrink"] },
    MorphAlias { key: "shoulders_broad", candidates: &["shoulders_broad", "shoulder_wide", "shoulders_expand"] },
    MorphAlias { key: "shoulders_narrow", candidates: &["shoulders_narrow", "shoulder_narrow", "shoulders_shrink"] },
];

/// Immutable alias lookup injected into the deformation adapter.
#[derive(Debug, Clone, Copy)]
pub struct MorphAliasTable {
    entries: &'static [MorphAlias],
}

impl Default for MorphAliasTable {
    fn default() -> Self {
        Self::new(DEFAULT_ALIASES)
    }
}

impl MorphAliasTable {
    pub const fn new(entries: &'static [MorphAlias]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [MorphAlias] {
        self.entries
    }

    /// Names to try for `key`. Keys without an entry are tried verbatim.
    pub fn candidates<'a>(&self, key: &'a str) -> Vec<&'a str> {
        match self.entries.iter().find(|a| a.key == key) {
            Some(alias) => alias.candidates.to_vec(),
            None => vec![key],
        }
    }

    /// First candidate for `key` present in `targets`.
    pub fn resolve<'a>(&self, key: &'a str, targets: &MorphTargets) -> Option<&'a str> {
        self.candidates(key)
            .into_iter()
            .find(|name| targets.contains(name))
    }
}
