//! Garment descriptors and body-zone classification.

use drape_types::{BodyZone, GarmentSource};
use serde::{Deserialize, Serialize};

/// Keywords that mark a garment as lower-body wear.
pub const BOTTOM_KEYWORDS: &[&str] = &[
    "pants", "trouser", "jeans", "shorts", "skirt", "legging", "jogger", "chino", "culotte",
    "bottom",
];

/// What the catalog knows about a garment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentDescriptor {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub source: GarmentSource,
}

impl GarmentDescriptor {
    pub fn new(name: impl Into<String>, category: impl Into<String>, source: GarmentSource) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            source,
        }
    }

    /// Body zone implied by the name and category.
    pub fn body_zone(&self) -> BodyZone {
        classify_body_zone(&self.name, &self.category)
    }
}

/// Case-insensitive substring match against [`BOTTOM_KEYWORDS`]; defaults to upper.
pub fn classify_body_zone(name: &str, category: &str) -> BodyZone {
    let haystack = format!("{} {}", name, category).to_lowercase();
    if BOTTOM_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
        BodyZone::Lower
    } else {
        BodyZone::Upper
    }
}
