//! Opaque material reference carried by polygon groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a material slot, e.g. `"brick/brickwall001a"`.
///
/// The mesh never resolves the name; groups are matched on string
/// equality only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Material(String);

impl Material {
    /// Creates a material reference from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the material name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the unnamed material a fresh group starts with.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("None")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Material {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Material {
    fn from(name: String) -> Self {
        Self(name)
    }
}
