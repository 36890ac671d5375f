//! Genre value object.

use super::name::{NameIdentity, NormalizedName};

/// A movie genre such as "Action" or "Sci-Fi".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Genre {
    name: NormalizedName,
}

impl Genre {
    /// Creates a genre. Empty input yields a nameless genre.
    pub fn new(name: &str) -> Self {
        Self {
            name: NormalizedName::parse(name),
        }
    }

    pub fn genre_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl NameIdentity for Genre {
    fn identity(&self) -> &NormalizedName {
        &self.name
    }
}
