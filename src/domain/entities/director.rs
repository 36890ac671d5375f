//! Director value object.

use super::name::{NameIdentity, NormalizedName};

/// A film director, identified by full name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Director {
    full_name: NormalizedName,
}

impl Director {
    /// Creates a director. Empty input yields a nameless director.
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name: NormalizedName::parse(full_name),
        }
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}

impl NameIdentity for Director {
    fn identity(&self) -> &NormalizedName {
        &self.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_director_creation() {
        let director = Director::new("Taika Waititi");
        assert_eq!(director.full_name(), Some("Taika Waititi"));
        assert!(!director.is_nameless());
    }

    #[test]
    fn test_director_trim_equality_and_hash() {
        let padded = Director::new("Smith ");
        let plain = Director::new("Smith");

        assert_eq!(padded, plain);
        assert_eq!(hash_of(&padded), hash_of(&plain));
    }

    #[test]
    fn test_director_empty_name_is_absent() {
        let director = Director::new("");
        assert_eq!(director.full_name(), None);
        assert!(director.is_nameless());
    }

    #[test]
    fn test_nameless_directors_are_equal() {
        assert_eq!(Director::new(""), Director::new(""));
    }

    #[test]
    fn test_director_ordering() {
        assert!(Director::new("Ang Lee") < Director::new("Bong Joon-ho"));
    }
}
