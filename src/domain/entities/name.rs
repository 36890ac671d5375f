//! Normalised name identity shared by the catalogue value objects.

use std::fmt;

/// A trimmed name that may be absent.
///
/// Empty input produces an absent name rather than an error, so a value object built
/// from bad input is still a valid (nameless) object. Two absent names compare equal.
/// Only the empty string is rejected: whitespace-only input trims down to `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedName(Option<String>);

impl NormalizedName {
    /// Normalises raw input into a name.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            Self(None)
        } else {
            Self(Some(raw.trim().to_string()))
        }
    }

    /// The absent name.
    pub fn absent() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => f.write_str(name),
            None => f.write_str("<unnamed>"),
        }
    }
}

/// Capability shared by every value object whose identity is its name.
///
/// Equality, ordering and hashing of implementors derive from [`NameIdentity::identity`]
/// alone.
pub trait NameIdentity {
    fn identity(&self) -> &NormalizedName;

    fn name(&self) -> Option<&str> {
        self.identity().as_deref()
    }

    fn is_nameless(&self) -> bool {
        self.identity().is_absent()
    }
}

/// Appends `item` unless an equal item is already present.
///
/// Returns `true` if the collection changed.
pub(crate) fn push_unique<T: NameIdentity + PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        return false;
    }
    items.push(item);
    true
}

/// Removes the item equal to `item`, if any.
///
/// Returns `true` if the collection changed.
pub(crate) fn remove_by_name<T: NameIdentity + PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    match items.iter().position(|existing| existing == item) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
