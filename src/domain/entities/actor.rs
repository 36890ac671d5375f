//! Actor value object with its colleague relation.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use super::name::{NameIdentity, NormalizedName};

/// An actor, identified by full name.
///
/// Each actor also remembers the colleagues it has worked with. The relation is
/// stored per actor: [`Actor::add_colleague`] records one direction only, so
/// `a.worked_with(&b)` does not imply `b.worked_with(&a)` unless the caller populated
/// both sides (see [`Actor::pair`]).
///
/// Equality, ordering and hashing use the name only; colleagues are ignored.
#[derive(Debug, Clone)]
pub struct Actor {
    full_name: NormalizedName,
    colleagues: HashSet<NormalizedName>,
}

impl Actor {
    /// Creates an actor with no colleagues. Empty input yields a nameless actor.
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name: NormalizedName::parse(full_name),
            colleagues: HashSet::new(),
        }
    }

    pub fn actor_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Records that this actor worked with `colleague`. Idempotent.
    pub fn add_colleague(&mut self, colleague: &Actor) {
        self.colleagues.insert(colleague.full_name.clone());
    }

    /// Returns `true` if `colleague` was recorded on this actor.
    pub fn worked_with(&self, colleague: &Actor) -> bool {
        self.colleagues.contains(&colleague.full_name)
    }

    pub fn colleague_count(&self) -> usize {
        self.colleagues.len()
    }

    /// Records the colleague relation on both actors.
    pub fn pair(a: &mut Actor, b: &mut Actor) {
        a.add_colleague(b);
        b.add_colleague(a);
    }
}

impl NameIdentity for Actor {
    fn identity(&self) -> &NormalizedName {
        &self.full_name
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Actor {}

impl PartialOrd for Actor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_name.cmp(&other.full_name)
    }
}

impl Hash for Actor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}
