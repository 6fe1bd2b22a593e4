use std::iter::FromIterator;
use tarski_fol::syntax::V;

/// Maps variables to elements of a universe.
///
/// Assignments are persistent: [`Assignment::bind`] returns a new assignment that shares its
/// structure with the receiver, leaving the receiver unchanged. Quantifiers rely on this to
/// evaluate their bodies under every element without restoring state.
#[derive(Clone, PartialEq, Debug)]
pub struct Assignment<E: Clone>(im::HashMap<V, E>);

impl<E: Clone> Assignment<E> {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Returns the element assigned to `variable`, if any.
    pub fn get(&self, variable: &V) -> Option<&E> {
        self.0.get(variable)
    }

    /// Returns a new assignment that agrees with the receiver except that `variable` is
    /// assigned to `element`.
    pub fn bind(&self, variable: V, element: E) -> Self {
        Self(self.0.update(variable, element))
    }

    /// Assigns `element` to `variable` in place.
    pub fn insert(&mut self, variable: V, element: E) {
        self.0.insert(variable, element);
    }

    /// Returns the number of assigned variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<E: Clone> Default for Assignment<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone, S: Into<V>> FromIterator<(S, E)> for Assignment<E> {
    fn from_iter<T: IntoIterator<Item = (S, E)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(v, e)| (v.into(), e)).collect())
    }
}
