use super::{Element, Error};
use std::{ops::Deref, slice};

/// Is the finite, ordered domain of discourse of a structure.
///
/// Quantified formulae are evaluated by visiting the elements of the universe in order.
#[derive(Clone, PartialEq, Debug)]
pub struct Universe<E>(Vec<E>);

impl<E: Element> Universe<E> {
    /// Creates a new universe with the given `elements`, keeping their order.
    ///
    /// Fails with [`Error::DuplicateElement`] if an element is equal to an earlier one.
    pub fn new<I: IntoIterator<Item = E>>(elements: I) -> Result<Self, Error> {
        let mut result: Vec<E> = Vec::new();
        for (index, element) in elements.into_iter().enumerate() {
            if result.contains(&element) {
                return Err(Error::DuplicateElement { index });
            }
            result.push(element);
        }
        Ok(Self(result))
    }

    /// Returns true if `element` belongs to the receiver.
    pub fn contains(&self, element: &E) -> bool {
        self.0.contains(element)
    }
}

impl<E> Universe<E> {
    /// Returns the elements of the receiver as a slice.
    pub fn elements(&self) -> &[E] {
        &self.0
    }

    /// Returns an iterator over the elements of the receiver.
    pub fn iter(&self) -> slice::Iter<E> {
        self.0.iter()
    }
}

impl<E> Deref for Universe<E> {
    type Target = [E];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, E> IntoIterator for &'a Universe<E> {
    type Item = &'a E;

    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let universe = Universe::new(vec![3, 1, 2]).unwrap();
        assert_eq!(&[3, 1, 2], universe.elements());
        assert_eq!(3, universe.len());
        assert!(universe.contains(&1));
        assert!(!universe.contains(&4));
        assert_eq!(vec![&3, &1, &2], universe.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_empty() {
        let universe = Universe::<u8>::new(vec![]).unwrap();
        assert!(universe.is_empty());
    }

    #[test]
    fn test_duplicate_element() {
        assert_eq!(
            Err(Error::DuplicateElement { index: 2 }),
            Universe::new(vec!["a", "b", "a"])
        );
    }
}
