//! Lazy sequence protocol shared by the containers in this crate
//!
//! A [`Sequence`] hands out a fresh, finite iterator on every call to
//! [`Sequence::sequence`] and gets `map`, `filter` and `for_each` for free.
//! Results of `map` and `filter` land in a [`List`], the crate's basic
//! [`Collection`].

/// A container that can produce a lazy, restartable sequence of its elements
pub trait Sequence {
    /// Element yielded by the sequence
    type Item<'a>
    where
        Self: 'a;

    /// Iterator over the container's elements in traversal order
    type Iter<'a>: Iterator<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Produces a new sequence over the container
    fn sequence(&self) -> Self::Iter<'_>;

    /// Applies `transform` to every element and collects the results
    fn map<'a, R, F>(&'a self, transform: F) -> List<R>
    where
        F: FnMut(Self::Item<'a>) -> R,
    {
        self.sequence().map(transform).collect()
    }

    /// Keeps the elements for which `predicate` holds
    fn filter<'a, P>(&'a self, predicate: P) -> List<Self::Item<'a>>
    where
        P: FnMut(&Self::Item<'a>) -> bool,
    {
        self.sequence().filter(predicate).collect()
    }

    /// Runs `action` on every element
    fn for_each<'a, F>(&'a self, action: F)
    where
        F: FnMut(Self::Item<'a>),
    {
        self.sequence().for_each(action);
    }
}

/// A growable sequence container
pub trait Collection: Sequence {
    /// Owned element type
    type Element;

    /// Appends an element at the end
    fn append(&mut self, element: Self::Element);

    /// Removes the element at `position`, shifting later elements left.
    /// Returns `None` when `position` is out of range.
    fn remove(&mut self, position: usize) -> Option<Self::Element>;

    /// Returns true if the collection holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements
    fn size(&self) -> usize;
}

/// Vec-backed [`Collection`] used as the output of `map` and `filter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<E> {
    /// Elements in append order
    elements: Vec<E>,
}

impl<E> List<E> {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Returns an iterator over the elements in append order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// Views the elements as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Consumes the list, returning its elements
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.elements
    }
}

impl<E> Default for List<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Sequence for List<E> {
    type Item<'a>
        = &'a E
    where
        Self: 'a;
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a;

    fn sequence(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<E> Collection for List<E> {
    type Element = E;

    fn append(&mut self, element: E) {
        self.elements.push(element);
    }

    fn remove(&mut self, position: usize) -> Option<E> {
        (position < self.elements.len()).then(|| self.elements.remove(position))
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }
}

impl<E> FromIterator<E> for List<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}

impl<E> Extend<E> for List<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<E> IntoIterator for List<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a List<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
