//! Crisp sets [`CrispSet`] of hashable elements.

use crate::prelude::*;

/// A crisp (ordinary) finite set.
///
/// This is a thin wrapper around [`IndexSet`] that additionally implements [`Hash`], so crisp
/// sets can serve as the keys of an alpha-cut family. The hash is a commutative combination of
/// the element hashes, making it independent of insertion order and thus consistent with the
/// set equality inherited from [`IndexSet`].
///
/// Iteration visits elements in insertion order, which is stable for a given instance.
#[derive(Clone)]
pub struct CrispSet<E>(IndexSet<E>);

// -------------------- Basic traits -------------------- //

impl<E> IntoIterator for CrispSet<E> {
    type Item = E;
    type IntoIter = indexmap::set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a CrispSet<E> {
    type Item = &'a E;
    type IntoIter = indexmap::set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E> Default for CrispSet<E> {
    fn default() -> Self {
        Self(IndexSet::new())
    }
}

impl<E: Eq + Hash> From<IndexSet<E>> for CrispSet<E> {
    fn from(elements: IndexSet<E>) -> Self {
        Self(elements)
    }
}

impl<E: Eq + Hash> FromIterator<E> for CrispSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<E: Eq + Hash> PartialEq for CrispSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<E: Eq + Hash> Eq for CrispSet<E> {}

impl<E: Eq + Hash> Hash for CrispSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // A commutative accumulator, so that sets with different insertion orders hash alike.
        let mut acc = 0u64;
        for element in &self.0 {
            let mut hasher = DefaultHasher::new();
            element.hash(&mut hasher);
            acc = acc.wrapping_add(hasher.finish());
        }

        state.write_usize(self.0.len());
        state.write_u64(acc);
    }
}

/// Writes a crisp set in roster notation, e.g. `{1, 2, 3}`.
impl<E: Debug> Debug for CrispSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.0.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst:?}")?;
            for element in iter {
                write!(f, ", {element:?}")?;
            }
        }
        f.write_char('}')
    }
}

/// Displays a crisp set in roster notation, e.g. `{1, 2, 3}`.
impl<E: Display> Display for CrispSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.0.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
            for element in iter {
                write!(f, ", {element}")?;
            }
        }
        f.write_char('}')
    }
}

// -------------------- Basic methods -------------------- //

impl<E: Eq + Hash> CrispSet<E> {
    /// The empty set Ø.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership relation ∈.
    pub fn contains(&self, element: &E) -> bool {
        self.0.contains(element)
    }

    /// Iterates over the elements of the set, in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, E> {
        self.0.iter()
    }

    /// Returns a reference to the underlying [`IndexSet`].
    #[must_use]
    pub fn as_set(&self) -> &IndexSet<E> {
        &self.0
    }

    /// Returns the underlying [`IndexSet`].
    #[must_use]
    pub fn into_set(self) -> IndexSet<E> {
        self.0
    }
}

/// The image of a crisp set under an element-wise function.
///
/// Distinct elements may map to the same result, so the image can have a smaller cardinality
/// than its source.
#[must_use]
pub fn apply_elementwise<A: Eq + Hash, R: Eq + Hash, F: FnMut(&A) -> R>(
    elements: &CrispSet<A>,
    function: F,
) -> CrispSet<R> {
    elements.iter().map(function).collect()
}
