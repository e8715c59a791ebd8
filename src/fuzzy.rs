//! Discrete fuzzy sets [`FuzzySet`].

use crate::prelude::*;

/// A discrete fuzzy set with a finite number of elements.
///
/// ## Invariants
///
/// Every element of the set must have an entry in the membership function. Operations that
/// look up the grade of an element violating this invariant panic; this is a programming
/// error, not a recoverable condition.
///
/// Equality and hashing are defined by the element set alone, ignoring membership grades: two
/// fuzzy sets over the same support compare equal even when they grade it differently. This is
/// a deliberate, sharp-edged contract: deduplication throughout the crate only ever relies on
/// *crisp* set identity, so the weaker notion suffices.
#[derive(Clone, Debug)]
pub struct FuzzySet<E> {
    /// The elements of the set.
    elements: CrispSet<E>,
    /// Maps each element to its membership grade in `[0, 1]`.
    membership: IndexMap<E, f64>,
}

// -------------------- Basic traits -------------------- //

impl<E: Eq + Hash> PartialEq for FuzzySet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Eq + Hash> Eq for FuzzySet<E> {}

impl<E: Eq + Hash> Hash for FuzzySet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<'a, E: Eq + Hash> IntoIterator for &'a FuzzySet<E> {
    type Item = &'a E;
    type IntoIter = indexmap::set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Displays a fuzzy set in grade/element roster notation, e.g. `{0.3/4, 0.7/5, 1/6}`.
impl<E: Display + Eq + Hash> Display for FuzzySet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.elements.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{}/{fst}", self.membership[fst])?;
            for element in iter {
                write!(f, ", {}/{element}", self.membership[element])?;
            }
        }
        f.write_char('}')
    }
}

// -------------------- Construction -------------------- //

impl<E: Eq + Hash> FuzzySet<E> {
    /// Initializes a fuzzy set from its elements and membership function.
    ///
    /// Every element must have an entry in `membership`; see the type-level invariants.
    #[must_use]
    pub fn new(elements: CrispSet<E>, membership: IndexMap<E, f64>) -> Self {
        Self {
            elements,
            membership,
        }
    }

    /// Initializes a fuzzy set whose elements are the keys of a membership function.
    #[must_use]
    pub fn from_membership(membership: IndexMap<E, f64>) -> Self
    where
        E: Clone,
    {
        Self {
            elements: membership.keys().cloned().collect(),
            membership,
        }
    }

    /// Builds the fuzzy set determined by an alpha-cut family.
    ///
    /// This is the inverse of [`Self::alpha_cuts`]: every element is assigned the `upper`
    /// bound of its highest cut. Entries are folded in ascending order of `upper` (sorted
    /// explicitly, via [`entries_by_upper`]), so the most restrictive cut an element survives
    /// into determines its grade. The family need not be well-formed.
    #[must_use]
    pub fn from_alpha_cuts(cuts: AlphaCuts<E>) -> Self
    where
        E: Clone,
    {
        let mut membership = IndexMap::new();
        for (elements, (_lower, upper)) in entries_by_upper(cuts) {
            for element in elements {
                membership.insert(element, upper);
            }
        }

        Self::from_membership(membership)
    }
}

// -------------------- Basic methods -------------------- //

impl<E: Eq + Hash> FuzzySet<E> {
    /// The elements of the set, i.e. its support.
    #[must_use]
    pub fn elements(&self) -> &CrispSet<E> {
        &self.elements
    }

    /// The membership function of the set.
    #[must_use]
    pub fn membership(&self) -> &IndexMap<E, f64> {
        &self.membership
    }

    /// Membership relation ∈.
    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.elements.card()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements of the set, in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, E> {
        self.elements.iter()
    }
}

// -------------------- The alpha-cut algebra -------------------- //

impl<E: Eq + Hash> FuzzySet<E> {
    /// The alpha-cut of the fuzzy set: the crisp set of elements whose membership grade is at
    /// least `alpha`.
    ///
    /// `alpha_cut(0.0)` returns every element, and any `alpha` above the greatest grade
    /// returns the empty set.
    #[must_use]
    pub fn alpha_cut(&self, alpha: f64) -> CrispSet<E>
    where
        E: Clone,
    {
        self.elements
            .iter()
            .filter(|element| self.membership[*element] >= alpha)
            .cloned()
            .collect()
    }

    /// Decomposes the fuzzy set into its alpha-cut family.
    ///
    /// The distinct membership grades, sorted ascending with `0.0` prepended, split `[0, max
    /// grade]` into consecutive intervals; each interval `(lower, upper]` maps the cut at
    /// `upper` to that interval. Grades shared by several elements produce a single cut, so
    /// the result is well-formed by construction. Entries are inserted in ascending order of
    /// `upper`.
    #[must_use]
    pub fn alpha_cuts(&self) -> AlphaCuts<E>
    where
        E: Clone,
    {
        let mut grades: SmallVec<f64> = self.membership.values().copied().collect();
        grades.sort_unstable_by(f64::total_cmp);
        grades.dedup();

        let mut cuts = AlphaCuts::with_capacity(grades.len());
        let mut lower = 0.0;
        for upper in grades {
            cuts.insert(self.alpha_cut(upper), (lower, upper));
            lower = upper;
        }

        cuts
    }

    /// Applies an element-wise function to the fuzzy set under Zadeh's extension principle,
    /// returning the fuzzy set of results.
    ///
    /// The set is decomposed into its alpha-cuts, each cut is replaced by its image under
    /// `function`, colliding images are merged with [`merge_alpha_cuts`], and the result is
    /// rebuilt with [`Self::from_alpha_cuts`]. Consequently the grade of a result element is
    /// the supremum of the grades of its preimages.
    #[must_use]
    pub fn apply_elementwise<R, F>(&self, mut function: F) -> FuzzySet<R>
    where
        E: Clone,
        R: Clone + Eq + Hash,
        F: FnMut(&E) -> R,
    {
        FuzzySet::from_alpha_cuts(merge_alpha_cuts(self.alpha_cuts().into_iter().map(
            |(elements, interval)| (crate::crisp::apply_elementwise(&elements, &mut function), interval),
        )))
    }

    /// Applies a crisp-set-valued function to the fuzzy set, returning the integral of the
    /// function over the alpha-cut family, weighted by interval width:
    /// `Σ (upper − lower) · function(cut)`.
    ///
    /// No normalization is applied. The weights sum to the greatest membership grade, so for a
    /// normal fuzzy set a normalized `function` yields a normalized result. Terms are added
    /// with Neumaier compensated summation, so exact identities like this one survive
    /// rounding: intervals that tile `[0, 1]` contribute weights summing to exactly `1.0`.
    #[must_use]
    pub fn apply_numeric<F: FnMut(&CrispSet<E>) -> f64>(&self, mut function: F) -> f64
    where
        E: Clone,
    {
        compensated_sum(
            self.alpha_cuts()
                .into_iter()
                .map(|(elements, (lower, upper))| (upper - lower) * function(&elements)),
        )
    }

    /// Fallible form of [`Self::apply_numeric`].
    ///
    /// Cuts are evaluated in ascending order of their interval, and evaluation stops at the
    /// first failure.
    ///
    /// ## Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_apply_numeric<Er, F>(&self, mut function: F) -> Result<f64, Er>
    where
        E: Clone,
        F: FnMut(&CrispSet<E>) -> Result<f64, Er>,
    {
        let mut total = CompensatedSum::default();
        for (elements, (lower, upper)) in self.alpha_cuts() {
            total.add((upper - lower) * function(&elements)?);
        }

        Ok(total.value())
    }
}
