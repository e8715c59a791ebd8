//! Alpha-cut families.

use crate::prelude::*;

/// The half-open interval `(lower, upper]` of alpha values over which a given cut is valid.
pub type AlphaInterval = (f64, f64);

/// The alpha-cuts of a fuzzy set, represented as a map from crisp sets of elements to
/// intervals of alpha values.
///
/// A *well-formed* family, as produced by [`FuzzySet::alpha_cuts`], satisfies two invariants:
///
/// - The keys form a chain under inclusion: as `upper` grows, the cut shrinks or stays equal.
/// - Sorted by `lower`, the intervals tile `[0, max grade]` without gaps, starting at `0.0`.
///
/// Neither invariant is enforced on construction. Families with *duplicate* keys cannot be
/// represented in a map at all; operations that must tolerate them, like [`merge_alpha_cuts`],
/// take a sequence of entries instead.
pub type AlphaCuts<E> = IndexMap<CrispSet<E>, AlphaInterval>;

/// Merges a sequence of alpha-cut entries into a family with one entry per distinct crisp set,
/// widening the interval of every duplicate to `(min lower, max upper)`.
///
/// The extension principle can map two distinct cuts onto the same image set; their alpha
/// ranges must be combined rather than discarded, which is exactly what this does.
pub fn merge_alpha_cuts<E, I>(cuts: I) -> AlphaCuts<E>
where
    E: Eq + Hash,
    I: IntoIterator<Item = (CrispSet<E>, AlphaInterval)>,
{
    let mut merged = AlphaCuts::new();
    for (elements, (lower, upper)) in cuts {
        match merged.entry(elements) {
            Entry::Occupied(mut entry) => {
                let (min, max) = entry.get_mut();
                *min = min.min(lower);
                *max = max.max(upper);
            }
            Entry::Vacant(entry) => {
                entry.insert((lower, upper));
            }
        }
    }

    merged
}

/// The entries of a family, sorted in ascending order of their interval's upper bound.
///
/// Reconstruction folds entries in this order so that higher cuts overwrite lower ones. The
/// sort is explicit: the iteration order of the map holding the family is never relied upon.
#[must_use]
pub fn entries_by_upper<E: Eq + Hash>(cuts: AlphaCuts<E>) -> Vec<(CrispSet<E>, AlphaInterval)> {
    let mut entries: Vec<_> = cuts.into_iter().collect();
    entries.sort_by(|(_, (_, fst)), (_, (_, snd))| fst.total_cmp(snd));
    entries
}
