//! # Discrete fuzzy sets
//!
//! A [fuzzy set](https://en.wikipedia.org/wiki/Fuzzy_set) over a finite universe assigns each
//! element a membership grade in `[0, 1]`. By the decomposition theorem, such a set is fully
//! determined by its family of [alpha-cuts](https://en.wikipedia.org/wiki/Fuzzy_set#Alpha-cut):
//! the crisp sets of elements whose grade reaches each threshold. This crate implements that
//! algebra:
//!
//! - [`FuzzySet::alpha_cuts`] decomposes a fuzzy set into its alpha-cut family, and
//!   [`FuzzySet::from_alpha_cuts`] rebuilds it.
//! - [`FuzzySet::apply_elementwise`] lifts an ordinary function on elements to fuzzy sets via
//!   Zadeh's extension principle.
//! - [`FuzzySet::apply_numeric`] integrates a crisp-set-valued function over the cut family,
//!   collapsing a fuzzy set into a single real number.
//! - [`prob::fuzzy_cond_prob_dist`] conditions a probability distribution on a fuzzy
//!   proposition by integrating classical conditional probabilities over its cuts.
//!
//! ```
//! use fzset::prelude::*;
//!
//! let tall = FuzzySet::from_membership([(4, 0.3), (5, 0.7), (6, 1.0)].into_iter().collect());
//!
//! let expected: CrispSet<i32> = [5, 6].into_iter().collect();
//! assert_eq!(tall.alpha_cut(0.7), expected);
//! assert_eq!(tall.apply_numeric(|cut| cut.card() as f64), 2.0);
//! ```
//!
//! All values are immutable once built, and every operation is a pure function; nothing here
//! requires synchronization. Membership grades are compared exactly: decomposition
//! deduplicates grades by floating-point equality, and the validations in [`prob`] use exact
//! `== 1.0` checks with no epsilon.
//!
//! [`FuzzySet::alpha_cuts`]: fuzzy::FuzzySet::alpha_cuts
//! [`FuzzySet::from_alpha_cuts`]: fuzzy::FuzzySet::from_alpha_cuts
//! [`FuzzySet::apply_elementwise`]: fuzzy::FuzzySet::apply_elementwise
//! [`FuzzySet::apply_numeric`]: fuzzy::FuzzySet::apply_numeric

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod crisp;
pub mod cuts;
pub mod fuzzy;
pub mod prelude;
pub mod prob;

mod sum;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;
