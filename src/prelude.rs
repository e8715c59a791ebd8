//! Crate prelude.

// The actual prelude.
pub use crate::{
    crisp::{apply_elementwise, CrispSet},
    cuts::{entries_by_upper, merge_alpha_cuts, AlphaCuts, AlphaInterval},
    fuzzy::FuzzySet,
    prob::{fuzzy_cond_prob_dist, CondProbError, ProbDist},
};

// Convenient imports within the crate.
pub(crate) use crate::{
    sum::{compensated_sum, CompensatedSum},
    SmallVec,
};
pub(crate) use indexmap::{map::Entry, IndexMap, IndexSet};
pub(crate) use std::{
    collections::hash_map::DefaultHasher,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::{Hash, Hasher},
};
pub(crate) use thiserror::Error;
