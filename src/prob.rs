//! Probability distributions conditioned on fuzzy propositions.

use crate::prelude::*;

/// A probability distribution over a finite collection of possible worlds.
///
/// The total mass must be exactly `1.0`; [`fuzzy_cond_prob_dist`] validates this with exact
/// floating-point equality, summing the masses with Neumaier compensation.
pub type ProbDist<W> = IndexMap<W, f64>;

/// Precondition violation in [`fuzzy_cond_prob_dist`].
///
/// Each variant displays the exact user-visible message for its condition. These messages are
/// part of the public contract; in particular, the missing space in the
/// [`NotNormal`](Self::NotNormal) message is preserved as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CondProbError {
    /// The distribution or the proposition has no worlds at all.
    #[error("prob_dist and fuzzy_prop must be non-empty.")]
    Empty,

    /// The distribution and the proposition range over different worlds.
    #[error("prob_dist and fuzzy_prop must be defined for the same possible worlds.")]
    WorldMismatch,

    /// The proposition never attains membership `1.0`.
    #[error("fuzzy_prop must contain a possible world with membershipvalue 1.")]
    NotNormal,

    /// The probabilities do not sum to exactly `1.0`.
    #[error("prob_dist must have total probability 1.")]
    TotalMass,

    /// A cut with zero total probability mass was integrated over. Carries the offending cut,
    /// rendered in roster notation.
    #[error("{0} must have non-zero total probability.")]
    ZeroMass(String),
}

/// Conditions a probability distribution on a fuzzy proposition over the same possible
/// worlds, returning the fuzzy-conditioned distribution.
///
/// For each world `w`, the classical conditional probability of `w` given a crisp set of
/// worlds is integrated over the proposition's alpha-cuts via
/// [`try_apply_numeric`](FuzzySet::try_apply_numeric). Since the proposition is required to be
/// normal, the interval weights telescope and the resulting values again sum to `1.0`.
///
/// ## Errors
///
/// - [`CondProbError::Empty`] if either input is empty.
/// - [`CondProbError::WorldMismatch`] if the inputs range over different worlds.
/// - [`CondProbError::NotNormal`] if no world has membership exactly `1.0`.
/// - [`CondProbError::TotalMass`] if the probabilities do not sum to exactly `1.0`.
/// - [`CondProbError::ZeroMass`] if a cut encountered during integration carries zero
///   probability mass. Unlike the others, this cannot be checked eagerly: it surfaces only
///   once aggregation reaches the offending cut.
#[allow(clippy::float_cmp)]
pub fn fuzzy_cond_prob_dist<W: Clone + Debug + Eq + Hash>(
    prob_dist: &ProbDist<W>,
    fuzzy_prop: &FuzzySet<W>,
) -> Result<ProbDist<W>, CondProbError> {
    if prob_dist.is_empty() || fuzzy_prop.is_empty() {
        return Err(CondProbError::Empty);
    }

    if prob_dist.len() != fuzzy_prop.card() || !prob_dist.keys().all(|w| fuzzy_prop.contains(w))
    {
        return Err(CondProbError::WorldMismatch);
    }

    if !fuzzy_prop.membership().values().any(|&grade| grade == 1.0) {
        return Err(CondProbError::NotNormal);
    }

    if compensated_sum(prob_dist.values().copied()) != 1.0 {
        return Err(CondProbError::TotalMass);
    }

    /// The summed probability mass of a crisp set of worlds.
    fn sum_prob<W: Eq + Hash>(prob_dist: &ProbDist<W>, worlds: &CrispSet<W>) -> f64 {
        compensated_sum(worlds.iter().map(|w| prob_dist[w]))
    }

    let mut result = ProbDist::with_capacity(prob_dist.len());
    for world in prob_dist.keys() {
        let cond_prob = fuzzy_prop.try_apply_numeric(|worlds| {
            let total = sum_prob(prob_dist, worlds);
            if total == 0.0 {
                return Err(CondProbError::ZeroMass(format!("{worlds:?}")));
            }

            let mass = if worlds.contains(world) {
                prob_dist[world]
            } else {
                0.0
            };
            Ok(mass / total)
        })?;

        result.insert(world.clone(), cond_prob);
    }

    Ok(result)
}
