//! Compensated floating-point summation.

/// A Neumaier compensated floating-point accumulator.
///
/// Each addition records the low-order bits it rounds away in a separate compensation term,
/// which is folded back in when the total is read. Sums of membership grades and probability
/// masses are compared with exact floating-point equality throughout the crate, and naive
/// left-to-right addition loses too much: the interval widths of a normal fuzzy set must sum
/// back to exactly `1.0`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CompensatedSum {
    /// The running sum.
    total: f64,
    /// The low-order bits lost by previous additions.
    compensation: f64,
}

impl CompensatedSum {
    /// Adds a term to the sum.
    pub(crate) fn add(&mut self, term: f64) {
        let sum = self.total + term;
        self.compensation += if self.total.abs() >= term.abs() {
            (self.total - sum) + term
        } else {
            (term - sum) + self.total
        };
        self.total = sum;
    }

    /// The accumulated sum, with the compensation folded back in.
    pub(crate) fn value(&self) -> f64 {
        self.total + self.compensation
    }
}

/// Sums the terms of an iterator with compensation.
pub(crate) fn compensated_sum<I: IntoIterator<Item = f64>>(terms: I) -> f64 {
    let mut sum = CompensatedSum::default();
    for term in terms {
        sum.add(term);
    }

    sum.value()
}
