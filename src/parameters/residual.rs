//! Residuals between parameter values
//!
//! Stored values are always range-corrected, so bounded parameters need no
//! special handling here: two values clamped to the same boundary differ by
//! exactly zero. Cyclic parameters take the shorter way around the period.

use crate::parameters::bounds::ParameterTrait;
use crate::parameters::policy::ParameterPolicy;
use crate::parameters::selection::ParameterSelection;
use ndarray::Array1;

/// Difference `a - b` of two corrected values of a parameter with trait `par_trait`
///
/// For a cyclic parameter with period `P` the result lies in `(-P/2, P/2]`.
///
/// # Examples
///
/// ```
/// use parset_rs::parameters::bounds::ParameterTrait;
/// use parset_rs::parameters::residual::difference;
/// use std::f64::consts::PI;
///
/// let phi = ParameterTrait::cyclic(-PI, PI);
/// let delta = difference(&phi, 0.9 * PI, -0.9 * PI);
/// assert!((delta + 0.2 * PI).abs() < 1e-12);
/// ```
pub fn difference(par_trait: &ParameterTrait, a: f64, b: f64) -> f64 {
    let delta = a - b;
    match par_trait.period() {
        Some(period) => fold_difference(delta, period),
        None => delta,
    }
}

/// Fold a difference of two values in `[min, min + period)` into `(-period/2, period/2]`
fn fold_difference(delta: f64, period: f64) -> f64 {
    let half_period = period / 2.0;
    if delta > half_period {
        delta - period
    } else if delta <= -half_period {
        delta + period
    } else {
        delta
    }
}

/// Componentwise residual `a - b` of two value vectors of selection `S`
///
/// Both vectors must hold corrected values in selection order.
pub fn residual_vector<P, S>(a: &Array1<f64>, b: &Array1<f64>) -> Array1<f64>
where
    P: ParameterPolicy,
    S: ParameterSelection<P>,
{
    debug_assert_eq!(a.len(), S::SIZE);
    debug_assert_eq!(b.len(), S::SIZE);

    a.iter()
        .zip(b.iter())
        .zip(S::INDICES)
        .map(|((&a_i, &b_i), &index)| difference(&P::TRAITS[index], a_i, b_i))
        .collect()
}
