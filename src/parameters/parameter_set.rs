//! Parameter set definition and implementation
//!
//! This module provides [`ParameterSet`], a fixed-size container for a
//! compile-time selection of parameters of a policy, together with an optional
//! covariance matrix that the set owns exclusively. Every stored value is range
//! corrected, which keeps residuals between two sets well defined.

use crate::error::{ParSetError, Result};
use crate::parameters::bounds::ParameterTrait;
use crate::parameters::policy::{ParameterId, ParameterPolicy};
use crate::parameters::residual::residual_vector;
use crate::parameters::selection::{self, ParameterSelection, Selects};
use ndarray::{Array1, Array2};
use std::fmt;
use std::marker::PhantomData;

/// A set of parameters of policy `P`, selected and ordered by `S`.
///
/// `S` is a tuple of identifier tags, e.g. `(Loc1, Phi, Theta)`. Values are
/// stored in the order of that tuple. The optional covariance is a square
/// matrix whose rows and columns follow the same order.
///
/// # Examples
///
/// ```
/// use parset_rs::parameters::policy::{BoundParameters, Loc1, Phi, Theta};
/// use parset_rs::parameters::ParameterSet;
/// use std::f64::consts::PI;
///
/// type Measurement = ParameterSet<BoundParameters, (Loc1, Phi, Theta)>;
///
/// let mut meas = Measurement::from_slice(None, &[0.5, 0.3 * PI, 0.2]).unwrap();
/// assert_eq!(meas.parameter(Loc1), 0.5);
///
/// // theta is clamped to [0, pi]
/// meas.set_parameter(Theta, PI + 1.0);
/// assert_eq!(meas.parameter(Theta), PI);
/// ```
pub struct ParameterSet<P, S> {
    /// Corrected values in selection order
    values: Array1<f64>,

    /// Optional covariance, exclusively owned
    covariance: Option<Array2<f64>>,

    _policy: PhantomData<fn() -> (P, S)>,
}

impl<P: ParameterPolicy, S: ParameterSelection<P>> ParameterSet<P, S> {
    /// Number of stored parameters
    pub const SIZE: usize = S::SIZE;

    const SELECTION_CHECK: () = assert!(
        selection::is_valid_selection(S::INDICES, P::FULL_SIZE),
        "a parameter selection must hold distinct identifiers of its policy"
    );

    /// Create a new parameter set from values in selection order
    ///
    /// # Arguments
    ///
    /// * `covariance` - Optional covariance matrix, ownership is transferred to the set
    /// * `values` - Raw parameter values, range correction is applied to each of them
    ///
    /// # Returns
    ///
    /// The new parameter set, or `ParSetError::DimensionMismatch` if the number of
    /// values or the covariance shape does not match the selection
    ///
    /// A selection naming the same identifier twice is rejected at compile time:
    ///
    /// ```compile_fail
    /// use parset_rs::parameters::policy::{BoundParameters, Phi};
    /// use parset_rs::parameters::ParameterSet;
    ///
    /// let set = ParameterSet::<BoundParameters, (Phi, Phi)>::from_slice(None, &[0.1, 0.2]);
    /// ```
    pub fn new(covariance: Option<Array2<f64>>, values: Array1<f64>) -> Result<Self> {
        #[allow(clippy::let_unit_value)]
        let () = Self::SELECTION_CHECK;

        Self::check_values(values.len())?;
        if let Some(cov) = &covariance {
            Self::check_covariance(cov)?;
        }

        Ok(Self {
            values: Self::corrected(values),
            covariance,
            _policy: PhantomData,
        })
    }

    /// Create a new parameter set from a list of values in selection order
    pub fn from_slice(covariance: Option<Array2<f64>>, values: &[f64]) -> Result<Self> {
        Self::new(covariance, Array1::from(values.to_vec()))
    }

    /// Create a new parameter set by projecting a full parameter vector
    ///
    /// # Arguments
    ///
    /// * `covariance` - Optional covariance of the selected parameters
    /// * `full` - Values of all `P::FULL_SIZE` parameters in canonical order
    pub fn from_full(covariance: Option<Array2<f64>>, full: &Array1<f64>) -> Result<Self> {
        if full.len() != P::FULL_SIZE {
            tracing::debug!(
                policy = P::NAME,
                expected = P::FULL_SIZE,
                found = full.len(),
                "rejecting full parameter vector"
            );
            return Err(ParSetError::DimensionMismatch(format!(
                "expected a full parameter vector of length {}, got {}",
                P::FULL_SIZE,
                full.len()
            )));
        }

        let values = S::INDICES.iter().map(|&index| full[index]).collect();
        Self::new(covariance, values)
    }

    /// Number of stored parameters
    pub fn size() -> usize {
        S::SIZE
    }

    /// Check whether identifier `Id` is part of the selection
    ///
    /// ```
    /// use parset_rs::parameters::policy::{BoundParameters, Loc1, Phi, Qop};
    /// use parset_rs::parameters::ParameterSet;
    ///
    /// type Set = ParameterSet<BoundParameters, (Loc1, Phi)>;
    /// assert!(Set::contains::<Phi>());
    /// assert!(!Set::contains::<Qop>());
    /// ```
    pub const fn contains<Id: ParameterId<P>>() -> bool {
        selection::contains_index(S::INDICES, Id::INDEX)
    }

    /// Names of the stored parameters in selection order
    pub fn parameter_names() -> Vec<&'static str> {
        S::INDICES.iter().map(|&index| P::NAMES[index]).collect()
    }

    /// Traits of the stored parameters in selection order
    pub fn parameter_traits() -> Vec<ParameterTrait> {
        S::INDICES.iter().map(|&index| P::TRAITS[index]).collect()
    }

    /// Get the stored value of parameter `id`
    ///
    /// Only identifiers of the selection are accepted; anything else fails
    /// to compile:
    ///
    /// ```compile_fail
    /// use parset_rs::parameters::policy::{BoundParameters, Loc1, Phi, Theta};
    /// use parset_rs::parameters::ParameterSet;
    ///
    /// let set = ParameterSet::<BoundParameters, (Loc1, Phi)>::from_slice(None, &[0.0, 0.0]).unwrap();
    /// let theta = set.parameter(Theta);
    /// ```
    pub fn parameter<Id, Slot>(&self, _id: Id) -> f64
    where
        Id: ParameterId<P>,
        S: Selects<Id, Slot>,
    {
        self.values[<S as Selects<Id, Slot>>::POSITION]
    }

    /// Set the value of parameter `id`
    ///
    /// The value is range-corrected before it is stored, so a later
    /// [`parameter`](Self::parameter) call may return something else than `value`.
    pub fn set_parameter<Id, Slot>(&mut self, _id: Id, value: f64)
    where
        Id: ParameterId<P>,
        S: Selects<Id, Slot>,
    {
        self.values[<S as Selects<Id, Slot>>::POSITION] = correct_logged::<P>(Id::INDEX, value);
    }

    /// All stored values in selection order
    pub fn parameters(&self) -> &Array1<f64> {
        &self.values
    }

    /// Replace all stored values
    ///
    /// # Arguments
    ///
    /// * `values` - Raw values in selection order, each one is corrected independently
    ///
    /// # Returns
    ///
    /// `Ok(())` if the values were stored, or an error if the length does not match.
    /// On error the set is left unchanged.
    pub fn set_parameters(&mut self, values: &Array1<f64>) -> Result<()> {
        Self::check_values(values.len())?;
        self.values = Self::corrected(values.clone());
        Ok(())
    }

    /// The covariance matrix, if one was set
    pub fn covariance(&self) -> Option<&Array2<f64>> {
        self.covariance.as_ref()
    }

    /// Replace the covariance matrix
    ///
    /// # Arguments
    ///
    /// * `covariance` - New covariance, or `None` to drop the current one
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `ParSetError::DimensionMismatch` if the matrix is not
    /// `SIZE x SIZE`, in which case the previous covariance is kept
    pub fn set_covariance(&mut self, covariance: Option<Array2<f64>>) -> Result<()> {
        if let Some(cov) = &covariance {
            Self::check_covariance(cov)?;
        }
        self.covariance = covariance;
        Ok(())
    }

    /// Move the covariance out of the set, leaving none behind
    pub fn take_covariance(&mut self) -> Option<Array2<f64>> {
        self.covariance.take()
    }

    /// Projection matrix from the full parameter space onto this selection
    ///
    /// The matrix has `SIZE` rows and `P::FULL_SIZE` columns; row `k` selects the
    /// `k`-th identifier of `S`.
    pub fn projector() -> Array2<f64> {
        selection::projector::<P, S>()
    }

    /// Embed the stored values into the full parameter space
    ///
    /// Parameters outside the selection are zero. This is the transposed
    /// projector applied to the stored values.
    pub fn expand(&self) -> Array1<f64> {
        let mut full = Array1::zeros(P::FULL_SIZE);
        for (&index, &value) in S::INDICES.iter().zip(self.values.iter()) {
            full[index] = value;
        }
        full
    }

    /// Residual of this set with respect to `other`
    ///
    /// Computed componentwise in selection order as `self - other`. Cyclic
    /// parameters take the shorter way around their period; bounded parameters
    /// use the clamped values.
    pub fn residual(&self, other: &Self) -> Array1<f64> {
        residual_vector::<P, S>(&self.values, &other.values)
    }

    /// Exchange values and covariance with `other`
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.values, &mut other.values);
        std::mem::swap(&mut self.covariance, &mut other.covariance);
    }

    /// Compare with `other` allowing an absolute deviation of `tol`
    ///
    /// Both sets must either lack a covariance or have covariances that agree
    /// within `tol` as well.
    pub fn is_approx(&self, other: &Self, tol: f64) -> bool {
        let values_match = self
            .values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| (a - b).abs() <= tol);

        let covariance_match = match (&self.covariance, &other.covariance) {
            (None, None) => true,
            (Some(a), Some(b)) => a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol),
            _ => false,
        };

        values_match && covariance_match
    }

    fn check_values(len: usize) -> Result<()> {
        if len != S::SIZE {
            tracing::debug!(
                policy = P::NAME,
                expected = S::SIZE,
                found = len,
                "rejecting parameter values"
            );
            return Err(ParSetError::DimensionMismatch(format!(
                "expected {} parameter values, got {}",
                S::SIZE,
                len
            )));
        }
        Ok(())
    }

    fn check_covariance(covariance: &Array2<f64>) -> Result<()> {
        if covariance.dim() != (S::SIZE, S::SIZE) {
            tracing::debug!(
                policy = P::NAME,
                expected = S::SIZE,
                rows = covariance.nrows(),
                cols = covariance.ncols(),
                "rejecting covariance"
            );
            return Err(ParSetError::DimensionMismatch(format!(
                "expected a {0}x{0} covariance, got {1}x{2}",
                S::SIZE,
                covariance.nrows(),
                covariance.ncols()
            )));
        }
        Ok(())
    }

    fn corrected(mut values: Array1<f64>) -> Array1<f64> {
        for (value, &index) in values.iter_mut().zip(S::INDICES) {
            *value = correct_logged::<P>(index, *value);
        }
        values
    }
}

/// Apply the correction of the parameter at canonical `index`, tracing any change
fn correct_logged<P: ParameterPolicy>(index: usize, value: f64) -> f64 {
    let corrected = P::TRAITS[index].correct(value);
    if corrected != value {
        tracing::trace!(
            parameter = P::NAMES[index],
            raw = value,
            corrected,
            "range correction applied"
        );
    }
    corrected
}

impl<P, S> Clone for ParameterSet<P, S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            covariance: self.covariance.clone(),
            _policy: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Copy first, then swap the storage in
        let mut copy = source.clone();
        std::mem::swap(&mut self.values, &mut copy.values);
        std::mem::swap(&mut self.covariance, &mut copy.covariance);
    }
}

impl<P, S> PartialEq for ParameterSet<P, S> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.covariance == other.covariance
    }
}

impl<P: ParameterPolicy, S: ParameterSelection<P>> fmt::Debug for ParameterSet<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSet")
            .field("policy", &P::NAME)
            .field("parameters", &Self::parameter_names())
            .field("values", &self.values)
            .field("covariance", &self.covariance)
            .finish()
    }
}

impl<P: ParameterPolicy, S: ParameterSelection<P>> fmt::Display for ParameterSet<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", P::NAME)?;
        for (k, (&index, value)) in S::INDICES.iter().zip(self.values.iter()).enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", P::NAMES[index], value)?;
        }
        write!(f, ")")?;
        if self.covariance.is_some() {
            write!(f, " with covariance")?;
        }
        Ok(())
    }
}
