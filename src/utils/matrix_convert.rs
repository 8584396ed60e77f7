//! Matrix conversion utilities for the parset-rs library.
//!
//! Parameter sets store their values and covariance as ndarray arrays. Fitting
//! code is frequently written against nalgebra instead, so this module converts
//! between the two and offers nalgebra views of a parameter set.

use crate::error::Result;
use crate::parameters::parameter_set::ParameterSet;
use crate::parameters::policy::ParameterPolicy;
use crate::parameters::selection::ParameterSelection;
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// Convert an ndarray Array2 to a nalgebra DMatrix.
///
/// # Arguments
///
/// * `arr` - The ndarray Array2 to convert
///
/// # Returns
///
/// * A nalgebra DMatrix with the same data
pub fn ndarray_to_nalgebra<T: nalgebra::Scalar>(arr: &Array2<T>) -> DMatrix<T> {
    DMatrix::from_fn(arr.nrows(), arr.ncols(), |i, j| arr[[i, j]].clone())
}

/// Convert a nalgebra DMatrix to an ndarray Array2.
pub fn nalgebra_to_ndarray<T: Clone>(mat: &DMatrix<T>) -> Array2<T> {
    Array2::from_shape_fn((mat.nrows(), mat.ncols()), |(i, j)| mat[(i, j)].clone())
}

/// Convert an ndarray Array1 to a nalgebra DVector.
pub fn ndarray_vec_to_nalgebra<T: nalgebra::Scalar>(arr: &Array1<T>) -> DVector<T> {
    DVector::from_fn(arr.len(), |i, _| arr[i].clone())
}

/// Convert a nalgebra DVector to an ndarray Array1.
pub fn nalgebra_vec_to_ndarray<T: Clone>(vec: &DVector<T>) -> Array1<T> {
    Array1::from_shape_fn(vec.nrows(), |i| vec[i].clone())
}

impl<P: ParameterPolicy, S: ParameterSelection<P>> ParameterSet<P, S> {
    /// Create a parameter set from nalgebra values and covariance
    ///
    /// # Arguments
    ///
    /// * `covariance` - Optional covariance of the selected parameters
    /// * `values` - Raw values in selection order
    ///
    /// # Errors
    ///
    /// * `ParSetError::DimensionMismatch` if the dimensions do not match the selection
    pub fn from_nalgebra(covariance: Option<&DMatrix<f64>>, values: &DVector<f64>) -> Result<Self> {
        Self::new(
            covariance.map(nalgebra_to_ndarray),
            nalgebra_vec_to_ndarray(values),
        )
    }

    /// Stored values as a nalgebra vector
    pub fn parameters_nalgebra(&self) -> DVector<f64> {
        ndarray_vec_to_nalgebra(self.parameters())
    }

    /// Covariance as a nalgebra matrix, if one was set
    pub fn covariance_nalgebra(&self) -> Option<DMatrix<f64>> {
        self.covariance().map(ndarray_to_nalgebra)
    }

    /// Projector as a nalgebra matrix
    pub fn projector_nalgebra() -> DMatrix<f64> {
        ndarray_to_nalgebra(&Self::projector())
    }
}
