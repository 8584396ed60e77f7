//! # parset-rs
//!
//! `parset-rs` provides the parameter-estimation primitive of a track
//! reconstruction toolkit: a fixed-size, strongly-typed set of track parameters
//! with an optional covariance matrix.
//!
//! The library provides:
//! - Parameter policies with unbound, bounded and cyclic parameters
//! - Range correction applied on every write
//! - Residuals that respect clamping and angular wraparound
//! - Projection matrices from the full parameter space onto any ordered subset
//! - JSON persistence and nalgebra interop
//!
//! ## Basic Usage
//!
//! ```
//! use parset_rs::parameters::policy::{BoundParameters, Phi, Theta};
//! use parset_rs::parameters::ParameterSet;
//! use std::f64::consts::PI;
//!
//! type Angles = ParameterSet<BoundParameters, (Phi, Theta)>;
//!
//! let mut a = Angles::from_slice(None, &[0.9 * PI, PI + 1.0]).unwrap();
//! let b = Angles::from_slice(None, &[-0.9 * PI, 0.35 * PI]).unwrap();
//!
//! // theta was clamped to pi
//! assert_eq!(a.parameter(Theta), PI);
//!
//! let residual = a.residual(&b);
//! assert!((residual[0] + 0.2 * PI).abs() < 1e-12);
//! assert!((residual[1] - 0.65 * PI).abs() < 1e-12);
//!
//! a.set_parameter(Phi, 3.0 * PI);
//! assert!((a.parameter(Phi) + PI).abs() < 1e-12);
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

// Conditional modules
#[cfg(feature = "matrix")]
pub mod utils;

// Re-exports for convenience
pub use error::{ParSetError, Result};
pub use parameters::policy::{BoundParameters, FullBoundParameterSet, FullBoundParameters};
pub use parameters::ParameterSet;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
