//! # Parameter System
//!
//! This module provides strongly-typed parameter sets for track estimation.
//! A parameter set holds a compile-time selection of the parameters of a
//! policy, keeps every stored value inside the range allowed for it and
//! computes residuals and projections without runtime bookkeeping.
//!
//! ## Key Features
//!
//! - **Policies**: A full parameterization with one range trait per parameter
//! - **Range Correction**: Bounded parameters are clamped, cyclic parameters folded into their period
//! - **Typed Selections**: Access to a parameter outside the selection fails to compile
//! - **Residuals**: Differences that respect clamping and angular wraparound
//! - **Projectors**: Selection matrices from the full space onto a subset
//! - **Serialization Support**: Save and load parameter sets with serde
//!
//! ## Core Components
//!
//! - [`ParameterTrait`] and [`BoundClass`]: Range metadata and correction
//! - [`ParameterPolicy`] and [`ParameterId`]: Parameterizations and their identifiers
//! - [`ParameterSelection`]: Ordered identifier tuples
//! - [`ParameterSet`]: Values and optional covariance of a selection
//!
//! ## Example Usage
//!
//! ```rust
//! use parset_rs::parameters::policy::{BoundParameters, Loc1, Phi, Theta};
//! use parset_rs::parameters::ParameterSet;
//! use std::f64::consts::PI;
//!
//! type Track = ParameterSet<BoundParameters, (Loc1, Phi, Theta)>;
//!
//! let predicted = Track::from_slice(None, &[0.3, 0.9 * PI, 0.7 * PI]).unwrap();
//! let measured = Track::from_slice(None, &[2.7, -0.9 * PI, 0.35 * PI]).unwrap();
//!
//! let residual = measured.residual(&predicted);
//! assert!((residual[0] - 2.4).abs() < 1e-12);
//! assert!((residual[1] - 0.2 * PI).abs() < 1e-12);
//! assert!((residual[2] + 0.35 * PI).abs() < 1e-12);
//! ```

pub mod bounds;
pub mod parameter_set;
pub mod policy;
pub mod residual;
pub mod selection;
pub mod serialization;

// Re-export key types
pub use bounds::{BoundClass, Bounds, BoundsError, ParameterTrait};
pub use parameter_set::ParameterSet;
pub use policy::{validate_policy, ParameterId, ParameterPolicy};
pub use selection::{ParameterSelection, Selects};
