//! Parameter bounds and range correction
//!
//! This module defines the per-parameter range restrictions of a parameter
//! policy and the correction applied whenever a value is stored: unbound values
//! pass through, bounded values are clamped and cyclic values are folded into
//! their period.

use serde::{Deserialize, Serialize};
use std::f64::{INFINITY, NEG_INFINITY};
use thiserror::Error;

/// Errors that can occur when defining parameter bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Invalid bounds: min ({min}) must be less than max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Bounds [{min}, {max}] must be finite for a {class:?} parameter")]
    InfiniteBounds { class: BoundClass, min: f64, max: f64 },
}

/// Represents the interval a parameter value is restricted to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum allowed value for the parameter
    pub min: f64,

    /// Maximum allowed value for the parameter
    pub max: f64,
}

impl Serialize for Bounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Bounds", 2)?;

        // Handle infinity values specially
        if self.min.is_infinite() && self.min.is_sign_negative() {
            state.serialize_field("min", &serde_json::Value::Null)?;
        } else {
            state.serialize_field("min", &self.min)?;
        }

        if self.max.is_infinite() && self.max.is_sign_positive() {
            state.serialize_field("max", &serde_json::Value::Null)?;
        } else {
            state.serialize_field("max", &self.max)?;
        }

        state.end()
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BoundsHelper {
            #[serde(default)]
            min: Option<f64>,

            #[serde(default)]
            max: Option<f64>,
        }

        let helper = BoundsHelper::deserialize(deserializer)?;

        let min = helper.min.unwrap_or(NEG_INFINITY);
        let max = helper.max.unwrap_or(INFINITY);

        Ok(Bounds { min, max })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Bounds {
    /// Create a new interval with min and max values
    ///
    /// # Returns
    ///
    /// A new `Bounds` object if min < max, or an error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use parset_rs::parameters::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(0.0, 10.0).unwrap();
    /// assert_eq!(bounds.min, 0.0);
    /// assert_eq!(bounds.max, 10.0);
    /// assert!(Bounds::new(1.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        // Written this way round so that NaN bounds are rejected too
        if !(min < max) {
            return Err(BoundsError::InvalidBounds { min, max });
        }

        Ok(Self { min, max })
    }

    /// Create an unbounded interval (negative infinity to positive infinity)
    pub const fn unbounded() -> Self {
        Self {
            min: NEG_INFINITY,
            max: INFINITY,
        }
    }

    /// Check if a value lies in the closed interval `[min, max]`
    pub fn is_within_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check if the bounds are finite (both min and max are finite)
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value to be within the bounds
    ///
    /// Unlike `f64::clamp` this never panics on malformed bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// How the value range of a parameter is restricted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundClass {
    /// Any real value is allowed
    Unbound,

    /// Values are clamped to `[min, max]`
    Bounded,

    /// Values are periodic and folded into `[min, max)`
    Cyclic,
}

/// Immutable range metadata of a single parameter of a policy.
///
/// Trait tables are built in constant context, so the constructors are `const`
/// and do not validate; use [`ParameterTrait::validate`] (or
/// [`validate_policy`](crate::parameters::policy::validate_policy)) to check a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterTrait {
    class: BoundClass,
    bounds: Bounds,
}

impl ParameterTrait {
    /// A parameter without range restriction
    pub const fn unbound() -> Self {
        Self {
            class: BoundClass::Unbound,
            bounds: Bounds::unbounded(),
        }
    }

    /// A parameter clamped to `[min, max]`
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self {
            class: BoundClass::Bounded,
            bounds: Bounds { min, max },
        }
    }

    /// A periodic parameter living in `[min, max)`
    pub const fn cyclic(min: f64, max: f64) -> Self {
        Self {
            class: BoundClass::Cyclic,
            bounds: Bounds { min, max },
        }
    }

    pub fn class(&self) -> BoundClass {
        self.class
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Period `max - min` of a cyclic parameter, `None` otherwise
    pub fn period(&self) -> Option<f64> {
        match self.class {
            BoundClass::Cyclic => Some(self.bounds.width()),
            _ => None,
        }
    }

    /// Check that the trait is well formed
    ///
    /// Bounded and cyclic parameters need finite bounds with `min < max`.
    pub fn validate(&self) -> Result<(), BoundsError> {
        match self.class {
            BoundClass::Unbound => Ok(()),
            BoundClass::Bounded | BoundClass::Cyclic => {
                let Bounds { min, max } = self.bounds;
                if !self.bounds.is_finite() {
                    return Err(BoundsError::InfiniteBounds {
                        class: self.class,
                        min,
                        max,
                    });
                }
                Bounds::new(min, max).map(|_| ())
            }
        }
    }

    /// Check whether `value` satisfies the stored-value invariant of this trait
    pub fn is_corrected(&self, value: f64) -> bool {
        match self.class {
            BoundClass::Unbound => true,
            BoundClass::Bounded => self.bounds.is_within_bounds(value),
            BoundClass::Cyclic => value >= self.bounds.min && value < self.bounds.max,
        }
    }

    /// Apply the range correction of this trait to a raw value
    ///
    /// # Examples
    ///
    /// ```
    /// use parset_rs::parameters::bounds::ParameterTrait;
    /// use std::f64::consts::PI;
    ///
    /// let theta = ParameterTrait::bounded(0.0, PI);
    /// assert_eq!(theta.correct(PI + 1.0), PI);
    ///
    /// let phi = ParameterTrait::cyclic(-PI, PI);
    /// assert!((phi.correct(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
    /// ```
    pub fn correct(&self, value: f64) -> f64 {
        match self.class {
            BoundClass::Unbound => value,
            BoundClass::Bounded => self.bounds.clamp(value),
            BoundClass::Cyclic => fold_into_period(value, self.bounds.min, self.bounds.max),
        }
    }
}

/// Fold `value` into `[min, max)` by an integer number of periods
fn fold_into_period(value: f64, min: f64, max: f64) -> f64 {
    if value >= min && value < max {
        return value;
    }

    let period = max - min;
    let mut folded = value - period * ((value - min) / period).floor();

    // Rounding of large multiples can land exactly on the boundaries
    if folded >= max {
        folded -= period;
    }
    if folded < min {
        folded = min;
    }

    folded
}
