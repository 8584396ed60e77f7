//! Parameter policies and identifiers
//!
//! A policy is the definition of a full parameterization: the canonical order
//! of its parameters and the immutable trait table that says how each of them
//! is range-corrected. Identifiers are zero-sized tag types that know their
//! position in that canonical order, so a selection of identifiers can be
//! resolved entirely at compile time.
//!
//! Policies are declared with the [`parameter_policy!`](crate::parameter_policy)
//! macro. The crate ships [`BoundParameters`], the five track parameters
//! expressed on a reference surface.

use crate::error::Result;
use crate::parameters::bounds::ParameterTrait;
use std::f64::consts::PI;

/// Definition of a full parameter space.
///
/// All items are constants; a policy carries no runtime state.
pub trait ParameterPolicy: 'static {
    /// Human-readable policy name, also used to tag serialized data
    const NAME: &'static str;

    /// Number of parameters in the full parameter space
    const FULL_SIZE: usize;

    /// Parameter names in canonical order
    const NAMES: &'static [&'static str];

    /// Range restriction of every parameter, in canonical order
    const TRAITS: &'static [ParameterTrait];

    /// Look up the trait of the parameter at canonical position `index`
    fn parameter_trait(index: usize) -> Option<ParameterTrait> {
        Self::TRAITS.get(index).copied()
    }
}

/// A parameter identifier of policy `P`.
pub trait ParameterId<P: ParameterPolicy>: Copy + 'static {
    /// Position of this identifier in the canonical order of `P`
    const INDEX: usize;

    fn name() -> &'static str {
        P::NAMES[Self::INDEX]
    }

    fn parameter_trait() -> ParameterTrait {
        P::TRAITS[Self::INDEX]
    }
}

/// Check that the trait table of a policy is well formed
///
/// The table must have one entry per parameter and every bounded or cyclic
/// entry needs finite bounds with `min < max`.
pub fn validate_policy<P: ParameterPolicy>() -> Result<()> {
    if P::TRAITS.len() != P::FULL_SIZE || P::NAMES.len() != P::FULL_SIZE {
        tracing::debug!(policy = P::NAME, "trait table does not match the policy size");
        return Err(crate::error::ParSetError::DimensionMismatch(format!(
            "policy '{}' declares {} parameters but has {} traits and {} names",
            P::NAME,
            P::FULL_SIZE,
            P::TRAITS.len(),
            P::NAMES.len()
        )));
    }

    for par_trait in P::TRAITS {
        par_trait.validate()?;
    }

    Ok(())
}

/// Declare a parameter policy together with its identifier tags.
///
/// Identifiers receive their canonical index in declaration order. Two type
/// aliases are generated as well: the selection of all parameters and the
/// parameter set holding all of them.
///
/// ```
/// use parset_rs::parameter_policy;
/// use parset_rs::parameters::ParameterTrait;
///
/// parameter_policy! {
///     /// Position and time of a hit on a detector module.
///     pub struct HitParameters;
///     full = FullHit, FullHitSet;
///     LocX = "x" => ParameterTrait::unbound();
///     LocY = "y" => ParameterTrait::unbound();
///     Time = "t" => ParameterTrait::bounded(0.0, 25.0);
/// }
///
/// let hit = FullHitSet::from_slice(None, &[0.1, -0.4, 30.0]).unwrap();
/// assert_eq!(hit.parameter(Time), 25.0);
/// ```
#[macro_export]
macro_rules! parameter_policy {
    (@index $policy:ident; $idx:expr; ) => {};
    (@index $policy:ident; $idx:expr; $id:ident $($rest:ident)*) => {
        impl $crate::parameters::policy::ParameterId<$policy> for $id {
            const INDEX: usize = $idx;
        }
        $crate::parameter_policy!(@index $policy; $idx + 1; $($rest)*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $policy:ident;
        full = $full:ident, $full_set:ident;
        $(
            $(#[$id_meta:meta])*
            $id:ident = $name:literal => $par_trait:expr;
        )+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $policy;

        impl $crate::parameters::policy::ParameterPolicy for $policy {
            const NAME: &'static str = stringify!($policy);
            const FULL_SIZE: usize = [$($name),+].len();
            const NAMES: &'static [&'static str] = &[$($name),+];
            const TRAITS: &'static [$crate::parameters::bounds::ParameterTrait] = &[$($par_trait),+];
        }

        $(
            $(#[$id_meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $id;
        )+

        $crate::parameter_policy!(@index $policy; 0usize; $($id)+);

        /// Selection of every parameter of the policy, in canonical order.
        $vis type $full = ($($id,)+);

        /// Parameter set holding the full parameter space of the policy.
        $vis type $full_set = $crate::parameters::parameter_set::ParameterSet<$policy, $full>;
    };
}

parameter_policy! {
    /// Track parameters expressed on a reference surface.
    ///
    /// Local positions and charge over momentum are unrestricted, the azimuthal
    /// angle is periodic in `[-π, π)` and the polar angle is clamped to `[0, π]`.
    pub struct BoundParameters;
    full = FullBoundParameters, FullBoundParameterSet;
    /// First local coordinate on the surface
    Loc1 = "loc1" => ParameterTrait::unbound();
    /// Second local coordinate on the surface
    Loc2 = "loc2" => ParameterTrait::unbound();
    /// Azimuthal angle
    Phi = "phi" => ParameterTrait::cyclic(-PI, PI);
    /// Polar angle
    Theta = "theta" => ParameterTrait::bounded(0.0, PI);
    /// Charge over momentum
    Qop = "qop" => ParameterTrait::unbound();
}
