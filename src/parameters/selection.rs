//! Compile-time identifier selections
//!
//! A selection is a tuple of identifier tags such as `(Loc1, Phi)`. The tuple
//! order is the storage order of a parameter set; it is never re-sorted into
//! the canonical order of the policy. Membership of a single identifier is
//! expressed with [`Selects`], whose slot parameter is inferred by the compiler
//! and makes an access to an identifier outside the selection a type error.

use crate::parameters::policy::{ParameterId, ParameterPolicy};
use ndarray::Array2;

/// An ordered list of distinct identifiers of policy `P`.
pub trait ParameterSelection<P: ParameterPolicy>: 'static {
    /// Number of selected identifiers
    const SIZE: usize;

    /// Canonical index of each selected identifier, in selection order
    const INDICES: &'static [usize];
}

/// Type-level proof that a selection holds `Id` at position `Slot`.
pub trait Selects<Id, Slot> {
    /// Storage position of `Id` inside the selection
    const POSITION: usize;
}

macro_rules! slots {
    ($($slot:ident),+) => {
        $(
            /// Position marker used by [`Selects`].
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $slot {}
        )+
    };
}

slots!(Slot0, Slot1, Slot2, Slot3, Slot4, Slot5, Slot6, Slot7);

macro_rules! impl_selection {
    (@one [$($all:ident),+] $id:ident @ $slot:ident = $pos:literal) => {
        impl<$($all),+> Selects<$id, $slot> for ($($all,)+) {
            const POSITION: usize = $pos;
        }
    };
    (@selects $all:tt $($id:ident @ $slot:ident = $pos:literal),+) => {
        $(
            impl_selection!(@one $all $id @ $slot = $pos);
        )+
    };
    ($($id:ident @ $slot:ident = $pos:literal),+) => {
        impl<P: ParameterPolicy, $($id: ParameterId<P>),+> ParameterSelection<P> for ($($id,)+) {
            const SIZE: usize = [$($pos),+].len();
            const INDICES: &'static [usize] = &[$(<$id as ParameterId<P>>::INDEX),+];
        }

        impl_selection!(@selects [$($id),+] $($id @ $slot = $pos),+);
    };
}

impl_selection!(A @ Slot0 = 0);
impl_selection!(A @ Slot0 = 0, B @ Slot1 = 1);
impl_selection!(A @ Slot0 = 0, B @ Slot1 = 1, C @ Slot2 = 2);
impl_selection!(A @ Slot0 = 0, B @ Slot1 = 1, C @ Slot2 = 2, D @ Slot3 = 3);
impl_selection!(A @ Slot0 = 0, B @ Slot1 = 1, C @ Slot2 = 2, D @ Slot3 = 3, E @ Slot4 = 4);
impl_selection!(
    A @ Slot0 = 0,
    B @ Slot1 = 1,
    C @ Slot2 = 2,
    D @ Slot3 = 3,
    E @ Slot4 = 4,
    F @ Slot5 = 5
);
impl_selection!(
    A @ Slot0 = 0,
    B @ Slot1 = 1,
    C @ Slot2 = 2,
    D @ Slot3 = 3,
    E @ Slot4 = 4,
    F @ Slot5 = 5,
    G @ Slot6 = 6
);
impl_selection!(
    A @ Slot0 = 0,
    B @ Slot1 = 1,
    C @ Slot2 = 2,
    D @ Slot3 = 3,
    E @ Slot4 = 4,
    F @ Slot5 = 5,
    G @ Slot6 = 6,
    H @ Slot7 = 7
);

/// Check that `indices` are pairwise distinct and all below `full_size`
pub const fn is_valid_selection(indices: &[usize], full_size: usize) -> bool {
    let mut i = 0;
    while i < indices.len() {
        if indices[i] >= full_size {
            return false;
        }
        let mut j = i + 1;
        while j < indices.len() {
            if indices[i] == indices[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Check whether canonical index `index` is part of `indices`
pub const fn contains_index(indices: &[usize], index: usize) -> bool {
    let mut i = 0;
    while i < indices.len() {
        if indices[i] == index {
            return true;
        }
        i += 1;
    }
    false
}

/// Selection matrix from the full parameter space of `P` onto selection `S`
///
/// Row `k` is the unit row vector picking the canonical position of the `k`-th
/// selected identifier, so `projector * full` yields the selected entries in
/// selection order.
pub fn projector<P: ParameterPolicy, S: ParameterSelection<P>>() -> Array2<f64> {
    let mut projector = Array2::zeros((S::SIZE, P::FULL_SIZE));
    for (row, &column) in S::INDICES.iter().enumerate() {
        projector[[row, column]] = 1.0;
    }
    projector
}
