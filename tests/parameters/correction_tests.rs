//! Integration tests for range correction
//!
//! Every constructor and setter corrects its input; getters never do.

use parset_rs::parameters::policy::{BoundParameters, Loc1, Loc2, Phi, Qop, Theta};
use parset_rs::parameters::{ParameterId, ParameterSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

use crate::test_helpers::TOL;

const LARGE_NUMBER: f64 = 12443534120.0;
const SMALL_NUMBER: f64 = -924342675.0;
const NORMAL_NUMBER: f64 = 1.234;

#[test]
fn test_unbound_parameters_are_stored_as_given() {
    let unbound = ParameterSet::<BoundParameters, (Loc1, Loc2, Qop)>::from_slice(
        None,
        &[SMALL_NUMBER, LARGE_NUMBER, NORMAL_NUMBER],
    )
    .unwrap();

    assert_eq!(unbound.parameter(Loc1), SMALL_NUMBER);
    assert_eq!(unbound.parameter(Loc2), LARGE_NUMBER);
    assert_eq!(unbound.parameter(Qop), NORMAL_NUMBER);
}

#[test]
fn test_bounded_parameter_is_clamped() {
    let theta = <Theta as ParameterId<BoundParameters>>::parameter_trait();

    let mut bound = ParameterSet::<BoundParameters, (Theta,)>::from_slice(None, &[SMALL_NUMBER]).unwrap();
    assert_eq!(bound.parameter(Theta), theta.min());

    bound.set_parameter(Theta, LARGE_NUMBER);
    assert_eq!(bound.parameter(Theta), theta.max());

    bound.set_parameter(Theta, NORMAL_NUMBER);
    assert_eq!(bound.parameter(Theta), NORMAL_NUMBER);
}

#[test]
fn test_cyclic_parameter_is_folded() {
    let phi = <Phi as ParameterId<BoundParameters>>::parameter_trait();
    let (min, max) = (phi.min(), phi.max());

    let mut cyclic = ParameterSet::<BoundParameters, (Phi,)>::from_slice(None, &[SMALL_NUMBER]).unwrap();

    for &raw in &[SMALL_NUMBER, LARGE_NUMBER, NORMAL_NUMBER] {
        cyclic.set_parameter(Phi, raw);
        let stored = cyclic.parameter(Phi);

        // the stored value differs from the raw one by a multiple of the period
        let multiple = (stored - raw) / (max - min);
        assert!(stored >= min);
        assert!(stored < max);
        assert!((multiple - (multiple + 0.5).floor()).abs() < 1e-5, "raw {} stored {}", raw, stored);
    }
}

#[test]
fn test_bounded_correction_properties() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let theta = <Theta as ParameterId<BoundParameters>>::parameter_trait();
    let mut set = ParameterSet::<BoundParameters, (Theta,)>::from_slice(None, &[0.0]).unwrap();

    for _ in 0..1000 {
        let raw: f64 = rng.gen_range(-10.0..10.0);
        set.set_parameter(Theta, raw);
        let stored = set.parameter(Theta);

        assert!(stored >= theta.min() && stored <= theta.max());
        if raw >= theta.min() && raw <= theta.max() {
            assert_eq!(stored, raw);
        }
    }
}

#[test]
fn test_cyclic_correction_properties() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let period = 2.0 * PI;
    let mut set = ParameterSet::<BoundParameters, (Phi,)>::from_slice(None, &[0.0]).unwrap();

    for _ in 0..1000 {
        let raw: f64 = rng.gen_range(-1000.0..300.0);
        set.set_parameter(Phi, raw);
        let stored = set.parameter(Phi);

        assert!((-PI..PI).contains(&stored));
        let multiple = (stored - raw) / period;
        assert!((multiple - multiple.round()).abs() < TOL);
        if (-PI..PI).contains(&raw) {
            assert_eq!(stored, raw);
        }
    }
}

#[test]
fn test_bulk_set_corrects_each_component() {
    let mut set = ParameterSet::<BoundParameters, (Theta, Loc1, Phi)>::from_slice(None, &[0.1, 0.2, 0.3]).unwrap();

    set.set_parameters(&ndarray::array![-1.0, LARGE_NUMBER, 2.5 * PI]).unwrap();
    assert_eq!(set.parameter(Theta), 0.0);
    assert_eq!(set.parameter(Loc1), LARGE_NUMBER);
    assert!((set.parameter(Phi) - 0.5 * PI).abs() < 1e-12);
}

#[test]
fn test_setting_one_parameter_leaves_others_untouched() {
    let mut set =
        ParameterSet::<BoundParameters, (Loc1, Phi, Theta)>::from_slice(None, &[0.5, 0.3, 0.2]).unwrap();

    set.set_parameter(Phi, 7.0);
    assert_eq!(set.parameter(Loc1), 0.5);
    assert_eq!(set.parameter(Theta), 0.2);
}
