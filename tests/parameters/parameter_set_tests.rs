//! Integration tests for the ParameterSet container
//!
//! These tests cover accessors, covariance ownership, copy/move/swap and
//! comparison semantics.

use ndarray::{array, Array2};
use parset_rs::parameters::policy::{BoundParameters, Loc1, Loc2, Phi, Qop, Theta};
use parset_rs::parameters::ParameterSet;
use parset_rs::ParSetError;
use std::f64::consts::PI;

type LocPhi = ParameterSet<BoundParameters, (Loc1, Loc2, Phi)>;

const LOC1: f64 = 0.5;
const LOC2: f64 = -0.2;
// within [-pi, pi) so that no range correction kicks in
const PHI: f64 = 0.3 * PI;

fn covariance() -> Array2<f64> {
    array![[1.0, 0.0, 0.0], [0.0, 1.2, 0.2], [0.0, 0.2, 0.7]]
}

#[test]
fn test_parameter_set_consistency() {
    assert_eq!(ParameterSet::<BoundParameters, (Loc1, Loc2)>::size(), 2);

    let par_values = array![LOC1, LOC2, PHI];

    // parameter set with covariance matrix
    let mut with_cov = LocPhi::from_slice(Some(covariance()), &[LOC1, LOC2, PHI]).unwrap();

    assert_eq!(LocPhi::size(), 3);
    assert!(LocPhi::contains::<Loc1>());
    assert!(LocPhi::contains::<Loc2>());
    assert!(LocPhi::contains::<Phi>());
    assert!(!LocPhi::contains::<Theta>());
    assert!(!LocPhi::contains::<Qop>());

    assert_eq!(with_cov.parameter(Loc1), LOC1);
    assert_eq!(with_cov.parameter(Loc2), LOC2);
    assert_eq!(with_cov.parameter(Phi), PHI);
    assert_eq!(with_cov.parameters(), &par_values);

    assert_eq!(with_cov.covariance(), Some(&covariance()));

    // same parameter set without covariance matrix
    let mut without_cov = LocPhi::new(None, par_values.clone()).unwrap();
    assert!(without_cov.covariance().is_none());
    assert_eq!(without_cov.parameters(), with_cov.parameters());

    // set new covariance matrix
    without_cov.set_covariance(Some(covariance())).unwrap();
    assert_eq!(without_cov.covariance(), Some(&covariance()));

    // set new parameter values
    let (new_loc1, new_loc2, new_phi) = (0.1, 0.6, -0.15 * PI);
    with_cov.set_parameter(Loc1, new_loc1);
    with_cov.set_parameter(Loc2, new_loc2);
    with_cov.set_parameter(Phi, new_phi);

    assert_eq!(with_cov.parameter(Loc1), new_loc1);
    assert_eq!(with_cov.parameter(Loc2), new_loc2);
    assert_eq!(with_cov.parameter(Phi), new_phi);
    assert_eq!(with_cov.parameters(), &array![new_loc1, new_loc2, new_phi]);
}

#[test]
fn test_dimension_errors() {
    let err = LocPhi::from_slice(Some(Array2::eye(2)), &[LOC1, LOC2, PHI]).unwrap_err();
    assert!(matches!(err, ParSetError::DimensionMismatch(_)));
    assert!(err.to_string().contains("3x3"));

    let err = LocPhi::from_slice(None, &[LOC1, LOC2, PHI, 1.0]).unwrap_err();
    assert!(matches!(err, ParSetError::DimensionMismatch(_)));

    let mut set = LocPhi::from_slice(None, &[LOC1, LOC2, PHI]).unwrap();
    assert!(set.set_covariance(Some(Array2::zeros((3, 4)))).is_err());
    assert!(set.covariance().is_none());
}

#[test]
fn test_copy_move_assignment() {
    let first = LocPhi::from_slice(Some(covariance()), &[LOC1, LOC2, PHI]).unwrap();

    // copy
    let copy = first.clone();
    assert_eq!(first, copy);

    // move
    let moved = copy;
    assert_eq!(first, moved);

    // assignment
    let mut assigned = moved.clone();
    assert_eq!(assigned, moved);

    let other = LocPhi::from_slice(None, &[0.0, 1.7, -0.15]).unwrap();
    assert_ne!(assigned, other);
    assigned.clone_from(&other);
    assert_eq!(assigned, other);

    // the copy is deep: changing it leaves the source alone
    let mut deep = first.clone();
    deep.set_parameter(Loc1, 42.0);
    deep.set_covariance(None).unwrap();
    assert_eq!(first.parameter(Loc1), LOC1);
    assert!(first.covariance().is_some());
}

#[test]
fn test_swap() {
    let mut lhs = LocPhi::from_slice(Some(covariance()), &[LOC1, LOC2, PHI]).unwrap();
    let mut rhs = LocPhi::from_slice(None, &[2.0 * LOC1, 2.0 * LOC2, 2.0 * PHI]).unwrap();
    let lhs_copy = lhs.clone();
    let rhs_copy = rhs.clone();

    assert!(lhs != rhs && lhs == lhs_copy && rhs == rhs_copy);
    lhs.swap(&mut rhs);
    assert!(lhs != rhs && rhs == lhs_copy && lhs == rhs_copy);

    std::mem::swap(&mut lhs, &mut rhs);
    assert!(lhs == lhs_copy && rhs == rhs_copy);
}

#[test]
fn test_comparison() {
    let mut cov = covariance();
    let mut first = LocPhi::from_slice(Some(cov.clone()), &[LOC1, LOC2, PHI]).unwrap();
    let mut second = LocPhi::from_slice(None, &[2.0 * LOC1, 2.0 * LOC2, 2.0 * PHI]).unwrap();

    // self comparison
    assert!(first == first);
    assert!(!(first != first));

    // mutual exclusivity
    assert!(first != second);
    assert!(!(first == second));
    first = second.clone();
    assert!(first == second);

    // unequal parameter values
    second.set_parameter(Loc1, 3.0 * LOC1);
    assert!(first != second);
    first = second.clone();
    assert!(first == second);

    second.set_parameter(Loc2, 3.0 * LOC2);
    assert!(first != second);
    first = second.clone();
    assert!(first == second);

    second.set_parameter(Phi, 3.0 * PHI);
    assert!(first != second);
    first = second.clone();
    assert!(first == second);

    // covariance present on one side only
    second.set_covariance(Some(cov.clone())).unwrap();
    assert!(first != second);
    first = second.clone();
    assert!(first == second);

    // unequal covariance matrices
    cov[[0, 0]] *= 2.0;
    second.set_covariance(Some(cov)).unwrap();
    assert!(first != second);
    first = second.clone();
    assert!(first == second);
}

#[test]
fn test_equality_is_symmetric_and_transitive() {
    let a = LocPhi::from_slice(Some(covariance()), &[LOC1, LOC2, PHI]).unwrap();
    let b = a.clone();
    let c = b.clone();

    assert_eq!(a == b, b == a);
    assert!(a == b && b == c && a == c);
}

#[test]
fn test_parameter_sets_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LocPhi>();

    let set = LocPhi::from_slice(None, &[LOC1, LOC2, PHI]).unwrap();
    let handle = std::thread::spawn(move || set.parameter(Loc2));
    assert_eq!(handle.join().unwrap(), LOC2);
}
