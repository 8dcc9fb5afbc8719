//! Distributional and determinism properties of the scalar sampler

use approx::assert_abs_diff_eq;
use numkind_core::{Decimal, Representation, Scalar};
use numkind_random::{SamplerConfig, ScalarSampler};

const DRAWS: usize = 1000;

fn zero_one_draws_are_bernoulli<T: Representation>() {
    let mut sampler = ScalarSampler::<T>::new(42);
    let draws: Vec<Scalar<T>> = (0..DRAWS).map(|_| sampler.next_between_zero_one()).collect();

    assert!(
        draws.iter().all(|v| *v == Scalar::zero() || *v == Scalar::one()),
        "{}: only Zero or One",
        T::KIND
    );
    let ones = draws.iter().filter(|v| **v == Scalar::one()).count();
    assert!(ones > 0 && ones < DRAWS, "{}: both values observed", T::KIND);
    // 1000 fair draws: 6 standard deviations is ~95
    assert!((ones as i64 - 500).abs() < 95, "{}: {ones} ones", T::KIND);
}

fn zero_one_draws_are_continuous<T: Representation>() {
    let mut sampler = ScalarSampler::<T>::new(42);
    let draws: Vec<Scalar<T>> = (0..DRAWS).map(|_| sampler.next_between_zero_one()).collect();

    assert!(
        draws.iter().all(|v| *v >= Scalar::zero() && *v < Scalar::one()),
        "{}: all draws in [0, 1)",
        T::KIND
    );
    let distinct = draws
        .iter()
        .filter(|v| **v != Scalar::zero() && **v != Scalar::one())
        .count();
    assert!(distinct > DRAWS / 2, "{}: draws are not just 0/1", T::KIND);
}

#[test]
fn semirings_and_rings_draw_zero_or_one() {
    zero_one_draws_are_bernoulli::<bool>();
    zero_one_draws_are_bernoulli::<u8>();
    zero_one_draws_are_bernoulli::<u16>();
    zero_one_draws_are_bernoulli::<u32>();
    zero_one_draws_are_bernoulli::<u64>();
    zero_one_draws_are_bernoulli::<i8>();
    zero_one_draws_are_bernoulli::<i16>();
    zero_one_draws_are_bernoulli::<i32>();
    zero_one_draws_are_bernoulli::<i64>();
}

#[test]
fn fields_draw_from_unit_interval() {
    zero_one_draws_are_continuous::<f32>();
    zero_one_draws_are_continuous::<f64>();
    zero_one_draws_are_continuous::<Decimal>();
}

#[test]
fn unit_interval_draws_are_roughly_uniform() {
    let mut sampler = ScalarSampler::<f64>::new(7);
    let mean = (0..10_000)
        .map(|_| sampler.next_between_zero_one().get())
        .sum::<f64>()
        / 10_000.0;
    assert_abs_diff_eq!(mean, 0.5, epsilon = 0.02);
}

#[test]
fn same_seed_same_sequence() {
    let mut a = ScalarSampler::<i32>::new(1234);
    let mut b = ScalarSampler::<i32>::new(1234);
    for _ in 0..100 {
        assert_eq!(a.next_scalar(), b.next_scalar());
        assert_eq!(a.next_between_zero_one(), b.next_between_zero_one());
    }

    let mut c = ScalarSampler::<f64>::from_config(&SamplerConfig::new(99)).unwrap();
    let mut d = ScalarSampler::<f64>::from_config(&SamplerConfig::new(99)).unwrap();
    assert_eq!(c.fill(50), d.fill(50));
}

#[test]
fn different_seeds_diverge() {
    let a = ScalarSampler::<u64>::new(1).fill(20);
    let b = ScalarSampler::<u64>::new(2).fill(20);
    assert_ne!(a, b);
}

#[test]
fn next_scalar_stays_within_bounds() {
    fn check<T: Representation>() {
        let mut sampler = ScalarSampler::<T>::new(5);
        for v in sampler.fill(DRAWS) {
            assert!(v >= Scalar::min_value() && v <= Scalar::max_value(), "{}: {v}", T::KIND);
        }
    }
    check::<bool>();
    check::<u8>();
    check::<i8>();
    check::<u16>();
    check::<i16>();
    check::<u32>();
    check::<i32>();
    check::<u64>();
    check::<i64>();
    check::<f32>();
    check::<f64>();
    check::<Decimal>();
}

#[test]
fn next_scalar_spans_the_range() {
    let mut sampler = ScalarSampler::<i8>::new(8);
    let draws = sampler.fill(DRAWS);
    assert!(draws.iter().any(|v| v.get() < -64));
    assert!(draws.iter().any(|v| v.get() > 64));

    let mut sampler = ScalarSampler::<f64>::new(8);
    let draws = sampler.fill(DRAWS);
    assert!(draws.iter().all(|v| v.get().is_finite()));
    assert!(draws.iter().any(|v| v.get() < 0.0));
    assert!(draws.iter().any(|v| v.get() > 0.0));
}
