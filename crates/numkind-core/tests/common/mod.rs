//! Shared utilities for integration tests

#![allow(dead_code)]

use proptest::prelude::*;

#[allow(unused_imports)]
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Relative tolerance for f32 field laws
pub const F32_EPSILON: f32 = 1e-4;

/// Relative tolerance for f64 field laws
pub const F64_EPSILON: f64 = 1e-10;

/// Floats whose products and sums stay well inside the finite range, with
/// zero excluded so reciprocals exist
pub fn finite_f64() -> impl Strategy<Value = f64> {
    prop_oneof![(-1e6..-1e-3f64), (1e-3..1e6f64)]
}

pub fn finite_f32() -> impl Strategy<Value = f32> {
    prop_oneof![(-1e3..-1e-2f32), (1e-2..1e3f32)]
}

/// Dyadic rationals: exactly representable, so float addition of a few of
/// them is associative
pub fn dyadic_f64() -> impl Strategy<Value = f64> {
    (-1_000_000i64..1_000_000).prop_map(|n| n as f64 / 1024.0)
}

/// Dyadic f32 values small enough that sums of three stay exact
pub fn dyadic_f32() -> impl Strategy<Value = f32> {
    (-65_536i32..65_536).prop_map(|n| n as f32 / 64.0)
}
