//! Fixed-point decimal representation
//!
//! Backed by [`rust_decimal::Decimal`] (96-bit mantissa, scale 0..=28).
//! Arithmetic is checked: results outside the representable range report
//! overflow, and division or remainder by zero is an error rather than an
//! infinity.

use super::{native_cmp, native_eq, sealed::Sealed, Representation};
use crate::cast;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::ops::{Descriptor, OpTable, Operation};
use crate::structure::classify;
use crate::value::Value;
use rust_decimal::Decimal;
use std::hash::{Hash, Hasher};

fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| Error::overflow(Operation::Add, Kind::Decimal, a, b))
}

fn sub(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b)
        .ok_or_else(|| Error::overflow(Operation::Subtract, Kind::Decimal, a, b))
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| Error::overflow(Operation::Multiply, Kind::Decimal, a, b))
}

fn div(a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return Err(Error::division_by_zero(Operation::Divide, Kind::Decimal, a));
    }
    a.checked_div(b)
        .ok_or_else(|| Error::overflow(Operation::Divide, Kind::Decimal, a, b))
}

fn rem(a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return Err(Error::division_by_zero(Operation::Remainder, Kind::Decimal, a));
    }
    a.checked_rem(b)
        .ok_or_else(|| Error::overflow(Operation::Remainder, Kind::Decimal, a, b))
}

fn neg(a: Decimal) -> Result<Decimal> {
    Ok(-a)
}

static DESCRIPTOR: Descriptor<Decimal> = Descriptor {
    kind: Kind::Decimal,
    zero: Decimal::ZERO,
    one: Decimal::ONE,
    neg_one_or_zero: Decimal::NEGATIVE_ONE,
    min: Decimal::MIN,
    max: Decimal::MAX,
    structure: classify(Kind::Decimal),
};

static OPS: OpTable<Decimal> = OpTable {
    add: Some(add),
    sub: Some(sub),
    mul: Some(mul),
    div: Some(div),
    rem: Some(rem),
    neg: Some(neg),
    not: None,
    eq: native_eq::<Decimal>,
    partial_cmp: native_cmp::<Decimal>,
    cast: cast::to_decimal,
};

impl Sealed for Decimal {}

impl Representation for Decimal {
    const KIND: Kind = Kind::Decimal;

    fn descriptor() -> &'static Descriptor<Self> {
        &DESCRIPTOR
    }

    fn ops() -> &'static OpTable<Self> {
        &OPS
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Decimal(self)
    }

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Decimal(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn hash_raw<H: Hasher>(&self, state: &mut H) {
        self.hash(state)
    }
}
