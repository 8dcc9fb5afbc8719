//! Boolean as a degenerate two-value semiring: `+` is OR, `*` is AND.

use super::{native_cmp, native_eq, sealed::Sealed, Representation};
use crate::cast;
use crate::error::Result;
use crate::kind::Kind;
use crate::ops::{Descriptor, OpTable};
use crate::structure::classify;
use crate::value::Value;
use std::hash::{Hash, Hasher};

fn or(a: bool, b: bool) -> Result<bool> {
    Ok(a | b)
}

fn and(a: bool, b: bool) -> Result<bool> {
    Ok(a & b)
}

fn not(a: bool) -> Result<bool> {
    Ok(!a)
}

static DESCRIPTOR: Descriptor<bool> = Descriptor {
    kind: Kind::Bool,
    zero: false,
    one: true,
    neg_one_or_zero: false,
    min: false,
    max: true,
    structure: classify(Kind::Bool),
};

static OPS: OpTable<bool> = OpTable {
    add: Some(or),
    sub: None,
    mul: Some(and),
    div: None,
    rem: None,
    neg: None,
    not: Some(not),
    eq: native_eq::<bool>,
    partial_cmp: native_cmp::<bool>,
    cast: cast::to_bool,
};

impl Sealed for bool {}

impl Representation for bool {
    const KIND: Kind = Kind::Bool;

    fn descriptor() -> &'static Descriptor<Self> {
        &DESCRIPTOR
    }

    fn ops() -> &'static OpTable<Self> {
        &OPS
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn hash_raw<H: Hasher>(&self, state: &mut H) {
        self.hash(state)
    }
}
