//! The closed set of numeric representations
//!
//! [`Representation`] is implemented exactly once per supported primitive,
//! each implementation binding that primitive's native arithmetic into a
//! `static` [`OpTable`]. The trait is sealed: the set is fixed at compile
//! time and asking for a descriptor of any other type does not compile.
//!
//! # Overflow policy
//!
//! | Representation | Overflow |
//! |---|---|
//! | `u8`, `u16`, `i8`, `i16` | checked, [`Error::ArithmeticOverflow`](crate::Error::ArithmeticOverflow) |
//! | `u32`, `u64`, `i32`, `i64` | wraps silently |
//! | `f32`, `f64` | IEEE 754 (inf/NaN) |
//! | `Decimal` | checked |
//! | `bool` | n/a (`+` is OR, `*` is AND) |

mod boolean;
mod decimal;
mod float;
mod integer;

use crate::kind::Kind;
use crate::ops::{Descriptor, OpTable};
use crate::structure::{classify, AlgebraicStructure};
use crate::value::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hasher;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric representation with a bound operation table
pub trait Representation:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + 'static
{
    /// Identity of this representation
    const KIND: Kind;

    /// Algebraic classification, fixed per representation
    const STRUCTURE: AlgebraicStructure = classify(Self::KIND);

    /// Constants of this representation
    fn descriptor() -> &'static Descriptor<Self>;

    /// Bound native operations of this representation
    fn ops() -> &'static OpTable<Self>;

    fn into_value(self) -> Value;

    /// Exact extraction; `None` if `value` is of another representation
    fn from_value(value: Value) -> Option<Self>;

    /// Feed the raw value's native hash into `state`
    fn hash_raw<H: Hasher>(&self, state: &mut H);
}

pub(crate) fn native_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

pub(crate) fn native_cmp<T: PartialOrd>(a: &T, b: &T) -> Option<Ordering> {
    a.partial_cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operation;
    use rust_decimal::Decimal;

    fn assert_descriptor_invariants<T: Representation>() {
        let d = T::descriptor();
        assert_eq!(d.kind, T::KIND);
        assert_eq!(d.structure, T::STRUCTURE);
        assert!(d.min <= d.zero, "{}: min <= zero", T::KIND);
        assert!(d.zero <= d.one, "{}: zero <= one", T::KIND);
        assert!(d.one <= d.max, "{}: one <= max", T::KIND);
        if !T::KIND.is_signed() {
            assert!(d.neg_one_or_zero == d.zero, "{}: neg_one_or_zero", T::KIND);
        } else {
            assert!(d.neg_one_or_zero < d.zero, "{}: neg_one_or_zero", T::KIND);
        }
        assert_eq!(T::from_value(d.one.into_value()), Some(d.one));
    }

    #[test]
    fn test_descriptor_invariants() {
        assert_descriptor_invariants::<bool>();
        assert_descriptor_invariants::<u8>();
        assert_descriptor_invariants::<u16>();
        assert_descriptor_invariants::<u32>();
        assert_descriptor_invariants::<u64>();
        assert_descriptor_invariants::<i8>();
        assert_descriptor_invariants::<i16>();
        assert_descriptor_invariants::<i32>();
        assert_descriptor_invariants::<i64>();
        assert_descriptor_invariants::<f32>();
        assert_descriptor_invariants::<f64>();
        assert_descriptor_invariants::<Decimal>();
    }

    #[test]
    fn test_absent_entries() {
        for op in [Operation::Subtract, Operation::Divide, Operation::Remainder, Operation::Negate] {
            assert!(!bool::ops().supports(op), "bool {op}");
        }
        assert!(bool::ops().supports(Operation::Add));
        assert!(bool::ops().supports(Operation::Complement));

        assert!(!u8::ops().supports(Operation::Negate));
        assert!(!u64::ops().supports(Operation::Negate));
        assert!(i8::ops().supports(Operation::Negate));

        assert!(!f32::ops().supports(Operation::Complement));
        assert!(!f64::ops().supports(Operation::Complement));
        assert!(!Decimal::ops().supports(Operation::Complement));
        assert!(Decimal::ops().supports(Operation::Negate));
        assert!(u16::ops().supports(Operation::Complement));
    }

    #[test]
    fn test_from_value_rejects_other_kinds() {
        assert_eq!(u8::from_value(Value::U16(3)), None);
        assert_eq!(f64::from_value(Value::F32(1.0)), None);
        assert_eq!(i32::from_value(Value::I32(-4)), Some(-4));
    }
}
