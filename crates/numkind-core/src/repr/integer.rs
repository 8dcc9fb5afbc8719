//! Integer representations
//!
//! The narrow widths bind checked arithmetic; the 32- and 64-bit widths bind
//! wrapping arithmetic. Division and remainder check for a zero divisor in
//! both cases, and the one signed quotient that cannot be represented
//! (`MIN / -1`) is reported as overflow rather than wrapped.

use super::{native_cmp, native_eq, sealed::Sealed, Representation};
use crate::cast;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::ops::{Descriptor, OpTable, Operation};
use crate::structure::classify;
use crate::value::Value;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, WrappingAdd,
    WrappingMul, WrappingNeg, WrappingSub, Zero,
};
use std::hash::{Hash, Hasher};
use std::ops::Not;

mod checked {
    use super::*;

    pub fn add<T: Representation + CheckedAdd>(a: T, b: T) -> Result<T> {
        a.checked_add(&b)
            .ok_or_else(|| Error::overflow(Operation::Add, T::KIND, a, b))
    }

    pub fn sub<T: Representation + CheckedSub>(a: T, b: T) -> Result<T> {
        a.checked_sub(&b)
            .ok_or_else(|| Error::overflow(Operation::Subtract, T::KIND, a, b))
    }

    pub fn mul<T: Representation + CheckedMul>(a: T, b: T) -> Result<T> {
        a.checked_mul(&b)
            .ok_or_else(|| Error::overflow(Operation::Multiply, T::KIND, a, b))
    }

    pub fn neg<T: Representation + CheckedNeg>(a: T) -> Result<T> {
        a.checked_neg()
            .ok_or_else(|| Error::overflow_unary(Operation::Negate, T::KIND, a))
    }
}

mod wrapping {
    use super::*;

    pub fn add<T: Representation + WrappingAdd>(a: T, b: T) -> Result<T> {
        Ok(a.wrapping_add(&b))
    }

    pub fn sub<T: Representation + WrappingSub>(a: T, b: T) -> Result<T> {
        Ok(a.wrapping_sub(&b))
    }

    pub fn mul<T: Representation + WrappingMul>(a: T, b: T) -> Result<T> {
        Ok(a.wrapping_mul(&b))
    }

    pub fn neg<T: Representation + WrappingNeg>(a: T) -> Result<T> {
        Ok(a.wrapping_neg())
    }
}

fn div<T: Representation + CheckedDiv + Zero>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(Error::division_by_zero(Operation::Divide, T::KIND, a));
    }
    a.checked_div(&b)
        .ok_or_else(|| Error::overflow(Operation::Divide, T::KIND, a, b))
}

fn rem<T: Representation + CheckedRem + Zero>(a: T, b: T) -> Result<T> {
    if b.is_zero() {
        return Err(Error::division_by_zero(Operation::Remainder, T::KIND, a));
    }
    a.checked_rem(&b)
        .ok_or_else(|| Error::overflow(Operation::Remainder, T::KIND, a, b))
}

fn complement<T: Representation + Not<Output = T>>(a: T) -> Result<T> {
    Ok(!a)
}

macro_rules! integer_representation {
    (
        $t:ty, $kind:ident, $policy:ident,
        neg_one_or_zero: $nooz:expr,
        neg: $neg:expr,
        cast: $cast:path
    ) => {
        impl Sealed for $t {}

        impl Representation for $t {
            const KIND: Kind = Kind::$kind;

            fn descriptor() -> &'static Descriptor<Self> {
                static DESCRIPTOR: Descriptor<$t> = Descriptor {
                    kind: Kind::$kind,
                    zero: 0,
                    one: 1,
                    neg_one_or_zero: $nooz,
                    min: <$t>::MIN,
                    max: <$t>::MAX,
                    structure: classify(Kind::$kind),
                };
                &DESCRIPTOR
            }

            fn ops() -> &'static OpTable<Self> {
                static OPS: OpTable<$t> = OpTable {
                    add: Some($policy::add::<$t>),
                    sub: Some($policy::sub::<$t>),
                    mul: Some($policy::mul::<$t>),
                    div: Some(div::<$t>),
                    rem: Some(rem::<$t>),
                    neg: $neg,
                    not: Some(complement::<$t>),
                    eq: native_eq::<$t>,
                    partial_cmp: native_cmp::<$t>,
                    cast: $cast,
                };
                &OPS
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            #[inline]
            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }

            #[inline]
            fn hash_raw<H: Hasher>(&self, state: &mut H) {
                self.hash(state)
            }
        }
    };
}

// Unsigned widths have no additive inverse and therefore no negate entry
integer_representation!(u8, U8, checked, neg_one_or_zero: 0, neg: None, cast: cast::to_u8);
integer_representation!(u16, U16, checked, neg_one_or_zero: 0, neg: None, cast: cast::to_u16);
integer_representation!(u32, U32, wrapping, neg_one_or_zero: 0, neg: None, cast: cast::to_u32);
integer_representation!(u64, U64, wrapping, neg_one_or_zero: 0, neg: None, cast: cast::to_u64);

integer_representation!(i8, I8, checked, neg_one_or_zero: -1, neg: Some(checked::neg::<i8>), cast: cast::to_i8);
integer_representation!(i16, I16, checked, neg_one_or_zero: -1, neg: Some(checked::neg::<i16>), cast: cast::to_i16);
integer_representation!(i32, I32, wrapping, neg_one_or_zero: -1, neg: Some(wrapping::neg::<i32>), cast: cast::to_i32);
integer_representation!(i64, I64, wrapping, neg_one_or_zero: -1, neg: Some(wrapping::neg::<i64>), cast: cast::to_i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_widths_report_overflow() {
        let sub = u8::ops().sub.unwrap();
        assert_eq!(sub(5, 2).unwrap(), 3);
        assert!(matches!(
            sub(2, 5),
            Err(Error::ArithmeticOverflow { op: Operation::Subtract, kind: Kind::U8, .. })
        ));

        let add = i16::ops().add.unwrap();
        assert!(add(i16::MAX, 1).is_err());

        let mul = u16::ops().mul.unwrap();
        assert!(mul(300, 300).is_err());
        assert_eq!(mul(200, 300).unwrap(), 60000);
    }

    #[test]
    fn test_wide_widths_wrap() {
        let sub = u32::ops().sub.unwrap();
        assert_eq!(sub(2, 5).unwrap(), 4_294_967_293);

        let add = u64::ops().add.unwrap();
        assert_eq!(add(u64::MAX, 2).unwrap(), 1);

        let mul = i32::ops().mul.unwrap();
        assert_eq!(mul(i32::MAX, 2).unwrap(), -2);

        let neg = i64::ops().neg.unwrap();
        assert_eq!(neg(i64::MIN).unwrap(), i64::MIN);
    }

    #[test]
    fn test_narrow_signed_negate_overflow() {
        let neg = i8::ops().neg.unwrap();
        assert_eq!(neg(5).unwrap(), -5);
        assert!(neg(i8::MIN).is_err());
    }

    #[test]
    fn test_division_by_zero() {
        for result in [u8::ops().div.unwrap()(7, 0), u8::ops().rem.unwrap()(7, 0)] {
            assert!(matches!(result, Err(Error::DivisionByZero { kind: Kind::U8, .. })));
        }
        assert!(matches!(
            u64::ops().div.unwrap()(1, 0),
            Err(Error::DivisionByZero { op: Operation::Divide, .. })
        ));
        assert!(matches!(
            i32::ops().rem.unwrap()(1, 0),
            Err(Error::DivisionByZero { op: Operation::Remainder, .. })
        ));
    }

    #[test]
    fn test_signed_min_divided_by_minus_one() {
        assert!(matches!(
            i32::ops().div.unwrap()(i32::MIN, -1),
            Err(Error::ArithmeticOverflow { .. })
        ));
        assert!(i64::ops().rem.unwrap()(i64::MIN, -1).is_err());
        assert_eq!(i64::ops().div.unwrap()(-9, 2).unwrap(), -4);
        assert_eq!(i64::ops().rem.unwrap()(-9, 2).unwrap(), -1);
    }

    #[test]
    fn test_complement_is_bitwise_within_width() {
        assert_eq!(u8::ops().not.unwrap()(5).unwrap(), 250);
        assert_eq!(i16::ops().not.unwrap()(5).unwrap(), -6);
        assert_eq!(u32::ops().not.unwrap()(0).unwrap(), u32::MAX);
    }
}
