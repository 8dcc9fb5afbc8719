//! The generic scalar wrapper
//!
//! [`Scalar<T>`] holds one raw value of representation `T` and exposes the
//! uniform arithmetic, comparison and casting surface that generic vector,
//! matrix and tensor code is written against. All representation-specific
//! behaviour is delegated to `T`'s operation table.
//!
//! Arithmetic operators return `Result<Scalar<T>>` so failures propagate
//! with `?`:
//!
//! ```rust
//! use numkind_core::{Error, Scalar};
//!
//! let a = Scalar::new(5u8);
//! let b = Scalar::new(2u8);
//! assert_eq!((a - b)?, Scalar::new(3u8));
//! assert!(matches!(b - a, Err(Error::ArithmeticOverflow { .. })));
//!
//! // The wide unsigned widths wrap instead
//! assert_eq!((Scalar::new(2u32) - Scalar::new(5u32))?.get(), 4_294_967_293);
//! # Ok::<(), Error>(())
//! ```

use crate::cast;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::ops::Operation;
use crate::repr::Representation;
use crate::structure::AlgebraicStructure;
use crate::value::Value;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Once;
use std::ops::{Add, Div, Mul, Neg, Not, Rem, Sub};

/// An immutable value of one numeric representation
///
/// `Default` yields the representation's bit-zero value without consulting
/// the descriptor.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent, bound(deserialize = ""))]
pub struct Scalar<T: Representation>(T);

impl<T: Representation> Scalar<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// The raw value
    #[inline]
    pub fn get(&self) -> T {
        self.0
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        T::KIND
    }

    pub fn structure() -> AlgebraicStructure {
        T::STRUCTURE
    }

    pub fn zero() -> Self {
        Self(T::descriptor().zero)
    }

    pub fn one() -> Self {
        Self(T::descriptor().one)
    }

    /// Negative one, or zero for representations without negatives
    pub fn neg_one_or_zero() -> Self {
        Self(T::descriptor().neg_one_or_zero)
    }

    pub fn min_value() -> Self {
        Self(T::descriptor().min)
    }

    pub fn max_value() -> Self {
        Self(T::descriptor().max)
    }

    pub fn is_zero(&self) -> bool {
        (T::ops().eq)(&self.0, &T::descriptor().zero)
    }

    fn binary(self, op: Operation, rhs: Self) -> Result<Self> {
        let f = T::ops()
            .binary(op)
            .ok_or_else(|| Error::unsupported(op, T::KIND))?;
        f(self.0, rhs.0).map(Self)
    }

    fn unary(self, op: Operation) -> Result<Self> {
        let f = T::ops()
            .unary(op)
            .ok_or_else(|| Error::unsupported(op, T::KIND))?;
        f(self.0).map(Self)
    }

    pub fn try_add(self, rhs: Self) -> Result<Self> {
        self.binary(Operation::Add, rhs)
    }

    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        self.binary(Operation::Subtract, rhs)
    }

    pub fn try_mul(self, rhs: Self) -> Result<Self> {
        self.binary(Operation::Multiply, rhs)
    }

    /// Integer and decimal division by zero is an error; floats return
    /// infinity or NaN
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        self.binary(Operation::Divide, rhs)
    }

    pub fn try_rem(self, rhs: Self) -> Result<Self> {
        self.binary(Operation::Remainder, rhs)
    }

    pub fn try_neg(self) -> Result<Self> {
        self.unary(Operation::Negate)
    }

    /// Bitwise complement (logical NOT for `bool`)
    pub fn try_not(self) -> Result<Self> {
        self.unary(Operation::Complement)
    }

    /// Whether `op` has an entry for this representation
    pub fn supports(op: Operation) -> bool {
        T::ops().supports(op)
    }

    /// Convert into representation `U`; never fails, see [`crate::cast`]
    pub fn cast<U: Representation>(self) -> Scalar<U> {
        Scalar(cast::cast::<U>(self.0.into_value()))
    }

    pub fn to_value(self) -> Value {
        self.0.into_value()
    }

    /// A fresh single-element iterator over the raw value
    pub fn iter(&self) -> Once<T> {
        std::iter::once(self.0)
    }
}

impl<T: Representation> From<T> for Scalar<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Representation> TryFrom<Value> for Scalar<T> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        T::from_value(value)
            .map(Self)
            .ok_or_else(|| Error::kind_mismatch(T::KIND, value.kind()))
    }
}

macro_rules! impl_into_raw {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<Scalar<$t>> for $t {
                fn from(value: Scalar<$t>) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_into_raw!(bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, Decimal);

macro_rules! impl_binary_op {
    ($($trait:ident, $method:ident, $op:ident);* $(;)?) => {
        $(
            impl<T: Representation> $trait for Scalar<T> {
                type Output = Result<Scalar<T>>;

                #[inline]
                fn $method(self, rhs: Self) -> Self::Output {
                    self.binary(Operation::$op, rhs)
                }
            }

            impl<'a, T: Representation> $trait<&'a Scalar<T>> for &'a Scalar<T> {
                type Output = Result<Scalar<T>>;

                #[inline]
                fn $method(self, rhs: &'a Scalar<T>) -> Self::Output {
                    self.binary(Operation::$op, *rhs)
                }
            }
        )*
    };
}

impl_binary_op!(
    Add, add, Add;
    Sub, sub, Subtract;
    Mul, mul, Multiply;
    Div, div, Divide;
    Rem, rem, Remainder;
);

impl<T: Representation> Neg for Scalar<T> {
    type Output = Result<Scalar<T>>;

    fn neg(self) -> Self::Output {
        self.unary(Operation::Negate)
    }
}

impl<T: Representation> Neg for &Scalar<T> {
    type Output = Result<Scalar<T>>;

    fn neg(self) -> Self::Output {
        self.unary(Operation::Negate)
    }
}

impl<T: Representation> Not for Scalar<T> {
    type Output = Result<Scalar<T>>;

    fn not(self) -> Self::Output {
        self.unary(Operation::Complement)
    }
}

impl<T: Representation> Not for &Scalar<T> {
    type Output = Result<Scalar<T>>;

    fn not(self) -> Self::Output {
        self.unary(Operation::Complement)
    }
}

impl<T: Representation> PartialEq for Scalar<T> {
    fn eq(&self, other: &Self) -> bool {
        (T::ops().eq)(&self.0, &other.0)
    }
}

impl<T: Representation + Eq> Eq for Scalar<T> {}

impl<T: Representation> PartialOrd for Scalar<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (T::ops().partial_cmp)(&self.0, &other.0)
    }
}

impl<T: Representation + Ord> Ord for Scalar<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: Representation> Hash for Scalar<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_raw(state)
    }
}

impl<T: Representation> Borrow<T> for Scalar<T> {
    fn borrow(&self) -> &T {
        &self.0
    }
}

impl<T: Representation> fmt::Display for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: Representation> fmt::Debug for Scalar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>({:?})", T::KIND, self.0)
    }
}

impl<T: Representation> IntoIterator for Scalar<T> {
    type Item = T;
    type IntoIter = Once<T>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.0)
    }
}

impl<T: Representation> IntoIterator for &Scalar<T> {
    type Item = T;
    type IntoIter = Once<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
