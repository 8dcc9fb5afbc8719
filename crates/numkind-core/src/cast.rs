//! Cast engine
//!
//! Total conversion between every ordered pair of representations. Each
//! target has one conversion entry that matches on the source
//! representation, so every pair is handled by pair-specific code rather
//! than through a shared numeric interface.
//!
//! Rules (those of Rust's `as` where it applies):
//!
//! - integer widening sign- or zero-extends; narrowing truncates bits
//! - float to integer truncates toward zero and saturates, NaN becomes 0
//! - integer to float rounds to nearest
//! - decimal from integers is exact; from floats it saturates at
//!   `Decimal::MIN`/`Decimal::MAX` (NaN becomes 0)
//! - decimal to integers truncates toward zero, then saturates
//! - `bool` is 1/0 as a number; any non-zero number casts to `true`
//!
//! Casting never fails.

use crate::kind::Kind;
use crate::repr::Representation;
use crate::value::Value;
use num_traits::{Bounded, FromPrimitive, NumCast, Zero};
use rust_decimal::Decimal;

/// Cast a dynamic value into representation `T`
#[inline]
pub fn cast<T: Representation>(value: Value) -> T {
    (T::ops().cast)(value)
}

/// Cast a dynamic value into the representation named by `target`
pub fn cast_value(value: Value, target: Kind) -> Value {
    match target {
        Kind::Bool => Value::Bool(to_bool(value)),
        Kind::U8 => Value::U8(to_u8(value)),
        Kind::U16 => Value::U16(to_u16(value)),
        Kind::U32 => Value::U32(to_u32(value)),
        Kind::U64 => Value::U64(to_u64(value)),
        Kind::I8 => Value::I8(to_i8(value)),
        Kind::I16 => Value::I16(to_i16(value)),
        Kind::I32 => Value::I32(to_i32(value)),
        Kind::I64 => Value::I64(to_i64(value)),
        Kind::F32 => Value::F32(to_f32(value)),
        Kind::F64 => Value::F64(to_f64(value)),
        Kind::Decimal => Value::Decimal(to_decimal(value)),
    }
}

/// Conversion between raw representations
pub trait CastExt: Representation {
    /// Convert `self` into `U` following `U`'s native conversion rules
    fn cast_to<U: Representation>(self) -> U {
        cast::<U>(self.into_value())
    }
}

impl<T: Representation> CastExt for T {}

fn decimal_to_integer<T: NumCast + Bounded>(d: Decimal) -> T {
    let truncated = d.trunc();
    match <T as NumCast>::from(truncated) {
        Some(v) => v,
        None if truncated.is_sign_negative() => T::min_value(),
        None => T::max_value(),
    }
}

fn decimal_to_float<T: NumCast + Zero>(d: Decimal) -> T {
    <T as NumCast>::from(d).unwrap_or_else(T::zero)
}

fn float_to_decimal(v: f64, converted: Option<Decimal>) -> Decimal {
    match converted {
        Some(d) => d,
        // Below the smallest representable magnitude (1e-28)
        None if v.is_nan() || v.abs() < 1.0 => Decimal::ZERO,
        None if v.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

macro_rules! primitive_target {
    ($(#[$doc:meta])* $name:ident -> $t:ty, decimal: $from_decimal:expr) => {
        $(#[$doc])*
        pub fn $name(value: Value) -> $t {
            match value {
                Value::Bool(v) => v as u8 as $t,
                Value::U8(v) => v as $t,
                Value::U16(v) => v as $t,
                Value::U32(v) => v as $t,
                Value::U64(v) => v as $t,
                Value::I8(v) => v as $t,
                Value::I16(v) => v as $t,
                Value::I32(v) => v as $t,
                Value::I64(v) => v as $t,
                Value::F32(v) => v as $t,
                Value::F64(v) => v as $t,
                Value::Decimal(v) => $from_decimal(v),
            }
        }
    };
}

primitive_target!(to_u8 -> u8, decimal: decimal_to_integer::<u8>);
primitive_target!(to_u16 -> u16, decimal: decimal_to_integer::<u16>);
primitive_target!(to_u32 -> u32, decimal: decimal_to_integer::<u32>);
primitive_target!(to_u64 -> u64, decimal: decimal_to_integer::<u64>);
primitive_target!(to_i8 -> i8, decimal: decimal_to_integer::<i8>);
primitive_target!(to_i16 -> i16, decimal: decimal_to_integer::<i16>);
primitive_target!(to_i32 -> i32, decimal: decimal_to_integer::<i32>);
primitive_target!(to_i64 -> i64, decimal: decimal_to_integer::<i64>);
primitive_target!(to_f32 -> f32, decimal: decimal_to_float::<f32>);
primitive_target!(
    /// Conversion entry into `f64`
    to_f64 -> f64, decimal: decimal_to_float::<f64>
);

pub fn to_bool(value: Value) -> bool {
    match value {
        Value::Bool(v) => v,
        Value::U8(v) => v != 0,
        Value::U16(v) => v != 0,
        Value::U32(v) => v != 0,
        Value::U64(v) => v != 0,
        Value::I8(v) => v != 0,
        Value::I16(v) => v != 0,
        Value::I32(v) => v != 0,
        Value::I64(v) => v != 0,
        Value::F32(v) => v != 0.0,
        Value::F64(v) => v != 0.0,
        Value::Decimal(v) => !v.is_zero(),
    }
}

pub fn to_decimal(value: Value) -> Decimal {
    match value {
        Value::Bool(v) => {
            if v {
                Decimal::ONE
            } else {
                Decimal::ZERO
            }
        }
        Value::U8(v) => Decimal::from(v),
        Value::U16(v) => Decimal::from(v),
        Value::U32(v) => Decimal::from(v),
        Value::U64(v) => Decimal::from(v),
        Value::I8(v) => Decimal::from(v),
        Value::I16(v) => Decimal::from(v),
        Value::I32(v) => Decimal::from(v),
        Value::I64(v) => Decimal::from(v),
        Value::F32(v) => float_to_decimal(v as f64, Decimal::from_f32(v)),
        Value::F64(v) => float_to_decimal(v, Decimal::from_f64(v)),
        Value::Decimal(v) => v,
    }
}
