//! Floating-point representations
//!
//! Arithmetic follows IEEE 754 directly: division by zero yields infinity or
//! NaN instead of an error. There is no bitwise complement entry.

use super::{native_cmp, native_eq, sealed::Sealed, Representation};
use crate::cast;
use crate::error::Result;
use crate::kind::Kind;
use crate::ops::{Descriptor, OpTable};
use crate::structure::classify;
use crate::value::Value;
use ordered_float::OrderedFloat;
use std::hash::{Hash, Hasher};

macro_rules! float_representation {
    ($t:ty, $kind:ident, cast: $cast:path) => {
        impl Sealed for $t {}

        impl Representation for $t {
            const KIND: Kind = Kind::$kind;

            fn descriptor() -> &'static Descriptor<Self> {
                static DESCRIPTOR: Descriptor<$t> = Descriptor {
                    kind: Kind::$kind,
                    zero: 0.0,
                    one: 1.0,
                    neg_one_or_zero: -1.0,
                    min: <$t>::MIN,
                    max: <$t>::MAX,
                    structure: classify(Kind::$kind),
                };
                &DESCRIPTOR
            }

            fn ops() -> &'static OpTable<Self> {
                fn add(a: $t, b: $t) -> Result<$t> {
                    Ok(a + b)
                }
                fn sub(a: $t, b: $t) -> Result<$t> {
                    Ok(a - b)
                }
                fn mul(a: $t, b: $t) -> Result<$t> {
                    Ok(a * b)
                }
                fn div(a: $t, b: $t) -> Result<$t> {
                    Ok(a / b)
                }
                fn rem(a: $t, b: $t) -> Result<$t> {
                    Ok(a % b)
                }
                fn neg(a: $t) -> Result<$t> {
                    Ok(-a)
                }

                static OPS: OpTable<$t> = OpTable {
                    add: Some(add),
                    sub: Some(sub),
                    mul: Some(mul),
                    div: Some(div),
                    rem: Some(rem),
                    neg: Some(neg),
                    not: None,
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
                OrderedFloat(*self).hash(state)
            }
        }
    };
}

float_representation!(f32, F32, cast: cast::to_f32);
float_representation!(f64, F64, cast: cast::to_f64);
