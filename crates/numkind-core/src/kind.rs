//! Representation identity
//!
//! A [`Kind`] names one member of the closed set of numeric representations.
//! It is the key used by the [`Registry`](crate::Registry) and carried by
//! every dynamic [`Value`](crate::Value).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;

/// Number of registered representations
pub const KIND_COUNT: usize = 12;

/// One of the supported numeric representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Degenerate two-value representation
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// 96-bit mantissa fixed-point decimal
    Decimal,
}

impl Kind {
    /// All kinds, in registry slot order
    pub const ALL: [Kind; KIND_COUNT] = [
        Kind::Bool,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::F32,
        Kind::F64,
        Kind::Decimal,
    ];

    /// Dense slot index used for O(1) registry lookup
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Decimal => "decimal",
        }
    }

    /// Storage width in bits (precision width for floats, 128 for decimal)
    pub const fn bits(self) -> u32 {
        match self {
            Kind::Bool => 1,
            Kind::U8 | Kind::I8 => 8,
            Kind::U16 | Kind::I16 => 16,
            Kind::U32 | Kind::I32 | Kind::F32 => 32,
            Kind::U64 | Kind::I64 | Kind::F64 => 64,
            Kind::Decimal => 128,
        }
    }

    /// Whether the representation holds negative values
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 | Kind::F32 | Kind::F64 | Kind::Decimal
        )
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Kind::U8
                | Kind::U16
                | Kind::U32
                | Kind::U64
                | Kind::I8
                | Kind::I16
                | Kind::I32
                | Kind::I64
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    /// Resolve a Rust type to its kind, if the type is registered
    pub fn from_type_id(id: TypeId) -> Option<Kind> {
        // Linear over a fixed 12-element table; TypeId is not usable in const patterns
        let table: [(TypeId, Kind); KIND_COUNT] = [
            (TypeId::of::<bool>(), Kind::Bool),
            (TypeId::of::<u8>(), Kind::U8),
            (TypeId::of::<u16>(), Kind::U16),
            (TypeId::of::<u32>(), Kind::U32),
            (TypeId::of::<u64>(), Kind::U64),
            (TypeId::of::<i8>(), Kind::I8),
            (TypeId::of::<i16>(), Kind::I16),
            (TypeId::of::<i32>(), Kind::I32),
            (TypeId::of::<i64>(), Kind::I64),
            (TypeId::of::<f32>(), Kind::F32),
            (TypeId::of::<f64>(), Kind::F64),
            (TypeId::of::<Decimal>(), Kind::Decimal),
        ];
        table.iter().find(|(t, _)| *t == id).map(|(_, k)| *k)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
