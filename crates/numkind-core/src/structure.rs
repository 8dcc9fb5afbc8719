//! Algebraic structure classification
//!
//! Each representation is statically assigned the strongest structure whose
//! axioms it satisfies. Generic algorithms consult this to adapt their
//! behaviour (the sampler, for example, only draws from a continuum for
//! fields).

use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered algebraic category: `Semiring < Ring < Field`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgebraicStructure {
    /// Addition and multiplication, no general additive inverse
    Semiring,
    /// Additive inverses exist, no general multiplicative inverse
    Ring,
    /// Both inverses exist (modulo floating-point precision)
    Field,
}

impl AlgebraicStructure {
    pub const fn has_additive_inverse(self) -> bool {
        matches!(self, AlgebraicStructure::Ring | AlgebraicStructure::Field)
    }

    pub const fn has_multiplicative_inverse(self) -> bool {
        matches!(self, AlgebraicStructure::Field)
    }
}

impl fmt::Display for AlgebraicStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraicStructure::Semiring => write!(f, "Semiring"),
            AlgebraicStructure::Ring => write!(f, "Ring"),
            AlgebraicStructure::Field => write!(f, "Field"),
        }
    }
}

/// Classify a representation
pub const fn classify(kind: Kind) -> AlgebraicStructure {
    match kind {
        Kind::Bool | Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 => AlgebraicStructure::Semiring,
        Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 => AlgebraicStructure::Ring,
        Kind::F32 | Kind::F64 | Kind::Decimal => AlgebraicStructure::Field,
    }
}
