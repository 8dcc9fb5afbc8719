//! Error types for scalar operations
//!
//! Every failure is detected at the point of the operation and returned to
//! the immediate caller. Silent wraparound of the wide integer
//! representations is defined behaviour, not an error.

use crate::kind::Kind;
use crate::ops::Operation;
use std::fmt::Display;
use thiserror::Error;

/// Core error type for scalar operations
#[derive(Error, Debug)]
pub enum Error {
    /// The representation has no entry for the requested operation
    #[error("Unsupported operation: {op} is not defined for {kind}")]
    UnsupportedOperation { op: Operation, kind: Kind },

    /// A checked representation produced an out-of-range result
    #[error("Arithmetic overflow: {kind} {op} of {operands}")]
    ArithmeticOverflow {
        op: Operation,
        kind: Kind,
        operands: String,
    },

    /// Integer or decimal division/remainder by zero
    #[error("Division by zero: {kind} {op} of {dividend}")]
    DivisionByZero {
        op: Operation,
        kind: Kind,
        dividend: String,
    },

    /// Dynamic operands of different representations
    #[error("Kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: Kind, actual: Kind },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unsupported(op: Operation, kind: Kind) -> Self {
        Self::UnsupportedOperation { op, kind }
    }

    /// Overflow of a binary operation
    pub fn overflow<T: Display>(op: Operation, kind: Kind, lhs: T, rhs: T) -> Self {
        Self::ArithmeticOverflow {
            op,
            kind,
            operands: format!("{lhs} {} {rhs}", op.symbol()),
        }
    }

    /// Overflow of a unary operation
    pub fn overflow_unary<T: Display>(op: Operation, kind: Kind, operand: T) -> Self {
        Self::ArithmeticOverflow {
            op,
            kind,
            operands: format!("{}{operand}", op.symbol()),
        }
    }

    pub fn division_by_zero<T: Display>(op: Operation, kind: Kind, dividend: T) -> Self {
        Self::DivisionByZero {
            op,
            kind,
            dividend: dividend.to_string(),
        }
    }

    pub fn kind_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::KindMismatch { expected, actual }
    }

    /// The operation that failed, if this error came from one
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::UnsupportedOperation { op, .. }
            | Self::ArithmeticOverflow { op, .. }
            | Self::DivisionByZero { op, .. } => Some(*op),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported(Operation::Negate, Kind::U32);
        assert_eq!(err.to_string(), "Unsupported operation: negate is not defined for u32");

        let err = Error::overflow(Operation::Subtract, Kind::U8, 2u8, 5u8);
        assert_eq!(err.to_string(), "Arithmetic overflow: u8 subtract of 2 - 5");

        let err = Error::overflow_unary(Operation::Negate, Kind::I8, -128i8);
        assert_eq!(err.to_string(), "Arithmetic overflow: i8 negate of --128");

        let err = Error::division_by_zero(Operation::Divide, Kind::I32, 7);
        assert_eq!(err.to_string(), "Division by zero: i32 divide of 7");

        let err = Error::kind_mismatch(Kind::F64, Kind::F32);
        assert_eq!(err.to_string(), "Kind mismatch: expected f64, got f32");

        let err = Error::InvalidParameter("threshold".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: threshold");
    }

    #[test]
    fn test_operation_accessor() {
        assert_eq!(
            Error::unsupported(Operation::Complement, Kind::F64).operation(),
            Some(Operation::Complement)
        );
        assert_eq!(Error::kind_mismatch(Kind::U8, Kind::I8).operation(), None);
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
