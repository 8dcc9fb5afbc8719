//! Per-representation operation tables
//!
//! An [`OpTable`] binds one representation's native arithmetic. Entries for
//! operations the representation does not define are `None`; absence is
//! checked before dispatch and reported as
//! [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation).

use crate::error::Result;
use crate::structure::AlgebraicStructure;
use crate::kind::Kind;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Binary arithmetic entry
pub type BinaryFn<T> = fn(T, T) -> Result<T>;

/// Unary arithmetic entry
pub type UnaryFn<T> = fn(T) -> Result<T>;

/// Arithmetic operations dispatched through an [`OpTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Negate,
    Complement,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Remainder,
        Operation::Negate,
        Operation::Complement,
    ];

    pub const fn is_unary(self) -> bool {
        matches!(self, Operation::Negate | Operation::Complement)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Remainder => "%",
            Operation::Negate => "-",
            Operation::Complement => "!",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Remainder => "remainder",
            Operation::Negate => "negate",
            Operation::Complement => "complement",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bound operations of one representation
pub struct OpTable<T: 'static> {
    pub add: Option<BinaryFn<T>>,
    pub sub: Option<BinaryFn<T>>,
    pub mul: Option<BinaryFn<T>>,
    pub div: Option<BinaryFn<T>>,
    pub rem: Option<BinaryFn<T>>,
    pub neg: Option<UnaryFn<T>>,
    pub not: Option<UnaryFn<T>>,
    pub eq: fn(&T, &T) -> bool,
    pub partial_cmp: fn(&T, &T) -> Option<Ordering>,
    /// Conversion from a raw value of any representation
    pub cast: fn(Value) -> T,
}

impl<T> OpTable<T> {
    /// Binary entry for `op`, `None` if absent or `op` is unary
    pub fn binary(&self, op: Operation) -> Option<BinaryFn<T>> {
        match op {
            Operation::Add => self.add,
            Operation::Subtract => self.sub,
            Operation::Multiply => self.mul,
            Operation::Divide => self.div,
            Operation::Remainder => self.rem,
            Operation::Negate | Operation::Complement => None,
        }
    }

    /// Unary entry for `op`, `None` if absent or `op` is binary
    pub fn unary(&self, op: Operation) -> Option<UnaryFn<T>> {
        match op {
            Operation::Negate => self.neg,
            Operation::Complement => self.not,
            _ => None,
        }
    }

    pub fn supports(&self, op: Operation) -> bool {
        if op.is_unary() {
            self.unary(op).is_some()
        } else {
            self.binary(op).is_some()
        }
    }
}

/// Constants of one representation
#[derive(Debug, Clone, Copy)]
pub struct Descriptor<T> {
    pub kind: Kind,
    pub zero: T,
    pub one: T,
    /// Negative one where the representation has negatives, zero otherwise
    pub neg_one_or_zero: T,
    pub min: T,
    pub max: T,
    pub structure: AlgebraicStructure,
}
