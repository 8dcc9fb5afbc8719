//! Process-wide representation registry
//!
//! The registry is the type-erased view of the per-representation tables:
//! one [`Entry`] per [`Kind`], held in a dense array so lookup is a single
//! index. It is built once, on first use, behind `lazy_static` and is
//! read-only afterwards, so concurrent readers need no locking.
//!
//! Typed code does not need the registry at all: [`Representation::ops`]
//! resolves to the same tables statically. The registry serves callers that
//! only know a representation at runtime (a [`Kind`] or a [`Value`]).

use crate::error::{Error, Result};
use crate::kind::{Kind, KIND_COUNT};
use crate::ops::Operation;
use crate::repr::Representation;
use crate::structure::AlgebraicStructure;
use crate::value::Value;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use std::any::TypeId;
use std::cmp::Ordering;

/// Type-erased binary entry
pub type DynBinaryFn = fn(Value, Value) -> Result<Value>;

/// Type-erased unary entry
pub type DynUnaryFn = fn(Value) -> Result<Value>;

/// Constants of a representation, as dynamic values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptorInfo {
    pub kind: Kind,
    pub bits: u32,
    pub signed: bool,
    pub zero: Value,
    pub one: Value,
    pub neg_one_or_zero: Value,
    pub min: Value,
    pub max: Value,
    pub structure: AlgebraicStructure,
}

/// Type-erased operation table; an entry is absent exactly where the typed
/// table's entry is absent
#[derive(Clone, Copy)]
pub struct DynOpTable {
    pub add: Option<DynBinaryFn>,
    pub sub: Option<DynBinaryFn>,
    pub mul: Option<DynBinaryFn>,
    pub div: Option<DynBinaryFn>,
    pub rem: Option<DynBinaryFn>,
    pub neg: Option<DynUnaryFn>,
    pub not: Option<DynUnaryFn>,
    pub compare: fn(&Value, &Value) -> Result<Option<Ordering>>,
}

impl DynOpTable {
    pub fn binary(&self, op: Operation) -> Option<DynBinaryFn> {
        match op {
            Operation::Add => self.add,
            Operation::Subtract => self.sub,
            Operation::Multiply => self.mul,
            Operation::Divide => self.div,
            Operation::Remainder => self.rem,
            Operation::Negate | Operation::Complement => None,
        }
    }

    pub fn unary(&self, op: Operation) -> Option<DynUnaryFn> {
        match op {
            Operation::Negate => self.neg,
            Operation::Complement => self.not,
            _ => None,
        }
    }
}

/// Registry slot for one representation
#[derive(Clone, Copy)]
pub struct Entry {
    pub descriptor: DescriptorInfo,
    pub ops: DynOpTable,
}

impl Entry {
    pub fn kind(&self) -> Kind {
        self.descriptor.kind
    }

    pub fn supports(&self, op: Operation) -> bool {
        if op.is_unary() {
            self.ops.unary(op).is_some()
        } else {
            self.ops.binary(op).is_some()
        }
    }
}

fn operand<T: Representation>(value: Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| Error::kind_mismatch(T::KIND, value.kind()))
}

fn dyn_binary<T: Representation>(op: Operation, a: Value, b: Value) -> Result<Value> {
    let (a, b) = (operand::<T>(a)?, operand::<T>(b)?);
    let f = T::ops()
        .binary(op)
        .ok_or_else(|| Error::unsupported(op, T::KIND))?;
    f(a, b).map(Representation::into_value)
}

fn dyn_unary<T: Representation>(op: Operation, a: Value) -> Result<Value> {
    let a = operand::<T>(a)?;
    let f = T::ops()
        .unary(op)
        .ok_or_else(|| Error::unsupported(op, T::KIND))?;
    f(a).map(Representation::into_value)
}

fn dyn_compare<T: Representation>(a: &Value, b: &Value) -> Result<Option<Ordering>> {
    let (a, b) = (operand::<T>(*a)?, operand::<T>(*b)?);
    Ok((T::ops().partial_cmp)(&a, &b))
}

macro_rules! dyn_entries {
    ($($name:ident => $op:ident),* $(,)?) => {
        $(
            fn $name<T: Representation>(a: Value, b: Value) -> Result<Value> {
                dyn_binary::<T>(Operation::$op, a, b)
            }
        )*
    };
}

dyn_entries!(
    dyn_add => Add,
    dyn_sub => Subtract,
    dyn_mul => Multiply,
    dyn_div => Divide,
    dyn_rem => Remainder,
);

fn dyn_neg<T: Representation>(a: Value) -> Result<Value> {
    dyn_unary::<T>(Operation::Negate, a)
}

fn dyn_not<T: Representation>(a: Value) -> Result<Value> {
    dyn_unary::<T>(Operation::Complement, a)
}

fn entry<T: Representation>() -> Entry {
    let d = T::descriptor();
    let ops = T::ops();
    Entry {
        descriptor: DescriptorInfo {
            kind: T::KIND,
            bits: T::KIND.bits(),
            signed: T::KIND.is_signed(),
            zero: d.zero.into_value(),
            one: d.one.into_value(),
            neg_one_or_zero: d.neg_one_or_zero.into_value(),
            min: d.min.into_value(),
            max: d.max.into_value(),
            structure: d.structure,
        },
        ops: DynOpTable {
            add: ops.add.map(|_| dyn_add::<T> as DynBinaryFn),
            sub: ops.sub.map(|_| dyn_sub::<T> as DynBinaryFn),
            mul: ops.mul.map(|_| dyn_mul::<T> as DynBinaryFn),
            div: ops.div.map(|_| dyn_div::<T> as DynBinaryFn),
            rem: ops.rem.map(|_| dyn_rem::<T> as DynBinaryFn),
            neg: ops.neg.map(|_| dyn_neg::<T> as DynUnaryFn),
            not: ops.not.map(|_| dyn_not::<T> as DynUnaryFn),
            compare: dyn_compare::<T>,
        },
    }
}

/// Immutable table of every registered representation
pub struct Registry {
    entries: [Entry; KIND_COUNT],
}

lazy_static! {
    static ref REGISTRY: Registry = Registry::build();
}

impl Registry {
    fn build() -> Self {
        log::debug!("Building representation registry for {KIND_COUNT} kinds");
        let entries = [
            entry::<bool>(),
            entry::<u8>(),
            entry::<u16>(),
            entry::<u32>(),
            entry::<u64>(),
            entry::<i8>(),
            entry::<i16>(),
            entry::<i32>(),
            entry::<i64>(),
            entry::<f32>(),
            entry::<f64>(),
            entry::<Decimal>(),
        ];
        debug_assert!(entries
            .iter()
            .zip(Kind::ALL)
            .all(|(e, k)| e.kind() == k));
        Self { entries }
    }

    /// The process-wide registry, built on first access
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    #[inline]
    pub fn get(&self, kind: Kind) -> &Entry {
        &self.entries[kind.index()]
    }

    #[inline]
    pub fn get_type<T: Representation>(&self) -> &Entry {
        self.get(T::KIND)
    }

    /// Look up a representation by `TypeId`
    ///
    /// # Panics
    /// Panics if `id` is not one of the registered representations. Asking
    /// for an unregistered type is a programming error.
    pub fn by_type_id(&self, id: TypeId) -> &Entry {
        match Kind::from_type_id(id) {
            Some(kind) => self.get(kind),
            None => panic!("type {id:?} is not a registered numeric representation"),
        }
    }

    pub fn supports(&self, kind: Kind, op: Operation) -> bool {
        self.get(kind).supports(op)
    }

    /// Apply a binary operation to two values of the same representation
    pub fn apply_binary(&self, op: Operation, a: Value, b: Value) -> Result<Value> {
        let kind = a.kind();
        if b.kind() != kind {
            return Err(Error::kind_mismatch(kind, b.kind()));
        }
        match self.get(kind).ops.binary(op) {
            Some(f) => f(a, b),
            None => {
                log::trace!("No {op} entry for {kind}");
                Err(Error::unsupported(op, kind))
            }
        }
    }

    /// Apply a unary operation
    pub fn apply_unary(&self, op: Operation, a: Value) -> Result<Value> {
        let kind = a.kind();
        match self.get(kind).ops.unary(op) {
            Some(f) => f(a),
            None => {
                log::trace!("No {op} entry for {kind}");
                Err(Error::unsupported(op, kind))
            }
        }
    }

    /// Native ordering of two values of the same representation
    pub fn compare(&self, a: &Value, b: &Value) -> Result<Option<Ordering>> {
        (self.get(a.kind()).ops.compare)(a, b)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
