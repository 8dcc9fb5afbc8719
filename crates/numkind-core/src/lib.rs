//! Core of the generic scalar abstraction
//!
//! This crate lets numeric algorithms be written once against [`Scalar<T>`]
//! while each underlying representation keeps its own native arithmetic,
//! overflow and conversion semantics.
//!
//! # Architecture
//!
//! 1. **Representations** ([`repr`]): a sealed [`Representation`] trait
//!    implemented once per primitive, each binding a `static` [`OpTable`]
//!    and [`Descriptor`]. Typed code resolves these statically.
//! 2. **Classifier** ([`structure`]): the fixed Semiring/Ring/Field table.
//! 3. **Registry** ([`registry`]): the same tables, type-erased and keyed by
//!    [`Kind`], for callers that only know a representation at runtime.
//! 4. **Cast engine** ([`cast`]): total conversion between every pair.
//! 5. **Scalar** ([`scalar`]): the wrapper generic code is written against.
//!
//! # Example
//!
//! ```rust
//! use numkind_core::{AlgebraicStructure, Error, Scalar};
//!
//! let x = Scalar::new(2i8);
//! assert_eq!(x.cast::<f64>().get(), 2.0);
//! assert_eq!(Scalar::<i8>::structure(), AlgebraicStructure::Ring);
//!
//! // Complement is not defined for floating point
//! assert!(matches!(!Scalar::new(5.0f64), Err(Error::UnsupportedOperation { .. })));
//! ```

pub mod cast;
pub mod error;
pub mod kind;
pub mod ops;
pub mod registry;
pub mod repr;
pub mod scalar;
pub mod structure;
pub mod value;

// Re-export core types
pub use error::{Error, Result};

pub use cast::{cast, cast_value, CastExt};
pub use kind::{Kind, KIND_COUNT};
pub use ops::{BinaryFn, Descriptor, OpTable, Operation, UnaryFn};
pub use registry::{DescriptorInfo, DynOpTable, Entry, Registry};
pub use repr::Representation;
pub use scalar::Scalar;
pub use structure::{classify, AlgebraicStructure};
pub use value::Value;

/// Fixed-point decimal representation
pub use rust_decimal::Decimal;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AlgebraicStructure, CastExt, Decimal, Error, Kind, Operation, Registry, Representation,
        Result, Scalar, Value,
    };
}
