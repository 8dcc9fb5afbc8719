//! Generic numeric scalars over a closed set of representations
//!
//! This crate re-exports the workspace crates:
//!
//! - [`numkind_core`]: representations, registry, classifier, cast engine
//!   and the [`Scalar`] wrapper
//! - [`numkind_random`]: representation-aware random sampling
//!
//! # Example
//!
//! ```rust
//! use numkind::prelude::*;
//!
//! fn dot<T: Representation>(a: &[Scalar<T>], b: &[Scalar<T>]) -> Result<Scalar<T>> {
//!     a.iter().zip(b).try_fold(Scalar::zero(), |acc, (x, y)| acc + (x * y)?)
//! }
//!
//! let a = [Scalar::new(1u8), Scalar::new(2), Scalar::new(3)];
//! let b = [Scalar::new(4u8), Scalar::new(5), Scalar::new(6)];
//! assert_eq!(dot(&a, &b).unwrap().get(), 32);
//!
//! // The same code on a checked representation reports overflow
//! let big = [Scalar::new(200u8)];
//! assert!(dot(&big, &big).is_err());
//! ```

pub use numkind_core;
pub use numkind_random;

pub use numkind_core::{
    cast, AlgebraicStructure, CastExt, Decimal, Error, Kind, Operation, Registry,
    Representation, Result, Scalar, Value,
};
pub use numkind_random::{SamplerConfig, ScalarSampler};

/// Prelude module for convenient imports
pub mod prelude {
    pub use numkind_core::prelude::*;
    pub use numkind_random::{SamplerConfig, ScalarSampler};
}
