//! Random scalar sampling
//!
//! [`ScalarSampler`] draws deterministic pseudo-random [`Scalar`] values for
//! any representation, adapting to its algebraic structure: semirings and
//! rings have no continuum between Zero and One, so
//! [`next_between_zero_one`](ScalarSampler::next_between_zero_one) draws one
//! of the two; fields draw from `[Zero, One)`.
//!
//! # Example
//!
//! ```rust
//! use numkind_random::{SamplerConfig, ScalarSampler};
//!
//! let mut coins = ScalarSampler::<u8>::new(42);
//! let v = coins.next_between_zero_one().get();
//! assert!(v == 0 || v == 1);
//!
//! let config = SamplerConfig::new(42);
//! let mut uniform = ScalarSampler::<f64>::from_config(&config).unwrap();
//! let x = uniform.next_between_zero_one().get();
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! [`Scalar`]: numkind_core::Scalar

pub mod config;
pub mod sampler;

pub use config::SamplerConfig;
pub use sampler::ScalarSampler;
