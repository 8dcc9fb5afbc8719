//! Representation-aware random scalar sampling

use crate::config::SamplerConfig;
use numkind_core::{AlgebraicStructure, CastExt, Kind, Representation, Result, Scalar};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Deterministic generator of `Scalar<T>` values
///
/// The sampler owns its generator stream and is not meant to be shared
/// between threads; use one instance per thread.
#[derive(Debug, Clone)]
pub struct ScalarSampler<T: Representation> {
    rng: ChaCha8Rng,
    bernoulli_threshold: f64,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Representation> ScalarSampler<T> {
    /// Sampler with the default configuration and the given seed
    pub fn new(seed: u64) -> Self {
        let config = SamplerConfig::new(seed);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            bernoulli_threshold: config.bernoulli_threshold,
            _marker: PhantomData,
        }
    }

    pub fn from_config(config: &SamplerConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "Creating {} sampler with seed {} and threshold {}",
            T::KIND,
            config.seed,
            config.bernoulli_threshold
        );
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            bernoulli_threshold: config.bernoulli_threshold,
            _marker: PhantomData,
        })
    }

    pub fn structure(&self) -> AlgebraicStructure {
        T::STRUCTURE
    }

    /// A value interpolated uniformly between the representation's MinValue
    /// and MaxValue
    ///
    /// The interpolation runs in `f64` and is cast back, so for the 64-bit
    /// integers the extremes saturate at the bounds. `bool` has no interior
    /// to interpolate, so it draws MinValue or MaxValue with equal odds.
    pub fn next_scalar(&mut self) -> Scalar<T> {
        let descriptor = T::descriptor();
        if T::KIND == Kind::Bool {
            let pick = if self.rng.gen::<bool>() { descriptor.max } else { descriptor.min };
            return Scalar::new(pick);
        }
        let u: f64 = self.rng.gen();
        let min = descriptor.min.cast_to::<f64>();
        let max = descriptor.max.cast_to::<f64>();
        // min + (max - min) * u, without forming max - min (infinite for floats)
        let x = min * (1.0 - u) + max * u;
        Scalar::new(x.cast_to::<T>())
    }

    /// Zero or One for semirings and rings; a value in `[Zero, One)` for
    /// fields
    pub fn next_between_zero_one(&mut self) -> Scalar<T> {
        let descriptor = T::descriptor();
        if T::STRUCTURE <= AlgebraicStructure::Ring {
            return if self.rng.gen_bool(self.bernoulli_threshold) {
                Scalar::new(descriptor.one)
            } else {
                Scalar::new(descriptor.zero)
            };
        }
        loop {
            let u: f64 = self.rng.gen();
            let v = u.cast_to::<T>();
            // narrowing to f32 can round the top of [0, 1) up to 1
            if v < descriptor.one {
                return Scalar::new(v);
            }
        }
    }

    /// Draw `n` values with [`next_scalar`](Self::next_scalar)
    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub fn fill(&mut self, n: usize) -> Vec<Scalar<T>> {
        (0..n).map(|_| self.next_scalar()).collect()
    }
}

impl<T: Representation> Iterator for ScalarSampler<T> {
    type Item = Scalar<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_scalar())
    }
}
