use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_core::RngCore;

/// Source of uniform samples for initialization, velocity noise and mutation.
///
/// Implemented for every [`rand::Rng`], so any rand generator can be passed
/// in. Ranges are closed and callers must pass `min <= max`.
pub trait RandomSource {
    /// Uniform real in `[min, max]`.
    fn uniform_real(&mut self, min: f64, max: f64) -> f64;

    /// Uniform integer in `[min, max]`.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;

    /// Uniform real in `[0, 1]`.
    fn unit(&mut self) -> f64 {
        self.uniform_real(0.0, 1.0)
    }
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn uniform_real(&mut self, min: f64, max: f64) -> f64 {
        debug_assert!(min <= max, "empty range [{min}, {max}]");
        self.random_range(min..=max)
    }

    #[inline]
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max, "empty range [{min}, {max}]");
        self.random_range(min..=max)
    }
}

/// Owned generator handle for a single optimizer run.
///
/// Seeded runs are bit-for-bit reproducible. Give each worker its own
/// instance rather than sharing one.
#[derive(Clone, Debug)]
pub struct SwarmRng {
    inner: StdRng,
}

impl SwarmRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the operating system, falling back to the wall clock if the
    /// OS entropy source is unavailable.
    pub fn from_entropy() -> Self {
        match StdRng::try_from_os_rng() {
            Ok(inner) => Self { inner },
            Err(err) => {
                log::warn!("OS entropy source unavailable ({err}); seeding from system time");
                Self::seeded(time_seed())
            }
        }
    }
}

impl Default for SwarmRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for SwarmRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
