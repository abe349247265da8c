use chrono::{Local, Timelike};
use rand_distr::{Distribution, Uniform};

/// Source of uniform random draws. Production code uses the thread rng;
/// tests substitute a deterministic stub.
pub trait Sampler: Send + Sync {
    fn uniform(&self, min: f64, max: f64) -> f64;
}

/// Source of the current local hour, used for peak-hour pricing.
pub trait Clock: Send + Sync {
    fn current_hour(&self) -> u32;
}

#[derive(Debug)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn uniform(&self, min: f64, max: f64) -> f64 {
        let dist = Uniform::new(min, max);
        dist.sample(&mut rand::thread_rng())
    }
}

#[derive(Debug)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Returns its value clamped to the requested range, so every draw lands on
/// a deterministic edge or constant.
#[cfg(test)]
pub struct ConstSampler(pub f64);

#[cfg(test)]
impl Sampler for ConstSampler {
    fn uniform(&self, min: f64, max: f64) -> f64 {
        self.0.clamp(min, max)
    }
}

#[cfg(test)]
pub struct FixedClock(pub u32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}
