use super::Solution;
use super::objective::SampleGradient;
use crate::Vector;
use crate::error::{MlError, Result};
use rand::Rng;
use rand::seq::SliceRandom;

/// Epoch-based stochastic gradient descent.
///
/// Every epoch visits each sample exactly once in a fresh random order. The
/// step size at global step `t = epoch * n_samples + j` is `t0 / (t + t1)`.
/// There is no convergence test: exactly `n_epochs` passes are made.
#[derive(Clone, Debug, PartialEq)]
pub struct Sgd {
    n_epochs: usize,
    t0: f64,
    t1: f64,
}

impl Sgd {
    pub fn new() -> Self {
        Self {
            n_epochs: 5,
            t0: 5.0,
            t1: 50.0,
        }
    }

    pub fn with_params(n_epochs: usize, t0: f64, t1: f64) -> Self {
        Self { n_epochs, t0, t1 }
    }

    pub fn n_epochs(mut self, n_epochs: usize) -> Self {
        self.n_epochs = n_epochs;
        self
    }

    pub fn schedule(mut self, t0: f64, t1: f64) -> Self {
        self.t0 = t0;
        self.t1 = t1;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_epochs < 1 {
            return Err(MlError::invalid(
                "n_iter",
                "at least one pass over the samples is required",
            ));
        }
        if !(self.t0.is_finite() && self.t0 > 0.0) {
            return Err(MlError::invalid(
                "t0",
                format!("must be a positive finite number, got {}", self.t0),
            ));
        }
        if !(self.t1.is_finite() && self.t1 > 0.0) {
            return Err(MlError::invalid(
                "t1",
                format!("must be a positive finite number, got {}", self.t1),
            ));
        }
        Ok(())
    }

    pub fn learning_rate(&self, t: usize) -> f64 {
        self.t0 / (t as f64 + self.t1)
    }

    /// Runs the passes. Call [`Sgd::validate`] first; an `n_epochs` of zero
    /// returns `initial` unchanged.
    pub fn minimize<O, R>(&self, objective: &O, initial: Vector, rng: &mut R) -> Solution
    where
        O: SampleGradient + ?Sized,
        R: Rng + ?Sized,
    {
        let n_samples = objective.n_samples();
        let mut params = initial;
        let mut order: Vec<usize> = (0..n_samples).collect();

        for epoch in 0..self.n_epochs {
            order.shuffle(rng);
            for (j, &index) in order.iter().enumerate() {
                let gradient = objective.sample_gradient(&params, index);
                let lr = self.learning_rate(epoch * n_samples + j);
                params.scaled_add(-lr, &gradient);
            }
            log::trace!("sgd epoch {} done, params {:?}", epoch, params);
        }

        log::debug!(
            "sgd finished {} epochs over {} samples",
            self.n_epochs,
            n_samples
        );
        Solution {
            params,
            iterations: self.n_epochs * n_samples,
            converged: true,
        }
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Self::new()
    }
}
