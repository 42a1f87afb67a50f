use super::Solution;
use super::objective::Objective;
use crate::Vector;
use crate::error::{MlError, Result};

/// Which way a step moves along the gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Descent,
    Ascent,
}

/// Full-batch gradient descent stopped by an objective-delta threshold.
///
/// Each iteration proposes `θ' = project(θ ∓ eta·∇J(θ))` and stops as soon as
/// `|J(θ') - J(θ)| < epsilon`, returning `θ'`. Hitting `max_iters` is not an
/// error; the last iterate is returned with `converged == false`.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescent {
    eta: f64,
    max_iters: usize,
    epsilon: f64,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            eta: 0.01,
            max_iters: 10_000,
            epsilon: 1e-8,
        }
    }

    pub fn with_params(eta: f64, max_iters: usize, epsilon: f64) -> Self {
        Self {
            eta,
            max_iters,
            epsilon,
        }
    }

    pub fn eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.eta.is_finite() && self.eta > 0.0) {
            return Err(MlError::invalid(
                "eta",
                format!("must be a positive finite number, got {}", self.eta),
            ));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(MlError::invalid(
                "epsilon",
                format!("must be a non-negative finite number, got {}", self.epsilon),
            ));
        }
        Ok(())
    }

    pub fn minimize<O: Objective + ?Sized>(&self, objective: &O, initial: Vector) -> Solution {
        self.run(objective, initial, Direction::Descent)
    }

    pub fn maximize<O: Objective + ?Sized>(&self, objective: &O, initial: Vector) -> Solution {
        self.run(objective, initial, Direction::Ascent)
    }

    pub fn run<O: Objective + ?Sized>(
        &self,
        objective: &O,
        initial: Vector,
        direction: Direction,
    ) -> Solution {
        let step = match direction {
            Direction::Descent => -self.eta,
            Direction::Ascent => self.eta,
        };

        let mut params = objective.project(initial);
        let mut value = objective.value(&params);

        for iteration in 0..self.max_iters {
            let gradient = objective.gradient(&params);
            let mut candidate = params;
            candidate.scaled_add(step, &gradient);
            let candidate = objective.project(candidate);
            let candidate_value = objective.value(&candidate);

            let delta = (candidate_value - value).abs();
            params = candidate;
            value = candidate_value;

            if delta < self.epsilon {
                log::debug!(
                    "gradient {:?} converged after {} iterations (objective {:.6e})",
                    direction,
                    iteration + 1,
                    value
                );
                return Solution {
                    params,
                    iterations: iteration + 1,
                    converged: true,
                };
            }
        }

        log::warn!(
            "gradient {:?} stopped at the iteration cap ({}) without meeting epsilon {:e}",
            direction,
            self.max_iters,
            self.epsilon
        );
        Solution {
            params,
            iterations: self.max_iters,
            converged: false,
        }
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}
