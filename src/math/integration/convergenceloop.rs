use serde::{
    Deserialize,
    Serialize
};

use crate::math::integration::domain::Domain;
use crate::math::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::math::integration::integrationrule::IntegrationRule;
use crate::math::integration::quadrature::estimate;
use crate::math::integration::sampleset::SampleSet;

fn default_max_iterations() -> usize { 10_000 }

fn default_max_intervals() -> usize { 1_000_000 }

fn default_max_evaluations() -> usize { 10_000_000 }

/// Parameters of the fixed-increment refinement loop.
///
/// # JSON
///
/// ```json
/// {
///     "rule": "mid",
///     "convergence_threshold": 1e-6,
///     "initial_intervals": 10,
///     "interval_increment": 10,
///     "max_iterations": 10000,
///     "max_intervals": 1000000,
///     "max_evaluations": 10000000
/// }
/// ```
///
/// The three limits may be omitted. `max_evaluations` caps the integrand
/// evaluations summed over every estimate, initial one included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceSettings {
    pub rule: IntegrationRule,
    pub convergence_threshold: f64,
    pub initial_intervals: usize,
    pub interval_increment: i64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_max_intervals")]
    pub max_intervals: usize,
    #[serde(default = "default_max_evaluations")]
    pub max_evaluations: usize
}

impl ConvergenceSettings {
    pub fn new(
        rule: IntegrationRule,
        convergence_threshold: f64,
        initial_intervals: usize,
        interval_increment: i64
    ) -> ConvergenceSettings {
        ConvergenceSettings {
            rule,
            convergence_threshold,
            initial_intervals,
            interval_increment,
            max_iterations: default_max_iterations(),
            max_intervals: default_max_intervals(),
            max_evaluations: default_max_evaluations()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> ConvergenceSettings {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_intervals(mut self, max_intervals: usize) -> ConvergenceSettings {
        self.max_intervals = max_intervals;
        self
    }

    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> ConvergenceSettings {
        self.max_evaluations = max_evaluations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.convergence_threshold.is_finite() && self.convergence_threshold > 0.0) {
            return Err(IntegrationError::invalid_parameter(
                "convergence_threshold",
                format!("must be a positive finite number, got {}", self.convergence_threshold)
            ));
        }
        if self.initial_intervals == 0 {
            return Err(IntegrationError::invalid_parameter("initial_intervals", "must be at least 1"));
        }
        if self.interval_increment == 0 {
            return Err(IntegrationError::invalid_parameter("interval_increment", "must be nonzero"));
        }
        if self.max_iterations == 0 {
            return Err(IntegrationError::invalid_parameter("max_iterations", "must be at least 1"));
        }
        if self.max_intervals < self.initial_intervals {
            return Err(IntegrationError::invalid_parameter(
                "max_intervals",
                format!("must be at least initial_intervals ({}), got {}", self.initial_intervals, self.max_intervals)
            ));
        }
        let initial_samples = self.rule.sample_count(self.initial_intervals);
        if self.max_evaluations < initial_samples {
            return Err(IntegrationError::invalid_parameter(
                "max_evaluations",
                format!("must cover the initial {} samples, got {}", initial_samples, self.max_evaluations)
            ));
        }
        Ok(())
    }
}

/// Outcome of a converged refinement loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceResult {
    estimate: f64,
    samples: SampleSet,
    intervals: usize,
    iterations: usize,
    epsilon: f64
}

impl ConvergenceResult {
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Refinement steps taken after the initial estimate.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Change between the last two estimates.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

fn next_interval_count(intervals: usize, increment: i64) -> Option<usize> {
    let next = intervals.checked_add_signed(isize::try_from(increment).ok()?)?;
    if next == 0 { None } else { Some(next) }
}

/// Why the next refinement may not run, if it may not.
fn refinement_limit(
    settings: &ConvergenceSettings,
    intervals: usize,
    evaluations: usize
) -> Option<String> {
    if intervals > settings.max_intervals {
        return Some(format!("{} intervals exceed max_intervals {}", intervals, settings.max_intervals));
    }
    let needed = evaluations.saturating_add(settings.rule.sample_count(intervals));
    if needed > settings.max_evaluations {
        return Some(format!(
            "{} evaluations would exceed max_evaluations {}",
            needed, settings.max_evaluations
        ));
    }
    None
}

/// Refines the estimate of `∫ integrand` over `domain` until two successive
/// estimates differ by at most `settings.convergence_threshold`.
///
/// At least one refinement is always performed. Fails with `ConvergenceFailed`
/// once `settings.max_iterations` refinements have been spent, when the next
/// refinement would pass `max_intervals` or `max_evaluations`, or when a
/// negative increment would leave fewer than one interval.
pub fn converge<F>(
    domain: &Domain,
    integrand: &F,
    settings: &ConvergenceSettings
) -> Result<ConvergenceResult>
where
    F: Fn(f64) -> f64 + ?Sized
{
    settings.validate()?;

    let rule = settings.rule;
    let threshold = settings.convergence_threshold;
    let mut intervals = settings.initial_intervals;
    let (mut previous, _) = estimate(domain, integrand, rule, intervals)?;
    let mut evaluations = rule.sample_count(intervals);
    let mut epsilon = f64::INFINITY;

    for iteration in 1..=settings.max_iterations {
        let next = match next_interval_count(intervals, settings.interval_increment) {
            Some(next) => next,
            None => {
                log::warn!(
                    "{} refinement stopped: increment {} leaves no intervals after {} steps",
                    rule, settings.interval_increment, iteration - 1
                );
                return Err(IntegrationError::ConvergenceFailed {
                    iterations: iteration - 1,
                    intervals,
                    epsilon,
                    threshold
                });
            }
        };

        if let Some(reason) = refinement_limit(settings, next, evaluations) {
            log::warn!(
                "{} refinement stopped after {} steps: {} (epsilon = {:.3e})",
                rule, iteration - 1, reason, epsilon
            );
            return Err(IntegrationError::ConvergenceFailed {
                iterations: iteration - 1,
                intervals,
                epsilon,
                threshold
            });
        }
        intervals = next;

        let (current, samples) = estimate(domain, integrand, rule, intervals)?;
        evaluations += samples.len();
        epsilon = (current - previous).abs();
        log::debug!(
            "{} refinement {}: intervals = {}, estimate = {:.12e}, epsilon = {:.3e}",
            rule, iteration, intervals, current, epsilon
        );

        if epsilon <= threshold {
            log::info!(
                "{} rule converged to {:.12e} with {} intervals after {} refinements",
                rule, current, intervals, iteration
            );
            return Ok(ConvergenceResult {
                estimate: current,
                samples,
                intervals,
                iterations: iteration,
                epsilon
            });
        }
        previous = current;
    }

    log::warn!(
        "{} rule did not converge within {} refinements (epsilon = {:.3e})",
        rule, settings.max_iterations, epsilon
    );
    Err(IntegrationError::ConvergenceFailed {
        iterations: settings.max_iterations,
        intervals,
        epsilon,
        threshold
    })
}
