use crate::math::integration::domain::Domain;
use crate::math::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::math::integration::integrationrule::IntegrationRule;
use crate::math::integration::pointgenerator::generate_points;
use crate::math::integration::sampleset::SampleSet;

/// Definite integral estimate from samples taken by `rule`.
///
/// - midpoint:    `h * Σ y_i`
/// - trapezoidal: `h * (2 Σ y_i - y_0 - y_n) / 2`
///
/// with `h = width / intervals`.
pub fn integrate(
    rule: IntegrationRule,
    y_values: &[f64],
    width: f64,
    intervals: usize
) -> Result<f64> {
    if intervals == 0 {
        return Err(IntegrationError::invalid_parameter("intervals", "must be at least 1"));
    }
    let expected = rule.sample_count(intervals);
    if y_values.len() != expected {
        return Err(IntegrationError::invalid_parameter(
            "y_values",
            format!("{} rule with {} intervals needs {} samples, got {}",
                    rule, intervals, expected, y_values.len())
        ));
    }

    let length = width / intervals as f64;
    let sum: f64 = y_values.iter().sum();
    let estimate = match rule {
        IntegrationRule::Midpoint => length * sum,
        IntegrationRule::Trapezoidal => {
            let first = y_values[0];
            let last = y_values[y_values.len() - 1];
            length * 0.5 * (2.0 * sum - first - last)
        }
    };
    Ok(estimate)
}

/// Samples `integrand` on the `rule` grid and integrates it in one step.
pub fn estimate<F>(
    domain: &Domain,
    integrand: &F,
    rule: IntegrationRule,
    intervals: usize
) -> Result<(f64, SampleSet)>
where
    F: Fn(f64) -> f64 + ?Sized
{
    let x_values = generate_points(domain, intervals, rule);
    let samples = SampleSet::sample(x_values, integrand);
    let value = integrate(rule, samples.y_values(), domain.width(), intervals)?;
    Ok((value, samples))
}
