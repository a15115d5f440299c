use std::sync::Arc;

use serde::Serialize;

use crate::math::integration::convergenceloop::{
    converge,
    ConvergenceResult,
    ConvergenceSettings
};
use crate::math::integration::domain::Domain;
use crate::math::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::math::integration::integrationrule::IntegrationRule;
use crate::math::integration::pointgenerator::linear_points;
use crate::math::integration::sampleset::SampleSet;
use crate::rdf::radialdensity::{
    radial_density,
    sample_radial_density
};
use crate::wavefunction::wavefunction::{
    SharedWavefunction,
    Wavefunction
};

/// Rescaled RDF samples.
///
/// `intervals` is the converged interval count for area normalization and the
/// requested count for height normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizationResult {
    samples: SampleSet,
    scale_factor: f64,
    intervals: usize
}

impl NormalizationResult {
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn x_values(&self) -> &[f64] {
        self.samples.x_values()
    }

    pub fn y_values(&self) -> &[f64] {
        self.samples.y_values()
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn intervals(&self) -> usize {
        self.intervals
    }
}

/// `1 / divisor`, rejected when either side is zero or not finite. A
/// subnormal divisor overflows the reciprocal and is rejected too.
fn scale_factor_of(strategy: &'static str, divisor: f64) -> Result<f64> {
    let factor = 1.0 / divisor;
    if divisor == 0.0 || !divisor.is_finite() || !factor.is_finite() {
        log::warn!("{} normalization rejected: divisor is {:e}", strategy, divisor);
        return Err(IntegrationError::DegenerateNormalization { strategy, divisor });
    }
    Ok(factor)
}

/// Radial distribution of one wavefunction over a fixed domain.
pub struct RdfNormalizer {
    wavefunction: SharedWavefunction,
    domain: Domain
}

impl RdfNormalizer {
    pub fn new(wavefunction: SharedWavefunction, domain: Domain) -> RdfNormalizer {
        RdfNormalizer { wavefunction, domain }
    }

    /// Binds a closure (or any owned wavefunction) over `[start, end]`.
    pub fn from_fn<W>(wavefunction: W, start: f64, end: f64) -> Result<RdfNormalizer>
    where
        W: Wavefunction + 'static
    {
        let domain = Domain::new(start, end)?;
        Ok(RdfNormalizer::new(Arc::new(wavefunction), domain))
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn wavefunction(&self) -> &SharedWavefunction {
        &self.wavefunction
    }

    /// RDF density at a single radius.
    pub fn density(&self, radius: f64) -> f64 {
        radial_density(self.wavefunction.as_ref(), radius)
    }

    /// Converged, unnormalized integral of the RDF density.
    pub fn radial_integral(&self, settings: &ConvergenceSettings) -> Result<ConvergenceResult> {
        let wavefunction = self.wavefunction.as_ref();
        let integrand = |r: f64| radial_density(wavefunction, r);
        converge(&self.domain, &integrand, settings)
    }

    /// Scales the converged samples so the area under the curve is 1.
    pub fn normalize_area(
        &self,
        rule: IntegrationRule,
        convergence_threshold: f64,
        initial_intervals: usize,
        interval_increment: i64
    ) -> Result<NormalizationResult> {
        let settings = ConvergenceSettings::new(
            rule,
            convergence_threshold,
            initial_intervals,
            interval_increment
        );
        self.normalize_area_with(&settings)
    }

    pub fn normalize_area_with(&self, settings: &ConvergenceSettings) -> Result<NormalizationResult> {
        let converged = self.radial_integral(settings)?;
        let area = converged.estimate();
        let scale_factor = scale_factor_of("area", area)?;
        let intervals = converged.intervals();
        let samples = converged.samples().normalized_by(area);
        Ok(NormalizationResult { samples, scale_factor, intervals })
    }

    /// Samples `intervals + 1` evenly spaced radii and scales the peak to 1.
    pub fn normalize_height(&self, intervals: usize) -> Result<NormalizationResult> {
        if intervals == 0 {
            return Err(IntegrationError::invalid_parameter("intervals", "must be at least 1"));
        }
        let x_values = linear_points(self.domain.start(), self.domain.end(), intervals);
        let y_values = sample_radial_density(self.wavefunction.as_ref(), &x_values);
        let raw = SampleSet::new(x_values, y_values);

        // NaN when any sample is NaN
        let peak = raw.max_y().unwrap_or(0.0);
        let scale_factor = scale_factor_of("height", peak)?;
        Ok(NormalizationResult {
            samples: raw.normalized_by(peak),
            scale_factor,
            intervals
        })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::integration::quadrature::integrate;
    use crate::wavefunction::hydrogenic::Hydrogenic;

    #[test]
    fn test_area_of_unit_wavefunction() {
        let rdf = RdfNormalizer::from_fn(|_: f64| 1.0, 0.0, 1.0).unwrap();
        let result = rdf.normalize_area(IntegrationRule::Midpoint, 1e-6, 10, 10).unwrap();
        assert_relative_eq!(result.scale_factor(), 3.0 / (4.0 * PI), max_relative = 1e-4);
        assert_eq!(result.x_values().len(), result.intervals());
    }

    #[test]
    fn test_area_renormalizes_to_one() {
        let rdf = RdfNormalizer::from_fn(|r: f64| (-r).exp() * (1.0 + r), 0.0, 8.0).unwrap();
        for rule in [IntegrationRule::Midpoint, IntegrationRule::Trapezoidal] {
            let threshold = 1e-7;
            let result = rdf.normalize_area(rule, threshold, 20, 20).unwrap();
            let area = integrate(rule, result.y_values(), rdf.domain().width(), result.intervals()).unwrap();
            assert!((area - 1.0).abs() <= threshold);
        }
    }

    #[test]
    fn test_height_peak_is_one() {
        let h2s = Hydrogenic::new(2, 0, 1.0).unwrap();
        let rdf = RdfNormalizer::from_fn(h2s, 0.0, 20.0).unwrap();
        let result = rdf.normalize_height(400).unwrap();
        assert_eq!(result.y_values().len(), 401);
        assert_eq!(result.samples().max_y(), Some(1.0));
        assert!(result.y_values().iter().all(|&y| y <= 1.0 && y >= 0.0));
    }

    #[test]
    fn test_zero_wavefunction_is_degenerate() {
        let rdf = RdfNormalizer::from_fn(|_: f64| 0.0, 0.0, 5.0).unwrap();
        for rule in [IntegrationRule::Midpoint, IntegrationRule::Trapezoidal] {
            let err = rdf.normalize_area(rule, 1e-6, 10, 10).unwrap_err();
            assert!(err.is_degenerate());
        }
        assert!(rdf.normalize_height(10).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_tiny_wavefunction_is_degenerate() {
        // density is subnormal, so its reciprocal overflows
        let rdf = RdfNormalizer::from_fn(|_: f64| 1e-160, 0.0, 1.0).unwrap();
        let err = rdf.normalize_area(IntegrationRule::Midpoint, 1e-6, 10, 10).unwrap_err();
        assert!(matches!(err, IntegrationError::DegenerateNormalization { strategy: "area", .. }));
        let err = rdf.normalize_height(4).unwrap_err();
        assert!(matches!(err, IntegrationError::DegenerateNormalization { strategy: "height", .. }));
    }

    #[test]
    fn test_nan_sample_is_degenerate_for_height() {
        let rdf = RdfNormalizer::from_fn(|r: f64| if r == 0.5 { f64::NAN } else { 1.0 }, 0.0, 1.0).unwrap();
        match rdf.normalize_height(4).unwrap_err() {
            IntegrationError::DegenerateNormalization { strategy, divisor } => {
                assert_eq!(strategy, "height");
                assert!(divisor.is_nan());
            },
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let rdf = RdfNormalizer::from_fn(|r: f64| r, 0.0, 1.0).unwrap();
        assert!(rdf.normalize_height(0).unwrap_err().is_parameter_error());
        assert!(rdf.normalize_area(IntegrationRule::Midpoint, -1.0, 10, 10).unwrap_err().is_parameter_error());
        assert!(rdf.normalize_area(IntegrationRule::Midpoint, 1e-6, 0, 10).unwrap_err().is_parameter_error());
        assert!(rdf.normalize_area(IntegrationRule::Midpoint, 1e-6, 10, 0).unwrap_err().is_parameter_error());
        assert!(RdfNormalizer::from_fn(|r: f64| r, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_radial_integral_of_hydrogen_ground_state() {
        let rdf = RdfNormalizer::from_fn(Hydrogenic::new(1, 0, 1.0).unwrap(), 0.0, 40.0).unwrap();
        let settings = ConvergenceSettings::new(IntegrationRule::Trapezoidal, 1e-8, 100, 100);
        let result = rdf.radial_integral(&settings).unwrap();
        assert_relative_eq!(result.estimate(), 4.0 * PI, max_relative = 1e-6);
        assert_relative_eq!(rdf.density(1.0), 16.0 * PI * (-2.0f64).exp(), max_relative = 1e-12);
    }
}
