use crate::math::integration::domain::Domain;
use crate::math::integration::integrationrule::IntegrationRule;

/// Sample radii for `rule` over `domain` split into `intervals` subintervals.
///
/// `intervals` must be positive; callers validate it before reaching here.
pub fn generate_points(domain: &Domain, intervals: usize, rule: IntegrationRule) -> Vec<f64> {
    match rule {
        IntegrationRule::Midpoint => mid_points(domain.start(), domain.end(), intervals),
        IntegrationRule::Trapezoidal => linear_points(domain.start(), domain.end(), intervals)
    }
}

/// Midpoints of each subinterval: `start + i*w + w/2` for `i` in `[0, intervals)`.
pub fn mid_points(start: f64, end: f64, intervals: usize) -> Vec<f64> {
    if intervals == 0 {
        return Vec::new();
    }
    let width = (end - start) / intervals as f64;
    let half_width = 0.5 * width;
    (0..intervals)
        .map(|i| start + i as f64 * width + half_width)
        .collect()
}

/// `intervals + 1` evenly spaced points including both bounds.
pub fn linear_points(start: f64, end: f64, intervals: usize) -> Vec<f64> {
    if intervals == 0 {
        return vec![start];
    }
    let width = (end - start) / intervals as f64;
    let mut points: Vec<f64> = (0..intervals)
        .map(|i| start + i as f64 * width)
        .collect();
    // pinned so the last node is exactly `end`
    points.push(end);
    points
}
