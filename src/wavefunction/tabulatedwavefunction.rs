use crate::math::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::math::point2d::Point2D;
use crate::wavefunction::wavefunction::Wavefunction;

/// Wavefunction known only at a set of radii, linearly interpolated between
/// nodes and held flat beyond the first and last node.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedWavefunction {
    points: Vec<Point2D>
}

impl TabulatedWavefunction {
    pub fn new(mut points: Vec<Point2D>) -> Result<TabulatedWavefunction> {
        if points.len() < 2 {
            return Err(IntegrationError::invalid_parameter(
                "points",
                format!("at least two nodes are required, got {}", points.len())
            ));
        }
        if points.iter().any(|p| !p.x().is_finite() || !p.y().is_finite()) {
            return Err(IntegrationError::invalid_parameter("points", "nodes must be finite"));
        }

        points.sort_by(|a, b| a.x().total_cmp(&b.x()));
        if points.windows(2).any(|w| w[0].x() == w[1].x()) {
            return Err(IntegrationError::invalid_parameter("points", "node radii must be distinct"));
        }
        Ok(TabulatedWavefunction { points })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn min_x(&self) -> f64 {
        self.points[0].x()
    }

    pub fn max_x(&self) -> f64 {
        self.points[self.points.len() - 1].x()
    }
}

impl Wavefunction for TabulatedWavefunction {
    fn amplitude(&self, radius: f64) -> f64 {
        if radius.is_nan() {
            return f64::NAN;
        }
        let last = self.points.len() - 1;
        if radius <= self.points[0].x() {
            return self.points[0].y();
        }
        if radius >= self.points[last].x() {
            return self.points[last].y();
        }
        // first node strictly to the right of `radius`, in 1..=last
        let upper = self.points.partition_point(|p| p.x() <= radius);
        Point2D::lerp(&self.points[upper - 1], &self.points[upper], radius)
    }
}
