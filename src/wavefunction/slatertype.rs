use crate::math::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::wavefunction::wavefunction::Wavefunction;

/// Normalized Slater-type radial function `N · r^(n-1) · e^(-ζr)`,
/// `N = (2ζ)^n · sqrt(2ζ / (2n)!)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlaterType {
    n: u32,
    zeta: f64,
    norm: f64
}

impl SlaterType {
    pub fn new(n: u32, zeta: f64) -> Result<SlaterType> {
        if n == 0 {
            return Err(IntegrationError::invalid_parameter("n", "principal quantum number must be at least 1"));
        }
        if !(zeta.is_finite() && zeta > 0.0) {
            return Err(IntegrationError::invalid_parameter(
                "zeta",
                format!("orbital exponent must be positive, got {}", zeta)
            ));
        }
        let two_n_factorial = (1..=2 * n).fold(1.0, |acc, i| acc * i as f64);
        let norm = (2.0 * zeta).powi(n as i32) * (2.0 * zeta / two_n_factorial).sqrt();
        Ok(SlaterType { n, zeta, norm })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn zeta(&self) -> f64 {
        self.zeta
    }
}

impl Wavefunction for SlaterType {
    fn amplitude(&self, radius: f64) -> f64 {
        self.norm * radius.powi(self.n as i32 - 1) * (-self.zeta * radius).exp()
    }
}
