use crate::math::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::wavefunction::wavefunction::Wavefunction;

// ─────────────────────────────────────────────────────────────────────────────
// Hydrogenic radial function, atomic units (a0 = 1)
// ─────────────────────────────────────────────────────────────────────────────
//
//   R_nl(r) = N · e^(-ρ/2) · ρ^l · L_{n-l-1}^{(2l+1)}(ρ),   ρ = 2Zr/n
//   N       = sqrt((2Z/n)^3 · (n-l-1)! / (2n · (n+l)!))
//
// so that ∫ r² R_nl(r)² dr = 1 over [0, ∞).

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hydrogenic {
    n: u32,
    l: u32,
    z: f64,
    norm: f64
}

impl Hydrogenic {
    pub fn new(n: u32, l: u32, z: f64) -> Result<Hydrogenic> {
        if n == 0 {
            return Err(IntegrationError::invalid_parameter("n", "principal quantum number must be at least 1"));
        }
        if l >= n {
            return Err(IntegrationError::invalid_parameter(
                "l",
                format!("angular momentum {} must be less than n = {}", l, n)
            ));
        }
        if !(z.is_finite() && z > 0.0) {
            return Err(IntegrationError::invalid_parameter(
                "z",
                format!("nuclear charge must be positive, got {}", z)
            ));
        }
        let n_f = n as f64;
        let norm = ((2.0 * z / n_f).powi(3) * factorial(n - l - 1) / (2.0 * n_f * factorial(n + l))).sqrt();
        Ok(Hydrogenic { n, l, z, norm })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

impl Wavefunction for Hydrogenic {
    fn amplitude(&self, radius: f64) -> f64 {
        let rho = 2.0 * self.z * radius / self.n as f64;
        let laguerre = generalized_laguerre(self.n - self.l - 1, (2 * self.l + 1) as f64, rho);
        self.norm * (-0.5 * rho).exp() * rho.powi(self.l as i32) * laguerre
    }
}

fn factorial(k: u32) -> f64 {
    (1..=k).fold(1.0, |acc, i| acc * i as f64)
}

/// `L_k^{(alpha)}(x)` by the three-term recurrence.
fn generalized_laguerre(k: u32, alpha: f64, x: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    let mut previous = 1.0;
    let mut current = 1.0 + alpha - x;
    for j in 1..k {
        let j_f = j as f64;
        let next = ((2.0 * j_f + 1.0 + alpha - x) * current - (j_f + alpha) * previous) / (j_f + 1.0);
        previous = current;
        current = next;
    }
    current
}
