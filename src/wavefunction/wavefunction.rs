use std::sync::Arc;

/// Radial wavefunction `f(r)`, treated as a pure black box.
pub trait Wavefunction: Send + Sync {
    fn amplitude(&self, radius: f64) -> f64;
}

impl<F> Wavefunction for F
where
    F: Fn(f64) -> f64 + Send + Sync
{
    fn amplitude(&self, radius: f64) -> f64 {
        self(radius)
    }
}

pub type SharedWavefunction = Arc<dyn Wavefunction>;

pub fn constant(value: f64) -> SharedWavefunction {
    Arc::new(move |_radius: f64| value)
}
