use std::f64::consts::PI;

use crate::wavefunction::wavefunction::Wavefunction;

/// RDF density `4πr² f(r)²` at `radius`.
pub fn radial_density<W>(wavefunction: &W, radius: f64) -> f64
where
    W: Wavefunction + ?Sized
{
    let amplitude = wavefunction.amplitude(radius);
    4.0 * PI * radius * radius * amplitude * amplitude
}

/// Density at each radius, in input order.
pub fn sample_radial_density<W>(wavefunction: &W, radii: &[f64]) -> Vec<f64>
where
    W: Wavefunction + ?Sized
{
    radii.iter().map(|&r| radial_density(wavefunction, r)).collect()
}
