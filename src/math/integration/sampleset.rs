use serde::Serialize;

/// Ordered samples `(x_i, y_i)` of an integrand, x strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSet {
    x_values: Vec<f64>,
    y_values: Vec<f64>
}

impl SampleSet {
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>) -> SampleSet {
        debug_assert_eq!(x_values.len(), y_values.len());
        SampleSet { x_values, y_values }
    }

    /// Evaluates `function` at every x, in order.
    pub fn sample<F>(x_values: Vec<f64>, function: F) -> SampleSet
    where
        F: Fn(f64) -> f64
    {
        let y_values = x_values.iter().map(|&x| function(x)).collect();
        SampleSet { x_values, y_values }
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Largest y-value, `None` when empty. Any NaN sample makes the result NaN.
    pub fn max_y(&self) -> Option<f64> {
        self.y_values
            .iter()
            .copied()
            .fold(None, |acc, y| match acc {
                Some(m) if m.is_nan() || m >= y => Some(m),
                _ => Some(y)
            })
    }

    /// Copy with every y divided by `divisor`, so a sample equal to `divisor`
    /// maps to exactly 1.
    pub fn normalized_by(&self, divisor: f64) -> SampleSet {
        SampleSet {
            x_values: self.x_values.clone(),
            y_values: self.y_values.iter().map(|y| y / divisor).collect()
        }
    }
}
