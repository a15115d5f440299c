use thiserror::Error;

/// Errors raised by the integration engine and the normalizer built on it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// Rule tag is neither midpoint nor trapezoidal.
    #[error("unsupported integration method '{method}', expected 'mid' or 'trap'")]
    UnsupportedMethod {
        method: String
    },

    /// The normalization divisor (integral or peak) is zero or not finite.
    #[error("degenerate {strategy} normalization: divisor is {divisor}")]
    DegenerateNormalization {
        strategy: &'static str,
        divisor: f64
    },

    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String
    },

    #[error("no convergence after {iterations} refinements ({intervals} intervals): epsilon {epsilon:.3e} > threshold {threshold:.3e}")]
    ConvergenceFailed {
        iterations: usize,
        intervals: usize,
        epsilon: f64,
        threshold: f64
    }
}

pub type Result<T> = std::result::Result<T, IntegrationError>;

impl IntegrationError {
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> IntegrationError {
        IntegrationError::InvalidParameter { parameter, message: message.into() }
    }

    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            IntegrationError::InvalidParameter { .. } | IntegrationError::UnsupportedMethod { .. }
        )
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, IntegrationError::DegenerateNormalization { .. })
    }

    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, IntegrationError::ConvergenceFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntegrationError::UnsupportedMethod { method: "simpson".to_string() };
        assert_eq!(
            err.to_string(),
            "unsupported integration method 'simpson', expected 'mid' or 'trap'"
        );

        let err = IntegrationError::invalid_parameter("initial_intervals", "must be positive");
        assert_eq!(err.to_string(), "invalid parameter 'initial_intervals': must be positive");

        let err = IntegrationError::DegenerateNormalization { strategy: "area", divisor: 0.0 };
        assert!(err.to_string().contains("degenerate area normalization"));
    }

    #[test]
    fn test_classification() {
        let parameter = IntegrationError::invalid_parameter("threshold", "must be positive");
        let degenerate = IntegrationError::DegenerateNormalization { strategy: "height", divisor: 0.0 };
        let failed = IntegrationError::ConvergenceFailed {
            iterations: 10,
            intervals: 110,
            epsilon: 1e-3,
            threshold: 1e-9
        };

        assert!(parameter.is_parameter_error());
        assert!(!parameter.is_degenerate());
        assert!(degenerate.is_degenerate());
        assert!(!degenerate.is_convergence_failure());
        assert!(failed.is_convergence_failure());
        assert!(!failed.is_parameter_error());
    }
}
