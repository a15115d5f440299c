use serde::{
    Deserialize,
    Serialize
};

use crate::math::integration::integrationerror::{
    IntegrationError,
    Result
};

#[derive(Deserialize)]
struct DomainJsonProp {
    start: f64,
    end: f64
}

/// Closed integration interval `[start, end]` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainJsonProp")]
pub struct Domain {
    start: f64,
    end: f64
}

impl Domain {
    pub fn new(start: f64, end: f64) -> Result<Domain> {
        if !start.is_finite() || !end.is_finite() {
            return Err(IntegrationError::invalid_parameter(
                "domain",
                format!("bounds must be finite, got [{}, {}]", start, end)
            ));
        }
        if start >= end {
            return Err(IntegrationError::invalid_parameter(
                "domain",
                format!("start must be less than end, got [{}, {}]", start, end)
            ));
        }
        Ok(Domain { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl TryFrom<DomainJsonProp> for Domain {
    type Error = IntegrationError;

    fn try_from(prop: DomainJsonProp) -> Result<Domain> {
        Domain::new(prop.start, prop.end)
    }
}
