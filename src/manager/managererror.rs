use serde::Deserialize;
use thiserror::Error;

use crate::math::integration::integrationerror::IntegrationError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error(transparent)]
    Integration(#[from] IntegrationError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
    where
        T: for<'a> Deserialize<'a>
    {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ManagerError::map_elem_not_found("H1s").to_string(), "key 'H1s' not found");

        let err: ManagerError = IntegrationError::invalid_parameter("n", "must be at least 1").into();
        assert_eq!(err.to_string(), "invalid parameter 'n': must be at least 1");
    }

    #[test]
    fn test_parse_error() {
        let result: Result<u32, ManagerError> =
            ManagerError::from_json_or_json_parse_error(serde_json::json!("not a number"));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
