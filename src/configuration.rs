use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::Deserialize;

use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;
use crate::math::integration::convergenceloop::ConvergenceSettings;
use crate::math::integration::domain::Domain;
use crate::math::integration::integrationerror::IntegrationError;
use crate::rdf::rdfnormalizer::RdfNormalizer;
use crate::wavefunction::wavefunctionloader::{
    WavefunctionLoader,
    WavefunctionManager
};

fn default_height_intervals() -> usize { 200 }

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    domain: Domain,
    integration: ConvergenceSettings,
    #[serde(default = "default_height_intervals")]
    height_intervals: usize,
    #[serde(default)]
    wavefunctions: Vec<serde_json::Value>
}

/// Domain, integration settings and named wavefunctions of one run.
pub struct Configuration {
    domain: Domain,
    integration: ConvergenceSettings,
    height_intervals: usize,
    wavefunction_manager: WavefunctionManager
}

impl Configuration {
    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        json_prop.integration.validate()?;
        if json_prop.height_intervals == 0 {
            return Err(IntegrationError::invalid_parameter("height_intervals", "must be at least 1").into());
        }

        let wavefunction_manager = WavefunctionLoader.load(
            serde_json::Value::Array(json_prop.wavefunctions),
            &()
        )?;
        log::info!(
            "configuration loaded: domain [{}, {}], {} rule, {} wavefunction(s)",
            json_prop.domain.start(),
            json_prop.domain.end(),
            json_prop.integration.rule,
            wavefunction_manager.len()
        );

        Ok(Configuration {
            domain: json_prop.domain,
            integration: json_prop.integration,
            height_intervals: json_prop.height_intervals,
            wavefunction_manager
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ManagerError> {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json_value(json_value)
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn integration(&self) -> &ConvergenceSettings {
        &self.integration
    }

    pub fn height_intervals(&self) -> usize {
        self.height_intervals
    }

    pub fn wavefunction_manager(&self) -> &WavefunctionManager {
        &self.wavefunction_manager
    }

    /// Normalizer for the named wavefunction over the configured domain.
    pub fn normalizer(&self, wavefunction_name: &str) -> Result<RdfNormalizer, ManagerError> {
        let wavefunction = self.wavefunction_manager.get(wavefunction_name)?;
        Ok(RdfNormalizer::new(wavefunction, self.domain))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::math::integration::integrationrule::IntegrationRule;

    fn sample_json() -> serde_json::Value {
        json!({
            "domain": { "start": 0.0, "end": 30.0 },
            "integration": {
                "rule": "trap",
                "convergence_threshold": 1e-6,
                "initial_intervals": 50,
                "interval_increment": 50
            },
            "wavefunctions": [
                { "name": "H1s", "wavefunction_type": "Hydrogenic", "n": 1, "l": 0, "z": 1.0 }
            ]
        })
    }

    #[test]
    fn test_from_json_value() {
        let config = Configuration::from_json_value(sample_json()).unwrap();
        assert_eq!(config.domain().end(), 30.0);
        assert_eq!(config.integration().rule, IntegrationRule::Trapezoidal);
        assert_eq!(config.integration().max_iterations, 10_000);
        assert_eq!(config.integration().max_intervals, 1_000_000);
        assert_eq!(config.height_intervals(), 200);
        assert!(config.wavefunction_manager().contains("H1s"));
        assert!(config.normalizer("H1s").is_ok());
        assert!(matches!(config.normalizer("H2s"), Err(ManagerError::NameNotFoundError(_))));
    }

    #[test]
    fn test_from_reader() {
        let text = sample_json().to_string();
        let config = Configuration::from_reader(text.as_bytes()).unwrap();
        assert_eq!(config.wavefunction_manager().len(), 1);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut json_value = sample_json();
        json_value["integration"]["interval_increment"] = json!(0);
        assert!(matches!(
            Configuration::from_json_value(json_value),
            Err(ManagerError::Integration(IntegrationError::InvalidParameter { .. }))
        ));

        let mut json_value = sample_json();
        json_value["integration"]["rule"] = json!("simpson");
        assert!(matches!(Configuration::from_json_value(json_value), Err(ManagerError::JsonParseError(_))));

        let mut json_value = sample_json();
        json_value["domain"] = json!({ "start": 5.0, "end": 1.0 });
        assert!(Configuration::from_json_value(json_value).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = Configuration::from_file("/nonexistent/radialdist.json");
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
