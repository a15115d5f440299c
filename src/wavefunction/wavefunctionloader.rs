use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{
    FrozenManager,
    IManager,
    ManagerBuilder,
    NamedJsonObject
};
use crate::manager::managererror::ManagerError;
use crate::math::point2d::Point2D;
use crate::wavefunction::hydrogenic::Hydrogenic;
use crate::wavefunction::slatertype::SlaterType;
use crate::wavefunction::tabulatedwavefunction::TabulatedWavefunction;
use crate::wavefunction::wavefunction::{
    constant,
    SharedWavefunction,
    Wavefunction
};

pub type WavefunctionManager = FrozenManager<dyn Wavefunction>;

#[derive(Deserialize)]
enum WavefunctionType {
    Hydrogenic,
    SlaterType,
    Constant,
    Tabulated
}

#[derive(Deserialize)]
struct WavefunctionTypedObject {
    wavefunction_type: WavefunctionType
}

fn default_z() -> f64 { 1.0 }

#[derive(Deserialize)]
struct HydrogenicJsonProp {
    n: u32,
    l: u32,
    #[serde(default = "default_z")]
    z: f64
}

#[derive(Deserialize)]
struct SlaterTypeJsonProp {
    n: u32,
    zeta: f64
}

#[derive(Deserialize)]
struct ConstantJsonProp {
    value: f64
}

/// `points` is a list of `[radius, amplitude]` pairs.
#[derive(Deserialize)]
struct TabulatedJsonProp {
    points: Vec<(f64, f64)>
}

fn get_wavefunction_from_json(json_value: serde_json::Value) -> Result<SharedWavefunction, ManagerError> {
    let typed: WavefunctionTypedObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
    let wavefunction: SharedWavefunction = match typed.wavefunction_type {
        WavefunctionType::Hydrogenic => {
            let prop: HydrogenicJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            Arc::new(Hydrogenic::new(prop.n, prop.l, prop.z)?)
        },
        WavefunctionType::SlaterType => {
            let prop: SlaterTypeJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            Arc::new(SlaterType::new(prop.n, prop.zeta)?)
        },
        WavefunctionType::Constant => {
            let prop: ConstantJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            constant(prop.value)
        },
        WavefunctionType::Tabulated => {
            let prop: TabulatedJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
            let points = prop.points.into_iter().map(Point2D::from).collect();
            Arc::new(TabulatedWavefunction::new(points)?)
        }
    };
    Ok(wavefunction)
}

/// Loads named wavefunctions, dispatching on `wavefunction_type`.
///
/// ```json
/// [
///     { "name": "H1s", "wavefunction_type": "Hydrogenic", "n": 1, "l": 0, "z": 1.0 },
///     { "name": "C2p", "wavefunction_type": "SlaterType", "n": 2, "zeta": 1.625 },
///     { "name": "Flat", "wavefunction_type": "Constant", "value": 1.0 },
///     { "name": "Grid", "wavefunction_type": "Tabulated", "points": [[0.0, 1.0], [2.0, 0.0]] }
/// ]
/// ```
pub struct WavefunctionLoader;

impl IManager<dyn Wavefunction, ()> for WavefunctionLoader {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<dyn Wavefunction>,
        json_value: serde_json::Value,
        _supports: &()
    ) -> Result<(), ManagerError> {
        let named: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let wavefunction = get_wavefunction_from_json(json_value)?;
        log::debug!("loaded wavefunction '{}'", named.name());
        builder.insert(named.name().to_owned(), wavefunction);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_load_all_types() {
        let json = json!([
            { "name": "H1s", "wavefunction_type": "Hydrogenic", "n": 1, "l": 0 },
            { "name": "STO", "wavefunction_type": "SlaterType", "n": 1, "zeta": 1.0 },
            { "name": "Flat", "wavefunction_type": "Constant", "value": 0.5 },
            { "name": "Grid", "wavefunction_type": "Tabulated", "points": [[0.0, 1.0], [2.0, 0.0]] }
        ]);
        let manager = WavefunctionLoader.load(json, &()).unwrap();
        assert_eq!(manager.names(), vec!["Flat", "Grid", "H1s", "STO"]);

        assert_relative_eq!(manager.get("H1s").unwrap().amplitude(1.0), 2.0 * (-1.0f64).exp());
        assert_relative_eq!(manager.get("STO").unwrap().amplitude(1.0), 2.0 * (-1.0f64).exp());
        assert_eq!(manager.get("Flat").unwrap().amplitude(7.0), 0.5);
        assert_eq!(manager.get("Grid").unwrap().amplitude(1.0), 0.5);
    }

    #[test]
    fn test_invalid_parameters_are_reported() {
        let json = json!({ "name": "Bad", "wavefunction_type": "Hydrogenic", "n": 1, "l": 1 });
        let result = WavefunctionLoader.load(json, &());
        assert!(matches!(result, Err(ManagerError::Integration(_))));
    }

    #[test]
    fn test_unknown_type() {
        let json = json!({ "name": "Bad", "wavefunction_type": "Gaussian" });
        let result = WavefunctionLoader.load(json, &());
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
