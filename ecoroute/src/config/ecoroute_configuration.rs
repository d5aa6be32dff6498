use crate::{app::EcoRouteCliError, model::emissions::CalculatorConfig};
use ecoroute_map::model::FitBoundsOptions;
use serde::{Deserialize, Serialize};

/// run configuration for the ecoroute application.
///
/// # Example
///
/// ```toml
/// [calculator]
/// max_emissions = 2500.0
/// region = "usa"
///
/// [calculator.emissions]
/// walking = 0.0
/// bus = 68.0
/// car_medium = 170.0
///
/// [map]
/// padding = [50, 50]
/// max_zoom = 15
/// viewport_size = [1024, 768]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcoRouteConfiguration {
    pub calculator: CalculatorConfig,
    pub map: FitBoundsOptions,
}

impl EcoRouteConfiguration {
    /// environment variables with this prefix override file values, using
    /// "__" to separate nested keys, such as ECOROUTE_CALCULATOR__MAX_EMISSIONS.
    pub const ENV_PREFIX: &str = "ECOROUTE";
    pub const ENV_SEPARATOR: &str = "__";

    /// loads configuration from an optional TOML or JSON file layered under
    /// environment overrides. without a file, defaults are used for every
    /// value not set in the environment.
    pub fn load(config_file: Option<&str>) -> Result<EcoRouteConfiguration, EcoRouteCliError> {
        Self::load_with_environment(config_file, Self::environment())
    }

    /// environment source reading ECOROUTE_ variables
    fn environment() -> config::Environment {
        config::Environment::with_prefix(Self::ENV_PREFIX)
            .prefix_separator("_")
            .separator(Self::ENV_SEPARATOR)
    }

    fn load_with_environment(
        config_file: Option<&str>,
        environment: config::Environment,
    ) -> Result<EcoRouteConfiguration, EcoRouteCliError> {
        let mut builder = config::Config::builder();
        if let Some(f) = config_file {
            log::info!("reading ecoroute configuration from {f}");
            let format = file_format(f)?;
            builder = builder.add_source(config::File::new(f, format));
        }
        let source_name = config_file.unwrap_or("<defaults>");
        let config = builder
            .add_source(environment)
            .build()
            .map_err(|e| EcoRouteCliError::ConfigReadError {
                msg: format!("failed reading '{source_name}'"),
                source: e,
            })?;
        let result = config
            .try_deserialize::<EcoRouteConfiguration>()
            .map_err(|e| EcoRouteCliError::ConfigReadError {
                msg: format!("failed decoding '{source_name}'"),
                source: e,
            })?;
        log::debug!("loaded configuration: {result:?}");
        Ok(result)
    }
}

fn file_format(f: &str) -> Result<config::FileFormat, EcoRouteCliError> {
    if f.ends_with(".toml") {
        Ok(config::FileFormat::Toml)
    } else if f.ends_with(".json") {
        Ok(config::FileFormat::Json)
    } else {
        Err(EcoRouteCliError::ConfigurationError(format!(
            "unsupported file type: {f}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::EcoRouteConfiguration;
    use crate::{app::EcoRouteCliError, model::emissions::Region};
    use std::path::PathBuf;

    fn write_temp(filename: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{filename}", std::process::id()));
        std::fs::write(&path, contents).expect("should write temp config");
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let conf = EcoRouteConfiguration::load(None).expect("defaults should load");
        assert_eq!(conf.calculator.emissions.factor("bus"), 68.0);
        assert_eq!(conf.map.max_zoom, 15);
    }

    #[test]
    fn test_toml_file() {
        let path = write_temp(
            "ecoroute.toml",
            r#"
            [calculator]
            max_emissions = 2500.0
            region = "Europe"

            [calculator.emissions]
            ferry = 120.0
            bus = 70.0

            [map]
            max_zoom = 12
            "#,
        );
        let f = path.to_string_lossy().to_string();
        let conf = EcoRouteConfiguration::load(Some(&f)).expect("toml should load");
        assert_eq!(conf.calculator.max_emissions, 2500.0);
        assert_eq!(conf.calculator.region, Region::Europe);
        assert_eq!(conf.calculator.emissions.factor("ferry"), 120.0);
        assert_eq!(conf.calculator.emissions.factor("walking"), 0.0);
        assert_eq!(conf.map.max_zoom, 12);
        assert_eq!(conf.map.padding, (50, 50));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_json_file_rejects_negative_factor() {
        let path = write_temp(
            "ecoroute-invalid.json",
            r#"{ "calculator": { "emissions": { "bus": -68.0 } } }"#,
        );
        let f = path.to_string_lossy().to_string();
        let result = EcoRouteConfiguration::load(Some(&f));
        assert!(matches!(result, Err(EcoRouteCliError::ConfigReadError { .. })));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_serialized_defaults_load_unchanged() {
        let defaults = EcoRouteConfiguration::default();
        let contents = toml::to_string(&defaults).expect("defaults should serialize");
        let path = write_temp("ecoroute-defaults.toml", &contents);
        let f = path.to_string_lossy().to_string();
        let conf = EcoRouteConfiguration::load(Some(&f)).expect("serialized defaults should load");
        assert_eq!(conf, defaults);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = write_temp(
            "ecoroute-env.toml",
            r#"
            [calculator]
            max_emissions = 2500.0
            region = "europe"

            [map]
            max_zoom = 10
            "#,
        );
        let f = path.to_string_lossy().to_string();
        let vars = [
            ("ECOROUTE_CALCULATOR__MAX_EMISSIONS", "1000"),
            ("ECOROUTE_CALCULATOR__REGION", "usa"),
            ("ECOROUTE_MAP__MAX_ZOOM", "12"),
            ("OTHER_MAP__MAX_ZOOM", "3"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<config::Map<String, String>>();
        let environment = EcoRouteConfiguration::environment().source(Some(vars));
        let conf = EcoRouteConfiguration::load_with_environment(Some(&f), environment)
            .expect("file with overrides should load");
        assert_eq!(conf.calculator.max_emissions, 1000.0);
        assert_eq!(conf.calculator.region, Region::Usa);
        assert_eq!(conf.map.max_zoom, 12);
        assert_eq!(conf.calculator.emissions.factor("bus"), 68.0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = EcoRouteConfiguration::load(Some("ecoroute.yaml"));
        assert!(matches!(result, Err(EcoRouteCliError::ConfigurationError(_))));
    }
}
