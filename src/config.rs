/*
 * Config Module
 *
 * Loads ShowParams from a TOML file. Keys that are missing from the file keep
 * their default value. The file is located through the first command line
 * argument or, failing that, the FIREWORKS_CONFIG environment variable.
 */

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::error::{ConfigError, Result};
use crate::params::ShowParams;

pub const CONFIG_ENV_VAR: &str = "FIREWORKS_CONFIG";

// Parse and validate parameters from TOML text
pub fn parse_params(text: &str) -> Result<ShowParams> {
    let params: ShowParams = toml::from_str(text)?;
    params.validate()?;
    Ok(params)
}

pub fn load_params(path: &Path) -> Result<ShowParams> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_params(&text)
}

// Where to look for a config file, if anywhere
pub fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// Load the startup parameters, falling back to defaults on any error.
pub fn startup_params() -> ShowParams {
    let Some(path) = config_path() else {
        info!("no config file given, using default show parameters");
        return ShowParams::default();
    };

    match load_params(&path) {
        Ok(params) => {
            info!("loaded show parameters from {}", path.display());
            params
        }
        Err(err) => {
            error!("{}; using default show parameters", err);
            ShowParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let params = parse_params("firework_count = 5\nseed = 42\n").unwrap();

        assert_eq!(params.firework_count, 5);
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.particles_per_firework, 500);
        assert_eq!(params.time_scale, 3.0);
    }

    #[test]
    fn full_file_round_trips_values() {
        let text = r#"
            firework_count = 2
            particles_per_firework = 64
            particle_mass = 1.5
            launch_speed = 90.0
            gravity = [0.0, -4.0, 0.0]
            min_life = 6.0
            life_spread = 0.0
            time_scale = 1.0
            enable_parallel = false
        "#;
        let params = parse_params(text).unwrap();

        assert_eq!(params.particles_per_firework, 64);
        assert_eq!(params.gravity, [0.0, -4.0, 0.0]);
        assert_eq!(params.life_spread, 0.0);
        assert!(!params.enable_parallel);
    }

    #[test]
    fn bundled_config_parses() {
        let params = parse_params(include_str!("../config/show.toml")).unwrap();

        assert_eq!(params.firework_count, 3);
        assert_eq!(params.seed, None);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_params("firework_count = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = parse_params("particle_mass = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "particle_mass", .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_params(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
