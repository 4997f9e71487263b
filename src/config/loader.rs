//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::GeneratorConfig;
use crate::domain::errors::ConfgenError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Environment variable naming the optional TOML configuration file
pub const CONFIG_PATH_ENV: &str = "RELAY_CONFGEN_CONFIG";

/// Loads the generator configuration
///
/// Reads the file named by `RELAY_CONFGEN_CONFIG` when it is set, otherwise
/// starts from defaults. Environment overrides and validation apply either
/// way.
///
/// # Errors
///
/// Returns an error if the named file cannot be loaded, or if the final
/// configuration is invalid.
pub fn load_from_env() -> Result<GeneratorConfig> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_config(path),
        _ => {
            let mut config = GeneratorConfig::default();
            apply_env_overrides(&mut config)?;
            validate(&config)?;
            Ok(config)
        }
    }
}

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into GeneratorConfig
/// 4. Applies environment variable overrides (RELAY_CONFGEN_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use relay_confgen::config::loader::load_config;
///
/// let config = load_config("relay-confgen.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfgenError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ConfgenError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: GeneratorConfig = toml::from_str(&contents)
        .map_err(|e| ConfgenError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    tracing::debug!(path = %path.display(), "Loaded generator configuration");
    Ok(config)
}

fn validate(config: &GeneratorConfig) -> Result<()> {
    config.validate().map_err(|e| {
        ConfgenError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error naming every referenced environment variable that is
/// not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ConfgenError::Configuration(format!("Invalid substitution pattern: {}", e)))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ConfgenError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the RELAY_CONFGEN_* prefix
fn apply_env_overrides(config: &mut GeneratorConfig) -> Result<()> {
    if let Ok(val) = std::env::var("RELAY_CONFGEN_LOG_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("RELAY_CONFGEN_LOG_JSON") {
        config.logging.json = val.parse().map_err(|_| {
            ConfgenError::Configuration(format!(
                "RELAY_CONFGEN_LOG_JSON must be true or false, got '{}'",
                val
            ))
        })?;
    }

    Ok(())
}
