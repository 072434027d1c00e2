//! src/configuration.rs
use crate::validate::{IdnProfile, Policy};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub validator: ValidatorSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub log_level: String,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidatorSettings {
    pub policy: Policy,
    pub idn_profile: IdnProfile,
}

impl ValidatorSettings {
    /// Replaces whichever settings were given explicitly, e.g. on the command line.
    pub fn override_with(&mut self, policy: Option<Policy>, idn_profile: Option<IdnProfile>) {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        if let Some(idn_profile) = idn_profile {
            self.idn_profile = idn_profile;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

/// Reads `configuration/` relative to the working directory.
///
/// Missing files are fine: every setting has a built-in default.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    get_configuration_from(Path::new("configuration"), environment)
}

pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("application.log_level", "info")?
        .set_default("validator.policy", Policy::default().as_str())?
        .set_default("validator.idn_profile", IdnProfile::default().as_str())?
        .add_source(File::from(configuration_directory.join("base")).required(false))
        .add_source(
            File::from(configuration_directory.join(environment.as_str())).required(false),
        )
        // E.g. `APP_VALIDATOR__POLICY=simple` sets `Settings.validator.policy`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
