//! Configuration loading via `ortho-config`.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::instance_type::InstanceType;
use crate::region::AwsRegion;
use crate::transport::TransportSettings;
use crate::user_data::{UserDataError, resolve_user_data};

/// EC2 configuration derived from environment variables, configuration
/// files, and CLI flags.
#[derive(Clone, Debug, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(prefix = "EC2KIT")]
pub struct Ec2Config {
    /// Access key id handed to the transport. Required to build transport
    /// settings; previews work without it.
    pub access_key_id: Option<String>,
    /// Secret access key handed to the transport.
    pub secret_access_key: Option<String>,
    /// Region code. Defaults to `us-east-1`.
    #[ortho_config(default = "us-east-1".to_owned())]
    pub region: String,
    /// Optional endpoint override, for example a local emulator.
    pub endpoint: Option<String>,
    /// Instance type used when a launch does not name one.
    #[ortho_config(default = "t3.micro".to_owned())]
    pub default_instance_type: String,
    /// Image used when a launch does not name one.
    pub default_image_id: Option<String>,
    /// Key pair used when a launch does not name one.
    pub default_key_name: Option<String>,
    /// File holding user data applied to launches that do not supply any.
    pub default_user_data_file: Option<String>,
}

/// Metadata for a configuration field, used to generate actionable error messages.
struct FieldMetadata {
    description: &'static str,
    env_var: &'static str,
    toml_key: &'static str,
}

impl FieldMetadata {
    const fn new(description: &'static str, env_var: &'static str, toml_key: &'static str) -> Self {
        Self {
            description,
            env_var,
            toml_key,
        }
    }

    fn missing(&self) -> ConfigError {
        ConfigError::MissingField(format!(
            "missing {}: set {} or add {} to ec2kit.toml",
            self.description, self.env_var, self.toml_key
        ))
    }
}

const ACCESS_KEY_ID: FieldMetadata =
    FieldMetadata::new("access key id", "EC2KIT_ACCESS_KEY_ID", "access_key_id");
const SECRET_ACCESS_KEY: FieldMetadata = FieldMetadata::new(
    "secret access key",
    "EC2KIT_SECRET_ACCESS_KEY",
    "secret_access_key",
);
const REGION: FieldMetadata = FieldMetadata::new("region", "EC2KIT_REGION", "region");
const DEFAULT_INSTANCE_TYPE: FieldMetadata = FieldMetadata::new(
    "instance type",
    "EC2KIT_DEFAULT_INSTANCE_TYPE",
    "default_instance_type",
);

impl Ec2Config {
    fn require_field(value: Option<&str>, metadata: &FieldMetadata) -> Result<String, ConfigError> {
        match value.map(str::trim) {
            Some(present) if !present.is_empty() => Ok(present.to_owned()),
            _ => Err(metadata.missing()),
        }
    }

    /// Loads configuration without attempting to parse CLI arguments. Values
    /// still merge defaults, configuration files, and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the merge fails.
    pub fn load_without_cli_args() -> Result<Self, ConfigError> {
        Self::load_from_iter([std::ffi::OsString::from("ec2kit")])
            .map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Parses the configured region.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when the region is blank and
    /// [`ConfigError::InvalidValue`] when it is not a known region code.
    pub fn region(&self) -> Result<AwsRegion, ConfigError> {
        let code = Self::require_field(Some(self.region.as_str()), &REGION)?;
        code.parse()
            .map_err(|err| ConfigError::InvalidValue(format!("{err} (set {})", REGION.env_var)))
    }

    /// Parses the default instance type against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when blank and
    /// [`ConfigError::InvalidValue`] when the type is unknown.
    pub fn instance_type(&self) -> Result<InstanceType, ConfigError> {
        let raw = Self::require_field(
            Some(self.default_instance_type.as_str()),
            &DEFAULT_INSTANCE_TYPE,
        )?;
        InstanceType::from_string(&raw).map_err(|err| {
            ConfigError::InvalidValue(format!("{err} (set {})", DEFAULT_INSTANCE_TYPE.env_var))
        })
    }

    /// Reads the default user data file, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UserData`] when the file is empty or unreadable.
    pub fn default_user_data(&self) -> Result<Option<String>, ConfigError> {
        resolve_user_data(None, self.default_user_data_file.as_deref()).map_err(ConfigError::from)
    }

    /// Performs semantic validation of every field a transport needs. Error
    /// messages name the environment variable and configuration key to set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first missing or invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.transport_settings().map(|_| ())
    }

    /// Builds the settings a provider client is constructed from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when credentials are missing or the region or
    /// default instance type is invalid.
    pub fn transport_settings(&self) -> Result<TransportSettings, ConfigError> {
        let access_key_id = Self::require_field(self.access_key_id.as_deref(), &ACCESS_KEY_ID)?;
        let secret_access_key =
            Self::require_field(self.secret_access_key.as_deref(), &SECRET_ACCESS_KEY)?;
        let region = self.region()?;
        self.instance_type()?;
        Ok(TransportSettings {
            access_key_id,
            secret_access_key,
            region,
            endpoint: self
                .endpoint
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned),
        })
    }
}

/// Errors raised during configuration loading and validation.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Indicates a required configuration field is empty or missing.
    #[error("missing configuration field: {0}")]
    MissingField(String),
    /// Indicates a field is present but holds an unusable value.
    #[error("invalid configuration value: {0}")]
    InvalidValue(String),
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Parse(String),
    /// Raised when the default user data cannot be resolved.
    #[error(transparent)]
    UserData(#[from] UserDataError),
}
