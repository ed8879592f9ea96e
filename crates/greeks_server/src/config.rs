//! Server configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use greeks_core::types::Date;
use greeks_models::instruments::OptionKind;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid environment: {0}. Must be one of: development, staging, production")]
    InvalidEnvironment(String),

    #[error("Invalid curve parameter: {0}")]
    InvalidCurve(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Contract and market parameters for the served gamma profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Option kind (call or put)
    pub option_kind: OptionKind,
    /// Strike of the contract
    pub strike: f64,
    /// Exercise date of the contract
    pub expiry: Date,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Continuously compounded dividend yield
    pub dividend_yield: f64,
    /// Constant Black volatility
    pub volatility: f64,
    /// First spot on the grid
    pub spot_start: f64,
    /// Last spot on the grid (inclusive)
    pub spot_stop: f64,
    /// Grid spacing
    pub spot_step: f64,
    /// Curve anchor date; `None` anchors at today
    pub valuation_date: Option<Date>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            option_kind: OptionKind::Call,
            strike: 100.0,
            expiry: Date::from_ymd(2021, 12, 15).expect("valid literal date"),
            risk_free_rate: 0.05,
            dividend_yield: 0.01,
            volatility: 0.10,
            spot_start: 80.0,
            spot_stop: 120.0,
            spot_step: 1.0,
            valuation_date: None,
        }
    }
}

impl CurveConfig {
    /// Largest spot grid the server will compute for one page.
    pub const MAX_GRID_POINTS: usize = 100_000;

    /// Build the spot grid from start to stop (inclusive) by step.
    pub fn spot_grid(&self) -> Vec<f64> {
        let mut spots = Vec::new();
        let mut i = 0u32;
        loop {
            let spot = self.spot_start + f64::from(i) * self.spot_step;
            if spot > self.spot_stop + 1e-9 {
                break;
            }
            spots.push(spot);
            i += 1;
        }
        spots
    }

    /// Validate the curve parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(ConfigError::InvalidCurve(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(ConfigError::InvalidCurve(format!(
                "volatility must be positive, got {}",
                self.volatility
            )));
        }
        if !(self.spot_step.is_finite() && self.spot_step > 0.0) {
            return Err(ConfigError::InvalidCurve(format!(
                "spot_step must be positive, got {}",
                self.spot_step
            )));
        }
        if self.spot_start > self.spot_stop {
            return Err(ConfigError::InvalidCurve(format!(
                "spot_start {} exceeds spot_stop {}",
                self.spot_start, self.spot_stop
            )));
        }
        // A tiny step over a wide range would ask for an unbounded grid
        let points = ((self.spot_stop - self.spot_start) / self.spot_step).floor() + 1.0;
        if points > Self::MAX_GRID_POINTS as f64 {
            return Err(ConfigError::InvalidCurve(format!(
                "spot grid has {:.0} points, exceeding the maximum of {}",
                points,
                Self::MAX_GRID_POINTS
            )));
        }
        Ok(())
    }
}

/// Server configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Environment (development, staging, production)
    #[serde(deserialize_with = "deserialize_environment")]
    pub environment: Environment,
    /// Contract and market parameters for the served chart
    pub curve: CurveConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_environment<'de, D>(deserializer: D) -> Result<Environment, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Environment::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: LogLevel::Info,
            environment: Environment::Development,
            curve: CurveConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Host
        if let Ok(host) = std::env::var("GREEKS_SERVER_HOST") {
            config.host = host;
        }

        // Port
        if let Ok(port_str) = std::env::var("GREEKS_SERVER_PORT") {
            config.port = port_str.parse().map_err(|_| ConfigError::InvalidPort(0))?;
        }

        // Log level
        if let Ok(log_level) = std::env::var("GREEKS_LOG_LEVEL") {
            config.log_level = LogLevel::from_str(&log_level)?;
        }

        // Environment
        if let Ok(env) = std::env::var("GREEKS_ENV") {
            config.environment = Environment::from_str(&env)?;
        }

        // Valuation date pin, mostly for reproducible charts in staging
        if let Ok(date_str) = std::env::var("GREEKS_VALUATION_DATE") {
            let date = Date::from_str(&date_str)
                .map_err(|e| ConfigError::EnvError(format!("GREEKS_VALUATION_DATE: {}", e)))?;
            config.curve.valuation_date = Some(date);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        self.curve.validate()?;
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            if let Ok(level) = LogLevel::from_str(log_level) {
                self.log_level = level;
            }
        }
        if let Some(date) = cli.valuation_date {
            self.curve.valuation_date = Some(date);
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Host address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
    /// Valuation date pin
    pub valuation_date: Option<Date>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        ServerConfig::from_file(config_path)?
    } else {
        ServerConfig::default()
    };

    // Override with environment variables; a set-but-malformed variable
    // is an error, not a silent fall-through to defaults
    let env_config = ServerConfig::from_env()?;
    if std::env::var("GREEKS_SERVER_HOST").is_ok() {
        config.host = env_config.host;
    }
    if std::env::var("GREEKS_SERVER_PORT").is_ok() {
        config.port = env_config.port;
    }
    if std::env::var("GREEKS_LOG_LEVEL").is_ok() {
        config.log_level = env_config.log_level;
    }
    if std::env::var("GREEKS_ENV").is_ok() {
        config.environment = env_config.environment;
    }
    if std::env::var("GREEKS_VALUATION_DATE").is_ok() {
        config.curve.valuation_date = env_config.curve.valuation_date;
    }

    // Override with CLI arguments
    config.merge_with_cli(cli);

    // Final validation
    config.validate()?;

    Ok(config)
}
