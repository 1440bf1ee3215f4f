//! Application configuration
//!
//! Configuration is loaded from a TOML file and then overridden by
//! `SHORTGIC_*` environment variables. Link parameters are handed to the
//! service layer as an immutable value at construction time.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub links: LinkConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub database_url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://shortgic.db".to_string(),
        }
    }
}

/// Parameters shared by the identifier generator, the uniqueness resolver
/// and the format validator.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Length of generated short link identifiers.
    pub link_length: usize,
    /// Maximum allowed length for target URLs.
    pub max_url_length: usize,
    /// Attempt bound for the identifier allocation loop.
    pub max_generate_attempts: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            link_length: 5,
            max_url_length: 2048,
            max_generate_attempts: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "text" or "json"
    pub format: String,
    /// Log file path; empty or absent means stdout.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    fn load_from_file() -> Self {
        let config_paths = [
            "config.toml",
            "shortgic.toml",
            "config/config.toml",
            "/etc/shortgic/config.toml",
        ];

        // Runs before logging is initialized, so problems go to stderr.
        for path in &config_paths {
            if Path::new(path).exists() {
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        eprintln!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        Self::default()
    }

    fn override_with_env(&mut self) {
        if let Ok(host) = env::var("SHORTGIC_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("SHORTGIC_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            } else {
                eprintln!("Invalid SHORTGIC_SERVER_PORT: {}", port);
            }
        }

        if let Ok(database_url) = env::var("SHORTGIC_DATABASE_URL") {
            self.database.database_url = database_url;
        }

        if let Ok(length) = env::var("SHORTGIC_LINK_LENGTH") {
            if let Ok(length) = length.parse() {
                self.links.link_length = length;
            } else {
                eprintln!("Invalid SHORTGIC_LINK_LENGTH: {}", length);
            }
        }
        if let Ok(max_len) = env::var("SHORTGIC_MAX_URL_LENGTH") {
            if let Ok(max_len) = max_len.parse() {
                self.links.max_url_length = max_len;
            } else {
                eprintln!("Invalid SHORTGIC_MAX_URL_LENGTH: {}", max_len);
            }
        }
        if let Ok(attempts) = env::var("SHORTGIC_MAX_GENERATE_ATTEMPTS") {
            if let Ok(attempts) = attempts.parse() {
                self.links.max_generate_attempts = attempts;
            } else {
                eprintln!("Invalid SHORTGIC_MAX_GENERATE_ATTEMPTS: {}", attempts);
            }
        }

        if let Ok(level) = env::var("SHORTGIC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("SHORTGIC_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(file) = env::var("SHORTGIC_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}
