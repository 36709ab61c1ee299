use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::{HeaderName, Method};

use super::sources::{EnvConfig, FileConfig};
use super::{
    Config, ConfigMetadata, CorsConfig, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_UPLOADS_ROOT, ServerConfig, UploadsConfig, default_cors_headers,
    default_cors_methods,
};

/// A single configuration problem worth surfacing at startup.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, message: impl Into<String>, hint: Option<&str>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: hint.map(String::from),
        });
    }
}

/// Result of a configuration load.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

/// Merges defaults, the optional TOML file, and the environment.
/// Precedence: environment over file over defaults.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load(self) -> Result<ConfigLoad> {
        let env_file_loaded = dotenvy::dotenv().is_ok();
        let mut warnings = ConfigWarnings::default();

        let (file, config_file) = self.load_file(&mut warnings)?;
        let env = EnvConfig::gather();

        let server = ServerConfig {
            host: env
                .server_host
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env.server_port.or(file.server.port).unwrap_or(DEFAULT_PORT),
        };

        let uploads = UploadsConfig {
            root: env
                .uploads_root
                .or(file.uploads.root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_ROOT)),
        };

        let cors = CorsConfig {
            allowed_origins: normalize_origins(
                env.allowed_origins
                    .or(file.cors.allowed_origins)
                    .unwrap_or_default(),
            ),
            allowed_methods: validate_methods(
                env.allowed_methods
                    .or(file.cors.allowed_methods)
                    .unwrap_or_else(default_cors_methods),
                &mut warnings,
            ),
            allowed_headers: validate_headers(
                env.allowed_headers
                    .or(file.cors.allowed_headers)
                    .unwrap_or_else(default_cors_headers),
                &mut warnings,
            ),
        };

        let config = Config {
            server,
            uploads,
            cors,
            metadata: ConfigMetadata {
                env_file_loaded,
                config_file,
            },
        };

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file(
        &self,
        warnings: &mut ConfigWarnings,
    ) -> Result<(FileConfig, Option<PathBuf>)> {
        // An explicitly requested file must parse; the default path is
        // optional and silently absent.
        let explicit = self
            .config_path
            .clone()
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from));
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from("folio.toml"));

        match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let parsed = toml::from_str(&raw).with_context(|| {
                    format!("failed to parse config file {}", path.display())
                })?;
                Ok((parsed, Some(path)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if explicit.is_some() {
                    warnings.push(
                        format!("config file {} not found", path.display()),
                        Some("check FOLIO_CONFIG or --config"),
                    );
                }
                Ok((FileConfig::default(), None))
            }
            Err(e) => {
                warnings.push(
                    format!("could not read config file {}: {}", path.display(), e),
                    None,
                );
                Ok((FileConfig::default(), None))
            }
        }
    }
}

/// A lone `*` entry means "any origin", represented as an empty list.
fn normalize_origins(origins: Vec<String>) -> Vec<String> {
    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn validate_methods(
    methods: Vec<String>,
    warnings: &mut ConfigWarnings,
) -> Vec<String> {
    let valid: Vec<String> = methods
        .into_iter()
        .filter(|m| {
            let ok = Method::from_bytes(m.as_bytes()).is_ok();
            if !ok {
                warnings.push(
                    format!("ignoring invalid CORS method {m:?}"),
                    None,
                );
            }
            ok
        })
        .collect();
    if valid.is_empty() {
        default_cors_methods()
    } else {
        valid
    }
}

fn validate_headers(
    headers: Vec<String>,
    warnings: &mut ConfigWarnings,
) -> Vec<String> {
    let valid: Vec<String> = headers
        .into_iter()
        .filter(|h| {
            let ok = h == "*" || HeaderName::from_bytes(h.as_bytes()).is_ok();
            if !ok {
                warnings.push(
                    format!("ignoring invalid CORS header {h:?}"),
                    None,
                );
            }
            ok
        })
        .collect();
    if valid.is_empty() {
        default_cors_headers()
    } else {
        valid
    }
}
