use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma separated list of allowed CORS origins
    pub cors_origins: String,
    /// Directory with the built frontend bundle
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    pub max_upload_size: usize,
    pub upload_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8000
cors_origins = "http://localhost:3000,http://localhost:5173"
static_dir = "dist"

[upload]
max_upload_size = 10485760
upload_dir = "./uploads"
"#;

impl Config {
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.server
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    /// Apply `PDFQA_*` overrides from the given lookup.
    ///
    /// Unparseable numeric values are rejected.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PDFQA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PDFQA_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PDFQA_PORT '{}': {}", port, e))?;
        }
        if let Some(origins) = lookup("PDFQA_CORS_ORIGINS") {
            self.server.cors_origins = origins;
        }
        if let Some(size) = lookup("PDFQA_MAX_UPLOAD_SIZE") {
            self.upload.max_upload_size = size
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PDFQA_MAX_UPLOAD_SIZE '{}': {}", size, e))?;
        }
        if let Some(dir) = lookup("PDFQA_UPLOAD_DIR") {
            self.upload.upload_dir = dir;
        }
        Ok(())
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PDFQA_*` environment variables override whatever was loaded.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the upload directory
/// Relative paths are resolved against the current working directory
pub fn get_upload_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.upload.upload_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}
