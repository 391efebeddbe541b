extern crate config as _;

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Bind address; "0.0.0.0" listens on all interfaces.
    pub host: String,
    /// Must match the port configured on the sending device.
    pub port: u16,
    /// Pending-connection queue depth for the listening socket.
    pub backlog: u32,
    /// Upper bound on the declared frame length. The firmware never sends
    /// frames anywhere near this large; the bound exists so a corrupted
    /// header cannot trigger an unbounded allocation.
    pub max_frame_size: usize,
    pub read_buffer_size: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            host: "0.0.0.0".to_string(),
            port: 5050,
            backlog: 5,
            max_frame_size: 16 * 1024 * 1024,
            read_buffer_size: 16 * 1024,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            window_title: "camview".to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub viewer: ViewerConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file. A missing file is not an
    /// error; every field has a default so a partial file works too.
    pub fn set_up_config<P: AsRef<Path>>(path: P) -> AppResult<AppConfig> {
        let path_str = path
            .as_ref()
            .to_str()
            .ok_or(AppError::InvalidValue(format!(
                "config file path: {}",
                path.as_ref().to_string_lossy()
            )))?;
        let config = config::Config::builder()
            .add_source(config::File::with_name(path_str).required(false))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::AppConfig;

    #[test]
    fn test_defaults_when_file_absent() {
        let config = AppConfig::set_up_config("/nonexistent/conf.toml").unwrap();
        assert_eq!(config.network.host, "0.0.0.0");
        assert_eq!(config.network.port, 5050);
        assert_eq!(config.network.backlog, 5);
        assert_eq!(config.network.max_frame_size, 16 * 1024 * 1024);
        assert_eq!(config.viewer.window_title, "camview");
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[network]").unwrap();
        writeln!(file, "port = 6060").unwrap();
        writeln!(file, "backlog = 16").unwrap();
        drop(file);

        let config = AppConfig::set_up_config(&path).unwrap();
        assert_eq!(config.network.port, 6060);
        assert_eq!(config.network.backlog, 16);
        // untouched fields keep their defaults
        assert_eq!(config.network.host, "0.0.0.0");
        assert_eq!(config.viewer.window_title, "camview");
    }
}
