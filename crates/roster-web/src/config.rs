use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";
pub const HTTP_ENV: &str = "ROSTER_HTTP";
pub const PORT_ENV: &str = "PORT";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Holds the `companies/` and `employees/` source directories.
    pub data_dir: PathBuf,
    pub http_addr: String,
}

impl ServerConfig {
    pub fn from_env(cli_data_dir: Option<String>) -> Result<Self, String> {
        Self::resolve(cli_data_dir, |key| std::env::var(key).ok())
    }

    /// `--data-dir` beats `ROSTER_DATA_DIR`; `ROSTER_HTTP` beats `PORT`.
    pub fn resolve(
        cli_data_dir: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let data_dir = cli_data_dir
            .or_else(|| env(DATA_DIR_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let http_addr = match env(HTTP_ENV) {
            Some(addr) => addr,
            None => {
                let port = match env(PORT_ENV) {
                    Some(port) => port
                        .trim()
                        .parse::<u16>()
                        .map_err(|e| format!("invalid {PORT_ENV} {port:?}: {e}"))?,
                    None => DEFAULT_PORT,
                };
                format!("0.0.0.0:{port}")
            }
        };

        Ok(Self {
            data_dir,
            http_addr,
        })
    }
}
