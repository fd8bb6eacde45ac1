// Configuration sections, deserialized from the layered `config` sources

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// `[server]`: where to listen and how many runtime threads to start
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; the runtime default (one per core) when unset
    pub workers: Option<usize>,
}

/// `[logging]`
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// error, warn, info or debug
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
    /// combined, common, json, or a `$variable` pattern
    pub access_log_format: String,
    /// stdout when unset
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// stderr when unset
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// `[performance]`, timeouts in seconds
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// 0 disables keep-alive
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// `[http]`
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Sent as the `Server` header
    pub server_name: String,
    pub enable_cors: bool,
    /// Upper bound on `/solve` request bodies, in bytes
    pub max_body_size: u64,
}
