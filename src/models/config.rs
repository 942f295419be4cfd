//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the admin server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the remote phonebook API.
    pub api_url: String,
    /// Glob handed to tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Signing key for flash message cookies, at least 64 bytes.
    pub secret: String,
}
