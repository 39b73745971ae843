use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Maps a URL prefix to a directory on disk, e.g. `/static` -> `static/`.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    pub route: String,
    pub directory: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("WEBSERVE__").split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("127.0.0.1", 7878, "127.0.0.1:7878")]
    #[case("0.0.0.0", 80, "0.0.0.0:80")]
    fn socket_addr_parses(#[case] host: &str, #[case] port: u16, #[case] expected: &str) {
        let server = ServerConfig {
            host: host.to_string(),
            port,
            request_timeout_secs: 30,
        };
        assert_eq!(server.socket_addr().unwrap().to_string(), expected);
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 7878,
            request_timeout_secs: 30,
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn extracts_from_toml() {
        let cfg: Config = Figment::from(Toml::string(
            r#"
            [server]
            host = "127.0.0.1"
            port = 7878
            request_timeout_secs = 30

            [static_files]
            route = "/static"
            directory = "static"
            "#,
        ))
        .extract()
        .unwrap();

        assert_eq!(cfg.server.port, 7878);
        assert_eq!(cfg.static_files.route, "/static");
        assert_eq!(cfg.static_files.directory, "static");
    }
}
