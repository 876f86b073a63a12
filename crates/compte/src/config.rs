use anyhow::{Context, Result};
use shared::config::Config;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub run_migrations: bool,
    pub grpc_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let grpc_addr = format!("0.0.0.0:{}", config.compte.grpc_port)
            .parse()
            .context("Invalid gRPC address")?;

        Ok(Self {
            database_url: config.database_url.clone(),
            run_migrations: config.run_migrations,
            grpc_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::ServiceConfig;

    #[test]
    fn grpc_addr_binds_all_interfaces() {
        let config = Config {
            database_url: "postgres://localhost/comptes".to_string(),
            run_migrations: false,
            compte: ServiceConfig { grpc_port: 9090 },
        };

        let server = ServerConfig::from_config(&config).unwrap();

        assert_eq!(server.grpc_addr, "0.0.0.0:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(server.database_url, config.database_url);
        assert!(!server.run_migrations);
    }
}
