use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub compte: ServiceConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;

        let run_migrations = parse_run_migrations(&run_migrations_str)?;

        Ok(Self {
            database_url,
            run_migrations,
            compte: ServiceConfig::from_env("COMPTE")?,
        })
    }
}

fn parse_run_migrations(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!(
            "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
        )),
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub grpc_port: u16,
}

impl ServiceConfig {
    pub fn from_env(prefix: &str) -> Result<Self> {
        let grpc_port = std::env::var(format!("{prefix}_GRPC_PORT"))
            .context(format!("Missing env: {prefix}_GRPC_PORT"))?
            .parse::<u16>()
            .context(format!("{prefix}_GRPC_PORT must be a valid u16 integer"))?;

        Ok(Self { grpc_port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_migrations_accepts_only_true_or_false() {
        assert!(parse_run_migrations("true").unwrap());
        assert!(!parse_run_migrations("false").unwrap());
        assert!(parse_run_migrations("yes").is_err());
        assert!(parse_run_migrations("TRUE").is_err());
    }

    #[test]
    fn service_config_reads_prefixed_port() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("CFGTEST_OK_GRPC_PORT", "50051") };
        let config = ServiceConfig::from_env("CFGTEST_OK").unwrap();
        assert_eq!(config.grpc_port, 50051);
    }

    #[test]
    fn service_config_rejects_bad_port() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("CFGTEST_BAD_GRPC_PORT", "70000") };
        assert!(ServiceConfig::from_env("CFGTEST_BAD").is_err());
        assert!(ServiceConfig::from_env("CFGTEST_MISSING").is_err());
    }
}
