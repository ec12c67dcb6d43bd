//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config, port } => start(config.as_deref(), port),
    }
}

/// Write the default configuration as pretty JSON.
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(&HttpServerConfig::default())?;
    fs::write(config_path, content)?;

    println!("Wrote {}", config_path.display());
    Ok(())
}

/// Resolve configuration, install logging, open the store and serve.
pub fn start(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, port)?;

    observability::init(&config.log_level, config.log_format)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let server = HttpServer::connect(config).await?;
        server.start().await
    })?;

    Ok(())
}

/// Defaults, file, environment, then the command-line port
fn resolve_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::resolve(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("clientfolio.json");

        init(&path).unwrap();

        let loaded = HttpServerConfig::load(&path).unwrap();
        assert_eq!(loaded, HttpServerConfig::default());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clientfolio.json");
        fs::write(&path, "{}").unwrap();

        let err = init(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::AlreadyInitialized);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_port_flag_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clientfolio.json");
        fs::write(&path, r#"{ "port": 9000 }"#).unwrap();

        let config = resolve_config(Some(&path), Some(7000)).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_broken_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clientfolio.json");
        fs::write(&path, "{ not json").unwrap();

        let err = resolve_config(Some(&path), None).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
