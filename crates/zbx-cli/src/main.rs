//! Zabbix API command-line client
//!
//! Resolves connection settings from the config file, the environment and
//! flags (in increasing priority), makes one API call and prints the result
//! as JSON on stdout. Logs go to stderr or to `--log-file`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zbx_core::config::{ClientConfig, Directories};
use zbx_core::types::{CommonGet, Output};
use zbx_core::{Connection, ObjectKind, ZabbixClient};

/// Zabbix API client
#[derive(Parser, Debug)]
#[command(name = "zbx")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Examples:
  zbx version                                 Show the server API version
  zbx get host --output hostid,host --limit 5 List five hosts
  zbx get hostgroup --filter '{\"name\": [\"Linux servers\"]}'
  zbx call host delete '[10084]'              Raw call with JSON params
  zbx kinds                                   List object kinds and operations

Settings come from ~/.config/zbx/config.json, then ZABBIX_URL, ZABBIX_USER,
ZABBIX_PASSWORD, ZABBIX_TOKEN and ZABBIX_TIMEOUT, then the flags below.
")]
struct Cli {
    /// Frontend URL, e.g. <https://zabbix.example.com>
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// API token
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    /// Username for `user.login`
    #[arg(long, global = true, value_name = "USER")]
    user: Option<String>,

    /// Password for `user.login`
    #[arg(long, global = true, value_name = "PASSWORD")]
    password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file (defaults to ~/.config/zbx/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the server API version (no credentials needed)
    Version,

    /// Call `<object>.<operation>` with raw JSON params
    Call {
        /// Object kind, e.g. host or hostgroup
        object: String,
        /// Operation, e.g. get or massadd
        operation: String,
        /// Params as JSON (defaults to {})
        params: Option<String>,
        /// Send operations not listed for the object kind
        #[arg(long)]
        force: bool,
    },

    /// Run `<object>.get`
    Get {
        /// Object kind, e.g. host or trigger
        object: String,
        /// Filter as a JSON object
        #[arg(long, value_name = "JSON")]
        filter: Option<String>,
        /// Comma-separated fields to return (defaults to all)
        #[arg(long, value_name = "FIELDS", value_delimiter = ',')]
        output: Vec<String>,
        /// Maximum number of records
        #[arg(long)]
        limit: Option<u32>,
    },

    /// List object kinds with their shape and operations
    Kinds,
}

/// Set up logging. Returns the guard that flushes the file writer, if any.
fn setup_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zbx={default_level}")));

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(cli.verbose, cli.log_file.as_deref())?;

    match &cli.command {
        Commands::Kinds => {
            print_kinds();
            Ok(())
        }
        Commands::Version => run_version(&cli).await,
        Commands::Call {
            object,
            operation,
            params,
            force,
        } => run_call(&cli, object, operation, params.as_deref(), *force).await,
        Commands::Get {
            object,
            filter,
            output,
            limit,
        } => run_get(&cli, object, filter.as_deref(), output, *limit).await,
    }
}

/// Merge config file, environment and flags.
fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Directories::new()
            .map(|dirs| dirs.config_file)
            .context("Cannot determine the config directory; pass --config")?,
    };

    let mut config = ClientConfig::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config.apply_env_overrides()?;
    apply_flags(&mut config, cli);

    debug!("Resolved config: {:?}", config);
    Ok(config)
}

fn apply_flags(config: &mut ClientConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.url = Some(url.clone());
    }
    if let Some(user) = &cli.user {
        config.username = Some(user.clone());
    }
    if let Some(password) = &cli.password {
        config.password = Some(password.clone());
    }
    if let Some(token) = &cli.token {
        config.token = Some(token.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
}

async fn connect(cli: &Cli) -> Result<ZabbixClient> {
    let builder = resolve_config(cli)?.into_builder()?;
    let url = builder.url().to_string();
    builder
        .build()
        .await
        .with_context(|| format!("Failed to connect to {url}"))
}

fn parse_kind(object: &str) -> Result<ObjectKind> {
    object
        .parse::<ObjectKind>()
        .context("Run `zbx kinds` to list the known object kinds")
}

/// Parse a JSON argument, naming it in the error.
fn parse_json(what: &str, text: &str) -> Result<Value> {
    serde_json::from_str(text).with_context(|| format!("Invalid JSON for {what}: {text}"))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_version(cli: &Cli) -> Result<()> {
    // No credentials needed, so skip the login round trip.
    let config = resolve_config(cli)?;
    let connection = Connection::new(config.url()?, config.timeout())?;
    let client = ZabbixClient::from_connection(Arc::new(connection));

    let version = client.api_info().version().await?;
    print_json(&version)
}

/// Operations that take an empty array instead of an object.
fn default_params(operation: &str) -> Value {
    match operation {
        "version" | "logout" => Value::Array(Vec::new()),
        _ => Value::Object(Map::new()),
    }
}

async fn run_call(
    cli: &Cli,
    object: &str,
    operation: &str,
    params: Option<&str>,
    force: bool,
) -> Result<()> {
    let kind = parse_kind(object)?;
    if !force && !kind.supports(operation) {
        bail!(
            "{kind} has no operation `{operation}` (known: {}); use --force to send it anyway",
            kind.operations().join(", ")
        );
    }

    let params = match params {
        Some(text) => parse_json("params", text)?,
        None => default_params(operation),
    };

    let client = connect(cli).await?;
    let session = client.session();
    let result = session.object(kind).dispatch(operation, params).await?;
    print_json(&result)
}

fn build_get(filter: Option<&str>, output: &[String], limit: Option<u32>) -> Result<CommonGet> {
    let filter = filter.map(|text| parse_json("--filter", text)).transpose()?;
    if let Some(filter) = &filter
        && !filter.is_object()
    {
        bail!("--filter must be a JSON object");
    }

    let output = if output.is_empty() {
        Output::Extend
    } else {
        output.iter().map(|field| field.trim()).collect()
    };

    Ok(CommonGet {
        filter,
        limit,
        output: Some(output),
        ..Default::default()
    })
}

async fn run_get(
    cli: &Cli,
    object: &str,
    filter: Option<&str>,
    output: &[String],
    limit: Option<u32>,
) -> Result<()> {
    let kind = parse_kind(object)?;
    if !kind.supports("get") {
        bail!("{kind} does not support get");
    }
    let params = build_get(filter, output, limit)?;

    let client = connect(cli).await?;
    let session = client.session();
    let result = session.object(kind).call("get", &params).await?;
    print_json(&result)
}

fn print_kinds() {
    for &kind in ObjectKind::ALL {
        let shape = kind
            .shape()
            .map_or_else(|| "-".to_string(), |shape| shape.to_string());
        println!(
            "{:<20} {:<12} {}",
            kind.name(),
            shape,
            kind.operations().join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_parse_call() {
        let cli = Cli::try_parse_from([
            "zbx", "--url", "http://host", "call", "host", "delete", "[1]", "--force",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://host"));
        match cli.command {
            Commands::Call {
                object,
                operation,
                params,
                force,
            } => {
                assert_eq!(object, "host");
                assert_eq!(operation, "delete");
                assert_eq!(params.as_deref(), Some("[1]"));
                assert!(force);
            }
            other => panic!("Expected Call, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_get_with_output_list() {
        let cli = Cli::try_parse_from([
            "zbx", "get", "host", "--output", "hostid,host", "--limit", "5", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Get { output, limit, .. } => {
                assert_eq!(output, vec!["hostid", "host"]);
                assert_eq!(limit, Some(5));
            }
            other => panic!("Expected Get, got {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["zbx", "--token", "flag-token", "--timeout", "9", "kinds"])
            .unwrap();
        let mut config = ClientConfig {
            url: Some("http://file".to_string()),
            token: Some("file-token".to_string()),
            ..Default::default()
        };
        apply_flags(&mut config, &cli);

        assert_eq!(config.url.as_deref(), Some("http://file"));
        assert_eq!(config.token.as_deref(), Some("flag-token"));
        assert_eq!(config.timeout(), Duration::from_secs(9));
    }

    #[test]
    fn test_resolve_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"url": "http://file", "token": "abc"}"#).unwrap();

        let cli = Cli::try_parse_from([
            "zbx",
            "--config",
            path.to_str().unwrap(),
            "--url",
            "http://flag",
            "version",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.url.as_deref(), Some("http://flag"));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("httptest").unwrap(), ObjectKind::WebScenario);
        assert!(parse_kind("webscenario").is_err());
    }

    #[test]
    fn test_build_get() {
        let params = build_get(Some(r#"{"host": ["a"]}"#), &["hostid".to_string()], Some(3)).unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"filter": {"host": ["a"]}, "limit": 3, "output": ["hostid"]})
        );

        let params = build_get(None, &[], None).unwrap();
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"output": "extend"}));
    }

    #[test]
    fn test_build_get_rejects_bad_filter() {
        assert!(build_get(Some("[1]"), &[], None).is_err());
        assert!(build_get(Some("{oops"), &[], None).is_err());
    }

    #[test]
    fn test_default_params() {
        assert_eq!(default_params("logout"), json!([]));
        assert_eq!(default_params("get"), json!({}));
    }
}
