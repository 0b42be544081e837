//! CLI entrypoint for qa-validator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use qa_application::{
    IterationProgress, NoProgress, NoTelemetry, TelemetrySink, ValidatorLoop, ValidatorPorts,
};
use qa_infrastructure::{
    ConfigLoader, FileConfig, HttpPeerClient, JsonlTelemetrySink, JsonlWeightSubmitter,
    OpenAiTextGenerator, StaticMembership,
};
use qa_presentation::{Cli, ConsoleFormatter, ConsoleReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are written
    let _log_guard = init_logging(&cli)?;

    info!("Starting qa-validator");

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut file_config = load_config(&cli)?;
    apply_cli_overrides(&mut file_config, &cli);

    let issues = file_config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("Error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }

    // === Dependency Injection ===
    let generator = Arc::new(OpenAiTextGenerator::from_config(&file_config.generation)?);
    let network = Arc::new(HttpPeerClient::new(Duration::from_secs(
        file_config.peers.timeout_secs,
    ))?);

    let membership = StaticMembership::from_config(&file_config.peers);
    if membership.is_empty() {
        warn!("No peers configured; iterations will have nobody to query");
    }

    let weights_path = file_config
        .weights
        .resolve_path()
        .ok_or_else(|| anyhow!("Could not determine a location for the weights file"))?;
    let submitter = JsonlWeightSubmitter::new(&weights_path)
        .ok_or_else(|| anyhow!("Could not open weights file {}", weights_path.display()))?;

    let telemetry = build_telemetry(&file_config);
    let progress = build_progress(&cli);

    let ports = ValidatorPorts {
        generator,
        network,
        membership: Arc::new(membership),
        submitter: Arc::new(submitter),
        telemetry,
    };

    let mut validator =
        ValidatorLoop::new(file_config.to_validator_config(), ports)?.with_progress(progress);
    if let Some(themes) = file_config.generation.default_themes.clone() {
        validator = validator.with_default_themes(themes);
    }

    // Ctrl-C stops the loop between iterations
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, finishing current iteration");
            signal_token.cancel();
        }
    });

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|           qa-validator                                     |");
        println!("+============================================================+");
        println!();
        println!("Netuid: {}", file_config.validator.netuid);
        println!("Peers: {}", file_config.peers.members.len());
        println!("Weights: {}", weights_path.display());
        println!();
    }

    let summary = validator.run(cancel).await;

    if !cli.quiet {
        println!("{}", ConsoleFormatter::format_summary(&summary));
    }

    Ok(())
}

/// `--no-config` skips discovered files and env; an explicit `--config` is still read.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = match (cli.no_config, cli.config.as_ref()) {
        (true, None) => ConfigLoader::load_defaults(),
        (true, Some(path)) => ConfigLoader::load_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        (false, path) => ConfigLoader::load(path).context("Failed to load configuration")?,
    };
    Ok(config)
}

/// Log to stderr, and also to `--log-file` when given.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(path) = &cli.log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Ok(Some(guard))
}

fn build_telemetry(config: &FileConfig) -> Arc<dyn TelemetrySink> {
    if !config.telemetry.enabled {
        return Arc::new(NoTelemetry);
    }
    match config
        .telemetry
        .resolve_path()
        .and_then(JsonlTelemetrySink::new)
    {
        Some(sink) => {
            info!("Recording telemetry to {}", sink.path().display());
            Arc::new(sink)
        }
        None => {
            warn!("Telemetry disabled: no writable telemetry file");
            Arc::new(NoTelemetry)
        }
    }
}

fn build_progress(cli: &Cli) -> Arc<dyn IterationProgress> {
    if cli.quiet {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ConsoleReporter::new().with_scores(cli.verbose > 0))
    } else {
        Arc::new(SimpleProgress)
    }
}

/// Command-line flags take precedence over every config layer.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(netuid) = cli.netuid {
        config.validator.netuid = netuid;
    }
    if let Some(alpha) = cli.alpha {
        config.validator.alpha = alpha;
    }
    if let Some(cadence) = cli.cadence {
        config.validator.weight_emit_cadence = cadence;
    }
    if let Some(max) = cli.max_iterations {
        config.validator.max_iterations = Some(max);
    }
    if cli.telemetry {
        config.telemetry.enabled = true;
    }
}
