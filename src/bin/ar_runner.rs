use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use ar_runner::app::{App, AppConfig};
use ar_runner::{build_info, diagnostics};

/// Touch front end for the AR runner demo
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration profile (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Replay the built-in gesture scenarios and exit
    #[arg(long)]
    diagnose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            let profile = cli.profile.as_deref().unwrap_or("release");
            (AppConfig::builtin(profile), Some(e))
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using built-in defaults");
    }
    debug!("{}", build_info::detailed_info());

    if cli.diagnose {
        let report = diagnostics::run_builtin();
        diagnostics::print_report(&report);
        std::process::exit(report.exit_code());
    }

    App::new(config)
        .run()
        .map_err(|e| anyhow::anyhow!("AR runner exited with an error: {e}"))
}
