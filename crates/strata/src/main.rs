mod commands;
mod utils;

use clap::Parser;
use strata_deploy::output::banner;

/// Package deployment driver.
///
/// Runs the configured infrastructure tool through init, plan, and
/// apply against a remote state backend resolved from the parameter
/// store. A run with no action flag performs a full deployment.
#[derive(Parser)]
#[command(name = "strata", version, about = "Package deployment", long_about = None)]
struct Cli {
    /// Run the deployment in planning mode (no lock, no apply)
    #[arg(long)]
    plan_only: bool,

    /// Run a full deployment (the default when no action flag is given)
    #[arg(long)]
    deploy: bool,

    /// Remove and destroy the deployment
    #[arg(long)]
    destroy: bool,

    /// Force regeneration of the remote-state backend file
    #[arg(long)]
    create_backend: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ctrl-c exits quietly, without a banner or a stack trace; dropping
    // the in-flight future releases the plan artifact guard on the way
    // out
    let code = tokio::select! {
        result = run(cli) => match result {
            Ok(()) => {
                banner("Completed Successfully");
                0
            }
            Err(e) => {
                banner(&format!("ERROR: Completed Unsuccessfully: {e:#}"));
                1
            }
        },
        _ = tokio::signal::ctrl_c() => 130,
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.destroy {
        anyhow::bail!("destroy is not implemented yet");
    }

    let config = strata_core::load_config()?;
    tracing::debug!(
        "Driving {} in {}",
        config.tool.binary,
        config.tool.root_module.display()
    );

    let region = strata_core::check_environment()?;
    let identity = strata_aws::caller_identity().await?;
    utils::print_configuration(&region, &identity);

    let store = strata_aws::SsmParameterStore::from_env().await;
    let runner = utils::build_runner(&config, &region);
    let deployment = strata_deploy::Deployment::new(&config, &store, runner);

    if cli.create_backend {
        commands::create_backend::handle(&deployment).await
    } else if cli.plan_only {
        commands::plan_only::handle(&deployment).await
    } else {
        if !cli.deploy {
            println!("No action flag was passed. Defaulting to --deploy.");
        }
        commands::deploy::handle(&deployment).await
    }
}
