//! Shared CLI helpers

use colored::Colorize;
use is_terminal::IsTerminal;
use strata_aws::CallerIdentity;
use strata_core::{DeployConfig, REGION_VAR};
use strata_deploy::ToolRunner;

/// Mirror of the region for the tool's variable-injection convention.
const TOOL_REGION_VAR: &str = "TF_VAR_aws_region";

/// Build the tool runner with the child environment the tool expects.
pub fn build_runner(config: &DeployConfig, region: &str) -> ToolRunner {
    let mut runner = ToolRunner::new(
        config.tool.binary.clone(),
        config.tool.root_module.clone(),
    )
    .env("TF_IN_AUTOMATION", "1")
    .env(TOOL_REGION_VAR, region);

    // Suppress the tool's colors when output is not a terminal
    if !std::io::stdout().is_terminal() {
        runner = runner.env("TF_CLI_ARGS", "-no-color");
    }

    runner
}

/// Print the resolved configuration for the run log.
pub fn print_configuration(region: &str, identity: &CallerIdentity) {
    strata_deploy::output::banner("Configuration");
    println!("  Environment");
    println!("    {}={}", REGION_VAR, region.cyan());
    println!("    {}={}", TOOL_REGION_VAR, region.cyan());
    println!();
    println!("  Identity");
    println!("    AWS User={}", identity.arn.cyan());
    println!();
}
