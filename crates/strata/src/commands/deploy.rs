use colored::Colorize;
use strata_deploy::{DeployStatus, Deployment};

pub async fn handle(deployment: &Deployment<'_>) -> anyhow::Result<()> {
    let status = deployment.deploy().await?;

    println!();
    match status {
        DeployStatus::Applied => {
            println!("{}", "✓ Plan applied".green().bold());
        }
        DeployStatus::SkippedNoChanges => {
            println!("{}", "✓ Infrastructure already up to date".green());
        }
    }
    Ok(())
}
