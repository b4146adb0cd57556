use colored::Colorize;
use strata_deploy::{Deployment, output};

pub async fn handle(deployment: &Deployment<'_>) -> anyhow::Result<()> {
    output::banner("Remote state backend configuration");
    let path = deployment.create_backend().await?;

    println!(
        "{} backend config written to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
