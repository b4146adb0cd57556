use strata_deploy::Deployment;

pub async fn handle(deployment: &Deployment<'_>) -> anyhow::Result<()> {
    deployment.plan_only().await?;
    Ok(())
}
