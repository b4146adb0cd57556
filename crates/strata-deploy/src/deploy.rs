//! Plan/apply deployment state machine
//!
//! Drives the external tool through backend setup, init, plan, and
//! conditional apply. The plan's exit code is interpreted through the
//! tri-state convention; the transient plan file is removed on every
//! exit path.

use crate::backend::{BackendWriter, ParameterStore};
use crate::error::{DeployError, Result};
use crate::output;
use crate::plan::{PLAN_FILE, PlanArtifact, PlanOutcome};
use crate::runner::{ToolOutput, ToolRunner};
use std::path::PathBuf;
use strata_core::DeployConfig;

/// Successful terminal states of a deployment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStatus {
    /// Changes were pending and the plan was applied.
    Applied,
    /// The plan reported no changes; apply was never issued.
    SkippedNoChanges,
}

/// One deployment invocation over a resolved configuration.
pub struct Deployment<'a> {
    config: &'a DeployConfig,
    store: &'a dyn ParameterStore,
    runner: ToolRunner,
}

impl<'a> Deployment<'a> {
    pub fn new(config: &'a DeployConfig, store: &'a dyn ParameterStore, runner: ToolRunner) -> Self {
        Self {
            config,
            store,
            runner,
        }
    }

    /// Full deployment: init, plan, and apply when changes are pending.
    pub async fn deploy(&self) -> Result<DeployStatus> {
        self.init().await?;

        output::banner(&format!("Deploying {}", self.config.tool.binary));

        let artifact = PlanArtifact::new(self.runner.workdir());
        let result = self.plan_and_apply().await;
        artifact.remove();
        result
    }

    /// Non-authoritative inspection plan: no lock, no artifact, no apply.
    pub async fn plan_only(&self) -> Result<()> {
        self.init().await?;

        output::banner(&format!("Planning {} execution", self.config.tool.binary));
        run_checked(&self.runner, &["plan", "-lock=false"]).await
    }

    /// Force regeneration of the backend-config file.
    pub async fn create_backend(&self) -> Result<PathBuf> {
        BackendWriter::new(self.store).ensure(self.config, true).await
    }

    /// Backend file, toolchain pin, stale-state removal, version check,
    /// and init. Any failure here aborts the run; init is not retried.
    async fn init(&self) -> Result<()> {
        output::banner("Remote state backend configuration");
        BackendWriter::new(self.store).ensure(self.config, false).await?;

        output::banner("Initializing backend");

        if let Some(manager) = &self.config.tool.version_manager {
            // The toolchain pin runs from the invocation directory, not
            // the root module
            let pin = ToolRunner::new(manager.clone(), std::env::current_dir()?);
            run_checked(&pin, &["install"]).await?;
            run_checked(&pin, &["use"]).await?;
        }

        // Stale local state confuses init after a backend change;
        // absence is not an error
        let stale = self
            .runner
            .workdir()
            .join(".terraform")
            .join("terraform.tfstate");
        match tokio::fs::remove_file(&stale).await {
            Ok(()) => tracing::debug!("Removed stale local state at {}", stale.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Could not remove {}: {}", stale.display(), e),
        }

        run_checked(&self.runner, &["-version"]).await?;

        let backend_flag = format!("-backend-config={}", self.config.tool.backend.file);
        run_checked(&self.runner, &["init", &backend_flag, "-input=false"]).await
    }

    async fn plan_and_apply(&self) -> Result<DeployStatus> {
        println!("Building {} plan.", self.config.tool.binary);

        let out_flag = format!("-out={PLAN_FILE}");
        let plan = self
            .runner
            .run_captured(&[
                "plan",
                "-detailed-exitcode",
                &out_flag,
                "-input=false",
                "-lock=false",
            ])
            .await?;
        echo(&plan);

        match PlanOutcome::from_exit_code(plan.code) {
            PlanOutcome::NoChanges => {
                println!("\nNo changes detected, skipping apply.");
                Ok(DeployStatus::SkippedNoChanges)
            }
            PlanOutcome::ChangesPending => {
                output::banner("Changes in plan detected, applying plan.");

                let apply = self
                    .runner
                    .run_captured(&["apply", "-input=false", "-lock=true", PLAN_FILE])
                    .await?;
                echo(&apply);

                if !apply.success() {
                    return Err(DeployError::ToolFailed {
                        command: apply.command_line(),
                        code: apply.code.unwrap_or(-1),
                        stderr: apply.stderr.trim_end().to_string(),
                    });
                }
                Ok(DeployStatus::Applied)
            }
            PlanOutcome::ExecutionError => Err(DeployError::PlanFailed {
                stderr: plan.stderr.trim_end().to_string(),
            }),
            PlanOutcome::UnknownExitCode(code) => Err(DeployError::UnknownExitCode(code)),
        }
    }
}

/// Run one phase command and require a zero exit.
async fn run_checked(runner: &ToolRunner, args: &[&str]) -> Result<()> {
    let out = runner.run(args).await?;
    if !out.success() {
        return Err(DeployError::ToolFailed {
            command: out.command_line(),
            code: out.code.unwrap_or(-1),
            stderr: out.stderr,
        });
    }
    Ok(())
}

/// Forward captured output so the operator still sees the tool's report.
fn echo(output: &ToolOutput) {
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }
}
