//! Strata deployment core
//!
//! The plan/apply state machine and its collaborators: the external
//! tool runner, the backend-config writer over a parameter-store seam,
//! and the tri-state plan outcome interpretation.
//!
//! ```text
//! CLI ──▶ Deployment ──▶ BackendWriter ──▶ dyn ParameterStore
//!             │
//!             └──▶ ToolRunner ──▶ init / plan / apply
//! ```

pub mod backend;
pub mod deploy;
pub mod error;
pub mod output;
pub mod plan;
pub mod runner;

pub use backend::{BackendWriter, ParameterStore};
pub use deploy::{DeployStatus, Deployment};
pub use error::{DeployError, Result};
pub use plan::{PLAN_FILE, PlanArtifact, PlanOutcome};
pub use runner::{ToolOutput, ToolRunner};
