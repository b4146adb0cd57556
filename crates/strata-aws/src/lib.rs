//! AWS integration for Strata
//!
//! Implements the parameter-store seam with SSM and the caller
//! identity check with STS. Credentials and region resolve through the
//! standard AWS provider chain, the same chain the external tool uses.

pub mod error;
pub mod identity;
pub mod ssm;

pub use error::{AwsError, Result};
pub use identity::{CallerIdentity, caller_identity};
pub use ssm::SsmParameterStore;
