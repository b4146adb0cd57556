//! AWS integration error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("unable to verify AWS identity: {0}\nPlease set up proper credentials")]
    IdentityCheckFailed(String),
}

pub type Result<T> = std::result::Result<T, AwsError>;
