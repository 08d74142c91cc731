use aws_sdk_quicksight::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// QuickSight-specific errors
#[derive(Error, Debug)]
pub enum QuickSightError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("{0}")]
    Provider(String),
    #[error("AWS SDK build error: {0}")]
    AwsBuild(String),
}

pub type QuickSightResult<T> = Result<T, QuickSightError>;

// Implement From for AWS SDK BuildError
impl From<aws_sdk_quicksight::error::BuildError> for QuickSightError {
    fn from(error: aws_sdk_quicksight::error::BuildError) -> Self {
        QuickSightError::AwsBuild(error.to_string())
    }
}

impl QuickSightError {
    /// Wrap a failed vendor call. The service's own message is carried
    /// through untouched when it provides one.
    pub(crate) fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        let message = err
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
        QuickSightError::Provider(message)
    }
}
