use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("AWS_ACCOUNT_ID must be set")]
    MissingAccountId,
}

/// Account and namespace settings for the QuickSight embedding client.
///
/// Credentials themselves resolve through the SDK default provider chain;
/// only the embedding-specific identifiers live here.
#[derive(Debug, Clone)]
pub struct QuickSightSettings {
    pub region: String,
    pub account_id: String,
    pub namespace: String,
    pub default_user_arn: Option<String>,
}

impl QuickSightSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let region = env::var("AWS_REGION").unwrap_or_else(|_| "ap-northeast-2".to_string());

        let account_id = env::var("AWS_ACCOUNT_ID")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(SettingsError::MissingAccountId)?;

        let namespace =
            env::var("QUICKSIGHT_NAMESPACE").unwrap_or_else(|_| "default".to_string());

        let default_user_arn = env::var("QUICKSIGHT_USER_ARN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(QuickSightSettings {
            region,
            account_id,
            namespace,
            default_user_arn,
        })
    }
}
