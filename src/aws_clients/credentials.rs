use anyhow::anyhow;
use rusoto_core::credential::DefaultCredentialsProvider;

use super::DynamoDbFactoryError;

/// Resolves the ambient AWS credential chain (environment, profile,
/// container and instance metadata) for the metadata-store clients.
///
/// The chain itself belongs to the SDK; a construction failure is surfaced
/// unchanged, with the original error kept as the cause.
pub fn get_credentials_provider() -> Result<DefaultCredentialsProvider, DynamoDbFactoryError> {
    DefaultCredentialsProvider::new().map_err(|e| {
        DynamoDbFactoryError::Unknown(
            anyhow!(e).context("Error resolving the AWS credential provider chain"),
        )
    })
}
