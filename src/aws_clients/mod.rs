use rusoto_core::region::ParseRegionError;
use rusoto_dynamodb::DynamoDbClient;

pub mod credentials;
pub mod dynamodb;
pub mod http;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum DynamoDbFactoryError {
    /// Neither the configuration nor the caller supplied a region. This is a
    /// user configuration error, not a transient fault: do not retry it.
    #[error("no DynamoDB region is provided")]
    MissingRegion,

    /// The resolved region name is not a region the SDK knows and no
    /// endpoint override was configured to pin it to.
    #[error(r#"unable to parse DynamoDB region "{region}""#)]
    InvalidRegion {
        region: String,
        #[source]
        source: ParseRegionError,
    },

    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

impl From<anyhow::Error> for DynamoDbFactoryError {
    fn from(error: anyhow::Error) -> Self {
        DynamoDbFactoryError::Unknown(error)
    }
}

/// Builds DynamoDB client handles for the metadata store.
///
/// Everything needed to build a client comes from the configuration the
/// implementation was constructed with. If the configuration does not name a
/// region, `default_region` is used instead; if the region is neither
/// configured nor provided, creation fails.
pub trait DynamoDbClientFactory {
    fn create_dynamodb_client(
        &self,
        default_region: &str,
    ) -> Result<DynamoDbClient, DynamoDbFactoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub DynamoDbClientFactoryTest {}

    impl DynamoDbClientFactory for DynamoDbClientFactoryTest {
        fn create_dynamodb_client(
            &self,
            default_region: &str,
        ) -> Result<DynamoDbClient, DynamoDbFactoryError>;
    }
}

#[cfg(all(test, feature = "test_mocks"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn mock_factory_answers_through_the_trait() {
        let mut factory = MockDynamoDbClientFactoryTest::new();
        factory
            .expect_create_dynamodb_client()
            .once()
            .returning(|_| Err(DynamoDbFactoryError::MissingRegion));

        let factory: &dyn DynamoDbClientFactory = &factory;
        let error = factory
            .create_dynamodb_client("")
            .expect_err("mock was primed to fail");
        assert!(matches!(error, DynamoDbFactoryError::MissingRegion));
    }
}
