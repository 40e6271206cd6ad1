use std::str::FromStr;

use rusoto_core::credential::StaticProvider;
use rusoto_core::region::Region;
use rusoto_core::request::HttpClient;
use rusoto_dynamodb::DynamoDbClient;
use tracing::debug;

use crate::aws_clients::credentials::get_credentials_provider;
use crate::aws_clients::http::get_http_client;
use crate::config::metastore_config::MetastoreConfig;
use crate::config::ConfigLoader;

use super::{DynamoDbClientFactory, DynamoDbFactoryError};

/// Default factory: builds clients against the regional AWS endpoint (or the
/// configured endpoint override), authenticated through the ambient
/// credential chain.
///
/// The factory owns its configuration and keeps no reference to the clients
/// it hands out; building twice from the same configuration yields two
/// independent handles with the same resolved region and transport settings.
pub struct DefaultDynamoDbClientFactory {
    config: MetastoreConfig,
}

impl DefaultDynamoDbClientFactory {
    pub fn new(config: MetastoreConfig) -> Self {
        Self { config }
    }

    /// The configured region wins; a caller-supplied default is the
    /// fallback. Whitespace-only values count as absent at both levels.
    fn resolve_region(&self, default_region: &str) -> Result<Region, DynamoDbFactoryError> {
        let name = match self.config.ddb_region.as_deref().map(str::trim) {
            Some(region) if !region.is_empty() => region,
            _ => default_region.trim(),
        };
        if name.is_empty() {
            return Err(DynamoDbFactoryError::MissingRegion);
        }

        if let Some(endpoint) = self.config.ddb_endpoint.clone() {
            return Ok(Region::Custom {
                name: name.to_owned(),
                endpoint,
            });
        }

        Region::from_str(name).map_err(|e| DynamoDbFactoryError::InvalidRegion {
            region: name.to_owned(),
            source: e,
        })
    }
}

impl DynamoDbClientFactory for DefaultDynamoDbClientFactory {
    fn create_dynamodb_client(
        &self,
        default_region: &str,
    ) -> Result<DynamoDbClient, DynamoDbFactoryError> {
        let credentials = get_credentials_provider()?;
        let request_dispatcher = get_http_client(&self.config)?;
        let region = self.resolve_region(default_region)?;
        debug!("Creating DynamoDB client in region {}", region.name());

        Ok(DynamoDbClient::new_with(
            request_dispatcher,
            credentials,
            region,
        ))
    }
}

/// Factory variant for local development and integration tests: talks to a
/// DynamoDB served on a fixed local endpoint (e.g. LocalStack) with dummy
/// static credentials, so no ambient AWS identity is needed.
pub struct LocalDynamoDbClientFactory {
    region_name: String,
    endpoint: String,
}

impl LocalDynamoDbClientFactory {
    pub fn new(region_name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            region_name: region_name.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl DynamoDbClientFactory for LocalDynamoDbClientFactory {
    fn create_dynamodb_client(
        &self,
        default_region: &str,
    ) -> Result<DynamoDbClient, DynamoDbFactoryError> {
        let mut name = self.region_name.trim();
        if name.is_empty() {
            name = default_region.trim();
        }
        if name.is_empty() {
            return Err(DynamoDbFactoryError::MissingRegion);
        }

        let request_dispatcher = HttpClient::new().map_err(|e| {
            DynamoDbFactoryError::Unknown(
                anyhow::anyhow!(e).context("Unable to build Rusoto HTTP client"),
            )
        })?;
        let region = Region::Custom {
            name: name.to_owned(),
            endpoint: self.endpoint.clone(),
        };
        debug!("Creating local DynamoDB client at {}", self.endpoint);

        Ok(DynamoDbClient::new_with(
            request_dispatcher,
            StaticProvider::new_minimal("test".to_owned(), "test".to_owned()),
            region,
        ))
    }
}

/// Loads the default configuration and builds a client through the default
/// factory, with no caller-supplied fallback region.
pub async fn get_dynamodb_client() -> Result<DynamoDbClient, DynamoDbFactoryError> {
    let config = ConfigLoader::load_default::<MetastoreConfig>().await;
    DefaultDynamoDbClientFactory::new(config).create_dynamodb_client("")
}
