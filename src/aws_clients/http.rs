use std::time::Duration;

use anyhow::anyhow;
use rusoto_core::request::{HttpClient, HttpConfig};

use crate::config::metastore_config::MetastoreConfig;

use super::DynamoDbFactoryError;

/// Derives the request dispatcher for the metadata-store clients from the
/// transport settings in the configuration. Unset settings keep the rusoto
/// defaults.
pub fn get_http_client(config: &MetastoreConfig) -> Result<HttpClient, DynamoDbFactoryError> {
    let mut http_config = HttpConfig::new();
    if let Some(read_buf_size) = config.ddb_http_read_buf_size {
        http_config.read_buf_size(read_buf_size);
    }
    if let Some(secs) = config.ddb_http_pool_idle_timeout_secs {
        http_config.pool_idle_timeout(Duration::from_secs(secs));
    }

    HttpClient::new_with_config(http_config).map_err(|e| {
        DynamoDbFactoryError::Unknown(anyhow!(e).context("Unable to build Rusoto HTTP client"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn dispatcher_builds_with_default_settings() {
        get_http_client(&MetastoreConfig::default()).expect("dispatcher should build");
    }

    #[rstest]
    fn dispatcher_builds_with_tuned_settings() {
        let config = MetastoreConfig {
            ddb_http_read_buf_size: Some(65536),
            ddb_http_pool_idle_timeout_secs: Some(30),
            ..MetastoreConfig::default()
        };

        get_http_client(&config).expect("dispatcher should build");
    }
}
