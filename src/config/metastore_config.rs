use serde::Deserialize;

/// Settings for the DynamoDB metadata-store clients.
///
/// Every field is optional: whether a usable region can be determined at all
/// is decided by the client factory, not by the loader.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MetastoreConfig {
    /// Region override for the metadata store. Wins over any default region
    /// a caller supplies to the factory.
    pub ddb_region: Option<String>,

    /// Only used for development. Points the client at a local DynamoDB
    /// endpoint (e.g. LocalStack) instead of the regional AWS one.
    pub ddb_endpoint: Option<String>,

    /// Read buffer size of the request dispatcher, in bytes.
    pub ddb_http_read_buf_size: Option<usize>,

    /// How long an idle connection may sit in the dispatcher pool before it
    /// is dropped, in seconds.
    pub ddb_http_pool_idle_timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn from_pairs(pairs: &[(&str, &str)]) -> MetastoreConfig {
        envy::from_iter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
        .expect("config should deserialize")
    }

    #[rstest]
    fn an_empty_environment_is_a_valid_configuration() {
        let config = from_pairs(&[]);

        assert!(config.ddb_region.is_none());
        assert!(config.ddb_endpoint.is_none());
        assert!(config.ddb_http_read_buf_size.is_none());
        assert!(config.ddb_http_pool_idle_timeout_secs.is_none());
    }

    #[rstest]
    fn all_fields_deserialize_from_their_variables() {
        let config = from_pairs(&[
            ("DDB_REGION", "us-west-2"),
            ("DDB_ENDPOINT", "http://localhost:4566"),
            ("DDB_HTTP_READ_BUF_SIZE", "65536"),
            ("DDB_HTTP_POOL_IDLE_TIMEOUT_SECS", "30"),
        ]);

        assert_eq!(config.ddb_region.as_deref(), Some("us-west-2"));
        assert_eq!(config.ddb_endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.ddb_http_read_buf_size, Some(65536));
        assert_eq!(config.ddb_http_pool_idle_timeout_secs, Some(30));
    }
}
