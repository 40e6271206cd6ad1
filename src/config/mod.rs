use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum::{Display, EnumIter};

pub mod metastore_config;

#[derive(Default, Serialize, Deserialize, Clone, Eq, PartialEq, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Local,
    #[default]
    Development,
    QA,
    Staging,
    Production,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration used by unit and integration tests.
    ///
    /// Same layering as [`ConfigLoader::load_default`], with
    /// `.env.test.local` and `.env.test` consulted first. The OS environment
    /// still wins over every file.
    pub async fn load_test<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.test.local").ok();
        dotenv::from_filename(".env.test").ok();
        ConfigLoader::load::<TConfig>().await
    }

    /// Loads the configuration used outside of tests.
    ///
    /// Sources are consulted in order and the first definition of a variable
    /// wins; a variable already set in the OS environment is never
    /// overridden by any file:
    ///  - OS environment variables
    ///  - `.env.{environment}.local` then `.env.{environment}`, for each
    ///    non-local [`Environment`]
    ///  - `.env.local`
    ///  - `.env`
    pub async fn load_default<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        for environment in Environment::iter().filter(|e| *e != Environment::Local) {
            dotenv::from_filename(format!(".env.{environment}.local")).ok();
            dotenv::from_filename(format!(".env.{environment}")).ok();
        }

        ConfigLoader::load::<TConfig>().await
    }

    async fn load<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        envy::from_env::<TConfig>().expect("Could not load configuration")
    }
}
