use crate::logging::LoggingConfig;
use anyhow::{anyhow, Error as AnyError};
use config::Config;
use serde::de::DeserializeOwned;
use std::{fmt::Debug, path::PathBuf};

use super::{CoreConfig, ServiceConfig};

pub const SERVICE_SECTION: &str = "service";
pub const LOGGING_SECTION: &str = "logging";

/// Configuration of an application hosted by the web app. It is read from the section named by `NAME`.
pub trait FeatureConfig: Debug {
    const NAME: &'static str;
}

#[derive(Debug, Clone)]
pub struct WebAppConfig<F>
where
    F: FeatureConfig,
{
    pub core: CoreConfig,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,

    pub feature: F,
}

impl<F> WebAppConfig<F>
where
    F: FeatureConfig + DeserializeOwned + Debug,
{
    /// Split the merged layers into the sections. Each section is read by the deserializer of the config
    /// crate, thus string values of the environment layer are accepted for numeric and boolean fields.
    pub fn from_config(config: Config) -> Result<Self, AnyError> {
        let service = config.get::<ServiceConfig>(SERVICE_SECTION)?;
        let logging = config.get::<LoggingConfig>(LOGGING_SECTION)?;
        let feature = config.get::<F>(F::NAME)?;
        let core = config.try_deserialize::<CoreConfig>()?;

        Ok(Self {
            core,
            service,
            logging,
            feature,
        })
    }

    pub fn load(stage: &str, config_file: Option<PathBuf>) -> Result<Self, AnyError> {
        let pre_init = CoreConfig::new(stage, config_file)?;
        let config = pre_init.create_config_builder()?.build()?;

        let cfg = Self::from_config(config)?;
        log::info!("Config loaded [{}]: {:#?}", cfg.core.root_file, cfg);

        if pre_init != cfg.core {
            Err(anyhow!("Core config mismatch"))
        } else {
            Ok(cfg)
        }
    }
}
