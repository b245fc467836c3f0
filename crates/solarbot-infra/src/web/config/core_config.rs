use crate::web::Environment;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_VERSION_CONFIG_FILE: &str = "server_version.json";
pub const DEFAULT_VERSION: &str = "custom";

/// Partial configuration required for early setup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    pub stage: String,
    pub version: String,
    #[serde(default)]
    pub before_layers: Vec<String>,
    #[serde(default)]
    pub after_layers: Vec<String>,
    pub root_file: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Layer<'a> {
    Base,
    Environment,
    File(&'a str),
    OptionalFile(&'a str),
}

impl<'a> Layer<'a> {
    fn from_layer(layer: &'a str) -> Result<Self, ConfigError> {
        if layer == "environment" {
            return Ok(Layer::Environment);
        }

        let (schema, path) = layer.split_once("://").ok_or_else(|| ConfigError::FileParse {
            uri: Some(layer.to_owned()),
            cause: "Invalid config layer".into(),
        })?;
        if path.is_empty() {
            return Err(ConfigError::FileParse {
                uri: Some(layer.to_owned()),
                cause: "Missing file path".into(),
            });
        }

        match schema {
            "file" => Ok(Layer::File(path)),
            "file?" => Ok(Layer::OptionalFile(path)),
            _ => Err(ConfigError::FileParse {
                uri: Some(layer.to_owned()),
                cause: format!("Unsupported schema, {schema}").into(),
            }),
        }
    }
}

impl CoreConfig {
    pub fn new(stage: &str, config_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        log::info!("Loading configuration for {}", stage);

        let root_file = config_file.unwrap_or_else(|| Path::new(&format!("server_config.{}.json", stage)).to_owned());
        let root_file_str = root_file
            .to_str()
            .ok_or_else(|| ConfigError::Message(format!("Invalid config path: {}", root_file.display())))?
            .to_string();
        let mut builder = Config::builder().add_source(File::from(root_file.as_path()));

        let version_path = Path::new(DEFAULT_VERSION_CONFIG_FILE);
        if version_path.exists() {
            builder = builder.add_source(File::from(version_path));
        } else {
            log::warn!("No version file found at {}", version_path.display());
            builder = builder.set_override("version", DEFAULT_VERSION)?;
        }

        builder = builder
            .set_override("stage", stage)?
            .set_override("rootFile", root_file_str)?;

        let s = builder.build()?;
        let cfg: CoreConfig = s.try_deserialize()?;

        log::debug!("pre-init configuration: {:#?}", cfg);
        Ok(cfg)
    }

    pub fn create_config_builder(&self) -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        log::debug!("Setting up configuration builder...");
        let mut builder = Config::builder();

        let mut layers = Vec::with_capacity(self.before_layers.len() + self.after_layers.len() + 1);
        for l in self.before_layers.iter().map(|x| Layer::from_layer(x.as_str())) {
            layers.push(l?);
        }
        layers.push(Layer::Base);
        for l in self.after_layers.iter().map(|x| Layer::from_layer(x.as_str())) {
            layers.push(l?);
        }

        for layer in layers {
            log::debug!("Adding layer: {:?}", layer);
            match layer {
                Layer::Base => {
                    builder = builder.add_source(File::from(Path::new(&self.root_file)));
                }
                Layer::Environment => {
                    builder = builder.add_source(Environment::new());
                }
                Layer::File(path) => {
                    builder = builder.add_source(File::from(Path::new(path)));
                }
                Layer::OptionalFile(path) => {
                    if Path::new(path).exists() {
                        log::info!("Adding optional config file {}...", path);
                        builder = builder.add_source(File::from(Path::new(path)));
                    } else {
                        log::debug!("Skipping missing optional config file {}", path);
                    }
                }
            }
        }

        // these properties cannot be altered wrt the core config
        builder = builder
            .set_override("stage", self.stage.clone())?
            .set_override("version", self.version.clone())?
            .set_override("rootFile", self.root_file.clone())?;

        Ok(builder)
    }
}
