use serde::Deserialize;
use solarbot_infra::{
    logging::LogFormat,
    web::{Environment, FeatureConfig, WebAppConfig, DEFAULT_PORT, DEFAULT_VERSION},
};
use solarbot_test::test;
use std::env;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Data {
    file_value: String,
    local_value: String,
    env_value: Option<String>,
    override_value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    some_data: Data,
}

impl FeatureConfig for Feature {
    const NAME: &'static str = "feature";
}

const CONFIG_ROOT: &str = "./tests/web_configs";

#[test]
fn test_config_with_env() {
    let cfg = config::Config::builder()
        .add_source(config::File::from_str(
            r#"{"fileValue": "from file", "localValue": "from file", "overrideValue": "from file"}"#,
            config::FileFormat::Json,
        ))
        .add_source(Environment::from_vars([
            ("SOLARBOT--OVERRIDE_VALUE", "from env"),
            ("SOLARBOT--ENV_VALUE", "from env"),
            ("OTHER--ENV_VALUE", "not ours"),
        ]))
        .build()
        .unwrap();
    log::info!("{cfg:#?}");
    let cfg = cfg.try_deserialize::<Data>().unwrap();
    log::debug!("{cfg:#?}");

    assert_eq!(cfg.file_value, "from file");
    assert_eq!(cfg.env_value.as_deref(), Some("from env"));
    assert_eq!(cfg.override_value, "from env");
}

#[test(serial = "env")]
fn test_web_config_with_layers() {
    env::set_var("SOLARBOT--SERVICE--PORT", "9000");
    env::set_var("SOLARBOT--LOGGING--ENABLE_CONSOLE_LOG", "false");
    env::set_var("SOLARBOT--FEATURE--SOME_DATA--OVERRIDE_VALUE", "from env");
    env::set_var("SOLARBOT--FEATURE--SOME_DATA--ENV_VALUE", "from env");

    let config = WebAppConfig::<Feature>::load("dev", Some(format!("{CONFIG_ROOT}/env.json").into()));

    env::remove_var("SOLARBOT--SERVICE--PORT");
    env::remove_var("SOLARBOT--LOGGING--ENABLE_CONSOLE_LOG");
    env::remove_var("SOLARBOT--FEATURE--SOME_DATA--OVERRIDE_VALUE");
    env::remove_var("SOLARBOT--FEATURE--SOME_DATA--ENV_VALUE");

    let config = config.unwrap();
    assert_eq!(config.core.stage, "dev");
    assert_eq!(config.core.version, DEFAULT_VERSION);
    assert_eq!(config.service.port, 9000);
    assert!(!config.logging.enable_console_log);
    assert_eq!(config.service.allowed_origins, vec![".*".to_string()]);
    assert_eq!(config.feature.some_data.file_value, "from file");
    assert_eq!(config.feature.some_data.local_value, "from local");
    assert_eq!(config.feature.some_data.override_value, "from env");
    assert_eq!(config.feature.some_data.env_value.as_deref(), Some("from env"));
}

#[test(serial = "env")]
fn test_web_config_defaults() {
    // no environment layer, the variable must be ignored
    env::set_var("SOLARBOT--FEATURE--SOME_DATA--ENV_VALUE", "from env");
    let config = WebAppConfig::<Feature>::load("test", Some(format!("{CONFIG_ROOT}/minimal.json").into()));
    env::remove_var("SOLARBOT--FEATURE--SOME_DATA--ENV_VALUE");

    let config = config.unwrap();
    assert_eq!(config.core.stage, "test");
    assert!(config.core.before_layers.is_empty());
    assert!(config.core.after_layers.is_empty());
    assert_eq!(config.service.port, DEFAULT_PORT);
    assert_eq!(config.service.allowed_origins, vec![".*".to_string()]);
    assert!(!config.logging.enable_console_log);
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.feature.some_data.env_value, None);
}

#[test]
fn test_web_config_missing_root_file() {
    let config = WebAppConfig::<Feature>::load("test", Some(format!("{CONFIG_ROOT}/not_found.json").into()));
    assert!(config.is_err());
}

#[derive(Debug, Deserialize)]
struct OtherFeature {}

impl FeatureConfig for OtherFeature {
    const NAME: &'static str = "other";
}

#[test]
fn test_web_config_missing_feature_section() {
    let config = WebAppConfig::<OtherFeature>::load("test", Some(format!("{CONFIG_ROOT}/minimal.json").into()));
    let err = config.unwrap_err();
    assert!(err.to_string().contains("other"), "{err}");
}
