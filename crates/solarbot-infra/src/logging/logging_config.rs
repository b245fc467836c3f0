use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogFormat {
    /// Single line, human readable output
    #[default]
    Compact,
    /// Multi line output with the span context
    Pretty,
    /// Newline delimited json, for log collectors
    Json,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    pub enable_console_log: bool,
    /// Filter directives in the `EnvFilter` syntax, ex. `info,solarbot_telemetry=debug`
    pub default_level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}
