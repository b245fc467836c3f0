use config::{ConfigError, Map, Source, Value, ValueKind};
use std::env;

pub const ENV_PREFIX: &str = "solarbot--";
pub const ENV_SEPARATOR: &str = "--";

/// Configuration source reading the `SOLARBOT--` prefixed environment variables.
///
/// Nesting is given by the `--` separator and each `snake_case` segment is converted into a `camelCase` key,
/// ex. `SOLARBOT--LOGGING--DEFAULT_LEVEL` sets `logging.defaultLevel`.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: Option<Vec<(String, String)>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed set of variables instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    fn convert_key_case(key: &str) -> String {
        key.split('_')
            .enumerate()
            .map(|(i, s)| {
                if i == 0 {
                    s.to_lowercase()
                } else {
                    let mut chars = s.chars();
                    chars
                        .next()
                        .map(|c| c.to_uppercase().collect::<String>())
                        .unwrap_or_default()
                        + &chars.as_str().to_lowercase()
                }
            })
            .collect()
    }

    /// Map an environment variable name into a config key, `None` if the variable is not ours.
    pub fn config_key(env_key: &str) -> Option<String> {
        let key = env_key.to_lowercase();
        let key = key.strip_prefix(ENV_PREFIX)?;
        if key.is_empty() {
            return None;
        }

        Some(
            key.split(ENV_SEPARATOR)
                .map(Self::convert_key_case)
                .collect::<Vec<_>>()
                .join("."),
        )
    }
}

impl Source for Environment {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let uri: String = "environment".into();

        let vars = match &self.vars {
            Some(vars) => vars.clone(),
            None => env::vars().collect(),
        };

        let mut m = Map::new();
        for (env_key, value) in vars {
            if let Some(key) = Self::config_key(&env_key) {
                log::debug!("Reading env {} as {}...", env_key, key);
                m.insert(key, Value::new(Some(&uri), ValueKind::String(value)));
            }
        }

        Ok(m)
    }
}
