mod logging_config;
pub use self::logging_config::*;
mod logging_error;
pub use self::logging_error::*;
mod logging_service;
pub use self::logging_service::*;
