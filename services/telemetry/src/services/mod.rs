mod telemetry_reading;
pub use self::telemetry_reading::*;
mod field_profile;
pub use self::field_profile::*;
mod telemetry_simulator;
pub use self::telemetry_simulator::*;
mod telemetry_service;
pub use self::telemetry_service::*;
