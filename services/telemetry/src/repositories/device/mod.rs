mod device_error;
pub use self::device_error::*;
mod device_client;
pub use self::device_client::*;

#[cfg(test)]
mod mock_device;
#[cfg(test)]
pub use self::mock_device::*;
