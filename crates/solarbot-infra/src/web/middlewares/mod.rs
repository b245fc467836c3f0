mod powered_by;
pub use self::powered_by::*;
