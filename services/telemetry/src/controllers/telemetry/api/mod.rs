mod get_data;
pub use self::get_data::*;
