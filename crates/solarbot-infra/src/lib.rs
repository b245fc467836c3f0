pub mod logging;
pub mod web;
