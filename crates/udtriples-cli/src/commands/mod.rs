//! Command implementations.

pub mod config;
pub mod convert;
pub mod preview;

pub use self::config::execute_config;
pub use self::convert::execute_convert;
pub use self::preview::execute_preview;
