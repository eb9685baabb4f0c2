pub mod constants;
pub mod logging;

pub use constants::*;
pub use logging::{resolve_log_level, setup_logging};
